use ledgerline_inflector::{decamelize, pluralize, underscore};

/// Maps a model name to its REST collection path segment.
pub trait PathResolver: Send + Sync {
    fn path_for_type(&self, model_name: &str) -> String;
}

/// Underscored, pluralized collection paths.
///
/// ```
/// use ledgerline_adapter::{PathResolver, UnderscoredPaths};
/// assert_eq!(UnderscoredPaths.path_for_type("superUser"), "super_users");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UnderscoredPaths;

impl PathResolver for UnderscoredPaths {
    fn path_for_type(&self, model_name: &str) -> String {
        pluralize(&underscore(&decamelize(model_name)))
    }
}
