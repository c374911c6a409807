use crate::{
    DefaultResponseHandler, PathResolver, ResponseHandler, UnderscoredPaths, ValidationAwareHandler,
};
use ledgerline_serializer::{
    CamelCaseLinks, CanonicalRelationships, KeyTranscoder, LinkNormalizer, RelationshipExtractor,
    RestSerializer, SnakeCaseKeys,
};
use std::sync::Arc;

/// The naming and response strategies a [`RestAdapter`](crate::RestAdapter) is built with.
///
/// The default bundle speaks the snake_case REST dialect: underscored plural
/// paths, `_id`/`_ids` relationship keys, camelized links and 422 validation
/// errors. Replace individual fields to adapt to another API.
#[derive(Clone)]
pub struct Conventions {
    pub paths: Arc<dyn PathResolver>,
    pub keys: Arc<dyn KeyTranscoder>,
    pub relationships: Arc<dyn RelationshipExtractor>,
    pub links: Arc<dyn LinkNormalizer>,
    pub responses: Arc<dyn ResponseHandler>,
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            paths: Arc::new(UnderscoredPaths),
            keys: Arc::new(SnakeCaseKeys),
            relationships: Arc::new(CanonicalRelationships),
            links: Arc::new(CamelCaseLinks),
            responses: Arc::new(ValidationAwareHandler::new(DefaultResponseHandler)),
        }
    }
}

impl std::fmt::Debug for Conventions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Conventions").finish_non_exhaustive()
    }
}

impl Conventions {
    /// A serializer sharing this bundle's key, relationship and link strategies.
    pub fn serializer(&self) -> RestSerializer {
        RestSerializer::new(
            Arc::clone(&self.keys),
            Arc::clone(&self.relationships),
            Arc::clone(&self.links),
        )
    }
}
