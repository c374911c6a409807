use crate::KeyTranscoder;
use serde_json::{Map, Value};

/// Rewrites the keys of a resource's `links` object.
pub trait LinkNormalizer: Send + Sync {
    fn normalize_links(&self, hash: &Map<String, Value>, keys: &dyn KeyTranscoder)
    -> Map<String, Value>;
}

/// Passes every link name through [`KeyTranscoder::key_for_link`].
///
/// A resource without a `links` object is returned unchanged. When two wire
/// names map to the same key, the one appearing later in the payload wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct CamelCaseLinks;

impl LinkNormalizer for CamelCaseLinks {
    fn normalize_links(
        &self,
        hash: &Map<String, Value>,
        keys: &dyn KeyTranscoder,
    ) -> Map<String, Value> {
        let mut out = hash.clone();
        if let Some(Value::Object(links)) = out.get_mut("links") {
            let renamed: Map<String, Value> = links
                .iter()
                .map(|(name, url)| (keys.key_for_link(name), url.clone()))
                .collect();
            *links = renamed;
        }
        out
    }
}
