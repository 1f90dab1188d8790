//! Short link entity.

/// A short id bound to the URL it redirects to.
///
/// Created once by the allocation service and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub id: String,
    pub target: String,
}

impl ShortLink {
    pub fn new(id: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            target: target.into(),
        }
    }

    /// Builds the public short URL under `base_url`.
    pub fn short_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.id)
    }
}
