/// Embeddings provider that only works in hosts with a local inference
/// runtime; limited environments report it as unsupported.
pub(crate) const BUILTIN_EMBEDDINGS_PROVIDER: &str = "builtin-local";

pub(crate) const UNSUPPORTED_PROVIDER_MESSAGE: &str =
    "The built-in local embeddings provider is not supported in this environment. \
     Select a different embeddings provider to enable indexing.";

/// Environment facts the indicator consults but does not own.
#[derive(Debug, Clone)]
pub(crate) struct IndicatorContext {
    /// Whether the host can run the confirmation-gated destructive
    /// rebuild flow. When false, a corrupted-index failure falls back
    /// to a plain `forceReIndex` with no prompt and no clearing.
    pub supports_rebuild_confirmation: bool,
    /// Whether the host environment can run the built-in local
    /// embeddings provider.
    pub supports_builtin_embeddings: bool,
    /// Identifier of the active embeddings provider, when known.
    pub embeddings_provider: Option<String>,
}

impl Default for IndicatorContext {
    fn default() -> Self {
        Self {
            supports_rebuild_confirmation: true,
            supports_builtin_embeddings: true,
            embeddings_provider: None,
        }
    }
}

impl IndicatorContext {
    /// Tooltip for the Failed display: the host-reported description,
    /// except for the one provider/environment combination we can
    /// explain better than the host does.
    pub(crate) fn failed_tooltip(&self, desc: &str) -> String {
        if !self.supports_builtin_embeddings
            && self.embeddings_provider.as_deref() == Some(BUILTIN_EMBEDDINGS_PROVIDER)
        {
            return UNSUPPORTED_PROVIDER_MESSAGE.to_string();
        }
        desc.to_string()
    }
}
