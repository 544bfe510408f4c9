use serde::Deserialize;
use serde::Serialize;

/// Outbound notification from the indicator to the host.
///
/// Delivery is fire-and-forget and at-most-once per call; any effect
/// surfaces later as an independent [`crate::ProgressUpdate`] push.
/// The `method` strings below are the contract other components must
/// honor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", content = "params")]
pub enum HostRequest {
    /// Sent exactly once per indicator lifetime; asks the host to
    /// replay its current progress state in case the UI attached after
    /// indexing already started.
    #[serde(rename = "index/indexingProgressBarInitialized")]
    IndexingProgressBarInitialized,
    /// Request a pause (`true`) or resume (`false`) transition.
    #[serde(rename = "index/setPaused")]
    SetPaused(bool),
    /// Request a fresh indexing pass, optionally clearing existing
    /// index data first.
    #[serde(rename = "index/forceReIndex")]
    #[serde(rename_all = "camelCase")]
    ForceReIndex {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        should_clear_indexes: Option<bool>,
    },
}

impl HostRequest {
    /// Plain re-index request with no payload.
    pub fn force_re_index() -> Self {
        Self::ForceReIndex {
            should_clear_indexes: None,
        }
    }

    /// Destructive re-index request: clear existing index data first.
    pub fn force_clear_re_index() -> Self {
        Self::ForceReIndex {
            should_clear_indexes: Some(true),
        }
    }
}
