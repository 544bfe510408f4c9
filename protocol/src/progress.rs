use serde::Deserialize;
use serde::Serialize;

/// Authoritative indexing phase as reported by the host.
///
/// Status strings the indicator does not recognize deserialize to
/// [`IndexingStatus::Unknown`] so a newer host cannot break an older
/// indicator; unknown statuses render nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexingStatus {
    Loading,
    Indexing,
    Paused,
    Done,
    Failed,
    Disabled,
    #[serde(other, skip_serializing)]
    Unknown,
}

impl IndexingStatus {
    /// Terminal statuses always win over a pending local pause intent.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed | Self::Disabled)
    }
}

/// A single progress snapshot pushed by the host.
///
/// Each update fully replaces the previous one on arrival; the
/// indicator keeps no history. `progress` is semantically in `[0, 1]`
/// but the sender does not clamp it, so consumers must.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    pub status: IndexingStatus,
    pub progress: f64,
    pub desc: String,
    /// Present only meaningfully with `status = failed`: the failure is
    /// attributable to index corruption and recovery requires a
    /// destructive rebuild.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_clear_indexes: Option<bool>,
}

impl Default for ProgressUpdate {
    fn default() -> Self {
        Self {
            status: IndexingStatus::Loading,
            progress: 0.0,
            desc: String::new(),
            should_clear_indexes: None,
        }
    }
}

impl ProgressUpdate {
    pub fn new(status: IndexingStatus, progress: f64, desc: impl Into<String>) -> Self {
        Self {
            status,
            progress,
            desc: desc.into(),
            should_clear_indexes: None,
        }
    }

    pub fn failed(desc: impl Into<String>, should_clear_indexes: bool) -> Self {
        Self {
            status: IndexingStatus::Failed,
            progress: 0.0,
            desc: desc.into(),
            should_clear_indexes: Some(should_clear_indexes),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn progress_update_uses_camel_case_wire_names() {
        let update = ProgressUpdate::failed("vector store corrupted", true);
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(
            value,
            json!({
                "status": "failed",
                "progress": 0.0,
                "desc": "vector store corrupted",
                "shouldClearIndexes": true,
            })
        );
    }

    #[test]
    fn corruption_flag_is_omitted_when_absent() {
        let update = ProgressUpdate::new(IndexingStatus::Indexing, 0.25, "embedding src/lib.rs");
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(
            value,
            json!({
                "status": "indexing",
                "progress": 0.25,
                "desc": "embedding src/lib.rs",
            })
        );
    }

    #[test]
    fn unrecognized_status_degrades_to_unknown() {
        let update: ProgressUpdate = serde_json::from_value(json!({
            "status": "cancelled",
            "progress": 0.5,
            "desc": "",
        }))
        .unwrap();
        assert_eq!(update.status, IndexingStatus::Unknown);
    }

    #[test]
    fn default_update_is_loading_at_zero() {
        let update = ProgressUpdate::default();
        assert_eq!(update.status, IndexingStatus::Loading);
        assert_eq!(update.progress, 0.0);
        assert_eq!(update.desc, "");
        assert_eq!(update.should_clear_indexes, None);
    }

    #[test]
    fn terminal_statuses() {
        assert!(IndexingStatus::Done.is_terminal());
        assert!(IndexingStatus::Failed.is_terminal());
        assert!(IndexingStatus::Disabled.is_terminal());
        assert!(!IndexingStatus::Indexing.is_terminal());
        assert!(!IndexingStatus::Paused.is_terminal());
        assert!(!IndexingStatus::Loading.is_terminal());
    }
}
