//! Wire types shared by the indexing progress indicator and its host.
//!
//! The host is the source of truth for indexing state: it pushes
//! [`ProgressUpdate`] snapshots unsolicited, and the indicator sends
//! fire-and-forget [`HostRequest`] notifications. There is no
//! request/response correlation on this channel.

mod progress;
mod request;

pub use progress::IndexingStatus;
pub use progress::ProgressUpdate;
pub use request::HostRequest;
