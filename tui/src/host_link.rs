use semdex_protocol::HostRequest;
use tokio::sync::mpsc::UnboundedSender;

/// Fire-and-forget request channel to the host process.
///
/// `post` never blocks and observes no reply. There is no
/// request/response correlation: any effect of a request arrives later
/// as an unsolicited `ProgressUpdate` push, fully independent of the
/// request that may have caused it. Once sent, a request cannot be
/// retracted.
#[derive(Clone)]
pub(crate) struct HostMessenger {
    host_tx: UnboundedSender<HostRequest>,
}

impl HostMessenger {
    pub(crate) fn new(host_tx: UnboundedSender<HostRequest>) -> Self {
        Self { host_tx }
    }

    /// At-most-once delivery per call; a closed channel drops the
    /// request.
    pub(crate) fn post(&self, request: HostRequest) {
        if let Err(e) = self.host_tx.send(request) {
            tracing::error!("failed to post request to host: {e}");
        }
    }
}
