use serde::{Deserialize, Serialize};

/// Reason a render request was enqueued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidationTopic {
    Series,
    Flags,
    Surface,
}

/// Dirty flag plus request counters for the repaint-on-mutation contract.
///
/// Every mutation enqueues exactly one request. Requests coalesce: any number
/// of pending requests is satisfied by a single render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderRequests {
    pending: bool,
    last_topic: Option<InvalidationTopic>,
    requested_total: u64,
    rendered_total: u64,
}

impl RenderRequests {
    pub fn request(&mut self, topic: InvalidationTopic) {
        self.pending = true;
        self.last_topic = Some(topic);
        self.requested_total += 1;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    #[must_use]
    pub fn last_topic(&self) -> Option<InvalidationTopic> {
        self.last_topic
    }

    /// Total requests enqueued since creation.
    #[must_use]
    pub fn requested_total(&self) -> u64 {
        self.requested_total
    }

    /// Total render passes completed since creation.
    #[must_use]
    pub fn rendered_total(&self) -> u64 {
        self.rendered_total
    }

    pub(crate) fn mark_rendered(&mut self) {
        self.pending = false;
        self.rendered_total += 1;
    }
}
