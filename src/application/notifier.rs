//! Transient notices with timed dismissal.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::domain::models::Notice;
use crate::domain::ports::DisplayRegion;

/// How long a notice stays visible unless configured otherwise.
pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Shows notices at the top of one region and removes each after a delay.
#[derive(Clone)]
pub struct Notifier {
    region: Arc<dyn DisplayRegion>,
    dismiss_after: Duration,
}

impl Notifier {
    pub fn new(region: Arc<dyn DisplayRegion>, dismiss_after: Duration) -> Self {
        Self {
            region,
            dismiss_after,
        }
    }

    pub const fn dismiss_after(&self) -> Duration {
        self.dismiss_after
    }

    /// Prepend `notice` to the region and schedule its removal.
    ///
    /// The returned handle completes once the notice is gone.
    pub async fn show(&self, notice: Notice) -> JoinHandle<()> {
        let id = notice.id;
        self.region.prepend_notice(notice).await;

        let region = Arc::clone(&self.region);
        let delay = self.dismiss_after;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            region.dismiss_notice(id).await;
            debug!(notice_id = %id, "notice dismissed");
        })
    }
}
