//! The relief board: four collection controllers wired up once.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::application::collection_sync::CollectionSync;
use crate::application::record_kind::{Alerts, Helplines, SafeLocations, Volunteers};
use crate::domain::errors::SyncResult;
use crate::domain::ports::{CollectionApi, DisplayRegion};

/// One display region per record kind.
#[derive(Clone)]
pub struct BoardRegions {
    pub alerts: Arc<dyn DisplayRegion>,
    pub helplines: Arc<dyn DisplayRegion>,
    pub safe_locations: Arc<dyn DisplayRegion>,
    pub volunteers: Arc<dyn DisplayRegion>,
}

/// Outcome of loading every region. Each kind succeeds or fails on its own.
#[derive(Debug)]
pub struct BoardReport {
    pub alerts: SyncResult<usize>,
    pub helplines: SyncResult<usize>,
    pub safe_locations: SyncResult<usize>,
    pub volunteers: SyncResult<usize>,
}

impl BoardReport {
    /// `(kind, result)` pairs in page order.
    pub fn entries(&self) -> [(&'static str, &SyncResult<usize>); 4] {
        [
            ("alerts", &self.alerts),
            ("helplines", &self.helplines),
            ("safe-locations", &self.safe_locations),
            ("volunteers", &self.volunteers),
        ]
    }

    pub fn failures(&self) -> usize {
        self.entries()
            .iter()
            .filter(|(_, result)| result.is_err())
            .count()
    }
}

/// The four controllers of the page, bound to their regions.
pub struct ReliefBoard {
    alerts: CollectionSync<Alerts>,
    helplines: CollectionSync<Helplines>,
    safe_locations: CollectionSync<SafeLocations>,
    volunteers: CollectionSync<Volunteers>,
}

impl ReliefBoard {
    /// Bind one controller per kind. Call once at startup.
    pub fn init(
        api: Arc<dyn CollectionApi>,
        regions: BoardRegions,
        dismiss_after: Duration,
    ) -> Self {
        Self {
            alerts: CollectionSync::new(Arc::clone(&api), regions.alerts, dismiss_after),
            helplines: CollectionSync::new(Arc::clone(&api), regions.helplines, dismiss_after),
            safe_locations: CollectionSync::new(
                Arc::clone(&api),
                regions.safe_locations,
                dismiss_after,
            ),
            volunteers: CollectionSync::new(api, regions.volunteers, dismiss_after),
        }
    }

    /// Run all four read paths concurrently.
    pub async fn load_all(&self) -> BoardReport {
        let (alerts, helplines, safe_locations, volunteers) = tokio::join!(
            self.alerts.load(),
            self.helplines.load(),
            self.safe_locations.load(),
            self.volunteers.load(),
        );
        let report = BoardReport {
            alerts,
            helplines,
            safe_locations,
            volunteers,
        };
        info!(failures = report.failures(), "board loaded");
        report
    }

    pub const fn alerts(&self) -> &CollectionSync<Alerts> {
        &self.alerts
    }

    pub const fn helplines(&self) -> &CollectionSync<Helplines> {
        &self.helplines
    }

    pub const fn safe_locations(&self) -> &CollectionSync<SafeLocations> {
        &self.safe_locations
    }

    pub const fn volunteers(&self) -> &CollectionSync<Volunteers> {
        &self.volunteers
    }
}
