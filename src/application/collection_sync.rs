//! Collection sync controller.
//!
//! One instance per record kind. The read path replaces the kind's region
//! with a fresh rendering of the server's collection; the write path posts
//! a draft and, only once the server has accepted it, runs the read path
//! again.

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use crate::application::notifier::Notifier;
use crate::application::record_kind::RecordKind;
use crate::domain::errors::{SyncError, SyncResult};
use crate::domain::models::Notice;
use crate::domain::ports::{ApiError, CollectionApi, DisplayRegion, FormSource};
use crate::render::{render_load_error, render_placeholder};

/// Fetch one collection and decode every record. A single undecodable
/// record fails the whole fetch.
pub async fn fetch_records<K: RecordKind>(
    api: &dyn CollectionApi,
) -> Result<Vec<K::Record>, ApiError> {
    api.list(K::ENDPOINT)
        .await?
        .into_iter()
        .map(|value| serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string())))
        .collect()
}

/// Keeps one display region in step with one collection endpoint.
pub struct CollectionSync<K: RecordKind> {
    api: Arc<dyn CollectionApi>,
    region: Arc<dyn DisplayRegion>,
    notifier: Notifier,
    _kind: PhantomData<fn() -> K>,
}

impl<K: RecordKind> CollectionSync<K> {
    pub fn new(
        api: Arc<dyn CollectionApi>,
        region: Arc<dyn DisplayRegion>,
        dismiss_after: Duration,
    ) -> Self {
        let notifier = Notifier::new(Arc::clone(&region), dismiss_after);
        Self {
            api,
            region,
            notifier,
            _kind: PhantomData,
        }
    }

    /// The region this controller renders into.
    pub fn region(&self) -> &Arc<dyn DisplayRegion> {
        &self.region
    }

    /// Fetch and decode the collection without touching the region.
    pub async fn fetch(&self) -> Result<Vec<K::Record>, ApiError> {
        fetch_records::<K>(self.api.as_ref()).await
    }

    /// Read path: replace the region with the server's current collection.
    ///
    /// Returns the number of records rendered. On failure the region shows
    /// the kind's load error and the error is returned.
    #[instrument(skip_all, fields(kind = K::NAME))]
    pub async fn load(&self) -> SyncResult<usize> {
        match self.fetch().await {
            Ok(records) => {
                let html = if records.is_empty() {
                    render_placeholder(K::MESSAGES.empty)
                } else {
                    records.iter().map(K::render).collect()
                };
                self.region.replace_content(html).await;
                info!(count = records.len(), "collection loaded");
                Ok(records.len())
            }
            Err(source) => {
                warn!(error = %source, "collection load failed");
                self.region
                    .replace_content(render_load_error(K::MESSAGES.load_failed))
                    .await;
                Err(SyncError::LoadFailed {
                    kind: K::NAME,
                    source,
                })
            }
        }
    }

    /// Write path: post the form's current values as a new record.
    ///
    /// On success the form is reset and the collection reloaded. On failure
    /// the form keeps its values and nothing is reloaded.
    #[instrument(skip_all, fields(kind = K::NAME))]
    pub async fn submit(&self, form: &mut dyn FormSource) -> SyncResult<()> {
        let draft = K::extract(form);
        let body = match serde_json::to_value(&draft) {
            Ok(body) => body,
            Err(source) => {
                warn!(error = %source, "draft could not be encoded");
                self.notifier
                    .show(Notice::error(K::MESSAGES.submit_failed))
                    .await;
                return Err(SyncError::Encode {
                    kind: K::NAME,
                    source,
                });
            }
        };

        match self.api.create(K::ENDPOINT, &body).await {
            Ok(_) => {
                info!("record created");
                self.notifier
                    .show(Notice::success(K::MESSAGES.submitted))
                    .await;
                form.reset();
                // A failed refresh is already shown in the region.
                if let Err(err) = self.load().await {
                    debug!(error = %err, "refresh after create failed");
                }
                Ok(())
            }
            Err(source) => {
                warn!(error = %source, "create rejected");
                self.notifier
                    .show(Notice::error(K::MESSAGES.submit_failed))
                    .await;
                Err(SyncError::SubmitFailed {
                    kind: K::NAME,
                    source,
                })
            }
        }
    }
}
