use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::models::Notice;

/// Port for the part of the page that shows one record kind.
///
/// A region holds two things: its content (the rendered list, a placeholder
/// or an error message) and a stack of transient notices shown above it.
#[async_trait]
pub trait DisplayRegion: Send + Sync {
    /// Replace the whole content with `html`.
    async fn replace_content(&self, html: String);

    /// Show a notice above everything already in the region.
    async fn prepend_notice(&self, notice: Notice);

    /// Remove a notice. Unknown ids are ignored.
    async fn dismiss_notice(&self, id: Uuid);
}
