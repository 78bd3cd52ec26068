//! In-memory display region.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::models::Notice;
use crate::domain::ports::DisplayRegion;
use crate::render::render_notice;

#[derive(Debug, Default)]
struct RegionState {
    /// Newest first
    notices: Vec<Notice>,
    content: String,
}

/// A display region kept in memory, rendered on demand.
#[derive(Debug, Default)]
pub struct MemoryRegion {
    state: RwLock<RegionState>,
}

impl MemoryRegion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content, without notices.
    pub async fn content(&self) -> String {
        self.state.read().await.content.clone()
    }

    /// Notices currently shown, newest first.
    pub async fn notices(&self) -> Vec<Notice> {
        self.state.read().await.notices.clone()
    }

    /// Full region markup: notices followed by content.
    pub async fn render(&self) -> String {
        let state = self.state.read().await;
        let mut html: String = state
            .notices
            .iter()
            .map(|notice| format!("{}\n", render_notice(notice)))
            .collect();
        html.push_str(&state.content);
        html
    }
}

#[async_trait]
impl DisplayRegion for MemoryRegion {
    async fn replace_content(&self, html: String) {
        self.state.write().await.content = html;
    }

    async fn prepend_notice(&self, notice: Notice) {
        self.state.write().await.notices.insert(0, notice);
    }

    async fn dismiss_notice(&self, id: Uuid) {
        self.state.write().await.notices.retain(|notice| notice.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_notices_stack_newest_first() {
        let region = MemoryRegion::new();
        region.replace_content("<p>list</p>".to_string()).await;

        let first = Notice::success("first");
        let second = Notice::error("second");
        region.prepend_notice(first.clone()).await;
        region.prepend_notice(second.clone()).await;

        assert_eq!(
            region.render().await,
            "<div class=\"error\">second</div>\n<div class=\"success\">first</div>\n<p>list</p>"
        );

        region.dismiss_notice(second.id).await;
        region.dismiss_notice(Uuid::new_v4()).await;
        assert_eq!(region.notices().await, vec![first]);
        assert_eq!(region.content().await, "<p>list</p>");
    }

    #[tokio::test]
    async fn test_replace_content_keeps_notices() {
        let region = MemoryRegion::new();
        region.prepend_notice(Notice::success("saved")).await;
        region.replace_content("new".to_string()).await;
        assert_eq!(region.notices().await.len(), 1);
        assert_eq!(region.content().await, "new");
    }
}
