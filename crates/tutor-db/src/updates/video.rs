//! Video update builder.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct VideoUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

pub struct VideoUpdateBuilder(VideoUpdate);

impl VideoUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(VideoUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn video_url(mut self, video_url: impl Into<String>) -> Self {
        self.0.video_url = Some(video_url.into());
        self
    }

    #[must_use]
    pub fn build(self) -> VideoUpdate {
        self.0
    }
}
