use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Candidate post for feed ranking.
///
/// Read-only snapshot assembled by the storage layer; the ranker never
/// mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    /// User ids that liked the post
    #[serde(default)]
    pub likes: HashSet<Uuid>,
    /// Associated comment ids
    #[serde(default)]
    pub comments: Vec<Uuid>,
    /// New-style media attachment
    #[serde(default)]
    pub media: Option<MediaAttachment>,
    /// Legacy single-image field, predates media attachments
    #[serde(default)]
    pub image: Option<String>,
    /// The schema permits several authors; only the first one counts for scoring
    #[serde(default)]
    pub author_ids: Vec<Uuid>,
}

impl Post {
    /// Effective author for scoring (first entry of the author list)
    pub fn author_id(&self) -> Option<Uuid> {
        self.author_ids.first().copied()
    }

    /// Whether the post carries any visual content, old or new style
    pub fn has_media(&self) -> bool {
        self.media.is_some() || self.image.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaAttachment {
    pub url: String,
    pub kind: MediaKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

/// The requesting user's ranking context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Viewer {
    pub id: Uuid,
    /// Ids the viewer follows; an absent list deserializes as empty
    #[serde(default)]
    pub following: HashSet<Uuid>,
}

/// Per-term score values for one post.
///
/// Also the payload of the per-post diagnostic log record.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreBreakdown {
    pub recency: f64,
    pub engagement: f64,
    pub affinity: f64,
    pub jitter: f64,
    pub content: f64,
    pub media_bonus: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.recency + self.engagement + self.affinity + self.jitter + self.content + self.media_bonus
    }
}
