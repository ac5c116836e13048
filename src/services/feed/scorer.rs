use std::cmp::Ordering;

use anyhow::Result;
use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::{debug, info};

use crate::config::ScoreWeights;
use crate::models::{Post, ScoreBreakdown, Viewer};

/// Feed ranking layer.
///
/// Produces a total reordering of the candidate set: same elements, no
/// insertions or removals. Missing optional fields (no media, no likes,
/// empty body) contribute zero to their term rather than erroring.
pub struct FeedRanker {
    weights: ScoreWeights,
}

impl Default for FeedRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedRanker {
    /// Create a ranker with the production scoring constants
    pub fn new() -> Self {
        Self {
            weights: ScoreWeights::default(),
        }
    }

    /// Create with custom weights
    pub fn with_weights(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// Rank candidate posts for a viewer, most relevant first.
    ///
    /// The RNG feeds the jitter term; callers wanting reproducible runs
    /// pass a seeded one.
    pub fn rank<R: Rng>(
        &self,
        posts: Vec<Post>,
        viewer: &Viewer,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<Vec<Post>> {
        if posts.is_empty() {
            return Ok(Vec::new());
        }

        let candidate_count = posts.len();

        let mut scored: Vec<(Post, f64)> = posts
            .into_iter()
            .map(|post| {
                let breakdown = self.score_post(&post, viewer, now, rng);
                let total = breakdown.total();

                let media_kind = post
                    .media
                    .as_ref()
                    .map(|m| m.kind.as_str())
                    .unwrap_or("none");

                debug!(
                    post_id = %post.id,
                    title = %post.title,
                    media_kind = media_kind,
                    recency = breakdown.recency,
                    engagement = breakdown.engagement,
                    affinity = breakdown.affinity,
                    jitter = breakdown.jitter,
                    content = breakdown.content,
                    media_bonus = breakdown.media_bonus,
                    total = total,
                    "Post scored"
                );

                (post, total)
            })
            .collect();

        // Sort by score descending
        // Note: NaN scores are treated as less than any valid score
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        info!(
            viewer_id = %viewer.id,
            candidate_count = candidate_count,
            "Feed ranking completed"
        );

        Ok(scored.into_iter().map(|(post, _)| post).collect())
    }

    /// Rank with wall-clock time and the thread-local RNG
    pub fn rank_now(&self, posts: Vec<Post>, viewer: &Viewer) -> Result<Vec<Post>> {
        self.rank(posts, viewer, Utc::now(), &mut rand::thread_rng())
    }

    /// Compute the per-term score breakdown for a single post
    pub fn score_post<R: Rng>(
        &self,
        post: &Post,
        viewer: &Viewer,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> ScoreBreakdown {
        let jitter = if self.weights.jitter_max > 0.0 {
            rng.gen_range(0.0..self.weights.jitter_max)
        } else {
            0.0
        };

        ScoreBreakdown {
            recency: self.recency_score(post.created_at, now),
            engagement: self.engagement_score(post),
            affinity: self.affinity_score(post, viewer),
            jitter,
            content: self.content_score(post),
            media_bonus: if post.has_media() {
                self.weights.media_bonus
            } else {
                0.0
            },
        }
    }

    /// Linear decay from the base score, floored at zero so old posts
    /// rank solely on their other signals
    fn recency_score(&self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
        let hours_since_post = (now - created_at).num_seconds() as f64 / 3600.0;
        (self.weights.recency_base - hours_since_post * self.weights.recency_decay_per_hour)
            .max(0.0)
    }

    /// Likes weigh more than comments as an engagement signal
    fn engagement_score(&self, post: &Post) -> f64 {
        post.likes.len() as f64 * self.weights.like_weight
            + post.comments.len() as f64 * self.weights.comment_weight
    }

    /// Self-authored posts get a small boost, followed authors a large
    /// one. The self check runs first, so following yourself still
    /// yields the own-post boost.
    fn affinity_score(&self, post: &Post, viewer: &Viewer) -> f64 {
        match post.author_id() {
            Some(author_id) if author_id == viewer.id => self.weights.own_post_boost,
            Some(author_id) if viewer.following.contains(&author_id) => {
                self.weights.followed_author_boost
            }
            _ => 0.0,
        }
    }

    /// Longer posts score marginally higher, capped
    fn content_score(&self, post: &Post) -> f64 {
        let content_length = (post.title.chars().count() + post.body.chars().count()) as f64;
        (content_length / self.weights.content_divisor).min(self.weights.content_cap)
    }
}
