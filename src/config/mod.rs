use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    pub score: ScoreWeights,
}

/// Scoring constants for the feed ranker.
///
/// Defaults reproduce the production formula; every value can be
/// overridden through a `SCORE_*` environment variable.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScoreWeights {
    /// Recency score of a brand-new post
    pub recency_base: f64,
    /// Points lost per hour of age
    pub recency_decay_per_hour: f64,
    pub like_weight: f64,
    pub comment_weight: f64,
    /// Affinity boost for the viewer's own posts
    pub own_post_boost: f64,
    /// Affinity boost for posts by followed authors
    pub followed_author_boost: f64,
    /// Upper bound (exclusive) of the uniform jitter term
    pub jitter_max: f64,
    /// Cap on the content-length term
    pub content_cap: f64,
    /// Characters of title + body per content point
    pub content_divisor: f64,
    /// Flat bonus for posts with any media
    pub media_bonus: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            recency_base: 100.0,
            recency_decay_per_hour: 2.0,
            like_weight: 5.0,
            comment_weight: 3.0,
            own_post_boost: 20.0,
            followed_author_boost: 50.0,
            jitter_max: 10.0,
            content_cap: 20.0,
            content_divisor: 10.0,
            media_bonus: 15.0,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();

        Ok(Config {
            score: ScoreWeights {
                recency_base: env::var("SCORE_RECENCY_BASE")
                    .unwrap_or_else(|_| "100".to_string())
                    .parse()
                    .expect("SCORE_RECENCY_BASE must be a valid f64"),
                recency_decay_per_hour: env::var("SCORE_RECENCY_DECAY_PER_HOUR")
                    .unwrap_or_else(|_| "2".to_string())
                    .parse()
                    .expect("SCORE_RECENCY_DECAY_PER_HOUR must be a valid f64"),
                like_weight: env::var("SCORE_LIKE_WEIGHT")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .expect("SCORE_LIKE_WEIGHT must be a valid f64"),
                comment_weight: env::var("SCORE_COMMENT_WEIGHT")
                    .unwrap_or_else(|_| "3".to_string())
                    .parse()
                    .expect("SCORE_COMMENT_WEIGHT must be a valid f64"),
                own_post_boost: env::var("SCORE_OWN_POST_BOOST")
                    .unwrap_or_else(|_| "20".to_string())
                    .parse()
                    .expect("SCORE_OWN_POST_BOOST must be a valid f64"),
                followed_author_boost: env::var("SCORE_FOLLOWED_AUTHOR_BOOST")
                    .unwrap_or_else(|_| "50".to_string())
                    .parse()
                    .expect("SCORE_FOLLOWED_AUTHOR_BOOST must be a valid f64"),
                jitter_max: env::var("SCORE_JITTER_MAX")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .expect("SCORE_JITTER_MAX must be a valid f64"),
                content_cap: env::var("SCORE_CONTENT_CAP")
                    .unwrap_or_else(|_| "20".to_string())
                    .parse()
                    .expect("SCORE_CONTENT_CAP must be a valid f64"),
                content_divisor: env::var("SCORE_CONTENT_DIVISOR")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .expect("SCORE_CONTENT_DIVISOR must be a valid f64"),
                media_bonus: env::var("SCORE_MEDIA_BONUS")
                    .unwrap_or_else(|_| "15".to_string())
                    .parse()
                    .expect("SCORE_MEDIA_BONUS must be a valid f64"),
            },
        })
    }
}
