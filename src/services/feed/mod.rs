/// Feed Module
///
/// Orders a viewer's candidate posts most-relevant-first for the home
/// timeline.
///
/// # Workflow
/// 1. Caller fetches the candidate set and the viewer's following set
/// 2. Each post gets a weighted sum of recency, engagement, affinity,
///    content-length, media and jitter terms
/// 3. Posts are sorted descending by total score and handed back for
///    rendering
///
/// The computation is pure and synchronous; scores are recomputed on
/// every call since `now` and the jitter change between invocations.
pub mod scorer;

pub use scorer::FeedRanker;
