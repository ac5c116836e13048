pub mod feed;

pub use feed::FeedRanker;
