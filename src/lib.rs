// Library exports shared by the binary and integration consumers
pub mod classify;
pub mod cli;
pub mod error;
pub mod utils;

// Re-export commonly used types
pub use classify::{
    classify, Bucket, BucketDirs, BucketProgress, BucketTally, BucketTotals, Category,
    CategoryCounts, ClassifyConfig, ClassifyEngine, Dimensions, PlaceOutcome, PlacementSummary,
};
pub use error::SortError;
