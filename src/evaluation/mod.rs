//! Route-cost accounting shared by both optimizers.

mod cost;

pub use cost::{total_distance, total_duration, COLLECTION_TIME_SECS};
