pub mod batch;
pub mod measure;
pub mod nearest;
pub mod units;
