// Service exports
pub mod bootstrap;
pub mod dataset;

pub use bootstrap::{ensure_dataset, SAMPLE_DATA};
pub use dataset::{Dataset, DatasetError};
