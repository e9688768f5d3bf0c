//! Service layer - the detection pipeline and its ingestion paths
//!
//! Each module covers one pipeline stage. `analyze` ties them together;
//! `ingest` and `sample` handle CSV input and demo-data output.

pub mod aggregate;
pub mod analyze;
pub mod classify;
pub mod ingest;
pub mod normalize;
pub mod sample;
pub mod stats;

pub use analyze::{AnalysisService, AnalyzeOptions};
pub use classify::Classification;
pub use normalize::{NormalizedBatch, NormalizedRecord, ValidationMode};
pub use sample::{SampleBatch, SampleConfig};
pub use stats::PartitionStats;
