// src/analysis/mod.rs
pub mod result;

// Re-export commonly used types
pub use result::{AnalysisResult, Breakdown, ScoreBand, OVERALL_MAX};
