// src/analysis/result.rs
use serde::{Serialize, Deserialize};

/// Maximum value of the overall score.
pub const OVERALL_MAX: u32 = 100;

// Response body of POST /analyze-code. The service owns the scoring; this
// side only deserializes and renders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    pub overall_score: u32,
    pub breakdown: Breakdown,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

// Per-category scores. The category set and maxima are fixed by the service
// contract; the maxima sum to 100.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Breakdown {
    pub naming: u32,
    pub modularity: u32,
    pub comments: u32,
    pub formatting: u32,
    pub reusability: u32,
    pub best_practices: u32,
}

impl Breakdown {
    /// Display rows in fixed order: (label, score, max).
    pub fn rows(&self) -> [(&'static str, u32, u32); 6] {
        [
            ("Naming", self.naming, 10),
            ("Modularity", self.modularity, 20),
            ("Comments", self.comments, 20),
            ("Formatting", self.formatting, 15),
            ("Reusability", self.reusability, 15),
            ("Best Practices", self.best_practices, 20),
        ]
    }
}

// Color bucket for a score relative to its maximum. Shared by the overall
// score and every category gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Success,
    Warning,
    Danger,
}

impl ScoreBand {
    /// >= 80% of max is Success, >= 60% is Warning, anything below is Danger.
    pub fn for_score(score: u32, max: u32) -> Self {
        // Integer comparison keeps the 80%/60% boundaries exact.
        let scaled = score as u64 * 100;
        if scaled >= max as u64 * 80 {
            ScoreBand::Success
        } else if scaled >= max as u64 * 60 {
            ScoreBand::Warning
        } else {
            ScoreBand::Danger
        }
    }
}
