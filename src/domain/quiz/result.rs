//! Final score summary for a completed quiz.

use serde::{Deserialize, Serialize};

/// Performance band for a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    /// 100%.
    Perfect,
    /// 80% and above.
    Great,
    /// 60% and above.
    Good,
    KeepLearning,
}

impl Grade {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            100.. => Grade::Perfect,
            80..=99 => Grade::Great,
            60..=79 => Grade::Good,
            _ => Grade::KeepLearning,
        }
    }

    /// Translation key for the result message of this grade.
    pub fn message_key(&self) -> &'static str {
        match self {
            Grade::Perfect => "result.perfect",
            Grade::Great => "result.great",
            Grade::Good => "result.good",
            Grade::KeepLearning => "result.keepLearning",
        }
    }
}

/// Score summary shown once a session completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
    /// Rounded to the nearest whole percent.
    pub percentage: u32,
    pub grade: Grade,
}

impl QuizResult {
    pub fn new(score: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            ((score as f64 / total as f64) * 100.0).round() as u32
        };
        Self {
            score,
            total,
            percentage,
            grade: Grade::from_percentage(percentage),
        }
    }
}
