use serde::Serialize;

use crate::bounding_box::Detection;
use crate::labels::ExitClass;

/// Raw score treated as a perfect result: two well-lit exit signs at full
/// confidence.
pub const SCORE_BASELINE: f32 = 2.0;

/// Normalized score at or above which the environment is considered safe.
pub const SAFE_THRESHOLD: f32 = 0.8;

/// Normalized score at or above which the environment warrants caution.
pub const CAUTION_THRESHOLD: f32 = 0.5;

/// Discrete safety verdict derived from the normalized score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyLevel {
    /// Adequate exit signage is visible.
    Safe,
    /// Exit signage is limited or poorly lit.
    Caution,
    /// Exit signage is insufficient.
    Unsafe,
}

impl SafetyLevel {
    /// Map a normalized score to a safety level.
    pub fn from_score(score: f32) -> Self {
        if score >= SAFE_THRESHOLD {
            SafetyLevel::Safe
        } else if score >= CAUTION_THRESHOLD {
            SafetyLevel::Caution
        } else {
            SafetyLevel::Unsafe
        }
    }

    /// Human-readable recommendation for this level.
    pub fn recommendation(&self) -> &'static str {
        match self {
            SafetyLevel::Safe => "Environment appears safe with adequate exit signage.",
            SafetyLevel::Caution => "Exercise caution. Limited or poorly lit exit signs detected.",
            SafetyLevel::Unsafe => "Unsafe environment. Insufficient exit signage detected.",
        }
    }
}

impl std::fmt::Display for SafetyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SafetyLevel::Safe => "safe",
                SafetyLevel::Caution => "caution",
                SafetyLevel::Unsafe => "unsafe",
            }
        )
    }
}

/// Safety assessment for a single image.
#[derive(Debug, Clone, Serialize)]
pub struct SafetyAssessment {
    /// Normalized safety score, clamped to 0..=1.
    pub score: f32,
    /// Discrete safety level derived from the score.
    pub level: SafetyLevel,
    /// Human-readable recommendation for the level.
    pub recommendation: &'static str,
    /// Detections that survived suppression.
    pub detections: Vec<Detection>,
    /// Number of lit exit signs among the detections.
    pub lit_signs: usize,
    /// Number of unlit exit signs among the detections.
    pub unlit_signs: usize,
    /// Number of general exit detections without a known lighting state.
    pub general_exits: usize,
}

/// Score suppressed detections into a safety assessment.
///
/// Each detection contributes its class weight times its confidence; the sum
/// is normalized against [`SCORE_BASELINE`] and clamped to 0..=1. An empty
/// detection list is not an error and scores 0.0, i.e. unsafe.
pub fn assess_detections(detections: Vec<Detection>) -> SafetyAssessment {
    let mut raw_score = 0.0;
    let mut lit_signs = 0;
    let mut unlit_signs = 0;
    let mut general_exits = 0;

    for detection in &detections {
        raw_score += detection.class.weight() * detection.confidence;
        match detection.class {
            ExitClass::LitExitSign => lit_signs += 1,
            ExitClass::UnlitExitSign => unlit_signs += 1,
            ExitClass::Exit => general_exits += 1,
        }
    }

    let score = (raw_score / SCORE_BASELINE).clamp(0.0, 1.0);
    let level = SafetyLevel::from_score(score);

    SafetyAssessment {
        score,
        level,
        recommendation: level.recommendation(),
        detections,
        lit_signs,
        unlit_signs,
        general_exits,
    }
}
