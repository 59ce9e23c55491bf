#![deny(missing_docs)]

//! Exit-sign safety assessment in Rust
//!
//! This crate turns the raw output of a YOLO-style exit-sign detection model
//! into a discrete safety verdict: it decodes the raw buffer into detections,
//! suppresses overlapping duplicates, and scores the survivors into a
//! Safe/Caution/Unsafe assessment. Model loading and inference stay with the
//! caller; this crate only consumes the flat output buffer.
//!
//! # Examples
//!
//! ```
//! use exit_safety::{SafetyLevel, SafetyPipeline, SafetyPipelineConfig};
//!
//! let pipeline = SafetyPipeline::new(SafetyPipelineConfig::default());
//!
//! // One row of model output: box, objectness, then per-class scores for
//! // exit, lit_exit_sign, unlit_exit_sign.
//! let raw = [0.5, 0.5, 0.2, 0.3, 0.9, 0.0, 0.95, 0.0];
//!
//! let assessment = pipeline.assess(&raw, 8).expect("valid output shape");
//! assert_eq!(assessment.lit_signs, 1);
//! assert_eq!(assessment.level, SafetyLevel::Unsafe);
//! println!("{}: {}", assessment.level, assessment.recommendation);
//! ```

/// Bounding box module with non-maximum suppression
mod bounding_box;

/// Raw model output decoding
mod decoder;

/// Class labels and their scoring weights
mod labels;

/// Safety pipeline high level interface
mod pipeline;

/// Safety scoring policy
mod safety;

pub use bounding_box::{BoundingBox, Detection, iou, non_maximum_suppression};
pub use decoder::{DecodeError, decode_predictions};
pub use labels::{ExitClass, LabelSet};
pub use pipeline::{SafetyPipeline, SafetyPipelineConfig};
pub use safety::{
    CAUTION_THRESHOLD, SAFE_THRESHOLD, SCORE_BASELINE, SafetyAssessment, SafetyLevel,
    assess_detections,
};
