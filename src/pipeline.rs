use crate::bounding_box::non_maximum_suppression;
use crate::decoder::{DecodeError, decode_predictions};
use crate::labels::LabelSet;
use crate::safety::{SafetyAssessment, assess_detections};

/// Safety pipeline configuration.
pub struct SafetyPipelineConfig {
    /// The confidence threshold for objectness and class scores.
    pub confidence_threshold: f32,
    /// The non-maximum suppression IoU threshold.
    pub iou_threshold: f32,
    /// The ordered class labels the model was trained with.
    pub labels: LabelSet,
}

/// Default configuration for the safety pipeline.
impl Default for SafetyPipelineConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.5,
            iou_threshold: 0.45,
            labels: LabelSet::default(),
        }
    }
}

/// Exit-sign safety pipeline.
///
/// Runs decode, non-maximum suppression, and safety scoring over a raw model
/// output buffer. Holds no mutable state, so one instance can serve calls for
/// different images concurrently.
pub struct SafetyPipeline {
    config: SafetyPipelineConfig,
}

impl SafetyPipeline {
    /// Create a new safety pipeline.
    pub fn new(config: SafetyPipelineConfig) -> Self {
        Self { config }
    }

    /// Assess one image's raw detection output.
    ///
    /// `output` is the flat model output buffer and `row_stride` its per-row
    /// length, 5 plus the number of class scores. See [`decode_predictions`]
    /// for the row layout and error conditions.
    pub fn assess(
        &self,
        output: &[f32],
        row_stride: usize,
    ) -> Result<SafetyAssessment, DecodeError> {
        let candidates = decode_predictions(
            output,
            row_stride,
            &self.config.labels,
            self.config.confidence_threshold,
        )?;
        tracing::debug!(candidates = candidates.len(), "decoded raw predictions");

        let kept = non_maximum_suppression(candidates, self.config.iou_threshold);
        tracing::debug!(kept = kept.len(), "suppressed overlapping detections");

        let assessment = assess_detections(kept);
        tracing::debug!(
            score = assessment.score,
            level = %assessment.level,
            "assessed exit signage"
        );
        Ok(assessment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::ExitClass;
    use crate::safety::SafetyLevel;

    // Stride-8 rows: cx, cy, w, h, objectness, then exit / lit / unlit scores.
    fn raw_output(rows: &[[f32; 8]]) -> Vec<f32> {
        rows.iter().flatten().copied().collect()
    }

    #[test]
    fn test_assess_end_to_end() {
        // Two lit signs in different corners plus a weaker duplicate of the
        // first that suppression should drop.
        let raw = raw_output(&[
            [0.25, 0.25, 0.2, 0.2, 1.0, 0.0, 1.0, 0.0],
            [0.26, 0.25, 0.2, 0.2, 0.9, 0.0, 0.8, 0.0],
            [0.75, 0.75, 0.2, 0.2, 1.0, 0.0, 1.0, 0.0],
        ]);

        let pipeline = SafetyPipeline::new(SafetyPipelineConfig::default());
        let assessment = pipeline.assess(&raw, 8).unwrap();

        assert_eq!(assessment.detections.len(), 2);
        assert_eq!(assessment.lit_signs, 2);
        assert_eq!(assessment.score, 1.0);
        assert_eq!(assessment.level, SafetyLevel::Safe);
        for detection in &assessment.detections {
            assert_eq!(detection.class, ExitClass::LitExitSign);
        }
    }

    #[test]
    fn test_assess_empty_scene() {
        // All rows below the confidence threshold.
        let raw = raw_output(&[[0.5, 0.5, 0.1, 0.1, 0.2, 0.1, 0.1, 0.1]]);

        let pipeline = SafetyPipeline::new(SafetyPipelineConfig::default());
        let assessment = pipeline.assess(&raw, 8).unwrap();

        assert!(assessment.detections.is_empty());
        assert_eq!(assessment.score, 0.0);
        assert_eq!(assessment.level, SafetyLevel::Unsafe);
    }

    #[test]
    fn test_assess_rejects_bad_shape() {
        let raw = [0.0f32; 7];
        let pipeline = SafetyPipeline::new(SafetyPipelineConfig::default());
        let err = pipeline.assess(&raw, 8).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidShape { .. }));
    }

    #[test]
    fn test_assess_survivors_respect_thresholds() {
        let raw = raw_output(&[
            [0.3, 0.3, 0.2, 0.2, 0.7, 0.9, 0.1, 0.0],
            [0.3, 0.31, 0.2, 0.2, 0.6, 0.0, 0.8, 0.1],
            [0.7, 0.7, 0.2, 0.2, 0.55, 0.0, 0.0, 0.6],
        ]);

        let config = SafetyPipelineConfig::default();
        let (conf_t, iou_t) = (config.confidence_threshold, config.iou_threshold);
        let pipeline = SafetyPipeline::new(config);
        let assessment = pipeline.assess(&raw, 8).unwrap();

        for detection in &assessment.detections {
            // Combined confidence is objectness x class score, both above the
            // threshold by construction.
            assert!(detection.confidence > conf_t * conf_t);
        }
        for (i, a) in assessment.detections.iter().enumerate() {
            for b in &assessment.detections[i + 1..] {
                assert!(crate::bounding_box::iou(&a.bbox, &b.bbox) <= iou_t);
            }
        }
    }
}
