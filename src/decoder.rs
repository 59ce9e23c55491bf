use crate::bounding_box::{BoundingBox, Detection};
use crate::labels::LabelSet;

/// Errors produced while decoding a raw model output buffer.
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    /// The raw output buffer does not match the declared row stride.
    #[error("invalid raw output shape: {len} values do not divide into rows of stride {stride}")]
    InvalidShape {
        /// Length of the raw output buffer.
        len: usize,
        /// Row stride the caller declared.
        stride: usize,
    },

    /// The model reported a class index outside the configured label set.
    #[error("class index {class_id} out of range for label set of {num_labels} classes")]
    ClassIndexOutOfRange {
        /// Winning class index reported by the model.
        class_id: usize,
        /// Number of classes in the configured label set.
        num_labels: usize,
    },
}

/// Decode a raw detection output buffer into detection candidates.
///
/// The buffer holds N rows of `row_stride` floats each, laid out as
/// `[cx, cy, w, h, objectness, class_score_0, ..]` with `row_stride = 5 + K`
/// for K class scores. Rows whose objectness or winning class score do not
/// exceed the confidence threshold are skipped; surviving rows become
/// [`Detection`]s with confidence = objectness x class score, in input order.
///
/// Fails with [`DecodeError::InvalidShape`] when the buffer does not divide
/// into rows, and with [`DecodeError::ClassIndexOutOfRange`] when a surviving
/// row selects a class the label set does not define. The latter means the
/// model and the configuration disagree and is never silently absorbed.
pub fn decode_predictions(
    output: &[f32],
    row_stride: usize,
    labels: &LabelSet,
    confidence_threshold: f32,
) -> Result<Vec<Detection>, DecodeError> {
    // A row is 4 box coordinates, objectness, and at least one class score.
    if row_stride < 6 || output.len() % row_stride != 0 {
        return Err(DecodeError::InvalidShape {
            len: output.len(),
            stride: row_stride,
        });
    }

    let mut detections = Vec::new();
    for row in output.chunks_exact(row_stride) {
        let objectness = row[4];
        if objectness <= confidence_threshold {
            continue;
        }

        let class_scores = &row[5..];
        let mut class_id = 0;
        for (index, score) in class_scores.iter().enumerate() {
            if *score > class_scores[class_id] {
                class_id = index;
            }
        }
        let class_confidence = class_scores[class_id];
        if class_confidence <= confidence_threshold {
            continue;
        }

        let class = labels
            .get(class_id)
            .ok_or(DecodeError::ClassIndexOutOfRange {
                class_id,
                num_labels: labels.len(),
            })?;

        detections.push(Detection {
            bbox: BoundingBox {
                cx: row[0],
                cy: row[1],
                w: row[2],
                h: row[3],
            },
            confidence: objectness * class_confidence,
            class_id,
            class,
        });
    }

    Ok(detections)
}
