use serde::Serialize;

use crate::labels::ExitClass;

/// Bounding box in center format, as emitted by YOLO-style detection heads.
///
/// Coordinates may be normalized or pixel scale; intersection-over-union and
/// suppression are scale-agnostic as long as all boxes share one scale.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BoundingBox {
    /// Center x coordinate of the bounding box.
    pub cx: f32,
    /// Center y coordinate of the bounding box.
    pub cy: f32,
    /// Width of the bounding box.
    pub w: f32,
    /// Height of the bounding box.
    pub h: f32,
}

impl BoundingBox {
    /// Corner coordinates as (xmin, ymin, xmax, ymax).
    pub fn corners(&self) -> (f32, f32, f32, f32) {
        (
            self.cx - self.w / 2.0,
            self.cy - self.h / 2.0,
            self.cx + self.w / 2.0,
            self.cy + self.h / 2.0,
        )
    }

    /// Area of the bounding box.
    pub fn area(&self) -> f32 {
        self.w * self.h
    }
}

/// A single decoded detection.
///
/// Immutable once created; the decoder produces these and the safety scorer
/// consumes them.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Detection {
    /// Bounding box of the detection.
    pub bbox: BoundingBox,
    /// Combined confidence, product of objectness and the winning class score.
    pub confidence: f32,
    /// Index of the winning class in the label set.
    pub class_id: usize,
    /// Class of the detection.
    pub class: ExitClass,
}

/// Intersection over union of two center-format bounding boxes.
///
/// Returns 0.0 when the boxes do not overlap.
pub fn iou(b1: &BoundingBox, b2: &BoundingBox) -> f32 {
    let (b1_xmin, b1_ymin, b1_xmax, b1_ymax) = b1.corners();
    let (b2_xmin, b2_ymin, b2_xmax, b2_ymax) = b2.corners();
    let i_w = b1_xmax.min(b2_xmax) - b1_xmin.max(b2_xmin);
    let i_h = b1_ymax.min(b2_ymax) - b1_ymin.max(b2_ymin);
    if i_w <= 0.0 || i_h <= 0.0 {
        return 0.0;
    }
    let i_area = i_w * i_h;
    i_area / (b1.area() + b2.area() - i_area)
}

/// Non-maximum suppression for detections.
///
/// Sorts the candidates by descending confidence (stable, so equal confidences
/// keep their input order) and greedily keeps each candidate whose IoU with
/// every already-kept detection stays at or below the threshold. Suppression is
/// class-agnostic.
///
/// # Arguments
///
/// * `detections` - The candidate detections to filter.
/// * `threshold` - The IoU threshold above which a candidate is dropped.
pub fn non_maximum_suppression(mut detections: Vec<Detection>, threshold: f32) -> Vec<Detection> {
    detections.sort_by(|d1, d2| d2.confidence.total_cmp(&d1.confidence));

    let mut kept: Vec<Detection> = Vec::with_capacity(detections.len());
    for candidate in detections {
        let overlaps = kept
            .iter()
            .any(|prev| iou(&candidate.bbox, &prev.bbox) > threshold);
        if !overlaps {
            kept.push(candidate);
        }
    }
    kept
}
