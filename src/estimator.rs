use anyhow::Result;
use image::{ImageBuffer, Rgb};

use crate::types::Detection;

/// Boundary to the face-geometry estimation collaborator.
///
/// Implementations own their model loading and backend selection; this crate
/// only consumes the per-frame detections they report. Zero detections is a
/// normal result, not an error.
pub trait FaceGeometryEstimator {
    fn name(&self) -> String;
    fn estimate(&mut self, frame: &ImageBuffer<Rgb<u8>, Vec<u8>>) -> Result<Vec<Detection>>;
}

/// Estimator that replays pre-seeded detections, for wiring and tests when
/// no detector backend is available.
pub struct StaticEstimator {
    detections: Vec<Detection>,
}

impl StaticEstimator {
    pub fn new(detections: Vec<Detection>) -> Self {
        Self { detections }
    }
}

impl FaceGeometryEstimator for StaticEstimator {
    fn name(&self) -> String {
        "Static (Pre-seeded Detections)".to_string()
    }

    fn estimate(&mut self, _frame: &ImageBuffer<Rgb<u8>, Vec<u8>>) -> Result<Vec<Detection>> {
        Ok(self.detections.clone())
    }
}
