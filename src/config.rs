use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::frame::{process_frame_with_tolerance, FrameContext, SelectionPolicy};
use crate::mapper::GazeCalibration;
use crate::rotation::ROTATION_TOLERANCE_PX;
use crate::types::{Detection, GazeVector};

/// Tunable knobs of the gaze pipeline, bundled for callers that want to keep
/// them in a JSON file. The core itself takes these values explicitly; this
/// layer is optional.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub calibration: GazeCalibration,
    pub rotation_tolerance_px: f32,
    pub selection: SelectionPolicy,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            calibration: GazeCalibration::default(),
            rotation_tolerance_px: ROTATION_TOLERANCE_PX,
            selection: SelectionPolicy::default(),
        }
    }
}

impl TrackerConfig {
    /// Loads a config file, falling back to defaults when the file is absent
    /// or unparsable. Missing fields take their default values.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!("config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        match serde_json::from_str::<TrackerConfig>(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!("error parsing {}: {e}. Using defaults", path.display());
                Ok(Self::default())
            }
        }
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Runs the gaze pipeline on one frame's detections with this config's
    /// calibration, tolerance, and selection policy.
    pub fn process_frame(
        &self,
        detections: &[Detection],
        ctx: &FrameContext,
    ) -> Option<GazeVector> {
        process_frame_with_tolerance(
            detections,
            ctx,
            &self.calibration,
            self.selection,
            self.rotation_tolerance_px,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_preserve_calibration_constants() {
        let config = TrackerConfig::default();
        assert_eq!(config.calibration.x_center, 0.335);
        assert_eq!(config.calibration.x_gain, 3.0);
        assert_eq!(config.calibration.y_center, 0.5);
        assert_eq!(config.calibration.y_gain, 2.0);
        assert_eq!(config.rotation_tolerance_px, 5.0);
        assert_eq!(config.selection, SelectionPolicy::LastDetection);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: TrackerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, TrackerConfig::default());

        let config: TrackerConfig =
            serde_json::from_str(r#"{"rotation_tolerance_px": 8.0}"#).unwrap();
        assert_eq!(config.rotation_tolerance_px, 8.0);
        assert_eq!(config.calibration, GazeCalibration::default());
    }

    #[test]
    fn round_trips_through_json() {
        let mut config = TrackerConfig::default();
        config.calibration.x_gain = 2.5;
        config.selection = SelectionPolicy::FirstDetection;

        let json = serde_json::to_string_pretty(&config).unwrap();
        let restored: TrackerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn load_from_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("irisgaze-no-such-config.json");
        let config = TrackerConfig::load_from(&path).unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn save_then_load_preserves_values() {
        let path = std::env::temp_dir().join("irisgaze-config-roundtrip.json");
        let mut config = TrackerConfig::default();
        config.rotation_tolerance_px = 7.5;
        config.save_to(&path).unwrap();

        let restored = TrackerConfig::load_from(&path).unwrap();
        assert_eq!(restored, config);
        let _ = std::fs::remove_file(&path);
    }
}
