//! Processing configuration values.
//!
//! Every pipeline invocation receives fresh copies of these values. Numeric
//! slider parameters are clamped into their documented ranges rather than
//! rejected, so a config loaded from an older settings store still works.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::PAPER_WIDTH;
use crate::error::ProcessError;

/// Neutral brightness (no shift).
pub const NEUTRAL_BRIGHTNESS: u8 = 128;
/// Neutral contrast in percent (factor 1.0).
pub const NEUTRAL_CONTRAST: u16 = 100;
/// Upper bound of the contrast slider in percent.
pub const MAX_CONTRAST: u16 = 200;
/// Default binarization threshold.
pub const DEFAULT_THRESHOLD: u8 = 128;
/// Default Bayer matrix and halftone cell size.
pub const DEFAULT_PATTERN_SIZE: u8 = 4;
/// Smallest Bayer matrix or halftone cell edge.
pub const MIN_PATTERN_SIZE: u8 = 2;
/// Largest Bayer matrix or halftone cell edge.
pub const MAX_PATTERN_SIZE: u8 = 16;
/// Largest preview upscale factor.
pub const MAX_PREVIEW_SCALE: u32 = 16;

/// Brightness, contrast and inversion applied before dithering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToneConfig {
    /// Brightness, 0..=255. 128 is neutral.
    pub brightness: u8,

    /// Contrast in percent, 0..=200. 100 is neutral.
    pub contrast: u16,

    /// Swap ink and paper after tone adjustment.
    pub invert: bool,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            brightness: NEUTRAL_BRIGHTNESS,
            contrast: NEUTRAL_CONTRAST,
            invert: false,
        }
    }
}

impl ToneConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set brightness.
    pub fn with_brightness(mut self, val: u8) -> Self {
        self.brightness = val;
        self
    }

    /// Builder: set contrast (clamped to 0..=200).
    pub fn with_contrast(mut self, val: u16) -> Self {
        self.contrast = val.min(MAX_CONTRAST);
        self
    }

    /// Builder: set invert flag.
    pub fn with_invert(mut self, val: bool) -> Self {
        self.invert = val;
        self
    }

    /// Copy with every field forced into its declared range.
    pub fn clamped(self) -> Self {
        Self {
            contrast: self.contrast.min(MAX_CONTRAST),
            ..self
        }
    }

    /// True when brightness and contrast leave channels untouched.
    pub fn is_neutral(&self) -> bool {
        self.brightness == NEUTRAL_BRIGHTNESS && self.contrast == NEUTRAL_CONTRAST
    }
}

/// Dithering algorithm selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DitherMethod {
    Threshold,
    #[default]
    FloydSteinberg,
    Atkinson,
    OrderedBayer,
    Halftone,
}

impl DitherMethod {
    /// All methods, in UI order.
    pub const ALL: [DitherMethod; 5] = [
        DitherMethod::Threshold,
        DitherMethod::FloydSteinberg,
        DitherMethod::Atkinson,
        DitherMethod::OrderedBayer,
        DitherMethod::Halftone,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DitherMethod::Threshold => "threshold",
            DitherMethod::FloydSteinberg => "floyd-steinberg",
            DitherMethod::Atkinson => "atkinson",
            DitherMethod::OrderedBayer => "ordered-bayer",
            DitherMethod::Halftone => "halftone",
        }
    }
}

impl fmt::Display for DitherMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DitherMethod {
    type Err = ProcessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "threshold" => Ok(DitherMethod::Threshold),
            "floydsteinberg" => Ok(DitherMethod::FloydSteinberg),
            "atkinson" => Ok(DitherMethod::Atkinson),
            "orderedbayer" | "ordered" | "bayer" => Ok(DitherMethod::OrderedBayer),
            "halftone" => Ok(DitherMethod::Halftone),
            _ => Err(ProcessError::UnsupportedDitherMethod(s.to_string())),
        }
    }
}

/// Dithering parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DitherConfig {
    pub method: DitherMethod,

    /// Binarization threshold, 0..=255.
    pub threshold: u8,

    /// Bayer matrix edge (ordered dithering only).
    pub bayer_matrix_size: u8,

    /// Halftone cell edge (halftone only).
    pub halftone_cell_size: u8,
}

impl Default for DitherConfig {
    fn default() -> Self {
        Self {
            method: DitherMethod::default(),
            threshold: DEFAULT_THRESHOLD,
            bayer_matrix_size: DEFAULT_PATTERN_SIZE,
            halftone_cell_size: DEFAULT_PATTERN_SIZE,
        }
    }
}

impl DitherConfig {
    pub fn new(method: DitherMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Builder: set method.
    pub fn with_method(mut self, method: DitherMethod) -> Self {
        self.method = method;
        self
    }

    /// Builder: set threshold.
    pub fn with_threshold(mut self, val: u8) -> Self {
        self.threshold = val;
        self
    }

    /// Builder: set Bayer matrix size (clamped to 2..=16).
    pub fn with_bayer_matrix_size(mut self, val: u8) -> Self {
        self.bayer_matrix_size = clamp_pattern_size(val);
        self
    }

    /// Builder: set halftone cell size (clamped to 2..=16).
    pub fn with_halftone_cell_size(mut self, val: u8) -> Self {
        self.halftone_cell_size = clamp_pattern_size(val);
        self
    }

    /// Copy with every field forced into its declared range.
    pub fn clamped(self) -> Self {
        Self {
            bayer_matrix_size: clamp_pattern_size(self.bayer_matrix_size),
            halftone_cell_size: clamp_pattern_size(self.halftone_cell_size),
            ..self
        }
    }
}

fn clamp_pattern_size(val: u8) -> u8 {
    val.clamp(MIN_PATTERN_SIZE, MAX_PATTERN_SIZE)
}

/// Output geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScaleConfig {
    /// Output width in dots, clamped to the print-head width.
    pub target_width: u32,

    /// Derive height from the source aspect ratio. When false the source
    /// height is kept as is.
    pub maintain_aspect_ratio: bool,

    /// Pixels per grid cell in the preview bitmap.
    pub preview_scale: u32,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            target_width: PAPER_WIDTH,
            maintain_aspect_ratio: true,
            preview_scale: 1,
        }
    }
}

impl ScaleConfig {
    pub fn new(target_width: u32) -> Self {
        Self {
            target_width,
            ..Self::default()
        }
    }

    /// Builder: set aspect-ratio flag.
    pub fn with_maintain_aspect_ratio(mut self, val: bool) -> Self {
        self.maintain_aspect_ratio = val;
        self
    }

    /// Builder: set preview scale.
    pub fn with_preview_scale(mut self, val: u32) -> Self {
        self.preview_scale = val;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tone_is_neutral() {
        let tone = ToneConfig::default();
        assert_eq!(tone.brightness, 128);
        assert_eq!(tone.contrast, 100);
        assert!(!tone.invert);
        assert!(tone.is_neutral());
    }

    #[test]
    fn test_tone_builder_clamps_contrast() {
        let tone = ToneConfig::new()
            .with_brightness(200)
            .with_contrast(500)
            .with_invert(true);
        assert_eq!(tone.brightness, 200);
        assert_eq!(tone.contrast, 200);
        assert!(tone.invert);
        assert!(!tone.is_neutral());
    }

    #[test]
    fn test_default_dither_config() {
        let cfg = DitherConfig::default();
        assert_eq!(cfg.method, DitherMethod::FloydSteinberg);
        assert_eq!(cfg.threshold, 128);
        assert_eq!(cfg.bayer_matrix_size, 4);
        assert_eq!(cfg.halftone_cell_size, 4);
    }

    #[test]
    fn test_dither_builder_clamps_pattern_sizes() {
        let cfg = DitherConfig::new(DitherMethod::OrderedBayer)
            .with_bayer_matrix_size(0)
            .with_halftone_cell_size(99);
        assert_eq!(cfg.bayer_matrix_size, 2);
        assert_eq!(cfg.halftone_cell_size, 16);
    }

    #[test]
    fn test_method_from_str() {
        assert_eq!(
            "floyd-steinberg".parse::<DitherMethod>().unwrap(),
            DitherMethod::FloydSteinberg
        );
        assert_eq!(
            "FloydSteinberg".parse::<DitherMethod>().unwrap(),
            DitherMethod::FloydSteinberg
        );
        assert_eq!(
            " Ordered_Bayer ".parse::<DitherMethod>().unwrap(),
            DitherMethod::OrderedBayer
        );
        for method in DitherMethod::ALL {
            assert_eq!(method.as_str().parse::<DitherMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_method_from_str_rejects_unknown() {
        let err = "jarvis".parse::<DitherMethod>().unwrap_err();
        assert_eq!(err, ProcessError::UnsupportedDitherMethod("jarvis".into()));
    }

    #[test]
    fn test_dither_config_json() {
        let cfg = DitherConfig::new(DitherMethod::Halftone).with_halftone_cell_size(6);
        let json = serde_json::to_string(&cfg).unwrap();
        assert_eq!(
            json,
            r#"{"method":"halftone","threshold":128,"bayerMatrixSize":4,"halftoneCellSize":6}"#
        );
        let back: DitherConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tone: ToneConfig = serde_json::from_str(r#"{"contrast":150}"#).unwrap();
        assert_eq!(tone.brightness, 128);
        assert_eq!(tone.contrast, 150);

        let cfg: DitherConfig =
            serde_json::from_str(r#"{"method":"atkinson","bayerMatrixSize":40}"#).unwrap();
        assert_eq!(cfg.method, DitherMethod::Atkinson);
        assert_eq!(cfg.clamped().bayer_matrix_size, 16);

        let scale: ScaleConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(scale, ScaleConfig::default());
        assert_eq!(scale.target_width, 384);
    }

    #[test]
    fn test_unknown_method_in_json_fails() {
        let result = serde_json::from_str::<DitherConfig>(r#"{"method":"sierra"}"#);
        assert!(result.is_err());
    }
}
