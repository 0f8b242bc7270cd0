//! Puzzle settings
//!
//! Grid size and the four randomization ranges that shape every tabbed edge.
//! All edge values are fractions of the edge length.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_COLS, DEFAULT_ROWS, EDGE_SAMPLE_STEP, MAX_GRID_DIM, MAX_SAMPLE_STEP, MIN_SAMPLE_STEP,
};
use crate::error::PuzzleError;

/// Slider limits for each range (values outside are clamped by `sanitized`)
pub const BASE_POS_LIMITS: (f32, f32) = (0.1, 0.9);
pub const BASE_SIZE_LIMITS: (f32, f32) = (0.0, 0.5);
pub const TIP_SIZE_LIMITS: (f32, f32) = (0.0, 0.5);
pub const TIP_HEIGHT_LIMITS: (f32, f32) = (0.1, 0.4);

/// A `[min, max]` pair sampled uniformly
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamRange {
    pub min: f32,
    pub max: f32,
}

impl ParamRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Uniform sample in `[min, max)`
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f32 {
        let u: f32 = rng.random();
        self.min + u * (self.max - self.min)
    }

    /// Swap reversed bounds and clamp both into `limits`
    pub fn clamped(&self, limits: (f32, f32)) -> Self {
        let (lo, hi) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        Self {
            min: sanitize(lo, limits),
            max: sanitize(hi, limits),
        }
    }
}

fn sanitize(value: f32, (lo, hi): (f32, f32)) -> f32 {
    if value.is_nan() { lo } else { value.clamp(lo, hi) }
}

/// Randomization ranges for tabbed edges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeConfig {
    /// Where along the edge the tab neck sits
    pub base_pos_range: ParamRange,
    /// Width of the tab neck
    pub base_size_range: ParamRange,
    /// Width of the tab head
    pub tip_size_range: ParamRange,
    /// Protrusion of the tab head (sign picked at random)
    pub tip_height_range: ParamRange,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            base_pos_range: ParamRange::new(0.4, 0.6),
            base_size_range: ParamRange::new(0.1, 0.2),
            tip_size_range: ParamRange::new(0.1, 0.2),
            tip_height_range: ParamRange::new(0.1, 0.2),
        }
    }
}

impl EdgeConfig {
    /// Copy with every range ordered and clamped to its slider limits
    pub fn sanitized(&self) -> Self {
        Self {
            base_pos_range: self.base_pos_range.clamped(BASE_POS_LIMITS),
            base_size_range: self.base_size_range.clamped(BASE_SIZE_LIMITS),
            tip_size_range: self.tip_size_range.clamped(TIP_SIZE_LIMITS),
            tip_height_range: self.tip_height_range.clamped(TIP_HEIGHT_LIMITS),
        }
    }
}

/// Puzzle settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleSettings {
    pub rows: u32,
    pub cols: u32,
    /// Edge shape ranges
    #[serde(default)]
    pub edge: EdgeConfig,
    /// Spline sampling step (smaller = denser outlines)
    #[serde(default = "default_sample_step")]
    pub sample_step: f32,
}

fn default_sample_step() -> f32 {
    EDGE_SAMPLE_STEP
}

impl Default for PuzzleSettings {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            edge: EdgeConfig::default(),
            sample_step: EDGE_SAMPLE_STEP,
        }
    }
}

impl PuzzleSettings {
    /// Parse settings from JSON, sanitizing the result
    pub fn from_json(json: &str) -> Result<Self, PuzzleError> {
        let settings: Self = serde_json::from_str(json)?;
        log::info!("Loaded puzzle settings ({}x{})", settings.rows, settings.cols);
        Ok(settings.sanitized())
    }

    pub fn to_json(&self) -> Result<String, PuzzleError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Copy with grid size and ranges forced into supported limits
    pub fn sanitized(&self) -> Self {
        let sample_step = if self.sample_step.is_finite() && self.sample_step > 0.0 {
            self.sample_step.clamp(MIN_SAMPLE_STEP, MAX_SAMPLE_STEP)
        } else {
            EDGE_SAMPLE_STEP
        };
        Self {
            rows: self.rows.clamp(1, MAX_GRID_DIM),
            cols: self.cols.clamp(1, MAX_GRID_DIM),
            edge: self.edge.sanitized(),
            sample_step,
        }
    }
}
