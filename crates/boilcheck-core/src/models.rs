/// Deployed page this check targets by default.
pub const DEFAULT_URL: &str = "https://boling.vercel.app";

/// Default number of `baseFrequency` samples collected per slider position.
pub const DEFAULT_SAMPLE_COUNT: usize = 20;

/// Default delay between samples, in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 120;

/// Slider position for the minimum-scale phase.
pub const MIN_SLIDER_VALUE: f64 = 0.01;

/// Slider position for the maximum-scale phase.
pub const MAX_SLIDER_VALUE: f64 = 1.0;

/// Smallest per-phase spread accepted as evidence the animation is running.
pub const MIN_SPREAD_DELTA: f64 = 0.0001;

/// The maximum-scale spread must be at least this multiple of the
/// minimum-scale spread. Fixed empirical constant tuned to the target page.
pub const SPREAD_SCALING_FACTOR: f64 = 1.5;

/// Absolute floor for the maximum-scale spread. Fixed empirical constant.
pub const MAX_PHASE_SPREAD_FLOOR: f64 = 0.002;

/// Pause after writing the slider, letting reactive rendering propagate
/// before sampling resumes, in milliseconds.
pub const SETTLE_DELAY_MS: u64 = 250;

/// Bounded wait for the slider control to become visible, in milliseconds.
pub const CONTROL_TIMEOUT_MS: u64 = 10_000;

/// Fully-enumerated configuration for one check invocation.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Page to open.
    pub url: String,
    /// Samples collected per slider position, at least 1.
    pub samples: usize,
    /// Delay between samples, applied after every read.
    pub delay_ms: u64,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            samples: DEFAULT_SAMPLE_COUNT,
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

/// Summary statistics over one sampled time series.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct SeriesStats {
    pub min: f64,
    pub max: f64,
    /// `max - min`; the measure of live variability.
    pub spread: f64,
}

/// Terminal artifact of a successful check: the stats for both phases.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct CheckReport {
    pub min_scale: SeriesStats,
    pub max_scale: SeriesStats,
}
