use std::time::Duration;

use crate::error::AppError;
use crate::models::{
    CONTROL_TIMEOUT_MS, CheckOptions, CheckReport, MAX_PHASE_SPREAD_FLOOR, MAX_SLIDER_VALUE,
    MIN_SLIDER_VALUE, MIN_SPREAD_DELTA, SPREAD_SCALING_FACTOR, SeriesStats,
};
use crate::sampler::sample_base_frequencies;
use crate::series::validate_series;
use crate::slider::set_slider;
use crate::traits::PageProbe;

/// Orchestrates the full check: locate control → minimum phase → maximum
/// phase → cross-validation.
///
/// Generic over the page collaborator via [`PageProbe`], enabling dependency
/// injection and testability without a real browser.
pub struct CheckService<P: PageProbe> {
    probe: P,
    options: CheckOptions,
}

impl<P: PageProbe> CheckService<P> {
    pub fn new(probe: P, options: CheckOptions) -> Self {
        Self { probe, options }
    }

    /// Run the check against an already-opened page.
    ///
    /// 1. Wait for the slider control to become visible (bounded)
    /// 2. Minimum-scale phase: set slider, sample, validate
    /// 3. Maximum-scale phase: set slider, sample, validate
    /// 4. Cross-validate the two spreads against the fixed thresholds
    ///
    /// Any error aborts immediately; there are no retries.
    pub async fn run(&self) -> Result<CheckReport, AppError> {
        tracing::info!("Locating slider control");
        self.probe
            .wait_for_slider(Duration::from_millis(CONTROL_TIMEOUT_MS))
            .await?;

        let min_scale = self.run_phase(MIN_SLIDER_VALUE, "Minimum scale").await?;
        let max_scale = self.run_phase(MAX_SLIDER_VALUE, "Maximum scale").await?;

        if max_scale.spread < min_scale.spread * SPREAD_SCALING_FACTOR {
            return Err(AppError::InsufficientScaling {
                min_spread: min_scale.spread,
                max_spread: max_scale.spread,
            });
        }

        if max_scale.spread < MAX_PHASE_SPREAD_FLOOR {
            return Err(AppError::SpreadTooSmall(max_scale.spread));
        }

        tracing::info!(
            min_spread = min_scale.spread,
            max_spread = max_scale.spread,
            "Slider drives the animation width"
        );

        Ok(CheckReport {
            min_scale,
            max_scale,
        })
    }

    /// One symmetric phase: drive the slider to `target`, sample, validate.
    async fn run_phase(&self, target: f64, tag: &str) -> Result<SeriesStats, AppError> {
        tracing::info!("{tag}: setting slider to {target}");
        set_slider(&self.probe, target).await?;

        let values =
            sample_base_frequencies(&self.probe, self.options.samples, self.options.delay_ms)
                .await?;
        let stats = validate_series(&values, tag, MIN_SPREAD_DELTA)?;

        tracing::info!(
            "{tag}: min={:.6}, max={:.6}, spread={:.6}",
            stats.min,
            stats.max,
            stats.spread
        );
        Ok(stats)
    }
}
