use std::future::Future;
use std::time::Duration;

use crate::error::AppError;

/// Capability surface over the live page under test.
///
/// The check logic depends only on this trait, never on a concrete
/// browser-automation engine. Implementations map each method onto their
/// engine's navigation/locator/timer primitives.
pub trait PageProbe: Send + Sync + Clone {
    /// Wait until the animation-width slider is visible, up to `timeout`.
    fn wait_for_slider(
        &self,
        timeout: Duration,
    ) -> impl Future<Output = Result<(), AppError>> + Send;

    /// Write an already-normalized value into the slider control.
    fn fill_slider(&self, value: &str) -> impl Future<Output = Result<(), AppError>> + Send;

    /// Read the raw `baseFrequency` attribute of the first turbulence
    /// filter element, `None` when element or attribute is missing.
    fn read_base_frequency(&self)
    -> impl Future<Output = Result<Option<String>, AppError>> + Send;

    /// Suspend the current flow for `ms` milliseconds.
    fn pause(&self, ms: u64) -> impl Future<Output = ()> + Send;
}
