//! Test utilities: a mock implementation of the page capability trait.
//!
//! Handwritten mock for dependency injection in unit tests, using
//! `Arc<Mutex<_>>` for interior mutability so tests can assert on
//! recorded calls.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::AppError;
use crate::traits::PageProbe;

/// Mock probe with a scripted queue of attribute reads and recorders for
/// every write and pause the check performs.
///
/// Reads pop from the front of the queue; an exhausted queue reads as an
/// absent attribute.
#[derive(Clone)]
pub struct MockProbe {
    reads: Arc<Mutex<Vec<Result<Option<String>, AppError>>>>,
    wait_error: Arc<Mutex<Option<AppError>>>,
    fill_error: Arc<Mutex<Option<AppError>>>,
    /// Every value written into the slider, in order.
    pub filled: Arc<Mutex<Vec<String>>>,
    /// Every pause the check requested, in milliseconds, in order.
    pub pauses: Arc<Mutex<Vec<u64>>>,
}

impl MockProbe {
    /// Probe scripted with raw attribute strings, one per sampling tick.
    pub fn with_raw_reads(reads: Vec<Option<&str>>) -> Self {
        Self::with_read_results(
            reads
                .into_iter()
                .map(|raw| Ok(raw.map(str::to_string)))
                .collect(),
        )
    }

    /// Probe scripted with full read results, including injected errors.
    pub fn with_read_results(reads: Vec<Result<Option<String>, AppError>>) -> Self {
        Self {
            reads: Arc::new(Mutex::new(reads)),
            wait_error: Arc::new(Mutex::new(None)),
            fill_error: Arc::new(Mutex::new(None)),
            filled: Arc::new(Mutex::new(Vec::new())),
            pauses: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Probe whose visibility wait fails (e.g. control never appears).
    pub fn with_wait_error(error: AppError) -> Self {
        let probe = Self::with_raw_reads(vec![]);
        *probe.wait_error.lock().unwrap() = Some(error);
        probe
    }

    /// Probe whose slider write fails (e.g. control not fillable).
    pub fn with_fill_error(error: AppError) -> Self {
        let probe = Self::with_raw_reads(vec![]);
        *probe.fill_error.lock().unwrap() = Some(error);
        probe
    }
}

impl PageProbe for MockProbe {
    async fn wait_for_slider(&self, _timeout: Duration) -> Result<(), AppError> {
        let mut err = self.wait_error.lock().unwrap();
        if let Some(e) = err.take() {
            return Err(e);
        }
        Ok(())
    }

    async fn fill_slider(&self, value: &str) -> Result<(), AppError> {
        let mut err = self.fill_error.lock().unwrap();
        if let Some(e) = err.take() {
            return Err(e);
        }
        self.filled.lock().unwrap().push(value.to_string());
        Ok(())
    }

    async fn read_base_frequency(&self) -> Result<Option<String>, AppError> {
        let mut reads = self.reads.lock().unwrap();
        if reads.is_empty() {
            Ok(None)
        } else {
            reads.remove(0)
        }
    }

    async fn pause(&self, ms: u64) {
        self.pauses.lock().unwrap().push(ms);
    }
}
