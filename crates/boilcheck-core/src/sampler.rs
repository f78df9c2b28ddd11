use crate::error::AppError;
use crate::parse::parse_base_frequency;
use crate::traits::PageProbe;

/// Collect a time series of exactly `sample_count` parsed `baseFrequency`
/// values, one read every `delay_ms` milliseconds.
///
/// The delay is applied after every read, including the last. The first
/// read that fails to parse aborts the whole operation with
/// [`AppError::MissingAttribute`]; no partial series is ever returned.
pub async fn sample_base_frequencies<P: PageProbe>(
    probe: &P,
    sample_count: usize,
    delay_ms: u64,
) -> Result<Vec<f64>, AppError> {
    let mut values = Vec::with_capacity(sample_count);

    for _ in 0..sample_count {
        let raw = probe.read_base_frequency().await?;
        let value =
            parse_base_frequency(raw.as_deref()).ok_or(AppError::MissingAttribute)?;

        values.push(value);
        probe.pause(delay_ms).await;
    }

    tracing::debug!("Collected {} baseFrequency samples", values.len());
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::MockProbe;

    #[tokio::test]
    async fn collects_samples_in_read_order() {
        let probe = MockProbe::with_raw_reads(vec![
            Some("0.0010 0.0010"),
            Some("0.0012 0.0012"),
            Some("0.0011 0.0011"),
        ]);

        let values = sample_base_frequencies(&probe, 3, 120).await.unwrap();
        assert_eq!(values, vec![0.0010, 0.0012, 0.0011]);
    }

    #[tokio::test]
    async fn delay_applies_after_every_read_including_the_last() {
        let probe = MockProbe::with_raw_reads(vec![Some("0.001"), Some("0.002")]);

        sample_base_frequencies(&probe, 2, 120).await.unwrap();
        assert_eq!(*probe.pauses.lock().unwrap(), vec![120, 120]);
    }

    #[tokio::test]
    async fn unparsable_read_aborts_with_no_partial_series() {
        let probe = MockProbe::with_raw_reads(vec![
            Some("0.0010"),
            Some("garbage"),
            Some("0.0012"),
        ]);

        let err = sample_base_frequencies(&probe, 3, 0).await.unwrap_err();
        assert!(matches!(err, AppError::MissingAttribute));
        // The failing tick never reached its delay.
        assert_eq!(probe.pauses.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn absent_attribute_aborts() {
        let probe = MockProbe::with_raw_reads(vec![None]);

        let err = sample_base_frequencies(&probe, 1, 0).await.unwrap_err();
        assert!(matches!(err, AppError::MissingAttribute));
    }

    #[tokio::test]
    async fn read_error_propagates() {
        let probe = MockProbe::with_read_results(vec![Err(AppError::BrowserError(
            "tab crashed".into(),
        ))]);

        let err = sample_base_frequencies(&probe, 1, 0).await.unwrap_err();
        assert!(matches!(err, AppError::BrowserError(_)));
    }
}
