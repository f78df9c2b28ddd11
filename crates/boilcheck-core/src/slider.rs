use crate::error::AppError;
use crate::models::SETTLE_DELAY_MS;
use crate::traits::PageProbe;

/// Format a target slider position as the control's text value.
///
/// Two fraction digits, then trailing zeros and a trailing decimal point
/// stripped: `1.00` → `"1"`, `0.50` → `"0.5"`, `0.01` stays `"0.01"`.
pub fn format_slider_value(value: f64) -> String {
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Move the slider to `value` and let the page settle before returning.
///
/// Failures from the underlying control interaction propagate unchanged.
pub async fn set_slider<P: PageProbe>(probe: &P, value: f64) -> Result<(), AppError> {
    probe.fill_slider(&format_slider_value(value)).await?;
    probe.pause(SETTLE_DELAY_MS).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::MockProbe;

    #[test]
    fn whole_numbers_lose_their_fraction() {
        assert_eq!(format_slider_value(1.00), "1");
        assert_eq!(format_slider_value(0.0), "0");
    }

    #[test]
    fn trailing_zeros_are_stripped() {
        assert_eq!(format_slider_value(0.5000), "0.5");
    }

    #[test]
    fn significant_fraction_digits_survive() {
        assert_eq!(format_slider_value(0.01), "0.01");
        assert_eq!(format_slider_value(0.25), "0.25");
    }

    #[tokio::test]
    async fn set_slider_fills_then_settles() {
        let probe = MockProbe::with_raw_reads(vec![]);
        set_slider(&probe, 0.01).await.unwrap();

        assert_eq!(*probe.filled.lock().unwrap(), vec!["0.01".to_string()]);
        assert_eq!(*probe.pauses.lock().unwrap(), vec![SETTLE_DELAY_MS]);
    }

    #[tokio::test]
    async fn fill_failure_propagates_without_settling() {
        let probe = MockProbe::with_fill_error(AppError::BrowserError("not fillable".into()));
        let err = set_slider(&probe, 1.0).await.unwrap_err();

        assert!(matches!(err, AppError::BrowserError(_)));
        assert!(probe.pauses.lock().unwrap().is_empty());
    }
}
