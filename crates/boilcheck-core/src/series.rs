use crate::error::AppError;
use crate::models::SeriesStats;

/// Compute [`SeriesStats`] over a sample series and enforce the
/// minimum-variability invariant: `spread >= min_delta`.
///
/// `tag` is a human-readable phase label carried into the error when the
/// invariant is violated.
pub fn validate_series(values: &[f64], tag: &str, min_delta: f64) -> Result<SeriesStats, AppError> {
    if values.is_empty() {
        return Err(AppError::Generic(
            "Cannot validate an empty sample series".into(),
        ));
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let spread = max - min;

    if spread < min_delta {
        return Err(AppError::InsufficientVariability {
            tag: tag.to_string(),
            spread,
        });
    }

    Ok(SeriesStats { min, max, spread })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MIN_SPREAD_DELTA;

    #[test]
    fn varying_series_yields_stats() {
        let values = [0.0010, 0.0011, 0.0012, 0.0015];
        let stats = validate_series(&values, "Minimum scale", MIN_SPREAD_DELTA).unwrap();
        assert_eq!(stats.min, 0.0010);
        assert_eq!(stats.max, 0.0015);
        assert!((stats.spread - 0.0005).abs() < 1e-12);
    }

    #[test]
    fn constant_series_fails_with_zero_spread() {
        let values = [0.02, 0.02, 0.02];
        let err = validate_series(&values, "Maximum scale", MIN_SPREAD_DELTA).unwrap_err();
        match err {
            AppError::InsufficientVariability { tag, spread } => {
                assert_eq!(tag, "Maximum scale");
                assert_eq!(spread, 0.0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn small_but_sufficient_spread_passes() {
        let values = [0.0010, 0.0013];
        assert!(validate_series(&values, "Minimum scale", MIN_SPREAD_DELTA).is_ok());
    }

    #[test]
    fn empty_series_is_rejected() {
        let err = validate_series(&[], "Minimum scale", MIN_SPREAD_DELTA).unwrap_err();
        assert!(matches!(err, AppError::Generic(_)));
    }

    #[test]
    fn order_does_not_matter_for_stats() {
        let ascending = [0.001, 0.002, 0.003];
        let shuffled = [0.003, 0.001, 0.002];
        assert_eq!(
            validate_series(&ascending, "t", MIN_SPREAD_DELTA).unwrap(),
            validate_series(&shuffled, "t", MIN_SPREAD_DELTA).unwrap()
        );
    }
}
