use thiserror::Error;
use tracing::debug;

use crate::models::value::AnyValue;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NumericError {
    #[error("Value at index {index} is not a number (got {actual_type})")]
    NotANumber {
        index: usize,
        actual_type: &'static str,
    },
}

fn numbers(values: &[AnyValue]) -> impl Iterator<Item = Result<f64, NumericError>> + '_ {
    values.iter().enumerate().map(|(index, value)| {
        value.as_number().ok_or(NumericError::NotANumber {
            index,
            actual_type: value.type_name(),
        })
    })
}

/// Sum a list of integers and decimals.
///
/// Stops at the first non-numeric element; no partial sum is returned.
pub fn sum_numeric(values: &[AnyValue]) -> Result<f64, NumericError> {
    let mut total = 0.0;
    for number in numbers(values) {
        total += number?;
    }
    debug!("Summed {} values to {}", values.len(), total);
    Ok(total)
}

/// Largest of a list of integers and decimals, `None` for an empty list.
pub fn max_numeric(values: &[AnyValue]) -> Result<Option<f64>, NumericError> {
    let mut max: Option<f64> = None;
    for number in numbers(values) {
        let number = number?;
        max = Some(match max {
            Some(current) if current >= number => current,
            _ => number,
        });
    }
    Ok(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_mixed_integers_and_decimals() {
        let values = vec![AnyValue::from(10), AnyValue::from(20.5), AnyValue::from(30)];
        assert_eq!(sum_numeric(&values), Ok(60.5));
    }

    #[test]
    fn test_sum_empty_is_zero() {
        assert_eq!(sum_numeric(&[]), Ok(0.0));
    }

    #[test]
    fn test_sum_rejects_string() {
        let values = vec![AnyValue::from(10), AnyValue::from("20"), AnyValue::from(30)];
        assert_eq!(
            sum_numeric(&values),
            Err(NumericError::NotANumber {
                index: 1,
                actual_type: "string"
            })
        );
    }

    #[test]
    fn test_sum_reports_first_offender() {
        let values = vec![AnyValue::Null, AnyValue::from(true)];
        let err = sum_numeric(&values).unwrap_err();
        assert_eq!(
            err,
            NumericError::NotANumber {
                index: 0,
                actual_type: "null"
            }
        );
        assert_eq!(err.to_string(), "Value at index 0 is not a number (got null)");
    }

    #[test]
    fn test_max_picks_largest() {
        let values = vec![AnyValue::from(3.25), AnyValue::from(7), AnyValue::from(4.5)];
        assert_eq!(max_numeric(&values), Ok(Some(7.0)));
    }

    #[test]
    fn test_max_of_empty_is_none() {
        assert_eq!(max_numeric(&[]), Ok(None));
    }

    #[test]
    fn test_max_rejects_map() {
        let values = vec![AnyValue::from(1), AnyValue::Map(Default::default())];
        assert!(matches!(
            max_numeric(&values),
            Err(NumericError::NotANumber { index: 1, actual_type: "map" })
        ));
    }
}
