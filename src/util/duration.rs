//! Short duration grammar used by giveaways and reminders: `<n>{s,m,h,d}`.

use chrono::Duration;

use crate::error::AppError;

/// Parses durations such as `30s`, `10m`, `2h` or `1d`.
///
/// The unit is case-insensitive and surrounding whitespace is ignored. Zero and
/// overflowing amounts are rejected.
///
/// # Returns
/// - `Ok(Duration)` - Parsed duration
/// - `Err(AppError::BadRequest)` - Input does not follow the grammar
pub fn parse_duration(input: &str) -> Result<Duration, AppError> {
    let invalid = || {
        AppError::BadRequest(format!(
            "Invalid duration '{}'. Use a number followed by s, m, h or d (e.g. 10m, 2h, 1d).",
            input.trim()
        ))
    };

    let input = input.trim().to_lowercase();
    let unit = input.chars().last().ok_or_else(invalid)?;
    let amount = input[..input.len() - unit.len_utf8()]
        .parse::<i64>()
        .map_err(|_| invalid())?;

    if amount <= 0 {
        return Err(invalid());
    }

    let seconds = match unit {
        's' => Some(amount),
        'm' => amount.checked_mul(60),
        'h' => amount.checked_mul(60 * 60),
        'd' => amount.checked_mul(24 * 60 * 60),
        _ => None,
    }
    .ok_or_else(invalid)?;

    // chrono panics past roughly 292 million years
    Duration::try_seconds(seconds).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_unit() {
        assert_eq!(parse_duration("45s").unwrap(), Duration::seconds(45));
        assert_eq!(parse_duration("10m").unwrap(), Duration::minutes(10));
        assert_eq!(parse_duration("2h").unwrap(), Duration::hours(2));
        assert_eq!(parse_duration(" 1D ").unwrap(), Duration::days(1));
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["", "m", "10", "10w", "-5m", "0s", "1.5h", "ten m"] {
            assert!(
                matches!(parse_duration(input), Err(AppError::BadRequest(_))),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_overflowing_amounts() {
        assert!(parse_duration("99999999999999999d").is_err());
    }
}
