use chrono::NaiveDate;
use tracing::debug;

use crate::error::AgendaError;
use crate::models::HolidayMarker;

pub const HOLIDAY_DELIMITER: char = '-';

// Leap year so that 29/02 is accepted as a recurring marker.
const MARKER_REFERENCE_YEAR: i32 = 2000;

/// Reads the holiday feed text: `dd/mm` tokens joined by one delimiter.
///
/// Each token is one recurring day. A paired value is never read as a span.
#[derive(Debug, Clone, Copy)]
pub struct DateIntervalParser {
    delimiter: char,
}

impl Default for DateIntervalParser {
    fn default() -> Self {
        Self::new(HOLIDAY_DELIMITER)
    }
}

impl DateIntervalParser {
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    /// All-or-nothing: one malformed token fails the whole text.
    pub fn parse(&self, text: &str) -> Result<Vec<HolidayMarker>, AgendaError> {
        let markers = text
            .split(self.delimiter)
            .map(parse_token)
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Parsed {} holiday markers", markers.len());
        Ok(markers)
    }
}

fn parse_token(token: &str) -> Result<HolidayMarker, AgendaError> {
    let token = token.trim();
    let invalid = || AgendaError::Format(format!("Invalid holiday token '{}'. Expected dd/mm.", token));

    let (day, month) = token.split_once('/').ok_or_else(invalid)?;
    let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
    if !two_digits(day) || !two_digits(month) {
        return Err(invalid());
    }

    let day: u32 = day.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(MARKER_REFERENCE_YEAR, month, day).ok_or_else(invalid)?;

    Ok(HolidayMarker { month, day })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_token() {
        let markers = DateIntervalParser::default().parse("07/09").unwrap();
        assert_eq!(markers, vec![HolidayMarker { month: 9, day: 7 }]);
    }

    #[test]
    fn test_rejects_signed_numbers() {
        assert!(DateIntervalParser::default().parse("+1/12").is_err());
    }

    #[test]
    fn test_accepts_leap_day() {
        assert!(DateIntervalParser::default().parse("29/02").is_ok());
    }
}
