use crate::StudbudError;

pub const MIN_HOURS: u8 = 1;
pub const MAX_HOURS: u8 = 8;
pub const DEFAULT_HOURS: u8 = 2;

/// Validate a daily study-hours value coming from an input widget.
pub fn check_hours(value: i64) -> Result<u8, StudbudError> {
    if (i64::from(MIN_HOURS)..=i64::from(MAX_HOURS)).contains(&value) {
        Ok(value as u8)
    } else {
        Err(StudbudError::InvalidInput(format!(
            "hours must be between {MIN_HOURS} and {MAX_HOURS}, got {value}"
        )))
    }
}

/// Parse and validate a textual hours field (form submissions).
pub fn parse_hours(raw: &str) -> Result<u8, StudbudError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(DEFAULT_HOURS);
    }
    let value: i64 = trimmed.parse().map_err(|_| {
        StudbudError::InvalidInput(format!("hours must be a whole number, got {trimmed:?}"))
    })?;
    check_hours(value)
}
