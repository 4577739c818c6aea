use std::ops::RangeInclusive;

use crate::error::{ApiError, ApiResult};

pub const SCALE: RangeInclusive<u8> = 1..=10;
const SLEEP_HOURS: RangeInclusive<f32> = 0.0..=24.0;
const MINUTES_PER_DAY: u32 = 24 * 60;

pub fn non_empty(field: &str, value: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::BadRequest(format!("{field} must not be empty")));
    }
    Ok(())
}

pub fn email(value: &str) -> ApiResult<()> {
    non_empty("email", value)?;
    if !value.contains('@') {
        return Err(ApiError::BadRequest(format!("`{value}` is not an email address")));
    }
    Ok(())
}

pub fn scale(field: &str, value: u8) -> ApiResult<()> {
    if !SCALE.contains(&value) {
        return Err(ApiError::BadRequest(format!(
            "{field} must be between {} and {}, got {value}",
            SCALE.start(),
            SCALE.end()
        )));
    }
    Ok(())
}

pub fn sleep_hours(value: f32) -> ApiResult<()> {
    if !SLEEP_HOURS.contains(&value) {
        return Err(ApiError::BadRequest(format!(
            "sleep_hours must be between 0 and 24, got {value}"
        )));
    }
    Ok(())
}

pub fn exercise_duration(minutes: u32) -> ApiResult<()> {
    if minutes > MINUTES_PER_DAY {
        return Err(ApiError::BadRequest(format!(
            "exercise_duration must be at most {MINUTES_PER_DAY} minutes, got {minutes}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_bounds_are_inclusive() {
        assert!(scale("energy", 1).is_ok());
        assert!(scale("energy", 10).is_ok());
        assert!(scale("energy", 0).is_err());
        assert!(scale("energy", 11).is_err());
    }

    #[test]
    fn email_needs_an_at_sign() {
        assert!(email("luna@example.com").is_ok());
        assert!(email("luna.example.com").is_err());
        assert!(email("  ").is_err());
    }

    #[test]
    fn sleep_and_exercise_limits() {
        assert!(sleep_hours(7.5).is_ok());
        assert!(sleep_hours(-1.0).is_err());
        assert!(sleep_hours(25.0).is_err());
        assert!(exercise_duration(90).is_ok());
        assert!(exercise_duration(1441).is_err());
    }
}
