use std::ops::RangeInclusive;
use std::str::FromStr;

use insured_store::record::Age;

pub const AGE_BOUNDS: RangeInclusive<Age> = 0..=150;
pub const PHONE_LENGTH: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberError {
    NotANumber,
    /// Only digits, but the value doesn't fit the expected range.
    OutOfRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneError {
    NotDigits,
    WrongLength,
}

pub fn is_valid_number(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|ch| ch.is_ascii_digit())
}

pub fn parse_number<N: FromStr>(input: &str) -> Result<N, NumberError> {
    if !is_valid_number(input) {
        return Err(NumberError::NotANumber);
    }
    input.parse::<N>().map_err(|_| NumberError::OutOfRange)
}

pub fn parse_age(input: &str) -> Result<Age, NumberError> {
    parse_number::<Age>(input).and_then(|age| {
        AGE_BOUNDS
            .contains(&age)
            .then_some(age)
            .ok_or(NumberError::OutOfRange)
    })
}

/// Letters, spaces and hyphens, at least one non-space.
pub fn is_valid_name(input: &str) -> bool {
    !input.trim().is_empty()
        && input
            .chars()
            .all(|ch| ch.is_alphabetic() || ch == ' ' || ch == '-')
}

pub fn check_phone(input: &str) -> Result<(), PhoneError> {
    if !is_valid_number(input) {
        Err(PhoneError::NotDigits)
    } else if input.len() != PHONE_LENGTH {
        Err(PhoneError::WrongLength)
    } else {
        Ok(())
    }
}
