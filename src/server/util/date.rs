//! Booking date normalisation.
//!
//! Clients send dates in several shapes. Everything is normalised to a local calendar
//! date; time-of-day components are discarded.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};

use crate::{model::booking::BookingDateDto, server::error::AppError};

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// A date as received from a client.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// Day of the current local month.
    DayOfMonth(u32),
    /// Date or date-time string.
    Text(String),
}

impl From<BookingDateDto> for DateInput {
    fn from(dto: BookingDateDto) -> Self {
        match dto {
            BookingDateDto::Day(day) => Self::DayOfMonth(day),
            BookingDateDto::Text(text) => Self::Text(text),
        }
    }
}

/// Normalises a client date to a local calendar date.
///
/// A missing value means `today`. A purely numeric string is treated as a day of the
/// current month.
///
/// # Arguments
/// - `input` - Date sent by the client, if any
/// - `today` - Current local date
///
/// # Returns
/// - `Ok(NaiveDate)` - Normalised date
/// - `Err(AppError::BadRequest)` - Value could not be interpreted as a date
pub fn parse_date_input(input: Option<&DateInput>, today: NaiveDate) -> Result<NaiveDate, AppError> {
    match input {
        None => Ok(today),
        Some(DateInput::DayOfMonth(day)) => day_of_current_month(*day, today),
        Some(DateInput::Text(text)) => {
            let text = text.trim();

            if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
                let day = text
                    .parse::<u32>()
                    .map_err(|_| invalid_date(text))?;
                return day_of_current_month(day, today);
            }

            parse_date_text(text).ok_or_else(|| invalid_date(text))
        }
    }
}

/// Normalises a client date for a new booking and rejects dates before `today`.
pub fn parse_booking_date(
    input: Option<&DateInput>,
    today: NaiveDate,
) -> Result<NaiveDate, AppError> {
    let date = parse_date_input(input, today)?;

    if date < today {
        return Err(AppError::BadRequest(format!(
            "Date {} is in the past",
            date.format("%Y-%m-%d")
        )));
    }

    Ok(date)
}

fn day_of_current_month(day: u32, today: NaiveDate) -> Result<NaiveDate, AppError> {
    NaiveDate::from_ymd_opt(today.year(), today.month(), day).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Day {} does not exist in {}",
            day,
            today.format("%Y-%m")
        ))
    })
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    if let Ok(date_time) = DateTime::parse_from_rfc3339(text) {
        return Some(date_time.with_timezone(&Local).date_naive());
    }

    if let Some(date_time) = DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
    {
        return Some(date_time.date());
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

fn invalid_date(text: &str) -> AppError {
    AppError::BadRequest(format!(
        "Invalid date '{}', expected YYYY-MM-DD, a date-time or a day of the month",
        text
    ))
}
