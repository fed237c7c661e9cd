use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, Weekday};
use thiserror::Error;

/// Wall-clock time in 24-hour format, serialized as zero-padded "HH:MM".
/// Carries no date and no timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseTimeError {
    #[error("time must be in HH:MM format")]
    Format,
    #[error("time out of range: {0}")]
    Range(String),
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> Result<Self, ParseTimeError> {
        if hour > 23 || minute > 59 {
            return Err(ParseTimeError::Range(format!("{:02}:{:02}", hour, minute)));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes since midnight (H*60+M).
    pub fn total_minutes(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }

    /// Inverse of `total_minutes`. Returns `None` past 23:59.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        if minutes >= 24 * 60 {
            return None;
        }
        Some(Self {
            hour: (minutes / 60) as u8,
            minute: (minutes % 60) as u8,
        })
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = s.split_once(':').ok_or(ParseTimeError::Format)?;
        if hour.len() != 2 || minute.len() != 2 {
            return Err(ParseTimeError::Format);
        }
        let hour = hour.parse::<u8>().map_err(|_| ParseTimeError::Format)?;
        let minute = minute.parse::<u8>().map_err(|_| ParseTimeError::Format)?;
        Self::new(hour, minute)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ParseTimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

/// Day of week as the backend counts them: integer 0..=6, 0 = Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("day of week must be between 0 (Sunday) and 6 (Saturday)")]
pub struct ParseDayError;

impl DayOfWeek {
    /// All days in ascending wire order (Sunday first).
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DayOfWeek::Sunday => "Sunday",
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
        }
    }

    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sun => DayOfWeek::Sunday,
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
        }
    }
}

impl TryFrom<u8> for DayOfWeek {
    type Error = ParseDayError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        DayOfWeek::ALL.get(value as usize).copied().ok_or(ParseDayError)
    }
}

impl From<DayOfWeek> for u8 {
    fn from(value: DayOfWeek) -> Self {
        value as u8
    }
}

/// A bookable recurring weekly time interval. Owned by the backend; the
/// client only ever holds a read copy from the last fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub id: i64,
    pub day_of_week: DayOfWeek,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAvailabilityRequest {
    pub day_of_week: DayOfWeek,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

/// Complete id list in the new display order. No partial updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReorderAvailabilitiesRequest {
    pub ids: Vec<i64>,
}

/// Practitioner unavailability for one calendar day.
/// Times are absent when `full_day` is set, present otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: i64,
    pub date: NaiveDate,
    pub full_day: bool,
    pub start_time: Option<TimeOfDay>,
    pub end_time: Option<TimeOfDay>,
}

/// Block creation may span a range via `end_date`; the backend expands the
/// range into one record per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBlockRequest {
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub full_day: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<TimeOfDay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<TimeOfDay>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteBlocksRequest {
    pub ids: Vec<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub patient_name: String,
    pub patient_phone: String,
    pub date: NaiveDate,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateAppointmentStatusRequest {
    pub status: AppointmentStatus,
}

/// Booking request submitted from the public portal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub date: NaiveDate,
    pub availability_id: i64,
    pub name: String,
    pub phone: String,
    pub cpf: String,
}

/// A free interval offered on the public booking page for a given date.
/// The backend has already subtracted blocks and taken slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingSlot {
    pub availability_id: i64,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    /// CPF in display form ("000.000.000-00"), as entered.
    pub cpf: String,
    /// Phone in display form ("(00) 00000-0000"), as entered.
    pub phone: String,
    pub birth_date: Option<NaiveDate>,
    pub email: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePatientRequest {
    pub name: String,
    pub cpf: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnamnesisQuestion {
    pub id: i64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAnamnesisQuestionRequest {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnamnesisAnswer {
    pub question_id: i64,
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitAnamnesisRequest {
    pub answers: Vec<AnamnesisAnswer>,
}

/// Validation envelope the backend returns on rejected requests:
/// field name -> human-readable message, plus an optional generic message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: BTreeMap<String, String>,
}

impl ErrorResponse {
    /// The one message worth showing in a toast: the first field-level
    /// message, falling back to the generic one.
    pub fn first_message(&self) -> Option<&str> {
        self.errors
            .values()
            .next()
            .map(String::as_str)
            .or(self.message.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_of_day_parse_and_display() {
        let time: TimeOfDay = "08:05".parse().unwrap();
        assert_eq!(time.hour(), 8);
        assert_eq!(time.minute(), 5);
        assert_eq!(time.to_string(), "08:05");

        // Upper bound is inclusive
        let last: TimeOfDay = "23:59".parse().unwrap();
        assert_eq!(last.total_minutes(), 23 * 60 + 59);
    }

    #[test]
    fn test_time_of_day_rejects_bad_input() {
        assert!("8:00".parse::<TimeOfDay>().is_err()); // not zero-padded
        assert!("0800".parse::<TimeOfDay>().is_err()); // missing separator
        assert!("08:0".parse::<TimeOfDay>().is_err());
        assert!("24:00".parse::<TimeOfDay>().is_err());
        assert!("12:60".parse::<TimeOfDay>().is_err());
        assert!("ab:cd".parse::<TimeOfDay>().is_err());
        assert!("".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_time_of_day_minutes_roundtrip() {
        let time = TimeOfDay::new(9, 30).unwrap();
        assert_eq!(time.total_minutes(), 570);
        assert_eq!(TimeOfDay::from_minutes(570), Some(time));

        // One past the last representable minute
        assert_eq!(TimeOfDay::from_minutes(24 * 60), None);
    }

    #[test]
    fn test_time_of_day_ordering() {
        let early: TimeOfDay = "08:00".parse().unwrap();
        let late: TimeOfDay = "17:30".parse().unwrap();
        assert!(early < late);
        assert!("09:59".parse::<TimeOfDay>().unwrap() < "10:00".parse::<TimeOfDay>().unwrap());
    }

    #[test]
    fn test_time_of_day_serde_uses_hh_mm() {
        let time = TimeOfDay::new(7, 0).unwrap();
        assert_eq!(serde_json::to_string(&time).unwrap(), "\"07:00\"");

        let parsed: TimeOfDay = serde_json::from_str("\"18:45\"").unwrap();
        assert_eq!(parsed, TimeOfDay::new(18, 45).unwrap());
    }

    #[test]
    fn test_day_of_week_conversions() {
        assert_eq!(DayOfWeek::try_from(0u8).unwrap(), DayOfWeek::Sunday);
        assert_eq!(DayOfWeek::try_from(6u8).unwrap(), DayOfWeek::Saturday);
        assert!(DayOfWeek::try_from(7u8).is_err());

        assert_eq!(u8::from(DayOfWeek::Wednesday), 3);
        assert_eq!(DayOfWeek::from_weekday(Weekday::Sun), DayOfWeek::Sunday);
        assert_eq!(DayOfWeek::from_weekday(Weekday::Sat), DayOfWeek::Saturday);
    }

    #[test]
    fn test_day_of_week_serde_is_integer() {
        let json = serde_json::to_string(&DayOfWeek::Monday).unwrap();
        assert_eq!(json, "1");

        let parsed: DayOfWeek = serde_json::from_str("5").unwrap();
        assert_eq!(parsed, DayOfWeek::Friday);
    }

    #[test]
    fn test_appointment_status_wire_strings() {
        assert_eq!(
            serde_json::to_string(&AppointmentStatus::Scheduled).unwrap(),
            "\"scheduled\""
        );
        let parsed: AppointmentStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(parsed, AppointmentStatus::Cancelled);
    }

    #[test]
    fn test_error_response_first_message() {
        let body = r#"{"errors":{"end_time":"End time must be after start time","start_time":"Required"}}"#;
        let response: ErrorResponse = serde_json::from_str(body).unwrap();
        // BTreeMap iteration is key-ordered, so the first field is stable
        assert_eq!(
            response.first_message(),
            Some("End time must be after start time")
        );

        let generic: ErrorResponse =
            serde_json::from_str(r#"{"message":"Something went wrong"}"#).unwrap();
        assert_eq!(generic.first_message(), Some("Something went wrong"));

        assert_eq!(ErrorResponse::default().first_message(), None);
    }

    #[test]
    fn test_create_block_request_omits_absent_fields() {
        let request = CreateBlockRequest {
            date: NaiveDate::from_ymd_opt(2025, 7, 14).unwrap(),
            end_date: None,
            full_day: true,
            start_time: None,
            end_time: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"date":"2025-07-14","full_day":true}"#);
    }
}
