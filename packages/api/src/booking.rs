//! Table reservations: request validation and the forms-API payload.
//!
//! Everything here is plain data and runs on both the client and the
//! server; the network hop lives in [`crate::forms`].

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Minimum time a human needs between opening and sending the form.
pub const MIN_FILL_MILLIS: i64 = 3_000;

/// Tickets older than this are refused, so one ticket cannot be replayed forever.
pub const MAX_TICKET_AGE_MILLIS: i64 = 12 * 60 * 60 * 1_000;

const WEEKDAY_SLOTS: &[&str] = &[
    "17:00", "17:30", "18:00", "18:30", "19:00", "19:30", "20:00", "20:30", "21:00",
];
const WEEKEND_SLOTS: &[&str] = &["17:00", "17:30", "19:00", "19:30", "20:30", "21:00", "21:30"];

/// What the visitor typed into the reservation form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// `"1"` to `"10"` or `"10+"`.
    pub guests: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM`, one of [`available_times`].
    pub time: String,
    pub message: String,
    /// Honeypot; hidden from people, filled in by bots.
    pub website: String,
}

/// Issued when the form is rendered; the server uses it to measure how long
/// the visitor spent on the form.
///
/// `signature` is a hex HMAC over `issued_at_ms` that only the server can
/// produce, see `ticket::TicketSigner`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingTicket {
    pub issued_at_ms: i64,
    pub signature: String,
}

/// What the server did with a reservation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingReceipt {
    /// Sent to the forms backend.
    Forwarded { message: String },
    /// Honeypot hit; acknowledged, never sent.
    Discarded,
    Rejected(BookingError),
}

/// A request that passed [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidBooking {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub guests: String,
    pub date: NaiveDate,
    pub time: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum BookingError {
    #[error("name must be at least 2 characters")]
    Name,
    #[error("invalid email address")]
    Email,
    #[error("please enter a valid phone number")]
    Phone,
    #[error("please select number of guests")]
    Guests,
    #[error("please select a date")]
    Date,
    #[error("the restaurant is closed on {0}")]
    Closed(String),
    #[error("please select an available time")]
    Time,
    #[error("form submitted too quickly")]
    TooFast,
    #[error("reservation form expired or was tampered with")]
    InvalidTicket,
    #[error("honeypot field filled")]
    Spam,
}

/// Reservation slots for a day; Mondays are closed.
pub fn available_times(date: NaiveDate) -> &'static [&'static str] {
    match date.weekday() {
        Weekday::Mon => &[],
        Weekday::Tue | Weekday::Wed | Weekday::Thu => WEEKDAY_SLOTS,
        Weekday::Fri | Weekday::Sat | Weekday::Sun => WEEKEND_SLOTS,
    }
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

fn is_guest_count(value: &str) -> bool {
    value == "10+" || matches!(value.parse::<u8>(), Ok(1..=10))
}

/// Check a request the way the form does, plus the anti-spam rules.
///
/// `elapsed_ms` is the time between issuing the ticket and submitting.
pub fn validate(request: &BookingRequest, elapsed_ms: i64) -> Result<ValidBooking, BookingError> {
    if !request.website.is_empty() {
        return Err(BookingError::Spam);
    }
    if elapsed_ms < MIN_FILL_MILLIS {
        return Err(BookingError::TooFast);
    }

    let name = request.name.trim();
    if name.chars().count() < 2 {
        return Err(BookingError::Name);
    }
    let email = request.email.trim();
    if !is_email(email) {
        return Err(BookingError::Email);
    }
    let phone = request.phone.trim();
    if phone.chars().count() < 10 {
        return Err(BookingError::Phone);
    }
    let guests = request.guests.trim();
    if !is_guest_count(guests) {
        return Err(BookingError::Guests);
    }
    let date = parse_date(&request.date).ok_or(BookingError::Date)?;
    let slots = available_times(date);
    if slots.is_empty() {
        return Err(BookingError::Closed(date.weekday().to_string()));
    }
    let time = request.time.trim();
    if !slots.contains(&time) {
        return Err(BookingError::Time);
    }

    Ok(ValidBooking {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        guests: guests.to_string(),
        date,
        time: time.to_string(),
        message: request.message.trim().to_string(),
    })
}

pub fn subject_line(booking: &ValidBooking) -> String {
    format!(
        "Table Booking Request from {} for {} guests",
        booking.name, booking.guests
    )
}

/// JSON body accepted by the Web3Forms submit endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormsPayload {
    pub access_key: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub guests: String,
    pub date: String,
    pub time: String,
    pub message: String,
    pub subject: String,
    /// Web3Forms' own honeypot; always empty for forwarded bookings.
    pub botcheck: String,
}

impl FormsPayload {
    pub fn new(access_key: &str, booking: &ValidBooking) -> Self {
        Self {
            access_key: access_key.to_string(),
            name: booking.name.clone(),
            email: booking.email.clone(),
            phone: booking.phone.clone(),
            guests: booking.guests.clone(),
            date: booking.date.format("%Y-%m-%d").to_string(),
            time: booking.time.clone(),
            message: booking.message.clone(),
            subject: subject_line(booking),
            botcheck: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormsResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> BookingRequest {
        BookingRequest {
            name: "Dilnoza".to_string(),
            email: "dilnoza@example.com".to_string(),
            phone: "+49 69 1234567".to_string(),
            guests: "4".to_string(),
            // A Saturday.
            date: "2026-10-24".to_string(),
            time: "19:30".to_string(),
            message: "  Window seat, please  ".to_string(),
            website: String::new(),
        }
    }

    #[test]
    fn slots_depend_on_weekday() {
        let monday = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let wednesday = NaiveDate::from_ymd_opt(2026, 10, 21).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2026, 10, 25).unwrap();
        assert!(available_times(monday).is_empty());
        assert_eq!(available_times(wednesday).len(), 9);
        assert!(available_times(wednesday).contains(&"18:00"));
        assert!(!available_times(sunday).contains(&"18:00"));
        assert!(available_times(sunday).contains(&"21:30"));
    }

    #[test]
    fn accepts_a_complete_request() {
        let booking = validate(&request(), 10_000).unwrap();
        assert_eq!(booking.date, NaiveDate::from_ymd_opt(2026, 10, 24).unwrap());
        assert_eq!(booking.message, "Window seat, please");
        assert_eq!(
            subject_line(&booking),
            "Table Booking Request from Dilnoza for 4 guests"
        );
    }

    #[test]
    fn honeypot_wins_over_everything() {
        let mut req = BookingRequest {
            website: "http://spam".to_string(),
            ..BookingRequest::default()
        };
        assert_eq!(validate(&req, 0), Err(BookingError::Spam));
        req.website.clear();
        assert_eq!(validate(&req, 0), Err(BookingError::TooFast));
    }

    #[test]
    fn rejects_fast_submissions() {
        assert_eq!(validate(&request(), 2_999), Err(BookingError::TooFast));
        assert!(validate(&request(), MIN_FILL_MILLIS).is_ok());
    }

    #[test]
    fn field_rules() {
        let cases: Vec<(fn(&mut BookingRequest), BookingError)> = vec![
            (|r| r.name = "A".to_string(), BookingError::Name),
            (|r| r.email = "not-an-email".to_string(), BookingError::Email),
            (|r| r.email = "a@b".to_string(), BookingError::Email),
            (|r| r.email = "a b@c.de".to_string(), BookingError::Email),
            (|r| r.phone = "12345".to_string(), BookingError::Phone),
            (|r| r.guests = String::new(), BookingError::Guests),
            (|r| r.guests = "0".to_string(), BookingError::Guests),
            (|r| r.date = "24.10.2026".to_string(), BookingError::Date),
            (|r| r.time = "18:00".to_string(), BookingError::Time),
        ];
        for (mutate, expected) in cases {
            let mut req = request();
            mutate(&mut req);
            assert_eq!(validate(&req, 10_000), Err(expected));
        }
    }

    #[test]
    fn mondays_are_closed() {
        let req = BookingRequest {
            date: "2026-10-19".to_string(),
            ..request()
        };
        assert_eq!(
            validate(&req, 10_000),
            Err(BookingError::Closed("Mon".to_string()))
        );
    }

    #[test]
    fn large_parties_are_allowed() {
        let req = BookingRequest {
            guests: "10+".to_string(),
            ..request()
        };
        assert!(validate(&req, 10_000).is_ok());
    }

    #[test]
    fn payload_matches_forms_contract() {
        let booking = validate(&request(), 10_000).unwrap();
        let payload = FormsPayload::new("key-123", &booking);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["access_key"], "key-123");
        assert_eq!(json["date"], "2026-10-24");
        assert_eq!(json["time"], "19:30");
        assert_eq!(json["botcheck"], "");
        assert_eq!(
            json["subject"],
            "Table Booking Request from Dilnoza for 4 guests"
        );
    }

    #[test]
    fn response_message_is_optional() {
        let ok: FormsResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(ok.success);
        assert_eq!(ok.message, None);
    }
}
