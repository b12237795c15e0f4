//! This crate contains all shared fullstack server functions.
use dioxus::prelude::*;

pub mod booking;
pub mod config;

#[cfg(feature = "server")]
pub mod forms;

#[cfg(feature = "server")]
pub mod state;

#[cfg(feature = "server")]
pub mod test_utils;

#[cfg(feature = "server")]
pub mod ticket;

use booking::{BookingReceipt, BookingRequest, BookingTicket};

/// Health check endpoint
#[get("/api/health")]
pub async fn health_check() -> Result<String, ServerFnError> {
    #[cfg(feature = "server")]
    tracing::debug!("health_check");
    Ok("OK".to_string())
}

/// Signed server time stamp the reservation form carries until it is submitted.
#[get("/api/booking/ticket")]
pub async fn booking_ticket() -> Result<BookingTicket, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("booking_ticket is server-only"))
    }

    #[cfg(feature = "server")]
    {
        tracing::debug!("booking.ticket");
        let state = state::AppState::global();
        Ok(state.tickets.issue(chrono::Utc::now().timestamp_millis()))
    }
}

/// Validate a reservation and hand it to the configured forms backend.
///
/// Invalid requests come back as [`BookingReceipt::Rejected`]; only backend
/// failures are errors. Honeypot hits are acknowledged but never forwarded.
#[post("/api/booking")]
pub async fn submit_booking(
    request: BookingRequest,
    ticket: BookingTicket,
) -> Result<BookingReceipt, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = (request, ticket);
        Err(ServerFnError::new("submit_booking is server-only"))
    }

    #[cfg(feature = "server")]
    {
        use booking::BookingError;
        use tracing::{info, warn};

        let state = state::AppState::global();
        let now_ms = chrono::Utc::now().timestamp_millis();
        let elapsed_ms = match state.tickets.verify(&ticket, now_ms) {
            Ok(elapsed_ms) => elapsed_ms,
            // Bots with a bad ticket still get the quiet honeypot answer below.
            Err(_) if !request.website.is_empty() => 0,
            Err(e) => {
                info!(
                    "booking.submit: rejected reason={e} issued_at_ms={}",
                    ticket.issued_at_ms
                );
                return Ok(BookingReceipt::Rejected(e));
            }
        };

        let valid = match booking::validate(&request, elapsed_ms) {
            Ok(valid) => valid,
            Err(BookingError::Spam) => {
                info!("booking.submit: honeypot filled, dropping");
                return Ok(BookingReceipt::Discarded);
            }
            Err(e) => {
                info!("booking.submit: rejected reason={e}");
                return Ok(BookingReceipt::Rejected(e));
            }
        };

        match state.forms.submit(&valid).await {
            Ok(response) => {
                info!(
                    "booking.submit: forwarded guests={} date={} time={}",
                    valid.guests, valid.date, valid.time
                );
                Ok(BookingReceipt::Forwarded {
                    message: response.message.unwrap_or_else(|| "ok".to_string()),
                })
            }
            Err(e) => {
                warn!("booking.submit: forms backend failed: {e:#}");
                Err(ServerFnError::new("could not send the reservation request"))
            }
        }
    }
}
