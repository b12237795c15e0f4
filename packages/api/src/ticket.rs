//! Signed fill-time tickets for the reservation form.

use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::Sha256;

use crate::booking::{BookingError, BookingTicket, MAX_TICKET_AGE_MILLIS};

type HmacSha256 = Hmac<Sha256>;

/// Issues and checks [`BookingTicket`]s with a key that never leaves the server.
#[derive(Clone)]
pub struct TicketSigner {
    mac: HmacSha256,
}

impl TicketSigner {
    pub fn new(secret: &[u8]) -> anyhow::Result<Self> {
        let mac = HmacSha256::new_from_slice(secret)
            .map_err(|e| anyhow::anyhow!("invalid ticket secret: {e}"))?;
        Ok(Self { mac })
    }

    /// Per-process key; outstanding tickets stop verifying after a restart.
    pub fn random() -> anyhow::Result<Self> {
        let key: [u8; 32] = rand::thread_rng().gen();
        Self::new(&key)
    }

    fn keyed(&self, issued_at_ms: i64) -> HmacSha256 {
        let mut mac = self.mac.clone();
        mac.update(&issued_at_ms.to_be_bytes());
        mac
    }

    pub fn issue(&self, issued_at_ms: i64) -> BookingTicket {
        let tag = self.keyed(issued_at_ms).finalize().into_bytes();
        BookingTicket {
            issued_at_ms,
            signature: hex::encode(tag),
        }
    }

    /// Milliseconds between issuing `ticket` and `now_ms`.
    ///
    /// Fails for tickets this signer did not issue, tickets from the future
    /// and tickets older than [`MAX_TICKET_AGE_MILLIS`].
    pub fn verify(&self, ticket: &BookingTicket, now_ms: i64) -> Result<i64, BookingError> {
        let tag = hex::decode(&ticket.signature).map_err(|_| BookingError::InvalidTicket)?;
        self.keyed(ticket.issued_at_ms)
            .verify_slice(&tag)
            .map_err(|_| BookingError::InvalidTicket)?;

        let elapsed_ms = now_ms.saturating_sub(ticket.issued_at_ms);
        if !(0..=MAX_TICKET_AGE_MILLIS).contains(&elapsed_ms) {
            return Err(BookingError::InvalidTicket);
        }
        Ok(elapsed_ms)
    }
}
