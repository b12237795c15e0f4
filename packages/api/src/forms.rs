use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::booking::{FormsPayload, FormsResponse, ValidBooking};

fn email_domain(email: &str) -> &str {
    email.split('@').nth(1).unwrap_or("invalid")
}

/// Destination for validated reservation requests.
#[async_trait]
pub trait FormsService: Send + Sync {
    async fn submit(&self, booking: &ValidBooking) -> Result<FormsResponse>;
}

/// Posts bookings to the Web3Forms API (production).
pub struct Web3FormsService {
    client: reqwest::Client,
    endpoint: String,
    access_key: String,
}

impl Web3FormsService {
    pub fn new(endpoint: &str, access_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
            access_key: access_key.to_string(),
        }
    }
}

#[async_trait]
impl FormsService for Web3FormsService {
    async fn submit(&self, booking: &ValidBooking) -> Result<FormsResponse> {
        debug!(
            "forms.web3forms.submit: email_domain={} guests={} date={}",
            email_domain(&booking.email),
            booking.guests,
            booking.date
        );
        let payload = FormsPayload::new(&self.access_key, booking);
        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body: FormsResponse = response.json().await?;
        if !status.is_success() || !body.success {
            warn!(
                "forms.web3forms.submit: rejected status={} message={:?}",
                status, body.message
            );
            anyhow::bail!("forms API rejected the submission ({status})");
        }
        Ok(body)
    }
}

/// Logs bookings instead of sending them (local development).
pub struct ConsoleFormsService;

#[async_trait]
impl FormsService for ConsoleFormsService {
    async fn submit(&self, booking: &ValidBooking) -> Result<FormsResponse> {
        info!(
            "forms.console.submit (local mode, not sent): name={} email={} phone={} guests={} date={} time={} message_len={}",
            booking.name,
            booking.email,
            booking.phone,
            booking.guests,
            booking.date,
            booking.time,
            booking.message.len()
        );
        Ok(FormsResponse {
            success: true,
            message: Some("logged".to_string()),
        })
    }
}
