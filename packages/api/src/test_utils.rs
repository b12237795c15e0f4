use crate::booking::{BookingTicket, FormsResponse, ValidBooking};
use crate::config::{AppConfig, AppMode, FormsConfig};
use crate::forms::FormsService;
use crate::state::{AppState, TEST_STATE};
use crate::ticket::TicketSigner;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Forms backend that keeps every booking it receives.
#[derive(Default)]
pub struct RecordingFormsService {
    pub received: Mutex<Vec<ValidBooking>>,
    pub fail: bool,
}

#[async_trait]
impl FormsService for RecordingFormsService {
    async fn submit(&self, booking: &ValidBooking) -> Result<FormsResponse> {
        if self.fail {
            anyhow::bail!("forms backend unavailable");
        }
        self.received
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(booking.clone());
        Ok(FormsResponse {
            success: true,
            message: None,
        })
    }
}

/// Installs a thread-local [`AppState`] backed by a [`RecordingFormsService`]
/// for the lifetime of the context.
pub struct TestContext {
    pub forms: Arc<RecordingFormsService>,
    pub state: Arc<AppState>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_forms(RecordingFormsService::default())
    }

    pub fn failing() -> Self {
        Self::with_forms(RecordingFormsService {
            fail: true,
            ..RecordingFormsService::default()
        })
    }

    fn with_forms(forms: RecordingFormsService) -> Self {
        let forms = Arc::new(forms);
        let state = Arc::new(AppState {
            forms: forms.clone(),
            tickets: TicketSigner::new(b"test-ticket-secret").expect("hmac accepts any key"),
            config: AppConfig {
                mode: AppMode::Local,
                forms: FormsConfig::Console,
                ticket_secret: Some("test-ticket-secret".to_string()),
            },
        });
        TEST_STATE.with(|s| *s.borrow_mut() = Some(state.clone()));
        Self { forms, state }
    }

    /// A genuine ticket whose timestamp lies `ms` in the past (negative: future).
    pub fn ticket_issued_ms_ago(&self, ms: i64) -> BookingTicket {
        self.state
            .tickets
            .issue(chrono::Utc::now().timestamp_millis() - ms)
    }

    pub fn received(&self) -> Vec<ValidBooking> {
        self.forms
            .received
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        TEST_STATE.with(|s| *s.borrow_mut() = None);
    }
}
