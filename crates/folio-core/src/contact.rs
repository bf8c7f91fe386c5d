//! Contact form bridge.
//!
//! A pass-through adapter between the form, the CAPTCHA challenge and the
//! email relay, expressed as a three-phase machine: `Idle -> Challenge ->
//! Sending -> Idle`. The challenge token is single-use, so every completion
//! path resets the CAPTCHA. Failure keeps the typed field values; success
//! clears them.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::effect::Effect;
use crate::error::RelayError;

/// Site title constant carried in every payload.
pub const SITE_TITLE: &str = "Folio";

/// Credentials for the email relay collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelayCredentials {
    pub public_key: String,
    pub service_id: String,
    pub template_id: String,
}

impl RelayCredentials {
    /// Whether every field needed for activation is present.
    pub fn is_complete(&self) -> bool {
        !self.public_key.is_empty() && !self.service_id.is_empty() && !self.template_id.is_empty()
    }
}

/// The fixed-shape payload handed to the relay's send operation.
///
/// Field names are the relay template's parameter names; they are part of
/// the external contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailPayload {
    pub from_name: String,
    pub reply_to: String,
    pub message: String,
    pub site_title: String,
    pub sent_at: String,
    #[serde(rename = "g-recaptcha-response")]
    pub captcha_token: String,
}

/// The typed field values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Where a submission currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    /// Waiting for the CAPTCHA round-trip.
    Challenge,
    /// Waiting for the relay send to complete.
    Sending,
}

/// User-visible outcome of the last submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Sent,
    Failed(String),
}

/// The contact form state machine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub fields: ContactFields,
    phase: SubmitPhase,
    pub notice: Option<Notice>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Intercept a submission: trigger the CAPTCHA instead of a default
    /// submit. A submission already in flight makes this a no-op.
    pub fn submit(&mut self) -> Vec<Effect> {
        if self.phase != SubmitPhase::Idle {
            return Vec::new();
        }
        self.phase = SubmitPhase::Challenge;
        self.notice = None;
        vec![Effect::ExecuteChallenge]
    }

    /// The CAPTCHA completed with a one-time token: assemble the payload
    /// and hand it to the relay.
    pub fn challenge_passed(&mut self, token: &str, now: DateTime<Utc>) -> Vec<Effect> {
        if self.phase != SubmitPhase::Challenge {
            return Vec::new();
        }
        self.phase = SubmitPhase::Sending;
        let payload = EmailPayload {
            from_name: self.fields.name.clone(),
            reply_to: self.fields.email.clone(),
            message: self.fields.message.clone(),
            site_title: SITE_TITLE.to_string(),
            sent_at: now.format("%Y-%m-%d %H:%M UTC").to_string(),
            captcha_token: token.to_string(),
        };
        vec![Effect::SendEmail(Box::new(payload))]
    }

    /// The CAPTCHA could not complete. The form stays filled so nothing
    /// typed is lost, and the widget is reset for a retry.
    pub fn challenge_failed(&mut self, reason: impl Into<String>) -> Vec<Effect> {
        if self.phase != SubmitPhase::Challenge {
            return Vec::new();
        }
        self.phase = SubmitPhase::Idle;
        self.notice = Some(Notice::Failed(reason.into()));
        vec![Effect::ResetChallenge]
    }

    /// The relay send finished. Success clears the fields; failure keeps
    /// them. Either way the submit control is restored and the CAPTCHA
    /// reset (its token was single-use).
    pub fn send_finished(&mut self, outcome: Result<(), RelayError>) -> Vec<Effect> {
        if self.phase != SubmitPhase::Sending {
            return Vec::new();
        }
        self.phase = SubmitPhase::Idle;
        match outcome {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.notice = Some(Notice::Sent);
            }
            Err(err) => {
                tracing::error!(error = %err, "contact form send failed");
                self.notice = Some(Notice::Failed(err.to_string()));
            }
        }
        vec![Effect::ResetChallenge]
    }

    /// Whether the submit control is disabled (submission in flight).
    pub fn submit_disabled(&self) -> bool {
        self.phase != SubmitPhase::Idle
    }

    /// Label for the submit control.
    pub fn submit_label(&self) -> &'static str {
        match self.phase {
            SubmitPhase::Idle => "Send",
            SubmitPhase::Challenge => "Verifying...",
            SubmitPhase::Sending => "Sending...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.fields = ContactFields {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        };
        form
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_submit_triggers_challenge() {
        let mut form = filled();
        assert_eq!(form.submit(), vec![Effect::ExecuteChallenge]);
        assert_eq!(form.phase(), SubmitPhase::Challenge);
        assert!(form.submit_disabled());
        assert_eq!(form.submit_label(), "Verifying...");
    }

    #[test]
    fn test_resubmit_in_flight_is_noop() {
        let mut form = filled();
        let _ = form.submit();
        assert!(form.submit().is_empty());
    }

    #[test]
    fn test_payload_shape() {
        let mut form = filled();
        let _ = form.submit();
        let effects = form.challenge_passed("tok-1", at());

        let Effect::SendEmail(payload) = &effects[0] else {
            panic!("expected SendEmail, got {effects:?}");
        };
        assert_eq!(payload.from_name, "Ada");
        assert_eq!(payload.reply_to, "ada@example.com");
        assert_eq!(payload.message, "Hello there");
        assert_eq!(payload.site_title, SITE_TITLE);
        assert_eq!(payload.sent_at, "2025-06-01 12:30 UTC");
        assert_eq!(payload.captcha_token, "tok-1");
        assert_eq!(form.submit_label(), "Sending...");
    }

    #[test]
    fn test_payload_serializes_token_under_widget_name() {
        let mut form = filled();
        let _ = form.submit();
        let effects = form.challenge_passed("tok-1", at());
        let Effect::SendEmail(payload) = &effects[0] else {
            panic!("expected SendEmail");
        };
        let json = serde_json::to_value(payload.as_ref()).unwrap();
        assert_eq!(json["g-recaptcha-response"], "tok-1");
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut form = filled();
        let _ = form.submit();
        let _ = form.challenge_passed("tok-1", at());

        let effects = form.send_finished(Err(RelayError::Rejected(500)));
        assert_eq!(effects, vec![Effect::ResetChallenge]);
        assert_eq!(form.fields.name, "Ada");
        assert_eq!(form.fields.message, "Hello there");
        assert!(matches!(form.notice, Some(Notice::Failed(_))));
        assert!(!form.submit_disabled());
    }

    #[test]
    fn test_success_clears_fields() {
        let mut form = filled();
        let _ = form.submit();
        let _ = form.challenge_passed("tok-1", at());

        let effects = form.send_finished(Ok(()));
        assert_eq!(effects, vec![Effect::ResetChallenge]);
        assert_eq!(form.fields, ContactFields::default());
        assert_eq!(form.notice, Some(Notice::Sent));
    }

    #[test]
    fn test_challenge_failure_resets_widget() {
        let mut form = filled();
        let _ = form.submit();
        let effects = form.challenge_failed("challenge widget unavailable");
        assert_eq!(effects, vec![Effect::ResetChallenge]);
        assert_eq!(form.fields.name, "Ada");
        assert!(!form.submit_disabled());
    }

    #[test]
    fn test_stray_callbacks_are_ignored() {
        let mut form = filled();
        // Token arriving with no submission in flight.
        assert!(form.challenge_passed("tok-1", at()).is_empty());
        // Send completion with no send in flight.
        assert!(form.send_finished(Ok(())).is_empty());
        assert_eq!(form.fields.name, "Ada");
    }
}
