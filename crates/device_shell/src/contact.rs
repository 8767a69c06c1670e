//! Local state of the contact form. Lives inside the contact view, never in [`crate::ShellState`].

use platform_host::ContactSubmission;
use thiserror::Error;

/// Status line after the relay accepted a message.
pub const CONTACT_SENT_MESSAGE: &str = "Message sent successfully!";
/// Status line after the relay failed; doubles as the retry prompt.
pub const CONTACT_FAILED_MESSAGE: &str = "Failed to send message. Please try again.";

/// Field values typed into the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Progress of the latest submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContactStatus {
    #[default]
    Idle,
    Submitting,
    Sent,
    /// Relay error text; the form keeps its fields for a retry.
    Failed(String),
}

/// Reasons a submission is refused before it reaches the relay.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactFormError {
    #[error("a message is already being sent")]
    AlreadySubmitting,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("email address looks invalid")]
    InvalidEmail,
}

/// Draft plus submission status, owned by the contact view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFormState {
    pub draft: ContactDraft,
    pub status: ContactStatus,
}

impl ContactFormState {
    /// Returns `true` while a send is in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self.status, ContactStatus::Submitting)
    }

    /// User-visible status line, if any.
    pub fn status_message(&self) -> Option<&str> {
        match &self.status {
            ContactStatus::Sent => Some(CONTACT_SENT_MESSAGE),
            ContactStatus::Failed(_) => Some(CONTACT_FAILED_MESSAGE),
            ContactStatus::Idle | ContactStatus::Submitting => None,
        }
    }

    /// Validates the draft and enters `Submitting`, returning the payload to hand to the relay.
    pub fn begin_submit(&mut self) -> Result<ContactSubmission, ContactFormError> {
        if self.is_submitting() {
            return Err(ContactFormError::AlreadySubmitting);
        }
        let name = self.draft.name.trim();
        let email = self.draft.email.trim();
        let message = self.draft.message.trim();
        if name.is_empty() {
            return Err(ContactFormError::MissingField("name"));
        }
        if email.is_empty() {
            return Err(ContactFormError::MissingField("email"));
        }
        if message.is_empty() {
            return Err(ContactFormError::MissingField("message"));
        }
        if !email.contains('@') {
            return Err(ContactFormError::InvalidEmail);
        }

        let submission = ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        };
        self.status = ContactStatus::Submitting;
        Ok(submission)
    }

    /// Records the relay outcome. Success clears the fields; failure keeps them for a retry.
    pub fn finish_submit(&mut self, outcome: Result<(), String>) {
        match outcome {
            Ok(()) => {
                self.draft = ContactDraft::default();
                self.status = ContactStatus::Sent;
            }
            Err(err) => self.status = ContactStatus::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{ContactRelayService, MemoryContactRelayService};
    use pretty_assertions::assert_eq;

    use super::*;

    fn filled() -> ContactFormState {
        ContactFormState {
            draft: ContactDraft {
                name: " Ada ".to_string(),
                email: "ada@example.com".to_string(),
                message: "Hello there".to_string(),
            },
            status: ContactStatus::Idle,
        }
    }

    #[test]
    fn successful_send_clears_fields() {
        let relay = MemoryContactRelayService::default();
        let mut form = filled();

        let submission = form.begin_submit().expect("valid draft");
        assert!(form.is_submitting());
        assert_eq!(submission.name, "Ada");

        let outcome = block_on(relay.submit(&submission));
        form.finish_submit(outcome);

        assert_eq!(form.draft, ContactDraft::default());
        assert_eq!(form.status_message(), Some(CONTACT_SENT_MESSAGE));
        assert_eq!(relay.sent().len(), 1);
    }

    #[test]
    fn failed_send_keeps_fields_for_retry() {
        let relay = MemoryContactRelayService::failing("503");
        let mut form = filled();
        let draft = form.draft.clone();

        let submission = form.begin_submit().expect("valid draft");
        form.finish_submit(block_on(relay.submit(&submission)));

        assert_eq!(form.draft, draft);
        assert_eq!(form.status, ContactStatus::Failed("503".to_string()));
        assert_eq!(form.status_message(), Some(CONTACT_FAILED_MESSAGE));
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn double_submit_is_rejected_while_in_flight() {
        let mut form = filled();
        form.begin_submit().expect("first submit");
        assert_eq!(form.begin_submit(), Err(ContactFormError::AlreadySubmitting));
    }

    #[test]
    fn validation_reports_the_first_problem() {
        let mut form = ContactFormState::default();
        assert_eq!(form.begin_submit(), Err(ContactFormError::MissingField("name")));

        form.draft.name = "Ada".to_string();
        form.draft.email = "not-an-address".to_string();
        form.draft.message = "hi".to_string();
        assert_eq!(form.begin_submit(), Err(ContactFormError::InvalidEmail));
        assert_eq!(form.status, ContactStatus::Idle);
    }
}
