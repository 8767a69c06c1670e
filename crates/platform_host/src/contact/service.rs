//! Contact relay service contract and in-process adapters.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`ContactRelayService`].
pub type ContactRelayFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One message typed into the contact form.
pub struct ContactSubmission {
    /// Sender display name.
    pub name: String,
    /// Sender reply address.
    pub email: String,
    /// Message body.
    pub message: String,
}

/// Host service that delivers a contact message to the site owner.
pub trait ContactRelayService {
    /// Sends one submission. Runs to completion or failure; there is no cancellation.
    fn submit<'a>(
        &'a self,
        submission: &'a ContactSubmission,
    ) -> ContactRelayFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op relay for targets without network access.
pub struct NoopContactRelayService;

impl ContactRelayService for NoopContactRelayService {
    fn submit<'a>(
        &'a self,
        _submission: &'a ContactSubmission,
    ) -> ContactRelayFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory relay that records submissions; optionally fails every send.
pub struct MemoryContactRelayService {
    sent: Rc<RefCell<Vec<ContactSubmission>>>,
    failure: Option<String>,
}

impl MemoryContactRelayService {
    /// Relay that rejects every submission with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            sent: Rc::default(),
            failure: Some(message.into()),
        }
    }

    /// Submissions delivered so far.
    pub fn sent(&self) -> Vec<ContactSubmission> {
        self.sent.borrow().clone()
    }
}

impl ContactRelayService for MemoryContactRelayService {
    fn submit<'a>(
        &'a self,
        submission: &'a ContactSubmission,
    ) -> ContactRelayFuture<'a, Result<(), String>> {
        Box::pin(async move {
            if let Some(message) = &self.failure {
                return Err(message.clone());
            }
            self.sent.borrow_mut().push(submission.clone());
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            message: "Let's build something".to_string(),
        }
    }

    #[test]
    fn memory_relay_records_submissions_through_trait_object() {
        let relay = MemoryContactRelayService::default();
        let relay_obj: &dyn ContactRelayService = &relay;

        block_on(relay_obj.submit(&submission())).expect("send");
        assert_eq!(relay.sent(), vec![submission()]);
    }

    #[test]
    fn failing_relay_reports_error_and_records_nothing() {
        let relay = MemoryContactRelayService::failing("relay offline");
        assert_eq!(
            block_on(relay.submit(&submission())),
            Err("relay offline".to_string())
        );
        assert!(relay.sent().is_empty());
    }

    #[test]
    fn noop_relay_accepts() {
        assert_eq!(block_on(NoopContactRelayService.submit(&submission())), Ok(()));
    }
}
