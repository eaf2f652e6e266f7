//! Contact form handling
//!
//! Validates contact form input and stores submissions behind the
//! `ContactStore` trait. The bundled store keeps everything in memory and is
//! meant for development; a durable store plugs in through the same trait.

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

const MIN_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 10;

pub const SUCCESS_MESSAGE: &str = "Thank you for contacting us. We will get back to you shortly.";

/// Validation failures for contact form input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Name must be at least 2 characters")]
    NameTooShort,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

/// Raw form fields as posted by the browser
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Contact input that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInput {
    name: String,
    email: String,
    message: String,
}

impl ContactForm {
    /// Checks the form, reporting the first failing field
    pub fn validate(self) -> Result<ContactInput, ContactError> {
        if self.name.chars().count() < MIN_NAME_CHARS {
            return Err(ContactError::NameTooShort);
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        if self.message.chars().count() < MIN_MESSAGE_CHARS {
            return Err(ContactError::MessageTooShort);
        }

        Ok(ContactInput {
            name: self.name,
            email: self.email,
            message: self.message,
        })
    }
}

impl ContactInput {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A stored contact submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Result reported back to the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitOutcome {
    pub success: bool,
    pub message: String,
}

impl SubmitOutcome {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Storage for contact submissions
pub trait ContactStore: Send + Sync {
    fn submit(&self, input: ContactInput) -> ContactSubmission;

    fn list(&self) -> Vec<ContactSubmission>;

    fn clear(&self);
}

/// Process-local submission store. Lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryContactStore {
    submissions: Mutex<Vec<ContactSubmission>>,
}

impl InMemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactStore for InMemoryContactStore {
    fn submit(&self, input: ContactInput) -> ContactSubmission {
        let submission = ContactSubmission {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            email: input.email,
            message: input.message,
            created_at: Utc::now(),
        };

        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(submission.clone());

        submission
    }

    fn list(&self) -> Vec<ContactSubmission> {
        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn clear(&self) {
        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

/// Validates and stores a contact form
pub fn submit_contact(store: &dyn ContactStore, form: ContactForm) -> SubmitOutcome {
    match form.validate() {
        Ok(input) => {
            let submission = store.submit(input);
            info!(id = %submission.id, email = %submission.email, "new contact submission");
            SubmitOutcome {
                success: true,
                message: SUCCESS_MESSAGE.to_string(),
            }
        }
        Err(error) => {
            warn!(%error, "rejected contact submission");
            SubmitOutcome::failure(error.to_string())
        }
    }
}

/// Loose structural email check: `local@domain.tld`, no whitespace
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2
        && labels.iter().all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
        && labels.last().map_or(false, |tld| tld.len() >= 2)
}
