use crate::utils::error::{Result, SiteError};
use serde::{Deserialize, Serialize};

pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/mrbaynvy";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    TextArea { rows: u8 },
}

/// One field of the contact form as it appears in the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    /// Name sent on the wire.
    pub name: &'static str,
    /// DOM id, also the label's `for`.
    pub id: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: InputKind,
    pub required: bool,
}

pub const CONTACT_FIELDS: [FormField; 3] = [
    FormField {
        name: "name",
        id: "name",
        label: "Name",
        placeholder: "Your Name",
        kind: InputKind::Text,
        required: true,
    },
    FormField {
        name: "_replyto",
        id: "email",
        label: "Email",
        placeholder: "Your Email",
        kind: InputKind::Email,
        required: true,
    },
    FormField {
        name: "message",
        id: "message",
        label: "Message",
        placeholder: "Your Message",
        kind: InputKind::TextArea { rows: 5 },
        required: true,
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Wire fields in form order.
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            (CONTACT_FIELDS[0].name, self.name.as_str()),
            (CONTACT_FIELDS[1].name, self.email.as_str()),
            (CONTACT_FIELDS[2].name, self.message.as_str()),
        ]
    }

    /// Native `required` semantics: only an empty value blocks submission.
    pub fn validate(&self) -> Result<()> {
        for (field, (name, value)) in CONTACT_FIELDS.iter().zip(self.fields()) {
            if field.required && value.is_empty() {
                return Err(SiteError::RequiredFieldMissing {
                    field: name.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn is_submittable(&self) -> bool {
        self.validate().is_ok()
    }
}

/// What came back from the relay. Reported as-is, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayResponse {
    pub status: u16,
    pub final_url: String,
}
