//! Contact details submitted from the header's "More info" form.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while reading the contact form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContactError {
    /// A required field was empty or whitespace only.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl ContactInfo {
    /// Builds the contact record, requiring every field to be present.
    ///
    /// Presence is the only check; the values are otherwise taken as typed.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ContactError> {
        let info = Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        };
        for (field, value) in [
            ("name", &info.name),
            ("phone", &info.phone),
            ("email", &info.email),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        Ok(info)
    }
}
