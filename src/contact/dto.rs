use serde::{Deserialize, Serialize};

use crate::contact::repo::ContactMessage;

/// Inbound contact-form submission. All fields optional at the serde level;
/// presence is validated by the handler so missing fields answer 400.
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// Validated form ready to persist.
#[derive(Debug)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl ContactRequest {
    /// Presence check for name, email, subject and message; phone optional.
    pub fn validate(self) -> Result<ContactForm, &'static str> {
        fn required(field: Option<String>) -> Result<String, &'static str> {
            match field {
                Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
                _ => Err("Missing required fields"),
            }
        }

        Ok(ContactForm {
            name: required(self.name)?,
            email: required(self.email)?,
            subject: required(self.subject)?,
            message: required(self.message)?,
            phone: self.phone.filter(|p| !p.trim().is_empty()),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub data: ContactMessage,
}
