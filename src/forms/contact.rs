use serde::{Deserialize, Serialize};

use crate::common::ContactFormError;
use crate::log_err;
use crate::models::ServiceCategory;

use super::Toast;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Services,
}

impl ContactField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "nama",
            Self::Email => "email",
            Self::Services => "minimal satu layanan",
        }
    }
}

/// A validated enquiry. There is no backend to send it to yet, so accepting
/// one only logs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: Option<String>,
    pub services: Vec<ServiceCategory>,
}

/// Live state of the contact form in the CTA section.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    services: Vec<ServiceCategory>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn services(&self) -> &[ServiceCategory] {
        &self.services
    }

    pub fn is_selected(&self, service: ServiceCategory) -> bool {
        self.services.contains(&service)
    }

    /// Adds the service if absent, removes it otherwise. Selection order is kept.
    pub fn toggle_service(&mut self, service: ServiceCategory) {
        if let Some(pos) = self.services.iter().position(|s| *s == service) {
            self.services.remove(pos);
        } else {
            self.services.push(service);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.message.is_empty()
            && self.services.is_empty()
    }

    pub fn missing_fields(&self) -> Vec<ContactField> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push(ContactField::Name);
        }
        if self.email.trim().is_empty() {
            missing.push(ContactField::Email);
        }
        if self.services.is_empty() {
            missing.push(ContactField::Services);
        }
        missing
    }

    pub fn validate(&self) -> Result<ContactRequest, ContactFormError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ContactFormError::Incomplete { missing });
        }

        let message = self.message.trim();
        Ok(ContactRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: (!message.is_empty()).then(|| message.to_string()),
            services: self.services.clone(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validates and, on success, clears every field.
    ///
    /// A rejected submission leaves the form untouched so the visitor can
    /// correct it. Either way the returned toast is what gets shown.
    pub fn submit(&mut self) -> Result<(ContactRequest, Toast), Toast> {
        match self.validate() {
            Ok(request) => {
                tracing::info!(
                    services = request.services.len(),
                    has_message = request.message.is_some(),
                    "contact request accepted"
                );
                let toast = Toast::success(
                    "Permintaan Terkirim",
                    format!(
                        "Terima kasih, {}! Tim kami akan segera menghubungi Anda.",
                        request.name
                    ),
                );
                self.reset();
                Ok((request, toast))
            }
            Err(e) => {
                log_err!("contact form rejected", &e.missing());
                Err(Toast::destructive("Formulir Belum Lengkap", e.to_string()))
            }
        }
    }
}
