//! Contact Form
//!
//! Field validation and interpretation of the submission result.

use regex::Regex;
use std::sync::OnceLock;

use crate::api::ApiError;
use crate::i18n::{t, Lang};
use crate::models::{ContactPayload, ContactReply, ContactResponse};

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Contact form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    /// Translation key of the validation message
    pub fn message_key(self) -> &'static str {
        match self {
            Field::Name => "contact.form.errorName",
            Field::Email => "contact.form.errorEmail",
            Field::Phone => "contact.form.errorPhone",
            Field::Message => "contact.form.errorMessage",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
}

/// User-visible outcome shown as a notice
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Success(String),
    Error(String),
    /// Consolidated validation errors, translated when shown
    Validation(Vec<FieldError>),
}

/// Contact form state
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    /// Validate all fields, in form order
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError { field: Field::Name });
        }
        if !is_valid_email(&self.email) {
            errors.push(FieldError { field: Field::Email });
        }
        if self.phone.trim().is_empty() {
            errors.push(FieldError { field: Field::Phone });
        }
        if self.message.trim().is_empty() {
            errors.push(FieldError { field: Field::Message });
        }
        errors
    }

    pub fn payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            message: self.message.clone(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Turn the submission result into a notice; the form is cleared only on success
    pub fn finish(&mut self, result: Result<ContactResponse, ApiError>, lang: Lang) -> Notice {
        let response = match result {
            Ok(response) => response,
            Err(e) => {
                log::error!("[contact] submission failed: {}", e);
                return Notice::Error(t(lang, "contact.form.error").to_string());
            }
        };

        if !response.ok {
            log::warn!("[contact] server rejected submission with status {}", response.status);
            let body = response.body.trim();
            return Notice::Error(if body.is_empty() {
                t(lang, "contact.form.error").to_string()
            } else {
                body.to_string()
            });
        }

        match serde_json::from_str::<ContactReply>(&response.body) {
            Ok(reply) => {
                self.clear();
                Notice::Success(
                    reply
                        .message
                        .filter(|m| !m.is_empty())
                        .unwrap_or_else(|| t(lang, "contact.form.success").to_string()),
                )
            }
            Err(e) => {
                log::error!("[contact] malformed acknowledgment: {}", e);
                Notice::Error(t(lang, "contact.form.error").to_string())
            }
        }
    }
}

/// One bulleted line per validation error
pub fn validation_lines(errors: &[FieldError], lang: Lang) -> Vec<String> {
    errors
        .iter()
        .map(|e| format!("• {}", t(lang, e.field.message_key())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Айгерим".to_string(),
            email: "parent@example.kz".to_string(),
            phone: "+7 701 000 00 00".to_string(),
            message: "Хотим записать ребёнка в 1 класс".to_string(),
        }
    }

    fn response(ok: bool, status: u16, body: &str) -> Result<ContactResponse, ApiError> {
        Ok(ContactResponse { ok, status, body: body.to_string() })
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_filled_form_is_valid() {
        assert!(filled().validate().is_empty());
    }

    #[test]
    fn test_empty_name_and_bad_email_give_two_lines() {
        let form = ContactForm {
            name: "   ".to_string(),
            email: "not-an-email".to_string(),
            ..filled()
        };
        let errors = form.validate();
        assert_eq!(
            errors.iter().map(|e| e.field).collect::<Vec<_>>(),
            vec![Field::Name, Field::Email]
        );

        let lines = validation_lines(&errors, Lang::En);
        assert_eq!(lines, vec![
            "• Please enter your name.".to_string(),
            "• Please enter a valid email.".to_string(),
        ]);
    }

    #[test]
    fn test_validation_notice_follows_language() {
        let form = ContactForm { phone: String::new(), ..filled() };
        let errors = form.validate();
        assert_eq!(Notice::Validation(errors.clone()), Notice::Validation(vec![FieldError { field: Field::Phone }]));

        assert_eq!(validation_lines(&errors, Lang::En), vec!["• Please enter phone number.".to_string()]);
        assert_eq!(
            validation_lines(&errors, Lang::Kz),
            vec![format!("• {}", t(Lang::Kz, "contact.form.errorPhone"))]
        );
        assert_ne!(validation_lines(&errors, Lang::Ru), validation_lines(&errors, Lang::En));
    }

    #[test]
    fn test_empty_form_reports_all_fields() {
        let errors = ContactForm::default().validate();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[3].field, Field::Message);
    }

    #[test]
    fn test_success_clears_form() {
        let mut form = filled();
        let notice = form.finish(response(true, 200, r#"{"status":"success","message":"Спасибо!"}"#), Lang::Ru);
        assert_eq!(notice, Notice::Success("Спасибо!".to_string()));
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_success_without_message_uses_localized_text() {
        let mut form = filled();
        let notice = form.finish(response(true, 200, "{}"), Lang::En);
        assert_eq!(notice, Notice::Success("Message successfully received and saved!".to_string()));
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_server_error_surfaces_body_text() {
        let mut form = filled();
        let notice = form.finish(response(false, 500, "Error saving data to database\n"), Lang::Ru);
        assert_eq!(notice, Notice::Error("Error saving data to database".to_string()));
        assert_eq!(form, filled());
    }

    #[test]
    fn test_server_error_with_empty_body_is_generic() {
        let mut form = filled();
        let notice = form.finish(response(false, 502, ""), Lang::En);
        assert_eq!(notice, Notice::Error("Failed to send message. Please try again later.".to_string()));
    }

    #[test]
    fn test_network_failure_keeps_form() {
        let mut form = filled();
        let notice = form.finish(Err(ApiError::Network("offline".to_string())), Lang::Kz);
        assert_eq!(notice, Notice::Error(t(Lang::Kz, "contact.form.error").to_string()));
        assert_eq!(form, filled());
    }

    #[test]
    fn test_malformed_success_body_is_error() {
        let mut form = filled();
        let notice = form.finish(response(true, 200, "OK"), Lang::En);
        assert!(matches!(notice, Notice::Error(_)));
        assert_eq!(form, filled());
    }

    #[test]
    fn test_payload_copies_fields() {
        let payload = filled().payload();
        assert_eq!(payload.email, "parent@example.kz");
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["phone"], "+7 701 000 00 00");
    }
}
