//! Contact form fields, payload, and submission state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a contact form submission stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl FormState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A selectable entry in the form's service dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOption {
    /// Value posted in the `service` field.
    pub value: &'static str,
    /// Text shown in the dropdown.
    pub label: &'static str,
}

/// Services a visitor can ask about.
pub const SERVICE_OPTIONS: [ServiceOption; 5] = [
    ServiceOption {
        value: "used-oil-collection",
        label: "Used Oil Collection",
    },
    ServiceOption {
        value: "fresh-oil-supply",
        label: "Fresh Oil Supply",
    },
    ServiceOption {
        value: "collection-and-supply",
        label: "Collection & Supply",
    },
    ServiceOption {
        value: "compliance-support",
        label: "Compliance Support",
    },
    ServiceOption {
        value: "other",
        label: "Something Else",
    },
];

/// Values typed into the contact form.
///
/// Deserializes from the browser's form post. Missing fields become empty
/// strings; required-field checks happen in the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub business: String,
    pub service: String,
    pub message: String,
}

impl ContactForm {
    /// Blank every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Build the outbound payload from the current values.
    pub fn payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            business: self.business.clone(),
            service: self.service.clone(),
            message: self.message.clone(),
        }
    }
}

/// Form-encoded body sent to the form endpoint. Lives only for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub business: String,
    pub service: String,
    pub message: String,
}

impl ContactPayload {
    /// Field name and value pairs, in wire order.
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("business", &self.business),
            ("service", &self.service),
            ("message", &self.message),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_blanks_every_field() {
        let mut form = ContactForm {
            name: "Jane Doe".to_owned(),
            email: "jane@example.com".to_owned(),
            phone: "0161 000 0000".to_owned(),
            business: "Jane's Diner".to_owned(),
            service: "used-oil-collection".to_owned(),
            message: "Need weekly collection".to_owned(),
        };
        assert!(!form.is_empty());
        form.clear();
        assert!(form.is_empty());
    }

    #[test]
    fn payload_carries_all_six_fields() {
        let form = ContactForm {
            name: "Jane Doe".to_owned(),
            service: "fresh-oil-supply".to_owned(),
            ..ContactForm::default()
        };
        let payload = form.payload();
        let names: Vec<_> = payload.fields().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            names,
            ["name", "email", "phone", "business", "service", "message"]
        );
        assert_eq!(payload.fields()[0].1, "Jane Doe");
        assert_eq!(payload.fields()[2].1, "");
    }

    #[test]
    fn service_values_are_unique() {
        let mut values: Vec<_> = SERVICE_OPTIONS.iter().map(|o| o.value).collect();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), SERVICE_OPTIONS.len());
    }
}
