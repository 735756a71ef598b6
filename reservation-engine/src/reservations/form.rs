//! Booking form intake
//!
//! Raw wizard input arrives as strings. This layer checks completeness and
//! contact formats before anything reaches [`super::validator`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::models::ReservationRequest;
use thiserror::Error;

use crate::utils::validation::{is_present, is_valid_email, is_valid_phone};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReservationForm {
    pub date: Option<NaiveDate>,
    pub time: String,
    pub guests: String,
    pub table_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub special_requests: String,
}

/// Per-field contact errors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ContactErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }

    pub fn messages(&self) -> Vec<String> {
        [&self.name, &self.email, &self.phone]
            .into_iter()
            .flatten()
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please complete all reservation details")]
    Incomplete,

    #[error("Please correct the errors in the form")]
    InvalidContact(ContactErrors),
}

impl FormError {
    /// Summary first, then field messages
    pub fn messages(&self) -> Vec<String> {
        let mut messages = vec![self.to_string()];
        if let Self::InvalidContact(errors) = self {
            messages.extend(errors.messages());
        }
        messages
    }
}

impl ReservationForm {
    /// Error shown when a booking detail step was skipped
    pub fn missing_details(&self) -> Option<FormError> {
        let complete = self.date.is_some()
            && is_present(&self.time)
            && is_present(&self.guests)
            && is_present(&self.table_id);
        (!complete).then_some(FormError::Incomplete)
    }

    pub fn validate_contact(&self) -> ContactErrors {
        let mut errors = ContactErrors::default();

        if !is_present(&self.name) {
            errors.name = Some("Name is required".to_string());
        }

        if !is_present(&self.email) {
            errors.email = Some("Email is required".to_string());
        } else if !is_valid_email(self.email.trim()) {
            errors.email = Some("Please enter a valid email address".to_string());
        }

        if !is_present(&self.phone) {
            errors.phone = Some("Phone number is required".to_string());
        } else if !is_valid_phone(&self.phone) {
            errors.phone = Some("Please enter a valid phone number".to_string());
        }

        errors
    }

    pub fn into_request(self) -> Result<ReservationRequest, FormError> {
        if let Some(err) = self.missing_details() {
            return Err(err);
        }
        let date = self.date.ok_or(FormError::Incomplete)?;
        let guests = self
            .guests
            .trim()
            .parse::<u32>()
            .map_err(|_| FormError::Incomplete)?;
        let table_id = self
            .table_id
            .trim()
            .parse::<i64>()
            .map_err(|_| FormError::Incomplete)?;

        let contact = self.validate_contact();
        if !contact.is_empty() {
            return Err(FormError::InvalidContact(contact));
        }

        let special_requests = Some(self.special_requests.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(ReservationRequest {
            date,
            time: self.time.trim().to_string(),
            guests,
            table_id,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            special_requests,
        })
    }
}
