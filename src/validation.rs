//! Booking form input and validation.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{find_doctor, Doctor};
use crate::slots::resolve_slot;

/// Indian mobile number: ten digits, first digit 6-9.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[6-9][0-9]{9}$").unwrap());

/// Raw values of the booking form, as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingForm {
    pub patient_name: String,
    pub phone: String,
    pub email: String,
    pub doctor_id: String,
    pub service: String,
    pub date: String, // YYYY-MM-DD
    pub time_slot: String,
    pub notes: String,
    pub whatsapp_updates: bool,
}

impl BookingForm {
    /// A blank form with the date preset, as after a page load or reset.
    pub fn with_date(date: NaiveDate) -> Self {
        Self {
            date: date.format("%Y-%m-%d").to_string(),
            ..Self::default()
        }
    }
}

/// Rejected form submission. `Display` is the message shown to the visitor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill all required fields.")]
    MissingFields,

    #[error("Please enter a valid 10 digit Indian mobile number.")]
    InvalidPhone,

    #[error("Please select a doctor from the list.")]
    UnknownDoctor,

    #[error("Please choose a valid appointment date.")]
    InvalidDate,

    #[error("Please choose one of the available time slots.")]
    UnavailableSlot,
}

/// Form values that passed validation, trimmed and resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidBooking {
    pub patient_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub doctor: &'static Doctor,
    pub service: String,
    pub date: NaiveDate,
    /// Display label of the chosen slot.
    pub time_slot: String,
    pub notes: Option<String>,
    pub whatsapp_updates: bool,
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

/// Validate a submitted form. Stops at the first failing rule.
pub fn validate(form: &BookingForm) -> Result<ValidBooking, ValidationError> {
    let patient_name = form.patient_name.trim();
    let phone = form.phone.trim();
    let email = form.email.trim();
    let notes = form.notes.trim();

    let required = [
        patient_name,
        phone,
        form.doctor_id.as_str(),
        form.service.as_str(),
        form.date.as_str(),
        form.time_slot.as_str(),
    ];
    if required.iter().any(|v| v.trim().is_empty()) {
        return Err(ValidationError::MissingFields);
    }

    if !is_valid_phone(phone) {
        return Err(ValidationError::InvalidPhone);
    }

    let doctor = find_doctor(form.doctor_id.trim()).ok_or(ValidationError::UnknownDoctor)?;

    let date = NaiveDate::parse_from_str(form.date.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate)?;

    let time_slot = resolve_slot(doctor, &form.time_slot).ok_or(ValidationError::UnavailableSlot)?;

    Ok(ValidBooking {
        patient_name: patient_name.to_owned(),
        phone: phone.to_owned(),
        email: (!email.is_empty()).then(|| email.to_owned()),
        doctor,
        service: form.service.trim().to_owned(),
        date,
        time_slot,
        notes: (!notes.is_empty()).then(|| notes.to_owned()),
        whatsapp_updates: form.whatsapp_updates,
    })
}
