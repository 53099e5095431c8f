//! Booking page controller.
//!
//! One method per page event: load, doctor change, form submit and
//! clear-all. Each handler runs to completion synchronously against the
//! owned storage and updates the error/success feedback regions.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, Utc};
use serde::Serialize;
use tracing;

use crate::appointment::{build_appointment, clear_appointments, load_appointments, save_appointment};
use crate::config::SUCCESS_NOTICE_SECS;
use crate::db::{LocalStorage, StorageError};
use crate::models::Appointment;
use crate::render::{doctor_options, render_appointments, slot_options, SelectOption};
use crate::validation::{validate, BookingForm, ValidationError};

pub const BOOKED_MESSAGE: &str =
    "Appointment booked successfully! Please reach 10 minutes before your time slot.";

pub const CLEAR_PROMPT: &str = "Clear all appointments saved on this device?";

/// Asks the visitor to confirm a destructive action.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Error and success regions under the form.
#[derive(Debug, Clone, Default)]
pub struct Feedback {
    error: Option<String>,
    success: Option<(String, DateTime<Utc>)>,
}

impl Feedback {
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Success text if it has not yet expired at `now`.
    pub fn success_at(&self, now: DateTime<Utc>) -> Option<&str> {
        match &self.success {
            Some((text, expires_at)) if now < *expires_at => Some(text.as_str()),
            _ => None,
        }
    }

    fn clear(&mut self) {
        self.error = None;
        self.success = None;
    }
}

/// Everything the page shows right after loading.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub year: i32,
    /// Earliest selectable date, also the date input's initial value.
    pub min_date: String,
    pub form: BookingForm,
    pub doctor_options: Vec<SelectOption>,
    pub slot_options: Vec<SelectOption>,
    pub appointments_html: String,
}

/// Result of a form submission.
#[derive(Debug, Clone)]
pub enum Submission {
    /// Validation failed; nothing was stored.
    Rejected(ValidationError),
    Booked(Box<Booked>),
}

#[derive(Debug, Clone)]
pub struct Booked {
    pub appointment: Appointment,
    pub appointments_html: String,
    /// Blank form with the date reset to today.
    pub reset_form: BookingForm,
    pub slot_options: Vec<SelectOption>,
}

pub struct BookingWidget<S: LocalStorage> {
    storage: S,
    feedback: Feedback,
}

impl<S: LocalStorage> BookingWidget<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            feedback: Feedback::default(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Page load: footer year, date bounds, selectors and the saved list.
    pub fn on_load(&self, now: DateTime<Local>) -> PageView {
        let today = now.date_naive();
        PageView {
            year: now.year(),
            min_date: iso_date(today),
            form: BookingForm::with_date(today),
            doctor_options: doctor_options(),
            slot_options: slot_options(""),
            appointments_html: self.render_list(),
        }
    }

    /// Doctor selection changed: repopulate the slot selector.
    pub fn on_doctor_change(&self, doctor_id: &str) -> Vec<SelectOption> {
        slot_options(doctor_id)
    }

    /// Form submitted. Validation failures land in the error region and
    /// leave storage untouched; storage write failures are returned.
    pub fn on_submit(
        &mut self,
        form: &BookingForm,
        now: DateTime<Local>,
    ) -> Result<Submission, StorageError> {
        self.feedback.clear();

        let booking = match validate(form) {
            Ok(booking) => booking,
            Err(e) => {
                tracing::debug!(reason = ?e, "Booking form rejected");
                self.feedback.error = Some(e.to_string());
                return Ok(Submission::Rejected(e));
            }
        };

        let now_utc = now.with_timezone(&Utc);
        let appointment = build_appointment(booking, now_utc);
        save_appointment(&self.storage, &appointment)?;
        tracing::info!(
            appointment_id = %appointment.id,
            doctor_id = %appointment.doctor_id,
            "Appointment booked"
        );

        self.feedback.success = Some((
            BOOKED_MESSAGE.to_owned(),
            now_utc + Duration::seconds(SUCCESS_NOTICE_SECS),
        ));

        Ok(Submission::Booked(Box::new(Booked {
            appointment,
            appointments_html: self.render_list(),
            reset_form: BookingForm::with_date(now.date_naive()),
            slot_options: slot_options(""),
        })))
    }

    /// Remove every saved appointment after confirmation and return the
    /// re-rendered list.
    ///
    /// Returns `None` when the visitor declines; nothing is touched.
    pub fn on_clear_all(&mut self, confirm: &impl Confirm) -> Result<Option<String>, StorageError> {
        if !confirm.confirm(CLEAR_PROMPT) {
            return Ok(None);
        }
        clear_appointments(&self.storage)?;
        Ok(Some(self.render_list()))
    }

    /// Saved appointments in storage order.
    pub fn appointments(&self) -> Vec<Appointment> {
        load_appointments(&self.storage)
    }

    /// Current markup of the saved-appointments panel.
    pub fn render_list(&self) -> String {
        render_appointments(&self.appointments())
    }
}

fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
