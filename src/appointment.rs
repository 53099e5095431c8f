//! Appointment persistence: one JSON array under a fixed local storage key.
//!
//! Every write is a read-modify-write of the whole blob. Concurrent writers
//! on the same storage are not coordinated; the last `set_item` wins.

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing;
use uuid::Uuid;

use crate::config::STORAGE_KEY;
use crate::db::{LocalStorage, StorageError};
use crate::models::Appointment;
use crate::validation::ValidBooking;

/// Build the appointment record for a validated booking.
///
/// Doctor fields are copied from the roster entry as it is right now.
pub fn build_appointment(booking: ValidBooking, created_at: DateTime<Utc>) -> Appointment {
    let doctor = booking.doctor;
    Appointment {
        id: new_appointment_id(),
        patient_name: booking.patient_name,
        phone: booking.phone,
        email: booking.email,
        doctor_id: doctor.id.to_owned(),
        doctor_name: doctor.name.to_owned(),
        speciality: doctor.speciality.to_owned(),
        timings: doctor.timings.to_owned(),
        fee: doctor.fee.to_owned(),
        service: booking.service,
        date: booking.date,
        time_slot: booking.time_slot,
        notes: booking.notes,
        whatsapp_updates: booking.whatsapp_updates,
        created_at,
    }
}

fn new_appointment_id() -> String {
    format!("apt_{}", Uuid::new_v4().simple())
}

/// All stored appointments, in insertion order.
///
/// A missing blob is an empty list. An unreadable blob or one that is not a
/// JSON array is logged and also treated as empty. Array elements that do
/// not decode as an appointment are logged and skipped.
pub fn load_appointments(storage: &impl LocalStorage) -> Vec<Appointment> {
    load_records(storage)
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(apt) => Some(apt),
            Err(e) => {
                tracing::warn!(index, error = %e, "Skipping unreadable appointment record");
                None
            }
        })
        .collect()
}

/// Raw elements of the stored array, including ones that no longer decode.
fn load_records(storage: &impl LocalStorage) -> Vec<Value> {
    let raw = match storage.get_item(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::error!(error = %e, "Error reading appointments");
            return Vec::new();
        }
    };
    if raw.is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Vec<Value>>(&raw) {
        Ok(records) => records,
        Err(e) => {
            tracing::error!(error = %e, "Error reading appointments");
            Vec::new()
        }
    }
}

/// Append one appointment to the stored list.
///
/// Records that do not decode are written back unchanged.
pub fn save_appointment(
    storage: &impl LocalStorage,
    appointment: &Appointment,
) -> Result<(), StorageError> {
    let mut records = load_records(storage);
    records.push(serde_json::to_value(appointment)?);
    let json = serde_json::to_string(&records)?;
    storage.set_item(STORAGE_KEY, &json)?;
    tracing::debug!(appointment_id = %appointment.id, total = records.len(), "Appointment saved");
    Ok(())
}

/// Remove every stored appointment.
pub fn clear_appointments(storage: &impl LocalStorage) -> Result<(), StorageError> {
    storage.remove_item(STORAGE_KEY)?;
    tracing::info!("Cleared all stored appointments");
    Ok(())
}

/// Appointments ordered by date ascending. Same-day entries keep their
/// booking order.
pub fn sorted_by_date(appointments: &[Appointment]) -> Vec<Appointment> {
    let mut sorted = appointments.to_vec();
    sorted.sort_by_key(|a| a.date);
    sorted
}
