use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A booked appointment as stored in the local storage blob.
///
/// Doctor fields are copied from the roster at booking time and never
/// refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub patient_name: String,
    pub phone: String,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
    pub doctor_id: String,
    pub doctor_name: String,
    pub speciality: String,
    pub timings: String,
    pub fee: String,
    pub service: String,
    pub date: NaiveDate,
    /// Display label, e.g. `10:00 AM`.
    pub time_slot: String,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,
    #[serde(rename = "whatsapp", default)]
    pub whatsapp_updates: bool,
    pub created_at: DateTime<Utc>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
