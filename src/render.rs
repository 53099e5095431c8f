//! HTML fragments for the booking page: select options and the list of
//! saved appointments.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::appointment::sorted_by_date;
use crate::models::{find_doctor, Appointment, ROSTER};
use crate::slots::slot_labels;

pub const EMPTY_LIST_MESSAGE: &str = "No appointments saved on this device yet.";

/// One `<option>` of a `<select>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    fn placeholder(label: &str) -> Self {
        Self::new("", label)
    }
}

/// Doctor selector contents: placeholder, then the roster.
pub fn doctor_options() -> Vec<SelectOption> {
    std::iter::once(SelectOption::placeholder("Select doctor"))
        .chain(ROSTER.iter().map(|d| SelectOption::new(d.id, d.option_label())))
        .collect()
}

/// Time slot selector contents for the chosen doctor.
///
/// A blank or unknown doctor id leaves only the placeholder.
pub fn slot_options(doctor_id: &str) -> Vec<SelectOption> {
    let mut options = vec![SelectOption::placeholder("Select time slot")];
    if let Some(doctor) = find_doctor(doctor_id) {
        options.extend(
            slot_labels(doctor)
                .into_iter()
                .map(|label| SelectOption::new(label.clone(), label)),
        );
    }
    options
}

/// `<option>` markup for a select.
pub fn render_options(options: &[SelectOption]) -> String {
    options
        .iter()
        .map(|o| {
            format!(
                r#"<option value="{}">{}</option>"#,
                escape_html(&o.value),
                escape_html(&o.label)
            )
        })
        .collect()
}

/// Short display date in the `en-IN` style, e.g. `01 Mar 2025`.
///
/// That locale abbreviates September as `Sept`; every other month uses the
/// three-letter form.
pub fn format_date(date: NaiveDate) -> String {
    if date.month() == 9 {
        date.format("%d Sept %Y").to_string()
    } else {
        date.format("%d %b %Y").to_string()
    }
}

/// Display form of an ISO date string; unparseable input is returned as-is.
pub fn format_date_display(date_str: &str) -> String {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map(format_date)
        .unwrap_or_else(|_| date_str.to_owned())
}

/// Display row for one saved appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppointmentView {
    pub id: String,
    pub patient_name: String,
    pub when: String,
    pub doctor: String,
    pub service: String,
    pub contact: String,
}

impl From<&Appointment> for AppointmentView {
    fn from(apt: &Appointment) -> Self {
        Self {
            id: apt.id.clone(),
            patient_name: apt.patient_name.clone(),
            when: format!("{}, {}", format_date(apt.date), apt.time_slot),
            doctor: format!("{} ({})", apt.doctor_name, apt.speciality),
            service: apt.service.clone(),
            contact: format!("Mobile: {}", apt.phone),
        }
    }
}

/// Display rows, earliest appointment date first.
pub fn appointment_views(appointments: &[Appointment]) -> Vec<AppointmentView> {
    sorted_by_date(appointments)
        .iter()
        .map(AppointmentView::from)
        .collect()
}

/// Markup for the saved-appointments panel.
pub fn render_appointments(appointments: &[Appointment]) -> String {
    if appointments.is_empty() {
        return format!(r#"<p class="appointments-empty">{EMPTY_LIST_MESSAGE}</p>"#);
    }

    appointment_views(appointments)
        .iter()
        .map(render_item)
        .collect()
}

fn render_item(view: &AppointmentView) -> String {
    format!(
        concat!(
            r#"<div class="appointment-item">"#,
            r#"<div class="appointment-top"><span>{}</span><span>{}</span></div>"#,
            r#"<div class="appointment-meta"><span>{}</span><span>{}</span><span>{}</span></div>"#,
            "</div>"
        ),
        escape_html(&view.patient_name),
        escape_html(&view.when),
        escape_html(&view.doctor),
        escape_html(&view.service),
        escape_html(&view.contact),
    )
}

/// Escape text for inclusion in element content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn appointment(name: &str, date: (i32, u32, u32)) -> Appointment {
        Appointment {
            id: format!("apt_{name}"),
            patient_name: name.into(),
            phone: "9123456789".into(),
            email: None,
            doctor_id: "dr-khan".into(),
            doctor_name: "Dr. Imran Khan".into(),
            speciality: "Pediatrician".into(),
            timings: "11:00 AM – 3:00 PM".into(),
            fee: "₹650".into(),
            service: "Vaccination".into(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            time_slot: "11:20 AM".into(),
            notes: None,
            whatsapp_updates: false,
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn doctor_options_start_with_placeholder() {
        let options = doctor_options();
        assert_eq!(options.len(), ROSTER.len() + 1);
        assert_eq!(options[0], SelectOption::placeholder("Select doctor"));
        assert_eq!(options[1].value, "dr-sharma");
        assert_eq!(options[1].label, "Dr. Neeraj Sharma (General Physician)");
    }

    #[test]
    fn slot_options_use_labels_for_value_and_text() {
        let options = slot_options("dr-patil");
        assert_eq!(options[0].label, "Select time slot");
        assert_eq!(options.len(), 8);
        assert_eq!(options[1], SelectOption::new("4:00 PM", "4:00 PM"));
        assert_eq!(options[7], SelectOption::new("7:00 PM", "7:00 PM"));
    }

    #[test]
    fn slot_options_placeholder_only_without_doctor() {
        assert_eq!(slot_options("").len(), 1);
        assert_eq!(slot_options("dr-nobody").len(), 1);
    }

    #[test]
    fn render_options_markup() {
        let html = render_options(&slot_options("")[..1]);
        assert_eq!(html, r#"<option value="">Select time slot</option>"#);
    }

    #[test]
    fn date_display() {
        assert_eq!(format_date_display("2025-03-01"), "01 Mar 2025");
        assert_eq!(format_date_display("2025-12-25"), "25 Dec 2025");
        assert_eq!(format_date_display("2025-09-01"), "01 Sept 2025");
        assert_eq!(format_date_display("2025-08-31"), "31 Aug 2025");
        assert_eq!(format_date_display("soon"), "soon");
    }

    #[test]
    fn empty_list_shows_message() {
        let html = render_appointments(&[]);
        assert!(html.contains(EMPTY_LIST_MESSAGE));
        assert!(!html.contains("appointment-item"));
    }

    #[test]
    fn list_is_ordered_by_date() {
        let list = vec![appointment("Later", (2025, 3, 5)), appointment("Sooner", (2025, 3, 1))];
        let views = appointment_views(&list);
        assert_eq!(views[0].patient_name, "Sooner");
        assert_eq!(views[1].patient_name, "Later");

        let html = render_appointments(&list);
        let sooner = html.find("Sooner").unwrap();
        let later = html.find("Later").unwrap();
        assert!(sooner < later);
        assert_eq!(html.matches(r#"class="appointment-item""#).count(), 2);
    }

    #[test]
    fn view_fields() {
        let view = AppointmentView::from(&appointment("Asha", (2025, 3, 1)));
        assert_eq!(view.when, "01 Mar 2025, 11:20 AM");
        assert_eq!(view.doctor, "Dr. Imran Khan (Pediatrician)");
        assert_eq!(view.contact, "Mobile: 9123456789");
    }

    #[test]
    fn user_text_is_escaped() {
        let list = vec![appointment("<script>alert('x')</script>", (2025, 3, 1))];
        let html = render_appointments(&list);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    }

    #[test]
    fn escape_html_handles_ampersand_first() {
        assert_eq!(escape_html("a & <b>"), "a &amp; &lt;b&gt;");
        assert_eq!(escape_html(r#""q""#), "&quot;q&quot;");
    }
}
