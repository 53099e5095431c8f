//! Time slot labels.
//!
//! Slots are kept as 24-hour `HH:MM` strings on the roster and shown to
//! patients as 12-hour labels (`10:20 AM`, `1:00 PM`). Stored appointments
//! carry the label.

use crate::models::Doctor;

/// Convert a 24-hour `HH:MM` time into a 12-hour `H:MM AM/PM` label.
///
/// Midnight is `12:MM AM`, noon is `12:MM PM`; the hour never has a leading
/// zero. Returns `None` for anything that is not a valid 24-hour time.
pub fn format_time_display(time24: &str) -> Option<String> {
    let (h_str, m_str) = time24.split_once(':')?;
    if h_str.is_empty() || h_str.len() > 2 || !h_str.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if m_str.len() != 2 || !m_str.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hour: u32 = h_str.parse().ok()?;
    let minute: u32 = m_str.parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }

    let suffix = if hour >= 12 { "PM" } else { "AM" };
    let hour12 = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    Some(format!("{hour12}:{m_str} {suffix}"))
}

/// The doctor's slots as display labels, in roster order.
pub fn slot_labels(doctor: &Doctor) -> Vec<String> {
    doctor
        .slots
        .iter()
        .filter_map(|slot| format_time_display(slot))
        .collect()
}

/// Match a submitted slot against the doctor's offered slots.
///
/// Accepts either the 24-hour roster value or its display label and
/// returns the display label.
pub fn resolve_slot(doctor: &Doctor, input: &str) -> Option<String> {
    let input = input.trim();
    doctor.slots.iter().find_map(|slot| {
        let label = format_time_display(slot)?;
        (*slot == input || label == input).then_some(label)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::find_doctor;

    #[test]
    fn formats_known_times() {
        assert_eq!(format_time_display("00:00").as_deref(), Some("12:00 AM"));
        assert_eq!(format_time_display("09:05").as_deref(), Some("9:05 AM"));
        assert_eq!(format_time_display("10:20").as_deref(), Some("10:20 AM"));
        assert_eq!(format_time_display("12:00").as_deref(), Some("12:00 PM"));
        assert_eq!(format_time_display("12:20").as_deref(), Some("12:20 PM"));
        assert_eq!(format_time_display("13:00").as_deref(), Some("1:00 PM"));
        assert_eq!(format_time_display("19:00").as_deref(), Some("7:00 PM"));
        assert_eq!(format_time_display("23:59").as_deref(), Some("11:59 PM"));
    }

    #[test]
    fn every_hour_maps_into_twelve_hour_clock() {
        for h in 0..24u32 {
            for m in ["00", "20", "45"] {
                let label = format_time_display(&format!("{h:02}:{m}")).unwrap();
                let (clock, suffix) = label.split_once(' ').unwrap();
                let (hour, minute) = clock.split_once(':').unwrap();
                let hour: u32 = hour.parse().unwrap();

                assert!((1..=12).contains(&hour), "{label}");
                assert!(!clock.starts_with('0'), "{label}");
                assert_eq!(minute, m);

                let expected_suffix = if h < 12 { "AM" } else { "PM" };
                assert_eq!(suffix, expected_suffix, "{label}");
                match h {
                    0 | 12 => assert_eq!(hour, 12),
                    h if h > 12 => assert_eq!(hour, h - 12),
                    h => assert_eq!(hour, h),
                }
            }
        }
    }

    #[test]
    fn accepts_single_digit_hour() {
        assert_eq!(format_time_display("9:30").as_deref(), Some("9:30 AM"));
    }

    #[test]
    fn rejects_malformed_times() {
        for bad in ["", "10", "24:00", "10:60", "10:5", "ab:cd", "10:00:00", "-1:00", "100:00"] {
            assert_eq!(format_time_display(bad), None, "{bad}");
        }
    }

    #[test]
    fn slot_labels_follow_roster_order() {
        let doc = find_doctor("dr-khan").unwrap();
        let labels = slot_labels(doc);
        assert_eq!(labels.len(), doc.slots.len());
        assert_eq!(labels.first().map(String::as_str), Some("11:00 AM"));
        assert_eq!(labels.last().map(String::as_str), Some("1:00 PM"));
    }

    #[test]
    fn resolve_slot_accepts_both_spellings() {
        let doc = find_doctor("dr-sharma").unwrap();
        assert_eq!(resolve_slot(doc, "10:00").as_deref(), Some("10:00 AM"));
        assert_eq!(resolve_slot(doc, "12:20 PM").as_deref(), Some("12:20 PM"));
        assert_eq!(resolve_slot(doc, " 11:40 AM ").as_deref(), Some("11:40 AM"));
    }

    #[test]
    fn resolve_slot_rejects_other_doctors_slots() {
        let doc = find_doctor("dr-sharma").unwrap();
        assert_eq!(resolve_slot(doc, "16:00"), None);
        assert_eq!(resolve_slot(doc, "4:00 PM"), None);
        assert_eq!(resolve_slot(doc, ""), None);
    }
}
