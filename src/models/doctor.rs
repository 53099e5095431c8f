use serde::Serialize;

/// A doctor on the clinic roster. Defined at compile time, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Doctor {
    pub id: &'static str,
    pub name: &'static str,
    pub speciality: &'static str,
    pub timings: &'static str,
    pub fee: &'static str,
    /// Bookable times in 24-hour `HH:MM`, in display order.
    pub slots: &'static [&'static str],
}

impl Doctor {
    /// Label shown in the doctor selector.
    pub fn option_label(&self) -> String {
        format!("{} ({})", self.name, self.speciality)
    }
}

pub const ROSTER: &[Doctor] = &[
    Doctor {
        id: "dr-sharma",
        name: "Dr. Neeraj Sharma",
        speciality: "General Physician",
        timings: "10:00 AM – 1:30 PM",
        fee: "₹500",
        slots: &[
            "10:00", "10:20", "10:40", "11:00", "11:20", "11:40", "12:00", "12:20",
        ],
    },
    Doctor {
        id: "dr-patil",
        name: "Dr. Asha Patil",
        speciality: "Dentist",
        timings: "4:00 PM – 8:00 PM",
        fee: "₹600",
        slots: &["16:00", "16:30", "17:00", "17:30", "18:00", "18:30", "19:00"],
    },
    Doctor {
        id: "dr-khan",
        name: "Dr. Imran Khan",
        speciality: "Pediatrician",
        timings: "11:00 AM – 3:00 PM",
        fee: "₹650",
        slots: &["11:00", "11:20", "11:40", "12:00", "12:20", "12:40", "13:00"],
    },
];

/// Look up a roster doctor by id.
pub fn find_doctor(id: &str) -> Option<&'static Doctor> {
    ROSTER.iter().find(|d| d.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_each_roster_doctor() {
        for doc in ROSTER {
            assert_eq!(find_doctor(doc.id), Some(doc));
        }
    }

    #[test]
    fn unknown_or_blank_id_is_none() {
        assert!(find_doctor("dr-who").is_none());
        assert!(find_doctor("").is_none());
        assert!(find_doctor("DR-SHARMA").is_none());
    }

    #[test]
    fn option_label_includes_speciality() {
        let doc = find_doctor("dr-patil").unwrap();
        assert_eq!(doc.option_label(), "Dr. Asha Patil (Dentist)");
    }

    #[test]
    fn roster_ids_unique() {
        let mut ids: Vec<_> = ROSTER.iter().map(|d| d.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ROSTER.len());
    }
}
