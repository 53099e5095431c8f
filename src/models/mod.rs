pub mod appointment;
pub mod doctor;

pub use appointment::Appointment;
pub use doctor::{find_doctor, Doctor, ROSTER};
