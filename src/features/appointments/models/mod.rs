mod appointment;

pub use appointment::{Appointment, NewAppointment};
