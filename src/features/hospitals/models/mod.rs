mod hospital;

pub use hospital::{Hospital, NewHospital};
