pub mod appointment_handler;
