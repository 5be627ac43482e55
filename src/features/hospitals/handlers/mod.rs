pub mod hospital_handler;
