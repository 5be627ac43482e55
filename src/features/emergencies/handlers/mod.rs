pub mod emergency_handler;
