pub mod facility_handler;
