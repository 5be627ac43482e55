mod facility_service;

pub use facility_service::FacilityService;

#[cfg(test)]
pub(crate) use facility_service::tests as test_support;
