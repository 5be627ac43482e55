pub mod facility_dto;

pub use facility_dto::{FacilityDto, FacilityId, FacilitySource, NearbyQueryParams, SearchArea};
