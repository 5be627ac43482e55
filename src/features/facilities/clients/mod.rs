mod overpass_client;

pub use overpass_client::{FacilityLookup, OverpassClient, OverpassElement};

#[cfg(test)]
pub use overpass_client::OverpassCenter;
