use std::sync::Arc;

use crate::core::config::SearchConfig;
use crate::core::error::Result;
use crate::features::facilities::clients::{FacilityLookup, OverpassElement};
use crate::features::facilities::dtos::{
    FacilityDto, FacilityId, FacilitySource, NearbyQueryParams,
};
use crate::features::hospitals::dtos::HospitalResponseDto;
use crate::features::hospitals::HospitalService;
use crate::shared::constants::{
    ADDRESS_NOT_AVAILABLE, NOT_AVAILABLE, UNKNOWN_FACILITY_TYPE, UNNAMED_FACILITY,
};

/// Join street and house number, skipping whichever is absent
pub fn build_address(street: Option<&str>, house_number: Option<&str>) -> String {
    let parts: Vec<&str> = [street, house_number]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    if parts.is_empty() {
        ADDRESS_NOT_AVAILABLE.to_string()
    } else {
        parts.join(" ")
    }
}

/// Turn one raw Overpass element into a facility.
///
/// Nodes use their own position and ways their center; anything else has no
/// usable point and is dropped.
pub fn normalize_element(element: &OverpassElement) -> Option<FacilityDto> {
    let (latitude, longitude) = match element.element_type.as_str() {
        "node" => (element.lat?, element.lon?),
        "way" => {
            let center = element.center?;
            (center.lat, center.lon)
        }
        _ => return None,
    };

    let tag = |key: &str| element.tags.get(key).map(String::as_str);
    let first_tag = |keys: &[&str], fallback: &str| {
        keys.iter()
            .find_map(|k| tag(*k))
            .unwrap_or(fallback)
            .to_string()
    };

    Some(FacilityDto {
        id: FacilityId::Osm(element.id),
        name: first_tag(&["name"], UNNAMED_FACILITY),
        facility_type: first_tag(&["amenity", "healthcare"], UNKNOWN_FACILITY_TYPE),
        latitude,
        longitude,
        address: build_address(tag("addr:street"), tag("addr:housenumber")),
        phone: first_tag(&["phone", "contact:phone"], NOT_AVAILABLE),
        opening_hours: first_tag(&["opening_hours"], NOT_AVAILABLE),
        website: first_tag(&["website", "contact:website"], ""),
        source: FacilitySource::OpenStreetMap,
        description: None,
        is_featured: None,
    })
}

fn or_fallback(value: String, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

impl From<HospitalResponseDto> for FacilityDto {
    fn from(h: HospitalResponseDto) -> Self {
        Self {
            id: FacilityId::Curated(h.id),
            name: h.name,
            facility_type: h.facility_type,
            latitude: h.latitude,
            longitude: h.longitude,
            address: or_fallback(h.address, ADDRESS_NOT_AVAILABLE),
            phone: or_fallback(h.phone, NOT_AVAILABLE),
            opening_hours: or_fallback(h.opening_hours, NOT_AVAILABLE),
            website: h.website,
            source: FacilitySource::Curated,
            description: Some(h.description),
            is_featured: Some(h.is_featured),
        }
    }
}

/// Nearby search over the live lookup plus the curated list
pub struct FacilityService {
    lookup: Arc<dyn FacilityLookup>,
    hospitals: Arc<HospitalService>,
    search: SearchConfig,
}

impl FacilityService {
    pub fn new(
        lookup: Arc<dyn FacilityLookup>,
        hospitals: Arc<HospitalService>,
        search: SearchConfig,
    ) -> Self {
        Self {
            lookup,
            hospitals,
            search,
        }
    }

    /// Validate the query, fetch live results, then append curated ones.
    ///
    /// Live results keep upstream order; no de-duplication is done across
    /// the two sources.
    pub async fn find_nearby(&self, params: NearbyQueryParams) -> Result<Vec<FacilityDto>> {
        let area = params.into_area(&self.search)?;

        let elements = self.lookup.fetch_elements(&area).await?;
        let raw_count = elements.len();

        let mut facilities: Vec<FacilityDto> =
            elements.iter().filter_map(normalize_element).collect();
        let live_count = facilities.len();
        if live_count < raw_count {
            tracing::debug!(
                "Dropped {} elements without a usable position",
                raw_count - live_count
            );
        }

        let curated = self.hospitals.list().await?;
        facilities.extend(curated.into_iter().map(FacilityDto::from));

        tracing::info!(
            "Nearby search: lat={}, lon={}, radius={}, live={}, total={}",
            area.lat,
            area.lon,
            area.radius,
            live_count,
            facilities.len()
        );

        Ok(facilities)
    }
}
