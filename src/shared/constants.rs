/// Stored when an appointment does not name a facility
pub const DEFAULT_FACILITY_NAME: &str = "N/A";

/// Stored when an emergency alert carries no message
pub const DEFAULT_ALERT_MESSAGE: &str = "Emergency alert triggered";

// =============================================================================
// FACILITY DISPLAY FALLBACKS
// =============================================================================

pub const UNNAMED_FACILITY: &str = "Unnamed Facility";

pub const UNKNOWN_FACILITY_TYPE: &str = "unknown";

pub const ADDRESS_NOT_AVAILABLE: &str = "Address not available";

/// Used for both phone and opening hours
pub const NOT_AVAILABLE: &str = "N/A";

/// Prefix that namespaces curated facility ids away from OpenStreetMap ids
pub const CURATED_ID_PREFIX: &str = "hospital_";
