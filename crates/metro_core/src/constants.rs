/// Edge weight type (kilometers)
pub type Weight = f64;
/// Station identifier as used in the station records
pub type StationId = u32;
/// Identifier of the physical line a connection belongs to
pub type LineId = u32;
/// Mean earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;
