//! Great-circle distance and the linear CO2 estimate derived from it.

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Flat per-passenger emissions factor, kg CO2 per kilometre flown.
pub const EMISSIONS_FACTOR_KG_PER_PAX_KM: f64 = 0.11;

/// Haversine great-circle distance between two coordinates, in kilometres.
///
/// Pure and symmetric: `haversine_km(a, b) == haversine_km(b, a)`, and zero
/// when the points coincide. Inputs are degrees.
#[must_use]
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Distance as reported to clients: rounded to the nearest integer
/// kilometre.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    reason = "rounded value of any plausible great-circle distance fits i64"
)]
pub fn round_km(distance_km: f64) -> i64 {
    distance_km.round() as i64
}

/// Per-passenger CO2 estimate in kg, rounded to one decimal place.
///
/// Takes the *unrounded* distance: the reported `distance_km` and the
/// emissions figure are rounded independently, so the two are not exactly
/// mutually consistent. That behaviour is contractual; do not derive the
/// emissions from the rounded distance.
#[must_use]
pub fn co2_per_pax_kg(distance_km: f64) -> f64 {
    (distance_km * EMISSIONS_FACTOR_KG_PER_PAX_KM * 10.0).round() / 10.0
}
