use rand::Rng;

use crate::data::Airport;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Selects the pricing path. Planted solution flights ignore distance and
/// duration entirely so they land inside both agents' budgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBand {
    Solution,
    Market,
}

/// Haversine great-circle distance in kilometres.
pub fn great_circle_km(a: &Airport, b: &Airport) -> f64 {
    let (lat1, lon1) = (a.latitude.to_radians(), a.longitude.to_radians());
    let (lat2, lon2) = (b.latitude.to_radians(), b.longitude.to_radians());
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * h.sqrt().asin() * EARTH_RADIUS_KM
}

/// Flight duration in hours, one decimal, never below 1.0. Long-haul legs
/// cruise at 800 km/h, short legs at 600 km/h, with a ±15% jitter.
pub fn flight_duration<T: Rng>(rng: &mut T, distance_km: f64) -> f64 {
    let base_speed = if distance_km > 2000.0 { 800.0 } else { 600.0 };
    let jitter = rng.gen_range(-0.15..0.15);
    let hours = distance_km / base_speed * (1.0 + jitter);
    round1(hours).max(1.0)
}

/// Flight price in currency units, two decimals.
///
/// The market path combines a distance-diminishing per-km rate, a duration
/// multiplier, a random market variation and a long-haul taper, clamped to
/// [max(150, 0.08 * distance), 2000]. The solution path is a flat uniform
/// draw from [550, 680]: affordable under both reference budgets (700 and
/// 810) no matter how far the designated destination is.
pub fn flight_price<T: Rng>(
    rng: &mut T,
    distance_km: f64,
    duration: f64,
    band: PriceBand,
) -> f64 {
    if band == PriceBand::Solution {
        return round2(rng.gen_range(550.0..680.0));
    }

    let rate_per_km = 0.15 * (1.0 - (distance_km / 10000.0).min(0.5));
    let base = distance_km * rate_per_km;
    let time_multiplier = 1.0 + duration / 12.0;
    let variation = rng.gen_range(-0.15..0.20);
    let mut price = base * time_multiplier * (1.0 + variation);

    if distance_km > 5000.0 {
        price *= 1.0 - ((distance_km - 5000.0) / 20000.0).min(0.25);
    }

    let floor = (distance_km * 0.08).max(150.0);
    round2(price.clamp(floor, 2000.0))
}

pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
