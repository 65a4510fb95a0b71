use rand::{rngs::SmallRng, SeedableRng};

use rendezvous_challenge::geometry::{
    flight_duration, flight_price, great_circle_km, PriceBand,
};
use rendezvous_challenge::reference::reference_airports;

#[test]
fn test_distance_symmetry() {
    let airports = reference_airports();
    for a in &airports {
        for b in &airports {
            let ab = great_circle_km(a, b);
            let ba = great_circle_km(b, a);
            assert!(
                (ab - ba).abs() < 1e-6,
                "distance {}->{} ({}) != {}->{} ({})",
                a.iata,
                b.iata,
                ab,
                b.iata,
                a.iata,
                ba
            );
        }
    }
}

#[test]
fn test_distance_to_self_is_zero() {
    let airports = reference_airports();
    for a in &airports {
        assert!(great_circle_km(a, a).abs() < 1e-9);
    }
}

#[test]
fn test_distance_plausible_range() {
    let airports = reference_airports();
    for a in &airports {
        for b in &airports {
            // Nothing on Earth is further apart than half the circumference.
            assert!(great_circle_km(a, b) <= 20_016.0);
        }
    }
}

#[test]
fn test_duration_floor_and_precision() {
    let mut rng = SmallRng::seed_from_u64(7);
    for &distance in &[10.0, 300.0, 1999.0, 2001.0, 8000.0, 16000.0] {
        for _ in 0..200 {
            let duration = flight_duration(&mut rng, distance);
            assert!(duration >= 1.0, "duration {} below floor", duration);
            // One decimal place.
            assert!(((duration * 10.0).round() - duration * 10.0).abs() < 1e-9);
        }
    }
}

#[test]
fn test_solution_price_band() {
    let mut rng = SmallRng::seed_from_u64(11);
    for _ in 0..1000 {
        let price = flight_price(&mut rng, 9000.0, 11.0, PriceBand::Solution);
        assert!(
            (550.0..=680.0).contains(&price),
            "solution price {} outside band",
            price
        );
    }
}

#[test]
fn test_market_price_clamped() {
    let mut rng = SmallRng::seed_from_u64(13);
    for &distance in &[150.0, 800.0, 2500.0, 6000.0, 12000.0, 16000.0] {
        let duration = distance / 700.0;
        let floor = (distance * 0.08f64).max(150.0);
        for _ in 0..500 {
            let price = flight_price(&mut rng, distance, duration, PriceBand::Market);
            assert!(
                price >= floor - 0.005 && price <= 2000.0 + 0.005,
                "market price {} outside [{}, 2000] for distance {}",
                price,
                floor,
                distance
            );
        }
    }
}
