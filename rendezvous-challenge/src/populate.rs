use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use rand::{seq::SliceRandom, Rng};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::ops::RangeInclusive;

use crate::data::{lookup_airport, Airline, Airport, Catalog, Flight, FlightDraft, PuzzleConfig};
use crate::geometry::{flight_duration, flight_price, great_circle_km, round1, PriceBand};
use crate::guard::would_create_unintended_solution;

/// Tunables for bulk catalog population.
#[derive(Debug, Clone)]
pub struct PopulationParams {
    /// High-volume routes the agents care about: origin -> destinations.
    pub interest_routes: BTreeMap<String, Vec<String>>,
    pub interest_flights_per_route: RangeInclusive<usize>,
    pub interest_dates: Vec<NaiveDate>,
    pub interest_max_attempts: usize,
    pub filler_dates: Vec<NaiveDate>,
    pub filler_max_attempts: usize,
    pub filler_flights_per_route: usize,
    pub target_catalog_size: usize,
}

impl PopulationParams {
    pub fn new(interest_routes: BTreeMap<String, Vec<String>>) -> Self {
        Self {
            interest_routes,
            interest_flights_per_route: 20..=25,
            interest_dates: Vec::new(),
            interest_max_attempts: 50,
            filler_dates: Vec::new(),
            filler_max_attempts: 30,
            filler_flights_per_route: 5,
            target_catalog_size: 5000,
        }
    }
}

/// Consecutive calendar dates starting at `start`.
pub fn date_range(start: NaiveDate, days: usize) -> Vec<NaiveDate> {
    start.iter_days().take(days).collect()
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PopulationStats {
    pub interest_flights: usize,
    pub filler_flights: usize,
    pub fallbacks: usize,
}

/// Outcome of the bounded-attempt search for one candidate flight.
#[derive(Debug, Clone)]
pub enum Sampled {
    /// Cleared the reserved-date screen and the guard within the budget.
    Accepted(FlightDraft),
    /// Attempt budget exhausted. The flight carries an inflated price and a
    /// carrier neither agent prefers, so it keeps the route moving without
    /// ever completing a valid pair.
    Fallback(FlightDraft),
}

impl Sampled {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Sampled::Fallback(_))
    }

    pub fn into_draft(self) -> FlightDraft {
        match self {
            Sampled::Accepted(draft) | Sampled::Fallback(draft) => draft,
        }
    }
}

/// Rejection-sampling loop shared by interest and filler generation.
/// `carrier_pool`, `fallback_pool` and `dates` must be non-empty; callers
/// validate them once up front.
#[allow(clippy::too_many_arguments)]
fn sample_flight<T: Rng>(
    rng: &mut T,
    config: &PuzzleConfig,
    carrier_pool: &[Airline],
    fallback_pool: &[Airline],
    origin: &str,
    destination: &str,
    distance_km: f64,
    duration: f64,
    dates: &[NaiveDate],
    reserved_dates: &HashSet<NaiveDate>,
    accepted: &[Flight],
    max_attempts: usize,
) -> Sampled {
    for _ in 0..max_attempts {
        let price = flight_price(rng, distance_km, duration, PriceBand::Market);
        let date = *dates.choose(rng).expect("non-empty date pool");
        let airline = carrier_pool.choose(rng).expect("non-empty carrier pool");

        // Designated-solution dates stay exclusive to the planted flights.
        if reserved_dates.contains(&date) {
            continue;
        }

        let draft = FlightDraft {
            origin: origin.to_string(),
            destination: destination.to_string(),
            price,
            duration,
            date,
            distance_km: round1(distance_km),
            airline: airline.clone(),
        };
        if would_create_unintended_solution(config, &draft, accepted) {
            continue;
        }
        return Sampled::Accepted(draft);
    }

    let price = flight_price(rng, distance_km, duration, PriceBand::Market) * 2.0;
    let date = *dates.choose(rng).expect("non-empty date pool");
    let airline = fallback_pool.choose(rng).expect("non-empty fallback pool");
    Sampled::Fallback(FlightDraft {
        origin: origin.to_string(),
        destination: destination.to_string(),
        price,
        duration,
        date,
        distance_km: round1(distance_km),
        airline: airline.clone(),
    })
}

fn neutral_carriers(airlines: &[Airline], config: &PuzzleConfig) -> Result<Vec<Airline>> {
    let pool: Vec<Airline> = airlines
        .iter()
        .filter(|al| {
            !config.agent_a.preferred_airlines.contains(&al.code)
                && !config.agent_b.preferred_airlines.contains(&al.code)
        })
        .cloned()
        .collect();
    if pool.is_empty() {
        return Err(anyhow!(
            "Fallback flights need at least one carrier preferred by neither agent"
        ));
    }
    Ok(pool)
}

/// Populates the configured interest routes with guard-screened flights.
/// Carriers are drawn from the union of both agents' preferences so the
/// routes look plausible to either of them.
pub fn populate_interest<T: Rng>(
    rng: &mut T,
    catalog: &mut Catalog,
    airports: &[Airport],
    airlines: &[Airline],
    config: &PuzzleConfig,
    params: &PopulationParams,
    stats: &mut PopulationStats,
) -> Result<()> {
    if params.interest_dates.is_empty() {
        return Err(anyhow!("Interest generation needs a non-empty date pool"));
    }
    let carrier_pool: Vec<Airline> = airlines
        .iter()
        .filter(|al| {
            config.agent_a.preferred_airlines.contains(&al.code)
                || config.agent_b.preferred_airlines.contains(&al.code)
        })
        .cloned()
        .collect();
    if carrier_pool.is_empty() {
        return Err(anyhow!(
            "Interest routes need at least one carrier some agent prefers"
        ));
    }
    let fallback_pool = neutral_carriers(airlines, config)?;

    for (origin, destinations) in &params.interest_routes {
        let origin_airport = lookup_airport(airports, origin)?;
        let agent_route = *origin == config.agent_a.origin || *origin == config.agent_b.origin;

        for destination in destinations {
            let dest_airport = lookup_airport(airports, destination)?;
            let distance = great_circle_km(origin_airport, dest_airport);
            let count = rng.gen_range(params.interest_flights_per_route.clone());

            let reserved: HashSet<NaiveDate> = if agent_route {
                config
                    .designated
                    .iter()
                    .filter(|m| m.airport == *destination)
                    .map(|m| m.date)
                    .collect()
            } else {
                HashSet::new()
            };

            for _ in 0..count {
                let duration = flight_duration(rng, distance);
                let sampled = sample_flight(
                    rng,
                    config,
                    &carrier_pool,
                    &fallback_pool,
                    origin,
                    destination,
                    distance,
                    duration,
                    &params.interest_dates,
                    &reserved,
                    catalog.flights(),
                    params.interest_max_attempts,
                );
                if sampled.is_fallback() {
                    stats.fallbacks += 1;
                }
                catalog.push(sampled.into_draft());
                stats.interest_flights += 1;
            }
        }
    }
    Ok(())
}

/// Fills the catalog up to the target size with low-volume flights between
/// arbitrary airport pairs, skipping routes already covered by interest
/// generation or the designated solutions.
pub fn populate_filler<T: Rng>(
    rng: &mut T,
    catalog: &mut Catalog,
    airports: &[Airport],
    airlines: &[Airline],
    config: &PuzzleConfig,
    params: &PopulationParams,
    stats: &mut PopulationStats,
) -> Result<()> {
    if params.filler_dates.is_empty() {
        return Err(anyhow!("Filler generation needs a non-empty date pool"));
    }
    if airports.len() < 2 {
        return Err(anyhow!("Filler generation needs at least two airports"));
    }
    let carrier_pool = airlines.to_vec();
    if carrier_pool.is_empty() {
        return Err(anyhow!("Filler generation needs a non-empty airline table"));
    }
    let fallback_pool = neutral_carriers(airlines, config)?;

    let mut covered: HashSet<(String, String)> = HashSet::new();
    for (origin, destinations) in &params.interest_routes {
        for destination in destinations {
            covered.insert((origin.clone(), destination.clone()));
        }
    }
    for meet in &config.designated {
        covered.insert((config.agent_a.origin.clone(), meet.airport.clone()));
        covered.insert((config.agent_b.origin.clone(), meet.airport.clone()));
    }

    let codes: Vec<&str> = airports.iter().map(|a| a.iata.as_str()).collect();
    let total_routes = codes.len() * (codes.len() - 1);
    let mut per_route: HashMap<(String, String), usize> = HashMap::new();
    let mut saturated = 0usize;
    let no_reserved = HashSet::new();

    while catalog.len() < params.target_catalog_size {
        // Every route is either covered or at its cap: nothing left to fill.
        if covered.len() + saturated >= total_routes {
            break;
        }

        let origin = *codes.choose(rng).expect("non-empty airport table");
        let destination = *codes.choose(rng).expect("non-empty airport table");
        if origin == destination {
            continue;
        }
        let route = (origin.to_string(), destination.to_string());
        if covered.contains(&route) {
            continue;
        }
        if per_route.get(&route).copied().unwrap_or(0) >= params.filler_flights_per_route {
            continue;
        }

        let origin_airport = lookup_airport(airports, origin)?;
        let dest_airport = lookup_airport(airports, destination)?;
        let distance = great_circle_km(origin_airport, dest_airport);
        let duration = flight_duration(rng, distance);
        let sampled = sample_flight(
            rng,
            config,
            &carrier_pool,
            &fallback_pool,
            origin,
            destination,
            distance,
            duration,
            &params.filler_dates,
            &no_reserved,
            catalog.flights(),
            params.filler_max_attempts,
        );
        if sampled.is_fallback() {
            stats.fallbacks += 1;
        }
        catalog.push(sampled.into_draft());
        stats.filler_flights += 1;

        let count = per_route.entry(route).or_insert(0);
        *count += 1;
        if *count == params.filler_flights_per_route {
            saturated += 1;
        }
    }
    Ok(())
}
