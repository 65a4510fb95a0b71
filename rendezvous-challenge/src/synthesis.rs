use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use rand::Rng;

use crate::data::{
    lookup_airline, lookup_airport, Airline, Airport, Catalog, FlightDraft, PuzzleConfig,
};
use crate::geometry::{flight_duration, flight_price, great_circle_km, round1, round2, PriceBand};

/// Decoys planted per designated destination, each tripping exactly one
/// clause of the joint predicate.
pub const NUM_DECOYS: usize = 4;

/// Sizes of the per-destination planted flight sets.
///
/// Let A be the flights valid for agent A at a designated destination/date
/// and B the flights valid for agent B. The solver counts every ordered
/// pair (f1, f2) with f1 in A, f2 in B and f1.id != f2.id, so
///
///   ordered solutions = |A| * |B| - |A ∩ B|
///
/// The construction keeps A equal to the shared flights, so |A| = |A ∩ B| =
/// `shared` and |B| = `shared + b_only`, giving
///
///   ordered solutions = shared * (shared + b_only - 1)
///
/// The reference shape (2 shared, 2 B-only) yields 2 * 4 - 2 = 6 per
/// destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolutionShape {
    pub shared: usize,
    pub b_only: usize,
}

impl SolutionShape {
    /// Derives a shape producing exactly `target_solutions` ordered
    /// solutions per destination from `shared` flights valid for both
    /// agents.
    pub fn for_target(target_solutions: usize, shared: usize) -> Result<Self> {
        if shared == 0 {
            return Err(anyhow!("At least one shared flight is required"));
        }
        if target_solutions == 0 || target_solutions % shared != 0 {
            return Err(anyhow!(
                "Cannot reach {} ordered solutions with {} shared flights: \
                 the target must be a positive multiple of the shared count",
                target_solutions,
                shared
            ));
        }
        let b_size = target_solutions / shared + 1;
        if b_size < shared {
            return Err(anyhow!(
                "Target of {} ordered solutions implies |B| = {}, smaller than \
                 the {} shared flights it must contain",
                target_solutions,
                b_size,
                shared
            ));
        }
        Ok(Self {
            shared,
            b_only: b_size - shared,
        })
    }

    pub fn ordered_solutions(&self) -> usize {
        self.shared * (self.shared + self.b_only) - self.shared
    }

    pub fn flights_per_destination(&self) -> usize {
        self.shared + self.b_only + NUM_DECOYS
    }
}

impl Default for SolutionShape {
    // The reference target of 6 ordered solutions per destination.
    fn default() -> Self {
        Self {
            shared: 2,
            b_only: 2,
        }
    }
}

// Fixed price offsets for the decoys. Cheap decoys mislead anyone sorting
// by price; the offsets are deterministic so a decoy can never drift into
// validity.
const WRONG_CARRIER_FACTOR: f64 = 0.7;
const WRONG_DATE_FACTOR: f64 = 0.6;
const ORPHAN_DATE_FACTOR: f64 = 0.5;
const OVER_BUDGET_FACTOR: f64 = 1.03;

struct RouteGeometry {
    distance_km: f64,
    duration: f64,
}

/// Plants the ground-truth solution structure: for every designated
/// (destination, date), `shared` flights valid for both agents, `b_only`
/// flights valid for agent B alone (alternating budget-excluded and
/// preference-excluded), and four decoys.
pub fn plant_solutions<T: Rng>(
    rng: &mut T,
    catalog: &mut Catalog,
    airports: &[Airport],
    airlines: &[Airline],
    config: &PuzzleConfig,
    shape: SolutionShape,
) -> Result<()> {
    let a = &config.agent_a;
    let b = &config.agent_b;

    let shared_carrier = lookup_airline(airlines, &config.common_airline()?)?;
    let b_exclusive = b
        .preferred_airlines
        .difference(&a.preferred_airlines)
        .next()
        .map(|code| lookup_airline(airlines, code))
        .transpose()?
        .ok_or_else(|| {
            anyhow!("Agent B needs a preferred carrier that agent A does not share")
        })?;
    let a_exclusive = a
        .preferred_airlines
        .difference(&b.preferred_airlines)
        .next()
        .map(|code| lookup_airline(airlines, code))
        .transpose()?;
    let outsider = airlines
        .iter()
        .find(|al| {
            !a.preferred_airlines.contains(&al.code) && !b.preferred_airlines.contains(&al.code)
        })
        .ok_or_else(|| anyhow!("Need at least one carrier preferred by neither agent"))?;

    if b.max_budget <= a.max_budget + 10.0 {
        return Err(anyhow!(
            "Agent B's budget ({}) must exceed agent A's ({}) by more than 10 \
             to price a budget-excluded flight between them",
            b.max_budget,
            a.max_budget
        ));
    }

    let earliest = a
        .available_dates
        .iter()
        .chain(b.available_dates.iter())
        .min()
        .copied()
        .ok_or_else(|| anyhow!("Both agents need at least one available date"))?;
    let wrong_date = earliest
        .pred_opt()
        .ok_or_else(|| anyhow!("No calendar date before {}", earliest))?;
    let a_orphan_date = a.available_dates.difference(&b.available_dates).next();
    let b_orphan_date = b.available_dates.difference(&a.available_dates).next();

    let origin_a = lookup_airport(airports, &a.origin)?;
    let origin_b = lookup_airport(airports, &b.origin)?;

    for meet in &config.designated {
        let dest = lookup_airport(airports, &meet.airport)?;
        let dist_a = great_circle_km(origin_a, dest);
        let leg_a = RouteGeometry {
            distance_km: dist_a,
            duration: flight_duration(rng, dist_a),
        };
        let dist_b = great_circle_km(origin_b, dest);
        let leg_b = RouteGeometry {
            distance_km: dist_b,
            duration: flight_duration(rng, dist_b),
        };

        // Shared flights: the intersection A ∩ B. Common carrier, solution
        // pricing, both origins are agent A's (the solver partitions by
        // origin, and both agents depart from their own origin).
        let mut shared_price = 0.0;
        for _ in 0..shape.shared {
            shared_price = flight_price(rng, leg_a.distance_km, leg_a.duration, PriceBand::Solution);
            catalog.push(draft(
                &a.origin,
                &meet.airport,
                shared_price,
                &leg_a,
                meet.date,
                shared_carrier,
            ));
        }

        // B-only flights, alternating the exclusion mechanism: even index
        // prices the common carrier strictly between the budgets, odd index
        // books a carrier agent A does not prefer at a solution price.
        let mut b_only_price = shared_price;
        for i in 0..shape.b_only {
            if i % 2 == 0 {
                let hi = (b.max_budget - 5.0).min(a.max_budget + 100.0);
                let price = round2(rng.gen_range(a.max_budget + 5.0..hi));
                catalog.push(draft(
                    &b.origin,
                    &meet.airport,
                    price,
                    &leg_b,
                    meet.date,
                    shared_carrier,
                ));
            } else {
                let price =
                    flight_price(rng, leg_b.distance_km, leg_b.duration, PriceBand::Solution);
                b_only_price = price;
                catalog.push(draft(
                    &b.origin,
                    &meet.airport,
                    price,
                    &leg_b,
                    meet.date,
                    b_exclusive,
                ));
            }
        }

        // Decoy: affordable and on the designated date, but on a carrier
        // neither agent prefers.
        catalog.push(draft(
            &a.origin,
            &meet.airport,
            round2(shared_price * WRONG_CARRIER_FACTOR),
            &leg_a,
            meet.date,
            outsider,
        ));

        // Decoy: right carrier and price, dated before either agent's
        // availability window opens.
        catalog.push(draft(
            &b.origin,
            &meet.airport,
            round2(b_only_price * WRONG_DATE_FACTOR),
            &leg_b,
            wrong_date,
            shared_carrier,
        ));

        // Decoy: valid for exactly one agent on a date the other cannot
        // make, so no partner flight can ever exist.
        let orphan = orphan_decoy(
            a_orphan_date,
            b_orphan_date,
            a_exclusive,
            b_exclusive,
            &a.origin,
            &b.origin,
            &meet.airport,
            shared_price,
            b_only_price,
            &leg_a,
            &leg_b,
        )?;
        catalog.push(orphan);

        // Decoy: common carrier on the designated date, priced a small
        // margin over the larger budget, so over both.
        catalog.push(draft(
            &a.origin,
            &meet.airport,
            round2(a.max_budget.max(b.max_budget) * OVER_BUDGET_FACTOR),
            &leg_a,
            meet.date,
            shared_carrier,
        ));
    }

    Ok(())
}

fn draft(
    origin: &str,
    destination: &str,
    price: f64,
    leg: &RouteGeometry,
    date: NaiveDate,
    airline: &Airline,
) -> FlightDraft {
    FlightDraft {
        origin: origin.to_string(),
        destination: destination.to_string(),
        price,
        duration: leg.duration,
        date,
        distance_km: round1(leg.distance_km),
        airline: airline.clone(),
    }
}

#[allow(clippy::too_many_arguments)]
fn orphan_decoy(
    a_orphan_date: Option<&NaiveDate>,
    b_orphan_date: Option<&NaiveDate>,
    a_exclusive: Option<&Airline>,
    b_exclusive: &Airline,
    origin_a: &str,
    origin_b: &str,
    destination: &str,
    shared_price: f64,
    b_only_price: f64,
    leg_a: &RouteGeometry,
    leg_b: &RouteGeometry,
) -> Result<FlightDraft> {
    if let (Some(&date), Some(carrier)) = (a_orphan_date, a_exclusive) {
        return Ok(draft(
            origin_a,
            destination,
            round2(shared_price * ORPHAN_DATE_FACTOR),
            leg_a,
            date,
            carrier,
        ));
    }
    if let Some(&date) = b_orphan_date {
        return Ok(draft(
            origin_b,
            destination,
            round2(b_only_price * ORPHAN_DATE_FACTOR),
            leg_b,
            date,
            b_exclusive,
        ));
    }
    Err(anyhow!(
        "Orphaned-date decoy needs a date available to exactly one agent"
    ))
}
