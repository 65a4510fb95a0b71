use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::data::{AgentProfile, Flight, PuzzleConfig};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FlightSummary {
    pub flight_id: u32,
    pub price: f64,
    pub airline_code: String,
    pub duration: f64,
}

impl FlightSummary {
    fn of(flight: &Flight) -> Self {
        Self {
            flight_id: flight.id,
            price: flight.price,
            airline_code: flight.airline.code.clone(),
            duration: flight.duration,
        }
    }
}

/// One satisfying ordered flight pair: agent A books `agent_a_flight`,
/// agent B books `agent_b_flight`, both arriving at `destination` on `date`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Solution {
    pub destination: String,
    pub date: NaiveDate,
    pub agent_a_flight: FlightSummary,
    pub agent_b_flight: FlightSummary,
}

/// The joint validity predicate for an ordered pair: same destination, same
/// date, date within both agents' availability, each price within its
/// agent's budget, each carrier within its agent's preferences.
pub fn is_valid_pair(f1: &Flight, f2: &Flight, a: &AgentProfile, b: &AgentProfile) -> bool {
    if f1.destination != f2.destination || f1.date != f2.date {
        return false;
    }
    if !a.available_dates.contains(&f1.date) || !b.available_dates.contains(&f1.date) {
        return false;
    }
    if f1.price > a.max_budget || f2.price > b.max_budget {
        return false;
    }
    a.preferred_airlines.contains(&f1.airline.code)
        && b.preferred_airlines.contains(&f2.airline.code)
}

/// Brute-force enumeration of every satisfying ordered pair in the catalog.
///
/// Per destination this is O(|reachable by A| * |reachable by B|), which the
/// generation limits keep small. Destinations are visited in sorted order,
/// so the output is a pure, reproducible function of the input.
pub fn find_solutions(flights: &[Flight], config: &PuzzleConfig) -> Vec<Solution> {
    let a = &config.agent_a;
    let b = &config.agent_b;
    let destinations: BTreeSet<&str> = flights.iter().map(|f| f.destination.as_str()).collect();

    let mut solutions = Vec::new();
    for destination in destinations {
        let reachable_by_a: Vec<&Flight> = flights
            .iter()
            .filter(|f| f.origin == a.origin && f.destination == destination)
            .collect();
        let reachable_by_b: Vec<&Flight> = flights
            .iter()
            .filter(|f| f.origin == b.origin && f.destination == destination)
            .collect();

        for f1 in &reachable_by_a {
            for f2 in &reachable_by_b {
                // Both agents cannot book the very same flight.
                if f1.id == f2.id {
                    continue;
                }
                if is_valid_pair(f1, f2, a, b) {
                    solutions.push(Solution {
                        destination: destination.to_string(),
                        date: f1.date,
                        agent_a_flight: FlightSummary::of(f1),
                        agent_b_flight: FlightSummary::of(f2),
                    });
                }
            }
        }
    }
    solutions
}
