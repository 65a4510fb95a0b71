use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::solver::Solution;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DestinationSummary {
    pub count: usize,
    pub example: Solution,
}

/// Aggregated view of the solver's output.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SolutionReport {
    pub total_count: usize,
    pub by_destination: BTreeMap<String, DestinationSummary>,
    pub by_date: BTreeMap<NaiveDate, usize>,
    pub by_carrier_pair: BTreeMap<String, usize>,
}

/// Groups solutions by destination (with one example each), by date, and by
/// the "{agent A carrier}-{agent B carrier}" combination. Pure reduction.
pub fn aggregate(solutions: &[Solution]) -> SolutionReport {
    let mut by_destination: BTreeMap<String, DestinationSummary> = BTreeMap::new();
    let mut by_date: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    let mut by_carrier_pair: BTreeMap<String, usize> = BTreeMap::new();

    for solution in solutions {
        by_destination
            .entry(solution.destination.clone())
            .and_modify(|summary| summary.count += 1)
            .or_insert_with(|| DestinationSummary {
                count: 1,
                example: solution.clone(),
            });

        *by_date.entry(solution.date).or_insert(0) += 1;

        let combo = format!(
            "{}-{}",
            solution.agent_a_flight.airline_code, solution.agent_b_flight.airline_code
        );
        *by_carrier_pair.entry(combo).or_insert(0) += 1;
    }

    SolutionReport {
        total_count: solutions.len(),
        by_destination,
        by_date,
        by_carrier_pair,
    }
}
