use crate::data::{Flight, FlightDraft, PuzzleConfig};

/// Returns true if accepting `candidate` could complete a flight pair
/// satisfying the joint predicate anywhere the puzzle did not plant one.
///
/// Two rejection paths:
/// 1. The candidate is usable by one agent and a flight usable by the other
///    agent to the same destination on the same date was already accepted.
/// 2. The candidate is usable by both agents at once (overlap date, common
///    carrier, within both budgets). No partner exists yet, but a later
///    flight could complete the pair, so it is rejected pre-emptively.
///
/// Only flights accepted so far are consulted; see the catalog audit in the
/// pipeline for the pairs this cannot see.
pub fn would_create_unintended_solution(
    config: &PuzzleConfig,
    candidate: &FlightDraft,
    accepted: &[Flight],
) -> bool {
    let a = &config.agent_a;
    let b = &config.agent_b;
    if candidate.origin != a.origin && candidate.origin != b.origin {
        return false;
    }

    for (me, partner) in [(a, b), (b, a)] {
        let usable_by_me = me.admits_candidate(
            &candidate.origin,
            candidate.date,
            candidate.price,
            &candidate.airline.code,
        );
        if usable_by_me
            && accepted.iter().any(|flight| {
                flight.destination == candidate.destination
                    && flight.date == candidate.date
                    && partner.admits(flight)
            })
        {
            return true;
        }
    }

    candidate.price <= a.max_budget
        && candidate.price <= b.max_budget
        && a.available_dates.contains(&candidate.date)
        && b.available_dates.contains(&candidate.date)
        && a.preferred_airlines.contains(&candidate.airline.code)
        && b.preferred_airlines.contains(&candidate.airline.code)
}
