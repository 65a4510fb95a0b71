use chrono::NaiveDate;

use rendezvous_challenge::reference::{reference_airlines, reference_config};
use rendezvous_challenge::report::aggregate;
use rendezvous_challenge::{find_solutions, is_valid_pair, Airline, Flight};

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, d).unwrap()
}

fn carrier(code: &str) -> Airline {
    reference_airlines()
        .into_iter()
        .find(|a| a.code == code)
        .unwrap()
}

fn flight(id: u32, destination: &str, d: u32, price: f64, airline: &str) -> Flight {
    Flight {
        id,
        origin: "FCO".to_string(),
        destination: destination.to_string(),
        price,
        duration: 9.5,
        date: date(d),
        distance_km: 9000.0,
        airline: carrier(airline),
    }
}

#[test]
fn test_two_shared_flights_yield_two_ordered_solutions() {
    let config = reference_config();
    let flights = vec![
        flight(1, "SIN", 17, 600.0, "SQ"),
        flight(2, "SIN", 17, 620.0, "SQ"),
    ];
    let solutions = find_solutions(&flights, &config);
    assert_eq!(solutions.len(), 2);
    for solution in &solutions {
        assert_ne!(
            solution.agent_a_flight.flight_id,
            solution.agent_b_flight.flight_id
        );
    }
}

#[test]
fn test_single_flight_cannot_pair_with_itself() {
    let config = reference_config();
    let flights = vec![flight(1, "SIN", 17, 600.0, "SQ")];
    assert!(find_solutions(&flights, &config).is_empty());
}

#[test]
fn test_rejects_date_mismatch() {
    let config = reference_config();
    let flights = vec![
        flight(1, "SIN", 17, 600.0, "SQ"),
        flight(2, "SIN", 18, 620.0, "SQ"),
    ];
    assert!(find_solutions(&flights, &config).is_empty());
}

#[test]
fn test_rejects_date_outside_overlap() {
    let config = reference_config();
    // July 15 is available to agent A only.
    let flights = vec![
        flight(1, "SIN", 15, 600.0, "SQ"),
        flight(2, "SIN", 15, 620.0, "SQ"),
    ];
    assert!(find_solutions(&flights, &config).is_empty());
}

#[test]
fn test_rejects_over_budget_flights() {
    let config = reference_config();
    let affordable = flight(1, "SIN", 17, 600.0, "SQ");
    let mid = flight(2, "SIN", 17, 750.0, "SQ");

    // 750 exceeds agent A's 700 but not agent B's 810, so only the ordered
    // pair with the cheap flight on agent A's side survives.
    let solutions = find_solutions(&[affordable.clone(), mid.clone()], &config);
    assert_eq!(solutions.len(), 1);
    assert_eq!(solutions[0].agent_a_flight.flight_id, 1);
    assert_eq!(solutions[0].agent_b_flight.flight_id, 2);

    let over_both = flight(3, "SIN", 17, 900.0, "SQ");
    assert!(find_solutions(&[affordable, over_both], &config).is_empty());
}

#[test]
fn test_respects_carrier_preferences() {
    let config = reference_config();
    // LH works for agent A only, EK for agent B only.
    let flights = vec![
        flight(1, "SIN", 17, 600.0, "LH"),
        flight(2, "SIN", 17, 620.0, "EK"),
    ];
    let solutions = find_solutions(&flights, &config);
    assert_eq!(solutions.len(), 1);
    assert_eq!(solutions[0].agent_a_flight.airline_code, "LH");
    assert_eq!(solutions[0].agent_b_flight.airline_code, "EK");

    // Listing order does not matter: both flights leave FCO, so the solver
    // tries both orderings and still puts agent A on LH and agent B on EK.
    let flights = vec![
        flight(1, "SIN", 17, 600.0, "EK"),
        flight(2, "SIN", 17, 620.0, "LH"),
    ];
    let solutions = find_solutions(&flights, &config);
    assert_eq!(solutions.len(), 1);
    assert_eq!(solutions[0].agent_a_flight.flight_id, 2);
    assert_eq!(solutions[0].agent_a_flight.airline_code, "LH");
    assert_eq!(solutions[0].agent_b_flight.flight_id, 1);
    assert_eq!(solutions[0].agent_b_flight.airline_code, "EK");

    // Carriers preferred by neither agent never validate in any role.
    let flights = vec![
        flight(1, "SIN", 17, 600.0, "AA"),
        flight(2, "SIN", 17, 620.0, "QF"),
    ];
    assert!(find_solutions(&flights, &config).is_empty());
}

#[test]
fn test_is_valid_pair_matches_find_solutions() {
    let config = reference_config();
    let f1 = flight(1, "BKK", 18, 650.0, "SQ");
    let f2 = flight(2, "BKK", 18, 700.0, "EK");
    assert!(is_valid_pair(&f1, &f2, &config.agent_a, &config.agent_b));
    assert!(!is_valid_pair(&f2, &f1, &config.agent_a, &config.agent_b));

    // The predicate stands on its own: flights to different destinations
    // never pair, even though the enumeration already groups by destination.
    let elsewhere = flight(3, "SIN", 18, 700.0, "EK");
    assert!(!is_valid_pair(&f1, &elsewhere, &config.agent_a, &config.agent_b));
}

#[test]
fn test_aggregate_groups_and_counts() {
    let config = reference_config();
    let flights = vec![
        flight(1, "SIN", 17, 600.0, "SQ"),
        flight(2, "SIN", 17, 620.0, "SQ"),
        flight(3, "BKK", 18, 610.0, "LH"),
        flight(4, "BKK", 18, 640.0, "EK"),
    ];
    let solutions = find_solutions(&flights, &config);
    let report = aggregate(&solutions);

    assert_eq!(report.total_count, solutions.len());
    assert_eq!(report.by_destination["SIN"].count, 2);
    assert_eq!(report.by_destination["BKK"].count, 1);
    assert_eq!(report.by_date[&date(17)], 2);
    assert_eq!(report.by_date[&date(18)], 1);
    assert_eq!(report.by_carrier_pair["SQ-SQ"], 2);
    assert_eq!(report.by_carrier_pair["LH-EK"], 1);

    let example = &report.by_destination["BKK"].example;
    assert_eq!(example.agent_a_flight.flight_id, 3);
    assert_eq!(example.agent_b_flight.flight_id, 4);
}
