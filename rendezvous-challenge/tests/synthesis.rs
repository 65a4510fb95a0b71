use rand::{rngs::SmallRng, SeedableRng};
use std::collections::HashMap;

use rendezvous_challenge::reference::{reference_airlines, reference_airports, reference_config};
use rendezvous_challenge::{find_solutions, plant_solutions, Catalog, SolutionShape};

#[test]
fn test_shape_arithmetic() {
    let shape = SolutionShape::for_target(6, 2).unwrap();
    assert_eq!(shape, SolutionShape { shared: 2, b_only: 2 });
    assert_eq!(shape.ordered_solutions(), 6);
    assert_eq!(shape.flights_per_destination(), 8);

    let shape = SolutionShape::for_target(12, 3).unwrap();
    assert_eq!(shape, SolutionShape { shared: 3, b_only: 2 });
    assert_eq!(shape.ordered_solutions(), 12);

    let shape = SolutionShape::for_target(4, 1).unwrap();
    assert_eq!(shape, SolutionShape { shared: 1, b_only: 4 });
    assert_eq!(shape.ordered_solutions(), 4);
}

#[test]
fn test_shape_rejects_impossible_targets() {
    assert!(SolutionShape::for_target(7, 2).is_err());
    assert!(SolutionShape::for_target(0, 2).is_err());
    assert!(SolutionShape::for_target(6, 0).is_err());
    // target 3 with 3 shared flights implies |B| = 2 < 3.
    assert!(SolutionShape::for_target(3, 3).is_err());
}

#[test]
fn test_default_shape_matches_reference_target() {
    assert_eq!(
        SolutionShape::default(),
        SolutionShape::for_target(6, 2).unwrap()
    );
}

#[test]
fn test_planted_flights_per_destination() {
    let airports = reference_airports();
    let airlines = reference_airlines();
    let config = reference_config();
    let shape = SolutionShape::default();

    let mut rng = SmallRng::seed_from_u64(42);
    let mut catalog = Catalog::new();
    plant_solutions(&mut rng, &mut catalog, &airports, &airlines, &config, shape).unwrap();

    assert_eq!(
        catalog.len(),
        shape.flights_per_destination() * config.designated.len()
    );

    let mut per_destination: HashMap<&str, usize> = HashMap::new();
    for flight in catalog.flights() {
        *per_destination.entry(flight.destination.as_str()).or_insert(0) += 1;
    }
    assert_eq!(per_destination.len(), 3);
    for meet in &config.designated {
        assert_eq!(per_destination[meet.airport.as_str()], 8);
    }
}

#[test]
fn test_planted_catalog_yields_exact_solution_counts() {
    let airports = reference_airports();
    let airlines = reference_airlines();
    let config = reference_config();
    let shape = SolutionShape::default();

    for seed in 0..20u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut catalog = Catalog::new();
        plant_solutions(&mut rng, &mut catalog, &airports, &airlines, &config, shape).unwrap();

        let solutions = find_solutions(catalog.flights(), &config);
        assert_eq!(solutions.len(), 18, "seed {}", seed);

        let mut per_destination: HashMap<&str, usize> = HashMap::new();
        for solution in &solutions {
            assert!(
                config.is_designated(&solution.destination, solution.date),
                "seed {}: solution at undesignated {} on {}",
                seed,
                solution.destination,
                solution.date
            );
            *per_destination
                .entry(solution.destination.as_str())
                .or_insert(0) += 1;
        }
        for meet in &config.designated {
            assert_eq!(per_destination[meet.airport.as_str()], 6, "seed {}", seed);
        }
    }
}

#[test]
fn test_planting_requires_a_common_carrier() {
    let airports = reference_airports();
    let airlines = reference_airlines();
    let mut config = reference_config();
    config.agent_a.preferred_airlines = ["LH"].iter().map(|s| s.to_string()).collect();
    config.agent_b.preferred_airlines = ["EK"].iter().map(|s| s.to_string()).collect();

    let mut rng = SmallRng::seed_from_u64(1);
    let mut catalog = Catalog::new();
    let result = plant_solutions(
        &mut rng,
        &mut catalog,
        &airports,
        &airlines,
        &config,
        SolutionShape::default(),
    );
    assert!(result.is_err());
}

#[test]
fn test_planting_requires_a_budget_gap() {
    let airports = reference_airports();
    let airlines = reference_airlines();
    let mut config = reference_config();
    config.agent_b.max_budget = config.agent_a.max_budget;

    let mut rng = SmallRng::seed_from_u64(1);
    let mut catalog = Catalog::new();
    let result = plant_solutions(
        &mut rng,
        &mut catalog,
        &airports,
        &airlines,
        &config,
        SolutionShape::default(),
    );
    assert!(result.is_err());
}
