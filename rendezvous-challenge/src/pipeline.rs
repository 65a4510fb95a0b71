use anyhow::{anyhow, Result};
use rand::{
    rngs::{SmallRng, StdRng},
    Rng, SeedableRng,
};

use crate::data::{Airline, Airport, Catalog, PuzzleConfig};
use crate::populate::{populate_filler, populate_interest, PopulationParams, PopulationStats};
use crate::solver::find_solutions;
use crate::synthesis::{plant_solutions, SolutionShape};

/// Runs synthesis and population end to end. One master rng is seeded at
/// entry and each stage draws its own stream from it, so the catalog is a
/// pure function of the seed, the configuration and the parameters.
pub fn generate_catalog(
    seed: &[u8; 32],
    airports: &[Airport],
    airlines: &[Airline],
    config: &PuzzleConfig,
    shape: SolutionShape,
    params: &PopulationParams,
) -> Result<(Catalog, PopulationStats)> {
    let mut rng = StdRng::from_seed(*seed);
    let mut catalog = Catalog::new();
    let mut stats = PopulationStats::default();

    let mut stage_rng = SmallRng::from_seed(rng.gen());
    plant_solutions(
        &mut stage_rng,
        &mut catalog,
        airports,
        airlines,
        config,
        shape,
    )?;

    let mut stage_rng = SmallRng::from_seed(rng.gen());
    populate_interest(
        &mut stage_rng,
        &mut catalog,
        airports,
        airlines,
        config,
        params,
        &mut stats,
    )?;

    let mut stage_rng = SmallRng::from_seed(rng.gen());
    populate_filler(
        &mut stage_rng,
        &mut catalog,
        airports,
        airlines,
        config,
        params,
        &mut stats,
    )?;

    audit_catalog(&catalog, config)?;

    Ok((catalog, stats))
}

/// Global consistency pass over the finished catalog.
///
/// The guard only sees flights accepted before a candidate, so it cannot
/// rule out a pair formed entirely of later flights. A full solver pass
/// after generation closes that gap: every solution must sit at a
/// designated (destination, date).
pub fn audit_catalog(catalog: &Catalog, config: &PuzzleConfig) -> Result<()> {
    for solution in find_solutions(catalog.flights(), config) {
        if !config.is_designated(&solution.destination, solution.date) {
            return Err(anyhow!(
                "Unintended solution at {} on {} (flights {} and {})",
                solution.destination,
                solution.date,
                solution.agent_a_flight.flight_id,
                solution.agent_b_flight.flight_id,
            ));
        }
    }
    Ok(())
}
