//! Synthesizes a flight catalog for a two-agent rendezvous puzzle.
//!
//! A known, combinatorially controlled set of flight pairs satisfies the
//! joint validity predicate (same destination and date, within each agent's
//! budget, availability and carrier preferences); every other record is
//! constructed or rejection-sampled so it cannot complete an unintended
//! pair. A brute-force solver re-derives the planted solutions from the
//! finished catalog for verification.

pub mod data;
pub mod geometry;
pub mod guard;
pub mod pipeline;
pub mod populate;
pub mod reference;
pub mod report;
pub mod solver;
pub mod synthesis;

pub use data::{
    AgentProfile, Airline, Airport, Catalog, DesignatedMeet, Flight, FlightDraft, PuzzleConfig,
};
pub use pipeline::{audit_catalog, generate_catalog};
pub use populate::{date_range, PopulationParams, PopulationStats, Sampled};
pub use report::{aggregate, SolutionReport};
pub use solver::{find_solutions, is_valid_pair, Solution};
pub use synthesis::{plant_solutions, SolutionShape};
