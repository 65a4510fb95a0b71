use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Airport {
    #[serde(rename = "IATA")]
    pub iata: String,
    #[serde(rename = "Airport Name")]
    pub name: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Airline {
    pub code: String,
    pub name: String,
    pub continent: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Flight {
    pub id: u32,
    pub origin: String,
    pub destination: String,
    pub price: f64,
    pub duration: f64,
    pub date: NaiveDate,
    pub distance_km: f64,
    pub airline: Airline,
}

/// A flight without an id. Ids are assigned by the catalog on insertion so
/// they stay unique and monotonic across every generation stage.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightDraft {
    pub origin: String,
    pub destination: String,
    pub price: f64,
    pub duration: f64,
    pub date: NaiveDate,
    pub distance_km: f64,
    pub airline: Airline,
}

/// Append-only flight store. The only mutable state in the pipeline.
#[derive(Debug, Clone)]
pub struct Catalog {
    flights: Vec<Flight>,
    next_id: u32,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            flights: Vec::new(),
            next_id: 1,
        }
    }

    pub fn push(&mut self, draft: FlightDraft) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.flights.push(Flight {
            id,
            origin: draft.origin,
            destination: draft.destination,
            price: draft.price,
            duration: draft.duration,
            date: draft.date,
            distance_km: draft.distance_km,
            airline: draft.airline,
        });
        id
    }

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn into_flights(self) -> Vec<Flight> {
        self.flights
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AgentProfile {
    pub name: String,
    pub description: String,
    pub origin: String,
    pub available_dates: BTreeSet<NaiveDate>,
    pub preferred_airlines: BTreeSet<String>,
    pub max_budget: f64,
}

impl AgentProfile {
    /// Whether this agent could book `flight` under all of their
    /// constraints: origin, date availability, budget and carrier.
    pub fn admits(&self, flight: &Flight) -> bool {
        self.admits_candidate(
            &flight.origin,
            flight.date,
            flight.price,
            &flight.airline.code,
        )
    }

    pub fn admits_candidate(
        &self,
        origin: &str,
        date: NaiveDate,
        price: f64,
        airline_code: &str,
    ) -> bool {
        origin == self.origin
            && self.available_dates.contains(&date)
            && price <= self.max_budget
            && self.preferred_airlines.contains(airline_code)
    }
}

/// A (destination, date) pair that must carry planted solutions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DesignatedMeet {
    pub airport: String,
    pub date: NaiveDate,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PuzzleConfig {
    pub agent_a: AgentProfile,
    pub agent_b: AgentProfile,
    pub designated: Vec<DesignatedMeet>,
}

impl PuzzleConfig {
    /// Dates on which both agents can travel.
    pub fn overlap_dates(&self) -> BTreeSet<NaiveDate> {
        self.agent_a
            .available_dates
            .intersection(&self.agent_b.available_dates)
            .copied()
            .collect()
    }

    /// Carriers both agents prefer.
    pub fn common_airlines(&self) -> BTreeSet<String> {
        self.agent_a
            .preferred_airlines
            .intersection(&self.agent_b.preferred_airlines)
            .cloned()
            .collect()
    }

    /// The carrier shared flights are booked on. Errors when the agents'
    /// preference sets do not intersect, since no flight could then be valid
    /// for both.
    pub fn common_airline(&self) -> Result<String> {
        self.agent_a
            .preferred_airlines
            .intersection(&self.agent_b.preferred_airlines)
            .next()
            .cloned()
            .ok_or_else(|| anyhow!("Agents share no preferred carrier"))
    }

    pub fn is_designated(&self, airport: &str, date: NaiveDate) -> bool {
        self.designated
            .iter()
            .any(|m| m.airport == airport && m.date == date)
    }
}

pub fn lookup_airport<'a>(airports: &'a [Airport], code: &str) -> Result<&'a Airport> {
    airports
        .iter()
        .find(|a| a.iata == code)
        .ok_or_else(|| anyhow!("Unknown airport code '{}'", code))
}

pub fn lookup_airline<'a>(airlines: &'a [Airline], code: &str) -> Result<&'a Airline> {
    airlines
        .iter()
        .find(|a| a.code == code)
        .ok_or_else(|| anyhow!("Unknown airline code '{}'", code))
}
