use anyhow::{anyhow, Result};
use clap::{arg, Command};
use serde_json::json;
use std::{fs, path::PathBuf};

use rendezvous_challenge::{
    aggregate, find_solutions, generate_catalog, reference, Flight, PuzzleConfig, SolutionShape,
};

fn cli() -> Command {
    Command::new("rendezvous-cli")
        .about("Generates and solves the two-agent flight rendezvous puzzle")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("generate")
                .about("Generates the flight catalog and puzzle files")
                .arg(arg!(<SEED> "Seed value").value_parser(clap::value_parser!(u64)))
                .arg(
                    arg!([OUTPUT] "Output directory")
                        .value_parser(clap::value_parser!(PathBuf))
                        .default_value("assets"),
                )
                .arg(
                    arg!(--target [TARGET] "Target catalog size")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("solve")
                .about("Finds and aggregates every valid flight pair in a catalog")
                .arg(
                    arg!(<FLIGHTS> "Path to the flights json file")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(<CONFIG> "Path to the puzzle config json file")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!([OUTPUT] "Path to write the analysis json")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("generate", sub_m)) => generate(
            *sub_m.get_one::<u64>("SEED").unwrap(),
            sub_m.get_one::<PathBuf>("OUTPUT").unwrap().clone(),
            sub_m.get_one::<usize>("target").copied(),
        ),
        Some(("solve", sub_m)) => solve(
            sub_m.get_one::<PathBuf>("FLIGHTS").unwrap().clone(),
            sub_m.get_one::<PathBuf>("CONFIG").unwrap().clone(),
            sub_m.get_one::<PathBuf>("OUTPUT").cloned(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn seed_bytes(seed: u64) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    bytes[..8].copy_from_slice(&seed.to_le_bytes());
    bytes
}

fn generate(seed: u64, output: PathBuf, target: Option<usize>) -> Result<()> {
    let airports = reference::reference_airports();
    let airlines = reference::reference_airlines();
    let config = reference::reference_config();
    let mut params = reference::reference_params();
    if let Some(target) = target {
        params.target_catalog_size = target;
    }

    let (catalog, stats) = generate_catalog(
        &seed_bytes(seed),
        &airports,
        &airlines,
        &config,
        SolutionShape::default(),
        &params,
    )?;

    fs::create_dir_all(&output)?;
    fs::write(
        output.join("airports.json"),
        serde_json::to_string_pretty(&airports)?,
    )?;
    fs::write(
        output.join("airlines.json"),
        serde_json::to_string_pretty(&airlines)?,
    )?;
    fs::write(
        output.join("flights.json"),
        serde_json::to_string_pretty(catalog.flights())?,
    )?;
    fs::write(
        output.join("puzzle_config.json"),
        serde_json::to_string_pretty(&config)?,
    )?;
    fs::write(
        output.join("puzzle_description.json"),
        serde_json::to_string_pretty(&puzzle_description(&config))?,
    )?;

    println!(
        "Generated {} flights ({} interest, {} filler, {} fallbacks) in {}",
        catalog.len(),
        stats.interest_flights,
        stats.filler_flights,
        stats.fallbacks,
        output.display(),
    );
    Ok(())
}

fn puzzle_description(config: &PuzzleConfig) -> serde_json::Value {
    json!({
        "title": "Travel Rendezvous Challenge",
        "description": "Two agents want to meet for a vacation. Help them find flights that work for both!",
        "agents": {
            "agent_a": &config.agent_a,
            "agent_b": &config.agent_b,
        },
        "constraints": {
            "must_arrive_same_day": true,
            "both_must_afford": true,
            "both_must_be_available": true,
            "overlap_dates": config.overlap_dates(),
        },
        "evaluation_criteria": {
            "valid_solution": {
                "same_destination": "flights must go to the same destination airport",
                "same_date": "flights must be on the same date",
                "within_budgets": "each agent's flight must be within their budget",
                "date_availability": "the date must be in both agents' available dates",
                "airline_preferences": "each agent must fly one of their preferred airlines",
            },
        },
        "hints": {
            "overlap_dates": "look for dates when both agents are available",
            "budget_consideration": "both agents need to stay within their budgets",
            "airline_preferences": "each agent must use one of their preferred airlines",
            "multiple_solutions": "several valid combinations exist - any that meets all criteria works",
        },
    })
}

fn solve(flights_path: PathBuf, config_path: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let flights: Vec<Flight> = serde_json::from_str(&fs::read_to_string(&flights_path)?)?;
    let config: PuzzleConfig = serde_json::from_str(&fs::read_to_string(&config_path)?)?;

    println!("Loaded {} flights", flights.len());
    let solutions = find_solutions(&flights, &config);
    let report = aggregate(&solutions);

    println!("Total valid solutions: {}", report.total_count);

    println!("\nBy destination:");
    for (destination, summary) in &report.by_destination {
        println!("  {}: {} solution(s)", destination, summary.count);
        let example = &summary.example;
        println!(
            "    example: {} - agent A: ${} ({}), agent B: ${} ({})",
            example.date,
            example.agent_a_flight.price,
            example.agent_a_flight.airline_code,
            example.agent_b_flight.price,
            example.agent_b_flight.airline_code,
        );
    }

    println!("\nBy date:");
    for (date, count) in &report.by_date {
        println!("  {}: {} solution(s)", date, count);
    }

    println!("\nBy carrier pair:");
    for (combo, count) in &report.by_carrier_pair {
        println!("  {}: {} solution(s)", combo, count);
    }

    if let Some(output) = output {
        let analysis = json!({
            "analysis_summary": report,
            "all_solutions": solutions,
        });
        fs::write(&output, serde_json::to_string_pretty(&analysis)?)?;
        println!("\nAnalysis written to {}", output.display());
    }
    Ok(())
}
