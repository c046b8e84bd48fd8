use clap::Parser;
use multitaxi::search::{
    search_engines::{SearchEngineName, SearchResult, TerminationCondition},
    validate, HeuristicName, Instance, TaxiProblem,
};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
enum Verbosity {
    Silent,
    Normal,
    Verbose,
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}

#[derive(Parser)]
#[command(version)]
/// Find a cost-optimal joint plan for a multi-taxi pick-up-and-delivery
/// instance.
struct Cli {
    #[arg(help = "The JSON problem instance file")]
    instance: PathBuf,
    #[arg(
        value_enum,
        help = "The heuristic evaluator to use",
        short = 'u',
        long = "heuristic",
        id = "HEURISTIC",
        default_value_t = HeuristicName::Combined
    )]
    heuristic_name: HeuristicName,
    #[arg(
        value_enum,
        help = "The search engine to use",
        short = 'e',
        long = "engine",
        id = "ENGINE",
        default_value_t = SearchEngineName::AStar
    )]
    search_engine_name: SearchEngineName,
    #[arg(
        help = "Give up after this much wall-clock time, e.g. '30s' or '5m'",
        short = 't',
        long = "time-limit",
        id = "TIME_LIMIT",
        value_parser = humantime::parse_duration
    )]
    time_limit: Option<Duration>,
    #[arg(
        help = "Give up beyond this much resident memory, in megabytes",
        long = "memory-limit-mb",
        id = "MEMORY_LIMIT"
    )]
    memory_limit_mb: Option<usize>,
    #[arg(help = "Write the plan to this file", short = 'o', long = "output", id = "OUTPUT")]
    plan: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

fn main() {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let instance = Instance::from_path(&cli.instance).unwrap_or_else(|e| {
        eprintln!("Instance file is not valid JSON: {}", e);
        std::process::exit(1)
    });
    let problem = TaxiProblem::new(&instance).unwrap_or_else(|e| {
        eprintln!("Malformed instance: {}", e);
        std::process::exit(1)
    });

    let termination = TerminationCondition::new(cli.time_limit, cli.memory_limit_mb);
    let mut engine = cli.search_engine_name.create();
    let (result, mut statistics) =
        engine.search(&problem, cli.heuristic_name.create(), termination);
    statistics.finalise_search();

    match result {
        SearchResult::Success(plan) => {
            info!("validating plan");
            match validate(&plan, &problem) {
                Ok(()) => info!("plan is valid"),
                Err(e) => {
                    info!("plan is invalid: {}", e);
                    return;
                }
            }
            info!("plan found");
            info!(plan_length = plan.len());

            println!("Plan found:");
            println!("{}", plan.to_string(&problem));
            println!("Plan length: {}", plan.len());

            if let Some(plan_path) = cli.plan {
                std::fs::write(plan_path, plan.to_string(&problem))
                    .expect("Failed to write plan file");
            }
        }
        _ => {
            info!("no plan found");
            println!("No plan found: {:?}", result);
        }
    }
}
