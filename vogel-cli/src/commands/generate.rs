#[cfg(test)]
#[path = "../../tests/unit/commands/generate_test.rs"]
mod generate_test;

use super::*;
use clap::{Arg, ArgAction, Command};
use vogel_cli::core::models::examples::ProblemPrototype;
use vogel_cli::extensions::generate::generate_problem;
use vogel_pragmatic::format::problem::{Problem, serialize_problem};

const FORMAT_ARG_NAME: &str = "FORMAT";
const SOURCES_ARG_NAME: &str = "sources";
const DESTINATIONS_ARG_NAME: &str = "destinations";
const MAX_COST_ARG_NAME: &str = "max-cost";
const MAX_CAPACITY_ARG_NAME: &str = "max-capacity";
const BALANCED_ARG_NAME: &str = "balanced";
const SEED_ARG_NAME: &str = "seed";
const OUT_RESULT_ARG_NAME: &str = "out-result";

const DEFAULT_MAX_COST: i32 = 100;
const DEFAULT_MAX_CAPACITY: i32 = 100;

pub fn get_generate_app() -> Command {
    Command::new("generate")
        .about("Provides the way to generate random problems for testing")
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies output type")
                .required(true)
                .value_parser(["pragmatic"])
                .index(1),
        )
        .arg(
            Arg::new(SOURCES_ARG_NAME)
                .help("Amount of sources in generated problem")
                .short('s')
                .long(SOURCES_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(DESTINATIONS_ARG_NAME)
                .help("Amount of destinations in generated problem")
                .short('d')
                .long(DESTINATIONS_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(MAX_COST_ARG_NAME)
                .help("Max unit shipping cost, default is 100")
                .long(MAX_COST_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(MAX_CAPACITY_ARG_NAME)
                .help("Max supply or demand of a single source or destination, default is 100")
                .long(MAX_CAPACITY_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(BALANCED_ARG_NAME)
                .help("Generates problem where total supply equals total demand")
                .long(BALANCED_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Specifies random seed to make generation repeatable")
                .long(SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_generate(matches: &ArgMatches) -> Result<(), String> {
    let problem = generate_problem_from_args(matches).map_err(|err| format!("cannot generate problem: '{err}'"))?;

    let mut out_buffer = create_out_buffer(matches, OUT_RESULT_ARG_NAME)?;
    serialize_problem(&problem, &mut out_buffer)
        .map_err(|err| format!("cannot serialize as pragmatic problem: '{err}'"))
}

fn generate_problem_from_args(matches: &ArgMatches) -> Result<Problem, String> {
    let sources = parse_int_value::<usize>(matches, SOURCES_ARG_NAME, "sources")?.ok_or("sources are not set")?;
    let destinations =
        parse_int_value::<usize>(matches, DESTINATIONS_ARG_NAME, "destinations")?.ok_or("destinations are not set")?;
    let max_cost = parse_int_value::<i32>(matches, MAX_COST_ARG_NAME, "max cost")?.unwrap_or(DEFAULT_MAX_COST);
    let max_capacity =
        parse_int_value::<i32>(matches, MAX_CAPACITY_ARG_NAME, "max capacity")?.unwrap_or(DEFAULT_MAX_CAPACITY);
    let seed = parse_int_value::<u64>(matches, SEED_ARG_NAME, "seed")?;

    let balanced = matches.get_flag(BALANCED_ARG_NAME);
    let prototype = ProblemPrototype { sources, destinations, max_cost, max_capacity, balanced };

    generate_problem(&prototype, seed).map_err(|err| err.to_string())
}
