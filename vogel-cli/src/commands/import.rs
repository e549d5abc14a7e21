#[cfg(test)]
#[path = "../../tests/unit/commands/import_test.rs"]
mod import_test;

use super::*;
use clap::{Arg, Command};
use std::io::BufReader;
use vogel_cli::extensions::import::import_problem;
use vogel_pragmatic::format::problem::serialize_problem;

const FORMAT_ARG_NAME: &str = "FORMAT";
const INPUT_ARG_NAME: &str = "input-file";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_import_app() -> Command {
    Command::new("import")
        .about("Provides the way to import problem from various formats")
        .arg(Arg::new(FORMAT_ARG_NAME).help("Specifies input type").required(true).value_parser(["csv"]).index(1))
        .arg(
            Arg::new(INPUT_ARG_NAME)
                .help("Sets input file which contains a cost table")
                .short('i')
                .long(INPUT_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_import(matches: &ArgMatches) -> Result<(), String> {
    let input_format = matches.get_one::<String>(FORMAT_ARG_NAME).ok_or("no input format specified")?;
    let input_files = matches
        .get_one::<String>(INPUT_ARG_NAME)
        .map(|path| open_file(path, "input").map(|file| vec![BufReader::new(file)]))
        .transpose()?;

    let problem = import_problem(input_format, input_files).map_err(|err| format!("cannot import problem: '{err}'"))?;

    let mut out_buffer = create_out_buffer(matches, OUT_RESULT_ARG_NAME)?;
    serialize_problem(&problem, &mut out_buffer).map_err(|err| format!("cannot serialize result problem: '{err}'"))
}
