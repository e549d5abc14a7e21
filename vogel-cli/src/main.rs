//! A command line interface to *Transportation Problem* solver based on Vogel's approximation method.

#[cfg(test)]
#[path = "../tests/unit/main_test.rs"]
mod main_test;

mod commands;

mod cli {
    use super::commands::check::{get_check_app, run_check};
    use super::commands::generate::{get_generate_app, run_generate};
    use super::commands::import::{get_import_app, run_import};
    use super::commands::solve::{get_solve_app, run_solve};
    use clap::{ArgMatches, Command};
    use std::process;

    pub fn get_app() -> Command {
        Command::new("Transportation Problem Solver")
            .version(env!("CARGO_PKG_VERSION"))
            .about("A command line interface to transportation problem solver based on Vogel's approximation method")
            .subcommand(get_solve_app())
            .subcommand(get_check_app())
            .subcommand(get_import_app())
            .subcommand(get_generate_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) {
        let result = match arg_matches.subcommand() {
            Some(("solve", solve_matches)) => run_solve(solve_matches),
            Some(("check", check_matches)) => run_check(check_matches),
            Some(("import", import_matches)) => run_import(import_matches),
            Some(("generate", generate_matches)) => run_generate(generate_matches),
            _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
        };

        if let Err(err) = result {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn main() {
    cli::run_subcommand(cli::get_app().get_matches());
}
