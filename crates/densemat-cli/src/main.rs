use anyhow::Result;
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

use densemat::config::SolverConfig;
use densemat_cli::commands::{run, Operation};
use densemat_cli::input::load_solver_config;
use densemat_cli::util::validate_json_file;

fn operation_command(op: Operation) -> Command {
    Command::new(op.name())
        .about(op.about())
        .arg(
            Arg::new("input")
                .help("Path to the JSON input file")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a solver configuration JSON file. Defaults are used when omitted.")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("precision")
                .short('p')
                .long("precision")
                .help("Number of decimals in printed output")
                .value_parser(clap::value_parser!(usize))
                .default_value("6"),
        )
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("DENSEMAT_LOG", "error,densemat=info"))
        .init();

    let matches = Command::new("densemat")
        .version(clap::crate_version!())
        .about("Dense matrix and vector algebra from the command line")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommands(Operation::ALL.iter().map(|op| operation_command(*op)))
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    match matches.subcommand() {
        Some((name, sub_m)) => handle_operation(name, sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_operation(name: &str, matches: &ArgMatches) -> Result<()> {
    let op = Operation::from_str(name).map_err(anyhow::Error::msg)?;
    let input_path: &PathBuf = matches
        .get_one("input")
        .ok_or_else(|| anyhow::anyhow!("Missing input file"))?;
    validate_json_file(&input_path.to_string_lossy())?;
    let precision = matches.get_one::<usize>("precision").copied().unwrap_or(6);

    let config = match matches.get_one::<PathBuf>("config") {
        Some(config_path) => {
            log::info!("[densemat] Using config: {:?}", config_path);
            load_solver_config(config_path)?
        }
        None => {
            log::debug!("[densemat] No config provided; using defaults.");
            SolverConfig::default()
        }
    };

    let output = run(op, input_path, &config, precision)?;
    println!("{}", output);
    Ok(())
}
