use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use linalg_cli::commands::construct::{run_diagonal, run_identity, run_zero};
use linalg_cli::commands::demo::run_demo;
use linalg_cli::commands::dependency::run_dependency;
use linalg_cli::commands::matrix::{run_matrix, MatrixOp};
use linalg_cli::commands::slice::run_slice;
use linalg_cli::commands::vector::{run_vector, VectorOp};
use linalg_cli::input::{load_config, load_matrix, load_vectors, load_volume, parse_vector};
use linalg_core::config::ToolConfig;
use linalg_core::math::validate;
use linalg_core::volume::Axis;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("LINALG_LOG", "error,linalg=info"))
        .init();

    let matches = Command::new("linalg")
        .version(clap::crate_version!())
        .author("Justin Sing <justincsing@gmail.com>")
        .about("Vector and matrix arithmetic, linear dependence checks and 3D array slicing")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .help("Path to a JSON configuration file (tolerance, precision, determinant method)")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .subcommand(Command::new("demo").about("Print the worked dot-product example"))
        .subcommand(
            Command::new("vector")
                .about("Vector operations on comma-separated components, e.g. 3,2,6")
                .arg(
                    Arg::new("op")
                        .help("Operation to run")
                        .required(true)
                        .value_parser(VectorOp::NAMES),
                )
                .arg(
                    Arg::new("a")
                        .help("First vector")
                        .required(true)
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("b")
                        .help("Second vector, for add, subtract, dot and cross")
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("factor")
                        .short('k')
                        .long("factor")
                        .help("Scalar factor for scale")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64)),
                ),
        )
        .subcommand(
            Command::new("matrix")
                .about("Matrix operations on headerless CSV/TSV files, one row per line")
                .arg(
                    Arg::new("op")
                        .help("Operation to run")
                        .required(true)
                        .value_parser(MatrixOp::NAMES),
                )
                .arg(
                    Arg::new("a")
                        .help("First matrix file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("b")
                        .help("Second matrix file, for add, subtract and multiply")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("identity")
                .about("Print the n x n identity matrix")
                .arg(
                    Arg::new("n")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(i64)),
                ),
        )
        .subcommand(
            Command::new("zero")
                .about("Print a rows x cols zero matrix")
                .arg(
                    Arg::new("rows")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(i64)),
                )
                .arg(
                    Arg::new("cols")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(i64)),
                ),
        )
        .subcommand(
            Command::new("diagonal")
                .about("Print a diagonal matrix from comma-separated values")
                .arg(
                    Arg::new("values")
                        .required(true)
                        .allow_hyphen_values(true),
                ),
        )
        .subcommand(
            Command::new("dependency")
                .about("Check whether the vectors in a CSV/TSV file are linearly independent")
                .arg(
                    Arg::new("vectors")
                        .help("File with one vector per row")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("slice")
                .about("Slice a 3D integer array along an axis")
                .arg(
                    Arg::new("volume")
                        .help("Text file with layers separated by '---'")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(dimension_arg("depth", 'z', "Number of layers (Z)"))
                .arg(dimension_arg("rows", 'y', "Rows per layer (Y)"))
                .arg(dimension_arg("cols", 'x', "Values per row (X)"))
                .arg(
                    Arg::new("axis")
                        .short('a')
                        .long("axis")
                        .help("Axis to slice along")
                        .default_value("Z")
                        .value_parser(["Z", "Y", "X", "z", "y", "x"]),
                )
                .arg(
                    Arg::new("index")
                        .short('i')
                        .long("index")
                        .help("Slice index. Prints every slice along the axis when omitted.")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(i64)),
                ),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Written by {author-with-newline}Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    match dispatch(&matches) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            log::error!("linalg failed: {:#}", e);
            std::process::exit(1)
        }
    }
}

fn dimension_arg(name: &'static str, short: char, help: &'static str) -> Arg {
    Arg::new(name)
        .short(short)
        .long(name)
        .help(help)
        .required(true)
        .allow_negative_numbers(true)
        .value_parser(clap::value_parser!(i64))
}

fn resolve_config(matches: &ArgMatches) -> Result<ToolConfig> {
    match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            log::info!("[linalg] Using config: {:?}", path);
            load_config(path)
        }
        None => Ok(ToolConfig::default()),
    }
}

fn dispatch(matches: &ArgMatches) -> Result<String> {
    let (name, sub_m) = matches
        .subcommand()
        .context("a subcommand is required")?;
    let config = resolve_config(sub_m)?;
    log::trace!("[linalg] {} with {:?}", name, config);

    match name {
        "demo" => run_demo(),
        "vector" => handle_vector(sub_m, &config),
        "matrix" => handle_matrix(sub_m, &config),
        "identity" => {
            let n: i64 = *sub_m.get_one("n").context("missing size")?;
            run_identity(n, &config)
        }
        "zero" => {
            let rows: i64 = *sub_m.get_one("rows").context("missing rows")?;
            let cols: i64 = *sub_m.get_one("cols").context("missing cols")?;
            run_zero(rows, cols, &config)
        }
        "diagonal" => {
            let values: &String = sub_m.get_one("values").context("missing values")?;
            run_diagonal(&parse_vector(values)?, &config)
        }
        "dependency" => {
            let path: &PathBuf = sub_m.get_one("vectors").context("missing vectors file")?;
            log::info!("[linalg] Checking linear dependence of: {:?}", path);
            let vectors = load_vectors(path)?;
            run_dependency(&vectors, &config)
        }
        "slice" => handle_slice(sub_m),
        other => anyhow::bail!("Unknown subcommand: {}", other),
    }
}

fn handle_vector(matches: &ArgMatches, config: &ToolConfig) -> Result<String> {
    let op: VectorOp = matches
        .get_one::<String>("op")
        .context("missing operation")?
        .parse()
        .map_err(anyhow::Error::msg)?;
    let a = parse_vector(matches.get_one::<String>("a").context("missing vector")?)?;
    let b = matches
        .get_one::<String>("b")
        .map(|s| parse_vector(s))
        .transpose()?;
    if b.is_some() && !op.is_binary() {
        log::warn!("{:?} takes a single vector; ignoring the second one", op);
    }
    let factor = matches.get_one::<f64>("factor").copied();
    run_vector(op, &a, b.as_ref(), factor, config)
}

fn handle_matrix(matches: &ArgMatches, config: &ToolConfig) -> Result<String> {
    let op: MatrixOp = matches
        .get_one::<String>("op")
        .context("missing operation")?
        .parse()
        .map_err(anyhow::Error::msg)?;
    let a_path: &PathBuf = matches.get_one("a").context("missing matrix file")?;
    log::info!("[linalg] Loading matrix: {:?}", a_path);
    let a = load_matrix(a_path)?;
    let b = matches
        .get_one::<PathBuf>("b")
        .map(load_matrix)
        .transpose()?;
    if b.is_some() && !op.is_binary() {
        log::warn!("{:?} takes a single matrix; ignoring the second one", op);
    }
    run_matrix(op, &a, b.as_ref(), config)
}

fn handle_slice(matches: &ArgMatches) -> Result<String> {
    let path: &PathBuf = matches.get_one("volume").context("missing volume file")?;
    let depth = validate::dimension(*matches.get_one::<i64>("depth").context("missing depth")?, "depth")?;
    let rows = validate::dimension(*matches.get_one::<i64>("rows").context("missing rows")?, "rows")?;
    let cols = validate::dimension(*matches.get_one::<i64>("cols").context("missing cols")?, "cols")?;
    let axis: Axis = matches
        .get_one::<String>("axis")
        .context("missing axis")?
        .parse()
        .map_err(anyhow::Error::msg)?;
    let index = matches.get_one::<i64>("index").copied();

    log::info!("[linalg] Slicing {:?} along {}", path, axis);
    let volume = load_volume(path, depth, rows, cols)?;
    run_slice(&volume, axis, index)
}
