use std::path::PathBuf;

use anyhow::{Context, Result};
use app_utils::{env_var, env_var_or, init_tracing, load_env};
use clap::{arg, command, value_parser};
use gradebook::report::{Format, GradeReport};
use gradebook::roster::Roster;
use tracing::{debug, info};

fn main() -> Result<()> {
    load_env()?;
    init_tracing()?;

    let matches = command!()
        .arg(
            arg!(-r --roster <PATH> "Roster to grade [env: GRADEBOOK_ROSTER]")
                .required(false)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            arg!(-f --format <FORMAT> "Output format, `text` or `csv` [env: GRADEBOOK_FORMAT]")
                .required(false),
        )
        .arg(
            arg!(-p --precision <DIGITS> "Decimal places to print")
                .required(false)
                .value_parser(value_parser!(usize))
                .default_value("2"),
        )
        .get_matches();

    let roster_path = match matches.get_one::<PathBuf>("roster") {
        Some(path) => path.clone(),
        None => env_var("GRADEBOOK_ROSTER")?
            .map(PathBuf::from)
            .context("no roster given, pass --roster or set GRADEBOOK_ROSTER")?,
    };
    let format: Format = match matches.get_one::<String>("format") {
        Some(format) => format.clone(),
        None => env_var_or("GRADEBOOK_FORMAT", "text")?,
    }
    .parse()?;
    let precision = matches.get_one::<usize>("precision").copied().unwrap_or(2);
    debug!(roster = %roster_path.display(), ?format, precision, "parsed arguments");

    let gradebook = Roster::from_path(&roster_path)?.into_gradebook()?;
    let report = GradeReport::new(&gradebook)?;
    info!(students = report.rows().len(), "graded roster");

    print!("{}", report.render(format, precision)?);

    Ok(())
}
