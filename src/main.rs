//! `dice`: roll every expression given on the command line and print a table.

use std::env;
use std::process;

use clap::Parser;
use log::error;
use tracing_subscriber::filter::EnvFilter;

use dice::{parse_args, Error, OsSource, Report, Roller};


#[derive(Parser)]
#[command(
    name = "dice",
    about = "Roll dice written in standard notation, e.g. `dice 2d6+1d10 8D20 d% 3dF 8-4`",
    version
)]
struct Cli {
    /// Dice expressions: [count]d<faces|%|F> and integers joined by + or -
    #[arg(value_name = "EXPRESSION", allow_hyphen_values = true)]
    expressions: Vec<String>,
}


fn run(cli: &Cli) -> Result<(), Error> {
    let parsed = parse_args(&cli.expressions);

    for rejection in &parsed.rejections {
        println!("{rejection}");
    }

    let report = Report::roll(&parsed, &mut Roller::new(OsSource))?;

    if !report.is_empty() {
        println!("{report}");
    }

    Ok(())
}

fn main() {
    let filter = if env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new("dice=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        process::exit(1);
    }
}
