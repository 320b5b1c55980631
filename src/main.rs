//! Currency Input CLI
//!
//! Replays a CSV edit script against a currency field and outputs the
//! field state after every operation.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- script.csv > states.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use currency_input::{FormatConfig, FormatterError, ReplayEngine, Result};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(FormatterError::MissingArgument);
    }

    let input_path = &args[1];
    let file = File::open(input_path)?;
    let reader = BufReader::new(file);

    let config = FormatConfig::default().with_currency_symbol("$");
    let mut engine = ReplayEngine::new(config);
    engine.process_csv(reader)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    engine.write_output(handle)?;

    Ok(())
}
