use bklml_ff::args::Args;
use bklml_ff::config::Config;
use bklml_ff::{filesystem, presentation};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(args);

    // A missing root is a reported condition, not a failure: the scan
    // degrades to an empty result set and the process still exits 0.
    let records = match filesystem::scan(&config.root, config.recursive) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Error: {e}");
            Vec::new()
        }
    };

    presentation::print_results(&records, &config);
    ExitCode::SUCCESS
}
