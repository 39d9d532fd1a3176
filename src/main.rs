mod error;
mod pipeline;
mod sort;

use std::path::Path;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use error::PipelineError;
use pipeline::{read_input, write_output};
use sort::sort_dataset;

const INPUT_FILE: &str = "input.txt";
const OUTPUT_FILE: &str = "output.txt";

fn main() -> ExitCode {
    // RUST_LOG=row_sort=debug for per-token diagnostics
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .compact()
        .init();

    match run(Path::new(INPUT_FILE), Path::new(OUTPUT_FILE)) {
        Ok(()) => {
            println!("Sorting completed successfully.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("An error occurred: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Straight-line pipeline: read everything, sort everything, write
/// everything. The output file is only touched once reading has succeeded.
fn run(input: &Path, output: &Path) -> Result<(), PipelineError> {
    let dataset = read_input(input)?;
    let sorted = sort_dataset(dataset);
    write_output(output, &sorted)
}
