#![forbid(unsafe_code)]

use clap::Parser;
use std::path::PathBuf;

use respak::pak;
use respak::pak::{DEFAULT_OUTPUT, DEFAULT_ROOTS};

#[derive(Debug, Parser)]
#[command(name = "respak", version, about = "Packs resource directories into a single .pak archive")]
struct Cli {
    /// Directories to pack, walked in order.
    #[arg(value_name = "ROOT", default_values_os_t = DEFAULT_ROOTS.map(PathBuf::from))]
    roots: Vec<PathBuf>,

    /// Output archive path.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = pak::pack(&cli.roots, &cli.output) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
