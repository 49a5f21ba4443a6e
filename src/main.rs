use std::fs;

use clap::Parser;
use matrixlang::get_result;
use tracing_subscriber::EnvFilter;

/// matrixlang runs programs that declare, multiply and print integer
/// matrices.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells matrixlang to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Logs every statement as it runs. `RUST_LOG` takes precedence when set.
    #[arg(short, long)]
    verbose: bool,

    contents: String,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "matrixlang=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .with_target(false)
                             .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    if let Err(e) = get_result(&script) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
