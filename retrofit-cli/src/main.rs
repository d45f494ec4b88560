//! Narrate records and square numbers on the command line

use clap::Parser as _;
use clap_verbosity_flag::{InfoLevel, Verbosity};

use retrofit_cli::CliArgs;

fn main() {
    match CliArgs::parse() {
        CliArgs::Narrate(mut args) => {
            init_tracing(&args.verbose);
            let result = args.run();
            exit_on_error(result, &args.verbose);
        }
        CliArgs::Square(args) => {
            init_tracing(&args.verbose);
            exit_on_error(args.run(), &args.verbose);
        }
        CliArgs::External(_) => {
            // TODO: Implement support for external commands.
            // Running `retrofit COMMAND` would look for `retrofit-COMMAND` in the path
            // and run it.
            eprintln!("External commands are not supported yet.");
            std::process::exit(1);
        }
        _ => {
            eprintln!("Unknown command");
            std::process::exit(1);
        }
    };
}

/// Log to stderr at the level requested on the command line.
fn init_tracing(verbose: &Verbosity<InfoLevel>) {
    tracing_subscriber::fmt()
        .with_max_level(verbose.tracing_level_filter())
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn exit_on_error(result: anyhow::Result<()>, verbose: &Verbosity<InfoLevel>) {
    if let Err(e) = result {
        if !verbose.is_silent() {
            eprintln!("{e:#}");
        }
        std::process::exit(1);
    }
}
