mod cli;

use androidlog::{LogDiagnostics, Logger};
use clap::Parser;
use log::info;

fn main() {
    env_logger::init();
    let args = cli::Args::parse();

    if args.verbose {
        info!("Tag: {}", args.tag);
        info!("Data root: {}", args.data_root.display());
        if !args.package().is_empty() {
            info!("Mirroring into package: {}", args.package());
        }
    }

    // env_logger owns the `log` backend here, so failures can go through it
    let logger = Logger::builder(args.tag.as_str())
        .package_name(args.package())
        .data_root(&args.data_root)
        .diagnostics(LogDiagnostics)
        .build();

    logger.log(args.priority, &args.message());

    if args.verbose {
        info!("Wrote 1 line at {}", args.priority);
    }
}
