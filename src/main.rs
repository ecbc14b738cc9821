use clap::Parser;
use topn_summary::frontend::{Args, check_config, run};
use topn_summary::logging;
use tracing::{error, info};

fn fail(e: &anyhow::Error) -> ! {
    eprintln!("Sorry! {:#}", e);
    std::process::exit(1);
}

fn main() {
    let args = Args::parse();
    if let Err(e) = check_config() {
        fail(&e);
    }
    if let Err(e) = logging::init() {
        eprintln!("logging disabled: {}", e);
    }

    info!(input = %args.input.display(), group_by = %args.group_by, "Starting summary");
    if let Err(e) = run(&args) {
        error!(error = %format!("{:#}", e), "Summary failed");
        fail(&e);
    }
}
