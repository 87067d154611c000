//! Parses the command line arguments.
//!
//! Selects which prebuilt simulation to run and whether to write logs.
//! Basic usage for running the relay simulation with logging on:
//!
//! ```cargo run -- --simulation relay --log```

use clap::Parser;
use std::{
    fs::{create_dir_all, OpenOptions},
    sync::Arc,
};
use tracing_subscriber::FmtSubscriber;

use crate::simulations;

/// Stores the different command line arguments.
#[derive(Parser)]
struct Args {
    /// Logging flag. Used to turn logging on or off.
    #[arg(short, long)]
    log: bool,
    /// Name of the simulation to run.
    #[arg(short, long, default_value = "basic")]
    simulation: String,
}

/// Parses command line arguments and runs the selected simulation.
pub async fn initialize_from_arguments() {
    let cli = Args::parse();
    if cli.log {
        initialize_logging();
    }
    match cli.simulation.as_str() {
        "basic" => simulations::basic(),
        "relay" => simulations::relay(5),
        "unreachable" => simulations::unreachable().await,
        "churn" => simulations::churn(),
        "traffic" => simulations::traffic(20, 500, 0xe1),
        other => eprintln!("No simulation named '{other}'"),
    }
}

/// Initializes logging. Only should be called once when the sim starts.
/// Writes JSON events to a timestamped file under ./logs.
fn initialize_logging() {
    let main_path = "./logs";
    create_dir_all(main_path).unwrap();
    let file_path = format!(
        "{}/debug-{}.log",
        main_path,
        chrono::offset::Local::now().format("%y-%m-%d_%H-%M-%S")
    );
    let file = OpenOptions::new()
        .write(true)
        .append(true)
        .create(true)
        .open(file_path);
    let file = match file {
        Ok(file) => file,
        Err(error) => panic!("Error: {:?}", error),
    };
    let subscriber = FmtSubscriber::builder()
        .with_writer(Arc::new(file))
        .json()
        .finish();
    // set the global default so all events go to the same subscriber and
    // subsequently the same file
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}
