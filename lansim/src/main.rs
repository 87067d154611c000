use lansim::cli::initialize_from_arguments;

/// Without arguments, main runs the default simulation
#[tokio::main]
async fn main() {
    println!("lansim v{}", env!("CARGO_PKG_VERSION"));
    initialize_from_arguments().await;
    println!("Done");
}
