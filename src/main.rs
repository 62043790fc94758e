use s3_json_store::utils::log_utils;
use s3_json_store::{args, run_app};

#[tokio::main]
async fn main() {
    // Parse command-line arguments
    let args = args::args_checks();
    if let Err(e) = args.validate() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    log_utils::init(args.verbose);

    // Run the application logic
    if let Err(e) = run_app(&args).await {
        eprintln!("Application error: {e}");
        std::process::exit(1);
    }
}
