use clap::Parser;
use notify_token::config::{GenerateArgs, GeneratorConfig};
use notify_token::{generator, telemetry};

fn main() {
    dotenv::dotenv().ok();
    telemetry::init_tracing();

    let args = GenerateArgs::parse();
    let token_only = args.token_only;

    let config = match GeneratorConfig::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    match generator::generate_and_report(&config) {
        Ok(report) if token_only => println!("{}", report.token()),
        Ok(report) => print!("{}", report),
        Err(e) => {
            eprintln!("Failed to generate token: {}", e);
            std::process::exit(1);
        }
    }
}
