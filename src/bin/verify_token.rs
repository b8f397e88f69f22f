//! Check a token against the shared secret and print its claims.
//!
//! Usage: verify_token <TOKEN>   (or pipe the token on stdin)

use std::io::{self, BufRead};

use chrono::Utc;
use clap::Parser;
use notify_token::config::SecretArg;
use notify_token::{telemetry, token};

/// Verify a JWT issued for the Notification Engine API
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Token to verify, read from stdin when omitted
    token: Option<String>,

    #[command(flatten)]
    secret: SecretArg,
}

fn read_token(arg: Option<String>) -> io::Result<String> {
    match arg {
        Some(token) => Ok(token),
        None => {
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            Ok(line.trim().to_string())
        }
    }
}

fn main() {
    dotenv::dotenv().ok();
    telemetry::init_tracing();

    let args = Args::parse();

    let token = match read_token(args.token) {
        Ok(token) if !token.is_empty() => token,
        Ok(_) => {
            eprintln!("No token given");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to read token: {}", e);
            std::process::exit(1);
        }
    };

    let secret = match args.secret.resolve() {
        Ok(secret) => secret,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    match token::verify(&token, &secret) {
        Ok(claims) => {
            let json = match serde_json::to_string_pretty(&claims) {
                Ok(json) => json,
                Err(e) => {
                    eprintln!("Failed to render claims: {}", e);
                    std::process::exit(1);
                }
            };
            println!("Token is valid for user: {}", claims.sub);
            println!("{}", json);
            println!("Expires in {} days", claims.remaining(Utc::now()).num_days());
        }
        Err(e) => {
            eprintln!("Failed to verify token: {}", e);
            std::process::exit(1);
        }
    }
}
