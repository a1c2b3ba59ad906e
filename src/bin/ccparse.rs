//! Command-line interface for ccparse.
//!
//! # Usage
//!
//! ```bash
//! # Parse and validate a card string
//! ccparse "4111111111111111|12|2030|123"
//!
//! # Masked display
//! ccparse --masked "4111111111111111|12|2030|123"
//!
//! # JSON output
//! ccparse --json "4111111111111111|12/30|123"
//!
//! # Validation only (exit code carries the result)
//! ccparse --quiet "4111111111111111|12|2030|123"
//! ```

use std::process::ExitCode;

use ccparse::CardRecord;
use chrono::Local;
use clap::Parser;

#[derive(Parser)]
#[command(name = "ccparse")]
#[command(
    version,
    about = "Parse, validate, and format credit card strings",
    after_help = "Example: ccparse '4111111111111111|12|2030|123'"
)]
struct Cli {
    /// Card string to parse (format: NUMBER|MM|YYYY|CVV or NUMBER|MM/YY|CVV)
    card_string: String,

    /// Show the masked card number instead of the full number
    #[arg(short, long)]
    masked: bool,

    /// Output in JSON format
    #[arg(short, long)]
    json: bool,

    /// Only validate: exit code 0 if valid, 1 if invalid
    #[arg(short, long)]
    quiet: bool,

    /// Look up issuer metadata for the card's BIN (network call)
    #[cfg(feature = "lookup")]
    #[arg(long)]
    lookup: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let today = Local::now().date_naive();

    let card = match CardRecord::parse(&cli.card_string) {
        Ok(card) => card,
        Err(err) => {
            if cli.quiet {
                return ExitCode::FAILURE;
            }
            if cli.json {
                println!("{}", serde_json::json!({ "error": err.to_string() }));
            } else {
                eprintln!("Error: {}", err);
            }
            return ExitCode::FAILURE;
        }
    };

    if cli.quiet {
        return exit_for(card.is_valid(today));
    }

    if cli.json {
        return print_json(&cli, &card, today);
    }

    let valid = card.is_valid(today);

    if cli.masked {
        println!("Card Number: {}", card.masked_number());
    } else {
        println!("Card Number: {}", card.formatted_number());
    }
    println!("Expiry Date: {}", card.expiry());
    println!("CVV: {}", card.cvv());
    println!("Card Type: {}", card.issuer());
    println!("Valid: {}", valid);

    #[cfg(feature = "lookup")]
    if cli.lookup {
        print_lookup(&card);
    }

    exit_for(valid)
}

fn print_json(cli: &Cli, card: &CardRecord, today: chrono::NaiveDate) -> ExitCode {
    let mut summary = card.summary(today);
    if cli.masked {
        summary.number = summary.masked_number.clone();
    }

    let mut value = match serde_json::to_value(&summary) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    #[cfg(feature = "lookup")]
    if cli.lookup {
        let client = ccparse::bin::BinlistClient::new();
        value["bin_details"] = match card.details(&client) {
            Some(details) => serde_json::to_value(&details).unwrap_or(serde_json::Value::Null),
            None => serde_json::Value::Null,
        };
    }

    match serde_json::to_string_pretty(&value) {
        Ok(body) => {
            println!("{}", body);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "lookup")]
fn print_lookup(card: &CardRecord) {
    let client = ccparse::bin::BinlistClient::new();
    match card.details(&client) {
        Some(details) => {
            let field = |value: &Option<String>| -> String {
                value.clone().unwrap_or_else(|| "Unknown".to_string())
            };
            println!("Bank: {}", field(&details.bank));
            println!("Brand: {}", field(&details.brand));
            println!("Scheme: {}", field(&details.scheme));
            println!(
                "Country: {} {}",
                field(&details.country),
                details.country_emoji.clone().unwrap_or_default()
            );
            println!("Currency: {}", field(&details.currency));
            println!("Funding: {}", field(&details.funding));
        }
        None => println!("BIN Lookup: unavailable"),
    }
}

fn exit_for(valid: bool) -> ExitCode {
    if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
