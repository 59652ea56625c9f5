//! wager-engine CLI
//!
//! Settle bet slips and convert odds from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Settle a slip from a JSON file
//! wager-engine settle --input slip.json
//!
//! # Output as JSON
//! wager-engine settle --input slip.json --format json
//!
//! # Convert a price between notations
//! wager-engine convert 10/1
//! wager-engine convert -- -400 --format json
//!
//! # List the bet-type catalog
//! wager-engine types
//! ```

use rust_decimal::Decimal;
use std::fs;
use std::process;
use wager_engine::core::bet_type::BetType;
use wager_engine::core::runner::Runner;
use wager_engine::core::slip::BetSlip;
use wager_engine::engine::settlement::SettlementEngine;
use wager_engine::odds::converter::convert;
use wager_engine::odds::price::Price;

fn print_usage() {
    eprintln!(
        r#"wager-engine — bet settlement and odds conversion

USAGE:
    wager-engine <COMMAND> [OPTIONS]

COMMANDS:
    settle      Settle a bet slip from a JSON file
    convert     Convert a price between fractional, decimal, and american
    types       List the bet-type catalog
    help        Show this message

OPTIONS (settle):
    --input <FILE>      Path to JSON slip file
    --format <FORMAT>   Output format: text (default) or json

OPTIONS (convert):
    --format <FORMAT>   Output format: text (default) or json

EXAMPLES:
    wager-engine settle --input slip.json
    wager-engine settle --input slip.json --format json
    wager-engine convert 10/1
    wager-engine convert 2.5 --format json
    wager-engine convert -- -400
    wager-engine types"#
    );
}

/// JSON schema for an input slip. The stake may be a JSON number or a
/// string.
#[derive(serde::Deserialize)]
struct SlipFile {
    #[serde(rename = "type")]
    bet_type: String,
    stake: Decimal,
    #[serde(default, rename = "eachWay")]
    each_way: bool,
    #[serde(default)]
    runners: Option<Vec<RunnerInput>>,
}

#[derive(serde::Deserialize)]
struct RunnerInput {
    price: Price,
    #[serde(default = "default_terms")]
    terms: Price,
    position: i32,
}

fn default_terms() -> Price {
    Price::from("1/4")
}

/// JSON output schema for settlement results.
#[derive(serde::Serialize)]
struct SettleOutput {
    bet_type: String,
    num_bets: u32,
    total_stake: String,
    returns: String,
    profit: String,
}

/// JSON output schema for odds conversion.
#[derive(serde::Serialize)]
struct ConvertOutput {
    original_format: String,
    fractional: String,
    decimal: String,
    american: String,
}

fn load_slip(path: &str) -> (BetSlip, Option<Vec<Runner>>) {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path, e);
        process::exit(1);
    });

    let file: SlipFile = serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing JSON: {}", e);
        eprintln!("Expected format:");
        eprintln!(
            r#"{{
  "type": "yankee",
  "stake": 2,
  "eachWay": false,
  "runners": [
    {{ "price": "10/1", "terms": "1/4", "position": 1 }}
  ]
}}"#
        );
        process::exit(1);
    });

    let bet_type = BetType::from_name(&file.bet_type).unwrap_or_else(|| {
        eprintln!("Unknown bet type: {}", file.bet_type);
        process::exit(1);
    });

    let slip = BetSlip::new(bet_type, file.stake).with_each_way(file.each_way);
    let runners = file.runners.map(|rs| {
        rs.into_iter()
            .map(|r| Runner::new(r.price, r.terms, r.position))
            .collect()
    });
    (slip, runners)
}

fn cmd_settle(args: &[String]) {
    let mut input_path = None;
    let mut format = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--input requires a file path");
                    process::exit(1);
                }));
            }
            "--format" => {
                i += 1;
                format = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let path = input_path.unwrap_or_else(|| {
        eprintln!("Error: --input <FILE> is required");
        process::exit(1);
    });

    let (slip, runners) = load_slip(&path);
    let result = SettlementEngine::settle(&slip, runners.as_deref()).unwrap_or_else(|e| {
        eprintln!("Settlement failed: {}", e);
        process::exit(1);
    });

    if format == "json" {
        let output = SettleOutput {
            bet_type: slip.bet_type().to_string(),
            num_bets: result.num_bets,
            total_stake: result.total_stake.to_string(),
            returns: result.returns.to_string(),
            profit: result.profit.to_string(),
        };
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
    } else {
        println!("{} ({}): {}", slip.bet_type(), if slip.each_way() { "each-way" } else { "win only" }, result);
    }
}

fn cmd_convert(args: &[String]) {
    let mut price: Option<String> = None;
    let mut format = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--format" => {
                i += 1;
                format = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
            }
            // Allows `convert -- -400` so a moneyline is not read as a flag
            "--" => {}
            other => {
                if price.is_some() {
                    eprintln!("Unexpected argument: {}", other);
                    process::exit(1);
                }
                price = Some(other.to_string());
            }
        }
        i += 1;
    }

    let price = price.unwrap_or_else(|| {
        eprintln!("Error: a price is required, e.g. `wager-engine convert 10/1`");
        process::exit(1);
    });

    let odds = convert(price.as_str()).unwrap_or_else(|e| {
        eprintln!("Conversion failed: {}", e);
        process::exit(1);
    });

    if format == "json" {
        let output = ConvertOutput {
            original_format: odds.original_format.to_string(),
            fractional: odds.fractional.clone(),
            decimal: odds.decimal.to_string(),
            american: odds.american.clone(),
        };
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
    } else {
        println!("Detected:   {}", odds.original_format);
        println!("Fractional: {}", odds.fractional);
        println!("Decimal:    {}", odds.decimal);
        println!("American:   {}", odds.american);
    }
}

fn cmd_types() {
    println!("{:<12} {:>10} {:>6}  {}", "TYPE", "SELECTIONS", "LINES", "COVERAGE");
    for bet_type in BetType::ALL {
        let coverage = if !bet_type.is_full_cover() {
            "accumulator"
        } else if bet_type.includes_singles() {
            "full cover with singles"
        } else {
            "full cover"
        };
        println!(
            "{:<12} {:>10} {:>6}  {}",
            bet_type.name(),
            bet_type.selections(),
            bet_type.line_count(),
            coverage
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_slip_file_accepts_numeric_or_string_stake() {
        let numeric: SlipFile = serde_json::from_str(
            r#"{"type": "single", "stake": 10, "runners": [{"price": "10/1", "position": 1}]}"#,
        )
        .unwrap();
        assert_eq!(numeric.stake, dec!(10));
        assert_eq!(numeric.runners.as_ref().map(|r| r.len()), Some(1));

        let text: SlipFile =
            serde_json::from_str(r#"{"type": "double", "stake": "2.50"}"#).unwrap();
        assert_eq!(text.stake, dec!(2.5));
        assert!(text.runners.is_none());
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "settle" => cmd_settle(rest),
        "convert" => cmd_convert(rest),
        "types" => cmd_types(),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
