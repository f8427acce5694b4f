// src/main.rs

use log::error;
use numfield::config::{init_logging, NumFieldConfig};
use numfield::{NumberField, Polynomial};
use std::process;

const USAGE: &str = "usage: numfield [--json] <c0> <c1> ... <cn>  (coefficients of the minimal polynomial, lowest degree first)";

fn main() {
    let config = NumFieldConfig::load().unwrap_or_else(|e| {
        eprintln!("Ignoring unreadable configuration: {}", e);
        NumFieldConfig::default()
    });
    init_logging(&config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let coefficients: Vec<i64> = match args
        .iter()
        .filter(|a| a.as_str() != "--json")
        .map(|a| a.parse::<i64>())
        .collect()
    {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}\n{}", e, USAGE);
            process::exit(2);
        }
    };
    if coefficients.is_empty() {
        eprintln!("{}", USAGE);
        process::exit(2);
    }

    let field = match NumberField::new(Polynomial::from_integers(&coefficients)) {
        Ok(field) => field,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };
    let result = match field.factor_ideals(&config) {
        Ok(result) => result,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    if json {
        match serde_json::to_string_pretty(&result) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                error!("{}", e);
                process::exit(1);
            }
        }
        return;
    }

    let (r1, r2) = field.signature();
    println!("P = {}", field.minimal_polynomial());
    println!("deg = {}, disc = {}, (r1, r2) = ({}, {})", field.degree(), field.discriminant(), r1, r2);
    println!("Minkowski bound = {:.4}", result.bound);
    if result.principal {
        println!("Principal!");
    }
    for decomposition in &result.decompositions {
        println!("{}", decomposition);
    }
    if result.truncated {
        println!("(stopped at the prime limit {})", result.primes_examined_up_to);
    }
}
