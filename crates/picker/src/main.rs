//! Bracket picker CLI
//!
//! Optimize a bracket from a forecast table, score saved picks against
//! recorded outcomes, or generate a synthetic forecast to experiment with.

use bracket_core::{per_round_score, point_schedule};
use bracket_opt::{BracketOptimizer, SolveStatus};
use picker::{format_picks, format_scores, generate_forecast, load_picks, load_table, save_picks, RunConfig};
use std::env;
use std::path::Path;
use std::process;

fn print_usage() {
    println!("Bracket Picker");
    println!();
    println!("Usage:");
    println!("  picker optimize <table.(json|csv)> [--config cfg.toml] [--budgets a,b,..]");
    println!("                  [--time-limit SECS] [--pure-prob] [--out picks.json]");
    println!("  picker score <picks.json> <table.(json|csv)>");
    println!("  picker synth <out.json> [--slots N] [--seed S]");
    println!();
    println!("Examples:");
    println!("  picker optimize forecast.csv --budgets 1.0,1.0,0.9,0.9,0.8,0.8");
    println!("  picker score picks.json forecast.csv");
    println!("  picker synth forecast.json --slots 64 --seed 42");
}

fn parse_budgets(spec: &str) -> Result<Vec<f64>, String> {
    spec.split(',')
        .map(|s| {
            s.trim()
                .parse::<f64>()
                .map_err(|e| format!("Bad budget '{}': {}", s, e))
        })
        .collect()
}

fn run_optimize(args: &[String]) -> Result<(), String> {
    if args.is_empty() {
        return Err("optimize requires a forecast table path".to_string());
    }
    let table = load_table(Path::new(&args[0]))?;

    let mut config = RunConfig::default();
    let mut out_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 >= args.len() {
                    return Err("--config requires a path".to_string());
                }
                config = RunConfig::load(Path::new(&args[i + 1]))?;
                i += 1;
            }
            "--budgets" | "-b" => {
                if i + 1 >= args.len() {
                    return Err("--budgets requires a comma-separated list".to_string());
                }
                config.budgets = parse_budgets(&args[i + 1])?;
                i += 1;
            }
            "--time-limit" | "-t" => {
                if i + 1 >= args.len() {
                    return Err("--time-limit requires seconds".to_string());
                }
                config.time_limit_secs = args[i + 1]
                    .parse()
                    .map_err(|e| format!("Bad time limit: {}", e))?;
                i += 1;
            }
            "--pure-prob" => config.point_weighted = false,
            "--out" | "-o" => {
                if i + 1 >= args.len() {
                    return Err("--out requires a path".to_string());
                }
                out_path = Some(args[i + 1].clone());
                i += 1;
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    let optimizer = BracketOptimizer::new(config.optimizer_config(table.rounds()));
    let budgets = config.budgets_for(table.rounds());
    let solution = optimizer
        .optimize(&table, &budgets)
        .map_err(|e| format!("Optimization failed: {}", e))?;

    print!("{}", format_picks(&solution.picks));
    println!();
    println!("Objective: {:.3}", solution.objective);
    match solution.status {
        SolveStatus::Optimal => println!("Status: optimal ({:.1?})", solution.solve_time),
        SolveStatus::FeasibleTimeout => println!(
            "Status: best found at the {:.0}s time limit (may be sub-optimal)",
            config.time_limit_secs
        ),
    }

    if let Some(truth) = &table.truth {
        let scores = per_round_score(&solution.picks, truth, &point_schedule(table.rounds()))
            .map_err(|e| format!("Scoring failed: {}", e))?;
        println!();
        print!("{}", format_scores(&scores));
    }

    if let Some(path) = out_path {
        save_picks(&solution.picks, Path::new(&path))?;
        println!("Picks saved to {}", path);
    }
    Ok(())
}

fn run_score(args: &[String]) -> Result<(), String> {
    if args.len() < 2 {
        return Err("score requires a picks file and a forecast table".to_string());
    }
    let picks = load_picks(Path::new(&args[0]))?;
    let table = load_table(Path::new(&args[1]))?;
    let truth = table
        .truth
        .as_ref()
        .ok_or_else(|| "Table has no recorded outcomes to score against".to_string())?;
    let scores = per_round_score(&picks, truth, &point_schedule(table.rounds()))
        .map_err(|e| format!("Scoring failed: {}", e))?;
    print!("{}", format_scores(&scores));
    Ok(())
}

fn run_synth(args: &[String]) -> Result<(), String> {
    if args.is_empty() {
        return Err("synth requires an output path".to_string());
    }
    let mut slots = 64;
    let mut seed = 0;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--slots" => {
                if i + 1 >= args.len() {
                    return Err("--slots requires a number".to_string());
                }
                slots = args[i + 1].parse().map_err(|e| format!("Bad slots: {}", e))?;
                i += 1;
            }
            "--seed" => {
                if i + 1 >= args.len() {
                    return Err("--seed requires a number".to_string());
                }
                seed = args[i + 1].parse().map_err(|e| format!("Bad seed: {}", e))?;
                i += 1;
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }
    let table = generate_forecast(slots, seed)?;
    table
        .save(Path::new(&args[0]))
        .map_err(|e| format!("Failed to save forecast: {}", e))?;
    println!("Synthetic {}-slot forecast saved to {}", slots, args[0]);
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let result = match args[1].as_str() {
        "optimize" => run_optimize(&args[2..]),
        "score" => run_score(&args[2..]),
        "synth" => run_synth(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            Err(format!("Unknown command: {}", other))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
