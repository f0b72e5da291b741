//! Command-line interface for dresser_palette
//!
//! Prints the dominant colours of one image as JSON.

use dresser_palette::{ColorExtractor, ExtractorConfig, DEFAULT_MAX_COLORS};
use std::{env, path::Path, process};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    let mut max_colors = DEFAULT_MAX_COLORS;
    let mut config_path = None;
    let mut source_arg = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--max" | "-n" => {
                i += 1;
                max_colors = match args.get(i).map(|v| v.parse::<usize>()) {
                    Some(Ok(n)) => n,
                    _ => {
                        eprintln!("Error: --max expects a positive integer");
                        process::exit(1);
                    }
                };
            }
            "--config" => {
                i += 1;
                match args.get(i) {
                    Some(path) => config_path = Some(path.clone()),
                    None => {
                        eprintln!("Error: --config expects a file path");
                        process::exit(1);
                    }
                }
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if source_arg.is_none() {
                    source_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple image sources provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let source = match source_arg {
        Some(source) => source,
        None => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    let config = match config_path {
        Some(path) => match ExtractorConfig::from_json_file(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config file: {}", e);
                process::exit(1);
            }
        },
        None => ExtractorConfig::default(),
    };

    let extractor = ColorExtractor::with_config(config);
    match extractor.extract_colors(&source, max_colors).await {
        Ok(colors) => match serde_json::to_string_pretty(&colors) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing result: {}", e);
                process::exit(1);
            }
        },
        Err(error) => {
            eprintln!("Extraction failed: {}", error);
            eprintln!("{}", error.user_message());
            process::exit(1);
        }
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <image>", program_name);
    eprintln!();
    eprintln!("Print the dominant colours of an image as JSON.");
    eprintln!("<image> may be a file path, or a file://, data: or http(s):// URL.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --max, -n N      Number of colours to return (default: {})", DEFAULT_MAX_COLORS);
    eprintln!("  --config FILE    Load sampling parameters from a JSON file");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Set RUST_LOG=debug to trace the pipeline on stderr.");
}
