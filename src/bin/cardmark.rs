//! Command-line interface for cardmark
//! This binary classifies answer files and extracts their carousel cards and sections.
//!
//! Usage:
//!   cardmark classify `<path>` [--format `<format>`]   - Print the content-type tag for an answer
//!   cardmark cards `<path>` [--format `<format>`]      - Extract the carousel cards from an answer
//!   cardmark sections `<path>` [--format `<format>`]   - Split an answer into its labelled sections
//!   cardmark triggers `<question>`                     - Check whether a question suggests a carousel
//!   cardmark list-samples                              - List the verified sample answers
//!
//! A path of `-` reads the answer from stdin. A TOML configuration file can
//! be layered over the embedded defaults with --config.

use cardmark::cardmark::config::{CardmarkConfig, Loader};
use cardmark::cardmark::processor::{self, answer_sources::AnswerSources, ProcessingSpec};
use cardmark::cardmark::triggers::TriggerSet;
use clap::{Arg, ArgMatches, Command};
use std::io::Read;

fn main() {
    let matches = Command::new("cardmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for classifying and parsing cardmark answer files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML configuration file layered over the embedded defaults")
                .global(true),
        )
        .subcommand(
            Command::new("classify")
                .about("Print the content-type tag for an answer")
                .arg(path_arg())
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("cards")
                .about("Extract the carousel cards from an answer")
                .arg(path_arg())
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("sections")
                .about("Split an answer into its labelled sections")
                .arg(path_arg())
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("triggers")
                .about("Check whether a question suggests carousel output")
                .arg(
                    Arg::new("question")
                        .help("The user question to check")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("list-samples").about("List the verified sample answers"))
        .get_matches();

    match matches.subcommand() {
        Some(("classify", sub_matches)) => {
            handle_process_command("classify", sub_matches);
        }
        Some(("cards", sub_matches)) => {
            handle_process_command("cards", sub_matches);
        }
        Some(("sections", sub_matches)) => {
            handle_process_command("sections", sub_matches);
        }
        Some(("triggers", sub_matches)) => {
            handle_triggers_command(sub_matches);
        }
        Some(("list-samples", _)) => {
            handle_list_samples_command();
        }
        _ => unreachable!(),
    }
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the answer file, or - for stdin")
        .required(true)
        .index(1)
}

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .help("Output format: simple, json, or yaml (default from configuration)")
        .default_value("auto")
}

/// Handle the classify/cards/sections commands
fn handle_process_command(stage: &str, sub_matches: &ArgMatches) {
    let path = sub_matches.get_one::<String>("path").unwrap();
    let format = sub_matches.get_one::<String>("format").unwrap();
    let config = load_config(sub_matches);

    let format = if format == "auto" {
        config.output.format.clone()
    } else {
        format.clone()
    };

    let spec = ProcessingSpec::from_string(&format!("{}-{}", stage, format)).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("\nAvailable formats:");
        for available in processor::available_formats() {
            eprintln!("  {}", available);
        }
        std::process::exit(1);
    });

    let content = read_input(path);
    let output = processor::process_str(&content, &spec).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
}

/// Handle the triggers command
fn handle_triggers_command(sub_matches: &ArgMatches) {
    let question = sub_matches.get_one::<String>("question").unwrap();
    let config = load_config(sub_matches);

    let trigger_set = TriggerSet::with_extra(&config.triggers.extra_patterns).unwrap_or_else(|e| {
        eprintln!("Error in triggers.extra_patterns: {}", e);
        std::process::exit(1);
    });

    if trigger_set.matches(question) {
        println!("carousel");
    } else {
        println!("standard");
    }
}

/// Handle the list-samples command
fn handle_list_samples_command() {
    println!("Available answer samples:\n");
    for name in AnswerSources::list_samples() {
        match AnswerSources::get_sample_info(name) {
            Ok(info) => println!("  {} [{}]", name, info.content_type),
            Err(_) => println!("  {}", name),
        }
    }
}

/// Build the effective configuration, layering an optional user file over
/// the embedded defaults
fn load_config(sub_matches: &ArgMatches) -> CardmarkConfig {
    let mut loader = Loader::new();
    if let Some(path) = sub_matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

/// Read the answer content from a file, or from stdin for `-`
fn read_input(path: &str) -> String {
    if path == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .unwrap_or_else(|e| {
                eprintln!("Error reading stdin: {}", e);
                std::process::exit(1);
            });
        content
    } else {
        std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading file: {}", e);
            std::process::exit(1);
        })
    }
}
