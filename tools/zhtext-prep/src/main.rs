use std::path::PathBuf;
use std::process::ExitCode;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use tracing_subscriber::EnvFilter;

use zhtext_rs::{Pipeline, PipelineConfig, PipelineReport, PrepError};

const BLUE: &str = "\x1B[1;34m";
const RED: &str = "\x1B[1;31m";
const RESET: &str = "\x1B[0m";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let matches = Command::new("zhtext-prep")
        .arg(
            Arg::new("dir")
                .short('d')
                .long("dir")
                .value_name("directory")
                .default_value(".")
                .value_parser(value_parser!(PathBuf))
                .help("Working directory holding input.txt, stopwords.txt and the result files."),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("file")
                .value_parser(value_parser!(PathBuf))
                .help("Read the document from <file> instead of <dir>/input.txt."),
        )
        .arg(
            Arg::new("stopwords")
                .short('s')
                .long("stopwords")
                .value_name("file")
                .value_parser(value_parser!(PathBuf))
                .help("Stopword list, one word per line. Created with defaults if absent."),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("file")
                .value_parser(value_parser!(PathBuf))
                .help("JSON pipeline config; command line options override it."),
        )
        .arg(
            Arg::new("top_k")
                .short('k')
                .long("top-k")
                .value_name("count")
                .value_parser(value_parser!(usize))
                .help("Maximum number of keywords per method [default: 100]"),
        )
        .arg(
            Arg::new("window")
                .long("window")
                .value_name("size")
                .value_parser(value_parser!(usize))
                .help("TextRank co-occurrence window [default: 5]"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the run report as JSON on stdout."),
        )
        .about(format!(
            "{BLUE}zhtext-prep: Chinese text segmentation, word frequency and keyword extraction{RESET}"
        ))
        .get_matches();

    let config = match build_config(&matches) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{RED}{err}{RESET}");
            return ExitCode::FAILURE;
        }
    };

    let print_json = matches.get_flag("json");
    match Pipeline::new(config).run() {
        Ok(report) => {
            if print_json {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{json}"),
                    Err(err) => eprintln!("{RED}Failed to serialize report: {err}{RESET}"),
                }
            }
            print_summary(&report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{RED}{err}{RESET}");
            eprintln!("{RED}Prepare the input text file and run again.{RESET}");
            ExitCode::FAILURE
        }
    }
}

fn build_config(matches: &ArgMatches) -> Result<PipelineConfig, PrepError> {
    let dir = matches
        .get_one::<PathBuf>("dir")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));

    let mut config = PipelineConfig::in_dir(&dir);
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        config = config.with_json_file(path)?;
    }

    if let Some(input) = matches.get_one::<PathBuf>("input") {
        config.input_path = input.clone();
    }
    if let Some(stopwords) = matches.get_one::<PathBuf>("stopwords") {
        config.stopwords_path = stopwords.clone();
    }
    if let Some(&top_k) = matches.get_one::<usize>("top_k") {
        config.top_k = top_k;
    }
    if let Some(&window) = matches.get_one::<usize>("window") {
        config.window_size = window;
    }

    Ok(config)
}

fn print_summary(report: &PipelineReport) {
    println!("\n{BLUE}Text preprocessing completed!{RESET}");
    for artifact in &report.artifacts {
        if artifact.written {
            println!(
                "{BLUE}{} saved to: {}{RESET}",
                artifact.kind.as_str(),
                artifact.path.display()
            );
        } else {
            eprintln!(
                "{RED}{} NOT saved ({}): {}{RESET}",
                artifact.kind.as_str(),
                artifact.path.display(),
                artifact.error.as_deref().unwrap_or("unknown error")
            );
        }
    }
}
