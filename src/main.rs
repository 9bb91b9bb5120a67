use anyhow::Context;
use clap::{Arg, ArgAction, Command};
use log::LevelFilter;
use scam_check::config::OutputFormat;
use scam_check::session::{run_session, SessionOptions};
use scam_check::{classify, ClassificationResult, Config, ResultView};
use serde::Serialize;
use std::io::Read;
use std::process;

#[derive(Serialize)]
struct Report<'a> {
    source: &'a str,
    #[serde(flatten)]
    result: &'a ClassificationResult,
}

fn main() {
    let matches = Command::new("scam-check")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Check a message for common scam and phishing signals")
        .arg(
            Arg::new("files")
                .value_name("FILE")
                .help("Files to check, one message each (reads stdin if none provided)")
                .num_args(0..)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("message")
                .short('m')
                .long("message")
                .value_name("TEXT")
                .help("Check the given text instead of reading files")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("interactive")
                .short('i')
                .long("interactive")
                .help("Run the interactive checker")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output format (text, json)")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("generate-config")
                .long("generate-config")
                .value_name("FILE")
                .help("Generate a default configuration file")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging with score breakdowns")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if let Some(generate_path) = matches.get_one::<String>("generate-config") {
        generate_default_config(generate_path);
        return;
    }

    let config = match load_config(matches.get_one::<String>("config")) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e:#}");
            process::exit(1);
        }
    };

    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        config.log_level().unwrap_or(LevelFilter::Info)
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    let format = match matches.get_one::<String>("format") {
        Some(value) => match value.parse::<OutputFormat>() {
            Ok(format) => format,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        },
        None => config.output.format,
    };

    let result = if matches.get_flag("interactive") {
        let options = SessionOptions {
            show_advice: config.output.show_advice,
        };
        run_session(std::io::stdin().lock(), std::io::stdout().lock(), options)
    } else if let Some(message) = matches.get_one::<String>("message") {
        print_result("<message>", &classify(message), format, &config)
    } else {
        let files: Vec<&String> = matches
            .get_many::<String>("files")
            .map(|files| files.collect())
            .unwrap_or_default();
        check_inputs(&files, format, &config)
    };

    if let Err(e) = result {
        log::error!("{e:#}");
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn load_config(path: Option<&String>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::from_file(path),
        None => Ok(Config::default()),
    }
}

fn generate_default_config(path: &str) {
    let config = Config::default();
    match config.to_file(path) {
        Ok(()) => {
            println!("Default configuration written to: {path}");
        }
        Err(e) => {
            eprintln!("Error writing configuration file: {e:#}");
            process::exit(1);
        }
    }
}

fn check_inputs(files: &[&String], format: OutputFormat, config: &Config) -> anyhow::Result<()> {
    if files.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read stdin")?;
        return print_result("<stdin>", &classify(&input), format, config);
    }

    log::info!("Checking {} file(s)", files.len());
    for path in files {
        let text = std::fs::read_to_string(path.as_str())
            .with_context(|| format!("Error reading {path}"))?;
        print_result(path, &classify(&text), format, config)?;
    }
    Ok(())
}

fn print_result(
    source: &str,
    result: &ClassificationResult,
    format: OutputFormat,
    config: &Config,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let report = Report { source, result };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            let view = ResultView::from_result(result);
            println!("📨 {source}");
            print!("{}", view.render_text(config.output.show_advice));
        }
    }
    Ok(())
}
