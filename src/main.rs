// Copyright (C) 2018 Stephane Raux. Distributed under the MIT license.

#![deny(warnings)]

use clap::{App, Arg};
use geocode_country::{ClientConfig, GeocodeClient, GeocodeResponse};
use std::error::Error;
use std::fmt::{Display, self};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

const APP_NAME: &str = env!("CARGO_PKG_NAME");
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

fn run() -> Result<(), AppError> {
    let endpoint_help = format!("Search endpoint (default: {})",
        geocode_country::DEFAULT_ENDPOINT);
    let default_agent = format!("{}/{}", APP_NAME, APP_VERSION);
    let agent_help = format!("User-Agent header (default: {})", default_agent);
    let matches = App::new(APP_NAME)
        .version(APP_VERSION)
        .author(APP_AUTHORS)
        .about("Resolves a location to its country code")
        .arg(
            Arg::with_name("CONFIG")
                .short("c")
                .long("config")
                .takes_value(true)
                .help("Path to configuration file")
        )
        .arg(
            Arg::with_name("ENDPOINT")
                .short("e")
                .long("endpoint")
                .takes_value(true)
                .help(&endpoint_help)
        )
        .arg(
            Arg::with_name("USER_AGENT")
                .short("A")
                .long("user-agent")
                .takes_value(true)
                .help(&agent_help)
        )
        .arg(
            Arg::with_name("FULL")
                .long("full")
                .help("Print every match as JSON instead of the country code")
        )
        .arg(
            Arg::with_name("VERBOSE")
                .short("v")
                .long("verbose")
                .help("Log requests and responses")
        )
        .arg(
            Arg::with_name("LOCATION")
                .required(true)
                .help("Free-text location, e.g. \"Stockholm\"")
        )
        .get_matches();
    let level = if matches.is_present("VERBOSE") {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    let mut config = match matches.value_of("CONFIG") {
        Some(path) => {
            let config_file = File::open(Path::new(path))
                .map_err(AppError::FailedToOpenConfigFile)?;
            ClientConfig::from_reader(config_file)
                .map_err(AppError::BadConfigFile)?
        }
        None => ClientConfig::default(),
    };
    if let Some(endpoint) = matches.value_of("ENDPOINT") {
        config.endpoint = Some(endpoint.parse().map_err(AppError::BadEndpoint)?);
    }
    if let Some(agent) = matches.value_of("USER_AGENT") {
        config.user_agent = Some(agent.to_string());
    }
    if config.user_agent.is_none() {
        config.user_agent = Some(default_agent);
    }
    let location = matches.value_of("LOCATION").unwrap_or_default();
    let client = GeocodeClient::from_config(&config)
        .map_err(AppError::LookupError)?;
    let runtime = tokio::runtime::Runtime::new()
        .map_err(AppError::FailedToStartRuntime)?;
    if matches.is_present("FULL") {
        let result = runtime.block_on(client.search(location));
        let json = render_full(&result).map_err(AppError::FailedToPrint)?;
        println!("{}", json);
        result.map_err(AppError::LookupError)?;
    } else {
        let code = runtime.block_on(client.country_code(location))
            .map_err(AppError::LookupError)?;
        println!("{}", code);
    }
    Ok(())
}

fn main() {
    let code = if let Err(e) = run() {
        print_error(e);
        1
    } else {
        0
    };
    std::process::exit(code)
}

/// Renders the outcome of a search as `{"Ok": [...]}` or
/// `{"Err": {"kind": ..., "cause": [...]}}`.
fn render_full(result: &Result<GeocodeResponse, geocode_country::Error>)
    -> Result<String, serde_json::Error>
{
    serde_json::to_string_pretty(result)
}

fn print_error(e: AppError) {
    let _ = write_error(&mut io::stderr(), &e);
}

fn write_error<W: Write>(out: &mut W, e: &dyn Error) -> io::Result<()> {
    writeln!(out, "Error: {}", e)?;
    let mut e = e;
    while let Some(cause) = e.source() {
        writeln!(out, "Because: {}", cause)?;
        e = cause;
    }
    Ok(())
}

#[derive(Debug)]
enum AppError {
    BadConfigFile(serde_json::Error),
    BadEndpoint(url::ParseError),
    FailedToOpenConfigFile(io::Error),
    FailedToPrint(serde_json::Error),
    FailedToStartRuntime(io::Error),
    LookupError(geocode_country::Error),
}

impl Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::BadConfigFile(_) => f.write_str("Bad configuration file"),
            AppError::BadEndpoint(_) => f.write_str("Bad endpoint"),
            AppError::FailedToOpenConfigFile(_) =>
                f.write_str("Failed to open configuration file"),
            AppError::FailedToPrint(_) => f.write_str("Failed to print result"),
            AppError::FailedToStartRuntime(_) =>
                f.write_str("Failed to start runtime"),
            AppError::LookupError(_) => f.write_str("Lookup failed"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::BadConfigFile(e) => Some(e),
            AppError::BadEndpoint(e) => Some(e),
            AppError::FailedToOpenConfigFile(e) => Some(e),
            AppError::FailedToPrint(e) => Some(e),
            AppError::FailedToStartRuntime(e) => Some(e),
            AppError::LookupError(e) => Some(e),
        }
    }
}
