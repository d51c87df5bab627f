//! Command-line interface for indentscan
//! This binary runs the indentation scanner over a file and prints the resulting token stream.
//!
//! Usage:
//!   indentscan `<path>` [--config `<file>`] [--format `<format>`] [--tab-width `<n>`]
//!              [--mask `<mask>`] [--snapshots]

mod logging;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use indent_config::{ConfigLoadError, IndentConfig, Loader, OutputFormat};
use indent_scanner::indent::token::{render_simple, render_spans, to_json};
use indent_scanner::{HostLexer, Token};
use serde::Serialize;
use std::ops::Range;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigLoadError),

    #[error("cannot format tokens: {0}")]
    Json(#[from] serde_json::Error),
}

fn build_cli() -> Command {
    Command::new("indentscan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect the INDENT / DEDENT / NEWLINE token stream of an indented source file")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the source file")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML configuration file layered over the built-in defaults")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(OutputFormat::NAMES),
        )
        .arg(
            Arg::new("tab-width")
                .long("tab-width")
                .help("Columns per tab stop when measuring indentation")
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("mask")
                .long("mask")
                .help("Which external tokens the driver offers the scanner")
                .value_parser(["balanced", "permissive"]),
        )
        .arg(
            Arg::new("snapshots")
                .long("snapshots")
                .help("Print the encoded scanner state after each external token")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> ExitCode {
    let matches = build_cli().get_matches();
    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let config = load_config(matches)?;
    logging::init(&config.logging.filter);

    let path = matches
        .get_one::<PathBuf>("path")
        .cloned()
        .unwrap_or_default();
    let source = std::fs::read_to_string(&path).map_err(|source| CliError::Io {
        path: path.clone(),
        source,
    })?;
    debug!(
        target: "indentscan",
        path = %path.display(),
        format = config.inspect.format.name(),
        "scanning"
    );

    let output = if config.inspect.show_snapshots {
        render_with_snapshots(&source, &config)?
    } else {
        let tokens: Vec<_> = HostLexer::with_options(&source, config.lex_options()).collect();
        match config.inspect.format {
            OutputFormat::TokenSimple => render_simple(&tokens) + "\n",
            OutputFormat::TokenJson => to_json(&tokens)? + "\n",
            OutputFormat::TokenSpans => render_spans(&tokens),
        }
    };

    print!("{}", output);
    Ok(())
}

/// Picked up from the working directory when present.
const LOCAL_CONFIG: &str = "indentscan.toml";

/// Defaults, then `./indentscan.toml`, then the `--config` file, then individual flags.
fn load_config(matches: &ArgMatches) -> Result<IndentConfig, CliError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader
            .set_override("inspect.format", format.as_str())
            .map_err(ConfigLoadError::from)?;
    }
    if let Some(&tab_width) = matches.get_one::<u32>("tab-width") {
        loader = loader
            .set_override("scanner.tab_width", i64::from(tab_width))
            .map_err(ConfigLoadError::from)?;
    }
    if let Some(mask) = matches.get_one::<String>("mask") {
        loader = loader
            .set_override("scanner.mask", mask.as_str())
            .map_err(ConfigLoadError::from)?;
    }
    if matches.get_flag("snapshots") {
        loader = loader
            .set_override("inspect.show_snapshots", true)
            .map_err(ConfigLoadError::from)?;
    }
    Ok(loader.build()?)
}

/// A token plus the scanner state right after it, for external tokens.
#[derive(Serialize)]
struct TracedToken {
    token: Token,
    start: usize,
    end: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    snapshot: Option<String>,
}

fn render_with_snapshots(source: &str, config: &IndentConfig) -> Result<String, CliError> {
    let mut lexer = HostLexer::with_options(source, config.lex_options());
    let mut traced = Vec::new();
    while let Some((token, range)) = lexer.next() {
        let snapshot = token
            .is_external()
            .then(|| lexer.checkpoint().snapshot().to_hex());
        traced.push(traced_token(token, range, snapshot));
    }

    let output = match config.inspect.format {
        OutputFormat::TokenSimple => {
            let rendered: Vec<String> = traced
                .iter()
                .filter(|t| !t.token.is_whitespace())
                .map(|t| match &t.snapshot {
                    Some(hex) => format!("{}[{}]", t.token, hex),
                    None => t.token.to_string(),
                })
                .collect();
            rendered.join(" ") + "\n"
        }
        OutputFormat::TokenJson => serde_json::to_string_pretty(&traced)? + "\n",
        OutputFormat::TokenSpans => {
            let mut out = String::new();
            for t in &traced {
                let line = render_spans(&[(t.token.clone(), t.start..t.end)]);
                match &t.snapshot {
                    Some(hex) => {
                        out.push_str(line.trim_end());
                        out.push_str(&format!(" [{}]\n", hex));
                    }
                    None => out.push_str(&line),
                }
            }
            out
        }
    };
    Ok(output)
}

fn traced_token(token: Token, range: Range<usize>, snapshot: Option<String>) -> TracedToken {
    TracedToken {
        token,
        start: range.start,
        end: range.end,
        snapshot,
    }
}
