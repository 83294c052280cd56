//! CLI entry point for deep-object

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use deep_object::{
    EntryPredicate, KeyPath, Node, Order, OutputConfig, TextFormatter, TraversalConfig, logging,
    ops, print_json, property,
};
use serde_json::Value;
use termcolor::StandardStream;
use tracing::debug;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "deep-object")]
#[command(about = "Query and edit nested JSON objects by key path")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Also report container entries, not only leaves
    #[arg(short = 'i', long = "intermediate", global = true)]
    intermediate: bool,

    /// Report deeper entries before their ancestors
    #[arg(short = 'D', long = "depth-first", global = true)]
    depth_first: bool,

    /// Output in JSON format
    #[arg(long = "json", global = true)]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto", global = true)]
    color: ColorMode,

    /// Log filter for diagnostics on stderr (e.g. "debug"); overrides RUST_LOG
    #[arg(long = "log-level", value_name = "FILTER", global = true)]
    log_level: Option<String>,
}

#[derive(Args, Debug)]
struct Input {
    /// JSON document to read ("-" for stdin)
    #[arg(default_value = "-")]
    file: PathBuf,
}

#[derive(Args, Debug)]
struct PredicateArgs {
    /// Only accept entries whose key matches this glob
    #[arg(short = 'k', long = "key", value_name = "GLOB")]
    key: Option<String>,

    /// Only accept string or number leaves matching this regex
    #[arg(short = 'm', long = "match", value_name = "REGEX")]
    pattern: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every value
    Values(Input),
    /// Print the key of every value
    Keys(Input),
    /// Print the full key path of every value
    Paths(Input),
    /// Print `path = value` for every value
    Entries(Input),
    /// Count visited entries
    Count(Input),
    /// Print the first value accepted by the predicate
    Find {
        #[command(flatten)]
        predicate: PredicateArgs,
        #[command(flatten)]
        input: Input,
    },
    /// Print a copy of the document holding only accepted values
    Filter {
        #[command(flatten)]
        predicate: PredicateArgs,
        #[command(flatten)]
        input: Input,
    },
    /// Print whether any value is accepted by the predicate
    Some {
        #[command(flatten)]
        predicate: PredicateArgs,
        #[command(flatten)]
        input: Input,
    },
    /// Print whether every value is accepted by the predicate
    Every {
        #[command(flatten)]
        predicate: PredicateArgs,
        #[command(flatten)]
        input: Input,
    },
    /// Print the value at a key path (dotted, or a JSON array of keys)
    Get {
        path: String,
        #[command(flatten)]
        input: Input,
    },
    /// Print whether a key path exists
    Has {
        path: String,
        #[command(flatten)]
        input: Input,
    },
    /// Set a key path to a JSON value and print the resulting document
    Set {
        path: String,
        /// New value; parsed as JSON, otherwise taken as a string
        value: String,
        #[command(flatten)]
        input: Input,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("cannot read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid JSON in '{}': {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid key path '{0}': {1}")]
    KeyPath(String, serde_json::Error),
    #[error("invalid --key pattern: {0}")]
    Glob(#[from] glob::PatternError),
    #[error("invalid --match pattern: {0}")]
    Regex(#[from] regex::Error),
    #[error(transparent)]
    Tree(#[from] deep_object::Error),
    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

/// Read and classify the input document.
fn load_document(path: &Path) -> Result<Node, CliError> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|source| CliError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        text
    } else {
        fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?
    };
    debug!(path = %path.display(), bytes = text.len(), "loaded document");
    serde_json::from_str(&text).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// A key path argument is either dotted or a JSON array of keys.
fn parse_key_path(arg: &str) -> Result<KeyPath, CliError> {
    if arg.trim_start().starts_with('[') {
        let value: Value =
            serde_json::from_str(arg).map_err(|e| CliError::KeyPath(arg.to_string(), e))?;
        Ok(KeyPath::try_from(&value)?)
    } else {
        Ok(KeyPath::parse(arg))
    }
}

/// A `set` value is JSON if it parses, otherwise a plain string.
fn parse_value(arg: &str) -> Node {
    Node::from(serde_json::from_str::<Value>(arg).unwrap_or_else(|_| Value::String(arg.to_string())))
}

fn build_predicate(args: &PredicateArgs) -> Result<EntryPredicate, CliError> {
    let mut predicate = EntryPredicate::new();
    if let Some(ref glob) = args.key {
        predicate = predicate.with_key_glob(glob)?;
    }
    if let Some(ref pattern) = args.pattern {
        predicate = predicate.with_value_regex(pattern)?;
    }
    Ok(predicate)
}

/// Run one command. Returns false when a lookup found nothing.
fn run(command: &Command, config: TraversalConfig, output: &OutputConfig) -> Result<bool, CliError> {
    let mut formatter = TextFormatter::new(StandardStream::stdout(output.color_choice()));
    debug!(?command, ?config, "running command");

    match command {
        Command::Values(input) => {
            let doc = load_document(&input.file)?;
            let values = ops::values(&doc, config)?;
            if output.json {
                print_json(&values)?;
            } else {
                formatter.write_values(&values)?;
            }
        }
        Command::Keys(input) => {
            let doc = load_document(&input.file)?;
            let keys = ops::keys(&doc, config)?;
            if output.json {
                print_json(&keys)?;
            } else {
                formatter.write_keys(&keys)?;
            }
        }
        Command::Paths(input) => {
            let doc = load_document(&input.file)?;
            let paths = ops::paths(&doc, config)?;
            if output.json {
                print_json(&paths)?;
            } else {
                formatter.write_paths(&paths)?;
            }
        }
        Command::Entries(input) => {
            let doc = load_document(&input.file)?;
            let entries = ops::entries(&doc, config)?;
            if output.json {
                print_json(&entries)?;
            } else {
                formatter.write_entries(&entries)?;
            }
        }
        Command::Count(input) => {
            let doc = load_document(&input.file)?;
            let mut count = 0usize;
            ops::for_each(&doc, config, |_| count += 1)?;
            formatter.write_line(count)?;
        }
        Command::Find { predicate, input } => {
            let predicate = build_predicate(predicate)?;
            let doc = load_document(&input.file)?;
            let Some(found) = ops::find(&doc, config, |visit| predicate.matches(visit))? else {
                return Ok(false);
            };
            if output.json {
                print_json(found)?;
            } else {
                formatter.write_values(&[found])?;
            }
        }
        Command::Filter { predicate, input } => {
            let predicate = build_predicate(predicate)?;
            let doc = load_document(&input.file)?;
            let kept = ops::filter(&doc, config, |visit| predicate.matches(visit))?;
            formatter.write_tree(&kept)?;
        }
        Command::Some { predicate, input } => {
            let predicate = build_predicate(predicate)?;
            let doc = load_document(&input.file)?;
            let any = ops::some(&doc, config, |visit| predicate.matches(visit))?;
            formatter.write_line(any)?;
        }
        Command::Every { predicate, input } => {
            let predicate = build_predicate(predicate)?;
            let doc = load_document(&input.file)?;
            let all = ops::every(&doc, config, |visit| predicate.matches(visit))?;
            formatter.write_line(all)?;
        }
        Command::Get { path, input } => {
            let path = parse_key_path(path)?;
            let doc = load_document(&input.file)?;
            let Some(value) = property::get(&doc, path)? else {
                return Ok(false);
            };
            if output.json {
                print_json(value)?;
            } else {
                formatter.write_values(&[value])?;
            }
        }
        Command::Has { path, input } => {
            let path = parse_key_path(path)?;
            let doc = load_document(&input.file)?;
            formatter.write_line(property::has(&doc, path)?)?;
        }
        Command::Set { path, value, input } => {
            let path = parse_key_path(path)?;
            let mut doc = load_document(&input.file)?;
            let updated = property::set(&mut doc, path, parse_value(value))?;
            formatter.write_tree(updated)?;
        }
    }
    Ok(true)
}

fn main() {
    let cli = Cli::parse();

    let use_color = should_use_color(cli.color);
    logging::init_logger(!use_color, cli.log_level.as_deref());

    let config = TraversalConfig {
        include_intermediate: cli.intermediate,
        order: if cli.depth_first {
            Order::DeepFirst
        } else {
            Order::ShallowFirst
        },
    };
    let output = OutputConfig {
        use_color,
        json: cli.json,
    };

    match run(&cli.command, config, &output) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("deep-object: {}", e);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_path_dotted() {
        let path = parse_key_path("a.b.c").unwrap();
        assert_eq!(path.segments(), ["a", "b", "c"]);
    }

    #[test]
    fn test_parse_key_path_array() {
        let path = parse_key_path(r#"["a.b", ""]"#).unwrap();
        assert_eq!(path.segments(), ["a.b", ""]);
    }

    #[test]
    fn test_parse_key_path_rejects_non_string_array() {
        assert!(matches!(
            parse_key_path("[1, 2]"),
            Err(CliError::Tree(deep_object::Error::InvalidPathType(_)))
        ));
        assert!(matches!(parse_key_path("[oops"), Err(CliError::KeyPath(..))));
    }

    #[test]
    fn test_parse_value_falls_back_to_string() {
        assert_eq!(parse_value("42"), Node::Leaf(serde_json::json!(42)));
        assert_eq!(parse_value("hello"), Node::Leaf(serde_json::json!("hello")));
        assert!(parse_value(r#"{"a": 1}"#).is_container());
    }

    #[test]
    fn test_cli_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["deep-object", "values", "doc.json", "-D", "-i"]).unwrap();
        assert!(cli.depth_first);
        assert!(cli.intermediate);
        assert!(matches!(cli.command, Command::Values(ref input) if input.file == Path::new("doc.json")));
    }
}
