use clap::{ArgAction, Parser, Subcommand};
use scripthelper::{Config, CsvDirSink, ScriptHelperError, ScriptHelperResult, Session};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Extract `##` titles from a script and build lists, tables and SRT files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the numbered title list
    List {
        /// Input text file, or `-` for stdin
        input: String,
    },

    /// Print the parsed topics
    Topics {
        /// Input text file, or `-` for stdin
        input: String,
        /// Print JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Write title/content tables as CSV files
    Export {
        /// Input text file, or `-` for stdin
        input: String,
        /// Maximum rows per file (overrides the configuration)
        #[arg(short, long)]
        limit: Option<usize>,
        /// Directory for the generated files
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Generate the SRT track and the video timestamp list
    Srt {
        /// Input text file, or `-` for stdin
        input: String,
        /// Do not give topic titles their own entry
        #[arg(long)]
        no_titles: bool,
        /// Directory for the SRT file
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
        /// Print the SRT to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
}

/// Default filter for the `-v` count. `RUST_LOG` takes precedence.
fn log_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_directive(verbose)));

    // Library `log` records are forwarded through the subscriber's log bridge
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => {}
        Err(ScriptHelperError::Advisory(advisory)) => {
            eprintln!("⚠ {}", advisory);
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("✕ {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> ScriptHelperResult<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match cli.command {
        Commands::List { input } => {
            let session = Session::new(config);
            let list = session.generate_list(&read_input(&input)?)?;
            println!("{}", list);
        }
        Commands::Topics { input, json } => {
            let session = Session::new(config);
            let text = read_input(&input)?;
            let topics = scripthelper::topics::parse_topics_with_placeholder(
                &text,
                &session.config().parser.placeholder_title,
            );
            if topics.is_empty() {
                return Err(scripthelper::Advisory::NoTopicsFound.into());
            }
            if json {
                let rendered = serde_json::to_string_pretty(&topics)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                println!("{}", rendered);
            } else {
                for topic in &topics {
                    println!("{}. {}", topic.number, topic.title);
                    let body = topic.content.trim();
                    if !body.is_empty() {
                        println!("    {}", body);
                    }
                }
            }
        }
        Commands::Export {
            input,
            limit,
            out_dir,
        } => {
            if let Some(limit) = limit {
                config.export.rows_per_file = limit;
            }
            let session = Session::new(config);
            let mut sink = CsvDirSink::new(&out_dir);
            let names = session.export(&read_input(&input)?, &mut sink)?;
            for path in sink.written() {
                println!("{}", path.display());
            }
            eprintln!("✓ Export generated with {} file(s)", names.len());
        }
        Commands::Srt {
            input,
            no_titles,
            out_dir,
            stdout,
        } => {
            let mut session = Session::new(config);
            session.set_include_titles(!no_titles);
            let text = read_input(&input)?;
            let output = session.generate_srt(&text)?;
            let timestamps = output.timestamps.clone();

            if stdout {
                println!("{}", output.srt);
                eprintln!("Timestamps:\n{}", timestamps);
            } else {
                let path = session.save_srt(&out_dir)?;
                eprintln!("✓ SRT written to {}", path.display());
                println!("{}", timestamps);
            }
        }
    }

    Ok(())
}

fn read_input(input: &str) -> io::Result<String> {
    if input == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        fs::read_to_string(Path::new(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_count_selects_filter() {
        assert_eq!(log_directive(0), "warn");
        assert_eq!(log_directive(1), "info");
        assert_eq!(log_directive(2), "debug");
        assert_eq!(log_directive(7), "debug");
    }

    #[test]
    fn test_filter_directives_parse() {
        for verbose in 0..3 {
            assert!(EnvFilter::try_new(log_directive(verbose)).is_ok());
        }
    }

    #[test]
    fn test_verbose_flag_is_counted() {
        let cli = Cli::try_parse_from(["scripthelper", "-vv", "list", "-"]).expect("valid args");
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::List { .. }));
    }
}
