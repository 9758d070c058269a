//! logfacade CLI
//!
//! Command-line front end for emitting messages through the logging facade

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "logfacade")]
#[command(about = "logfacade - emit leveled messages through a swappable backend", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Emit one message
    Emit(commands::emit::EmitArgs),
    /// Run the debug/info/warn reference scenario
    Scenario(commands::scenario::ScenarioArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Emit(args) => commands::emit::execute(args),
        Commands::Scenario(args) => commands::scenario::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logfacade_core::{BackendKind, Level};

    #[test]
    fn test_parse_emit() {
        let cli = Cli::try_parse_from([
            "logfacade", "emit", "--level", "warn", "--logger", "net", "--backend", "tracing",
            "--debug", "hello {0}", "world",
        ])
        .unwrap();

        match cli.command {
            Commands::Emit(args) => {
                assert_eq!(args.level, Level::Warn);
                assert_eq!(args.logger.as_deref(), Some("net"));
                assert_eq!(args.backend, Some(BackendKind::Tracing));
                assert!(args.debug);
                assert_eq!(args.template, "hello {0}");
                assert_eq!(args.args, vec!["world".to_string()]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_level() {
        assert!(Cli::try_parse_from(["logfacade", "emit", "--level", "trace", "x"]).is_err());
    }

    #[test]
    fn test_emit_defaults_to_info() {
        let cli = Cli::try_parse_from(["logfacade", "emit", "plain"]).unwrap();
        match cli.command {
            Commands::Emit(args) => {
                assert_eq!(args.level, Level::Info);
                assert!(args.args.is_empty());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
