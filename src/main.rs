//! `dashctl` - command-line front end for the dashboard layout core.
//!
//! Lists layout strategies, shows their options and replays action scripts
//! against an in-memory dashboard.

use clap::{Parser, Subcommand};
use dashboard_layout::commands::{parse_script, run_script};
use dashboard_layout::config::{default, xdg, Config, ConfigError, ConfigLoader};
use dashboard_layout::ids::PanelIdAllocator;
use dashboard_layout::{logging, Dashboard, LayoutRegistry, LayoutSnapshot};
use std::path::PathBuf;
use std::process::ExitCode;

/// Dashboard layout tool
#[derive(Parser)]
#[command(name = "dashctl")]
#[command(version, about = "Inspect and exercise dashboard layout strategies")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for dashctl
#[derive(Subcommand)]
enum Commands {
    /// List registered layout strategies
    Layouts,

    /// Show the options of a layout strategy
    Options {
        /// Strategy id
        #[arg(long, default_value = "responsive-grid")]
        layout: String,
    },

    /// Apply a script of actions to a new dashboard and print the result
    Simulate {
        /// Initial strategy id (overrides the config file)
        #[arg(long)]
        layout: Option<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        /// Config file to use instead of the XDG location
        #[arg(long)]
        config: Option<PathBuf>,
        /// Actions: add:<title>, remove:<id>, duplicate:<id>, switch:<layout>,
        /// row, edit:on|off, set:<option>=<value>
        actions: Vec<String>,
    },

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config_path = match &cli.command {
        Commands::Simulate { config, .. } => config.clone(),
        _ => None,
    };
    let config = ConfigLoader::load(config_path.as_deref());
    logging::init(
        config
            .as_ref()
            .map(|c| c.logging.level)
            .unwrap_or_default(),
    );

    match cli.command {
        Commands::Layouts => run_layouts_command(),
        Commands::Options { layout } => run_options_command(&layout),
        Commands::Simulate {
            layout,
            json,
            actions,
            ..
        } => run_simulate_command(config, layout, json, &actions),
        Commands::Config { action } => run_config_command(action, config),
    }
}

fn run_layouts_command() -> ExitCode {
    for descriptor in LayoutRegistry::new().iter() {
        println!(
            "{:<16} {:<16} {}",
            descriptor.id, descriptor.name, descriptor.description
        );
    }
    ExitCode::SUCCESS
}

fn run_options_command(layout: &str) -> ExitCode {
    let Some(descriptor) = LayoutRegistry::new().get(layout) else {
        eprintln!("Error: unknown layout strategy '{layout}'");
        return ExitCode::FAILURE;
    };
    let manager = (descriptor.create_empty)(PanelIdAllocator::new());
    let options = manager.options();
    if options.is_empty() {
        println!("{} has no options", descriptor.id);
        return ExitCode::SUCCESS;
    }
    for item in options {
        let control = item.render();
        println!("{}", control.line());
        let labels: Vec<&str> = control.options().iter().map(|o| o.label.as_str()).collect();
        println!("  presets: {}", labels.join(", "));
        if control.allows_custom_value() {
            println!("  custom values accepted");
        }
    }
    ExitCode::SUCCESS
}

fn run_simulate_command(
    config: Result<Config, ConfigError>,
    layout: Option<String>,
    json: bool,
    inputs: &[String],
) -> ExitCode {
    let mut config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(layout) = layout {
        config.dashboard.layout = layout;
    }

    let actions = match parse_script(inputs) {
        Ok(actions) => actions,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut dashboard = match Dashboard::from_config(&config) {
        Ok(dashboard) => dashboard,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = run_script(&mut dashboard, &actions) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let snapshot = dashboard.snapshot();
    if json {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error: failed to serialize snapshot: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_snapshot(&snapshot);
    }
    ExitCode::SUCCESS
}

fn print_snapshot(snapshot: &LayoutSnapshot) {
    println!("layout: {}", snapshot.layout);
    for panel in &snapshot.panels {
        let id = panel.id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string());
        let key = panel.key.as_deref().unwrap_or("-");
        println!("  {id:>4}  {key:<12} {}", panel.title);
    }
}

fn run_config_command(action: ConfigAction, loaded: Result<Config, ConfigError>) -> ExitCode {
    let result = match action {
        ConfigAction::Init { force } => default::create_default_config(force).map(|path| {
            println!("Created configuration at {}", path.display());
        }),
        ConfigAction::Path => {
            println!("{}", xdg::config_path().display());
            Ok(())
        }
        ConfigAction::Validate => loaded.map(|config| {
            println!("Configuration is valid");
            println!("{config:#?}");
        }),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Config error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_layouts_parses() {
        let cli = Cli::try_parse_from(["dashctl", "layouts"]).expect("layouts should parse");
        assert!(matches!(cli.command, Commands::Layouts));
    }

    #[test]
    fn test_options_default_layout() {
        let cli = Cli::try_parse_from(["dashctl", "options"]).expect("options should parse");
        match cli.command {
            Commands::Options { layout } => assert_eq!(layout, "responsive-grid"),
            _ => panic!("expected Options command"),
        }
    }

    #[test]
    fn test_simulate_collects_actions() {
        let cli = Cli::try_parse_from([
            "dashctl",
            "simulate",
            "--json",
            "--layout",
            "rows-layout",
            "add:CPU",
            "row",
        ])
        .expect("simulate should parse");
        match cli.command {
            Commands::Simulate {
                layout,
                json,
                config,
                actions,
            } => {
                assert_eq!(layout.as_deref(), Some("rows-layout"));
                assert!(json);
                assert!(config.is_none());
                assert_eq!(actions, vec!["add:CPU", "row"]);
            }
            _ => panic!("expected Simulate command"),
        }
    }

    #[test]
    fn test_simulate_without_actions_is_allowed() {
        let cli = Cli::try_parse_from(["dashctl", "simulate"]).expect("simulate should parse");
        match cli.command {
            Commands::Simulate { actions, json, .. } => {
                assert!(actions.is_empty());
                assert!(!json);
            }
            _ => panic!("expected Simulate command"),
        }
    }

    #[test]
    fn test_simulate_config_path() {
        let cli = Cli::try_parse_from(["dashctl", "simulate", "--config", "/tmp/d.toml"])
            .expect("simulate --config should parse");
        match cli.command {
            Commands::Simulate { config, .. } => {
                assert_eq!(config, Some(PathBuf::from("/tmp/d.toml")));
            }
            _ => panic!("expected Simulate command"),
        }
    }

    #[test]
    fn test_config_init_force_parses() {
        let cli = Cli::try_parse_from(["dashctl", "config", "init", "--force"])
            .expect("config init --force should parse");
        match cli.command {
            Commands::Config { action } => match action {
                ConfigAction::Init { force } => assert!(force),
                _ => panic!("expected Init action"),
            },
            _ => panic!("expected Config command"),
        }
    }

    #[test]
    fn test_config_path_and_validate_parse() {
        for (arg, expect_path) in [("path", true), ("validate", false)] {
            let cli = Cli::try_parse_from(["dashctl", "config", arg]).expect("should parse");
            match cli.command {
                Commands::Config { action } => {
                    assert_eq!(matches!(action, ConfigAction::Path), expect_path);
                }
                _ => panic!("expected Config command"),
            }
        }
    }

    #[test]
    fn test_config_without_action_fails() {
        assert!(Cli::try_parse_from(["dashctl", "config"]).is_err());
    }

    #[test]
    fn test_unknown_subcommand_fails() {
        assert!(Cli::try_parse_from(["dashctl", "daemon"]).is_err());
    }
}
