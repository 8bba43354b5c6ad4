use std::fmt::Write as _;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use triangle_core::{
    ScenarioTable, SelectionController, SelectionError, ViewState, LIMIT_WARNING,
};

#[derive(Parser, Debug)]
#[command(about = "Walk through the project triangle from the terminal")]
struct Cli {
    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every two-attribute scenario.
    Scenarios,
    /// Toggle attributes in order and print the resulting view.
    View { attributes: Vec<String> },
}

struct Walkthrough {
    view: ViewState,
    rejected: Vec<String>,
}

/// Limit rejections are collected and the walk continues; an unknown
/// attribute name aborts it.
fn walk(names: &[String]) -> Result<Walkthrough, SelectionError> {
    let mut controller = SelectionController::new();
    let mut rejected = Vec::new();
    for name in names {
        match controller.toggle_named(name) {
            Ok(outcome) => tracing::debug!(name = %name, ?outcome, "toggled"),
            Err(err) if err.is_recoverable() => {
                tracing::warn!(%err, "toggle rejected");
                rejected.push(name.clone());
            }
            Err(err) => return Err(err),
        }
    }
    Ok(Walkthrough {
        view: controller.derive_view_state(),
        rejected,
    })
}

fn render_view(view: &ViewState) -> String {
    let mut out = String::new();
    let selected: Vec<&str> = view.selection.iter().map(|a| a.name()).collect();
    let _ = writeln!(out, "selected: [{}]", selected.join(", "));
    let _ = writeln!(out, "{}", view.title);
    let _ = writeln!(out, "{}", view.description);
    for example in view.examples {
        let _ = writeln!(out, "  - {}: {}", example.title, example.description);
    }
    out
}

fn render_scenarios() -> String {
    let mut out = String::new();
    for (key, scenario) in ScenarioTable::entries() {
        let [a, b] = key.members();
        let _ = writeln!(
            out,
            "[{a} + {b}] {} (gives up {})",
            scenario.title,
            key.sacrificed()
        );
        let _ = writeln!(out, "  {}", scenario.description);
        for example in scenario.examples {
            let _ = writeln!(out, "  - {}", example.title);
        }
    }
    out
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Command::Scenarios => {
            if cli.json {
                let table: Vec<_> = ScenarioTable::entries().collect();
                println!("{}", serde_json::to_string_pretty(&table)?);
            } else {
                print!("{}", render_scenarios());
            }
        }
        Command::View { attributes } => {
            let walkthrough = walk(&attributes)?;
            if cli.json {
                let out = serde_json::json!({
                    "view": walkthrough.view,
                    "rejected": walkthrough.rejected,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                for name in &walkthrough.rejected {
                    eprintln!(
                        "{} ({name}) {}",
                        LIMIT_WARNING.title, LIMIT_WARNING.description
                    );
                }
                print!("{}", render_view(&walkthrough.view));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn walk_collects_limit_rejections_and_keeps_going() {
        let walkthrough = walk(&names(&["good", "fast", "cheap", "fast", "cheap"])).expect("walk");
        assert_eq!(walkthrough.rejected, vec!["cheap".to_string()]);
        assert_eq!(walkthrough.view.title, "Good + Cheap = Slow");
    }

    #[test]
    fn walk_fails_on_unknown_attribute() {
        let err = walk(&names(&["good", "speedy"])).err().expect("invalid attribute");
        assert_eq!(
            err,
            SelectionError::InvalidAttribute {
                input: "speedy".to_string()
            }
        );
    }

    #[test]
    fn renders_view_with_examples() {
        let walkthrough = walk(&names(&["fast", "good"])).expect("walk");
        let text = render_view(&walkthrough.view);
        assert!(text.starts_with("selected: [good, fast]\nGood + Fast = Expensive\n"));
        assert!(text.contains("  - Software Development: Hiring senior developers"));
    }

    #[test]
    fn renders_every_scenario() {
        let text = render_scenarios();
        assert!(text.contains("[good + fast] Good + Fast = Expensive"));
        assert!(text.contains("[good + cheap] Good + Cheap = Slow"));
        assert!(text.contains("[fast + cheap] Fast + Cheap = Poor Quality"));
    }

    #[test]
    fn parses_global_json_flag_after_subcommand() {
        let cli = Cli::parse_from(["triangle", "view", "good", "--json"]);
        assert!(cli.json);
        assert!(matches!(cli.command, Command::View { ref attributes } if attributes == &names(&["good"])));
    }
}
