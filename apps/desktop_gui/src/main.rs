use std::path::PathBuf;

mod config;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::controller::events::UiEvent;
use crate::ui::TriangleApp;

#[derive(Parser, Debug)]
#[command(about = "Interactive good/fast/cheap project triangle")]
struct Args {
    /// Config file; defaults to ./triangle.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    warning_ms: Option<u64>,
    #[arg(long)]
    particles: Option<usize>,
    #[arg(long)]
    no_particles: bool,
}

impl Args {
    fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(v) = self.warning_ms {
            settings.warning_duration_ms = v;
        }
        if let Some(v) = self.particles {
            settings.particle_count = v;
        }
        if self.no_particles {
            settings.particles_enabled = false;
        }
        settings
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let settings = args.apply(config::load_settings(args.config.as_deref())?);
    tracing::info!(?settings, "starting project triangle");

    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Project Triangle")
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([480.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Project Triangle",
        options,
        Box::new(move |_cc| Ok(Box::new(TriangleApp::new(settings, ui_tx, ui_rx)))),
    )
    .map_err(|err| anyhow::anyhow!("desktop GUI exited with error: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_loaded_settings() {
        let args = Args::parse_from(["desktop_gui", "--warning-ms", "100", "--no-particles"]);
        let settings = args.apply(Settings::default());
        assert_eq!(settings.warning_duration_ms, 100);
        assert!(!settings.particles_enabled);
        assert_eq!(settings.particle_count, 50);
    }

    #[test]
    fn no_flags_keep_loaded_settings() {
        let args = Args::parse_from(["desktop_gui"]);
        assert_eq!(args.apply(Settings::default()), Settings::default());
    }
}
