//! Column Resize Demo
//!
//! Hosts a decorated table in an egui window so resize gestures can be tried
//! interactively. The demo owns the Width Vector and feeds egui's pointer
//! input into the resize core every frame:
//! 1. Replay the frame's pointer events into the pointer hub
//! 2. Render controls, table and status bar (handles may start a gesture)
//! 3. End a gesture whose button was already released
//! 4. Mirror the document style (selection, cursor) onto egui
//!
//! The application is built with a modular architecture:
//! - `app/` - Demo state and sample table content
//! - `ui/` - Panels, table header/body, and the egui bridges
//! - `rendering/` - Text fitting helpers

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use colresize::{CursorStyle, ResizeConfig};
use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod rendering;
mod ui;

use app::sample_data::generate_orders;
use app::AppState;
use ui::panel_manager::{PanelInteraction, PanelManager};
use ui::{document_bridge, pointer_bridge};

/// Interactive column resize demo.
#[derive(Debug, Parser)]
#[command(name = "colresize-demo", version, about)]
struct Cli {
    /// Resize configuration file (JSON). Defaults to the user config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of sample rows
    #[arg(long, default_value_t = 500)]
    rows: usize,

    /// Seed for the sample rows
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Override the minimum column width
    #[arg(long)]
    min_size: Option<f32>,

    /// Override the maximum column width
    #[arg(long)]
    max_size: Option<f32>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Main entry point: loads configuration and launches the demo window.
fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = ResizeConfig::resolve(cli.config.as_deref())?;
    if let Some(min_size) = cli.min_size {
        config.min_size = min_size;
    }
    if cli.max_size.is_some() {
        config.max_size = cli.max_size;
    }
    config.validate()?;

    info!(rows = cli.rows, seed = cli.seed, ?config, "starting column resize demo");
    let rows = generate_orders(cli.rows, cli.seed);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_title("Column Resize Demo"),
        ..Default::default()
    };

    eframe::run_native(
        "Column Resize Demo",
        options,
        Box::new(move |_cc| Ok(Box::new(ResizeDemoApp::new(config, rows)))),
    )
    .map_err(|err| anyhow!("demo window failed: {err}"))
}

struct ResizeDemoApp {
    state: AppState,
}

impl ResizeDemoApp {
    fn new(config: ResizeConfig, rows: Vec<app::sample_data::OrderRow>) -> Self {
        Self {
            state: AppState::new(config, rows),
        }
    }

    fn handle_panel_interaction(&mut self, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::ConfigChanged => self.state.apply_config(),
            PanelInteraction::ResetWidthsRequested => self.state.reset_widths(),
            PanelInteraction::ResetCursorRequested => self.state.env.document.set_cursor(CursorStyle::Auto),
        }
    }
}

impl eframe::App for ResizeDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        pointer_bridge::dispatch_frame_events(ctx, &self.state.env.pointer);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction);
        }

        pointer_bridge::release_stale_gesture(ctx, &self.state.env.pointer, self.state.is_resizing());
        document_bridge::apply_document_style(ctx, &self.state.env.document);
    }
}
