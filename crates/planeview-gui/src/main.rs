mod app;
mod convert;
mod input;
mod panels;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "planeview", about = "Dual-window perspective vs. orthographic projection demo")]
#[command(version)]
struct Cli {
    /// Image file to texture the plane with; without it the plane is drawn
    /// as a checkerboard
    #[arg(short, long)]
    image: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into())
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        "controls: +/- zoom | W/S plane distance | left mouse drag rotate | \
         T toggle texture | ESC exit"
    );

    let image = cli.image;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 480.0])
            .with_position([50.0, 100.0])
            .with_title("Perspective Projection"),
        ..Default::default()
    };

    eframe::run_native(
        "PlaneView",
        options,
        Box::new(move |cc| Ok(Box::new(app::PlaneViewApp::new(&cc.egui_ctx, image)))),
    )
}
