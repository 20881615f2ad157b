use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use softdraw::logging::{init_logging, LoggingConfig};
use softdraw::{PixelBuffer, Scene};

#[derive(Parser, Debug)]
#[command(name = "softdraw")]
#[command(version, about = "Render a JSON scene of lines, circles, rectangles and polygons")]
struct Cli {
    /// Scene file to render
    #[arg(value_name = "SCENE")]
    scene: PathBuf,

    /// Override the canvas width from the scene
    #[arg(long, short = 'W', value_name = "PIXELS")]
    width: Option<i32>,

    /// Override the canvas height from the scene
    #[arg(long, short = 'H', value_name = "PIXELS")]
    height: Option<i32>,

    /// Log filter, e.g. "debug" or "softdraw=trace" (defaults to RUST_LOG, then info)
    #[arg(long, value_name = "FILTER")]
    log: Option<String>,

    /// Show the rendered scene in a window (needs the `viewer` feature)
    #[arg(long)]
    view: bool,
}

/// FNV-1a over the packed pixels, stable across runs and platforms
fn checksum(buffer: &PixelBuffer) -> u64 {
    buffer.as_slice().iter().fold(0xcbf29ce484222325, |hash, &pixel| {
        pixel
            .to_be_bytes()
            .iter()
            .fold(hash, |h, &b| (h ^ u64::from(b)).wrapping_mul(0x100000001b3))
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig {
        env_filter: cli.log.clone(),
        ..LoggingConfig::default()
    });

    let mut scene = Scene::load(&cli.scene)
        .with_context(|| format!("loading scene {}", cli.scene.display()))?;
    if let Some(width) = cli.width {
        scene.width = width;
    }
    if let Some(height) = cli.height {
        scene.height = height;
    }

    let buffer = scene
        .render()
        .with_context(|| format!("rendering scene '{}'", scene.name))?;

    let painted = buffer.as_slice().iter().filter(|&&p| p != 0).count();
    log::info!(
        "rendered '{}': {}x{}, {} painted pixels, checksum {:016x}",
        scene.name,
        buffer.width(),
        buffer.height(),
        painted,
        checksum(&buffer)
    );

    if cli.view {
        show(&scene.name, &buffer)?;
    }
    Ok(())
}

#[cfg(feature = "viewer")]
fn show(title: &str, buffer: &PixelBuffer) -> anyhow::Result<()> {
    let mut display = softdraw::display::Display::new(title, buffer.width() as u32, buffer.height() as u32)
        .map_err(anyhow::Error::msg)?;
    display.show(buffer).map_err(anyhow::Error::msg)
}

#[cfg(not(feature = "viewer"))]
fn show(_title: &str, _buffer: &PixelBuffer) -> anyhow::Result<()> {
    log::error!("--view needs softdraw built with the `viewer` feature");
    Err(anyhow::anyhow!("viewer feature not enabled"))
}
