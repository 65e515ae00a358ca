use std::path::PathBuf;

use clap::Parser;
use region_tiles::renderer::{CELL_HALF_HEIGHT, CELL_HALF_WIDTH};
use region_tiles::{parse_palette, Canvas, DirTileSetSource, LayerType, Region, RegionManifest};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Room above and below the floor plane for walls, roofs and shadows
const VERTICAL_MARGIN: i32 = 256;

#[derive(Parser)]
#[command(name = "region-preview")]
#[command(about = "Render every layer of a region manifest to a PNG")]
struct Args {
    /// Directory the manifest's tile-set paths are relative to
    #[arg(long)]
    data_dir: PathBuf,

    /// Act palette file (256 BGR triples)
    #[arg(long)]
    palette: PathBuf,

    /// Region manifest (JSON)
    #[arg(long)]
    manifest: PathBuf,

    #[arg(long, default_value = "region.png")]
    out: PathBuf,

    /// Value in [0, 1] choosing among the preset's grid files
    #[arg(long, default_value = "0")]
    roll: f64,
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let args = Args::parse();

    let manifest = RegionManifest::from_json(&std::fs::read_to_string(&args.manifest)?)?;
    let palette = parse_palette(&std::fs::read(&args.palette)?)?;
    let (grid_file, grid) = manifest.select_grid(args.roll)?;
    info!(level = %manifest.level.name, grid = grid_file, palette = %manifest.level.palette_name(), "loading region");

    let source = DirTileSetSource::new(&args.data_dir);
    let mut region = Region::load(&manifest.level, grid.clone(), palette, &source)?;

    let span = (region.width() + region.height()) as i32;
    let origin_x = (region.height() as i32 - 1).max(0) * CELL_HALF_WIDTH;
    let width = span * CELL_HALF_WIDTH;
    let height = span * CELL_HALF_HEIGHT + 2 * VERTICAL_MARGIN;

    let mut canvas = Canvas::new(width.max(1) as u32, height as u32);
    canvas.fill([0, 0, 0, 255]);
    region.render_all(origin_x, VERTICAL_MARGIN, &mut canvas)?;
    canvas.save_png(&args.out)?;

    for layer in [LayerType::Floor, LayerType::Shadow, LayerType::Wall] {
        let stats = region.cache_stats(layer);
        info!(%layer, entries = stats.entries, hits = stats.hits, generated = stats.generated, "cache");
    }
    info!(out = %args.out.display(), width = canvas.width(), height = canvas.height(), "preview written");
    Ok(())
}
