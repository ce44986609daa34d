use anyhow::{Context, Result};
use clap::Parser;

use identicon::options::Options;
use identicon::Identicon;

mod write_png;

/// Identicon CLI — derive a symmetric avatar PNG from a string
#[derive(Parser)]
#[command(name = "identicon", version)]
struct Args {
    /// Input string the identicon is derived from
    input: String,

    /// Output directory (the file is named "<input>.png")
    #[arg(short, long, default_value = ".")]
    output: String,

    /// Canvas edge length in pixels
    #[arg(long, default_value_t = 250)]
    canvas_size: u32,

    /// Grid dimension in cells (must be odd, at most 5)
    #[arg(long, default_value_t = 5)]
    grid: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let options = Options {
        canvas_size: args.canvas_size,
        grid_dimension: args.grid,
    };
    let identicon = Identicon::generate(&args.input, &options)?;
    let canvas = identicon.rasterize();

    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("creating output directory '{}'", args.output))?;
    let path = std::path::Path::new(&args.output).join(format!("{}.png", args.input));

    write_png::write_canvas_png(&canvas, &path)?;
    println!("wrote {}", path.display());
    Ok(())
}
