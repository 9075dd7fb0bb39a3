//! Example: flood one texture in memory and print the per-level timings.
//!
//! Loads a color texture and its grey coverage mask, runs the flood stack
//! without going through the file driver, and writes the result next to the
//! color input as `<stem>_flooded.png` unless `--out` is given.
//!
//! Run from the workspace root:
//!   cargo run -p mip-flooding --example flood -- --help
//!   cargo run -p mip-flooding --example flood -- --color rock_C.png --alpha rock_A.png

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use mip_flooding::{OutputFormat, check_inputs, flood, io};

#[derive(Parser, Debug)]
#[command(about = "Flood a texture's transparent regions with mip-level colors")]
struct Args {
    /// Color texture
    #[arg(long)]
    color: PathBuf,

    /// Grey coverage mask with the same resolution
    #[arg(long)]
    alpha: PathBuf,

    /// Output path (default: <color stem>_flooded.png next to the input)
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
    let args = Args::parse();

    let color = io::load_color(&args.color)
        .with_context(|| format!("loading {}", args.color.display()))?;
    let alpha = io::load_alpha(&args.alpha)
        .with_context(|| format!("loading {}", args.alpha.display()))?;
    if let Err(e) = check_inputs(color.dimensions(), alpha.dimensions()) {
        bail!("cannot flood {}: {e}", args.color.display());
    }

    let t0 = Instant::now();
    let result = flood(&color, &alpha)?;
    let total_ms = t0.elapsed().as_secs_f64() * 1000.0;

    println!(
        "{}x{} texture, {} mip levels",
        color.width(),
        color.height(),
        result.level_count
    );
    for level in &result.stack.levels {
        println!(
            "  level {:>2}  1/{:<5} {:>5}x{:<5} {:>8.3} ms",
            level.level, level.factor, level.width, level.height, level.elapsed_ms
        );
    }
    println!("total: {total_ms:.3} ms");

    let out = args.out.unwrap_or_else(|| {
        let stem = args
            .color
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "texture".to_string());
        args.color.with_file_name(format!("{stem}_flooded.png"))
    });
    io::save_image(&result.image, &out, OutputFormat::Png)
        .with_context(|| format!("writing {}", out.display()))?;
    println!("wrote {}", out.display());
    Ok(())
}
