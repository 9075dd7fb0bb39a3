use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use mf_flood::{
    BatchEntry, BatchOptions, BatchStatus, FloodOutcome, FloodReport, OutputFormat,
    collect_color_files, run_batch, run_mip_flooding,
};
use serde::Serialize;

const BATCH_LOG_NAME: &str = "batch_mipmap_flooding.txt";

#[derive(Parser, Debug)]
#[command(name = "mipflood")]
#[command(about = "Dilate texture colors into transparent regions by mip flooding")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Flood one color texture using its coverage mask
    #[command(name = "run")]
    Run(RunArgs),
    /// Flood every `<name>_C` / `<name>_A` pair in a directory
    #[command(name = "batch")]
    Batch(BatchArgs),
}

#[derive(Args, Debug, Clone)]
struct CommonArgs {
    /// Output format: jpg, jpeg, png, tif, tiff, bmp or gif
    #[arg(long, default_value = "png")]
    format: String,
    /// Worker threads (default: all cores)
    #[arg(long)]
    threads: Option<usize>,
    /// Append logs to this file instead of the default log location
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Log to stderr instead of a file
    #[arg(long, conflicts_with = "log_file")]
    stderr: bool,
    /// Write a JSON run report here
    #[arg(long)]
    report: Option<PathBuf>,
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Args, Debug, Clone)]
struct RunArgs {
    /// Color texture
    color: PathBuf,
    /// Grey coverage mask, same resolution as the color texture
    alpha: PathBuf,
    /// Output image path
    output: PathBuf,
    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args, Debug, Clone)]
struct BatchArgs {
    /// Directory holding color textures and masks
    input_dir: PathBuf,
    /// Directory receiving flooded textures
    output_dir: PathBuf,
    #[arg(long, default_value = "_C")]
    color_pattern: String,
    #[arg(long, default_value = "_A")]
    mask_pattern: String,
    #[arg(long, default_value = "_C")]
    output_pattern: String,
    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchEntryDto {
    color: PathBuf,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<FloodReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Command::Run(args) => run_single(args),
        Command::Batch(args) => run_directory(args),
    }
}

fn run_single(args: RunArgs) -> Result<()> {
    let output_dir = parent_or_current(&args.output);
    let stem = args
        .output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "mip_flooding".to_string());
    let default_log = output_dir.join("logs").join(format!("{stem}.txt"));
    init_logging(&args.common, &default_log)?;
    init_threads(args.common.threads)?;

    let outcome = run_mip_flooding(&args.color, &args.alpha, &args.output, &args.common.format)
        .with_context(|| format!("flooding {}", args.color.display()))?;

    match &outcome {
        FloodOutcome::Written(report) => {
            println!(
                "wrote {} ({}x{}, {:.2}% smaller on disk, {:.1} ms)",
                report.output_path.display(),
                report.width,
                report.height,
                report.size_reduction_percent,
                report.total_ms
            );
            if let Some(path) = &args.common.report {
                write_json(path, report)?;
            }
        }
        FloodOutcome::Rejected(rejection) => {
            println!("skipped {}: {rejection}", args.color.display());
        }
    }
    Ok(())
}

fn run_directory(args: BatchArgs) -> Result<()> {
    if !args.input_dir.is_dir() {
        bail!("input directory does not exist: {}", args.input_dir.display());
    }
    init_logging(&args.common, &args.output_dir.join(BATCH_LOG_NAME))?;
    init_threads(args.common.threads)?;

    let format: OutputFormat = args.common.format.parse()?;
    let options = BatchOptions {
        color_pattern: args.color_pattern,
        mask_pattern: args.mask_pattern,
        output_pattern: args.output_pattern,
        format,
    };

    let files = collect_color_files(&args.input_dir, &options.color_pattern)
        .with_context(|| format!("listing {}", args.input_dir.display()))?;
    let entries = run_batch(&files, &args.output_dir, &options);

    let written = entries
        .iter()
        .filter(|e| matches!(e.status, BatchStatus::Done(FloodOutcome::Written(_))))
        .count();
    println!(
        "flooded {written} of {} textures into {}",
        entries.len(),
        args.output_dir.display()
    );

    if let Some(path) = &args.common.report {
        let dtos: Vec<BatchEntryDto> = entries.into_iter().map(entry_dto).collect();
        write_json(path, &dtos)?;
    }
    Ok(())
}

fn entry_dto(entry: BatchEntry) -> BatchEntryDto {
    let (status, report, message) = match entry.status {
        BatchStatus::Done(FloodOutcome::Written(report)) => ("written", Some(report), None),
        BatchStatus::Done(FloodOutcome::Rejected(r)) => ("rejected", None, Some(r.to_string())),
        BatchStatus::Skipped => ("skipped", None, Some("no matching mask".to_string())),
        BatchStatus::Failed(e) => ("failed", None, Some(e.to_string())),
    };
    BatchEntryDto {
        color: entry.color,
        status,
        report,
        message,
    }
}

fn init_logging(common: &CommonArgs, default_log: &Path) -> Result<()> {
    let level = if common.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis();

    if !common.stderr {
        let path = common.log_file.as_deref().unwrap_or(default_log);
        ensure_parent_dir(path)?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("installing logger")
}

fn init_threads(threads: Option<usize>) -> Result<()> {
    let Some(n) = threads else {
        return Ok(());
    };
    if n == 0 {
        bail!("--threads must be at least 1");
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(n)
        .build_global()
        .context("configuring thread pool")
}

fn parent_or_current(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    Ok(())
}

fn write_json(path: &Path, value: &impl Serialize) -> Result<()> {
    ensure_parent_dir(path)?;
    let bytes = serde_json::to_vec_pretty(value).context("serializing json")?;
    fs::write(path, bytes).with_context(|| format!("writing json {}", path.display()))
}
