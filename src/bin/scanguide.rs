use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "scanguide", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a recorded detection trace and report overlay and guidance per event.
    Replay(ReplayArgs),
    /// Print the letterbox/pillarbox fit and draw transform for a viewport.
    Fit(FitArgs),
}

#[derive(Parser, Debug)]
struct ReplayArgs {
    /// Input trace JSON (array of events).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Optional session config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output report path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FitArgs {
    /// Video frame size, `WIDTHxHEIGHT`.
    #[arg(long, value_parser = parse_size)]
    video: scanguide::Size,

    /// Canvas size, `WIDTHxHEIGHT`.
    #[arg(long, value_parser = parse_size)]
    canvas: scanguide::Size,
}

fn parse_size(s: &str) -> Result<scanguide::Size, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w: f64 = w.trim().parse().map_err(|e| format!("width: {e}"))?;
    let h: f64 = h.trim().parse().map_err(|e| format!("height: {e}"))?;
    Ok(scanguide::Size::new(w, h))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Replay(args) => cmd_replay(args),
        Command::Fit(args) => cmd_fit(args),
    }
}

fn read_trace_json(path: &Path) -> anyhow::Result<Vec<scanguide::ScanEvent>> {
    let f = File::open(path).with_context(|| format!("open trace '{}'", path.display()))?;
    let r = BufReader::new(f);
    let events: Vec<scanguide::ScanEvent> =
        serde_json::from_reader(r).with_context(|| "parse trace JSON")?;
    Ok(events)
}

fn cmd_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let events = read_trace_json(&args.in_path)?;
    let config = match &args.config {
        Some(p) => scanguide::ScanGuideConfig::from_json_path(p)
            .with_context(|| format!("load config '{}'", p.display()))?,
        None => scanguide::ScanGuideConfig::default(),
    };

    let steps = scanguide::replay(&config, &events)?;
    tracing::info!(events = events.len(), "replayed trace");

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(out).with_context(|| format!("create '{}'", out.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, &steps).with_context(|| "write report")?;
            w.flush()?;
            eprintln!("wrote {}", out.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut w = stdout.lock();
            serde_json::to_writer_pretty(&mut w, &steps).with_context(|| "write report")?;
            writeln!(w)?;
        }
    }
    Ok(())
}

#[derive(serde::Serialize)]
struct FitReport {
    fit: scanguide::VideoFit,
    transform: scanguide::DrawTransform,
}

fn cmd_fit(args: FitArgs) -> anyhow::Result<()> {
    let geometry = scanguide::ViewportGeometry::from_sizes(args.video, args.canvas);
    let report = geometry.fit().map(|fit| FitReport {
        transform: scanguide::DrawTransform::from_fit(
            &geometry,
            &fit,
            &scanguide::IDENTITY_MATRIX,
        ),
        fit,
    });
    if report.is_none() {
        tracing::warn!(?geometry, "degenerate viewport, nothing to draw");
    }
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
