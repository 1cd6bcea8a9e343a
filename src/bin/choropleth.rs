use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "choropleth", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the transform that frames an area, as JSON.
    Frame(FrameArgs),
    /// Write the framed map as SVG.
    Svg(OutArgs),
    /// Rasterize the framed map to PNG.
    Png(OutArgs),
    /// Render a zoom transition as numbered PNG frames.
    Animate(AnimateArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Map config JSON.
    #[arg(long)]
    config: PathBuf,

    /// Area id to frame; overrides the config's `focus`.
    #[arg(long)]
    focus: Option<String>,
}

#[derive(Parser, Debug)]
struct OutArgs {
    /// Map config JSON.
    #[arg(long)]
    config: PathBuf,

    /// Area id to frame; overrides the config's `focus`.
    #[arg(long)]
    focus: Option<String>,

    /// Output path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    /// Map config JSON.
    #[arg(long)]
    config: PathBuf,

    /// Output directory for `frame_00000.png`, `frame_00001.png`, ...
    #[arg(long)]
    out_dir: PathBuf,

    /// Starting focus (default: whole map).
    #[arg(long)]
    from: Option<String>,

    /// Destination focus (default: the config's `focus`).
    #[arg(long)]
    to: Option<String>,

    /// Transition length in frames (default: the config's `animation.frames`).
    #[arg(long)]
    frames: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Svg(args) => cmd_svg(args),
        Command::Png(args) => cmd_png(args),
        Command::Animate(args) => cmd_animate(args),
    }
}

fn load(config: &std::path::Path) -> anyhow::Result<(choropleth::MapConfig, choropleth::ChoroplethMap)> {
    let cfg = choropleth::MapConfig::load_from_file(config)?;
    let map = choropleth::ChoroplethMap::from_config(&cfg)?;
    Ok((cfg, map))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (cfg, map) = load(&args.config)?;
    let focus = args.focus.or(cfg.focus);
    let t = map.frame(focus.as_deref());
    println!("{}", serde_json::to_string_pretty(&t)?);
    Ok(())
}

fn cmd_svg(args: OutArgs) -> anyhow::Result<()> {
    let (cfg, map) = load(&args.config)?;
    let focus = args.focus.or(cfg.focus);
    let svg = map.render_svg(focus.as_deref());

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, svg).with_context(|| format!("write svg '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_png(args: OutArgs) -> anyhow::Result<()> {
    let (cfg, map) = load(&args.config)?;
    let focus = args.focus.or(cfg.focus);
    let raster = choropleth::SvgRasterizer::with_system_fonts();
    let img = choropleth::render_png(&map, &raster, focus.as_deref())?;
    choropleth::write_png(&img, &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    let (cfg, map) = load(&args.config)?;
    let seq = choropleth::ZoomSequence {
        from: args.from,
        to: args.to.or(cfg.focus),
        frames: args.frames.unwrap_or(cfg.animation.frames),
        ease: cfg.animation.ease,
    };
    let raster = choropleth::SvgRasterizer::with_system_fonts();
    let written = seq.write_pngs(&map, &raster, &args.out_dir)?;

    eprintln!("wrote {} frames to {}", written.len(), args.out_dir.display());
    Ok(())
}
