use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "moiretable", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the alignment table once and write it as an image.
    Render(RenderArgs),
    /// Print the computed table layout as JSON.
    Layout(LayoutArgs),
    /// Replay a sequence of resize events, writing one image per size.
    Resize(ResizeArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Surface size as WIDTHxHEIGHT.
    #[arg(long)]
    size: moiretable::SurfaceSize,

    /// Output image path (format from extension, PNG when unknown).
    #[arg(long)]
    out: PathBuf,

    /// Table style JSON.
    #[arg(long)]
    style: Option<PathBuf>,

    /// Also write the recorded draw calls as JSON.
    #[arg(long)]
    dump_ops: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Surface size as WIDTHxHEIGHT.
    #[arg(long)]
    size: moiretable::SurfaceSize,
}

#[derive(Parser, Debug)]
struct ResizeArgs {
    /// Surface sizes in event order; repeat the flag for each resize.
    #[arg(long = "size", required = true)]
    sizes: Vec<moiretable::SurfaceSize>,

    /// Directory receiving `table_<W>x<H>.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Table style JSON.
    #[arg(long)]
    style: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Layout(args) => cmd_layout(args),
        Command::Resize(args) => cmd_resize(args),
    }
}

fn load_style(path: Option<&Path>) -> anyhow::Result<moiretable::TableStyle> {
    match path {
        Some(p) => moiretable::TableStyle::from_json_path(p)
            .with_context(|| format!("load table style '{}'", p.display())),
        None => Ok(moiretable::TableStyle::default()),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let style = load_style(args.style.as_deref())?;

    let frame = moiretable::render_table_rgba(args.size, &style)
        .with_context(|| format!("render table at {}", args.size))?;
    moiretable::write_image(&frame, &args.out)
        .with_context(|| format!("write '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());

    if let Some(ops_path) = args.dump_ops.as_deref() {
        let mut rec = moiretable::RecordingSurface::new(args.size);
        moiretable::render_table(&mut rec, args.size, &style);
        let f = File::create(ops_path)
            .with_context(|| format!("create ops dump '{}'", ops_path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(f), rec.ops())
            .with_context(|| "serialize draw ops")?;
        eprintln!("wrote {} draw ops to {}", rec.ops().len(), ops_path.display());
    }

    Ok(())
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let layout = moiretable::TableLayout::compute(args.size);
    let json = serde_json::to_string_pretty(&layout).with_context(|| "serialize layout")?;
    println!("{json}");
    Ok(())
}

fn cmd_resize(args: ResizeArgs) -> anyhow::Result<()> {
    let style = load_style(args.style.as_deref())?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut renderer = moiretable::TableRenderer::new(style);
    for size in args.sizes {
        let frame = renderer
            .render(size)
            .with_context(|| format!("render table at {size}"))?;
        if frame.data.is_empty() {
            eprintln!("skipped empty surface {size}");
            continue;
        }

        let out = args
            .out_dir
            .join(format!("table_{}x{}.png", size.width, size.height));
        moiretable::write_image(&frame, &out)
            .with_context(|| format!("write '{}'", out.display()))?;

        let rings = renderer
            .last_render()
            .map(moiretable::TableRender::total_rings)
            .unwrap_or(0);
        eprintln!("wrote {} ({rings} rings)", out.display());
    }
    Ok(())
}
