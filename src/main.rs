use anyhow::Context;
use clap::Parser;
use distfield::{render, RenderConfig, DEFAULT_SEED};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Side of a square image; --width and --height override it.
    #[arg(short, long, default_value_t = 500)]
    size: u32,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    #[arg(short, long, default_value_t = 2)]
    workers: usize,

    /// Seed for the noise tables.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    #[arg(short, long, default_value = "out.png")]
    out: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = RenderConfig {
        width: args.width.unwrap_or(args.size),
        height: args.height.unwrap_or(args.size),
        workers: args.workers,
        seed: args.seed,
    };
    let img = render(&config)?;
    img.save(&args.out)
        .with_context(|| format!("failed to write {}", args.out))?;
    log::info!("wrote {}", args.out);
    Ok(())
}
