use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use wxr_import::config::{read_config, Config};
use wxr_import::import::import_posts;
use wxr_import::logger::configure_logger;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the WordPress WXR export file
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Directory where the Markdown posts are written
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = match args.config {
        Some(ref path) => read_config(path)?,
        None => Config::default(),
    };

    configure_logger(&config).context("Error configuring logger")?;

    // Command line beats configuration file beats built-in default
    let export_file = args.export
        .or(config.paths.export_file)
        .unwrap_or_else(|| PathBuf::from("WordPress.xml"));
    let out_dir = args.out_dir
        .or(config.paths.posts_dir)
        .unwrap_or_else(|| PathBuf::from("content/posts"));

    if !export_file.exists() {
        anyhow::bail!("WordPress export file not found at {}", export_file.display());
    }

    let xml = fs::read_to_string(&export_file)
        .with_context(|| format!("Error reading {}", export_file.display()))?;

    let report = import_posts(&xml, &out_dir)?;

    println!();
    println!("Import complete!");
    println!("Successfully imported: {} posts", report.imported);
    println!("Skipped: {} posts", report.skipped);

    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
