use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use sitegen_config::Config;
use sitegen_engine::{SiteLayout, build_site, render};

#[derive(Parser)]
#[command(name = "sitegen", version, about = "Markdown static site generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the site into the output directory
    Build(BuildArgs),

    /// Render a single markdown file to an HTML fragment
    Render(RenderArgs),

    /// Write a default config file
    Init(InitArgs),
}

#[derive(clap::Args)]
struct BuildArgs {
    /// Config file (defaults to ./sitegen.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory copied verbatim into the output
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// Directory of markdown pages
    #[arg(long)]
    content: Option<PathBuf>,

    /// HTML template with {{ Title }} and {{ Content }} placeholders
    #[arg(long)]
    template: Option<PathBuf>,

    /// Output directory, deleted and rebuilt on every run
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(clap::Args)]
struct RenderArgs {
    /// Markdown file to render
    file: PathBuf,

    /// Write the fragment here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(clap::Args)]
struct InitArgs {
    /// Where to write the config (defaults to ./sitegen.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overwrite an existing config file
    #[arg(short, long)]
    force: bool,
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Build(args) => do_build(args),
        Command::Render(args) => do_render(args),
        Command::Init(args) => do_init(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn do_build(args: BuildArgs) -> Result<()> {
    let config_path = args.config.clone().unwrap_or_else(Config::config_path);
    log::info!("Config path: {}", config_path.display());

    let config = match Config::load_from_path(&config_path)? {
        Some(config) => config,
        None => {
            log::info!("No config file found, using defaults");
            Config::default()
        }
    };

    let layout = site_layout(config, args);
    let report = build_site(&layout)
        .with_context(|| format!("Failed to build site into {}", layout.output_dir.display()))?;

    println!(
        "Built {} page(s) and copied {} static file(s) into {}",
        report.pages.len(),
        report.static_files,
        layout.output_dir.display()
    );
    Ok(())
}

/// Command-line flags win over the config file.
fn site_layout(config: Config, args: BuildArgs) -> SiteLayout {
    SiteLayout {
        static_dir: args.static_dir.unwrap_or(config.static_dir),
        content_dir: args.content.unwrap_or(config.content_dir),
        template_path: args.template.unwrap_or(config.template_path),
        output_dir: args.output.unwrap_or(config.output_dir),
    }
}

fn do_render(args: RenderArgs) -> Result<()> {
    let markdown = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Cannot read {}", args.file.display()))?;
    let html =
        render(&markdown).with_context(|| format!("Failed to convert {}", args.file.display()))?;

    match args.output {
        Some(path) => write_output(&path, &html),
        None => {
            println!("{html}");
            Ok(())
        }
    }
}

fn write_output(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html).with_context(|| format!("Cannot write {}", path.display()))
}

fn do_init(args: InitArgs) -> Result<()> {
    let config_path = args.config.unwrap_or_else(Config::config_path);
    if config_path.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    Config::default().save_to_path(&config_path)?;
    println!("Wrote {}", config_path.display());
    Ok(())
}
