use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use hearth::{aggregate, config, content, output, render};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "hearth")]
#[command(about = "Static landing-page builder for game content sites")]
#[command(long_about = "\
Static landing-page builder for game content sites

The content directory holds JSON documents exported by the content
repository, plus the site config:

  content/
  ├── config.toml              # Site config (optional)
  ├── events.json              # All events, past and future
  ├── costumes.json            # All costumes, released or not
  └── guides.json              # All guides

The build runs in two stages with a JSON manifest between them:

  1. Aggregate   content/  →  snapshot.json   (landing snapshot)
  2. Render      snapshot  →  dist/           (final HTML page)

Pass --now with an ISO-8601 timestamp to pin the generation instant —
the same content and the same --now always produce the same page.

Run 'hearth gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    content: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (snapshot manifest)
    #[arg(long, default_value = ".hearth-temp", global = true)]
    temp_dir: PathBuf,

    /// Generation instant as an ISO-8601 timestamp (default: now)
    #[arg(long, global = true)]
    now: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Aggregate content documents into a landing snapshot
    Aggregate,
    /// Produce the final HTML page from an existing snapshot
    Render,
    /// Run the full pipeline: aggregate → render
    Build,
    /// Validate content and config without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let now = resolve_now(cli.now.as_deref())?;

    match cli.command {
        Command::Aggregate => {
            let snapshot = run_aggregate(&cli.content, &cli.temp_dir, now)?;
            output::print_aggregate_output(&snapshot);
        }
        Command::Render => {
            let site_config = config::load_config(&cli.content)?;
            let snapshot_path = cli.temp_dir.join("snapshot.json");
            render::render(&snapshot_path, &cli.output, &site_config)?;

            let snapshot_content = std::fs::read_to_string(&snapshot_path)?;
            let snapshot: aggregate::LandingSnapshot = serde_json::from_str(&snapshot_content)?;
            output::print_render_output(&snapshot);
        }
        Command::Build => {
            println!("==> Stage 1: Aggregating {}", cli.content.display());
            let snapshot = run_aggregate(&cli.content, &cli.temp_dir, now)?;
            output::print_aggregate_output(&snapshot);

            println!("==> Stage 2: Rendering \u{2192} {}", cli.output.display());
            let site_config = config::load_config(&cli.content)?;
            let snapshot_path = cli.temp_dir.join("snapshot.json");
            render::render(&snapshot_path, &cli.output, &site_config)?;
            output::print_render_output(&snapshot);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.content.display());
            let site_config = config::load_config(&cli.content)?;
            let store = content::ContentStore::new(&cli.content);
            let snapshot = aggregate::aggregate(
                &store,
                now,
                site_config.generation.revalidate_secs,
            )?;
            output::print_aggregate_output(&snapshot);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Aggregate and write the snapshot manifest; returns the snapshot.
fn run_aggregate(
    content_dir: &std::path::Path,
    temp_dir: &std::path::Path,
    now: DateTime<Utc>,
) -> Result<aggregate::LandingSnapshot, Box<dyn std::error::Error>> {
    let site_config = config::load_config(content_dir)?;
    let store = content::ContentStore::new(content_dir);
    let snapshot = aggregate::aggregate(&store, now, site_config.generation.revalidate_secs)?;

    std::fs::create_dir_all(temp_dir)?;
    let snapshot_path = temp_dir.join("snapshot.json");
    let json = serde_json::to_string_pretty(&snapshot)?;
    std::fs::write(&snapshot_path, json)?;

    Ok(snapshot)
}

/// Resolve the generation instant from the optional `--now` override.
fn resolve_now(flag: Option<&str>) -> Result<DateTime<Utc>, Box<dyn std::error::Error>> {
    match flag {
        Some(raw) => {
            let parsed = DateTime::parse_from_rfc3339(raw)
                .map_err(|e| format!("invalid --now value '{raw}': {e}"))?;
            Ok(parsed.with_timezone(&Utc))
        }
        None => Ok(Utc::now()),
    }
}
