//! Command-line interface for content-chef.
//!
//! Provides commands for building a channel from a source tree,
//! inspecting how a file would be classified, and showing configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::adapters::FileSourceLoader;
use crate::config;
use crate::core::{extension, guess_kind, guess_role, Chef, PathResolver};
use crate::domain::{ContentKind, FileDescriptor};

/// content-chef - Build a curation channel from a provider's content tree
#[derive(Parser, Debug)]
#[command(name = "content-chef")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build and validate a channel from a source tree
    Build {
        /// Source tree file (JSON, or YAML by extension)
        #[arg(short, long)]
        source: PathBuf,

        /// Directory that content:// paths resolve against
        #[arg(long, env = "CHEF_CONTENT_ROOT")]
        content_root: Option<PathBuf>,

        /// Write the build report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show how a single file would be classified
    Classify {
        /// Path, content:// reference, or hosted URL
        path: String,

        /// Kind of the owning node (inferred from the path if not specified)
        #[arg(short, long)]
        kind: Option<ContentKind>,

        /// Treat the argument as a streaming video URL
        #[arg(long)]
        web_url: bool,
    },

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Build {
                source,
                content_root,
                output,
            } => build_channel(source, content_root, output).await,
            Commands::Classify { path, kind, web_url } => classify(&path, kind, web_url),
            Commands::Config => show_config(),
        }
    }
}

/// Build a channel and emit the report as JSON
async fn build_channel(
    source: PathBuf,
    content_root: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let content_root = match content_root {
        Some(root) => root,
        None => config::content_root()?,
    };

    let chef = Chef::new(config::channel_info()?, content_root);
    let loader = FileSourceLoader::new(source);
    let report = chef.construct_channel(&loader).await?;

    let json = serde_json::to_string_pretty(&report)?;
    match output {
        Some(path) => {
            tokio::fs::write(&path, json)
                .await
                .with_context(|| format!("Failed to write report: {}", path.display()))?;
            eprintln!(
                "[Channel {} built: {} leaves, {} skipped -> {}]",
                report.channel.channel_id,
                report.channel.leaf_count(),
                report.skipped.len(),
                path.display()
            );
        }
        None => println!("{}", json),
    }

    for skipped in &report.skipped {
        eprintln!("  skipped {} ({}): {}", skipped.id, skipped.title, skipped.reason);
    }

    Ok(())
}

/// Print the inferred kind and role for one file
fn classify(path: &str, kind: Option<ContentKind>, web_url: bool) -> Result<()> {
    let file = if web_url {
        FileDescriptor::from_web_url(path)
    } else {
        FileDescriptor::from_path(path)
    };

    let kind = match kind {
        Some(kind) => kind,
        None => {
            let no_questions: &[serde_json::Value] = &[];
            guess_kind(file.path(), file.stream_marker(), no_questions)?
        }
    };

    let resolver = PathResolver::new(config::content_root()?);
    let resolved = resolver.resolve_opt(file.path());
    let role = guess_role(
        kind,
        resolved.as_deref(),
        file.youtube_id(),
        file.web_url(),
        file.encoding(),
    );

    println!("Path:      {}", resolved.as_deref().unwrap_or(path));
    let ext = file.path().and_then(extension);
    println!("Extension: {}", ext.as_deref().unwrap_or("-"));
    println!("Kind:      {}", kind);
    match role {
        Some(role) => println!("Role:      {}", role),
        None => {
            println!("Role:      (unrecognized)");
            anyhow::bail!("Unrecognized file type '{}' for {} node", path, kind);
        }
    }

    Ok(())
}

/// Show the resolved configuration
fn show_config() -> Result<()> {
    let cfg = config::config()?;

    println!("content-chef configuration");
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Paths:");
    println!("  Content root: {}", cfg.content_root.display());
    println!();
    println!("Channel:");
    println!("  Source domain: {}", cfg.channel.source_domain);
    println!("  Source id:     {}", cfg.channel.source_id);
    println!("  Title:         {}", cfg.channel.title);
    println!("  Language:      {}", cfg.channel.language);
    if let Some(description) = &cfg.channel.description {
        println!("  Description:   {}", description);
    }
    if let Some(thumbnail) = &cfg.channel.thumbnail {
        println!("  Thumbnail:     {}", thumbnail);
    }

    Ok(())
}
