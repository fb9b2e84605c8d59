//! Command line interface
//!
//! | Command | Description |
//! |---------|-------------|
//! | `mmr list [--vo VO]` | Registered plugin names, sorted |
//! | `mmr vos` | Virtual organizations with registered plugins |
//! | `mmr info NAME [--vo VO]` | Plugin description and field schema as JSON |
//! | `mmr validate FILE` | Problems with a JSON descriptor; fails when any |
//! | `mmr instantiate FILE` | Builds the model a JSON descriptor names |

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use mmr_application::{PluginRegistry, init_registry};
use mmr_domain::{Error, MetadataDescriptor};
use mmr_infrastructure::{ConfigLoader, init_logging};
use tracing::debug;

/// Command line interface for the metadata model registry
#[derive(Parser, Debug)]
#[command(name = "mmr")]
#[command(about = "Metadata Model Registry - inspect and instantiate metadata plugins")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Registry operations
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List registered plugin names
    List {
        /// Only plugins owned by this virtual organization
        #[arg(long)]
        vo: Option<String>,
    },

    /// List virtual organizations with registered plugins
    Vos,

    /// Show a plugin's description and field schema
    Info {
        /// Plugin name
        name: String,

        /// Owning virtual organization; omit for global plugins
        #[arg(long)]
        vo: Option<String>,
    },

    /// Check a JSON descriptor without instantiating it
    Validate {
        /// Descriptor file
        descriptor: PathBuf,
    },

    /// Instantiate the plugin a JSON descriptor names
    Instantiate {
        /// Descriptor file
        descriptor: PathBuf,
    },
}

/// Load configuration, set up logging and the shared registry, then run the command
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("Failed to load configuration")?;
    init_logging(&config.logging)?;

    let registry = init_registry(config.registry.effective_sources());
    debug!(plugins = registry.len(), "Registry ready");

    let mut stdout = io::stdout().lock();
    let success = execute(&cli.command, registry, &mut stdout)?;
    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Run a command against `registry`, writing results to `out`
///
/// Returns `false` when the command completed but found problems.
pub fn execute<W: Write>(
    command: &Commands,
    registry: &PluginRegistry,
    out: &mut W,
) -> anyhow::Result<bool> {
    match command {
        Commands::List { vo } => {
            for name in registry.list_plugins(vo.as_deref()) {
                writeln!(out, "{name}")?;
            }
        }
        Commands::Vos => {
            for vo in registry.list_virtual_organizations() {
                writeln!(out, "{vo}")?;
            }
        }
        Commands::Info { name, vo } => {
            let vo = vo.as_deref();
            let info = registry.get_plugin_info(name, vo).ok_or_else(|| {
                Error::unknown_plugin(name.as_str(), vo, registry.list_plugins(vo))
            })?;
            writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
        }
        Commands::Validate { descriptor } => {
            let descriptor = read_descriptor(descriptor)?;
            let problems = registry.validate_descriptor(&descriptor);
            if !problems.is_empty() {
                for problem in &problems {
                    writeln!(out, "{problem}")?;
                }
                return Ok(false);
            }
            writeln!(out, "{}: valid", descriptor.metadata_class())?;
        }
        Commands::Instantiate { descriptor } => {
            let descriptor = read_descriptor(descriptor)?;
            let model = registry.instantiate_plugin(&descriptor)?;
            writeln!(out, "{model:#?}")?;
        }
    }
    Ok(true)
}

/// Read a JSON descriptor file
pub fn read_descriptor(path: &Path) -> anyhow::Result<MetadataDescriptor> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read descriptor {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid descriptor {}", path.display()))
}
