// SPDX-License-Identifier: MIT
//
// sf-palette — command-line front end for the storefront palette engine.
//
// This is the binary that wires the crates together:
//
//   sf-theme → validation, contrast repair, gradients, presets
//   sf-color → (via sf-theme) hex parsing, WCAG luminance, lighten/darken
//
// Palettes come in as the same camelCase JSON the generation pipelines
// exchange (a file argument, or stdin when omitted) and results go out
// as JSON on stdout. Logs go to stderr so the output stays pipeable:
//
//   echo '{"primaryColor":"#cccccc", ...}' | sf-palette repair --template luxury
//
// Exit status is 1 on any input error, with one `sf-palette: …` line on
// stderr.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use sf_theme::pipeline::{finalize_preset, finalize_with};
use sf_theme::{
    Palette, RepairPolicy, TemplateKind, contrast_ratio, gradient_with, validate_with,
};

// ─── Command line ───────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "sf-palette")]
#[command(version, about = "WCAG contrast validation and repair for storefront palettes")]
struct Cli {
    /// Log repair decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the contrast ratio between two colors
    Contrast {
        /// First color (#rrggbb)
        a: String,
        /// Second color (#rrggbb)
        b: String,
    },
    /// Check a palette's foreground/background pairs
    Validate {
        /// Palette JSON file (reads stdin when omitted)
        file: Option<PathBuf>,
        #[command(flatten)]
        policy: PolicyArg,
    },
    /// Repair a palette and derive its gradient
    Repair(RepairArgs),
    /// Derive the gradient pair for a primary color
    Gradient {
        /// Primary color (#rrggbb)
        primary: String,
        #[command(flatten)]
        policy: PolicyArg,
    },
    /// Print a template kind's finalized builtin palette
    Preset {
        /// minimal, bold, elegant, luxury or neon
        kind: TemplateKind,
        #[command(flatten)]
        policy: PolicyArg,
    },
}

#[derive(Args)]
struct RepairArgs {
    /// Palette JSON file (reads stdin when omitted)
    file: Option<PathBuf>,
    /// Treat the palette as a dark theme (lighten instead of darken)
    #[arg(long, conflicts_with = "template")]
    dark: bool,
    /// Take the theme direction from a template kind
    #[arg(short, long)]
    template: Option<TemplateKind>,
    #[command(flatten)]
    policy: PolicyArg,
}

impl RepairArgs {
    fn is_dark(&self) -> bool {
        self.template.map_or(self.dark, TemplateKind::is_dark)
    }
}

#[derive(Args)]
struct PolicyArg {
    /// TOML file overriding thresholds, steps or attempt budget
    #[arg(long = "policy", value_name = "TOML")]
    path: Option<PathBuf>,
}

impl PolicyArg {
    fn load(&self) -> Result<RepairPolicy> {
        let policy = match &self.path {
            Some(path) => RepairPolicy::load(path)
                .with_context(|| format!("{}: cannot load policy", path.display()))?,
            None => RepairPolicy::default(),
        };
        debug!(?policy, "repair policy");
        Ok(policy)
    }
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli.command) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("sf-palette: {e:#}");
            process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Execute one command and return what it prints.
fn run(command: &Command) -> Result<String> {
    match command {
        Command::Contrast { a, b } => Ok(format!("{:.2}", contrast_ratio(a, b))),
        Command::Validate { file, policy } => {
            let policy = policy.load()?;
            let palette = read_palette(file.as_deref())?;
            to_json(&validate_with(&palette, &policy))
        }
        Command::Repair(args) => {
            let policy = args.policy.load()?;
            let palette = read_palette(args.file.as_deref())?;
            to_json(&finalize_with(&palette, args.is_dark(), &policy))
        }
        Command::Gradient { primary, policy } => {
            let policy = policy.load()?;
            to_json(&gradient_with(primary, policy.gradient_lighten))
        }
        Command::Preset { kind, policy } => {
            let policy = policy.load()?;
            to_json(&finalize_preset(*kind, &policy))
        }
    }
}

fn read_palette(file: Option<&Path>) -> Result<Palette> {
    let text = match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("{}: cannot read", path.display()))?
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("cannot read palette from stdin")?;
            buf
        }
    };
    Palette::from_json(&text).context("not a palette")
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

// ─── Tests ──────────────────────────────────────────────────────────────────
