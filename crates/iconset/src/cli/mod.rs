//! The `iconset` command line.

pub mod generate;
pub mod inspect;
pub mod logging;
pub mod prompt;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use iconset::config::{ConfigOverrides, WebAppOverrides};
use tracing::Level;

/// Generate favicon, touch-icon and PWA icon sets from a single SVG.
///
/// Run without a subcommand to generate. Leaving out `--input` on an
/// interactive terminal starts a short question sequence instead.
#[derive(Debug, Parser)]
#[command(name = "iconset", version, args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generates an icon set (the default)
    Generate(GenerateArgs),

    /// Prints the image directory of an ICO file
    Inspect(inspect::InspectArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Source SVG file
    #[arg(short, long, value_name = "SVG")]
    pub input: Option<PathBuf>,

    /// Output directory [default: ./icons]
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// PNG quality, 1-100
    #[arg(short, long, value_name = "N")]
    pub quality: Option<u8>,

    /// PNG compression level, 0-9
    #[arg(short, long, value_name = "N")]
    pub compression: Option<u8>,

    /// Skip the favicon-16.png / favicon-32.png set
    #[arg(long)]
    pub no_favicon: bool,

    /// Skip favicon.png, favicon.svg and favicon.ico
    #[arg(long)]
    pub no_root_favicons: bool,

    /// Size of the root favicon.png
    #[arg(long, value_name = "N")]
    pub favicon_png_size: Option<u32>,

    /// TOML file with settings; flags take precedence over it
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// App name for manifest.json
    #[arg(long)]
    pub name: Option<String>,

    /// Short app name for manifest.json and iOS
    #[arg(long)]
    pub short_name: Option<String>,

    /// Theme color (CSS color)
    #[arg(long, value_name = "COLOR")]
    pub theme_color: Option<String>,

    /// Manifest background color (CSS color)
    #[arg(long, value_name = "COLOR")]
    pub background_color: Option<String>,

    /// Only print warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub silent: bool,

    /// Report every file as it is written
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the generation manifest as JSON
    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    /// The settings given on the command line.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            source: self.input.clone(),
            output_dir: self.output.clone(),
            favicon: self.no_favicon.then_some(false),
            root_favicons: self.no_root_favicons.then_some(false),
            favicon_png_size: self.favicon_png_size,
            quality: self.quality,
            compression_level: self.compression,
            verbose: self.verbose.then_some(true),
            web_app: WebAppOverrides {
                name: self.name.clone(),
                short_name: self.short_name.clone(),
                theme_color: self.theme_color.clone(),
                background_color: self.background_color.clone(),
                ..WebAppOverrides::default()
            },
            ..ConfigOverrides::default()
        }
    }
}

impl Cli {
    /// Log level used when `RUST_LOG` is not set.
    pub fn default_level(&self) -> Level {
        let args = match &self.command {
            Some(Command::Generate(args)) => args,
            Some(Command::Inspect(_)) => return Level::INFO,
            None => &self.generate,
        };
        if args.silent {
            Level::WARN
        } else if args.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Command::Generate(args)) => generate::run(args),
        Some(Command::Inspect(args)) => inspect::run(args),
        None => generate::run(cli.generate),
    }
}
