use std::io::{self, IsTerminal, Write as _};

use anyhow::Context;
use iconset::config::{ConfigOverrides, DEFAULT_OUTPUT_DIR};
use iconset::{GenerationManifest, IconsetConfig};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use super::prompt::Prompter;
use super::GenerateArgs;

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let mut config = IconsetConfig::new("", DEFAULT_OUTPUT_DIR);
    if let Some(path) = &args.config {
        let overrides = ConfigOverrides::from_toml_file(path)
            .with_context(|| format!("failed to load config file '{}'", path.display()))?;
        config = config.merge(overrides);
    }
    config = config.merge(args.overrides());

    if args.input.is_none() && config.source.as_os_str().is_empty() && io::stdin().is_terminal() {
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), StandardStream::stdout(ColorChoice::Auto));
        config = prompter.collect(config)?;
    }

    let manifest = iconset::generate(&config).with_context(|| {
        format!(
            "failed to generate icons from '{}'",
            config.source.display()
        )
    })?;

    if args.json {
        let json = serde_json::to_string_pretty(&manifest)?;
        println!("{json}");
    } else if !args.silent {
        print_summary(&manifest)?;
    }
    Ok(())
}

fn print_summary(manifest: &GenerationManifest) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(stdout, "Generated")?;
    stdout.reset()?;
    writeln!(
        stdout,
        " {} icons, {} favicons{} in {}",
        manifest.icons.len(),
        manifest.favicons.len(),
        if manifest.root_favicons.is_some() {
            " and favicon.ico"
        } else {
            ""
        },
        manifest.output_dir.display()
    )?;
    writeln!(
        stdout,
        "Paste the contents of {} into your page <head>.",
        manifest.meta_tags.display()
    )
}
