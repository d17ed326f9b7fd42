//! Interactive collection of the basic settings.

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::bail;
use iconset::file;
use iconset::IconsetConfig;
use iconset_core::ImageFormat;
use iconset_render::png::MAX_COMPRESSION_LEVEL;
use termcolor::{Color, ColorSpec, WriteColor};

/// Asks questions on `output` and reads answers from `input`.
///
/// Invalid answers print the reason and ask again; an empty answer takes
/// the shown default.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: WriteColor> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for the source, output directory, quality, compression and
    /// favicon toggle, starting from the values in `config`.
    pub fn collect(&mut self, config: IconsetConfig) -> anyhow::Result<IconsetConfig> {
        let source = self.ask("Source SVG file", None, parse_source)?;

        let output_default = config.output_dir.display().to_string();
        let output_dir = self.ask("Output directory", Some(&output_default), |answer| {
            Ok(PathBuf::from(answer))
        })?;

        let quality_default = config.encoding.quality.to_string();
        let quality = self.ask("PNG quality (1-100)", Some(&quality_default), parse_quality)?;

        let compression_default = config.encoding.compression_level.to_string();
        let compression = self.ask(
            "Compression level (0-9)",
            Some(&compression_default),
            parse_compression,
        )?;

        let favicon_default = if config.favicon.enabled { "y" } else { "n" };
        let favicons = self.ask("Generate favicon PNGs? (y/n)", Some(favicon_default), parse_yes_no)?;

        Ok(IconsetConfig {
            source,
            output_dir,
            ..config
        }
        .with_quality(quality)
        .with_compression_level(compression)
        .with_favicons(favicons))
    }

    fn ask<T>(
        &mut self,
        question: &str,
        default: Option<&str>,
        parse: impl Fn(&str) -> Result<T, String>,
    ) -> anyhow::Result<T> {
        loop {
            self.write_question(question, default)?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("input ended before \"{question}\" was answered");
            }
            let answer = match (line.trim(), default) {
                ("", Some(default)) => default,
                (answer, _) => answer,
            };

            match parse(answer) {
                Ok(value) => return Ok(value),
                Err(reason) => {
                    self.output.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                    writeln!(self.output, "  {reason}")?;
                    self.output.reset()?;
                }
            }
        }
    }

    fn write_question(&mut self, question: &str, default: Option<&str>) -> io::Result<()> {
        self.output
            .set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
        write!(self.output, "? ")?;
        self.output.reset()?;
        write!(self.output, "{question}")?;
        if let Some(default) = default {
            self.output.set_color(ColorSpec::new().set_dimmed(true))?;
            write!(self.output, " [{default}]")?;
            self.output.reset()?;
        }
        write!(self.output, ": ")?;
        self.output.flush()
    }
}

fn parse_source(answer: &str) -> Result<PathBuf, String> {
    if answer.is_empty() {
        return Err("a source file is required".to_string());
    }
    let path = PathBuf::from(answer);
    if ImageFormat::from_path(&path) != ImageFormat::Svg {
        return Err(format!("{answer} is not an .svg file"));
    }
    if !file::is_file(&path) {
        return Err(format!("{answer} does not exist"));
    }
    Ok(path)
}

fn parse_quality(answer: &str) -> Result<u8, String> {
    match answer.parse::<u8>() {
        Ok(value @ 1..=100) => Ok(value),
        _ => Err("enter a number from 1 to 100".to_string()),
    }
}

fn parse_compression(answer: &str) -> Result<u8, String> {
    match answer.parse::<u8>() {
        Ok(value) if value <= MAX_COMPRESSION_LEVEL => Ok(value),
        _ => Err(format!("enter a number from 0 to {MAX_COMPRESSION_LEVEL}")),
    }
}

fn parse_yes_no(answer: &str) -> Result<bool, String> {
    match answer.to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err("answer y or n".to_string()),
    }
}
