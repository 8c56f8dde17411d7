//! `dotstroke` CLI: render characters with a font and print their
//! dot-matrix stroke decomposition.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use dotstroke_core::{
    DEFAULT_RESOLUTION, DEFAULT_THRESHOLD, DotMatrix, DotSampler, Glyph, GlyphWidth, Rectangle,
    SamplerConfig, decompose,
};
use dotstroke_fonts::{DEFAULT_FONT_SIZE, DirectoryFontProvider, FontProvider, GlyphRasterizer};
use dotstroke_svg::{RenderOptions, Style, render_to_string};

#[derive(Parser)]
#[command(version, about = "dotstroke \u{2014} turn glyphs into dot-matrix strokes")]
struct Cli {
    /// Characters to convert
    text: String,

    /// Directory holding .ttf/.otf fonts; the first by file name is used
    #[arg(
        long = "font-dir",
        value_name = "DIR",
        env = "DOTSTROKE_FONT_DIR",
        default_value = "fonts"
    )]
    font_dir: PathBuf,

    /// Number of dot rows
    #[arg(short = 'n', long = "dots", default_value_t = DEFAULT_RESOLUTION)]
    dots: usize,

    /// Font size and canvas height in pixels
    #[arg(long, default_value_t = DEFAULT_FONT_SIZE)]
    size: u32,

    /// Red-channel values below this are ink
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: u8,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// SVG stroke style: "cells" (default) or "centerlines"
    #[arg(long, default_value = "cells", value_parser = parse_style)]
    style: Style,

    /// Draw the dot grid under SVG output
    #[arg(long)]
    grid: bool,

    /// Write one file per character into DIR instead of printing
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One "x y width height" line per stroke
    Text,
    /// JSON objects with the strokes of each character
    Json,
    /// SVG preview
    Svg,
    /// ASCII rendering of the sampled dot matrix
    Matrix,
}

impl Format {
    const fn extension(self) -> &'static str {
        match self {
            Self::Text | Self::Matrix => "txt",
            Self::Json => "json",
            Self::Svg => "svg",
        }
    }
}

fn parse_style(s: &str) -> Result<Style, String> {
    match s.to_lowercase().as_str() {
        "cells" => Ok(Style::Cells),
        "centerlines" => Ok(Style::Centerlines),
        _ => Err(format!(
            "unknown style \"{s}\": expected \"cells\" or \"centerlines\""
        )),
    }
}

/// Strokes for one character, as emitted in JSON.
#[derive(Debug, Serialize)]
struct GlyphStrokes {
    #[serde(rename = "char")]
    ch: char,
    width: GlyphWidth,
    rows: usize,
    columns: usize,
    strokes: Vec<Rectangle>,
    #[serde(skip)]
    matrix: DotMatrix,
}

/// Rasterize, sample and decompose one character at a time.
struct Pipeline<P> {
    rasterizer: GlyphRasterizer<P>,
    sampler: DotSampler,
}

impl<P: FontProvider> Pipeline<P> {
    fn convert(&self, ch: char) -> Result<GlyphStrokes> {
        let glyph = Glyph::new(ch);
        let image = self
            .rasterizer
            .rasterize(glyph)
            .with_context(|| format!("rasterizing {ch:?}"))?;
        let matrix = self
            .sampler
            .sample(&image, glyph.width)
            .with_context(|| format!("sampling {ch:?}"))?;
        let strokes = decompose(&matrix);
        info!(ch = ?ch, strokes = strokes.len(), "converted glyph");
        Ok(GlyphStrokes {
            ch,
            width: glyph.width,
            rows: matrix.rows(),
            columns: matrix.columns(),
            strokes,
            matrix,
        })
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = SamplerConfig {
        canvas_size: cli.size,
        resolution: cli.dots,
        threshold: cli.threshold,
    };
    config.validate(GlyphWidth::Full)?;

    let provider = DirectoryFontProvider::open(&cli.font_dir)?;
    debug!(
        dir = %provider.dir().display(),
        fonts = provider.paths().count(),
        "font directory loaded"
    );
    let pipeline = Pipeline {
        rasterizer: GlyphRasterizer::new(provider, cli.size),
        sampler: DotSampler::new(config),
    };

    let glyphs = cli
        .text
        .chars()
        .filter(|c| !c.is_control())
        .map(|ch| pipeline.convert(ch))
        .collect::<Result<Vec<_>>>()?;

    match &cli.output {
        Some(dir) => write_files(dir, &glyphs, cli),
        None => print_all(&glyphs, cli),
    }
}

fn render_one(glyph: &GlyphStrokes, cli: &Cli) -> Result<String> {
    Ok(match cli.format {
        Format::Text => {
            let mut out = format!("# {:?} {}x{}\n", glyph.ch, glyph.columns, glyph.rows);
            for r in &glyph.strokes {
                out.push_str(&format!("{r}\n"));
            }
            out
        }
        Format::Json => serde_json::to_string_pretty(glyph)? + "\n",
        Format::Svg => {
            let opts = RenderOptions {
                grid: cli.grid,
                style: cli.style,
                ..RenderOptions::default()
            };
            render_to_string(&glyph.strokes, glyph.columns, glyph.rows, &opts) + "\n"
        }
        Format::Matrix => format!("# {:?}\n{}", glyph.ch, glyph.matrix),
    })
}

fn print_all(glyphs: &[GlyphStrokes], cli: &Cli) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if cli.format == Format::Json {
        serde_json::to_writer_pretty(&mut stdout, glyphs)?;
        writeln!(stdout)?;
        return Ok(());
    }
    for glyph in glyphs {
        stdout.write_all(render_one(glyph, cli)?.as_bytes())?;
    }
    Ok(())
}

fn write_files(dir: &Path, glyphs: &[GlyphStrokes], cli: &Cli) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    for glyph in glyphs {
        let name = format!("U+{:04X}.{}", u32::from(glyph.ch), cli.format.extension());
        let path = dir.join(name);
        fs::write(&path, render_one(glyph, cli)?)
            .with_context(|| format!("writing {}", path.display()))?;
        eprintln!("Wrote {}", path.display());
    }
    Ok(())
}
