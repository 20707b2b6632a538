// SPDX-License-Identifier: MIT
//
// hitomezashi — render a hitomezashi stitch pattern to PNG.
//
// This is the thin caller around the two pattern crates:
//
//   hz-grid   → parity sequences in, immutable cell grid out
//   hz-raster → grid + palette in, pixel canvas out
//
// The binary's own job is glue: turn `0`/`1` strings into parity bits,
// pick the two fill colors, and write the canvas to disk.
//
//   --horizontal 0110…  ─┐
//   --vertical   1010…  ─┼─→ PatternSpec → Grid → render → PNG
//   --color-a / -b      ─┘

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use image::ImageFormat;
use log::{LevelFilter, info};

use hz_grid::{Grid, PatternSpec};
use hz_raster::{Palette, Rgb, render};

// ─── Command line ───────────────────────────────────────────────────────────

/// A parity sequence parsed from a string of `0`s and `1`s.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Bits(Vec<bool>);

/// Parse `"0110"` into parity bits. Anything but `0` and `1` is rejected;
/// the empty string parses and is left for the grid builder to refuse.
fn parse_bits(s: &str) -> Result<Bits, String> {
    s.chars()
        .enumerate()
        .map(|(i, c)| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => Err(format!("invalid bit {c:?} at position {i}, expected 0 or 1")),
        })
        .collect::<Result<Vec<bool>, String>>()
        .map(Bits)
}

fn parse_color(s: &str) -> Result<Rgb, String> {
    Rgb::hex(s).ok_or_else(|| format!("invalid color {s:?}, expected #RGB or #RRGGBB"))
}

/// Render a hitomezashi stitch pattern from two parity sequences.
#[derive(Debug, Parser)]
#[command(name = "hitomezashi", version, about)]
struct Cli {
    /// Column parity bits, one `0`/`1` per column.
    #[arg(short = 'x', long, value_parser = parse_bits)]
    horizontal: Bits,

    /// Row parity bits, one `0`/`1` per row.
    #[arg(short = 'y', long, value_parser = parse_bits)]
    vertical: Bits,

    /// Pixels per cell edge.
    #[arg(short = 's', long, env = "HITOMEZASHI_CELL_SIZE", default_value_t = 12)]
    cell_size: u32,

    /// Fill for the first color class, including the top-left cell.
    #[arg(short = 'a', long, env = "HITOMEZASHI_COLOR_A", value_parser = parse_color)]
    color_a: Option<Rgb>,

    /// Fill for the second color class.
    #[arg(
        short = 'b',
        long,
        env = "HITOMEZASHI_COLOR_B",
        value_parser = parse_color,
        conflicts_with = "complement"
    )]
    color_b: Option<Rgb>,

    /// Derive the second color as the hue complement of the first.
    #[arg(long, requires = "color_a")]
    complement: bool,

    /// Where to write the PNG. Always PNG, whatever the extension.
    #[arg(short, long, default_value = "hitomezashi.png")]
    output: PathBuf,

    /// Also print an ASCII diagram of the grid to stdout.
    #[arg(long)]
    print_grid: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// The palette the flags describe. Unset colors fall back to the
    /// black/white default.
    fn palette(&self) -> Palette {
        let default = Palette::default();
        let color_a = self.color_a.unwrap_or(default.color_a);
        if self.complement {
            Palette::complementary(color_a)
        } else {
            Palette::new(color_a, self.color_b.unwrap_or(default.color_b))
        }
    }

    const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn spec(&self) -> hz_grid::Result<PatternSpec> {
        PatternSpec::new(
            self.horizontal.0.clone(),
            self.vertical.0.clone(),
            self.cell_size,
        )
    }
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn run(cli: &Cli) -> Result<Grid> {
    let grid = cli.spec().context("invalid pattern")?.build();
    if cli.print_grid {
        print!("{grid}");
    }

    let palette = cli.palette();
    let canvas = render(&grid, &palette).context("failed to render pattern")?;

    canvas
        .image()
        .save_with_format(&cli.output, ImageFormat::Png)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    info!(
        "wrote {}x{} pattern ({}x{} px, {} / {}) to {}",
        grid.width(),
        grid.height(),
        canvas.width(),
        canvas.height(),
        palette.color_a,
        palette.color_b,
        cli.output.display()
    );

    Ok(grid)
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("hitomezashi: {e:#}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["hitomezashi"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    // ── Parsing ─────────────────────────────────────────────────────────

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_bits_reads_zeros_and_ones() {
        assert_eq!(parse_bits("0110"), Ok(Bits(vec![false, true, true, false])));
        assert_eq!(parse_bits(""), Ok(Bits(vec![])));
    }

    #[test]
    fn parse_bits_rejects_other_characters() {
        assert_eq!(
            parse_bits("01x1"),
            Err("invalid bit 'x' at position 2, expected 0 or 1".to_string())
        );
        assert!(parse_bits("0 1").is_err());
    }

    #[test]
    fn parse_color_accepts_hex() {
        assert_eq!(parse_color("#fff"), Ok(Rgb::WHITE));
        assert!(parse_color("white").is_err());
    }

    #[test]
    fn missing_sequences_are_an_error() {
        assert!(Cli::try_parse_from(["hitomezashi", "-x", "01"]).is_err());
    }

    #[test]
    fn complement_conflicts_with_color_b() {
        let res = Cli::try_parse_from([
            "hitomezashi", "-x", "1", "-y", "1", "-b", "#000", "--complement",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn complement_requires_color_a() {
        let res = Cli::try_parse_from(["hitomezashi", "-x", "10", "-y", "01", "--complement"]);
        assert!(res.is_err());
    }

    // ── Resolution ──────────────────────────────────────────────────────

    #[test]
    fn palette_defaults_to_black_and_white() {
        let c = cli(&["-x", "10", "-y", "01"]);
        assert_eq!(c.palette(), Palette::default());
    }

    #[test]
    fn palette_complement_derives_color_b() {
        let c = cli(&["-x", "10", "-y", "01", "-a", "#336699", "--complement"]);
        assert_eq!(
            c.palette(),
            Palette::new(Rgb::new(0x33, 0x66, 0x99), Rgb::new(0x99, 0x66, 0x33))
        );
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(cli(&["-x", "1", "-y", "1"]).log_level(), LevelFilter::Warn);
        assert_eq!(cli(&["-x", "1", "-y", "1", "-vv"]).log_level(), LevelFilter::Debug);
        assert_eq!(cli(&["-x", "1", "-y", "1", "-vvvv"]).log_level(), LevelFilter::Trace);
    }

    #[test]
    fn empty_sequence_fails_in_the_grid_builder() {
        let c = cli(&["-x", "", "-y", "01"]);
        let err = c.spec().unwrap_err();
        assert_eq!(err.to_string(), "invalid input: horizontal sequence is empty");
    }

    #[test]
    fn zero_cell_size_fails_in_the_grid_builder() {
        let c = cli(&["-x", "1", "-y", "1", "-s", "0"]);
        assert!(c.spec().is_err());
    }

    // ── End to end ──────────────────────────────────────────────────────

    #[test]
    fn run_writes_a_png() {
        let path = std::env::temp_dir().join(format!("hitomezashi-{}.png", process::id()));
        let c = cli(&[
            "-x",
            "110011110011",
            "-y",
            "0110",
            "-s",
            "6",
            "-a",
            "#e18c2f",
            "--complement",
            "-o",
            path.to_str().unwrap(),
        ]);

        let grid = run(&c).unwrap();
        assert_eq!((grid.width(), grid.height()), (12, 4));

        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn run_writes_png_whatever_the_extension() {
        let dir = std::env::temp_dir();
        for name in [
            format!("hitomezashi-{}", process::id()),
            format!("hitomezashi-{}.out", process::id()),
        ] {
            let path = dir.join(name);
            let c = cli(&["-x", "1001", "-y", "011", "-s", "6", "-o", path.to_str().unwrap()]);
            run(&c).unwrap();

            let bytes = std::fs::read(&path).unwrap();
            std::fs::remove_file(&path).unwrap();
            assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        }
    }
}
