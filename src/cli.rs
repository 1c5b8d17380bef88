// src/cli.rs

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use kaos::config::{parse_preset_key, RenderConfig, DEFAULT_POINT_RADIUS, MAX_ITERATIONS};
use kaos::PresetConfig;

#[derive(Parser, Debug)]
#[command(name = "kaos")]
#[command(about = "Renders chaos game fractals on regular polygons into BMP files")]
pub struct Cli {
    /// Preset number; anything that is not an integer selects preset 0
    #[arg(allow_negative_numbers = true, allow_hyphen_values = true)]
    pub preset: Option<String>,

    /// Points written to the image
    #[arg(long, default_value_t = MAX_ITERATIONS)]
    pub iterations: usize,

    /// Radius of the disk stamped for each point (0 = single pixel)
    #[arg(long, default_value_t = DEFAULT_POINT_RADIUS)]
    pub radius: u32,

    /// RNG seed for reproducible images
    #[arg(long, env = "KAOS_SEED")]
    pub seed: Option<u64>,

    /// Directory the kaos_<preset>.bmp files are written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Render every preset in parallel
    #[arg(long)]
    pub all: bool,

    /// Print the preset table and exit
    #[arg(long)]
    pub list: bool,
}

impl Cli {
    pub fn to_config(&self) -> RenderConfig {
        RenderConfig {
            preset_key: parse_preset_key(self.preset.as_deref()),
            iterations: self.iterations,
            point_radius: self.radius,
            seed: self.seed,
            output_dir: self.output_dir.clone(),
            ..RenderConfig::default()
        }
    }
}

/// Writes the preset table, one row per key.
pub fn write_presets<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{:>4}  {:>5}  {:<16}  {:>6}", "key", "edges", "rule", "ratio")?;
    for preset in PresetConfig::all() {
        writeln!(
            out,
            "{:>4}  {:>5}  {:<16}  {:>6}",
            preset.key,
            preset.edge_count,
            preset.rule.to_string(),
            preset.ratio
        )?;
    }
    Ok(())
}

pub fn print_presets() -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_presets(&mut out)?;
    out.flush()
}
