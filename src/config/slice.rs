//! Runtime configuration for the CLI harness.
//!
//! A JSON config file can set everything; command-line arguments override
//! individual fields on top of it. The core slicer never reads configuration
//! itself; the binary resolves these structs into `SlicerParams`/`GridSpec`.

use crate::image::Rgba8;
use crate::slicer::bevel::BevelParams;
use crate::slicer::GridSpec;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "input")]
    pub input_path: PathBuf,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub bevel: BevelConfig,
    #[serde(default)]
    pub parallel: bool,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { rows: 4, cols: 4 }
    }
}

impl GridConfig {
    pub fn resolve(&self) -> GridSpec {
        GridSpec::new(self.rows, self.cols)
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct BevelConfig {
    pub highlight: Option<Rgba8>,
    pub shadow: Option<Rgba8>,
    pub thickness: Option<usize>,
}

impl BevelConfig {
    pub fn resolve(&self) -> BevelParams {
        let mut p = BevelParams::default();
        if let Some(v) = self.highlight {
            p.highlight = v;
        }
        if let Some(v) = self.shadow {
            p.shadow = v;
        }
        if let Some(v) = self.thickness {
            p.thickness = v;
        }
        p
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    #[serde(rename = "pieces_dir")]
    pub pieces_dir: PathBuf,
    pub manifest_out: Option<PathBuf>,
    pub clear_previous: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pieces_dir: PathBuf::from("output"),
            manifest_out: None,
            clear_previous: true,
        }
    }
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

/// Parse the process arguments into a `RuntimeConfig`.
pub fn parse_cli(program: &str) -> Result<RuntimeConfig, String> {
    parse_args(program, env::args().skip(1))
}

fn parse_args(
    program: &str,
    mut args: impl Iterator<Item = String>,
) -> Result<RuntimeConfig, String> {
    let mut config_path: Option<PathBuf> = None;
    let mut input: Option<PathBuf> = None;
    let mut rows: Option<usize> = None;
    let mut cols: Option<usize> = None;
    let mut out_dir: Option<PathBuf> = None;
    let mut manifest: Option<PathBuf> = None;
    let mut keep_previous = false;
    let mut parallel = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args.next().ok_or_else(|| missing_value("--config", program))?;
                config_path = Some(PathBuf::from(value));
            }
            "--out-dir" => {
                let value = args.next().ok_or_else(|| missing_value("--out-dir", program))?;
                out_dir = Some(PathBuf::from(value));
            }
            "--manifest" => {
                let value = args.next().ok_or_else(|| missing_value("--manifest", program))?;
                manifest = Some(PathBuf::from(value));
            }
            "--keep-previous" => keep_previous = true,
            "--parallel" => parallel = true,
            "--help" | "-h" => return Err(usage(program)),
            flag if flag.starts_with("--") => {
                return Err(format!("Unknown option {flag}\n{}", usage(program)));
            }
            positional => {
                if input.is_none() {
                    input = Some(PathBuf::from(positional));
                } else if rows.is_none() {
                    rows = Some(parse_count(positional, "rows", program)?);
                } else if cols.is_none() {
                    cols = Some(parse_count(positional, "cols", program)?);
                } else {
                    return Err(format!(
                        "Unexpected argument {positional}\n{}",
                        usage(program)
                    ));
                }
            }
        }
    }

    let mut config = match config_path {
        Some(path) => load_config(&path)?,
        None => {
            let input_path = input
                .take()
                .ok_or_else(|| format!("Missing <image> argument\n{}", usage(program)))?;
            RuntimeConfig {
                input_path,
                grid: GridConfig::default(),
                bevel: BevelConfig::default(),
                parallel: false,
                output: OutputConfig::default(),
            }
        }
    };

    // CLI arguments win over the config file.
    if let Some(path) = input {
        config.input_path = path;
    }
    if let Some(v) = rows {
        config.grid.rows = v;
    }
    if let Some(v) = cols {
        config.grid.cols = v;
    }
    if let Some(dir) = out_dir {
        config.output.pieces_dir = dir;
    }
    if let Some(path) = manifest {
        config.output.manifest_out = Some(path);
    }
    if keep_previous {
        config.output.clear_previous = false;
    }
    if parallel {
        config.parallel = true;
    }
    Ok(config)
}

fn parse_count(value: &str, what: &str, program: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| format!("Invalid {what} value {value:?}\n{}", usage(program)))
}

fn missing_value(flag: &str, program: &str) -> String {
    format!("Missing value for {flag}\n{}", usage(program))
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {program} <image> [rows] [cols] [options]\n\
         \n\
         Options:\n\
         \x20 --out-dir DIR      directory for piece files (default: output)\n\
         \x20 --manifest FILE    write slice metadata as JSON\n\
         \x20 --config FILE      JSON config; CLI arguments override it\n\
         \x20 --keep-previous    do not clear stale piece files before slicing\n\
         \x20 --parallel         render tiles on the rayon pool"
    )
}
