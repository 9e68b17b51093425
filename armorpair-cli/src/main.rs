use armorpair::detect::{build_mask, candidates_from_mask};
use armorpair::draw::{draw_parallel_pairs, draw_rotated_rects, CANDIDATE_COLOR};
use armorpair::io::{load_rgb_image, save_gray_image, save_rgb_image};
use armorpair::{find_parallel_pairs, DetectConfig, DetectMode, PairConfig, RotatedRect};
use clap::Parser;
use image::{GrayImage, RgbImage};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Armor light-bar detection and pairing (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum DetectModeConfig {
    Gray,
    Hsv,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct DetectConfigJson {
    mode: DetectModeConfig,
    gray_threshold: u8,
    hsv_lower: [u8; 3],
    hsv_upper: [u8; 3],
    open_kernel: u32,
    min_area: f32,
    min_aspect: f32,
    max_aspect: f32,
}

impl Default for DetectConfigJson {
    fn default() -> Self {
        let cfg = DetectConfig::default();
        let gray_threshold = match cfg.mode {
            DetectMode::Gray { threshold } => threshold,
            DetectMode::Hsv { .. } => 222,
        };
        let (hsv_lower, hsv_upper) = match DetectMode::BLUE_HSV {
            DetectMode::Hsv { lower, upper } => (lower, upper),
            DetectMode::Gray { .. } => ([0; 3], [255; 3]),
        };
        Self {
            mode: DetectModeConfig::Gray,
            gray_threshold,
            hsv_lower,
            hsv_upper,
            open_kernel: cfg.open_kernel,
            min_area: cfg.min_area,
            min_aspect: cfg.min_aspect,
            max_aspect: cfg.max_aspect,
        }
    }
}

impl From<&DetectConfigJson> for DetectConfig {
    fn from(value: &DetectConfigJson) -> Self {
        let mode = match value.mode {
            DetectModeConfig::Gray => DetectMode::Gray {
                threshold: value.gray_threshold,
            },
            DetectModeConfig::Hsv => DetectMode::Hsv {
                lower: value.hsv_lower,
                upper: value.hsv_upper,
            },
        };
        Self {
            mode,
            open_kernel: value.open_kernel,
            min_area: value.min_area,
            min_aspect: value.min_aspect,
            max_aspect: value.max_aspect,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct PairConfigJson {
    angle_threshold_deg: f32,
    min_scale: f32,
    max_scale: f32,
    min_center_angle_deg: f32,
    min_aspect: f32,
    parallel: bool,
}

impl Default for PairConfigJson {
    fn default() -> Self {
        let cfg = PairConfig::default();
        Self {
            angle_threshold_deg: cfg.angle_threshold_deg,
            min_scale: cfg.min_scale,
            max_scale: cfg.max_scale,
            min_center_angle_deg: cfg.min_center_angle_deg,
            min_aspect: cfg.min_aspect,
            parallel: cfg.parallel,
        }
    }
}

impl From<&PairConfigJson> for PairConfig {
    fn from(value: &PairConfigJson) -> Self {
        Self {
            angle_threshold_deg: value.angle_threshold_deg,
            min_scale: value.min_scale,
            max_scale: value.max_scale,
            min_center_angle_deg: value.min_center_angle_deg,
            min_aspect: value.min_aspect,
            parallel: value.parallel,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Config {
    image_path: Option<String>,
    rectangles: Option<Vec<RectRecord>>,
    output_path: Option<String>,
    annotated_path: Option<String>,
    mask_path: Option<String>,
    detect: DetectConfigJson,
    pair: PairConfigJson,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
struct RectRecord {
    cx: f32,
    cy: f32,
    width: f32,
    height: f32,
    angle_deg: f32,
}

impl From<RectRecord> for RotatedRect {
    fn from(value: RectRecord) -> Self {
        RotatedRect::new(value.cx, value.cy, value.width, value.height, value.angle_deg)
    }
}

impl From<&RotatedRect> for RectRecord {
    fn from(value: &RotatedRect) -> Self {
        Self {
            cx: value.center.x,
            cy: value.center.y,
            width: value.size.width,
            height: value.size.height,
            angle_deg: value.angle_deg,
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    rectangles: Vec<RectRecord>,
    pairs: Vec<(usize, usize)>,
}

/// Everything one config produces; `main` writes it out.
struct Run {
    output: Output,
    mask: Option<GrayImage>,
    annotated: Option<RgbImage>,
}

fn run(config: &Config) -> Result<Run, Box<dyn Error>> {
    let detect_cfg = DetectConfig::from(&config.detect);
    let pair_cfg = PairConfig::from(&config.pair);
    pair_cfg.validate()?;

    let (image, mask, rects) = match (&config.image_path, &config.rectangles) {
        (Some(_), Some(_)) => {
            return Err("set either image_path or rectangles in the config, not both".into());
        }
        (None, None) => {
            return Err("image_path or rectangles must be set in the config".into());
        }
        (None, Some(records)) => {
            if config.annotated_path.is_some() {
                return Err("annotated_path requires image_path".into());
            }
            let rects: Vec<RotatedRect> = records.iter().copied().map(RotatedRect::from).collect();
            (None, None, rects)
        }
        (Some(path), None) => {
            detect_cfg.validate()?;
            let image = load_rgb_image(path)?;
            let mask = build_mask(&image, &detect_cfg)?;
            let rects = candidates_from_mask(&mask, &detect_cfg);
            (Some(image), Some(mask), rects)
        }
    };

    let pairs = find_parallel_pairs(&rects, &pair_cfg);
    tracing::info!(candidates = rects.len(), pairs = pairs.len(), "matching done");

    let annotated = match (image, &config.annotated_path) {
        (Some(mut canvas), Some(_)) => {
            draw_rotated_rects(&mut canvas, &rects, CANDIDATE_COLOR, 2);
            draw_parallel_pairs(&mut canvas, &rects, &pairs);
            Some(canvas)
        }
        _ => None,
    };

    Ok(Run {
        output: Output {
            rectangles: rects.iter().map(RectRecord::from).collect(),
            pairs: pairs.into_iter().map(<(usize, usize)>::from).collect(),
        },
        mask: mask.filter(|_| config.mask_path.is_some()),
        annotated,
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("armorpair=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    let result = run(&config)?;

    if let (Some(mask), Some(path)) = (&result.mask, &config.mask_path) {
        save_gray_image(mask, path)?;
    }
    if let (Some(canvas), Some(path)) = (&result.annotated, &config.annotated_path) {
        save_rgb_image(canvas, path)?;
    }

    let json = serde_json::to_string_pretty(&result.output)?;
    match &config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
