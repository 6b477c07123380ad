use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// How `RasterBuffer::save` picks the output codec
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveEncoding {
    /// PNG for `.png`, JPEG for `.jpg`/`.jpeg`
    MatchExtension,
    /// JPEG bytes regardless of the validated extension
    AlwaysJpeg,
}

/// Configuration options for raster operations
///
/// This struct holds the tunables used when drawing borders and encoding
/// images. The defaults give a one-pixel stroke per hundred pixels of the
/// shorter side and maximum JPEG quality.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Divisor applied to the shorter side of a rectangle to get the stroke width
    ///
    /// A 300x450 rectangle with the default of 100 gets a 3 pixel border.
    pub stroke_divisor: u32,

    /// Lower bound for the stroke width in pixels
    pub min_stroke: u32,

    /// JPEG encoder quality, 1-100
    pub jpeg_quality: u8,

    /// Codec selection for `save`
    pub save_encoding: SaveEncoding,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stroke_divisor: 100,
            min_stroke: 1,
            jpeg_quality: 100,
            save_encoding: SaveEncoding::MatchExtension,
        }
    }
}

impl Config {
    // Create a new instance
    pub fn new() -> Self {
        Self::default()
    }

    // Set stroke divisor, zero is treated as one
    pub fn set_stroke_divisor(mut self, divisor: u32) -> Self {
        self.stroke_divisor = divisor.max(1);
        self
    }

    // Set minimum stroke width
    pub fn set_min_stroke(mut self, width: u32) -> Self {
        self.min_stroke = width;
        self
    }

    // Set JPEG quality, clamped to 1-100
    pub fn set_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality.clamp(1, 100);
        self
    }

    // Set save encoding policy
    pub fn set_save_encoding(mut self, encoding: SaveEncoding) -> Self {
        self.save_encoding = encoding;
        self
    }
}

fn default_color() -> [u8; 4] {
    [255, 0, 0, 255]
}

fn default_extension() -> String {
    "jpg".to_string()
}

/// Settings for one `annotate` run, read from JSON
#[derive(Clone, Debug, Deserialize)]
pub struct BatchConfig {
    /// Label list, one `<image> <xtl> <ytl> <xbr> <ybr>` entry per line
    pub labels: PathBuf,
    pub output_dir: PathBuf,
    #[serde(default)]
    pub clean_output: bool,
    #[serde(default = "default_color")]
    pub color: [u8; 4],
    #[serde(default)]
    pub save_crops: bool,
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default)]
    pub raster: Config,
}

pub fn load_config(path: &Path) -> Result<BatchConfig> {
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Failed to read config {}: {e}", path.display())))?;
    parse_config(&contents)
        .map_err(|e| Error::Config(format!("Failed to parse config {}: {e}", path.display())))
}

fn parse_config(contents: &str) -> serde_json::Result<BatchConfig> {
    serde_json::from_str(contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_clamps_values() {
        let config = Config::new()
            .set_stroke_divisor(0)
            .set_jpeg_quality(0)
            .set_min_stroke(2);
        assert_eq!(config.stroke_divisor, 1);
        assert_eq!(config.jpeg_quality, 1);
        assert_eq!(config.min_stroke, 2);
    }

    #[test]
    fn batch_config_fills_defaults() {
        let config = parse_config(r#"{ "labels": "labels.txt", "output_dir": "out" }"#).unwrap();
        assert_eq!(config.labels, PathBuf::from("labels.txt"));
        assert!(!config.clean_output);
        assert!(!config.save_crops);
        assert_eq!(config.color, [255, 0, 0, 255]);
        assert_eq!(config.extension, "jpg");
        assert_eq!(config.raster, Config::default());
    }

    #[test]
    fn batch_config_reads_raster_section() {
        let json = r#"{
            "labels": "l.txt",
            "output_dir": "o",
            "extension": "png",
            "raster": { "stroke_divisor": 50, "save_encoding": "always_jpeg" }
        }"#;
        let config = parse_config(json).unwrap();
        assert_eq!(config.extension, "png");
        assert_eq!(config.raster.stroke_divisor, 50);
        assert_eq!(config.raster.min_stroke, 1);
        assert_eq!(config.raster.save_encoding, SaveEncoding::AlwaysJpeg);
    }

    #[test]
    fn missing_config_file_is_config_error() {
        let err = load_config(Path::new("/nonexistent/annotate.json")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
