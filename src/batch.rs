//! Sequential annotation of every image named in a label list.
//!
//! A failed image is logged and skipped; only problems with the output
//! directory, the label list or the configuration stop the run.
use crate::config::BatchConfig;
use crate::error::{Error, Result};
use crate::fsys::{clean_dir, ensure_dir};
use crate::label::{parse_labels, BoxLabel};
use crate::lines::read_lines;
use crate::raster::{OutputFormat, RasterBuffer};

use image::Rgba;
use log::{info, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    /// Images written to the output directory
    pub processed: usize,
    /// Images that failed to load, draw or save
    pub skipped: usize,
    /// Boxes drawn across all processed images
    pub boxes: usize,
}

pub fn run(config: &BatchConfig) -> Result<BatchReport> {
    let extension = config.extension.trim_start_matches('.');
    OutputFormat::from_extension(extension)?;

    if config.clean_output {
        clean_dir(&config.output_dir)?;
    } else {
        ensure_dir(&config.output_dir)?;
    }

    let lines = read_lines(&config.labels)?;
    let labels = parse_labels(&lines)?;
    let base = config.labels.parent().unwrap_or_else(|| Path::new(""));
    info!(
        "annotating {} boxes from {} into {}",
        labels.len(),
        config.labels.display(),
        config.output_dir.display()
    );

    let mut report = BatchReport::default();
    for (image, group) in group_by_image(&labels) {
        match annotate_image(config, base, extension, image, &group) {
            Ok(output) => {
                report.processed += 1;
                report.boxes += group.len();
                info!("{} -> {} ({} boxes)", image.display(), output.display(), group.len());
            }
            Err(err) => {
                report.skipped += 1;
                warn!("skipping {}: {}", image.display(), err);
            }
        }
    }

    info!(
        "done: {} processed, {} skipped, {} boxes",
        report.processed, report.skipped, report.boxes
    );
    Ok(report)
}

/// Collect the boxes of each image, in the order images first appear.
fn group_by_image(labels: &[BoxLabel]) -> Vec<(&Path, Vec<&BoxLabel>)> {
    let mut index: HashMap<&Path, usize> = HashMap::new();
    let mut groups: Vec<(&Path, Vec<&BoxLabel>)> = Vec::new();
    for label in labels {
        let slot = *index.entry(label.image.as_path()).or_insert_with(|| {
            groups.push((label.image.as_path(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(label);
    }
    groups
}

fn annotate_image(
    config: &BatchConfig,
    base: &Path,
    extension: &str,
    image: &Path,
    group: &[&BoxLabel],
) -> Result<PathBuf> {
    let source = base.join(image);
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::InvalidData(format!("no file name in {}", source.display())))?;

    let mut image = RasterBuffer::load(&source)?;

    if config.save_crops {
        for (index, label) in group.iter().enumerate() {
            let crop_path = config
                .output_dir
                .join(format!("{}_{}.{}", stem, index, extension));
            image
                .crop(&label.rect)?
                .save_with_config(&crop_path, &config.raster)?;
        }
    }

    let color = Rgba(config.color);
    for label in group {
        image.draw_rect_with_config(&label.rect, color, &config.raster)?;
    }

    let output = config.output_dir.join(format!("{}.{}", stem, extension));
    image.save_with_config(&output, &config.raster)?;
    Ok(output)
}
