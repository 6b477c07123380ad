use crate::error::{Error, Result};
use crate::geometry::Rect;
use std::path::PathBuf;

/// One bounding box from a label list
///
/// The text form is `<image_path> <xtl> <ytl> <xbr> <ybr>`, fields separated
/// by whitespace, corners inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxLabel {
    pub image: PathBuf,
    pub rect: Rect,
}

impl BoxLabel {
    /// Parse one label line. Returns `Ok(None)` for blank lines and `#` comments.
    pub fn parse(line: &str) -> Result<Option<BoxLabel>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 5 {
            return Err(Error::InvalidData(format!(
                "expected `<image> <xtl> <ytl> <xbr> <ybr>`, got {:?}",
                line
            )));
        }

        let mut coords = [0i32; 4];
        for (slot, field) in coords.iter_mut().zip(&fields[1..]) {
            *slot = field.parse().map_err(|_| {
                Error::InvalidData(format!("bad coordinate {:?} in {:?}", field, line))
            })?;
        }

        Ok(Some(BoxLabel {
            image: PathBuf::from(fields[0]),
            rect: Rect::new(coords[0], coords[1], coords[2], coords[3]),
        }))
    }
}

/// Parse every line, skipping blanks and comments.
pub fn parse_labels<S: AsRef<str>>(lines: &[S]) -> Result<Vec<BoxLabel>> {
    let mut labels = Vec::with_capacity(lines.len());
    for line in lines {
        if let Some(label) = BoxLabel::parse(line.as_ref())? {
            labels.push(label);
        }
    }
    Ok(labels)
}
