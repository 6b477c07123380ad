use crate::config::{Config, SaveEncoding};
use crate::error::{Error, Result};
use crate::geometry::{Rect, Size};

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{imageops, DynamicImage, GenericImageView, ImageReader, Rgb, Rgba, RgbImage, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect as FillRect;
use log::debug;
use std::fs::{self, File};
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

/// Output codecs accepted by `RasterBuffer::save`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
}

impl OutputFormat {
    /// Resolve the codec from a path's extension, case-insensitively.
    ///
    /// Only `png` and `jpg` are recognized, with `jpeg` as an alias of `jpg`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let suffix = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        Self::from_extension(suffix)
    }

    /// Resolve the codec from a bare extension such as `"png"` or `".jpg"`.
    pub fn from_extension(extension: &str) -> Result<Self> {
        let suffix = extension.trim_start_matches('.');
        match suffix.to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            _ => Err(Error::UnsupportedFormat(suffix.to_string())),
        }
    }
}

/// A decoded image paired with its normalized RGBA8 working buffer
///
/// `decoded` keeps the image in the color model it was decoded with (or, for
/// crops, the extracted region). `pixels` is the 8-bit RGBA buffer every
/// operation reads and `draw_rect` writes. `size` always matches `pixels`.
///
/// # Example
/// ```no_run
/// use box_annotate::{RasterBuffer, Rect};
/// use image::Rgba;
///
/// fn example() -> box_annotate::Result<()> {
///     let mut image = RasterBuffer::load("frame_0001.png")?;
///     image.draw_rect(&Rect::new(40, 30, 220, 180), Rgba([255, 0, 0, 255]))?;
///     image.save("frame_0001_boxed.jpg")?;
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct RasterBuffer {
    decoded: DynamicImage,
    pixels: RgbaImage,
    size: Size,
}

impl RasterBuffer {
    /// Load an image from disk and normalize it to RGBA
    ///
    /// The whole file is read, its header probed for dimensions, then the
    /// pixels are decoded.
    ///
    /// # Parameters
    /// * `path: impl AsRef<Path>` - Path to a PNG, JPEG or other enabled format
    ///
    /// # Returns
    /// * `Result<RasterBuffer>` - The loaded buffer, `Error::Io` when the file can't be read
    ///   or `Error::Image` when its contents don't decode
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let buffer = Self::from_bytes(&bytes)?;
        debug!(
            "loaded {} ({}x{}, {:?})",
            path.display(),
            buffer.size.width,
            buffer.size.height,
            buffer.decoded.color()
        );
        Ok(buffer)
    }

    /// Decode an in-memory encoded image and normalize it to RGBA
    ///
    /// # Parameters
    /// * `bytes: &[u8]` - Encoded image data
    ///
    /// # Returns
    /// * `Result<RasterBuffer>` - The decoded buffer or an error
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (width, height) = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()?
            .into_dimensions()?;
        let decoded = image::load_from_memory(bytes)?;

        if decoded.dimensions() != (width, height) {
            return Err(Error::InvalidData(format!(
                "header reports {}x{} but decoded image is {}x{}",
                width,
                height,
                decoded.width(),
                decoded.height()
            )));
        }

        let pixels = to_rgba(&decoded);
        Ok(Self {
            decoded,
            pixels,
            size: Size::new(width, height),
        })
    }

    /// Wrap an already decoded image.
    pub fn from_image(decoded: DynamicImage) -> Self {
        let pixels = to_rgba(&decoded);
        let size = Size::new(pixels.width(), pixels.height());
        Self {
            decoded,
            pixels,
            size,
        }
    }

    /// The image as decoded, before RGBA normalization.
    pub fn decoded(&self) -> &DynamicImage {
        &self.decoded
    }

    /// The normalized RGBA working buffer.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Extract an inclusive sub-rectangle as a new, independently owned buffer
    ///
    /// # Parameters
    /// * `rect: &Rect` - Region in this buffer's pixel coordinates, both corners included
    ///
    /// # Returns
    /// * `Result<RasterBuffer>` - A buffer of size `(xbr-xtl+1, ybr-ytl+1)`, `Error::InvalidRect`
    ///   for an inverted rectangle or `Error::OutOfBounds` when a corner falls outside the image
    ///
    /// # Example
    /// ```rust
    /// use box_annotate::{RasterBuffer, Rect, Size};
    /// use image::{DynamicImage, RgbImage};
    ///
    /// let image = RasterBuffer::from_image(DynamicImage::ImageRgb8(RgbImage::new(300, 300)));
    /// let region = image.crop(&Rect::new(10, 10, 20, 20)).unwrap();
    /// assert_eq!(region.size(), Size::new(11, 11));
    /// ```
    pub fn crop(&self, rect: &Rect) -> Result<RasterBuffer> {
        self.check_rect(rect)?;

        let region = rect.size();
        let extracted = imageops::crop_imm(
            &self.pixels,
            rect.xtl as u32,
            rect.ytl as u32,
            region.width,
            region.height,
        )
        .to_image();
        let cropped = Self::from_image(DynamicImage::ImageRgba8(extracted));

        debug!(
            "cropped ({},{})-({},{}) to {}x{}",
            rect.xtl, rect.ytl, rect.xbr, rect.ybr, cropped.size.width, cropped.size.height
        );
        Ok(cropped)
    }

    /// Stroke width `draw_rect` uses for `rect` with the default configuration.
    pub fn stroke_width(rect: &Rect) -> u32 {
        Self::stroke_width_with_config(rect, &Config::new())
    }

    /// Stroke width for `rect`: the shorter inclusive side divided by
    /// `stroke_divisor`, never below `min_stroke`.
    pub fn stroke_width_with_config(rect: &Rect, config: &Config) -> u32 {
        let shorter = rect.width().min(rect.height()).max(0) as u64;
        let bold = (shorter / config.stroke_divisor.max(1) as u64) as u32;
        bold.max(config.min_stroke)
    }

    /// Draw a hollow border along the edges of `rect` using default settings
    ///
    /// # Parameters
    /// * `rect: &Rect` - Region whose border is drawn, both corners included
    /// * `color: Rgba<u8>` - Border color, alpha-composited onto the image
    ///
    /// # Returns
    /// * `Result<()>` - `Error::InvalidRect` or `Error::OutOfBounds` for unusable rectangles
    pub fn draw_rect(&mut self, rect: &Rect, color: Rgba<u8>) -> Result<()> {
        self.draw_rect_with_config(rect, color, &Config::new())
    }

    /// Draw a hollow border along the edges of `rect` with custom stroke settings
    ///
    /// The region is cropped, the band within `stroke_width` pixels of each edge
    /// is painted with `color`, and the painted band is composited back over
    /// this buffer. Pixels inside the band are left untouched.
    ///
    /// # Parameters
    /// * `rect: &Rect` - Region whose border is drawn, both corners included
    /// * `color: Rgba<u8>` - Border color
    /// * `config: &Config` - Stroke divisor and minimum stroke width
    ///
    /// # Returns
    /// * `Result<()>` - `Error::InvalidRect` or `Error::OutOfBounds` for unusable rectangles
    ///
    /// # Example
    /// ```rust
    /// use box_annotate::{Config, RasterBuffer, Rect};
    /// use image::{DynamicImage, Rgba, RgbImage};
    ///
    /// let mut image = RasterBuffer::from_image(DynamicImage::ImageRgb8(RgbImage::new(64, 64)));
    /// let config = Config::new().set_min_stroke(2);
    /// image.draw_rect_with_config(&Rect::new(8, 8, 40, 40), Rgba([0, 255, 0, 255]), &config).unwrap();
    /// assert_eq!(image.pixels().get_pixel(9, 20), &Rgba([0, 255, 0, 255]));
    /// assert_eq!(image.pixels().get_pixel(10, 20), &Rgba([0, 0, 0, 255]));
    /// ```
    pub fn draw_rect_with_config(
        &mut self,
        rect: &Rect,
        color: Rgba<u8>,
        config: &Config,
    ) -> Result<()> {
        let bold = Self::stroke_width_with_config(rect, config);
        let mut region = self.crop(rect)?;
        let Size { width, height } = region.size;

        paint_band(&mut region.pixels, bold, color);

        let (x0, y0) = (rect.xtl as u32, rect.ytl as u32);
        for (x, y, px) in region.pixels.enumerate_pixels() {
            if in_band(x, y, width, height, bold) {
                composite_over(self.pixels.get_pixel_mut(x0 + x, y0 + y), px);
            }
        }

        debug!(
            "drew border ({},{})-({},{}) stroke={} color={:?}",
            rect.xtl, rect.ytl, rect.xbr, rect.ybr, bold, color.0
        );
        Ok(())
    }

    /// Encode the RGBA buffer to `path` using default settings
    ///
    /// # Parameters
    /// * `path: impl AsRef<Path>` - Destination ending in `.png` or `.jpg`
    ///
    /// # Returns
    /// * `Result<()>` - `Error::UnsupportedFormat` for any other extension, otherwise
    ///   `Error::Io`/`Error::Image` when writing fails
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.save_with_config(path, &Config::new())
    }

    /// Encode the RGBA buffer to `path`
    ///
    /// The extension is validated before the destination is created. With
    /// `SaveEncoding::MatchExtension` the codec follows the extension; with
    /// `SaveEncoding::AlwaysJpeg` JPEG bytes are written for both. JPEG output
    /// has no alpha channel, so translucent pixels are flattened onto black.
    ///
    /// # Parameters
    /// * `path: impl AsRef<Path>` - Destination ending in `.png` or `.jpg`
    /// * `config: &Config` - Encoding policy and JPEG quality
    ///
    /// # Returns
    /// * `Result<()>` - Success or the first error encountered
    pub fn save_with_config(&self, path: impl AsRef<Path>, config: &Config) -> Result<()> {
        let path = path.as_ref();
        let format = match (OutputFormat::from_path(path)?, config.save_encoding) {
            (_, SaveEncoding::AlwaysJpeg) => OutputFormat::Jpeg,
            (format, SaveEncoding::MatchExtension) => format,
        };

        let mut writer = BufWriter::new(File::create(path)?);
        match format {
            OutputFormat::Png => {
                self.pixels.write_with_encoder(PngEncoder::new(&mut writer))?;
            }
            OutputFormat::Jpeg => {
                let rgb = flatten_on_black(&self.pixels);
                let quality = config.jpeg_quality.clamp(1, 100);
                rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut writer, quality))?;
            }
        }
        writer.flush()?;

        debug!(
            "saved {} as {:?} ({}x{})",
            path.display(),
            format,
            self.size.width,
            self.size.height
        );
        Ok(())
    }

    fn check_rect(&self, rect: &Rect) -> Result<()> {
        if !rect.is_valid() {
            return Err(Error::InvalidRect(*rect));
        }
        if !rect.fits_within(self.size) {
            return Err(Error::OutOfBounds {
                rect: *rect,
                size: self.size,
            });
        }
        Ok(())
    }
}

/// Composite `image` over a zeroed RGBA8 buffer of the same bounds.
fn to_rgba(image: &DynamicImage) -> RgbaImage {
    let source = image.to_rgba8();
    let mut rgba = RgbaImage::new(source.width(), source.height());
    for (dst, src) in rgba.pixels_mut().zip(source.pixels()) {
        composite_over(dst, src);
    }
    rgba
}

/// Porter-Duff "over" on straight (non-premultiplied) 8-bit RGBA.
fn composite_over(dst: &mut Rgba<u8>, src: &Rgba<u8>) {
    let sa = src.0[3] as u32;
    if sa == 255 {
        *dst = *src;
        return;
    }
    if sa == 0 {
        return;
    }

    let da = dst.0[3] as u32;
    // Output alpha scaled by 255^2.
    let out_a = sa * 255 + da * (255 - sa);
    for c in 0..3 {
        let num = src.0[c] as u32 * sa * 255 + dst.0[c] as u32 * da * (255 - sa);
        dst.0[c] = ((num + out_a / 2) / out_a) as u8;
    }
    dst.0[3] = ((out_a + 127) / 255) as u8;
}

/// Premultiply every pixel by its alpha, dropping the alpha channel.
fn flatten_on_black(pixels: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(pixels.width(), pixels.height(), |x, y| {
        let Rgba([r, g, b, a]) = *pixels.get_pixel(x, y);
        let scale = |c: u8| ((c as u32 * a as u32 + 127) / 255) as u8;
        Rgb([scale(r), scale(g), scale(b)])
    })
}

fn in_band(x: u32, y: u32, width: u32, height: u32, bold: u32) -> bool {
    x < bold || y < bold || x + bold >= width || y + bold >= height
}

/// Fill the four edge bands of `canvas`, `bold` pixels deep.
fn paint_band(canvas: &mut RgbaImage, bold: u32, color: Rgba<u8>) {
    if bold == 0 {
        return;
    }
    let (width, height) = canvas.dimensions();
    let across = bold.min(height);
    let down = bold.min(width);

    let bands = [
        FillRect::at(0, 0).of_size(width, across),
        FillRect::at(0, (height - across) as i32).of_size(width, across),
        FillRect::at(0, 0).of_size(down, height),
        FillRect::at((width - down) as i32, 0).of_size(down, height),
    ];
    for band in bands {
        draw_filled_rect_mut(canvas, band, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayAlphaImage, GrayImage, Luma, LumaA};

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    fn gradient(width: u32, height: u32) -> RasterBuffer {
        let img = RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
        });
        RasterBuffer::from_image(DynamicImage::ImageRgba8(img))
    }

    #[test]
    fn grayscale_source_is_normalized_to_rgba() {
        let gray = GrayImage::from_pixel(4, 3, Luma([90]));
        let buffer = RasterBuffer::from_image(DynamicImage::ImageLuma8(gray));
        assert_eq!(buffer.size(), Size::new(4, 3));
        assert_eq!(buffer.pixels().dimensions(), (4, 3));
        assert_eq!(buffer.pixels().get_pixel(2, 1), &Rgba([90, 90, 90, 255]));
        assert!(matches!(buffer.decoded(), DynamicImage::ImageLuma8(_)));
    }

    #[test]
    fn transparent_pixels_become_zero() {
        let mut img = GrayAlphaImage::from_pixel(2, 1, LumaA([200, 255]));
        img.put_pixel(1, 0, LumaA([200, 0]));
        let buffer = RasterBuffer::from_image(DynamicImage::ImageLumaA8(img));
        assert_eq!(buffer.pixels().get_pixel(0, 0), &Rgba([200, 200, 200, 255]));
        assert_eq!(buffer.pixels().get_pixel(1, 0), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn over_onto_empty_keeps_straight_color() {
        let mut dst = Rgba([0, 0, 0, 0]);
        composite_over(&mut dst, &Rgba([10, 20, 30, 77]));
        assert_eq!(dst, Rgba([10, 20, 30, 77]));
    }

    #[test]
    fn over_blends_by_source_alpha() {
        let mut dst = Rgba([0, 0, 0, 255]);
        composite_over(&mut dst, &Rgba([255, 255, 255, 128]));
        assert_eq!(dst, Rgba([128, 128, 128, 255]));
    }

    #[test]
    fn crop_uses_inclusive_corners() {
        let source = gradient(300, 300);
        let region = source.crop(&Rect::new(10, 10, 20, 20)).unwrap();
        assert_eq!(region.size(), Size::new(11, 11));
        assert_eq!(region.pixels().dimensions(), (11, 11));
        assert_eq!(region.pixels().get_pixel(0, 0), source.pixels().get_pixel(10, 10));
        assert_eq!(region.pixels().get_pixel(10, 10), source.pixels().get_pixel(20, 20));
    }

    #[test]
    fn crop_full_bounds_keeps_size() {
        let source = gradient(37, 19);
        let region = source.crop(&Rect::full(source.size())).unwrap();
        assert_eq!(region.size(), source.size());
        assert_eq!(region.pixels(), source.pixels());
    }

    #[test]
    fn zero_area_crop_is_one_pixel() {
        let source = gradient(10, 10);
        let region = source.crop(&Rect::new(4, 6, 4, 6)).unwrap();
        assert_eq!(region.size(), Size::new(1, 1));
        assert_eq!(region.pixels().get_pixel(0, 0), source.pixels().get_pixel(4, 6));
    }

    #[test]
    fn crop_outside_bounds_is_rejected() {
        let source = gradient(50, 40);
        for rect in [
            Rect::new(0, 0, 50, 39),
            Rect::new(0, 0, 49, 40),
            Rect::new(-1, 0, 10, 10),
            Rect::new(45, 35, 60, 60),
        ] {
            let err = source.crop(&rect).unwrap_err();
            assert!(
                matches!(err, Error::OutOfBounds { rect: r, size } if r == rect && size == Size::new(50, 40)),
                "unexpected error for {:?}: {}",
                rect,
                err
            );
        }
    }

    #[test]
    fn inverted_crop_is_rejected() {
        let source = gradient(50, 40);
        let err = source.crop(&Rect::new(20, 5, 10, 30)).unwrap_err();
        assert!(matches!(err, Error::InvalidRect(_)));
    }

    #[test]
    fn crop_owns_its_pixels() {
        let source = gradient(30, 30);
        let before = source.pixels().clone();
        let mut region = source.crop(&Rect::new(0, 0, 29, 29)).unwrap();
        region.draw_rect(&Rect::new(0, 0, 29, 29), RED).unwrap();
        assert_eq!(source.pixels(), &before);
        assert_ne!(region.pixels(), &before);
    }

    #[test]
    fn stroke_width_scales_with_shorter_side() {
        assert_eq!(RasterBuffer::stroke_width(&Rect::new(0, 0, 299, 299)), 3);
        assert_eq!(RasterBuffer::stroke_width(&Rect::new(0, 0, 999, 249)), 2);
        assert_eq!(RasterBuffer::stroke_width(&Rect::new(0, 0, 98, 500)), 1);
        assert_eq!(RasterBuffer::stroke_width(&Rect::new(3, 3, 3, 3)), 1);

        let config = Config::new().set_stroke_divisor(10).set_min_stroke(4);
        assert_eq!(RasterBuffer::stroke_width_with_config(&Rect::new(0, 0, 99, 99), &config), 10);
        assert_eq!(RasterBuffer::stroke_width_with_config(&Rect::new(0, 0, 9, 9), &config), 4);
    }

    #[test]
    fn draw_rect_changes_only_border_band() {
        let mut buffer = gradient(300, 300);
        let before = buffer.pixels().clone();
        let rect = Rect::new(50, 60, 249, 259);
        let bold = RasterBuffer::stroke_width(&rect);
        assert_eq!(bold, 2);

        buffer.draw_rect(&rect, RED).unwrap();

        for (x, y, px) in buffer.pixels().enumerate_pixels() {
            let inside = x >= 50 && x <= 249 && y >= 60 && y <= 259;
            let band = inside && in_band(x - 50, y - 60, 200, 200, bold);
            if band {
                assert_eq!(px, &RED, "band pixel ({x},{y})");
            } else {
                assert_eq!(px, before.get_pixel(x, y), "pixel ({x},{y}) changed");
            }
        }
    }

    #[test]
    fn full_image_border_uses_three_pixel_stroke() {
        let mut buffer = gradient(300, 300);
        let before = buffer.pixels().clone();
        buffer.draw_rect(&Rect::new(0, 0, 299, 299), RED).unwrap();

        for offset in 0..3 {
            assert_eq!(buffer.pixels().get_pixel(offset, 150), &RED);
            assert_eq!(buffer.pixels().get_pixel(299 - offset, 150), &RED);
            assert_eq!(buffer.pixels().get_pixel(150, offset), &RED);
            assert_eq!(buffer.pixels().get_pixel(150, 299 - offset), &RED);
        }
        assert_eq!(buffer.pixels().get_pixel(3, 150), before.get_pixel(3, 150));
        assert_eq!(buffer.pixels().get_pixel(296, 150), before.get_pixel(296, 150));
    }

    #[test]
    fn thin_region_is_filled_entirely() {
        let mut buffer = gradient(20, 20);
        buffer.draw_rect(&Rect::new(5, 5, 6, 15), RED).unwrap();
        for y in 5..=15 {
            assert_eq!(buffer.pixels().get_pixel(5, y), &RED);
            assert_eq!(buffer.pixels().get_pixel(6, y), &RED);
        }
        assert_ne!(buffer.pixels().get_pixel(7, 10), &RED);
    }

    #[test]
    fn translucent_border_is_blended() {
        let black = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 255]));
        let mut buffer = RasterBuffer::from_image(DynamicImage::ImageRgba8(black));
        buffer
            .draw_rect(&Rect::new(0, 0, 9, 9), Rgba([255, 255, 255, 128]))
            .unwrap();
        assert_eq!(buffer.pixels().get_pixel(0, 0), &Rgba([128, 128, 128, 255]));
        assert_eq!(buffer.pixels().get_pixel(5, 5), &Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn draw_rect_rejects_bad_rectangles() {
        let mut buffer = gradient(20, 20);
        let before = buffer.pixels().clone();
        assert!(matches!(
            buffer.draw_rect(&Rect::new(0, 0, 20, 10), RED),
            Err(Error::OutOfBounds { .. })
        ));
        assert!(matches!(
            buffer.draw_rect(&Rect::new(10, 10, 5, 5), RED),
            Err(Error::InvalidRect(_))
        ));
        assert_eq!(buffer.pixels(), &before);
    }

    #[test]
    fn output_format_follows_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("a/b.png")).unwrap(), OutputFormat::Png);
        assert_eq!(OutputFormat::from_path(Path::new("b.JPG")).unwrap(), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::from_path(Path::new("b.jpeg")).unwrap(), OutputFormat::Jpeg);
        assert!(matches!(
            OutputFormat::from_path(Path::new("b.gif")),
            Err(Error::UnsupportedFormat(s)) if s == "gif"
        ));
        assert!(matches!(
            OutputFormat::from_path(Path::new("no_extension")),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn bare_extension_resolves_codec() {
        assert_eq!(OutputFormat::from_extension("png").unwrap(), OutputFormat::Png);
        assert_eq!(OutputFormat::from_extension(".Jpg").unwrap(), OutputFormat::Jpeg);
        assert!(matches!(
            OutputFormat::from_extension(".bmp"),
            Err(Error::UnsupportedFormat(s)) if s == "bmp"
        ));
    }

    #[test]
    fn jpeg_flattening_premultiplies_alpha() {
        let mut img = RgbaImage::from_pixel(3, 1, Rgba([200, 100, 50, 255]));
        img.put_pixel(1, 0, Rgba([200, 100, 50, 128]));
        img.put_pixel(2, 0, Rgba([200, 100, 50, 0]));
        let flat = flatten_on_black(&img);
        assert_eq!(flat.get_pixel(0, 0), &Rgb([200, 100, 50]));
        assert_eq!(flat.get_pixel(1, 0), &Rgb([100, 50, 25]));
        assert_eq!(flat.get_pixel(2, 0), &Rgb([0, 0, 0]));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = RasterBuffer::from_bytes(b"definitely not an image").unwrap_err();
        assert!(matches!(err, Error::Image(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = RasterBuffer::load("/nonexistent/input.png").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
