use crate::geometry::{Rect, Size};

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Image(image::ImageError),
    UnsupportedFormat(String),
    OutOfBounds { rect: Rect, size: Size },
    InvalidRect(Rect),
    InvalidData(String),
    Config(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Image(err) => write!(f, "Image processing error: {}", err),
            Error::UnsupportedFormat(suffix) => write!(f, "Unsupported format: {:?}", suffix),
            Error::OutOfBounds { rect, size } => write!(
                f,
                "Rectangle ({},{})-({},{}) exceeds image bounds {}x{}",
                rect.xtl, rect.ytl, rect.xbr, rect.ybr, size.width, size.height
            ),
            Error::InvalidRect(rect) => write!(
                f,
                "Inverted rectangle ({},{})-({},{})",
                rect.xtl, rect.ytl, rect.xbr, rect.ybr
            ),
            Error::InvalidData(msg) => write!(f, "Invalid data: {}", msg),
            Error::Config(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Image(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Image(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
