use chrono::{DateTime, Utc};
use image::RgbaImage;
use thiserror::Error;

use super::model::PixelBuffer;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("no monitors found")]
    NoMonitor,
    #[error("screen capture failed: {0}")]
    Backend(#[from] xcap::XCapError),
}

/// One captured screen image together with its capture time. The watch loop
/// converts it to a [`PixelBuffer`] for scanning; the snapshot task writes it
/// out as-is.
pub struct Frame {
    pub image: RgbaImage,
    pub taken_at: DateTime<Utc>,
}

impl Frame {
    pub fn new(image: RgbaImage, taken_at: DateTime<Utc>) -> Self {
        Self { image, taken_at }
    }

    pub fn pixels(&self) -> PixelBuffer {
        PixelBuffer::from_image(&self.image)
    }
}

/// Seam over the platform capture primitive so the loops can run against a
/// stub in tests. Capture failure is a per-cycle condition, never fatal.
pub trait ScreenSource {
    fn capture(&self) -> Result<Frame, CaptureError>;
}

/// Captures the primary monitor, falling back to the first monitor found.
pub struct PrimaryScreen;

impl ScreenSource for PrimaryScreen {
    fn capture(&self) -> Result<Frame, CaptureError> {
        let monitors = xcap::Monitor::all()?;
        let monitor = monitors
            .iter()
            .find(|m| m.is_primary())
            .or_else(|| monitors.first())
            .ok_or(CaptureError::NoMonitor)?;
        let image = monitor.capture_image()?;
        Ok(Frame::new(image, Utc::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Color;

    #[test]
    fn frame_exposes_its_pixels() {
        let img = RgbaImage::from_pixel(4, 2, image::Rgba([9, 8, 7, 255]));
        let frame = Frame::new(img, Utc::now());
        let buffer = frame.pixels();
        assert_eq!(buffer.width(), 4);
        assert_eq!(buffer.height(), 2);
        assert_eq!(buffer.get(3, 1), Color::new(9, 8, 7));
    }
}
