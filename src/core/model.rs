use image::RgbaImage;

/// A single screen pixel color. Equality is exact, channel by channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// One configured set of colors. Matching is membership-only: order does not
/// matter, duplicates are harmless, and an empty combination matches nothing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorCombination {
    pub colors: Vec<Color>,
}

impl ColorCombination {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }
}

/// Immutable row-major pixel grid for one captured screen.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    /// `pixels` is row-major, length `width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Color>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Converts a captured RGBA image, discarding the alpha channel.
    pub fn from_image(image: &RgbaImage) -> Self {
        let pixels = image
            .pixels()
            .map(|p| Color::new(p[0], p[1], p[2]))
            .collect();
        Self {
            width: image.width(),
            height: image.height(),
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[y as usize * self.width as usize + x as usize]
    }
}
