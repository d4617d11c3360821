use crate::math::Spectrum;

/// Converts a linear color component to a byte, clamping it to `[0, 1]` first.
pub fn quantize(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Pixel storage for a render.
///
/// Pixels are addressed in device coordinates where `y = 0` is the bottom row.
pub struct Film {
    width: u32,
    height: u32,
    pixels: Vec<Spectrum<f32>>,
    // Set when the pixels no longer match the scene parameters
    stale: bool,
}

impl Film {
    /// Creates a new black `Film`. It starts out stale as nothing has been rendered.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Spectrum::zeros(); (width as usize) * (height as usize)],
            stale: true,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the pixels in row-major order, bottom row first.
    pub fn pixels(&self) -> &[Spectrum<f32>] {
        &self.pixels
    }

    /// Reallocates the pixels if the size changed. Returns `true` if it did.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == self.width && height == self.height {
            return false;
        }
        self.width = width;
        self.height = height;
        self.pixels = vec![Spectrum::zeros(); (width as usize) * (height as usize)];
        self.stale = true;
        true
    }

    pub fn mark_stale(&mut self) {
        self.stale = true;
    }

    pub fn clear_stale(&mut self) {
        self.stale = false;
    }

    /// Returns `true` if the pixels need to be rendered again.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn pixel(&self, x: u32, y: u32) -> Spectrum<f32> {
        self.pixels[self.offset(x, y)]
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Spectrum<f32>) {
        let offset = self.offset(x, y);
        self.pixels[offset] = color;
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "Pixel ({}, {}) is outside a {}x{} film",
            x,
            y,
            self.width,
            self.height
        );
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Returns the pixels as RGB bytes in row-major order, top row first.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut ret = Vec::with_capacity(self.pixels.len() * 3);
        for row in self.pixels.chunks(self.width.max(1) as usize).rev() {
            for c in row {
                ret.extend_from_slice(&[quantize(c.r), quantize(c.g), quantize(c.b)]);
            }
        }
        ret
    }

    /// Returns the pixels as linear RGB floats in row-major order, top row first.
    pub fn to_rgb32f(&self) -> Vec<(f32, f32, f32)> {
        self.pixels
            .chunks(self.width.max(1) as usize)
            .rev()
            .flat_map(|row| row.iter().map(|c| (c.r, c.g, c.b)))
            .collect()
    }
}
