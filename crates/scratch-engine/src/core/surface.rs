//! The erasable foil mask covering one focused card.
//!
//! An RGBA8 buffer sized to the card container at initialization time.
//! Painting only ever happens once, at construction; after that the surface
//! can only lose opacity through `erase_circle`.

use glam::Vec2;

use crate::components::card::OverlayTone;
use crate::core::rng::Rng;

/// Single-pixel speckles scattered over the base tone.
const SPECKLE_COUNT: u32 = 5000;
/// Speckle grey values are sampled uniformly from [140, 200).
const SPECKLE_SHADE_MIN: u32 = 140;
const SPECKLE_SHADE_SPAN: u32 = 60;
/// Speckles are blended source-over at this alpha.
const SPECKLE_ALPHA: f32 = 0.6;

/// Per-session erasable mask. One per focused card; never shared.
pub struct ScratchSurface {
    width: u32,
    height: u32,
    /// RGBA8, row-major. Alpha 0 means the pixel has been scratched away.
    pixels: Vec<u8>,
}

impl ScratchSurface {
    /// Allocate a surface and paint the foil texture: a flat base tone
    /// followed by a scatter of semi-transparent grey speckles.
    pub fn new(width: u32, height: u32, tone: OverlayTone, rng: &mut Rng) -> Self {
        let len = (width as usize) * (height as usize) * 4;
        let mut surface = Self {
            width,
            height,
            pixels: vec![0; len],
        };
        surface.paint_foil(tone, rng);
        surface
    }

    fn paint_foil(&mut self, tone: OverlayTone, rng: &mut Rng) {
        let [r, g, b] = tone.rgb();
        for px in self.pixels.chunks_exact_mut(4) {
            px[0] = r;
            px[1] = g;
            px[2] = b;
            px[3] = 255;
        }

        if self.width == 0 || self.height == 0 {
            return;
        }
        for _ in 0..SPECKLE_COUNT {
            let x = rng.next_int(self.width);
            let y = rng.next_int(self.height);
            let shade = (SPECKLE_SHADE_MIN + rng.next_int(SPECKLE_SHADE_SPAN)) as f32;
            let idx = ((y * self.width + x) * 4) as usize;
            for c in 0..3 {
                let base = self.pixels[idx + c] as f32;
                self.pixels[idx + c] =
                    (shade * SPECKLE_ALPHA + base * (1.0 - SPECKLE_ALPHA)) as u8;
            }
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes for host blitting (canvas putImageData).
    pub fn data(&self) -> &[u8] {
        &self.pixels
    }

    /// Alpha of the pixel at (x, y), or 0 if out of bounds.
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.pixels[((y * self.width + x) * 4 + 3) as usize]
    }

    /// Erase a filled circle centered at `center` (surface-local coordinates).
    ///
    /// Destination-out compositing: every pixel within the radius becomes
    /// fully transparent. Never adds opacity back; pixels outside the circle
    /// are untouched.
    pub fn erase_circle(&mut self, center: Vec2, radius: f32) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        if center.x + radius < 0.0
            || center.y + radius < 0.0
            || center.x - radius >= self.width as f32
            || center.y - radius >= self.height as f32
        {
            return;
        }
        let r_sq = radius * radius;
        let x_min = (center.x - radius).floor().max(0.0) as u32;
        let x_max = (((center.x + radius).ceil() as i64).min(self.width as i64 - 1)).max(0) as u32;
        let y_min = (center.y - radius).floor().max(0.0) as u32;
        let y_max = (((center.y + radius).ceil() as i64).min(self.height as i64 - 1)).max(0) as u32;

        for y in y_min..=y_max {
            for x in x_min..=x_max {
                let dx = x as f32 - center.x;
                let dy = y as f32 - center.y;
                if dx * dx + dy * dy <= r_sq {
                    let idx = ((y * self.width + x) * 4) as usize;
                    self.pixels[idx] = 0;
                    self.pixels[idx + 1] = 0;
                    self.pixels[idx + 2] = 0;
                    self.pixels[idx + 3] = 0;
                }
            }
        }
    }

    /// Number of fully-transparent pixels.
    pub fn transparent_count(&self) -> usize {
        self.pixels.chunks_exact(4).filter(|px| px[3] == 0).count()
    }

    /// Fraction of the surface scratched away, in percent [0, 100].
    /// A zero-area surface reports 0 rather than NaN.
    pub fn coverage_percent(&self) -> f32 {
        let total = (self.width as usize) * (self.height as usize);
        if total == 0 {
            return 0.0;
        }
        (self.transparent_count() as f32 / total as f32) * 100.0
    }
}
