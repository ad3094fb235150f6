//! Sprite decoding and half-block rendering
//!
//! Sprites arrive as PNG bytes. They are decoded once, cropped to the opaque
//! bounding box and stored as raw RGBA. Rendering maps two pixel rows onto
//! one terminal row using upper/lower half blocks.

use image::GenericImageView;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const ALPHA_CUTOFF: u8 = 64;
const UPPER_HALF: &str = "\u{2580}";
const LOWER_HALF: &str = "\u{2584}";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SpriteData {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA, `width * height * 4` bytes
    pub pixels: Vec<u8>,
}

impl SpriteData {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = ((y * self.width + x) * 4) as usize;
        let px = self.pixels.get(offset..offset + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    fn opaque_color(&self, x: u32, y: u32) -> Option<Color> {
        let [r, g, b, a] = self.pixel(x, y)?;
        (a >= ALPHA_CUTOFF).then_some(Color::Rgb(r, g, b))
    }

    /// Terminal cells needed to draw the sprite at `scale` pixels per column
    pub fn cell_size(&self, scale: u32) -> (u16, u16) {
        let scale = scale.max(1);
        let cols = self.width.div_ceil(scale);
        let rows = self.height.div_ceil(scale * 2);
        (cols as u16, rows as u16)
    }

    /// Smallest integer downscale that fits the sprite into `cols` x `rows`
    pub fn fit_scale(&self, cols: u16, rows: u16) -> Option<u32> {
        if cols == 0 || rows == 0 || self.width == 0 || self.height == 0 {
            return None;
        }
        let by_width = self.width.div_ceil(cols as u32);
        let by_height = self.height.div_ceil(rows as u32 * 2);
        Some(by_width.max(by_height).max(1))
    }

    pub fn to_text(&self, scale: u32) -> Text<'static> {
        let scale = scale.max(1);
        let (cols, rows) = self.cell_size(scale);
        let mut lines = Vec::with_capacity(rows as usize);
        for row in 0..rows as u32 {
            let top_y = row * 2 * scale;
            let bottom_y = top_y + scale;
            let spans: Vec<Span<'static>> = (0..cols as u32)
                .map(|col| {
                    let x = col * scale;
                    let top = self.opaque_color(x, top_y);
                    let bottom = self.opaque_color(x, bottom_y);
                    match (top, bottom) {
                        (Some(top), Some(bottom)) => {
                            Span::styled(UPPER_HALF, Style::default().fg(top).bg(bottom))
                        }
                        (Some(top), None) => Span::styled(UPPER_HALF, Style::default().fg(top)),
                        (None, Some(bottom)) => {
                            Span::styled(LOWER_HALF, Style::default().fg(bottom))
                        }
                        (None, None) => Span::raw(" "),
                    }
                })
                .collect();
            lines.push(Line::from(spans));
        }
        Text::from(lines)
    }
}

pub fn decode_sprite(bytes: &[u8]) -> Result<SpriteData, String> {
    let image = image::load_from_memory(bytes).map_err(|err| err.to_string())?;
    let (width, height) = image.dimensions();
    let rgba = image.to_rgba8();
    Ok(crop_to_content(SpriteData {
        width,
        height,
        pixels: rgba.into_raw(),
    }))
}

/// Trim fully transparent margins; an empty image is returned as-is
pub fn crop_to_content(sprite: SpriteData) -> SpriteData {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0;
    let mut max_y = 0;
    for y in 0..sprite.height {
        for x in 0..sprite.width {
            if sprite.opaque_color(x, y).is_some() {
                min_x = min_x.min(x);
                min_y = min_y.min(y);
                max_x = max_x.max(x);
                max_y = max_y.max(y);
            }
        }
    }
    if min_x > max_x || min_y > max_y {
        return sprite;
    }

    let width = max_x - min_x + 1;
    let height = max_y - min_y + 1;
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in min_y..=max_y {
        let start = ((y * sprite.width + min_x) * 4) as usize;
        let end = start + (width * 4) as usize;
        pixels.extend_from_slice(&sprite.pixels[start..end]);
    }
    SpriteData {
        width,
        height,
        pixels,
    }
}
