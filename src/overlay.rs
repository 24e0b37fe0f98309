use std::path::Path;

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, RenderTarget, TextureCreator};
use sdl2::ttf::{Font, Sdl2TtfContext};
use sdl2::video::WindowContext;

use simdbrot::{Error, Result};

const FONT_SIZE: u16 = 28;

/// Centered status text drawn on top of each frame.
pub struct Overlay<'ttf> {
    font: Font<'ttf, 'static>,
    color: Color,
}

impl<'ttf> Overlay<'ttf> {
    pub fn load(ttf_context: &'ttf Sdl2TtfContext, font_path: &Path) -> Result<Overlay<'ttf>> {
        let font = ttf_context
            .load_font(font_path, FONT_SIZE)
            .map_err(|e| Error::Sdl(format!("{}: {}", font_path.display(), e)))?;
        Ok(Overlay {
            font,
            color: Color::RGBA(255, 255, 255, 255),
        })
    }

    /// Draws `text` centered on `(cx, cy)`.
    pub fn draw<T: RenderTarget>(
        &self,
        canvas: &mut Canvas<T>,
        tc: &TextureCreator<WindowContext>,
        text: &str,
        cx: i32,
        cy: i32,
    ) -> Result<()> {
        let surface = self
            .font
            .render(text)
            .blended(self.color)
            .map_err(|e| Error::Sdl(e.to_string()))?;
        let (width, height) = surface.size();
        let texture = surface
            .as_texture(tc)
            .map_err(|e| Error::Sdl(e.to_string()))?;
        let target = Rect::new(cx - width as i32 / 2, cy - height as i32 / 2, width, height);
        canvas.copy(&texture, None, target).map_err(Error::Sdl)
    }
}
