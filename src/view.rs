//! The visible region of the complex plane and its pixel mapping.

use num::Complex;

/// A window onto the plane. `scale` is half the visible height; the width is
/// `3 * scale`, with the centre sitting `1.5 * scale` from the left edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewWindow {
    pub center_x: f32,
    pub center_y: f32,
    pub scale: f32,
}

impl ViewWindow {
    pub const fn new(center_x: f32, center_y: f32, scale: f32) -> Self {
        ViewWindow {
            center_x,
            center_y,
            scale,
        }
    }
}

/// Affine map from pixel indices to plane coordinates for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneMapping {
    pub origin_re: f32,
    pub origin_im: f32,
    pub step_re: f32,
    pub step_im: f32,
}

impl PlaneMapping {
    pub fn new(view: &ViewWindow, width: u32, height: u32) -> Self {
        PlaneMapping {
            origin_re: view.center_x - 1.5 * view.scale,
            origin_im: view.center_y - view.scale,
            step_re: 3.0 * view.scale / width as f32,
            step_im: 2.0 * view.scale / height as f32,
        }
    }

    #[inline]
    pub fn re(&self, x: u32) -> f32 {
        self.origin_re + x as f32 * self.step_re
    }

    #[inline]
    pub fn im(&self, y: u32) -> f32 {
        self.origin_im + y as f32 * self.step_im
    }

    pub fn point(&self, x: u32, y: u32) -> Complex<f32> {
        Complex::new(self.re(x), self.im(y))
    }
}
