//! Frame rendering.

use std::fmt;
use std::ops::Range;

use itertools::iproduct;
use rayon::prelude::*;
use wide::f32x4;

use crate::color::{map_color, Rgb};
use crate::escape::{escape_time, escape_time4, LANES};
use crate::view::{PlaneMapping, ViewWindow};

/// Which escape-time kernel renders a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EvalMode {
    #[default]
    Scalar,
    Vectorized,
}

impl EvalMode {
    pub fn toggle(self) -> Self {
        match self {
            EvalMode::Scalar => EvalMode::Vectorized,
            EvalMode::Vectorized => EvalMode::Scalar,
        }
    }
}

impl From<bool> for EvalMode {
    fn from(use_vectorized: bool) -> Self {
        if use_vectorized {
            EvalMode::Vectorized
        } else {
            EvalMode::Scalar
        }
    }
}

impl fmt::Display for EvalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalMode::Scalar => f.pad("NO SIMD"),
            EvalMode::Vectorized => f.pad("SIMD"),
        }
    }
}

/// Anything a frame can be drawn into.
pub trait FrameBuffer {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn set_pixel(&mut self, x: u32, y: u32, color: Rgb);
}

/// Row-major, owned frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Frame {
    pub fn new(width: u32, height: u32) -> Self {
        Frame {
            width,
            height,
            pixels: vec![Rgb::BLACK; width as usize * height as usize],
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        self.pixels[self.index(x, y)]
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Copies the frame into a packed RGB24 destination whose rows are
    /// `pitch` bytes apart.
    pub fn write_rgb24(&self, dst: &mut [u8], pitch: usize) {
        let row_bytes = self.width as usize * 3;
        assert!(pitch >= row_bytes, "pitch {} shorter than a row", pitch);
        for (row, out) in self
            .pixels
            .chunks(self.width as usize)
            .zip(dst.chunks_mut(pitch))
        {
            for (px, bytes) in row.iter().zip(out[..row_bytes].chunks_exact_mut(3)) {
                bytes.copy_from_slice(&[px.r, px.g, px.b]);
            }
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl FrameBuffer for Frame {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }
}

fn check_preconditions(height: u32, max_iterations: u32, mode: EvalMode) {
    assert!(max_iterations > 0, "max_iterations must be positive");
    if mode == EvalMode::Vectorized {
        assert!(
            height % LANES as u32 == 0,
            "vectorized rendering needs a height divisible by {}, got {}",
            LANES,
            height
        );
    }
}

/// Renders `rows` of the frame, handing every pixel to `put`.
///
/// In vectorized mode each group of four rows is evaluated in one call with
/// lane `k` holding row `y + 3 - k`, so lane 3 lands on the top pixel.
fn render_rows<F>(
    mapping: &PlaneMapping,
    width: u32,
    rows: Range<u32>,
    max_iterations: u32,
    mode: EvalMode,
    mut put: F,
) where
    F: FnMut(u32, u32, Rgb),
{
    match mode {
        EvalMode::Scalar => {
            for (y, x) in iproduct!(rows, 0..width) {
                let m = escape_time(mapping.point(x, y), max_iterations);
                put(x, y, map_color(m, max_iterations));
            }
        }
        EvalMode::Vectorized => {
            for (y, x) in iproduct!(rows.step_by(LANES), 0..width) {
                let c_re = f32x4::splat(mapping.re(x));
                let c_im = f32x4::new([
                    mapping.im(y + 3),
                    mapping.im(y + 2),
                    mapping.im(y + 1),
                    mapping.im(y),
                ]);
                let m4 = escape_time4(c_re, c_im, max_iterations).to_array();
                put(x, y, map_color(m4[3], max_iterations));
                put(x, y + 1, map_color(m4[2], max_iterations));
                put(x, y + 2, map_color(m4[1], max_iterations));
                put(x, y + 3, map_color(m4[0], max_iterations));
            }
        }
    }
}

/// Fills `buffer` with the view. Runs on the calling thread.
pub fn render_frame<B: FrameBuffer>(
    buffer: &mut B,
    view: &ViewWindow,
    max_iterations: u32,
    mode: EvalMode,
) {
    let (width, height) = (buffer.width(), buffer.height());
    check_preconditions(height, max_iterations, mode);

    let mapping = PlaneMapping::new(view, width, height);
    render_rows(&mapping, width, 0..height, max_iterations, mode, |x, y, c| {
        buffer.set_pixel(x, y, c)
    });
}

/// Same output as [`render_frame`], with bands of four rows spread over the
/// rayon pool.
pub fn render_frame_par(frame: &mut Frame, view: &ViewWindow, max_iterations: u32, mode: EvalMode) {
    let (width, height) = (frame.width, frame.height);
    check_preconditions(height, max_iterations, mode);
    if width == 0 {
        return;
    }

    let mapping = PlaneMapping::new(view, width, height);
    let band_len = width as usize * LANES;
    frame
        .pixels
        .par_chunks_mut(band_len)
        .enumerate()
        .for_each(|(band, pixels)| {
            let top = (band * LANES) as u32;
            let rows = top..(top + (pixels.len() / width as usize) as u32);
            render_rows(&mapping, width, rows, max_iterations, mode, |x, y, c| {
                pixels[(y - top) as usize * width as usize + x as usize] = c
            });
        });
}
