//! Escape-time kernels.
//!
//! Both kernels iterate `z <- z^2 + c` starting from `z = c` in single precision
//! and count the iterations before `|z|^2 > 4`. A point that reaches `|z|^2 == 4`
//! exactly is still counted; only a strictly larger magnitude escapes. The
//! vectorized kernel must return the same count as the scalar one in every lane.

use num::Complex;

use wide::*;

pub const ESCAPE_RADIUS_SQR: f32 = 4.0;

/// Points evaluated per call of [`escape_time4`].
pub const LANES: usize = 4;

/// Iterations before `c` escapes, or `max_iterations` if it never does.
pub fn escape_time(c: Complex<f32>, max_iterations: u32) -> u32 {
    assert!(max_iterations > 0, "max_iterations must be positive");

    let mut z = c;
    for i in 0..max_iterations {
        let re2 = z.re * z.re;
        let im2 = z.im * z.im;
        if re2 + im2 > ESCAPE_RADIUS_SQR {
            return i;
        }
        z = Complex::new(re2 - im2 + c.re, 2.0 * z.re * z.im + c.im);
    }
    max_iterations
}

/// Four points at once. Lane `k` of the result is
/// `escape_time(Complex::new(c_re[k], c_im[k]), max_iterations)`.
pub fn escape_time4(c_re: f32x4, c_im: f32x4, max_iterations: u32) -> u32x4 {
    assert!(max_iterations > 0, "max_iterations must be positive");

    let two = f32x4::splat(2.0);
    let radius = f32x4::splat(ESCAPE_RADIUS_SQR);
    let one = f32x4::ONE;
    let zero = f32x4::ZERO;

    let mut z_re = c_re;
    let mut z_im = c_im;
    let mut count = i32x4::ZERO;
    // All bits set in every lane.
    let mut active = zero.cmp_le(zero);

    for _ in 0..max_iterations {
        let re2 = z_re * z_re;
        let im2 = z_im * z_im;

        // A retired lane stays retired, even if its magnitude overflows to NaN.
        active = active & (re2 + im2).cmp_le(radius);
        if !active.any() {
            break;
        }

        let new_im = two * z_re * z_im + c_im;
        z_re = re2 - im2 + c_re;
        z_im = new_im;
        count = count + active.blend(one, zero).round_int();
    }
    u32x4::new(count.to_array().map(|c| c as u32))
}
