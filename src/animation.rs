//! Ping-pong zoom sweep between two view windows.

use log::debug;

use crate::view::ViewWindow;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationConfig {
    pub start: ViewWindow,
    pub end: ViewWindow,
    /// Frames from `start` to `end`. Must be non-zero.
    pub steps: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            start: ViewWindow::new(-0.5, 0.0, 1.0),
            end: ViewWindow::new(0.0, 0.75, 0.0005),
            steps: 200.0,
        }
    }
}

/// The current window plus the per-frame deltas. Once the scale leaves the
/// configured range all three deltas are negated together, so zoom and pan
/// reverse in lockstep and the sweep runs back and forth forever.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    window: ViewWindow,
    scale_step: f32,
    x_step: f32,
    y_step: f32,
    scale_min: f32,
    scale_max: f32,
}

impl AnimationState {
    pub fn new(config: &AnimationConfig) -> Self {
        assert!(config.steps != 0.0, "animation needs a non-zero step count");

        let AnimationConfig { start, end, steps } = *config;
        AnimationState {
            window: start,
            scale_step: (end.scale - start.scale) / steps,
            x_step: (end.center_x - start.center_x) / steps,
            y_step: (end.center_y - start.center_y) / steps,
            scale_min: start.scale.min(end.scale),
            scale_max: start.scale.max(end.scale),
        }
    }

    /// The window the next call to [`advance`](Self::advance) will emit.
    pub fn window(&self) -> ViewWindow {
        self.window
    }

    /// `(scale_step, x_step, y_step)`
    pub fn steps(&self) -> (f32, f32, f32) {
        (self.scale_step, self.x_step, self.y_step)
    }

    /// Emits the current window, then moves one step, reversing first if the
    /// scale has left `[scale_min, scale_max]`.
    pub fn advance(&mut self) -> ViewWindow {
        let current = self.window;

        if current.scale < self.scale_min || current.scale > self.scale_max {
            self.scale_step = -self.scale_step;
            self.x_step = -self.x_step;
            self.y_step = -self.y_step;
            debug!("sweep reversed at scale {}", current.scale);
        }

        self.window.scale += self.scale_step;
        self.window.center_x += self.x_step;
        self.window.center_y += self.y_step;
        current
    }
}

impl Iterator for AnimationState {
    type Item = ViewWindow;

    fn next(&mut self) -> Option<ViewWindow> {
        Some(self.advance())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_derived_from_the_range() {
        let state = AnimationState::new(&AnimationConfig::default());
        let (ds, dx, dy) = state.steps();
        assert!((ds - (0.0005 - 1.0) / 200.0).abs() < 1e-9);
        assert!((dx - 0.0025).abs() < 1e-9);
        assert!((dy - 0.00375).abs() < 1e-9);
    }

    #[test]
    fn first_advance_emits_the_start_window() {
        let config = AnimationConfig::default();
        let mut state = AnimationState::new(&config);
        assert_eq!(state.advance(), config.start);
        assert!(state.window().scale < config.start.scale);
    }

    #[test]
    fn sweep_reverses_all_axes_together() {
        let mut state = AnimationState::new(&AnimationConfig::default());
        let end = 0.0005;

        let mut flip = None;
        for call in 0..1000 {
            let (ds, dx, dy) = state.steps();
            let emitted = state.advance();
            let (ds2, dx2, dy2) = state.steps();
            if ds2.signum() != ds.signum() {
                assert_ne!(dx2.signum(), dx.signum());
                assert_ne!(dy2.signum(), dy.signum());
                assert!(emitted.scale < end, "flipped at scale {}", emitted.scale);
                flip = Some(call);
                break;
            }
            assert_eq!(dx2, dx);
            assert_eq!(dy2, dy);
        }
        let flip = flip.expect("the sweep never reversed");
        assert!((199..=202).contains(&flip), "reversed after {} calls", flip);

        // Heading back out: the scale grows past the end bound again.
        let (ds, dx, dy) = state.steps();
        assert!(ds > 0.0 && dx < 0.0 && dy < 0.0);
        let mut previous = state.advance().scale;
        for _ in 0..10 {
            let scale = state.advance().scale;
            assert!(scale > previous);
            previous = scale;
        }
        assert!(previous > end);
    }

    #[test]
    fn sweep_keeps_oscillating() {
        let config = AnimationConfig::default();
        let scales: Vec<f32> = AnimationState::new(&config)
            .take(1400)
            .map(|w| w.scale)
            .collect();
        let reversals = scales
            .windows(3)
            .filter(|w| (w[1] - w[0]).signum() != (w[2] - w[1]).signum())
            .count();
        assert!(reversals >= 5, "only {} reversals", reversals);
        assert!(scales.iter().all(|&s| s > -0.01 && s < 1.01));
    }

    #[test]
    fn bounds_are_order_independent() {
        let config = AnimationConfig {
            start: ViewWindow::new(0.0, 0.0, 0.5),
            end: ViewWindow::new(0.0, 0.0, 1.0),
            steps: 10.0,
        };
        let max = AnimationState::new(&config)
            .take(100)
            .map(|w| w.scale)
            .fold(f32::MIN, f32::max);
        assert!(max < 1.2, "scale ran away to {}", max);
    }
}
