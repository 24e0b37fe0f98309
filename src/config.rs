//! Command-line settings.

use std::path::PathBuf;

use clap::Parser;

use crate::animation::AnimationConfig;
use crate::error::{Error, Result};
use crate::escape::LANES;
use crate::render::EvalMode;
use crate::view::ViewWindow;

#[derive(Parser, Clone, Debug, PartialEq)]
#[command(name = "simdbrot")]
#[command(about = "Animated Mandelbrot zoom, scalar vs 4-lane kernels")]
pub struct Settings {
    #[arg(long, default_value_t = 600)]
    pub width: u32,

    /// Must be a multiple of 4.
    #[arg(long, default_value_t = 400)]
    pub height: u32,

    #[arg(short = 'i', long, default_value_t = 100)]
    pub max_iterations: u32,

    /// Frames between the start and end windows.
    #[arg(long, default_value_t = 200.0)]
    pub steps: f32,

    #[arg(long, default_value_t = -0.5, allow_hyphen_values = true)]
    pub start_x: f32,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub start_y: f32,
    #[arg(long, default_value_t = 1.0)]
    pub start_scale: f32,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub end_x: f32,
    #[arg(long, default_value_t = 0.75, allow_hyphen_values = true)]
    pub end_y: f32,
    #[arg(long, default_value_t = 0.0005)]
    pub end_scale: f32,

    /// Start with the 4-lane kernel (toggle with space).
    #[arg(long)]
    pub simd: bool,

    /// Spread each frame over all cores.
    #[arg(long)]
    pub parallel: bool,

    /// Render without a window and log the frame rate.
    #[arg(long)]
    pub headless: bool,

    /// Frames to render in headless mode.
    #[arg(long, default_value_t = 200)]
    pub frames: u32,

    #[arg(long, default_value = "assets/DejaVuSansMono.ttf")]
    pub font: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings::parse_from(["simdbrot"])
    }
}

impl Settings {
    pub fn validate(self) -> Result<Self> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidSettings(format!(
                "frame size {}x{} is empty",
                self.width, self.height
            )));
        }
        if self.height % LANES as u32 != 0 {
            return Err(Error::InvalidSettings(format!(
                "height {} is not a multiple of {}",
                self.height, LANES
            )));
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidSettings("max iterations must be positive".into()));
        }
        if self.steps == 0.0 || !self.steps.is_finite() {
            return Err(Error::InvalidSettings(format!("bad step count {}", self.steps)));
        }
        if !(self.start_scale > 0.0 && self.end_scale > 0.0) {
            return Err(Error::InvalidSettings("scales must be positive".into()));
        }
        Ok(self)
    }

    pub fn animation(&self) -> AnimationConfig {
        AnimationConfig {
            start: ViewWindow::new(self.start_x, self.start_y, self.start_scale),
            end: ViewWindow::new(self.end_x, self.end_y, self.end_scale),
            steps: self.steps,
        }
    }

    pub fn initial_mode(&self) -> EvalMode {
        EvalMode::from(self.simd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Settings {
        Settings::try_parse_from(std::iter::once("simdbrot").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults_reproduce_the_classic_sweep() {
        let settings = Settings::default().validate().unwrap();
        assert_eq!((settings.width, settings.height), (600, 400));
        assert_eq!(settings.max_iterations, 100);
        assert_eq!(settings.animation(), AnimationConfig::default());
        assert_eq!(settings.initial_mode(), EvalMode::Scalar);
    }

    #[test]
    fn flags_are_parsed() {
        let settings = parse(&["--simd", "--height", "200", "--start-x", "-1.25"]);
        assert_eq!(settings.initial_mode(), EvalMode::Vectorized);
        assert_eq!(settings.height, 200);
        assert_eq!(settings.start_x, -1.25);
    }

    #[test]
    fn ragged_height_is_rejected() {
        let err = parse(&["--height", "402"]).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidSettings(_)));
        assert!(err.to_string().contains("multiple of 4"));
    }

    #[test]
    fn zero_steps_and_iterations_are_rejected() {
        assert!(parse(&["--steps", "0"]).validate().is_err());
        assert!(parse(&["-i", "0"]).validate().is_err());
        assert!(parse(&["--width", "0"]).validate().is_err());
    }
}
