//! Animated Mandelbrot zoom.
//!
//! The escape-time kernels come in a scalar and a 4-lane flavour that return
//! identical counts; [`render_frame`] picks one per frame, [`map_color`]
//! turns counts into pixels and [`AnimationState`] drives the view back and
//! forth between two windows.

pub mod animation;
pub mod color;
pub mod config;
pub mod error;
pub mod escape;
pub mod fps;
pub mod render;
pub mod view;

pub use animation::{AnimationConfig, AnimationState};
pub use color::{map_color, Rgb};
pub use config::Settings;
pub use error::{Error, Result};
pub use escape::{escape_time, escape_time4, LANES};
pub use fps::{Clock, FpsCounter, SystemClock};
pub use render::{render_frame, render_frame_par, EvalMode, Frame, FrameBuffer};
pub use view::{PlaneMapping, ViewWindow};
