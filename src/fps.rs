//! Frame-rate estimate over a fixed window of frames.

use std::time::Instant;

/// Frames per measurement.
pub const FPS_WINDOW: u32 = 10;

/// Millisecond tick source.
pub trait Clock {
    fn ticks_ms(&mut self) -> u64;
}

/// Wall clock measured from construction.
pub struct SystemClock(Instant);

impl SystemClock {
    pub fn new() -> Self {
        SystemClock(Instant::now())
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn ticks_ms(&mut self) -> u64 {
        self.0.elapsed().as_millis() as u64
    }
}

/// Counts frames and, every [`FPS_WINDOW`] frames, turns the ticks elapsed
/// since the previous checkpoint into frames per second.
#[derive(Clone, Debug)]
pub struct FpsCounter {
    frames: u32,
    checkpoint_ms: u64,
    fps: f64,
}

impl FpsCounter {
    pub fn new(now_ms: u64) -> Self {
        FpsCounter {
            frames: 0,
            checkpoint_ms: now_ms,
            fps: 0.0,
        }
    }

    /// Latest estimate; 0 until the first window completes.
    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// Records one rendered frame. Returns the new estimate when this frame
    /// closes a window.
    pub fn frame_rendered(&mut self, now_ms: u64) -> Option<f64> {
        self.frames += 1;
        if self.frames % FPS_WINDOW != 0 {
            return None;
        }
        let elapsed = now_ms.saturating_sub(self.checkpoint_ms).max(1);
        self.fps = f64::from(FPS_WINDOW) * 1000.0 / elapsed as f64;
        self.checkpoint_ms = now_ms;
        Some(self.fps)
    }

    pub fn label(&self) -> String {
        format!("FPS: {:.1}", self.fps)
    }
}
