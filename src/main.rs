//Animated Mandelbrot zoom, scalar vs SIMD
use clap::Parser;
use log::{debug, info, trace};

use simdbrot::{
    render_frame, render_frame_par, AnimationState, Clock, EvalMode, FpsCounter, Frame, Result,
    Settings, SystemClock,
};

#[cfg(feature = "sdl")]
mod overlay;

/// Everything that survives from one frame to the next.
struct Session {
    animation: AnimationState,
    mode: EvalMode,
    paused: bool,
    parallel: bool,
    max_iterations: u32,
    frame: Frame,
    fps: FpsCounter,
    rendered: u64,
}

impl Session {
    fn new<C: Clock>(settings: &Settings, clock: &mut C) -> Session {
        Session {
            animation: AnimationState::new(&settings.animation()),
            mode: settings.initial_mode(),
            paused: false,
            parallel: settings.parallel,
            max_iterations: settings.max_iterations,
            frame: Frame::new(settings.width, settings.height),
            fps: FpsCounter::new(clock.ticks_ms()),
            rendered: 0,
        }
    }

    fn toggle_mode(&mut self) {
        self.mode = self.mode.toggle();
        info!("switched to {}", self.mode);
    }

    #[cfg_attr(not(feature = "sdl"), allow(dead_code))]
    fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        info!("{}", if self.paused { "paused" } else { "resumed" });
    }

    fn step<C: Clock>(&mut self, clock: &mut C) {
        let view = if self.paused {
            self.animation.window()
        } else {
            self.animation.advance()
        };
        trace!("frame {}: {:?} ({})", self.rendered, view, self.mode);

        if self.parallel {
            render_frame_par(&mut self.frame, &view, self.max_iterations, self.mode);
        } else {
            render_frame(&mut self.frame, &view, self.max_iterations, self.mode);
        }
        self.rendered += 1;

        if let Some(fps) = self.fps.frame_rendered(clock.ticks_ms()) {
            debug!("{:.1} fps ({})", fps, self.mode);
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let settings = Settings::parse().validate()?;
    info!(
        "{}x{}, {} iterations, starting in {} mode",
        settings.width,
        settings.height,
        settings.max_iterations,
        settings.initial_mode()
    );

    if settings.headless {
        run_headless(&settings)
    } else {
        run_window(&settings)
    }
}

fn run_headless(settings: &Settings) -> Result<()> {
    let mut clock = SystemClock::new();
    for mode in [settings.initial_mode(), settings.initial_mode().toggle()] {
        let mut session = Session::new(settings, &mut clock);
        if session.mode != mode {
            session.toggle_mode();
        }
        for _ in 0..settings.frames {
            session.step(&mut clock);
        }
        println!(
            "{:>7}: {} frames, {:.1} fps",
            mode,
            session.rendered,
            session.fps.fps()
        );
    }
    Ok(())
}

#[cfg(not(feature = "sdl"))]
fn run_window(_settings: &Settings) -> Result<()> {
    Err(simdbrot::Error::NoWindowSupport)
}

#[cfg(feature = "sdl")]
struct SdlClock(sdl2::TimerSubsystem);

#[cfg(feature = "sdl")]
impl Clock for SdlClock {
    fn ticks_ms(&mut self) -> u64 {
        u64::from(self.0.ticks())
    }
}

#[cfg(feature = "sdl")]
fn run_window(settings: &Settings) -> Result<()> {
    use log::warn;
    use sdl2::event::Event;
    use sdl2::keyboard::Keycode;
    use sdl2::pixels::PixelFormatEnum;
    use simdbrot::Error;

    let (width, height) = (settings.width, settings.height);

    let sdl_context = sdl2::init().map_err(Error::Sdl)?;
    let video_subsystem = sdl_context.video().map_err(Error::Sdl)?;
    let mut clock = SdlClock(sdl_context.timer().map_err(Error::Sdl)?);
    let ttf_context = sdl2::ttf::init().map_err(|e| Error::Sdl(e.to_string()))?;

    let window = video_subsystem
        .window("Mandelbrot", width, height)
        .position_centered()
        .build()
        .map_err(|e| Error::Sdl(e.to_string()))?;
    let mut canvas = window
        .into_canvas()
        .build()
        .map_err(|e| Error::Sdl(e.to_string()))?;
    let creator = canvas.texture_creator();
    let mut frame_texture = creator
        .create_texture_streaming(PixelFormatEnum::RGB24, width, height)
        .map_err(|e| Error::Sdl(e.to_string()))?;

    let overlay = match overlay::Overlay::load(&ttf_context, &settings.font) {
        Ok(overlay) => Some(overlay),
        Err(e) => {
            warn!("no text overlay: {}", e);
            None
        }
    };

    let mut pump = sdl_context.event_pump().map_err(Error::Sdl)?;
    let mut session = Session::new(settings, &mut clock);

    'mainloop: loop {
        for event in pump.poll_iter() {
            match event {
                Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                }
                | Event::Quit { .. } => break 'mainloop,
                Event::KeyDown {
                    keycode: Some(Keycode::Space),
                    repeat: false,
                    ..
                } => session.toggle_mode(),
                Event::KeyDown {
                    keycode: Some(Keycode::P),
                    repeat: false,
                    ..
                } => session.toggle_pause(),
                _ => {}
            }
        }

        session.step(&mut clock);

        let frame = &session.frame;
        frame_texture
            .with_lock(None, |buffer, pitch| frame.write_rgb24(buffer, pitch))
            .map_err(Error::Sdl)?;
        canvas.copy(&frame_texture, None, None).map_err(Error::Sdl)?;

        if let Some(overlay) = &overlay {
            let cx = width as i32 / 2;
            overlay.draw(&mut canvas, &creator, &session.mode.to_string(), cx, 30)?;
            overlay.draw(&mut canvas, &creator, &session.fps.label(), cx, height as i32 - 30)?;
        }
        canvas.present();
    }

    info!("Exiting after {} frames", session.rendered);
    Ok(())
}
