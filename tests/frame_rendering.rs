use simdbrot::{
    map_color, render_frame, render_frame_par, AnimationConfig, AnimationState, EvalMode, Frame,
    FrameBuffer, PlaneMapping, Rgb, ViewWindow,
};

fn render(view: ViewWindow, width: u32, height: u32, max: u32, mode: EvalMode) -> Frame {
    let mut frame = Frame::new(width, height);
    render_frame(&mut frame, &view, max, mode);
    frame
}

#[test]
fn vectorized_frame_is_identical_to_scalar() {
    let views = [
        ViewWindow::new(-0.5, 0.0, 1.0),
        ViewWindow::new(-0.25, 0.375, 0.5),
        ViewWindow::new(0.0, 0.75, 0.0005),
    ];
    for view in views {
        let scalar = render(view, 60, 40, 100, EvalMode::Scalar);
        let simd = render(view, 60, 40, 100, EvalMode::Vectorized);
        assert_eq!(scalar, simd, "frames differ for {:?}", view);
    }
}

#[test]
fn lane_results_land_on_the_matching_rows() {
    let view = ViewWindow::new(-0.5, 0.0, 1.0);
    let (width, height, max) = (30, 20, 64);
    let scalar = render(view, width, height, max, EvalMode::Scalar);
    let simd = render(view, width, height, max, EvalMode::Vectorized);

    let mapping = PlaneMapping::new(&view, width, height);
    for x in 0..width {
        for y in 0..height {
            let expected = map_color(simdbrot::escape_time(mapping.point(x, y), max), max);
            assert_eq!(scalar.pixel(x, y), expected, "scalar ({}, {})", x, y);
            assert_eq!(simd.pixel(x, y), expected, "simd ({}, {})", x, y);
        }
    }
}

#[test]
fn full_size_frame_has_set_and_escapees() {
    let frame = render(ViewWindow::new(-0.5, 0.0, 1.0), 600, 400, 100, EvalMode::Vectorized);
    assert_eq!((frame.width(), frame.height()), (600, 400));
    // Centre of the view is -0.5 + 0i, inside the main cardioid.
    assert_eq!(frame.pixel(300, 200), Rgb::BLACK);
    let black = frame.pixels().iter().filter(|&&p| p == Rgb::BLACK).count();
    assert!(black > 0 && black < frame.pixels().len());
}

#[test]
fn parallel_rendering_matches_sequential() {
    for mode in [EvalMode::Scalar, EvalMode::Vectorized] {
        let view = ViewWindow::new(-0.75, 0.1, 0.6);
        let sequential = render(view, 64, 48, 80, mode);
        let mut parallel = Frame::new(64, 48);
        render_frame_par(&mut parallel, &view, 80, mode);
        assert_eq!(sequential, parallel, "{} mode", mode);
    }
}

#[test]
fn mode_can_change_between_frames() {
    let mut state = AnimationState::new(&AnimationConfig::default());
    let mut frame = Frame::new(24, 16);
    let mut mode = EvalMode::Scalar;
    for _ in 0..6 {
        let view = state.advance();
        render_frame(&mut frame, &view, 50, mode);
        assert_eq!(frame, render(view, 24, 16, 50, EvalMode::Scalar));
        mode = mode.toggle();
    }
}
