use glam::{IVec2, Vec2};
use tilescroll::camera::{Camera2D, CameraState, CameraUniform};
use tilescroll::input::{ActionMap, Direction, InputState, KeyCode, held_direction};

fn holding(keys: &[KeyCode]) -> InputState {
    let mut input = InputState::new();
    for &k in keys {
        input.press(k);
    }
    input
}

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-4
}

// ── Input → direction ─────────────────────────────────────────────────────

#[test]
fn no_keys_no_direction() {
    let bindings = Direction::default_bindings();
    assert_eq!(held_direction(&bindings, &InputState::new()), None);
}

#[test]
fn right_beats_left() {
    let bindings = Direction::default_bindings();
    let input = holding(&[KeyCode::ArrowLeft, KeyCode::ArrowRight]);
    assert_eq!(held_direction(&bindings, &input), Some(Direction::Right));
}

#[test]
fn priority_is_right_left_up_down() {
    let bindings = Direction::default_bindings();
    assert_eq!(
        held_direction(&bindings, &holding(&[KeyCode::ArrowDown, KeyCode::ArrowUp, KeyCode::ArrowLeft])),
        Some(Direction::Left)
    );
    assert_eq!(
        held_direction(&bindings, &holding(&[KeyCode::ArrowDown, KeyCode::ArrowUp])),
        Some(Direction::Up)
    );
    assert_eq!(
        held_direction(&bindings, &holding(&[KeyCode::ArrowDown])),
        Some(Direction::Down)
    );
}

#[test]
fn custom_bindings_are_honoured() {
    let mut bindings = ActionMap::new();
    bindings.bind(Direction::Up, KeyCode::KeyW);
    assert_eq!(held_direction(&bindings, &holding(&[KeyCode::KeyW])), Some(Direction::Up));
    assert_eq!(held_direction(&bindings, &holding(&[KeyCode::ArrowUp])), None);
}

#[test]
fn released_key_stops_counting() {
    let bindings = Direction::default_bindings();
    let mut input = holding(&[KeyCode::ArrowRight]);
    input.release(KeyCode::ArrowRight);
    assert_eq!(held_direction(&bindings, &input), None);
    assert!(input.is_key_released(KeyCode::ArrowRight));
}

#[test]
fn repeat_press_is_not_a_new_press() {
    let mut input = holding(&[KeyCode::Tab]);
    input.clear_frame_state();
    input.press(KeyCode::Tab);
    assert!(input.is_key_held(KeyCode::Tab));
    assert!(!input.is_key_pressed(KeyCode::Tab));
}

// ── CameraState ───────────────────────────────────────────────────────────

#[test]
fn default_state_targets_forty_forty() {
    let state = CameraState::default();
    assert_eq!(state.position, IVec2::new(20, 20));
    assert_eq!(state.target(), Vec2::new(40.0, 40.0));
}

#[test]
fn holding_right_for_n_frames_moves_two_n() {
    let bindings = Direction::default_bindings();
    let input = holding(&[KeyCode::ArrowRight]);
    let start = CameraState::default();

    let mut state = start;
    for _ in 0..37 {
        state = state.update(&bindings, &input);
    }
    assert_eq!(state.target().x - start.target().x, 74.0);
    assert_eq!(state.target().y, start.target().y);
}

#[test]
fn right_and_left_together_moves_right() {
    let bindings = Direction::default_bindings();
    let both = holding(&[KeyCode::ArrowRight, KeyCode::ArrowLeft]);
    let only_right = holding(&[KeyCode::ArrowRight]);

    let a = CameraState::default().update(&bindings, &both);
    let b = CameraState::default().update(&bindings, &only_right);
    assert_eq!(a, b);
}

#[test]
fn diagonal_keys_move_along_one_axis() {
    let bindings = Direction::default_bindings();
    let input = holding(&[KeyCode::ArrowUp, KeyCode::ArrowRight]);
    let state = CameraState::new(0, 0).update(&bindings, &input);
    assert_eq!(state.position, IVec2::new(2, 0));
}

#[test]
fn each_direction_steps_two_pixels() {
    let s = CameraState::new(0, 0);
    assert_eq!(s.step(Some(Direction::Right)).position, IVec2::new(2, 0));
    assert_eq!(s.step(Some(Direction::Left)).position, IVec2::new(-2, 0));
    assert_eq!(s.step(Some(Direction::Up)).position, IVec2::new(0, -2));
    assert_eq!(s.step(Some(Direction::Down)).position, IVec2::new(0, 2));
    assert_eq!(s.step(None), s);
}

#[test]
fn camera_is_not_clamped() {
    let mut s = CameraState::new(0, 0);
    for _ in 0..10_000 {
        s = s.step(Some(Direction::Left));
    }
    assert_eq!(s.position.x, -20_000);
}

// ── Camera2D ──────────────────────────────────────────────────────────────

#[test]
fn centered_camera_uses_half_window_as_offset() {
    let cam = Camera2D::centered(800, 450, &CameraState::default());
    assert_eq!(cam.offset, Vec2::new(400.0, 225.0));
    assert_eq!(cam.target, Vec2::new(40.0, 40.0));
    assert_eq!(cam.zoom, 1.0);
    assert_eq!(cam.rotation, 0.0);
}

#[test]
fn follow_tracks_state_target() {
    let mut cam = Camera2D::centered(800, 450, &CameraState::default());
    let moved = CameraState::new(100, -6);
    cam.follow(&moved);
    assert_eq!(cam.target, Vec2::new(120.0, 14.0));
}

#[test]
fn target_lands_on_offset() {
    let cam = Camera2D::centered(800, 450, &CameraState::new(300, 150));
    let uniform = cam.build_view_proj(800.0, 450.0);
    // Window centre is NDC origin.
    assert!(approx(uniform.project(cam.target), Vec2::ZERO));
}

#[test]
fn unit_zoom_preserves_pixel_distances() {
    let cam = Camera2D::centered(800, 450, &CameraState::new(0, 0));
    let uniform = cam.build_view_proj(800.0, 450.0);
    // 400 world px right of the target is the right edge of the window.
    let p = uniform.project(cam.target + Vec2::new(400.0, 0.0));
    assert!(approx(p, Vec2::new(1.0, 0.0)), "{p:?}");
}

#[test]
fn zoom_scales_distance_from_target() {
    let mut cam = Camera2D::centered(800, 450, &CameraState::new(0, 0));
    cam.zoom = 2.0;
    let uniform = cam.build_view_proj(800.0, 450.0);
    let p = uniform.project(cam.target + Vec2::new(200.0, 0.0));
    assert!(approx(p, Vec2::new(1.0, 0.0)), "{p:?}");
}

#[test]
fn screen_projection_maps_corners() {
    let u = CameraUniform::identity_ortho(800.0, 450.0);
    assert!(approx(u.project(Vec2::ZERO), Vec2::new(-1.0, 1.0)));
    assert!(approx(u.project(Vec2::new(800.0, 450.0)), Vec2::new(1.0, -1.0)));
}
