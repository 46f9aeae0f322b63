//====================================================================

use std::{
    collections::HashSet,
    hash::{BuildHasherDefault, Hash},
};

use common::Viewport;
use rustc_hash::FxHasher;
use web_time::{Duration, Instant};

//====================================================================

type Hasher = BuildHasherDefault<FxHasher>;

//====================================================================

#[derive(Debug)]
pub struct Time {
    start: Instant,

    last_frame: Instant,
    delta: Duration,
    delta_seconds: f32,
}

impl Default for Time {
    fn default() -> Self {
        Self {
            start: Instant::now(),
            last_frame: Instant::now(),
            delta: Duration::ZERO,
            delta_seconds: 0.,
        }
    }
}

impl Time {
    /// Time since the host started.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    #[inline]
    pub fn delta(&self) -> &Duration {
        &self.delta
    }

    #[inline]
    pub fn delta_seconds(&self) -> f32 {
        self.delta_seconds
    }
}

pub(crate) fn tick_time(time: &mut Time) {
    time.delta = time.last_frame.elapsed();
    time.delta_seconds = time.delta.as_secs_f32();

    time.last_frame = Instant::now();
}

//====================================================================

pub use winit::{event::MouseButton, keyboard::KeyCode};

#[derive(Debug)]
pub struct Input<T> {
    pressed: HashSet<T, Hasher>,
    just_pressed: HashSet<T, Hasher>,
    released: HashSet<T, Hasher>,
}

impl<T> Default for Input<T> {
    fn default() -> Self {
        Self {
            pressed: HashSet::default(),
            just_pressed: HashSet::default(),
            released: HashSet::default(),
        }
    }
}

impl<T> Input<T>
where
    T: Eq + Hash,
{
    /// Held down, including the frame it went down on.
    #[inline]
    pub fn pressed(&self, input: T) -> bool {
        self.pressed.contains(&input)
    }

    /// Went down this frame. Holding the input does not repeat this.
    #[inline]
    pub fn just_pressed(&self, input: T) -> bool {
        self.just_pressed.contains(&input)
    }

    /// Went up this frame.
    #[inline]
    pub fn released(&self, input: T) -> bool {
        self.released.contains(&input)
    }
}

pub(crate) fn process_inputs<T>(input: &mut Input<T>, val: T, pressed: bool)
where
    T: Eq + Hash + Copy,
{
    match pressed {
        true => {
            // OS key repeat reports the held key as pressed again
            if input.pressed.insert(val) {
                input.just_pressed.insert(val);
            }
        }
        false => {
            if input.pressed.remove(&val) {
                input.released.insert(val);
            }
        }
    }
}

pub(crate) fn reset_input<T>(input: &mut Input<T>) {
    input.just_pressed.clear();
    input.released.clear();
}

//--------------------------------------------------

#[derive(Debug, Default)]
pub struct MouseInput {
    position: glam::Vec2,
    screen_position: glam::Vec2,
    motion_delta: glam::Vec2,
    scroll: glam::Vec2,
}

impl MouseInput {
    /// Cursor position in arena coordinates.
    #[inline]
    pub fn position(&self) -> glam::Vec2 {
        self.position
    }

    /// Cursor position in window pixels.
    #[inline]
    pub fn screen_position(&self) -> glam::Vec2 {
        self.screen_position
    }

    #[inline]
    pub fn motion_delta(&self) -> glam::Vec2 {
        self.motion_delta
    }

    #[inline]
    pub fn scroll(&self) -> glam::Vec2 {
        self.scroll
    }
}

#[inline]
pub(crate) fn process_mouse_position(
    input: &mut MouseInput,
    position: (f64, f64),
    viewport: &Viewport,
) {
    input.screen_position = glam::vec2(position.0 as f32, position.1 as f32);
    input.position = viewport.to_arena(input.screen_position);
}

#[inline]
pub(crate) fn refresh_mouse_position(input: &mut MouseInput, viewport: &Viewport) {
    input.position = viewport.to_arena(input.screen_position);
}

#[inline]
pub(crate) fn process_mouse_motion(input: &mut MouseInput, delta: (f64, f64)) {
    input.motion_delta += glam::vec2(delta.0 as f32, delta.1 as f32);
}

#[inline]
pub(crate) fn process_mouse_scroll(input: &mut MouseInput, delta: (f32, f32)) {
    input.scroll += glam::vec2(delta.0, delta.1);
}

pub(crate) fn reset_mouse_input(input: &mut MouseInput) {
    input.motion_delta = glam::Vec2::ZERO;
    input.scroll = glam::Vec2::ZERO;
}

//====================================================================

#[cfg(test)]
mod tests {
    use common::Size;

    use super::*;

    #[test]
    fn elapsed_covers_every_frame() {
        let mut time = Time::default();

        tick_time(&mut time);
        let first = time.elapsed();
        assert!(first >= *time.delta());

        tick_time(&mut time);
        assert!(time.elapsed() >= first);
        assert!(time.elapsed() >= *time.delta());
    }

    #[test]
    fn press_is_edge_triggered() {
        let mut keys = Input::default();

        process_inputs(&mut keys, KeyCode::KeyQ, true);
        assert!(keys.pressed(KeyCode::KeyQ));
        assert!(keys.just_pressed(KeyCode::KeyQ));

        reset_input(&mut keys);
        assert!(keys.pressed(KeyCode::KeyQ));
        assert!(!keys.just_pressed(KeyCode::KeyQ));
    }

    #[test]
    fn key_repeat_does_not_retrigger() {
        let mut keys = Input::default();

        process_inputs(&mut keys, KeyCode::KeyQ, true);
        reset_input(&mut keys);

        process_inputs(&mut keys, KeyCode::KeyQ, true);
        process_inputs(&mut keys, KeyCode::KeyQ, true);
        assert!(!keys.just_pressed(KeyCode::KeyQ));
    }

    #[test]
    fn release_then_press_triggers_again() {
        let mut keys = Input::default();

        process_inputs(&mut keys, KeyCode::Space, true);
        reset_input(&mut keys);

        process_inputs(&mut keys, KeyCode::Space, false);
        assert!(keys.released(KeyCode::Space));
        assert!(!keys.pressed(KeyCode::Space));
        reset_input(&mut keys);
        assert!(!keys.released(KeyCode::Space));

        process_inputs(&mut keys, KeyCode::Space, true);
        assert!(keys.just_pressed(KeyCode::Space));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut keys = Input::default();
        process_inputs(&mut keys, KeyCode::Escape, false);

        assert!(!keys.released(KeyCode::Escape));
    }

    #[test]
    fn press_and_release_in_one_frame_still_registers() {
        let mut keys = Input::default();

        process_inputs(&mut keys, KeyCode::KeyQ, true);
        process_inputs(&mut keys, KeyCode::KeyQ, false);

        assert!(keys.just_pressed(KeyCode::KeyQ));
        assert!(keys.released(KeyCode::KeyQ));
        assert!(!keys.pressed(KeyCode::KeyQ));
    }

    #[test]
    fn mouse_position_is_mapped_into_arena() {
        let viewport = Viewport::letterbox(Size::new(1920, 1080), Size::new(3840, 2400));
        let mut mouse = MouseInput::default();

        process_mouse_position(&mut mouse, (1920., 1200.), &viewport);

        assert_eq!(mouse.screen_position(), glam::vec2(1920., 1200.));
        assert_eq!(mouse.position(), glam::vec2(960., 540.));
    }

    #[test]
    fn mouse_deltas_accumulate_until_reset() {
        let mut mouse = MouseInput::default();

        process_mouse_motion(&mut mouse, (1., 2.));
        process_mouse_motion(&mut mouse, (3., 4.));
        process_mouse_scroll(&mut mouse, (0., 1.));
        assert_eq!(mouse.motion_delta(), glam::vec2(4., 6.));
        assert_eq!(mouse.scroll(), glam::vec2(0., 1.));

        reset_mouse_input(&mut mouse);
        assert_eq!(mouse.motion_delta(), glam::Vec2::ZERO);
        assert_eq!(mouse.scroll(), glam::Vec2::ZERO);
    }
}

//====================================================================
