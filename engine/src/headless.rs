//====================================================================

use common::Size;

use crate::{
    tools::{KeyCode, MouseButton},
    App, Host, State, Status, Tick,
};

//====================================================================

/// Windowless driver for an [`App`].
///
/// Events are fed in by hand and frames advance only on [`Headless::step`],
/// so a game can be exercised frame by frame without a display or GPU.
pub struct Headless<A: App> {
    host: Host<A>,
}

impl<A: App> Headless<A> {
    pub fn new(window_size: Size<u32>) -> Self {
        Self {
            host: Host::new(window_size),
        }
    }

    #[inline]
    pub fn state(&self) -> &State {
        self.host.state()
    }

    #[inline]
    pub fn app(&self) -> &A {
        self.host.app()
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.host.status()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.host.status() == Status::Running
    }

    #[inline]
    pub fn press(&mut self, key: KeyCode) {
        self.host.key_input(key, true);
    }

    #[inline]
    pub fn release(&mut self, key: KeyCode) {
        self.host.key_input(key, false);
    }

    #[inline]
    pub fn press_button(&mut self, button: MouseButton) {
        self.host.mouse_button_input(button, true);
    }

    #[inline]
    pub fn release_button(&mut self, button: MouseButton) {
        self.host.mouse_button_input(button, false);
    }

    #[inline]
    pub fn move_cursor(&mut self, x: f64, y: f64) {
        self.host.cursor_moved((x, y));
    }

    #[inline]
    pub fn resize(&mut self, window_size: Size<u32>) {
        self.host.resize(window_size);
    }

    #[inline]
    pub fn step(&mut self) -> Tick {
        self.host.tick()
    }

    /// Steps up to `frames` frames, stopping early if the app terminates.
    /// Returns how many frames were drawn.
    pub fn run(&mut self, frames: usize) -> usize {
        (0..frames)
            .take_while(|_| matches!(self.step(), Tick::Draw(_)))
            .count()
    }
}

//====================================================================

#[cfg(test)]
mod tests {
    use crate::{Screen, Termination};

    use super::*;

    struct ClickToQuit;

    impl App for ClickToQuit {
        fn new(_state: &mut State) -> Self {
            ClickToQuit
        }

        fn update(&mut self, state: &mut State) -> Result<(), Termination> {
            let position = state.mouse().position();

            match state.mouse_buttons().just_pressed(MouseButton::Left) && position.x < 10. {
                true => Err(Termination::Quit),
                false => Ok(()),
            }
        }

        fn draw(&self, _screen: &mut Screen) {}

        fn layout(&self, _window_size: Size<u32>) -> Size<u32> {
            Size::new(100, 100)
        }
    }

    #[test]
    fn run_counts_frames_until_exit() {
        let mut headless = Headless::<ClickToQuit>::new(Size::new(200, 200));

        assert_eq!(headless.run(5), 5);
        assert!(headless.is_running());

        headless.move_cursor(10., 10.);
        headless.press_button(MouseButton::Left);
        assert_eq!(headless.run(5), 0);
        assert!(!headless.is_running());
        assert_eq!(headless.status(), Status::Terminated);
        assert_eq!(headless.state().frame(), 5);
    }

    #[test]
    fn clicks_use_arena_coordinates() {
        let mut headless = Headless::<ClickToQuit>::new(Size::new(200, 200));

        // Window x = 40 is arena x = 20
        headless.move_cursor(40., 40.);
        headless.press_button(MouseButton::Left);
        assert!(matches!(headless.step(), Tick::Draw(_)));

        headless.release_button(MouseButton::Left);
        assert!(matches!(headless.step(), Tick::Draw(_)));
        assert!(headless.is_running());
    }
}

//====================================================================
