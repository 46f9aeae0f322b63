//====================================================================

use common::Size;
use engine::{
    tools::KeyCode, App, Config, EngineError, Runner, Screen, State, Termination, WindowConfig,
};

//====================================================================

pub const ARENA_WIDTH: u32 = 1920;
pub const ARENA_HEIGHT: u32 = 1080;
pub const APPLICATION_TITLE: &str = "SpaceShooter";

pub const QUIT_KEY: KeyCode = KeyCode::KeyQ;

//====================================================================

pub fn config() -> Config {
    Config {
        window: WindowConfig {
            title: APPLICATION_TITLE.to_string(),
            size: Size::new(ARENA_WIDTH, ARENA_HEIGHT),
            decorated: false,
            fullscreen: true,
        },
        ..Default::default()
    }
}

pub fn run() -> Result<(), EngineError> {
    Runner::<SpaceShooter>::run(config())
}

//====================================================================

pub struct SpaceShooter;

impl App for SpaceShooter {
    fn new(_state: &mut State) -> Self {
        SpaceShooter
    }

    fn update(&mut self, state: &mut State) -> Result<(), Termination> {
        if state.keys().just_pressed(QUIT_KEY) {
            log::info!("Quit key pressed");
            return Err(Termination::Quit);
        }

        Ok(())
    }

    fn draw(&self, _screen: &mut Screen) {}

    fn layout(&self, _window_size: Size<u32>) -> Size<u32> {
        Size::new(ARENA_WIDTH, ARENA_HEIGHT)
    }
}

//====================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_ignores_window_size() {
        let shooter = SpaceShooter;

        [(0, 0), (1, 1), (800, 600), (1920, 1080), (3840, 2160), (u32::MAX, 7)]
            .into_iter()
            .for_each(|(width, height)| {
                assert_eq!(
                    shooter.layout(Size::new(width, height)),
                    Size::new(ARENA_WIDTH, ARENA_HEIGHT)
                );
            });
    }

    #[test]
    fn config_requests_borderless_fullscreen_arena() {
        let config = config();

        assert_eq!(config.window.title, APPLICATION_TITLE);
        assert_eq!(config.window.size, Size::new(ARENA_WIDTH, ARENA_HEIGHT));
        assert!(!config.window.decorated);
        assert!(config.window.fullscreen);
    }

    #[test]
    fn draw_leaves_default_clear() {
        let shooter = SpaceShooter;
        let mut screen = Screen::new(Size::new(ARENA_WIDTH, ARENA_HEIGHT));

        shooter.draw(&mut screen);

        assert_eq!(screen.clear_color(), None);
    }
}

//====================================================================
