//====================================================================

use std::{sync::Arc, time::Duration};

use common::Size;
use winit::{
    dpi::LogicalSize,
    error::OsError,
    event_loop::ActiveEventLoop,
    window::{Fullscreen, WindowAttributes},
};

//====================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    /// Requested inner size in logical pixels.
    pub size: Size<u32>,
    pub decorated: bool,
    /// Borderless fullscreen on the current monitor.
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "engine".to_string(),
            size: Size::new(1280, 720),
            decorated: true,
            fullscreen: false,
        }
    }
}

impl WindowConfig {
    pub fn attributes(&self) -> WindowAttributes {
        let attributes = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(self.size.width, self.size.height))
            .with_decorations(self.decorated);

        match self.fullscreen {
            true => attributes.with_fullscreen(Some(Fullscreen::Borderless(None))),
            false => attributes,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub window: WindowConfig,
    pub target_fps: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            target_fps: 60,
        }
    }
}

impl Config {
    #[inline]
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1. / self.target_fps.max(1) as f64)
    }
}

//====================================================================

pub struct Window(pub(crate) Arc<winit::window::Window>);
impl Window {
    pub(super) fn new(event_loop: &ActiveEventLoop, config: &WindowConfig) -> Result<Self, OsError> {
        let window = event_loop.create_window(config.attributes())?;

        log::info!(
            "Created window '{}' with inner size {:?}",
            config.title,
            window.inner_size()
        );

        Ok(Self(Arc::new(window)))
    }

    #[inline]
    pub fn size(&self) -> Size<u32> {
        let window_size = self.0.inner_size();

        Size {
            width: window_size.width,
            height: window_size.height,
        }
    }

    #[inline]
    pub fn request_redraw(&self) {
        self.0.request_redraw();
    }

    #[inline]
    pub fn inner(&self) -> &winit::window::Window {
        &self.0
    }
}

//====================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_is_decorated_and_windowed() {
        let attributes = Config::default().window.attributes();

        assert!(attributes.decorations);
        assert!(attributes.fullscreen.is_none());
        assert_eq!(attributes.title, "engine");
    }

    #[test]
    fn borderless_fullscreen_attributes() {
        let config = WindowConfig {
            title: "Test".to_string(),
            size: Size::new(640, 480),
            decorated: false,
            fullscreen: true,
        };

        let attributes = config.attributes();

        assert!(!attributes.decorations);
        assert!(matches!(
            attributes.fullscreen,
            Some(Fullscreen::Borderless(None))
        ));
        assert_eq!(
            attributes.inner_size,
            Some(winit::dpi::Size::Logical(LogicalSize::new(640., 480.)))
        );
    }

    #[test]
    fn frame_duration_follows_target_fps() {
        let config = Config {
            target_fps: 50,
            ..Default::default()
        };
        assert_eq!(config.frame_duration(), Duration::from_millis(20));

        let config = Config {
            target_fps: 0,
            ..Default::default()
        };
        assert_eq!(config.frame_duration(), Duration::from_secs(1));
    }
}

//====================================================================
