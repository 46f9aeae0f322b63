//====================================================================

use common::{Color, Size};

//====================================================================

/// Drawing surface for a single frame, sized to the logical arena.
///
/// Handed out by reference for the duration of one draw call; whatever was
/// recorded into it is presented once the call returns.
#[derive(Debug)]
pub struct Screen {
    size: Size<u32>,
    fill: Option<Color>,
}

impl Screen {
    pub fn new(size: Size<u32>) -> Self {
        Self { size, fill: None }
    }

    #[inline]
    pub fn size(&self) -> Size<u32> {
        self.size
    }

    /// Fills the whole screen, replacing anything filled earlier this frame.
    #[inline]
    pub fn fill(&mut self, color: Color) {
        self.fill = Some(color);
    }

    /// Color the frame is cleared to, or `None` to keep the renderer default.
    #[inline]
    pub fn clear_color(&self) -> Option<Color> {
        self.fill
    }
}

//====================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_screen_keeps_default_clear() {
        let screen = Screen::new(Size::new(1920, 1080));

        assert_eq!(screen.size(), Size::new(1920, 1080));
        assert_eq!(screen.clear_color(), None);
    }

    #[test]
    fn last_fill_wins() {
        let mut screen = Screen::new(Size::new(320, 240));
        screen.fill(Color::WHITE);
        screen.fill(Color::rgb(0.1, 0.2, 0.3));

        assert_eq!(screen.clear_color(), Some(Color::rgb(0.1, 0.2, 0.3)));
    }
}

//====================================================================
