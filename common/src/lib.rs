//====================================================================

use std::ops::Mul;

//====================================================================

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    #[inline]
    pub const fn new(width: T, height: T) -> Self {
        Self { width, height }
    }
}

impl<T: Mul<Output = T> + Copy> Size<T> {
    #[inline]
    pub fn area(&self) -> T {
        self.width * self.height
    }
}

impl Size<u32> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub fn as_vec2(&self) -> glam::Vec2 {
        glam::vec2(self.width as f32, self.height as f32)
    }
}

impl<T> From<(T, T)> for Size<T> {
    #[inline]
    fn from((width, height): (T, T)) -> Self {
        Self { width, height }
    }
}

//====================================================================

/// Linear RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0., 0., 0.);
    pub const WHITE: Color = Color::rgb(1., 1., 1.);

    #[inline]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1. }
    }

    #[inline]
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    #[inline]
    fn default() -> Self {
        Self::BLACK
    }
}

//====================================================================

/// Region of the window the arena is presented in, in physical pixels.
///
/// The arena keeps its aspect ratio and is centered, leaving bars on the
/// sides or at the top and bottom when the window's aspect ratio differs.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub scale: f32,
}

impl Viewport {
    pub fn letterbox(arena: Size<u32>, window: Size<u32>) -> Self {
        if arena.is_empty() || window.is_empty() {
            return Self::default();
        }

        let arena = arena.as_vec2();
        let window = window.as_vec2();

        let scale = (window.x / arena.x).min(window.y / arena.y);

        // Whole pixels, kept inside the window. The scaled arena can exceed
        // the window by a rounding error.
        let size = (arena * scale).round();
        let offset = ((window - size) / 2.).round().max(glam::Vec2::ZERO);
        let size = size.min(window - offset);

        Self {
            x: offset.x,
            y: offset.y,
            width: size.x,
            height: size.y,
            scale,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.scale <= 0. || self.width <= 0. || self.height <= 0.
    }

    /// Translates a window position into arena coordinates.
    pub fn to_arena(&self, window_pos: glam::Vec2) -> glam::Vec2 {
        if self.is_empty() {
            return glam::Vec2::ZERO;
        }

        (window_pos - glam::vec2(self.x, self.y)) / self.scale
    }

    pub fn contains(&self, window_pos: glam::Vec2) -> bool {
        window_pos.x >= self.x
            && window_pos.y >= self.y
            && window_pos.x < self.x + self.width
            && window_pos.y < self.y + self.height
    }
}

//====================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ARENA: Size<u32> = Size::new(1920, 1080);

    #[test]
    fn size_helpers() {
        let size = Size::new(4u32, 3);
        assert_eq!(size.area(), 12);
        assert!(!size.is_empty());
        assert!(Size::new(0u32, 10).is_empty());
        assert_eq!(Size::from((7u32, 9u32)), Size::new(7, 9));
    }

    #[test]
    fn letterbox_matching_aspect_fills_window() {
        let viewport = Viewport::letterbox(ARENA, Size::new(960, 540));

        assert_eq!(
            viewport,
            Viewport {
                x: 0.,
                y: 0.,
                width: 960.,
                height: 540.,
                scale: 0.5,
            }
        );
    }

    #[test]
    fn letterbox_taller_window_adds_horizontal_bars() {
        let viewport = Viewport::letterbox(ARENA, Size::new(3840, 2400));

        assert_eq!(viewport.scale, 2.);
        assert_eq!(viewport.x, 0.);
        assert_eq!(viewport.y, 120.);
        assert_eq!(viewport.width, 3840.);
        assert_eq!(viewport.height, 2160.);
    }

    #[test]
    fn letterbox_wider_window_adds_vertical_bars() {
        let viewport = Viewport::letterbox(ARENA, Size::new(2400, 540));

        assert_eq!(viewport.scale, 0.5);
        assert_eq!(viewport.x, 720.);
        assert_eq!(viewport.y, 0.);
        assert_eq!(viewport.width, 960.);
    }

    #[test]
    fn letterbox_degenerate_sizes_are_empty() {
        assert!(Viewport::letterbox(ARENA, Size::new(0, 0)).is_empty());
        assert!(Viewport::letterbox(Size::new(0, 1080), Size::new(800, 600)).is_empty());
    }

    #[test]
    fn letterbox_stays_inside_window() {
        let windows = (1..4096u32)
            .step_by(37)
            .flat_map(|width| (1..2400u32).step_by(29).map(move |height| (width, height)))
            .chain([(884, 497), (1366, 768), (1280, 1024), (1, 1)]);

        windows.for_each(|(width, height)| {
            let viewport = Viewport::letterbox(ARENA, Size::new(width, height));

            assert!(viewport.x >= 0. && viewport.y >= 0., "{:?}", viewport);
            assert!(viewport.x + viewport.width <= width as f32, "{:?}", viewport);
            assert!(viewport.y + viewport.height <= height as f32, "{:?}", viewport);
        });
    }

    #[test]
    fn letterbox_odd_window_fills_its_height() {
        let viewport = Viewport::letterbox(ARENA, Size::new(884, 497));

        assert_eq!(viewport.y, 0.);
        assert_eq!(viewport.height, 497.);
        assert_eq!(viewport.x, 0.);
        assert_eq!(viewport.width, 884.);
    }

    #[test]
    fn to_arena_inverts_letterbox() {
        let viewport = Viewport::letterbox(ARENA, Size::new(3840, 2400));

        assert_eq!(viewport.to_arena(glam::vec2(0., 120.)), glam::Vec2::ZERO);
        assert_eq!(
            viewport.to_arena(glam::vec2(3840., 2280.)),
            glam::vec2(1920., 1080.)
        );
        assert_eq!(
            viewport.to_arena(glam::vec2(1920., 1200.)),
            glam::vec2(960., 540.)
        );
    }

    #[test]
    fn to_arena_on_empty_viewport_is_origin() {
        let viewport = Viewport::default();
        assert_eq!(viewport.to_arena(glam::vec2(300., 200.)), glam::Vec2::ZERO);
    }

    #[test]
    fn contains_excludes_bars() {
        let viewport = Viewport::letterbox(ARENA, Size::new(3840, 2400));

        assert!(viewport.contains(glam::vec2(0., 120.)));
        assert!(viewport.contains(glam::vec2(1000., 1000.)));
        assert!(!viewport.contains(glam::vec2(1000., 50.)));
        assert!(!viewport.contains(glam::vec2(1000., 2280.)));
    }
}

//====================================================================
