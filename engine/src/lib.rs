//====================================================================

use std::time::Duration;

use common::{Size, Viewport};
use renderer::RendererState;
use tools::{Input, KeyCode, MouseButton, MouseInput, Time};
use window::Window;
use winit::{
    event::{MouseScrollDelta, WindowEvent},
    event_loop::ActiveEventLoop,
};

mod error;
mod headless;
mod runner;
pub mod tools;
pub mod window;

pub use error::{EngineError, Termination};
pub use headless::Headless;
pub use renderer::Screen;
pub use window::{Config, WindowConfig};

//====================================================================

pub struct Runner<A: App> {
    config: Config,
    state: Option<OuterState<A>>,
    error: Option<EngineError>,
}

impl<A: App> Runner<A> {
    /// Opens the window and drives `A` until it terminates or the window
    /// is closed.
    pub fn run(config: Config) -> Result<(), EngineError> {
        let event_loop = winit::event_loop::EventLoop::new()?;

        let mut runner = Self {
            config,
            state: None,
            error: None,
        };

        event_loop.run_app(&mut runner)?;

        match runner.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

//====================================================================

/// Per-frame callbacks a game implements to be driven by the engine.
pub trait App: 'static {
    fn new(state: &mut State) -> Self
    where
        Self: Sized;

    /// Advances the simulation by one frame. Returning `Err` stops the loop
    /// and the app is not updated again.
    fn update(&mut self, state: &mut State) -> Result<(), Termination>;

    /// Renders into the frame's screen, which lives only for this call.
    fn draw(&self, screen: &mut Screen);

    /// Logical arena size for the given window size in physical pixels.
    fn layout(&self, window_size: Size<u32>) -> Size<u32>;
}

//====================================================================

pub struct State {
    keys: Input<KeyCode>,
    mouse_buttons: Input<MouseButton>,
    mouse: MouseInput,
    time: Time,

    window_size: Size<u32>,
    arena_size: Size<u32>,
    viewport: Viewport,
    frame: u64,
}

impl State {
    pub(crate) fn new(window_size: Size<u32>) -> Self {
        Self {
            keys: Input::default(),
            mouse_buttons: Input::default(),
            mouse: MouseInput::default(),
            time: Time::default(),
            window_size,
            arena_size: window_size,
            viewport: Viewport::letterbox(window_size, window_size),
            frame: 0,
        }
    }

    #[inline]
    pub fn keys(&self) -> &Input<KeyCode> {
        &self.keys
    }

    #[inline]
    pub fn mouse_buttons(&self) -> &Input<MouseButton> {
        &self.mouse_buttons
    }

    #[inline]
    pub fn mouse(&self) -> &MouseInput {
        &self.mouse
    }

    #[inline]
    pub fn time(&self) -> &Time {
        &self.time
    }

    #[inline]
    pub fn window_size(&self) -> Size<u32> {
        self.window_size
    }

    #[inline]
    pub fn arena_size(&self) -> Size<u32> {
        self.arena_size
    }

    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Number of frames drawn so far.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

//====================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Terminated,
}

#[derive(Debug)]
pub enum Tick {
    /// The app was updated and drew this screen.
    Draw(Screen),
    /// The app terminated; the loop should end.
    Exit,
}

/// Drives an [`App`] one frame at a time, independent of any window.
pub(crate) struct Host<A: App> {
    state: State,
    app: A,
    status: Status,
}

impl<A: App> Host<A> {
    pub fn new(window_size: Size<u32>) -> Self {
        let mut state = State::new(window_size);
        let app = A::new(&mut state);

        let mut host = Self {
            state,
            app,
            status: Status::Running,
        };
        host.layout();

        host
    }

    #[inline]
    pub fn state(&self) -> &State {
        &self.state
    }

    #[inline]
    pub fn app(&self) -> &A {
        &self.app
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    pub fn resize(&mut self, window_size: Size<u32>) {
        self.state.window_size = window_size;
        self.layout();
    }

    #[inline]
    pub fn key_input(&mut self, key: KeyCode, pressed: bool) {
        tools::process_inputs(&mut self.state.keys, key, pressed);
    }

    #[inline]
    pub fn mouse_button_input(&mut self, button: MouseButton, pressed: bool) {
        tools::process_inputs(&mut self.state.mouse_buttons, button, pressed);
    }

    #[inline]
    pub fn cursor_moved(&mut self, position: (f64, f64)) {
        tools::process_mouse_position(&mut self.state.mouse, position, &self.state.viewport);
    }

    #[inline]
    pub fn mouse_motion(&mut self, delta: (f64, f64)) {
        tools::process_mouse_motion(&mut self.state.mouse, delta);
    }

    #[inline]
    pub fn mouse_scroll(&mut self, delta: (f32, f32)) {
        tools::process_mouse_scroll(&mut self.state.mouse, delta);
    }

    pub fn tick(&mut self) -> Tick {
        if self.status == Status::Terminated {
            return Tick::Exit;
        }

        tools::tick_time(&mut self.state.time);
        self.layout();

        let result = self.app.update(&mut self.state);
        self.reset_input();

        if let Err(termination) = result {
            log::info!("App terminated: {}", termination);
            self.status = Status::Terminated;
            return Tick::Exit;
        }

        let mut screen = Screen::new(self.state.arena_size);
        self.app.draw(&mut screen);
        self.state.frame += 1;

        Tick::Draw(screen)
    }

    fn layout(&mut self) {
        let requested = self.app.layout(self.state.window_size);

        let arena_size = Size::new(requested.width.max(1), requested.height.max(1));

        if arena_size != self.state.arena_size {
            if arena_size != requested {
                log::warn!(
                    "App requested arena size ({}, {}) - clamping to ({}, {})",
                    requested.width,
                    requested.height,
                    arena_size.width,
                    arena_size.height
                );
            }

            log::debug!(
                "Arena size changed to ({}, {})",
                arena_size.width,
                arena_size.height
            );
        }

        self.state.arena_size = arena_size;
        self.state.viewport = Viewport::letterbox(arena_size, self.state.window_size);
        tools::refresh_mouse_position(&mut self.state.mouse, &self.state.viewport);
    }

    fn reset_input(&mut self) {
        tools::reset_input(&mut self.state.keys);
        tools::reset_input(&mut self.state.mouse_buttons);
        tools::reset_mouse_input(&mut self.state.mouse);
    }
}

//====================================================================

struct OuterState<A: App> {
    host: Host<A>,
    renderer: RendererState,
    window: Window,
    frame_duration: Duration,
}

impl<A: App> OuterState<A> {
    pub(crate) fn new(event_loop: &ActiveEventLoop, config: &Config) -> Result<Self, EngineError> {
        let window = Window::new(event_loop, &config.window)?;
        let renderer = RendererState::new(window.0.clone(), window.size())?;
        let host = Host::new(window.size());

        Ok(Self {
            host,
            renderer,
            window,
            frame_duration: config.frame_duration(),
        })
    }

    pub fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::Resized(new_size) => {
                if new_size.width == 0 || new_size.height == 0 {
                    log::warn!(
                        "Window resized to invalid size ({}, {})",
                        new_size.width,
                        new_size.height
                    );
                    return;
                }

                let size = Size {
                    width: new_size.width,
                    height: new_size.height,
                };

                self.renderer.resize(size);
                self.host.resize(size);
            }

            WindowEvent::CloseRequested => {
                log::info!("Window close requested. Closing App");
                event_loop.exit();
            }

            WindowEvent::Destroyed => log::error!("Window was destroyed."),

            WindowEvent::KeyboardInput { event, .. } => {
                if let winit::keyboard::PhysicalKey::Code(key) = event.physical_key {
                    self.host.key_input(key, event.state.is_pressed())
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.host.mouse_button_input(button, state.is_pressed())
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.host.cursor_moved((position.x, position.y))
            }

            WindowEvent::MouseWheel { delta, .. } => match delta {
                MouseScrollDelta::LineDelta(x, y) => self.host.mouse_scroll((x, y)),
                MouseScrollDelta::PixelDelta(pos) => {
                    self.host.mouse_scroll((pos.x as f32, pos.y as f32))
                }
            },

            WindowEvent::RedrawRequested => {
                event_loop.set_control_flow(winit::event_loop::ControlFlow::wait_duration(
                    self.frame_duration,
                ));

                self.tick(event_loop);
            }

            _ => {}
        }
    }

    pub fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: winit::event::DeviceEvent,
    ) {
        if let winit::event::DeviceEvent::MouseMotion { delta } = event {
            self.host.mouse_motion(delta);
        }
    }

    #[inline]
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }

    pub fn tick(&mut self, event_loop: &ActiveEventLoop) {
        match self.host.tick() {
            Tick::Draw(screen) => {
                self.window.inner().pre_present_notify();
                self.renderer.render(&screen);
            }
            Tick::Exit => event_loop.exit(),
        }
    }
}

//====================================================================


//====================================================================
