//====================================================================

use winit::application::ApplicationHandler;

use crate::{App, OuterState, Runner};

//====================================================================

impl<A: App> ApplicationHandler for Runner<A> {
    fn resumed(&mut self, event_loop: &winit::event_loop::ActiveEventLoop) {
        log::trace!("App Resumed - Creating state.");

        if self.state.is_some() {
            log::warn!("State already exists.");
            return;
        }

        match OuterState::<A>::new(event_loop, &self.config) {
            Ok(state) => {
                state.request_redraw();
                self.state = Some(state);
            }
            Err(err) => {
                log::error!("Unable to start: {}", err);
                self.error = Some(err);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &winit::event_loop::ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: winit::event::WindowEvent,
    ) {
        if let Some(state) = &mut self.state {
            state.window_event(event_loop, window_id, event);
        }
    }

    fn new_events(
        &mut self,
        _event_loop: &winit::event_loop::ActiveEventLoop,
        cause: winit::event::StartCause,
    ) {
        if let Some(state) = &mut self.state {
            if let winit::event::StartCause::ResumeTimeReached { .. } = cause {
                state.request_redraw();
            }
        }
    }

    fn device_event(
        &mut self,
        event_loop: &winit::event_loop::ActiveEventLoop,
        device_id: winit::event::DeviceId,
        event: winit::event::DeviceEvent,
    ) {
        if let Some(state) = &mut self.state {
            state.device_event(event_loop, device_id, event);
        }
    }

    fn exiting(&mut self, _event_loop: &winit::event_loop::ActiveEventLoop) {
        // Renderer and window are released here, before the event loop returns.
        if self.state.take().is_some() {
            log::info!("Releasing window and renderer.");
        }
    }
}

//====================================================================
