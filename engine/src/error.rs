//====================================================================

/// Returned from [`crate::App::update`] to end the run loop.
///
/// Not a failure: the runner treats it as a clean exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Termination {
    #[error("quit requested")]
    Quit,
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error(transparent)]
    Renderer(#[from] renderer::RendererError),
}

//====================================================================


//====================================================================
