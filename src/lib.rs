//====================================================================

pub use common;
pub use engine;
pub use game;
pub use renderer;

pub mod prelude {
    pub use common::{Color, Size};
    pub use engine::{App, Runner, Screen, State, Termination};
    pub use game::SpaceShooter;
}

//====================================================================
