//! Input subsystem.
//!
//! Public API is platform-agnostic. The runtime translates winit window and
//! device events into `InputEvent`s (see `platform::winit`) and folds them into
//! `InputState` + `InputFrame` before each frame callback.

mod frame;
mod state;
mod types;

pub(crate) mod platform;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    MouseWheelDelta,
    PointerButtonEvent,
};
