//! `sw-effects`: operator-controlled presentation state.
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`effects`]  | `Weather`, `Hazard`, `HazardSet`, `EffectState`, `EffectSnapshot` |
//! | [`window`]   | `WindowState`                                               |
//! | [`command`]  | `Command`: textual operator commands and their parser       |
//! | [`error`]    | `EffectError`, `EffectResult<T>`                            |
//!
//! None of this state feeds back into reading generation.  It is mutated only
//! by explicit operator commands and read by the presentation layer.

pub mod command;
pub mod effects;
pub mod error;
pub mod window;


pub use command::{Command, WindowCommand};
pub use effects::{EffectSnapshot, EffectState, Hazard, HazardSet, Weather};
pub use error::{EffectError, EffectResult};
pub use window::WindowState;
