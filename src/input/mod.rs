//! Keyboard input handling.
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> App::execute()
//! ```
//!
//! - [`command`]: the [`Command`] enum
//! - [`context`]: [`InputContext`], the state a key is interpreted against
//! - [`keybindings`]: default global, focus and step bindings
//! - [`registry`]: [`CommandRegistry`], the priority-ordered lookup

pub mod command;
pub mod context;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::InputContext;
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;
