//! Step navigation and progressive disclosure.
//!
//! - [`outline`]: the immutable step sequence and its chapters
//! - [`state`]: [`NavigationState`] and its pure transitions
//! - [`controller`]: [`NavigationController`], the single writer of the state
//! - [`sub_nav`]: the two-level track/sub-step pattern used inside panels
//!
//! None of the navigation operations fail. Indices outside the valid range
//! are ignored and leave the state exactly as it was.

pub mod controller;
pub mod outline;
pub mod state;
pub mod sub_nav;

pub use controller::NavigationController;
pub use outline::{Chapter, Outline, OutlineBuilder, Step};
pub use state::{Direction, NavInput, NavigationState};
pub use sub_nav::{SubNavigation, Track, TrackPanel};
