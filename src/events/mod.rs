pub mod keyboard;
pub mod pointer;
pub mod scroll;

pub use keyboard::{wire_viewer_buttons, wire_viewer_keydown};
pub use pointer::{wire_viewer_pointer, PointerWiring};
pub use scroll::wire_scroll;
