//! Library-style building blocks.
//!
//! These stand in for the `Button` and `Modal` components a UI library would
//! provide. Delegating adapters configure them; their dismissal behaviour is
//! the library's contract, not the widget's.

mod button;
mod modal;

pub use button::{ButtonLook, trigger_button};
pub(crate) use modal::CLOSE_GLYPH;
pub use modal::{Modal, ModalLook, ModalOptions, SurfaceWidth, TestIdPlacement};
