//! Presentation of the widget.
//!
//! An [`Adapter`] lowers [`WidgetState`] into a [`Scene`]. The state machine
//! never sees the adapter, so swapping presentations leaves behaviour alone.

pub(crate) mod colors;
pub mod layout;
pub mod primitives;
pub mod scene;
mod status_bar;
pub mod variants;

pub use scene::{Dispatch, Fill, Look, Node, NodeId, QueryError, Role, Scene, SnapshotNode};
pub use status_bar::Widget as StatusBarWidget;
pub use variants::Variant;

use crate::widget::WidgetState;
use ratatui::layout::Rect;
use std::fmt;

/// Where a widget is mounted on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mount {
    /// Region the trigger is centered in.
    pub host: Rect,
    /// Region covered by overlays.
    pub viewport: Rect,
}

impl Mount {
    /// Mount with a separate host and viewport.
    #[must_use]
    pub const fn new(host: Rect, viewport: Rect) -> Self {
        Self { host, viewport }
    }

    /// Host and viewport are the same area.
    #[must_use]
    pub const fn fullscreen(area: Rect) -> Self {
        Self {
            host: area,
            viewport: area,
        }
    }
}

/// A presentation binding for one toolkit flavour.
pub trait Adapter: fmt::Debug + Send + Sync {
    /// Which built-in flavour this is.
    fn variant(&self) -> Variant;

    /// Whether Escape dismisses the surface.
    fn dismiss_on_escape(&self) -> bool;

    /// Lower `state` into a scene.
    ///
    /// The surface must be present if and only if `state` is open.
    fn build(&self, state: &WidgetState, mount: Mount) -> Scene;
}
