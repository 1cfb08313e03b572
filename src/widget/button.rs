//! The widget instance: state plus the adapter presenting it.

use super::{DEFAULT_LABEL, DismissReason, Intent, Interaction, Transition, Visibility, WidgetState};
use crate::ui::{Adapter, Mount, Scene, Variant};
use tracing::debug;
use uuid::Uuid;

/// A trigger button that opens a `hello!` surface.
///
/// Each instance owns its state; two buttons on the same page never affect
/// each other. The adapter can be swapped at any time without touching the
/// state.
#[derive(Debug)]
pub struct HelloButton {
    id: Uuid,
    state: WidgetState,
    adapter: Box<dyn Adapter>,
}

impl HelloButton {
    /// Mount a button with the default presentation.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_variant(label, Variant::default())
    }

    /// Mount a button presented by one of the built-in variants.
    #[must_use]
    pub fn with_variant(label: impl Into<String>, variant: Variant) -> Self {
        Self::with_adapter(label, variant.adapter())
    }

    /// Mount a button presented by a custom adapter.
    #[must_use]
    pub fn with_adapter(label: impl Into<String>, adapter: Box<dyn Adapter>) -> Self {
        let button = Self {
            id: Uuid::new_v4(),
            state: WidgetState::new(label),
            adapter,
        };
        debug!(
            widget = %button.id,
            variant = %button.adapter.variant(),
            label = button.state.label(),
            "Mounted hello button"
        );
        button
    }

    /// Instance id, used in log fields.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Read-only view of the state.
    #[must_use]
    pub const fn state(&self) -> &WidgetState {
        &self.state
    }

    /// Trigger label.
    #[must_use]
    pub fn label(&self) -> &str {
        self.state.label()
    }

    /// Variant of the current adapter.
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.adapter.variant()
    }

    /// The adapter presenting this widget.
    #[must_use]
    pub fn adapter(&self) -> &dyn Adapter {
        self.adapter.as_ref()
    }

    /// Replace the presentation, keeping visibility and label.
    pub fn set_adapter(&mut self, adapter: Box<dyn Adapter>) {
        debug!(
            widget = %self.id,
            from = %self.adapter.variant(),
            to = %adapter.variant(),
            "Swapped adapter"
        );
        self.adapter = adapter;
    }

    /// Replace the presentation with a built-in variant.
    pub fn set_variant(&mut self, variant: Variant) {
        self.set_adapter(variant.adapter());
    }

    /// Lower the current state into a scene.
    #[must_use]
    pub fn scene(&self, mount: Mount) -> Scene {
        self.adapter.build(&self.state, mount)
    }

    /// Hit-test a click against the current scene and apply what it asks for.
    pub fn click(&mut self, mount: Mount, x: u16, y: u16) -> Transition {
        let dispatch = self.scene(mount).dispatch_click(x, y);
        self.apply_all(&dispatch.intents)
    }

    /// Apply intents in order and report the net change.
    pub fn apply_all(&mut self, intents: &[Intent]) -> Transition {
        let from = self.state.visibility();
        for intent in intents {
            self.apply(*intent);
        }
        Transition::between(from, self.state.visibility())
    }

    /// Escape key: dismisses only when the presentation honours Escape.
    pub fn escape(&mut self) -> Transition {
        if self.adapter.dismiss_on_escape() {
            self.dismiss(DismissReason::Escape)
        } else {
            Transition::Unchanged(self.state.visibility())
        }
    }
}

impl Default for HelloButton {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL)
    }
}

impl Interaction for HelloButton {
    fn visibility(&self) -> Visibility {
        self.state.visibility()
    }

    fn activate_trigger(&mut self) -> Transition {
        let transition = self.state.open();
        debug!(widget = %self.id, ?transition, "Trigger activated");
        transition
    }

    fn dismiss(&mut self, reason: DismissReason) -> Transition {
        let transition = self.state.close();
        debug!(widget = %self.id, ?reason, ?transition, "Dismissed");
        transition
    }
}
