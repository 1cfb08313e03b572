//! Widget state and the open/closed state machine.

use serde::Serialize;

/// Trigger caption used when the caller does not supply one.
pub const DEFAULT_LABEL: &str = "Open Modal";

/// Fixed text shown on the message surface.
pub const MESSAGE: &str = "hello!";

/// Test id of the trigger control.
pub const TRIGGER_TEST_ID: &str = "hello-button";

/// Test id of the message surface.
pub const SURFACE_TEST_ID: &str = "hello-modal";

/// Whether the message surface is shown.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// No surface in the scene. Every widget starts here.
    #[default]
    Closed,
    /// The surface is mounted and shows [`MESSAGE`].
    Open,
}

impl Visibility {
    /// `true` for [`Visibility::Open`].
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Lowercase label shown in the status bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Open => "open",
        }
    }
}

/// Why the surface was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissReason {
    /// The explicit close control inside the surface was activated.
    CloseControl,
    /// The overlay area outside the surface was clicked.
    Backdrop,
    /// Escape was pressed and the presentation honours it.
    Escape,
    /// The embedding code closed the surface.
    Programmatic,
}

/// What activating a hit region asks the widget to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "reason")]
pub enum Intent {
    /// Open the surface.
    ActivateTrigger,
    /// Close the surface.
    Dismiss(DismissReason),
}

/// Outcome of an operation on the widget state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Visibility moved between states; the presentation must refresh.
    Changed {
        /// State before the operation.
        from: Visibility,
        /// State after the operation.
        to: Visibility,
    },
    /// The operation was a no-op.
    Unchanged(Visibility),
}

impl Transition {
    pub(crate) fn between(from: Visibility, to: Visibility) -> Self {
        if from == to {
            Self::Unchanged(to)
        } else {
            Self::Changed { from, to }
        }
    }

    /// Whether the state changed.
    #[must_use]
    pub const fn is_changed(self) -> bool {
        matches!(self, Self::Changed { .. })
    }

    /// Visibility after the operation.
    #[must_use]
    pub const fn visibility(self) -> Visibility {
        match self {
            Self::Changed { to, .. } => to,
            Self::Unchanged(current) => current,
        }
    }
}

/// State owned by exactly one widget instance.
///
/// `visibility` is the only thing deciding whether the message surface is
/// part of the rendered scene. The label never affects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetState {
    visibility: Visibility,
    label: String,
}

impl WidgetState {
    /// Fresh, closed state with the given trigger label.
    ///
    /// Any text is accepted as-is, including the empty string.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            visibility: Visibility::Closed,
            label: label.into(),
        }
    }

    /// Current visibility.
    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Whether the surface is shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.visibility.is_open()
    }

    /// Trigger label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// `Closed -> Open`. No-op while open.
    pub fn open(&mut self) -> Transition {
        self.set(Visibility::Open)
    }

    /// `Open -> Closed`. No-op while closed.
    pub fn close(&mut self) -> Transition {
        self.set(Visibility::Closed)
    }

    fn set(&mut self, to: Visibility) -> Transition {
        let from = self.visibility;
        self.visibility = to;
        Transition::between(from, to)
    }
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL)
    }
}
