//! The hello button widget.
//!
//! A trigger control opens a message surface reading `hello!`; a close
//! control, a backdrop click, Escape or a programmatic call closes it. The
//! state machine has two states and lives in [`WidgetState`]; presentation
//! is delegated to a swappable [`Adapter`](crate::ui::Adapter).

mod button;
mod state;

pub use button::HelloButton;
pub use state::{
    DEFAULT_LABEL, DismissReason, Intent, MESSAGE, SURFACE_TEST_ID, TRIGGER_TEST_ID, Transition,
    Visibility, WidgetState,
};

/// Interaction contract shared by every presentation of the widget.
pub trait Interaction {
    /// Current visibility of the message surface.
    fn visibility(&self) -> Visibility;

    /// Open the surface. Idempotent while open.
    fn activate_trigger(&mut self) -> Transition;

    /// Close the surface. Idempotent while closed.
    fn dismiss(&mut self, reason: DismissReason) -> Transition;

    /// Whether the surface is shown.
    fn is_open(&self) -> bool {
        self.visibility().is_open()
    }

    /// Route an [`Intent`] to the matching operation.
    fn apply(&mut self, intent: Intent) -> Transition {
        match intent {
            Intent::ActivateTrigger => self.activate_trigger(),
            Intent::Dismiss(reason) => self.dismiss(reason),
        }
    }
}

impl Interaction for WidgetState {
    fn visibility(&self) -> Visibility {
        Self::visibility(self)
    }

    fn activate_trigger(&mut self) -> Transition {
        self.open()
    }

    fn dismiss(&mut self, _reason: DismissReason) -> Transition {
        self.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn intent_strategy() -> impl Strategy<Value = Intent> {
        prop_oneof![
            Just(Intent::ActivateTrigger),
            Just(Intent::Dismiss(DismissReason::CloseControl)),
            Just(Intent::Dismiss(DismissReason::Backdrop)),
            Just(Intent::Dismiss(DismissReason::Escape)),
            Just(Intent::Dismiss(DismissReason::Programmatic)),
        ]
    }

    fn intent_sequence(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<Intent>> {
        proptest::collection::vec(intent_strategy(), len)
    }

    proptest! {
        #[test]
        fn open_iff_last_intent_was_trigger(intents in intent_sequence(0..32)) {
            let mut state = WidgetState::default();
            for intent in &intents {
                state.apply(*intent);
            }
            let expected = matches!(intents.last(), Some(Intent::ActivateTrigger));
            prop_assert_eq!(state.is_open(), expected);
        }

        #[test]
        fn transitions_report_real_changes(intents in intent_sequence(1..32)) {
            let mut state = WidgetState::default();
            for intent in intents {
                let before = state.visibility();
                let transition = state.apply(intent);
                prop_assert_eq!(transition.is_changed(), before != state.visibility());
                prop_assert_eq!(transition.visibility(), state.visibility());
            }
        }
    }
}
