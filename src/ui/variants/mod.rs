//! Built-in presentations, one per component-library flavour.
//!
//! Four of them delegate the overlay to the [`Modal`] primitive and inherit
//! its dismissal contract; [`Tailgrids`] draws its own overlay and stops
//! propagation on the surface explicitly.

mod flowbite;
mod material;
mod material_tailwind;
mod plain;
mod tailgrids;

pub use flowbite::Flowbite;
pub use material::Material;
pub use material_tailwind::MaterialTailwind;
pub use plain::Plain;
pub use tailgrids::Tailgrids;

use super::primitives::{ButtonLook, Modal, trigger_button};
use super::scene::{NodeId, Scene};
use super::{Adapter, Mount};
use crate::widget::WidgetState;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Selects a built-in adapter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Contained button and boxed modal in the Material style.
    Material,
    /// Filled button and centered dialog in the Material Tailwind style.
    MaterialTailwind,
    /// Flowbite button and non-dismissible modal.
    Flowbite,
    /// Hand-rolled overlay with its own close control.
    #[default]
    Tailgrids,
    /// Monochrome fallback for terminals without colour.
    Plain,
}

impl Variant {
    /// All variants, in display order.
    pub const ALL: &'static [Self] = &[
        Self::Material,
        Self::MaterialTailwind,
        Self::Flowbite,
        Self::Tailgrids,
        Self::Plain,
    ];

    /// Kebab-case name, as accepted on the command line and in config.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Material => "material",
            Self::MaterialTailwind => "material-tailwind",
            Self::Flowbite => "flowbite",
            Self::Tailgrids => "tailgrids",
            Self::Plain => "plain",
        }
    }

    /// Instantiate the adapter for this variant.
    #[must_use]
    pub fn adapter(self) -> Box<dyn Adapter> {
        match self {
            Self::Material => Box::new(Material),
            Self::MaterialTailwind => Box::new(MaterialTailwind),
            Self::Flowbite => Box::new(Flowbite),
            Self::Tailgrids => Box::new(Tailgrids),
            Self::Plain => Box::new(Plain),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Trigger plus, while open, the library modal.
fn delegated_scene(
    state: &WidgetState,
    mount: Mount,
    trigger: &ButtonLook,
    modal: &Modal,
) -> Scene {
    let mut scene = Scene::new(mount.viewport);
    trigger_button(&mut scene, NodeId::ROOT, mount.host, trigger, state.label());
    if state.is_open() {
        modal.build(&mut scene, mount.viewport);
    }
    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{MESSAGE, SURFACE_TEST_ID, TRIGGER_TEST_ID};
    use ratatui::layout::Rect;
    use rstest::rstest;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn mount() -> Mount {
        Mount::fullscreen(Rect::new(0, 0, 100, 30))
    }

    #[rstest]
    #[case(Variant::Material)]
    #[case(Variant::MaterialTailwind)]
    #[case(Variant::Flowbite)]
    #[case(Variant::Tailgrids)]
    #[case(Variant::Plain)]
    fn test_adapter_reports_its_variant(#[case] variant: Variant) {
        assert_eq!(variant.adapter().variant(), variant);
    }

    #[rstest]
    #[case(Variant::Material)]
    #[case(Variant::MaterialTailwind)]
    #[case(Variant::Flowbite)]
    #[case(Variant::Tailgrids)]
    #[case(Variant::Plain)]
    fn test_closed_scene_has_no_surface(#[case] variant: Variant) -> TestResult {
        let scene = variant.adapter().build(&WidgetState::default(), mount());
        let trigger = scene.get_by_test_id(TRIGGER_TEST_ID)?;
        assert_eq!(scene.text_content(trigger.id()), "Open Modal");
        assert!(scene.query_by_test_id(SURFACE_TEST_ID)?.is_none());
        assert!(scene.get_by_text(MESSAGE).is_err());
        assert_eq!(scene.modal_root(), None);
        Ok(())
    }

    #[rstest]
    #[case(Variant::Material)]
    #[case(Variant::MaterialTailwind)]
    #[case(Variant::Flowbite)]
    #[case(Variant::Tailgrids)]
    #[case(Variant::Plain)]
    fn test_open_scene_has_exactly_one_surface(#[case] variant: Variant) -> TestResult {
        let mut state = WidgetState::new("Click Me!");
        state.open();
        let scene = variant.adapter().build(&state, mount());

        let surface = scene.get_by_test_id(SURFACE_TEST_ID)?;
        assert!(scene.text_content(surface.id()).contains(MESSAGE));
        assert_eq!(scene.query_all_by_test_id(TRIGGER_TEST_ID).len(), 1);
        assert!(scene.modal_root().is_some());
        Ok(())
    }

    #[rstest]
    #[case(Variant::Material)]
    #[case(Variant::MaterialTailwind)]
    #[case(Variant::Flowbite)]
    #[case(Variant::Tailgrids)]
    #[case(Variant::Plain)]
    fn test_click_on_message_is_consumed(#[case] variant: Variant) -> TestResult {
        let mut state = WidgetState::default();
        state.open();
        let scene = variant.adapter().build(&state, mount());

        let message = scene.get_by_text(MESSAGE)?;
        let dispatch = scene.dispatch_click(message.rect().x, message.rect().y);
        assert!(dispatch.intents.is_empty());
        assert!(dispatch.stopped_at.is_some());
        Ok(())
    }

    #[rstest]
    #[case(Variant::Material, true)]
    #[case(Variant::MaterialTailwind, true)]
    #[case(Variant::Flowbite, false)]
    #[case(Variant::Tailgrids, true)]
    #[case(Variant::Plain, true)]
    fn test_backdrop_contract(#[case] variant: Variant, #[case] dismisses: bool) {
        let mut state = WidgetState::default();
        state.open();
        let scene = variant.adapter().build(&state, mount());

        let dispatch = scene.dispatch_click(0, 0);
        assert_eq!(!dispatch.intents.is_empty(), dismisses);
    }

    #[rstest]
    #[case(Variant::Material, true)]
    #[case(Variant::MaterialTailwind, true)]
    #[case(Variant::Flowbite, true)]
    #[case(Variant::Tailgrids, false)]
    #[case(Variant::Plain, true)]
    fn test_escape_contract(#[case] variant: Variant, #[case] escape: bool) {
        assert_eq!(variant.adapter().dismiss_on_escape(), escape);
    }

    #[test]
    fn test_names_match_serde_and_clap() -> TestResult {
        for variant in Variant::ALL {
            let json = serde_json::to_string(variant)?;
            assert_eq!(json, format!("\"{}\"", variant.name()));
            let parsed = Variant::from_str(variant.name(), false)?;
            assert_eq!(parsed, *variant);
            assert_eq!(variant.to_string(), variant.name());
        }
        Ok(())
    }
}
