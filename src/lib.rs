//! hello-button - a trigger that opens a `hello!` modal in the terminal
//!
//! The open/close interaction is written once in [`widget`] and presented by
//! one of several swappable adapters in [`ui::variants`]. Every presentation
//! lowers to a [`ui::Scene`]: a tree of hit regions that is painted with
//! ratatui and can be queried by test id, like rendered markup.

pub mod app;
pub mod config;
pub mod page;
pub mod paths;
pub mod stories;
pub mod tui;
pub mod ui;
pub mod widget;

pub use app::App;
pub use config::Config;
pub use page::Page;
pub use ui::{Adapter, Mount, Scene, Variant};
pub use widget::{HelloButton, Interaction, Transition, Visibility};
