//! Color palette for the presentation variants
//!
//! Terminal approximations of each component library's default theme.

use ratatui::style::Color;

// Page chrome
pub const PAGE_BG: Color = Color::Rgb(243, 244, 246);
pub const PAGE_TEXT: Color = Color::Rgb(55, 65, 81);
pub const STATUS_BG: Color = Color::Rgb(50, 55, 70);
pub const STATUS_TEXT: Color = Color::Rgb(220, 220, 230);
pub const STATUS_OPEN: Color = Color::Rgb(120, 180, 120);

// Shared surface
pub const SURFACE_BG: Color = Color::Rgb(255, 255, 255);
pub const SURFACE_TEXT: Color = Color::Rgb(17, 25, 40);
pub const ON_PRIMARY: Color = Color::Rgb(255, 255, 255);

// Material
pub const MATERIAL_PRIMARY: Color = Color::Rgb(25, 118, 210);
pub const MATERIAL_BORDER: Color = Color::Rgb(0, 0, 0);

// Material Tailwind
pub const MATERIAL_TAILWIND_BLUE: Color = Color::Rgb(33, 150, 243);
pub const MATERIAL_TAILWIND_BORDER: Color = Color::Rgb(176, 190, 197);

// Flowbite
pub const FLOWBITE_CYAN: Color = Color::Rgb(14, 116, 144);
pub const FLOWBITE_BORDER: Color = Color::Rgb(229, 231, 235);

// Tailgrids
pub const TAILGRIDS_PRIMARY: Color = Color::Rgb(48, 86, 211);
pub const TAILGRIDS_DARK: Color = Color::Rgb(17, 25, 40);
pub const TAILGRIDS_BODY: Color = Color::Rgb(99, 115, 129);
