//! Styles for the tagnotes CLI.
//!
//! Renderers refer to styles by what they show (a title, a tag, an id), never by
//! color, so the palette can change in one place. All styles are built once
//! through `once_cell::sync::Lazy`. Whether color is emitted at all is decided by
//! `console` (terminal detection) and the `color` config setting.

use console::Style;
use once_cell::sync::Lazy;

pub static TITLE: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static TAG: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static ID: Lazy<Style> = Lazy::new(|| Style::new().color256(244));
pub static MUTED: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static SEPARATOR: Lazy<Style> = Lazy::new(|| Style::new().color256(240));

pub static INFO: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow().bold());
