//! Renderers
//!
//! `paginator` places items on the grid; `latex` turns the placed items into
//! a document.

pub mod latex;
pub mod paginator;

pub use latex::{persist, render, KanjiPoster, LatexRenderer, TableDocument};
pub use paginator::{GridLayout, Slot};
