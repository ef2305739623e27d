//! Wrapping flow layout for tag-like elements, with toggle selection.
//!
//! [`FlowLayout`] measures and arranges tags into left-to-right rows that
//! wrap when a row runs out of width. [`CheckedFlowLayout`] wraps it and
//! keeps a [`SelectionSet`] in sync with activation of individual tags.

pub mod checked;
pub mod config;
pub mod error;
pub mod event;
pub mod hit;
pub mod layout;
pub mod selection;
pub mod tag;
pub mod text;
pub mod types;

pub use checked::{CheckedFlowLayout, SelectionListener};
pub use config::{FlowConfig, TagStyle};
pub use error::TagError;
pub use event::{dispatch, Event, EventResult, Key};
pub use hit::hit_test;
pub use layout::{BoundsPool, FlowLayout, Line, Rect, Size};
pub use selection::SelectionSet;
pub use tag::Tag;
pub use text::{display_width, CellMeasure, TextMeasure};
pub use types::*;
