//! Sequence matching and textual diffs.
//!
//! [`SequenceMatcher`] finds the matching blocks between two sequences of
//! hashable elements and turns them into [`OpCode`]s, which
//! [`group`](crate::group) windows into hunks and [`render`](crate::render)
//! prints as unified or context diffs.

pub mod close;
pub mod error;
pub mod group;
pub mod lines;
pub mod matcher;
pub mod render;

pub use error::{DiffError, Result};
pub use group::Hunk;
pub use matcher::{Match, OpCode, SequenceMatcher, Tag};
pub use render::{context_diff, unified_diff, DiffRequest};
