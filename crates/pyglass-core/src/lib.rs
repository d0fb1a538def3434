//! Core text infrastructure for pyglass.
//!
//! This crate provides language-agnostic building blocks shared by the
//! parse-tree crates:
//! - Byte spans over source text
//! - 1-indexed line:column positions
//! - A line index for position/offset conversions

pub mod span;
pub mod text;

pub use span::Span;
pub use text::{LineIndex, Position};
