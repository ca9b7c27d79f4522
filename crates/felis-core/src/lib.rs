//! # felis-core
//!
//! Canonical domain types for Felis.
//!
//! This crate provides the foundational types shared across all Felis crates:
//! - [`Breed`] — the canonical breed record the rest of the application reads
//! - [`CoatType`] — coat length with parsing and formatting helpers
//! - [`TraitScores`] and [`CareAdvice`] — per-breed derived data
//! - [`CatImage`] — ephemeral photo records
//!
//! The canonical model is owned here; construction happens in
//! `felis-transform`, the only place raw upstream data is handled. Everything
//! downstream of the transformer sees only these strict types.

pub mod breed;
pub mod coat;
pub mod image;

pub use breed::{Breed, CareAdvice, TraitScores};
pub use coat::{CoatType, ParseCoatTypeError};
pub use image::CatImage;
