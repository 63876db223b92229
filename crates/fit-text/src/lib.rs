//! # fit-text
//!
//! Shrink-to-fit font sizing for label widgets.
//!
//! This crate provides the sizing algorithm and widget state with zero
//! dependencies on any specific text engine or toolkit. Measurement is
//! injected through the [`TextMeasurer`] trait; backends like
//! `fit-text-cosmic` implement it.
//!
//! Typical embedding: a host label widget owns a [`FitLabel`] and forwards
//! its text-changed and size-changed callbacks to it. All work happens
//! synchronously inside those callbacks on the host's UI thread; nothing here
//! blocks, spawns, or persists.

mod caps;
mod label;
mod measure;
mod primitives;
mod sizer;

pub use caps::*;
pub use label::*;
pub use measure::*;
pub use primitives::*;
pub use sizer::*;
