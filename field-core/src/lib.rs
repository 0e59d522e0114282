//! Core library for the animated point-field background.
//!
//! Main components:
//! - [`point`] — free, pointer and fixed points.
//! - [`field`] — the point collection, per-pair influence and rendering.
//! - [`surface`] — the 2-D drawing surface the field renders onto.
//! - [`schedule`] — the "request next frame" hook driving the animation.
//! - [`config`] — construction options and tuning constants.
//! - [`error`] — construction errors.
//! - [`types`] — shared type aliases and IDs.

pub mod config;
pub mod error;
pub mod field;
pub mod point;
pub mod schedule;
pub mod surface;
pub mod types;

pub use error::FieldError;
