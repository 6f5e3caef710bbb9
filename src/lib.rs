//! starplot-rs: geometry and animation engine for radial multi-axis charts.
//!
//! The crate lays out N ≥ 3 axes around a center point, maps one value per
//! axis onto it, builds the colored triangle fan joining neighbouring values,
//! and eases values and axis directions toward new targets on every call.
//! Scene-graph primitives live in a host-provided [`render::SceneBackend`].

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{StarplotConfig, StarplotEngine};
pub use error::{StarplotError, StarplotResult};
