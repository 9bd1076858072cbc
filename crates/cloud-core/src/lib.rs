//! Procedural generation of primitive "clouds": a row of boxes or icosahedra
//! along one axis with per-instance random rotation and scale.

pub mod cloud;
pub mod config;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod host;
pub mod instance;
pub mod math;
pub mod panel;
pub mod scene;

pub use cloud::CloudCollection;
pub use config::GenerationParameters;
pub use error::ParameterError;
pub use generator::{generate, CloudGenerator};
pub use geometry::PrimitiveKind;
pub use host::CloudHost;
pub use instance::InstanceTransform;
