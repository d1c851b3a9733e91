//! Glint Core - Scene description for the Glint ray caster.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Sphere`, `Light`
//! - **Scene files**: JSON loading via serde
//! - **Demo scene**: a built-in three-sphere setup
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene;
//!
//! let file = load_scene("scene.json")?;
//! println!("Loaded {} spheres", file.scene.sphere_count());
//! ```

pub mod demo;
pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use demo::default_scene;
pub use loader::{load_scene, load_scene_from_str, LoadError, LoadResult, SceneFile};
pub use scene::{Color, Light, Scene, Sphere};
