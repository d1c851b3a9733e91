//! JSON scene loading.
//!
//! A scene file holds the scene itself plus optional render overrides:
//!
//! ```json
//! {
//!   "name": "single",
//!   "width": 300,
//!   "height": 200,
//!   "camera": [0, 0, 1],
//!   "spheres": [
//!     { "center": [0, 0, -1], "radius": 0.7,
//!       "ambient": [0.1, 0, 0], "diffuse": [0.7, 0, 0],
//!       "specular": [1, 1, 1], "shininess": 100 }
//!   ],
//!   "light": { "position": [5, 5, 5], "ambient": [1, 1, 1],
//!              "diffuse": [1, 1, 1], "specular": [1, 1, 1] }
//! }
//! ```

use std::fs;
use std::path::Path;

use glint_math::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scene::Scene;

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid resolution {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// A scene plus the render settings a file may carry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneFile {
    #[serde(flatten)]
    pub scene: Scene,

    /// Image width override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Image height override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Camera position override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<Vec3>,
}

/// Load a scene file from disk.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<SceneFile> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)?;
    let file = load_scene_from_str(&source)?;

    log::info!(
        "Loaded scene '{}' from {} ({} spheres)",
        file.scene.name,
        path.display(),
        file.scene.sphere_count()
    );

    Ok(file)
}

/// Parse a scene file from a JSON string.
pub fn load_scene_from_str(source: &str) -> LoadResult<SceneFile> {
    let file: SceneFile = serde_json::from_str(source)?;

    if file.width == Some(0) || file.height == Some(0) {
        return Err(LoadError::InvalidResolution {
            width: file.width.unwrap_or_default(),
            height: file.height.unwrap_or_default(),
        });
    }

    Ok(file)
}
