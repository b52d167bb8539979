//! Scene files: one box and the planes to cut it with.

use std::path::{Path, PathBuf};

use cubeplane_cuboid::Cuboid;
use cubeplane_geom::{GeomError, Plane};
use cubeplane_math::{Point3, Vec3};
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading or validating a scene.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The scene file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The scene is not valid TOML or does not match the schema.
    #[error("invalid scene file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The scene parsed but describes unusable geometry.
    #[error("invalid scene: {0}")]
    Invalid(String),

    /// The box rejected a value.
    #[error("invalid box: {0}")]
    Cuboid(#[source] GeomError),

    /// A plane rejected a value.
    #[error("invalid plane {index}: {source}")]
    Plane {
        /// Position of the plane in the file.
        index: usize,
        /// Underlying error.
        source: GeomError,
    },
}

/// Box parameters. `height` is measured along Z and `depth` along Y.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CuboidSettings {
    /// Defining corner.
    pub corner: [f64; 3],
    /// Edge length along X.
    pub width: f64,
    /// Edge length along Z.
    pub height: f64,
    /// Edge length along Y.
    pub depth: f64,
}

impl Default for CuboidSettings {
    fn default() -> Self {
        Self {
            corner: [0.0; 3],
            width: 1.0,
            height: 1.0,
            depth: 1.0,
        }
    }
}

/// A plane `normal · p = offset`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlaneSettings {
    /// Plane normal; need not be unit length.
    pub normal: [f64; 3],
    /// Right-hand side of the plane equation.
    #[serde(default)]
    pub offset: f64,
}

/// A complete scene.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SceneSettings {
    /// The box; the unit box when omitted.
    #[serde(default)]
    pub cuboid: CuboidSettings,
    /// Planes to intersect with the box.
    #[serde(default)]
    pub planes: Vec<PlaneSettings>,
}

impl SceneSettings {
    /// Parse a scene from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a scene file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scene = Self::from_toml_str(&text)?;
        log::info!(
            "loaded scene {} with {} plane(s)",
            path.display(),
            scene.planes.len()
        );
        Ok(scene)
    }

    /// Validate settings and build the box and planes in one pass.
    pub fn build(&self) -> Result<(Cuboid, Vec<Plane>), ConfigError> {
        if self.planes.is_empty() {
            return Err(ConfigError::Invalid(
                "scene must define at least one [[planes]] entry".into(),
            ));
        }
        Ok((self.cuboid()?, self.planes()?))
    }

    /// Build the box.
    pub fn cuboid(&self) -> Result<Cuboid, ConfigError> {
        let c = &self.cuboid;
        Cuboid::try_new(Point3::from(c.corner), c.width, c.height, c.depth)
            .map_err(ConfigError::Cuboid)
    }

    /// Build the planes, in file order.
    pub fn planes(&self) -> Result<Vec<Plane>, ConfigError> {
        self.planes
            .iter()
            .enumerate()
            .map(|(i, p)| {
                Plane::try_new(Vec3::from(p.normal), p.offset)
                    .map_err(|source| ConfigError::Plane { index: i, source })
            })
            .collect()
    }
}
