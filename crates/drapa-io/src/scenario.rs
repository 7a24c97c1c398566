//! The TOML scenario contract for headless simulation runs.
//!
//! A scenario describes everything a run needs: the grid, how many
//! steps to take and at what timestep, the cloth configuration,
//! impulses scheduled at specific frames (so the interaction surface
//! is exercisable without an input device), and an optional OBJ export
//! of the final state.
//!
//! ```toml
//! [grid]
//! width = 20
//! height = 20
//! spacing = 0.2
//!
//! [run]
//! steps = 300
//! dt = 0.016666
//!
//! [cloth]
//! constraint_iterations = 8
//!
//! [[impulses]]
//! frame = 120
//! center = [0.0, 0.0, 0.0]
//! direction = [0.0, 0.0, 1.0]
//! strength = 6.0
//! radius = 0.6
//!
//! [export]
//! path = "out/cloth.obj"
//! uv_scale = 2.0
//! ```

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use drapa_solver::{Cloth, ClothConfig};
use drapa_types::{constants, DrapaError, DrapaResult};

/// Complete input specification for a simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Grid topology parameters.
    pub grid: GridParams,

    /// Run length and timestep.
    #[serde(default)]
    pub run: RunParams,

    /// Cloth tuning; every field optional, defaulting as in
    /// [`ClothConfig::default`].
    #[serde(default)]
    pub cloth: ClothConfig,

    /// Impulses applied immediately before the step whose frame index
    /// matches.
    #[serde(default)]
    pub impulses: Vec<ImpulseSpec>,

    /// Optional OBJ export of the final state.
    #[serde(default)]
    pub export: Option<ExportSpec>,
}

/// Grid construction parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GridParams {
    /// Particles along X (>= 1).
    pub width: usize,
    /// Particles along Y (>= 1).
    pub height: usize,
    /// Rest distance between neighbors (> 0).
    pub spacing: f32,
}

/// Run length and timestep.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct RunParams {
    /// Number of steps to simulate.
    pub steps: u32,
    /// Fixed timestep in seconds.
    pub dt: f32,
}

impl Default for RunParams {
    fn default() -> Self {
        Self {
            steps: 300,
            dt: constants::DEFAULT_DT,
        }
    }
}

/// A radial impulse scheduled at a frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ImpulseSpec {
    /// Frame index the impulse fires before.
    pub frame: u32,
    /// Impulse center in world space.
    pub center: Vec3,
    /// Impulse direction (normalized before use).
    pub direction: Vec3,
    /// Acceleration magnitude at the center.
    pub strength: f32,
    /// Influence radius.
    pub radius: f32,
}

/// Final-state OBJ export parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSpec {
    /// Output OBJ path; parent directories are created.
    pub path: String,
    /// Texture-coordinate tiling factor.
    #[serde(default = "default_uv_scale")]
    pub uv_scale: f32,
    /// MTL sidecar filename; omitted entirely when `None`.
    #[serde(default)]
    pub mtl: Option<String>,
    /// Diffuse texture filename referenced from the MTL.
    #[serde(default)]
    pub texture: Option<String>,
}

fn default_uv_scale() -> f32 {
    1.0
}

impl Scenario {
    /// Parses a scenario from TOML text.
    pub fn from_toml(text: &str) -> DrapaResult<Self> {
        let scenario: Scenario =
            toml::from_str(text).map_err(|e| DrapaError::Serialization(e.to_string()))?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Loads and parses a scenario file.
    pub fn load(path: &Path) -> DrapaResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Checks internal consistency beyond what parsing enforces.
    pub fn validate(&self) -> DrapaResult<()> {
        self.cloth.validate()?;
        if self.run.dt < 0.0 || !self.run.dt.is_finite() {
            return Err(DrapaError::InvalidScenario(format!(
                "run.dt must be a finite non-negative number, got {}",
                self.run.dt
            )));
        }
        for (i, imp) in self.impulses.iter().enumerate() {
            if imp.frame >= self.run.steps {
                return Err(DrapaError::InvalidScenario(format!(
                    "impulse {i} fires at frame {} but the run has only {} steps",
                    imp.frame, self.run.steps
                )));
            }
            if imp.radius <= 0.0 {
                return Err(DrapaError::InvalidScenario(format!(
                    "impulse {i} has non-positive radius {}",
                    imp.radius
                )));
            }
        }
        Ok(())
    }

    /// Builds the cloth this scenario describes.
    ///
    /// Grid parameter validation happens here, inside cloth
    /// construction.
    pub fn build_cloth(&self) -> DrapaResult<Cloth> {
        Cloth::with_config(
            self.grid.width,
            self.grid.height,
            self.grid.spacing,
            self.cloth.clone(),
        )
    }

    /// Impulses scheduled for the given frame, in declaration order.
    pub fn impulses_at(&self, frame: u32) -> impl Iterator<Item = &ImpulseSpec> {
        self.impulses.iter().filter(move |imp| imp.frame == frame)
    }
}
