// Container configuration: container dimensions, simulation mode and the particle groups to generate
// Loaded from JSON or assembled with ContainerConfigBuilder, and validated before a container is built

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_CHEMICAL_RANGE, DEFAULT_MAX_ATTEMPTS, DEFAULT_TIME_STEP};
use crate::errors::{DemError, Result};
use crate::particles::Mineral;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationType {
    /// All walls fixed
    Settling,
    /// The top wall is a mobile loading plate
    Compression,
}

/// One group of particles to generate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleGroupSpec {
    #[serde(rename = "type")]
    pub mineral: Mineral,
    /// Smallest length (clay) or diameter (sand), nm
    pub size_lower_bound: f64,
    /// Largest length (clay) or diameter (sand), nm; also the mechanical box size of the group
    pub size_upper_bound: f64,
    pub quantity: usize,
    /// Plate thickness for clay groups, the mineral default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
    /// Number of collinear pieces each clay plate is made of
    #[serde(default = "default_segments")]
    pub segments: usize,
}

fn default_segments() -> usize {
    1
}

impl ParticleGroupSpec {
    pub fn new(mineral: Mineral, size_lower_bound: f64, size_upper_bound: f64, quantity: usize) -> Self {
        Self {
            mineral,
            size_lower_bound,
            size_upper_bound,
            quantity,
            thickness: None,
            segments: default_segments(),
        }
    }

    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = Some(thickness);
        self
    }

    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    /// Thickness of the plates of a clay group, `None` for sand
    pub fn plate_thickness(&self) -> Option<f64> {
        self.thickness.or_else(|| self.mineral.default_thickness())
    }

    pub fn validate(&self) -> Result<()> {
        let (lower, upper) = (self.size_lower_bound, self.size_upper_bound);
        if !(lower.is_finite() && upper.is_finite()) || lower <= 0.0 {
            return Err(DemError::invalid(format!(
                "{} group bounds must be positive, got [{}, {}]",
                self.mineral, lower, upper
            )));
        }
        if upper < lower {
            return Err(DemError::invalid(format!(
                "{} group has size_upper_bound {} below size_lower_bound {}",
                self.mineral, upper, lower
            )));
        }

        let range = self.mineral.size_range();
        if !range.contains(&lower) || !range.contains(&upper) {
            return Err(DemError::invalid(format!(
                "{} group bounds [{}, {}] outside the mineral range [{}, {}]",
                self.mineral,
                lower,
                upper,
                range.start(),
                range.end()
            )));
        }

        match (self.mineral.thickness_range(), self.thickness) {
            (None, Some(_)) => Err(DemError::invalid(format!(
                "{} is a sand mineral and takes no thickness",
                self.mineral
            ))),
            (Some(range), Some(thickness)) if !range.contains(&thickness) => Err(DemError::invalid(format!(
                "{} thickness {} outside [{}, {}]",
                self.mineral,
                thickness,
                range.start(),
                range.end()
            ))),
            _ if self.segments == 0 => Err(DemError::invalid(format!(
                "{} group needs at least one segment per particle",
                self.mineral
            ))),
            (None, None) if self.segments != 1 => Err(DemError::invalid(format!(
                "{} is a sand mineral and cannot be segmented",
                self.mineral
            ))),
            _ => Ok(()),
        }
    }
}

/// Everything needed to build and populate a container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerConfig {
    /// Horizontal extent, nm
    pub length: f64,
    /// Vertical extent, nm
    pub width: f64,
    /// Integration time step, s
    pub time_step: f64,
    pub simulation_type: SimulationType,
    pub particles_info: Vec<ParticleGroupSpec>,
    /// Interaction range of double-layer forces, nm
    #[serde(default = "default_chemical_range")]
    pub chemical_range: f64,
    /// Placement attempts per particle before generation gives up
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
    /// Seed of the generation RNG, entropy when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_chemical_range() -> f64 {
    DEFAULT_CHEMICAL_RANGE
}

fn default_max_attempts() -> usize {
    DEFAULT_MAX_ATTEMPTS
}

impl ContainerConfig {
    pub fn builder(length: f64, width: f64) -> ContainerConfigBuilder {
        ContainerConfigBuilder::new(length, width)
    }

    /// Parse and validate a JSON configuration
    ///
    /// # Errors
    /// `InvalidConfiguration` for malformed JSON, missing keys, unknown minerals or
    /// simulation types, a `particles_info` that is not a list, and every failure of
    /// [`ContainerConfig::validate`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ContainerConfig = serde_json::from_str(json)
            .map_err(|e| DemError::invalid(format!("Could not parse container configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DemError::invalid(format!("Could not serialize container configuration: {}", e)))
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("length", self.length), ("width", self.width)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(DemError::invalid(format!(
                    "Container {} must be positive, got {}",
                    name, value
                )));
            }
        }
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(DemError::invalid(format!(
                "time_step must be positive, got {}",
                self.time_step
            )));
        }
        if !(self.chemical_range.is_finite() && self.chemical_range >= 0.0) {
            return Err(DemError::invalid(format!(
                "chemical_range must be non-negative, got {}",
                self.chemical_range
            )));
        }
        if self.max_attempts == 0 {
            return Err(DemError::invalid("max_attempts must be at least 1"));
        }
        self.particles_info.iter().try_for_each(ParticleGroupSpec::validate)
    }

    pub fn has_mobile_top(&self) -> bool {
        self.simulation_type == SimulationType::Compression
    }

    pub fn requested_particles(&self) -> usize {
        self.particles_info.iter().map(|group| group.quantity).sum()
    }
}

/// Builder for [`ContainerConfig`]
pub struct ContainerConfigBuilder {
    config: ContainerConfig,
}

impl ContainerConfigBuilder {
    pub fn new(length: f64, width: f64) -> Self {
        Self {
            config: ContainerConfig {
                length,
                width,
                time_step: DEFAULT_TIME_STEP,
                simulation_type: SimulationType::Settling,
                particles_info: Vec::new(),
                chemical_range: DEFAULT_CHEMICAL_RANGE,
                max_attempts: DEFAULT_MAX_ATTEMPTS,
                seed: None,
            },
        }
    }

    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.config.time_step = time_step;
        self
    }

    pub fn with_simulation_type(mut self, simulation_type: SimulationType) -> Self {
        self.config.simulation_type = simulation_type;
        self
    }

    pub fn with_group(mut self, group: ParticleGroupSpec) -> Self {
        self.config.particles_info.push(group);
        self
    }

    pub fn with_chemical_range(mut self, chemical_range: f64) -> Self {
        self.config.chemical_range = chemical_range;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.config.max_attempts = max_attempts;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Validate and return the configuration
    pub fn build(self) -> Result<ContainerConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
