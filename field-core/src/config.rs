use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{color::Hsla, error::ConfigError, surface::Surface};

/// Tunable constants of the particle field.
///
/// Defaults reproduce the page background exactly; every field may be
/// overridden from a TOML table, missing keys fall back to the default.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Pairs closer than this (in surface pixels) are linked.
    pub link_distance: f32,
    /// Link alpha for coincident nodes; fades linearly to 0 at `link_distance`.
    pub max_link_alpha: f32,
    pub link_width: f32,
    /// Surface area (px²) per seeded node.
    pub area_per_node: f32,
    pub max_nodes: usize,
    /// Upper bound of each velocity component, in px/frame.
    pub max_speed: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    /// Node fill colour; links reuse its hue with their own alpha.
    pub color: Hsla,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            link_distance: 120.0,
            max_link_alpha: 0.15,
            link_width: 0.5,
            area_per_node: 15_000.0,
            max_nodes: 80,
            max_speed: 0.25,
            min_radius: 1.0,
            max_radius: 3.0,
            color: Hsla::new(214.0, 0.5, 0.45, 0.6),
        }
    }
}

impl FieldConfig {
    /// Parses and validates a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let cfg: FieldConfig = toml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reads, parses and validates a TOML config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Checks that every value is usable by the simulator.
    ///
    /// Every float must be finite; `rand` panics on infinite or NaN
    /// sampling bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("link_distance", self.link_distance),
            ("max_link_alpha", self.max_link_alpha),
            ("link_width", self.link_width),
            ("area_per_node", self.area_per_node),
            ("max_speed", self.max_speed),
            ("min_radius", self.min_radius),
            ("max_radius", self.max_radius),
            ("color.h", self.color.h),
            ("color.s", self.color.s),
            ("color.l", self.color.l),
            ("color.a", self.color.a),
        ] {
            finite(field, value)?;
        }

        positive("link_distance", self.link_distance)?;
        positive("area_per_node", self.area_per_node)?;
        positive("min_radius", self.min_radius)?;
        unit("max_link_alpha", self.max_link_alpha)?;
        unit("color.a", self.color.a)?;
        non_negative("link_width", self.link_width)?;
        non_negative("max_speed", self.max_speed)?;
        if self.min_radius > self.max_radius {
            return Err(ConfigError::RadiusRange {
                min: self.min_radius,
                max: self.max_radius,
            });
        }
        Ok(())
    }

    /// Number of nodes to seed for a surface.
    ///
    /// `min(max_nodes, floor(area / area_per_node))`, evaluated once at
    /// seeding time.
    pub fn node_count(&self, surface: Surface) -> usize {
        let by_area = (surface.area() as f64 / self.area_per_node as f64).floor();
        (by_area as usize).min(self.max_nodes)
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

fn unit(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { field, value })
    }
}
