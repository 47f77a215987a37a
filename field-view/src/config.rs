//! Configuration of the hosting view.
//!
//! A single TOML file with two optional tables:
//!
//! ```toml
//! [field]
//! link_distance = 120.0
//!
//! [hero]
//! name = "Ada Lovelace"
//! ```

use std::path::Path;

use field_core::{config::FieldConfig, error::ConfigError};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub field: FieldConfig,
    pub hero: HeroConfig,
}

/// Text of the foreground hero card, rendered verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub greeting: String,
    pub name: String,
    pub title: String,
    pub tagline: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            greeting: "Hello, I'm".to_owned(),
            name: "Your Name".to_owned(),
            title: "Software Engineer".to_owned(),
            tagline: String::new(),
        }
    }
}

impl ViewConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let cfg: ViewConfig = toml::from_str(text)?;
        cfg.field.validate()?;
        Ok(cfg)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_optional() {
        assert_eq!(ViewConfig::from_toml_str("").unwrap(), ViewConfig::default());

        let cfg = ViewConfig::from_toml_str("[hero]\nname = \"Ada\"\n").unwrap();
        assert_eq!(cfg.hero.name, "Ada");
        assert_eq!(cfg.hero.greeting, "Hello, I'm");
        assert_eq!(cfg.field, FieldConfig::default());
    }

    #[test]
    fn field_table_is_validated() {
        let err = ViewConfig::from_toml_str("[field]\narea_per_node = -5.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::NotPositive { field: "area_per_node", .. }));
    }
}
