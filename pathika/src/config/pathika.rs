//! Main PathikaConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::EngineConfig;
use crate::layout::RedirectionLayout;

use super::error::ConfigLoadError;
use super::layout::LayoutSection;
use super::persistence::PersistenceSection;

/// Full Pathika configuration loaded from YAML
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct PathikaConfig {
    /// Layout settings
    #[serde(default)]
    pub layout: LayoutSection,

    /// Engine settings
    #[serde(default)]
    pub engine: EngineConfig,

    /// Persistence settings
    #[serde(default)]
    pub persistence: PersistenceSection,
}

impl PathikaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/pathika.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/pathika.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Serialize to a YAML string
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Build the configured layout
    pub fn build_layout(&self) -> Result<RedirectionLayout, ConfigLoadError> {
        Ok(self.layout.build()?)
    }

    /// Get the engine config
    pub fn engine_config(&self) -> EngineConfig {
        self.engine.clone()
    }

    /// Path the layout is persisted to
    pub fn layout_path(&self) -> &Path {
        Path::new(&self.persistence.layout_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{CurveId, JointId};
    use approx::assert_relative_eq;

    #[test]
    fn test_default_config() {
        let config = PathikaConfig::default();
        assert_eq!(config.layout.walking_zone_radius, 0.25);
        assert_eq!(config.layout.start_joint, JointId::A);
        assert_eq!(config.layout.default_gain, 2.0);
        assert_eq!(config.engine.degenerate_epsilon, 1e-4);
        assert_eq!(config.persistence.layout_path, "layouts/layout.yaml");
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = PathikaConfig::default();
        let yaml = config.to_yaml().unwrap();
        let parsed = PathikaConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = r#"
layout:
  start_joint: B
engine:
  arm_on_load: true
"#;
        let config = PathikaConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.layout.start_joint, JointId::B);
        assert_eq!(config.layout.walking_zone_radius, 0.25);
        assert!(config.engine_config().arm_on_load);
        assert_eq!(config.engine_config().lane_entry_margin, 0.0);
        assert_eq!(config.engine.degenerate_epsilon, EngineConfig::default().degenerate_epsilon);
    }

    #[test]
    fn test_engine_section_is_engine_config() {
        let yaml = r#"
engine:
  degenerate_epsilon: 1.0e-3
  lane_entry_margin: 0.05
"#;
        let config = PathikaConfig::from_yaml(yaml).unwrap();
        assert_eq!(
            config.engine_config(),
            EngineConfig {
                degenerate_epsilon: 1e-3,
                lane_entry_margin: 0.05,
                arm_on_load: false,
            }
        );
    }

    #[test]
    fn test_build_layout_from_tracking_space() {
        let yaml = r#"
layout:
  walking_zone_radius: 0.2
  tracking_space:
    side_length: 4.0
  paths:
    - { from: 0, curve: AbSmall }
    - { from: 1, curve: BcLarge, gain: 3.0 }
"#;
        let config = PathikaConfig::from_yaml(yaml).unwrap();
        let layout = config.build_layout().unwrap();
        assert_eq!(layout.intersections().len(), 3);
        assert_eq!(layout.paths()[0].curve, CurveId::AbSmall);
        assert_relative_eq!(layout.paths()[0].gain, 2.0);
        assert_relative_eq!(layout.paths()[1].gain, 3.0);
        assert_eq!(layout.intersections()[2].joint, JointId::C);
    }

    #[test]
    fn test_explicit_joints() {
        let yaml = r#"
layout:
  joints:
    a: [0.55, 0.0, -1.25]
    b: [0.55, 0.0, 1.25]
    c: [-1.615, 0.0, 0.0]
"#;
        let layout = PathikaConfig::from_yaml(yaml).unwrap().build_layout().unwrap();
        assert_relative_eq!(layout.curve(CurveId::AbSmall).radius, 1.25, epsilon = 1e-4);
    }

    #[test]
    fn test_bad_path_step_is_reported() {
        let yaml = r#"
layout:
  paths:
    - { from: 0, curve: BcSmall }
"#;
        let config = PathikaConfig::from_yaml(yaml).unwrap();
        assert!(matches!(config.build_layout(), Err(ConfigLoadError::Layout(_))));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            PathikaConfig::from_yaml("layout: [not, a, map]"),
            Err(ConfigLoadError::Parse(_))
        ));
    }
}
