//! Engine configuration: pass thresholds, generator limits and class targets.
//!
//! Every field has a default, so an empty TOML document is a valid config:
//!
//! ```toml
//! drill_pass_score = 88
//! level_exam_pass_fraction = 0.7
//!
//! [[jilid_overrides]]
//! jilid = 6
//! rule = { fraction = 0.75 }
//!
//! [[class_targets]]
//! class_id = "Kelas 1"
//! target = { juz = 30 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::progression_engine::{
    curriculum::jilid::JILID_COUNT,
    error::ConfigError,
    models::{is_valid_juz, PassRule},
};

/// Target rule for one class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassTargetRule {
    /// The class must have finished every juz up to this one in tasmi' order.
    Juz(u8),
    /// Chosen-surah tier with no single target juz; always reported as met.
    SpecialTier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassTarget {
    pub class_id: String,
    pub target: ClassTargetRule,
}

impl ClassTarget {
    pub fn new(class_id: impl Into<String>, target: ClassTargetRule) -> Self {
        ClassTarget { class_id: class_id.into(), target }
    }
}

/// Per-jilid override of the level exam pass rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JilidOverride {
    pub jilid: u8,
    pub rule: PassRule,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Minimum drill score out of 100.
    #[serde(default = "default_drill_pass_score")]
    pub drill_pass_score: u32,
    /// Minimum daily entry score out of 100.
    #[serde(default = "default_daily_entry_pass_score")]
    pub daily_entry_pass_score: u32,
    /// Level exam KKM as a fraction of the maximum possible total.
    #[serde(default = "default_pass_fraction")]
    pub level_exam_pass_fraction: f64,
    #[serde(default)]
    pub jilid_overrides: Vec<JilidOverride>,
    /// Tasmi' KKM as a fraction of 5 points per page.
    #[serde(default = "default_pass_fraction")]
    pub tasmi_pass_fraction: f64,
    #[serde(default = "default_lookback_days")]
    pub calendar_lookback_days: u32,
    #[serde(default = "default_question_count")]
    pub question_count: usize,
    #[serde(default = "default_max_attempts")]
    pub max_generation_attempts: u32,
    /// Verses kept after a question's start verse so the follow-up is answerable.
    #[serde(default = "default_verse_tail_reserve")]
    pub verse_tail_reserve: u16,
    #[serde(default = "default_class_targets")]
    pub class_targets: Vec<ClassTarget>,
}

fn default_drill_pass_score() -> u32 {
    88
}
fn default_daily_entry_pass_score() -> u32 {
    70
}
fn default_pass_fraction() -> f64 {
    0.7
}
fn default_lookback_days() -> u32 {
    30
}
fn default_question_count() -> usize {
    10
}
fn default_max_attempts() -> u32 {
    100
}
fn default_verse_tail_reserve() -> u16 {
    5
}

/// Kelas 1-5 climb one juz per year in tasmi' order; Kelas 6 is the chosen-surah tier.
pub fn default_class_targets() -> Vec<ClassTarget> {
    vec![
        ClassTarget::new("Kelas 1", ClassTargetRule::Juz(30)),
        ClassTarget::new("Kelas 2", ClassTargetRule::Juz(29)),
        ClassTarget::new("Kelas 3", ClassTargetRule::Juz(28)),
        ClassTarget::new("Kelas 4", ClassTargetRule::Juz(27)),
        ClassTarget::new("Kelas 5", ClassTargetRule::Juz(26)),
        ClassTarget::new("Kelas 6", ClassTargetRule::SpecialTier),
    ]
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            drill_pass_score: default_drill_pass_score(),
            daily_entry_pass_score: default_daily_entry_pass_score(),
            level_exam_pass_fraction: default_pass_fraction(),
            jilid_overrides: Vec::new(),
            tasmi_pass_fraction: default_pass_fraction(),
            calendar_lookback_days: default_lookback_days(),
            question_count: default_question_count(),
            max_generation_attempts: default_max_attempts(),
            verse_tail_reserve: default_verse_tail_reserve(),
            class_targets: default_class_targets(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("loaded engine config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.drill_pass_score > 100 || self.daily_entry_pass_score > 100 {
            return Err(ConfigError::Invalid("pass scores must be within 0..=100".into()));
        }
        for (name, f) in [
            ("level_exam_pass_fraction", self.level_exam_pass_fraction),
            ("tasmi_pass_fraction", self.tasmi_pass_fraction),
        ] {
            if !(0.0..=1.0).contains(&f) {
                return Err(ConfigError::Invalid(format!("{name} must be within 0.0..=1.0, got {f}")));
            }
        }
        if self.question_count == 0 {
            return Err(ConfigError::Invalid("question_count must be at least 1".into()));
        }
        for o in &self.jilid_overrides {
            if !(1..=JILID_COUNT).contains(&o.jilid) {
                return Err(ConfigError::Invalid(format!("override for unknown jilid {}", o.jilid)));
            }
            let bad = match o.rule {
                PassRule::Fraction(f) => !(0.0..=1.0).contains(&f),
                PassRule::Points(p)   => !p.is_finite() || p < 0.0,
            };
            if bad {
                return Err(ConfigError::Invalid(format!("bad pass rule for jilid {}", o.jilid)));
            }
        }
        for t in &self.class_targets {
            if let ClassTargetRule::Juz(juz) = t.target {
                if !is_valid_juz(juz) {
                    return Err(ConfigError::Invalid(format!(
                        "class {} targets juz {juz}, outside 1..=30",
                        t.class_id
                    )));
                }
            }
        }
        Ok(())
    }

    /// Configured override for a jilid, if any.
    pub fn jilid_override(&self, jilid: u8) -> Option<PassRule> {
        self.jilid_overrides
            .iter()
            .find(|o| o.jilid == jilid)
            .map(|o| o.rule)
    }
}
