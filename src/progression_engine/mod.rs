//! Progression and assessment rules engine.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | Shared types: drill levels, aspects, questions, entries, progress |
//! | `curriculum`  | Static tables: chapters, juz spans, drill levels, jilid |
//! | `scoring`     | Drill, daily entry, level exam and tasmi' scores and verdicts |
//! | `eligibility` | Next drill, tasmi' juz, jilid and class target checks |
//! | `pool`        | Candidate chapter pool for a juz range |
//! | `generator`   | Randomised exam question sets (`generate_exam`) |
//! | `calendar`    | Daily entry date gating |
//! | `helpers`     | Rounding, clamping and display text |
//! | `config`      | Thresholds and limits, loadable from TOML |
//! | `error`       | Config and store errors |
//! | `store`       | Persistence seam and an in-memory store |
//! | `navigation`  | Dashboard menu tree |

pub mod calendar;
pub mod config;
pub mod curriculum;
pub mod eligibility;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod navigation;
pub mod pool;
pub mod scoring;
pub mod store;

pub use calendar::{
    calendar_month, date_state, first_missing_before, is_selectable, selectable_date, DateState,
    DayCell, EntryHistory,
};
pub use config::{ClassTarget, ClassTargetRule, EngineConfig};
pub use eligibility::{
    check_class_target, is_drill_unlocked, is_eligible_for_tasmi, next_assessment,
    next_drill_level, next_jilid, next_tasmi_juz, ClassTargetStatus, NextAssessment, NextJilid,
};
pub use error::{ConfigError, StoreError};
pub use generator::{generate_exam, generate_exam_questions, regenerate_exam};
pub use models::{
    AspectId, DailyEntry, DrillLevel, EntryKind, EntryStatus, ExamQuestion, ExamRequest,
    ExamSession, StudentProgress, Verdict,
};
pub use scoring::{
    compute_daily_entry_score, compute_drill_score, compute_level_exam_score,
    compute_tasmi_page_score, evaluate_drill, evaluate_level_exam, evaluate_tasmi, AspectInputs,
    CoveredContent, LevelExamScore,
};
pub use store::{InMemoryStore, ProgressStore};
