//! # tahfidz_engine
//!
//! Progression and assessment rules for a Qur'an memorization (tahfidz) and
//! recitation (tilawah) program.
//!
//! The crate is a set of pure decision functions. The calling dashboard
//! loads a student's history from its own store, passes it in, and persists
//! whatever verdict comes back.
//!
//! ## What it decides
//!
//! 1. **Scores and verdicts**: drill and daily-entry scores from error
//!    counts, jilid level exams from clamped per-aspect sub-scores, tasmi'
//!    from per-page pancingan counts.
//! 2. **What comes next**: the next drill level (strictly in order), the
//!    next tasmi' juz in the customary 30, 29, …, 26, 1, …, 25 order, the
//!    next jilid, and whether a class has reached its juz target.
//! 3. **Exam questions**: ten random (surah, ayat) prompts over a juz
//!    range with no repeated pair.
//! 4. **Calendar gating**: which date a new daily entry may be created on,
//!    so missed days are filled in order.
//!
//! ## Key features
//!
//! - **Deterministic when seeded**: pass `rng_seed: Some(u64)` to reproduce
//!   the exact same question set.
//! - **Total functions**: out-of-range input is clamped; a failing verdict is
//!   a value, not an error.
//! - **Configurable thresholds**: [`EngineConfig`] loads from TOML.
//!
//! ## Quick start
//!
//! ```rust
//! use tahfidz_engine::{generate_exam, next_tasmi_juz, EngineConfig, ExamRequest};
//!
//! let config = EngineConfig::default();
//! let exam = generate_exam(ExamRequest::new(30, 30).seeded(42), &config);
//! assert_eq!(exam.questions.len(), 10);
//! for q in &exam.questions {
//!     println!("{}", q.prompt);
//! }
//!
//! assert_eq!(next_tasmi_juz(&[30, 29]), Some(28));
//! ```

pub mod client_adapter;
pub mod progression_engine;

pub use client_adapter::{calendar_json, class_target_json, exam_sheet_json, level_exam_json, menu_json};
pub use progression_engine::{
    calendar_month, check_class_target, compute_daily_entry_score, compute_drill_score,
    compute_level_exam_score, compute_tasmi_page_score, date_state, evaluate_drill,
    evaluate_level_exam, evaluate_tasmi, first_missing_before, generate_exam,
    generate_exam_questions, is_drill_unlocked, is_eligible_for_tasmi, is_selectable,
    next_assessment, next_drill_level, next_jilid, next_tasmi_juz, regenerate_exam,
    selectable_date, AspectId, AspectInputs, ClassTarget, ClassTargetRule, ClassTargetStatus,
    ConfigError, CoveredContent, DailyEntry, DateState, DayCell, DrillLevel, EngineConfig,
    EntryHistory, EntryKind, EntryStatus, ExamQuestion, ExamRequest, ExamSession, InMemoryStore,
    LevelExamScore, NextAssessment, NextJilid, ProgressStore, StoreError, StudentProgress, Verdict,
};
