//! Walk-through of the rules engine.
//!
//! Run with: `cargo run --example demo`
//! (set `RUST_LOG=tahfidz_engine=debug` to see engine decisions)
//!
//! 1. **Exam generation**: a seeded juz 30 exam, printed as a sheet, then
//!    regenerated with a new seed.
//! 2. **Scoring**: a drill, a jilid 4 level exam and a tasmi'.
//! 3. **Progression**: next drill, next tasmi' juz and class target.
//! 4. **Calendar**: the month view for a student with one missed day.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use tahfidz_engine::{
    calendar_json, calendar_month, check_class_target, evaluate_level_exam, evaluate_tasmi,
    exam_sheet_json, generate_exam, next_assessment, progression_engine::scoring::drill_verdict,
    regenerate_exam, AspectId, AspectInputs, EngineConfig, EntryHistory, ExamRequest,
    StudentProgress,
};
use tracing_subscriber::EnvFilter;

fn section(title: &str) {
    println!();
    println!("══ {title} ══");
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = EngineConfig::default();

    // ── Exam generation ────────────────────────────────────────────────────
    section("Ujian juz 30 (seed 42)");
    let exam = generate_exam(ExamRequest::new(30, 30).seeded(42), &config);
    println!("  Session: {}", exam.session_id);
    for (i, q) in exam.questions.iter().enumerate() {
        println!("  {:>2}. {}  (perkiraan hal. {})", i + 1, q.prompt, q.estimated_page);
    }
    let again = regenerate_exam(&exam, Some(43), &config);
    println!();
    println!("  Regenerated as {}, first prompt: {}", again.session_id, again.questions[0].prompt);
    println!();
    println!("{}", serde_json::to_string_pretty(&exam_sheet_json(&exam)).unwrap_or_default());

    // ── Scoring ────────────────────────────────────────────────────────────
    section("Penilaian");
    let drill = drill_verdict(9, &config);
    println!("  Drill, 9 errors: {} / KKM {} → {}", drill.score, drill.threshold, drill.verdict);

    let mut inputs = AspectInputs::new();
    inputs.insert(
        AspectId::Tartil,
        HashMap::from([
            ("tajwid".to_string(), 2.0),
            ("kalimat".to_string(), 1.5),
            ("kelancaran".to_string(), 3.5),
            ("nafas".to_string(), 1.0),
            ("waqaf".to_string(), 1.0),
        ]),
    );
    inputs.insert(
        AspectId::Fashohah,
        HashMap::from([
            ("makharijul_huruf".to_string(), 3.0),
            ("sifatul_huruf".to_string(), 2.5),
            ("harakat".to_string(), 3.0),
        ]),
    );
    inputs.insert(
        AspectId::TajwidDasar,
        HashMap::from([("mad".to_string(), 2.5), ("ghunnah".to_string(), 2.0), ("mim_mati".to_string(), 1.5)]),
    );
    let level = evaluate_level_exam(4, &inputs, &config);
    println!(
        "  Jilid 4 exam: {:.1} / {:.0}, KKM {:.1} → {}",
        level.score.total, level.score.max_possible, level.threshold, level.verdict
    );

    let tasmi = evaluate_tasmi(&[0, 0, 1, 0, 2, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0], 20, &config);
    println!("  Tasmi' 20 pages: {} / {}, KKM {} → {}", tasmi.score.total, tasmi.score.max_possible, tasmi.threshold, tasmi.verdict);

    // ── Progression ────────────────────────────────────────────────────────
    section("Progres siswa");
    let mut progress = StudentProgress::new("siswa-01", "Kelas 2");
    progress.completed_drills.insert(30, (1..=3).collect());
    println!("  Next: {:?}", next_assessment(&progress));
    progress.completed_drills.insert(30, (1..=8).collect());
    progress.completed_juz.push(30);
    progress.drill_chain_complete = true;
    println!("  Next: {:?}", next_assessment(&progress));
    let target = check_class_target(&progress.class_id, &progress.completed_juz);
    println!(
        "  {}: {}/{} juz ({}%): {}",
        target.class_id, target.current_count, target.target_count, target.percentage, target.description
    );

    // ── Calendar ───────────────────────────────────────────────────────────
    section("Kalender setoran");
    let Some(today) = NaiveDate::from_ymd_opt(2025, 1, 15) else {
        return;
    };
    let history = EntryHistory::from_dates(
        (1..=10u64)
            .filter(|&n| n != 4)
            .filter_map(|n| today.checked_sub_days(Days::new(n))),
    );
    let cells = calendar_month(2025, 1, &history, today, config.calendar_lookback_days);
    println!("{}", calendar_json(&cells)["openDate"]);
}
