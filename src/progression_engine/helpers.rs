//! Small shared functions used across the scoring, generator and calendar
//! modules: rounding, clamping and display text.

use crate::progression_engine::models::{ExamQuestion, Verdict};

/// Round to one decimal place, halves rounding up.
///
/// The epsilon absorbs binary representation error so that e.g. `7.25`
/// stored as `7.2499999…` still rounds to `7.3`.
pub fn round_half_up_1dp(x: f64) -> f64 {
    ((x * 10.0) + 0.5 + 1e-9).floor() / 10.0
}

/// Clamp a free-form sub-score into `[0, max]`; NaN and infinities count as 0.
pub fn clamp_score(value: f64, max: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, max)
}

/// Percentage of `part` in `whole`, one decimal, 0 when `whole` is 0.
pub fn percentage(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round_half_up_1dp(part as f64 * 100.0 / whole as f64)
}

/// `Passed`, or the caller's failing verdict (`Repeat` or `Failed`).
pub fn verdict_for(passed: bool, failing: Verdict) -> Verdict {
    if passed {
        Verdict::Passed
    } else {
        failing
    }
}

/// Prompt shown to the examiner for one question.
pub fn question_prompt(chapter_name: &str, chapter_id: u16, start_verse: u16) -> String {
    format!("Lanjutkan bacaan QS. {chapter_name} ({chapter_id}) mulai ayat {start_verse}")
}

/// One-line summary of a question, e.g. `"Juz 30 · An-Naba' 12 · hal. 583"`.
pub fn question_label(q: &ExamQuestion) -> String {
    format!(
        "Juz {} · {} {} · hal. {}",
        q.juz, q.chapter_name, q.start_verse, q.estimated_page
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_is_half_up_on_tenths() {
        assert_eq!(round_half_up_1dp(7.25), 7.3);
        assert_eq!(round_half_up_1dp(7.24), 7.2);
        assert_eq!(round_half_up_1dp(19.95), 20.0);
        assert_eq!(round_half_up_1dp(0.0), 0.0);
    }

    #[test]
    fn clamp_handles_garbage() {
        assert_eq!(clamp_score(-3.0, 2.0), 0.0);
        assert_eq!(clamp_score(5.0, 2.0), 2.0);
        assert_eq!(clamp_score(f64::NAN, 2.0), 0.0);
        assert_eq!(clamp_score(f64::INFINITY, 2.0), 0.0);
        assert_eq!(clamp_score(1.5, 2.0), 1.5);
    }

    #[test]
    fn percentage_of_zero_whole_is_zero() {
        assert_eq!(percentage(3, 0), 0.0);
        assert_eq!(percentage(1, 3), 33.3);
        assert_eq!(percentage(2, 3), 66.7);
    }
}
