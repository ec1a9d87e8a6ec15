//! Scoring functions: raw inputs → score → pass verdict.
//!
//! Everything here is pure. A failing verdict is an ordinary return value;
//! nothing panics on out-of-range input, it is clamped instead.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::progression_engine::{
    config::EngineConfig,
    curriculum::{aspect, chapters::verse_count, jilid},
    helpers::{clamp_score, round_half_up_1dp, verdict_for},
    models::{AspectDef, AspectId, DrillContent, DrillLevel, Verdict},
};

pub const DRILL_MAX_SCORE: u32 = 100;
/// Points per page in a tasmi' exam.
pub const TASMI_PAGE_MAX: u32 = 5;

/// Raw sub-criterion inputs keyed by aspect, then by sub-criterion id.
pub type AspectInputs = HashMap<AspectId, HashMap<String, f64>>;

// ---------------------------------------------------------------------------
// Drill and daily entry
// ---------------------------------------------------------------------------

/// `max(0, 100 - errors)`; a negative error count counts as zero errors.
pub fn compute_drill_score(error_count: i64) -> u32 {
    let errors = error_count.clamp(0, DRILL_MAX_SCORE as i64) as u32;
    DRILL_MAX_SCORE - errors
}

/// Daily entries use the drill formula with their own threshold.
pub fn compute_daily_entry_score(error_count: i64) -> u32 {
    compute_drill_score(error_count)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreVerdict {
    pub score: u32,
    pub threshold: u32,
    pub verdict: Verdict,
}

pub fn drill_verdict(error_count: i64, config: &EngineConfig) -> ScoreVerdict {
    let score = compute_drill_score(error_count);
    let threshold = config.drill_pass_score;
    ScoreVerdict { score, threshold, verdict: verdict_for(score >= threshold, Verdict::Repeat) }
}

pub fn daily_entry_verdict(error_count: i64, config: &EngineConfig) -> ScoreVerdict {
    let score = compute_daily_entry_score(error_count);
    let threshold = config.daily_entry_pass_score;
    ScoreVerdict { score, threshold, verdict: verdict_for(score >= threshold, Verdict::Repeat) }
}

// ---------------------------------------------------------------------------
// Drill content coverage
// ---------------------------------------------------------------------------

/// What a student has actually recited for a drill so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoveredContent {
    pub pages: BTreeSet<u16>,
    /// Recited verse ranges per chapter (inclusive, may overlap).
    pub verses: BTreeMap<u16, Vec<(u16, u16)>>,
}

impl CoveredContent {
    pub fn add_pages(&mut self, pages: impl IntoIterator<Item = u16>) {
        self.pages.extend(pages);
    }

    pub fn add_verses(&mut self, chapter_id: u16, verse_start: u16, verse_end: u16) {
        self.verses.entry(chapter_id).or_default().push((verse_start, verse_end));
    }

    /// True when the recorded ranges of a chapter cover `[start, end]` without gaps.
    pub fn covers_verses(&self, chapter_id: u16, start: u16, end: u16) -> bool {
        let Some(ranges) = self.verses.get(&chapter_id) else {
            return false;
        };
        let mut sorted: Vec<(u16, u16)> = ranges.iter().copied().filter(|(a, b)| a <= b).collect();
        sorted.sort_unstable();

        let mut next_needed = start;
        for (a, b) in sorted {
            if a > next_needed {
                break;
            }
            if b >= next_needed {
                if b >= end {
                    return true;
                }
                next_needed = b + 1;
            }
        }
        false
    }
}

/// Covered units against required units (pages or chapter segments).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coverage {
    pub covered: usize,
    pub required: usize,
}

impl Coverage {
    pub fn is_complete(&self) -> bool {
        self.covered >= self.required
    }
}

pub fn drill_coverage(level: &DrillLevel, covered: &CoveredContent) -> Coverage {
    match &level.content {
        DrillContent::Pages(range) => Coverage {
            covered: range.pages().filter(|p| covered.pages.contains(p)).count(),
            required: range.len(),
        },
        DrillContent::Chapters(segments) => {
            let done = segments
                .iter()
                .filter(|seg| {
                    let (start, end) = if seg.full_chapter {
                        (1, verse_count(seg.chapter_id))
                    } else {
                        (seg.verse_start.unwrap_or(1), seg.verse_end.unwrap_or(verse_count(seg.chapter_id)))
                    };
                    covered.covers_verses(seg.chapter_id, start, end)
                })
                .count();
            Coverage { covered: done, required: segments.len() }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillVerdict {
    pub coverage: Coverage,
    pub score: ScoreVerdict,
    pub verdict: Verdict,
}

/// Coverage gate first, then the score threshold.
pub fn evaluate_drill(
    level: &DrillLevel,
    covered: &CoveredContent,
    error_count: i64,
    config: &EngineConfig,
) -> DrillVerdict {
    let coverage = drill_coverage(level, covered);
    let score = drill_verdict(error_count, config);
    let verdict = if coverage.is_complete() { score.verdict } else { Verdict::Incomplete };
    DrillVerdict { coverage, score, verdict }
}

// ---------------------------------------------------------------------------
// Jilid level exam
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelExamScore {
    pub total: f64,
    pub max_possible: f64,
}

/// Sum of one aspect's sub-criteria from the curriculum table.
pub fn aspect_total(id: AspectId, inputs: Option<&HashMap<String, f64>>) -> f64 {
    aspect_total_for(&aspect(id), inputs)
}

/// Sum of an aspect's sub-criteria, each clamped to its own max, then
/// clamped to the aspect max. Unknown sub-criterion ids are ignored.
pub fn aspect_total_for(def: &AspectDef, inputs: Option<&HashMap<String, f64>>) -> f64 {
    let Some(inputs) = inputs else {
        return 0.0;
    };
    let sum: f64 = def
        .sub_criteria
        .iter()
        .map(|sub| clamp_score(inputs.get(sub.id).copied().unwrap_or(0.0), sub.max))
        .sum();
    sum.min(def.max)
}

pub fn compute_level_exam_score(
    inputs: &AspectInputs,
    applicable: &BTreeSet<AspectId>,
) -> LevelExamScore {
    let total: f64 = applicable.iter().map(|&id| aspect_total(id, inputs.get(&id))).sum();
    let max_possible: f64 = applicable.iter().map(|&id| aspect(id).max).sum();
    LevelExamScore { total: round_half_up_1dp(total), max_possible }
}

/// KKM for a jilid exam: the config override for that jilid, otherwise the
/// configured fraction of `max_possible`.
pub fn level_exam_threshold(jilid_number: u8, max_possible: f64, config: &EngineConfig) -> f64 {
    let threshold = match config.jilid_override(jilid_number) {
        Some(rule) => rule.threshold(max_possible),
        None => config.level_exam_pass_fraction * max_possible,
    };
    round_half_up_1dp(threshold)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelExamResult {
    pub jilid: u8,
    pub aspects: Vec<AspectId>,
    pub score: LevelExamScore,
    pub threshold: f64,
    pub verdict: Verdict,
}

/// Score a jilid exam. An unknown jilid is assessed on the full aspect set.
pub fn evaluate_level_exam(
    jilid_number: u8,
    inputs: &AspectInputs,
    config: &EngineConfig,
) -> LevelExamResult {
    let applicable: BTreeSet<AspectId> = match jilid(jilid_number) {
        Some(level) => level.aspects.iter().copied().collect(),
        None => {
            tracing::warn!("jilid {jilid_number} not in table, using full criteria set");
            AspectId::ALL.into_iter().collect()
        }
    };
    let score = compute_level_exam_score(inputs, &applicable);
    let threshold = level_exam_threshold(jilid_number, score.max_possible, config);
    LevelExamResult {
        jilid: jilid_number,
        aspects: applicable.into_iter().collect(),
        score,
        threshold,
        verdict: verdict_for(score.total >= threshold, Verdict::Failed),
    }
}

// ---------------------------------------------------------------------------
// Tasmi'
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TasmiScore {
    pub total: u32,
    pub max_possible: u32,
    pub pages_scored: usize,
    pub page_count: usize,
}

impl TasmiScore {
    pub fn is_complete(&self) -> bool {
        self.pages_scored >= self.page_count
    }
}

/// Per page `max(0, 5 - pancingan)`, summed. Entries past `page_count` are
/// ignored; pages with no entry are unscored.
pub fn compute_tasmi_page_score(pancingan_per_page: &[i32], page_count: usize) -> TasmiScore {
    let scored = &pancingan_per_page[..pancingan_per_page.len().min(page_count)];
    let total = scored
        .iter()
        .map(|&p| TASMI_PAGE_MAX - p.clamp(0, TASMI_PAGE_MAX as i32) as u32)
        .fold(0u32, u32::saturating_add);
    TasmiScore {
        total,
        max_possible: tasmi_max_possible(page_count),
        pages_scored: scored.len(),
        page_count,
    }
}

/// Best possible tasmi' total, saturating at `u32::MAX`.
pub fn tasmi_max_possible(page_count: usize) -> u32 {
    u32::try_from(page_count)
        .unwrap_or(u32::MAX)
        .saturating_mul(TASMI_PAGE_MAX)
}

/// Absolute point KKM for a tasmi' over `page_count` pages.
pub fn tasmi_threshold(page_count: usize, config: &EngineConfig) -> u32 {
    let max = f64::from(tasmi_max_possible(page_count));
    (config.tasmi_pass_fraction * max - 1e-9).ceil().max(0.0) as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TasmiResult {
    pub score: TasmiScore,
    pub threshold: u32,
    pub verdict: Verdict,
}

pub fn evaluate_tasmi(pancingan_per_page: &[i32], page_count: usize, config: &EngineConfig) -> TasmiResult {
    let score = compute_tasmi_page_score(pancingan_per_page, page_count);
    let threshold = tasmi_threshold(page_count, config);
    let verdict = if !score.is_complete() {
        Verdict::Incomplete
    } else {
        verdict_for(score.total >= threshold, Verdict::Failed)
    };
    TasmiResult { score, threshold, verdict }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression_engine::{curriculum::drill_level, models::SubCriterion};

    fn inputs(entries: &[(AspectId, &[(&str, f64)])]) -> AspectInputs {
        entries
            .iter()
            .map(|(id, subs)| {
                (*id, subs.iter().map(|(k, v)| (k.to_string(), *v)).collect())
            })
            .collect()
    }

    #[test]
    fn drill_score_formula_holds() {
        for errors in 0..=150i64 {
            let score = compute_drill_score(errors);
            assert_eq!(score as i64, (100 - errors).max(0));
            assert!(score <= 100);
        }
        assert_eq!(compute_drill_score(-7), 100);
        assert_eq!(compute_drill_score(i64::MAX), 0);
    }

    #[test]
    fn drill_and_daily_thresholds_differ() {
        let config = EngineConfig::default();
        // 20 errors -> 80: below the drill KKM, above the daily one.
        assert_eq!(drill_verdict(20, &config).verdict, Verdict::Repeat);
        assert_eq!(daily_entry_verdict(20, &config).verdict, Verdict::Passed);
        assert_eq!(drill_verdict(12, &config).verdict, Verdict::Passed);
        assert_eq!(drill_verdict(13, &config).verdict, Verdict::Repeat);
    }

    #[test]
    fn tartil_over_entry_clamps_to_ten() {
        let raw = inputs(&[(
            AspectId::Tartil,
            &[("tajwid", 3.0), ("kalimat", 2.5), ("kelancaran", 5.0), ("nafas", 1.0), ("waqaf", 1.0), ("bonus", 1.0)],
        )]);
        assert_eq!(aspect_total(AspectId::Tartil, raw.get(&AspectId::Tartil)), 10.0);
    }

    #[test]
    fn aspect_max_caps_sum_of_sub_maxima() {
        static WIDE: [SubCriterion; 2] = [
            SubCriterion { id: "lagu", name: "Lagu", max: 8.0 },
            SubCriterion { id: "suara", name: "Suara", max: 8.0 },
        ];
        let def = AspectDef { id: AspectId::Tartil, max: 10.0, sub_criteria: &WIDE };
        let full: HashMap<String, f64> =
            [("lagu".to_string(), 8.0), ("suara".to_string(), 7.0)].into_iter().collect();
        assert_eq!(aspect_total_for(&def, Some(&full)), 10.0);

        let low: HashMap<String, f64> = [("lagu".to_string(), 4.5)].into_iter().collect();
        assert_eq!(aspect_total_for(&def, Some(&low)), 4.5);
        assert_eq!(aspect_total_for(&def, None), 0.0);
    }

    #[test]
    fn sub_scores_clamp_individually() {
        // kelancaran 9 clamps to 4 before the sum, so the aspect is 4 not 9.
        let raw = inputs(&[(AspectId::Tartil, &[("kelancaran", 9.0), ("nafas", -2.0)])]);
        assert_eq!(aspect_total(AspectId::Tartil, raw.get(&AspectId::Tartil)), 4.0);
    }

    #[test]
    fn jilid_four_scores_three_aspects() {
        let raw = inputs(&[
            (AspectId::Tartil, &[("tajwid", 3.0), ("kalimat", 3.0), ("kelancaran", 4.0), ("nafas", 1.0)]),
            (AspectId::Fashohah, &[("makharijul_huruf", 3.5), ("sifatul_huruf", 2.25), ("harakat", 3.0)]),
            (AspectId::TajwidDasar, &[("mad", 3.0), ("ghunnah", 2.0)]),
            (AspectId::Ghorib, &[("bacaan_ghorib", 6.0)]),
        ]);
        let result = evaluate_level_exam(4, &raw, &EngineConfig::default());
        assert_eq!(result.score.max_possible, 30.0);
        // Tartil 2+2+4+1 = 9, Fashohah 8.75, TajwidDasar 5; Ghorib ignored.
        assert_eq!(result.score.total, 22.8);
        assert_eq!(result.threshold, 21.0);
        assert_eq!(result.verdict, Verdict::Passed);
        assert!(result.score.total <= result.score.max_possible);
    }

    #[test]
    fn max_possible_tracks_aspect_count() {
        let empty = AspectInputs::new();
        let config = EngineConfig::default();
        assert_eq!(evaluate_level_exam(1, &empty, &config).score.max_possible, 20.0);
        assert_eq!(evaluate_level_exam(5, &empty, &config).score.max_possible, 30.0);
        assert_eq!(evaluate_level_exam(6, &empty, &config).score.max_possible, 40.0);
        // Unknown jilid falls back to the full criteria set.
        assert_eq!(evaluate_level_exam(9, &empty, &config).score.max_possible, 40.0);
        assert_eq!(evaluate_level_exam(1, &empty, &config).verdict, Verdict::Failed);
    }

    #[test]
    fn jilid_override_replaces_fraction() {
        let mut config = EngineConfig::default();
        config.jilid_overrides.push(crate::progression_engine::config::JilidOverride {
            jilid: 6,
            rule: crate::progression_engine::models::PassRule::Points(30.0),
        });
        assert_eq!(level_exam_threshold(6, 40.0, &config), 30.0);
        assert_eq!(level_exam_threshold(5, 30.0, &config), 21.0);

        config.jilid_overrides.push(crate::progression_engine::config::JilidOverride {
            jilid: 5,
            rule: crate::progression_engine::models::PassRule::Fraction(0.8),
        });
        assert_eq!(level_exam_threshold(5, 30.0, &config), 24.0);
        assert_eq!(level_exam_threshold(4, 30.0, &config), 21.0);
    }

    #[test]
    fn tasmi_scores_pages_and_gates_incomplete() {
        let config = EngineConfig::default();
        let score = compute_tasmi_page_score(&[0, 1, 5, 7, -1], 5);
        assert_eq!(score.total, 5 + 4 + 0 + 0 + 5);
        assert_eq!(score.max_possible, 25);

        assert_eq!(tasmi_threshold(20, &config), 70);
        let full = evaluate_tasmi(&[1; 20], 20, &config);
        assert_eq!(full.score.total, 80);
        assert_eq!(full.verdict, Verdict::Passed);

        let partial = evaluate_tasmi(&[0; 10], 20, &config);
        assert_eq!(partial.verdict, Verdict::Incomplete);

        let weak = evaluate_tasmi(&[2; 20], 20, &config);
        assert_eq!(weak.score.total, 60);
        assert_eq!(weak.verdict, Verdict::Failed);
    }

    #[test]
    fn huge_page_count_saturates() {
        let config = EngineConfig::default();
        let score = compute_tasmi_page_score(&[0; 3], 1_000_000_000);
        assert_eq!(score.max_possible, u32::MAX);
        assert_eq!(score.total, 15);
        assert_eq!(score.pages_scored, 3);

        assert_eq!(tasmi_max_possible(usize::MAX), u32::MAX);
        assert!(tasmi_threshold(usize::MAX / 2, &config) > 0);
        assert_eq!(evaluate_tasmi(&[0; 3], usize::MAX, &config).verdict, Verdict::Incomplete);
    }

    #[test]
    fn page_drill_needs_every_page() {
        let config = EngineConfig::default();
        let level = drill_level(1, 1).unwrap(); // pages 1-3
        let mut covered = CoveredContent::default();
        covered.add_pages([1, 3]);
        let v = evaluate_drill(&level, &covered, 0, &config);
        assert_eq!(v.coverage, Coverage { covered: 2, required: 3 });
        assert_eq!(v.verdict, Verdict::Incomplete);

        covered.add_pages([2]);
        assert_eq!(evaluate_drill(&level, &covered, 0, &config).verdict, Verdict::Passed);
        assert_eq!(evaluate_drill(&level, &covered, 30, &config).verdict, Verdict::Repeat);
    }

    #[test]
    fn chapter_drill_merges_overlapping_ranges() {
        let config = EngineConfig::default();
        let level = drill_level(29, 2).unwrap(); // Al-Mulk, all 30 verses
        let mut covered = CoveredContent::default();
        covered.add_verses(67, 1, 15);
        covered.add_verses(67, 20, 30);
        assert_eq!(evaluate_drill(&level, &covered, 0, &config).verdict, Verdict::Incomplete);

        covered.add_verses(67, 14, 21);
        assert_eq!(evaluate_drill(&level, &covered, 0, &config).verdict, Verdict::Passed);

        // Level 1 only needs verses 1-15.
        let first = drill_level(29, 1).unwrap();
        let mut partial = CoveredContent::default();
        partial.add_verses(67, 1, 15);
        assert!(drill_coverage(&first, &partial).is_complete());
    }
}
