//! Unlock and eligibility rules: which drill, tasmi' juz, jilid or class
//! target applies next, given a student's history.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::progression_engine::{
    config::{default_class_targets, ClassTarget, ClassTargetRule},
    curriculum::{drill_level_count, jilid::JILID_COUNT},
    helpers::percentage,
    models::{is_valid_juz, StudentProgress},
};

/// Customary memorization order: the last five juz first, then 1..=25.
pub const TASMI_ORDER: [u8; 30] = [
    30, 29, 28, 27, 26, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20,
    21, 22, 23, 24, 25,
];

// ---------------------------------------------------------------------------
// Drills
// ---------------------------------------------------------------------------

/// Smallest level of `juz` not yet completed, `None` when all are done or
/// the juz does not exist.
pub fn next_drill_level(juz: u8, completed: &BTreeSet<u8>) -> Option<u8> {
    (1..=drill_level_count(juz)).find(|level| !completed.contains(level))
}

/// Level 1 is always open; level k needs k-1 completed.
pub fn is_drill_unlocked(level: u8, completed: &BTreeSet<u8>) -> bool {
    match level {
        0 => false,
        1 => true,
        k => completed.contains(&(k - 1)),
    }
}

// ---------------------------------------------------------------------------
// Tasmi'
// ---------------------------------------------------------------------------

/// Needs at least one completed juz and a finished drill chain.
/// Out-of-range juz numbers in the list do not count.
pub fn is_eligible_for_tasmi(completed_juz: &[u8], drill_chain_complete: bool) -> bool {
    drill_chain_complete && completed_juz.iter().any(|&j| is_valid_juz(j))
}

/// First juz in [`TASMI_ORDER`] not in `completed_juz`.
pub fn next_tasmi_juz(completed_juz: &[u8]) -> Option<u8> {
    TASMI_ORDER.iter().copied().find(|j| !completed_juz.contains(j))
}

// ---------------------------------------------------------------------------
// Jilid
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NextJilid {
    Jilid(u8),
    /// All six jilid are done; the student reads from the mushaf.
    AlQuran,
}

pub fn next_jilid(completed_jilid: &[u8]) -> NextJilid {
    (1..=JILID_COUNT)
        .find(|j| !completed_jilid.contains(j))
        .map(NextJilid::Jilid)
        .unwrap_or(NextJilid::AlQuran)
}

// ---------------------------------------------------------------------------
// Combined
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NextAssessment {
    Drill { juz: u8, level: u8 },
    Tasmi { juz: u8 },
    /// Drills for the current juz are done but tasmi' is not open yet.
    NotEligible,
    /// Every juz has passed tasmi'.
    Finished,
}

/// Pending drill in the current juz first, then the next tasmi' juz.
pub fn next_assessment(progress: &StudentProgress) -> NextAssessment {
    let juz = progress.current_juz;
    if let Some(level) = next_drill_level(juz, &progress.drills_for(juz)) {
        return NextAssessment::Drill { juz, level };
    }
    if !is_eligible_for_tasmi(&progress.completed_juz, progress.drill_chain_complete) {
        return NextAssessment::NotEligible;
    }
    match next_tasmi_juz(&progress.tasmi_passed_juz) {
        Some(juz) => NextAssessment::Tasmi { juz },
        None => NextAssessment::Finished,
    }
}

// ---------------------------------------------------------------------------
// Class targets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetKind {
    NotRegistered,
    Met,
    NotMet,
    /// Chosen-surah tier: no target juz, reported as met until an admin
    /// configures one.
    SpecialTier,
}

impl TargetKind {
    pub fn description(self) -> &'static str {
        match self {
            TargetKind::NotRegistered => "Kelas belum terdaftar",
            TargetKind::Met           => "Target tercapai",
            TargetKind::NotMet        => "Belum mencapai target",
            TargetKind::SpecialTier   => "Surat pilihan (target ditentukan admin)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassTargetStatus {
    pub class_id: String,
    pub meets_target: bool,
    pub current_count: u32,
    pub target_count: u32,
    pub percentage: f64,
    pub kind: TargetKind,
    pub description: String,
}

impl ClassTargetStatus {
    fn new(class_id: &str, kind: TargetKind, current_count: u32, target_count: u32, pct: f64) -> Self {
        ClassTargetStatus {
            class_id: class_id.to_string(),
            meets_target: matches!(kind, TargetKind::Met | TargetKind::SpecialTier),
            current_count,
            target_count,
            percentage: pct,
            kind,
            description: kind.description().to_string(),
        }
    }
}

/// Check a class target using the built-in table.
pub fn check_class_target(class_id: &str, completed_juz: &[u8]) -> ClassTargetStatus {
    check_class_target_in(&default_class_targets(), class_id, completed_juz)
}

/// Check a class target against a supplied table.
///
/// A target juz `t` means every juz in [`TASMI_ORDER`] up to and including
/// `t` must be complete; the count is how many of those are done.
pub fn check_class_target_in(
    targets: &[ClassTarget],
    class_id: &str,
    completed_juz: &[u8],
) -> ClassTargetStatus {
    let class_id = class_id.trim();
    let completed: BTreeSet<u8> = completed_juz.iter().copied().filter(|&j| is_valid_juz(j)).collect();

    let Some(target) = targets.iter().find(|t| t.class_id == class_id) else {
        return ClassTargetStatus::new(class_id, TargetKind::NotRegistered, 0, 0, 0.0);
    };

    match target.target {
        ClassTargetRule::SpecialTier => {
            ClassTargetStatus::new(class_id, TargetKind::SpecialTier, completed.len() as u32, 0, 100.0)
        }
        ClassTargetRule::Juz(juz) => {
            let Some(pos) = TASMI_ORDER.iter().position(|&j| j == juz) else {
                tracing::warn!("class {class_id} targets invalid juz {juz}");
                return ClassTargetStatus::new(class_id, TargetKind::NotRegistered, 0, 0, 0.0);
            };
            let required = &TASMI_ORDER[..=pos];
            let target_count = required.len() as u32;
            let current_count = required.iter().filter(|j| completed.contains(j)).count() as u32;
            let kind = if current_count == target_count { TargetKind::Met } else { TargetKind::NotMet };
            ClassTargetStatus::new(
                class_id,
                kind,
                current_count,
                target_count,
                percentage(current_count, target_count),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(levels: &[u8]) -> BTreeSet<u8> {
        levels.iter().copied().collect()
    }

    #[test]
    fn next_drill_is_smallest_missing_level() {
        assert_eq!(next_drill_level(5, &set(&[])), Some(1));
        assert_eq!(next_drill_level(5, &set(&[1, 2, 4])), Some(3));
        assert_eq!(next_drill_level(5, &set(&[1, 2, 3, 4, 5, 6])), None);
        assert_eq!(next_drill_level(30, &set(&[1, 2, 3, 4, 5, 6, 7])), Some(8));
        assert_eq!(next_drill_level(0, &set(&[])), None);
    }

    #[test]
    fn drills_unlock_strictly_in_order() {
        for history in [set(&[]), set(&[3, 4]), set(&[1, 2])] {
            assert!(is_drill_unlocked(1, &history));
        }
        assert!(is_drill_unlocked(3, &set(&[2])));
        assert!(!is_drill_unlocked(3, &set(&[1])));
        assert!(!is_drill_unlocked(0, &set(&[1])));
        let history = set(&[1, 2]);
        assert_eq!(is_drill_unlocked(3, &history), is_drill_unlocked(3, &history));
    }

    #[test]
    fn tasmi_needs_both_conditions() {
        assert!(is_eligible_for_tasmi(&[30], true));
        assert!(!is_eligible_for_tasmi(&[30], false));
        assert!(!is_eligible_for_tasmi(&[], true));
        assert!(!is_eligible_for_tasmi(&[0, 31], true));
    }

    #[test]
    fn tasmi_order_is_canonical() {
        assert_eq!(next_tasmi_juz(&[]), Some(30));
        assert_eq!(next_tasmi_juz(&[30, 29, 28, 27, 26, 1, 2, 3, 4, 5, 6, 7, 8]), Some(9));
        assert_eq!(next_tasmi_juz(&[30, 28]), Some(29));
        let all: Vec<u8> = (1..=30).collect();
        assert_eq!(next_tasmi_juz(&all), None);
    }

    #[test]
    fn jilid_progression_ends_at_quran() {
        assert_eq!(next_jilid(&[]), NextJilid::Jilid(1));
        assert_eq!(next_jilid(&[1, 2, 3]), NextJilid::Jilid(4));
        assert_eq!(next_jilid(&[1, 2, 3, 4, 5, 6]), NextJilid::AlQuran);
    }

    #[test]
    fn next_assessment_prefers_pending_drill() {
        let mut p = StudentProgress::new("s1", "Kelas 1");
        assert_eq!(next_assessment(&p), NextAssessment::Drill { juz: 30, level: 1 });

        p.completed_drills.insert(30, (1..=8).collect());
        assert_eq!(next_assessment(&p), NextAssessment::NotEligible);

        p.completed_juz.push(30);
        p.drill_chain_complete = true;
        assert_eq!(next_assessment(&p), NextAssessment::Tasmi { juz: 30 });

        p.tasmi_passed_juz = TASMI_ORDER.to_vec();
        assert_eq!(next_assessment(&p), NextAssessment::Finished);
    }

    #[test]
    fn class_targets_distinguish_unregistered_from_unmet() {
        let unregistered = check_class_target("Kelas 9", &[30]);
        let unmet = check_class_target("Kelas 2", &[30]);
        assert!(!unregistered.meets_target);
        assert!(!unmet.meets_target);
        assert_eq!(unregistered.kind, TargetKind::NotRegistered);
        assert_eq!(unmet.kind, TargetKind::NotMet);
        assert_ne!(unregistered.description, unmet.description);
        assert_eq!(unmet.current_count, 1);
        assert_eq!(unmet.target_count, 2);
        assert_eq!(unmet.percentage, 50.0);
    }

    #[test]
    fn class_target_met_and_special_tier() {
        let met = check_class_target("Kelas 3", &[28, 29, 30, 1]);
        assert!(met.meets_target);
        assert_eq!(met.kind, TargetKind::Met);
        assert_eq!(met.percentage, 100.0);

        let special = check_class_target("Kelas 6", &[]);
        assert!(special.meets_target);
        assert_eq!(special.kind, TargetKind::SpecialTier);
    }

    #[test]
    fn custom_target_table() {
        let targets = vec![ClassTarget::new("Tahfidz A", ClassTargetRule::Juz(1))];
        let status = check_class_target_in(&targets, "Tahfidz A", &[30, 29, 28, 27, 26, 99]);
        assert_eq!(status.target_count, 6);
        assert_eq!(status.current_count, 5);
        assert!(!status.meets_target);
        assert_eq!(check_class_target_in(&targets, "Kelas 1", &[30]).kind, TargetKind::NotRegistered);
    }
}
