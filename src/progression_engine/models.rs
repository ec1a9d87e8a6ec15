use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Curriculum primitives
// ---------------------------------------------------------------------------

/// Number of juz in the Qur'an.
pub const JUZ_COUNT: u8 = 30;

/// True for juz numbers 1..=30.
pub fn is_valid_juz(juz: u8) -> bool {
    (1..=JUZ_COUNT).contains(&juz)
}

/// Clamp any integer to the nearest valid juz number.
pub fn clamp_juz(juz: i64) -> u8 {
    juz.clamp(1, JUZ_COUNT as i64) as u8
}

/// Inclusive mushaf page range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    pub start: u16,
    pub end: u16,
}

impl PageRange {
    pub fn new(start: u16, end: u16) -> Self {
        PageRange { start, end }
    }

    pub fn len(&self) -> usize {
        if self.end < self.start {
            0
        } else {
            (self.end - self.start) as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, page: u16) -> bool {
        (self.start..=self.end).contains(&page)
    }

    pub fn pages(&self) -> impl Iterator<Item = u16> {
        self.start..=self.end
    }
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hal. {}-{}", self.start, self.end)
    }
}

/// A chapter (surah) reference inside a drill level.
///
/// `full_chapter` segments ignore the verse bounds and cover every verse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterSegment {
    pub chapter_id: u16,
    pub full_chapter: bool,
    pub verse_start: Option<u16>,
    pub verse_end: Option<u16>,
}

impl ChapterSegment {
    pub fn full(chapter_id: u16) -> Self {
        ChapterSegment { chapter_id, full_chapter: true, verse_start: None, verse_end: None }
    }

    pub fn partial(chapter_id: u16, verse_start: u16, verse_end: u16) -> Self {
        ChapterSegment {
            chapter_id,
            full_chapter: false,
            verse_start: Some(verse_start),
            verse_end: Some(verse_end),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrillContent {
    Pages(PageRange),
    Chapters(Vec<ChapterSegment>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillLevel {
    pub juz: u8,
    pub level_number: u8,
    pub content: DrillContent,
}

/// The four tilawah assessment aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AspectId {
    Tartil,
    Fashohah,
    TajwidDasar,
    Ghorib,
}

impl AspectId {
    pub const ALL: [AspectId; 4] = [
        AspectId::Tartil,
        AspectId::Fashohah,
        AspectId::TajwidDasar,
        AspectId::Ghorib,
    ];
}

impl fmt::Display for AspectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AspectId::Tartil      => "Tartil",
            AspectId::Fashohah    => "Fashohah",
            AspectId::TajwidDasar => "Tajwid Dasar",
            AspectId::Ghorib      => "Ghorib",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubCriterion {
    pub id: &'static str,
    pub name: &'static str,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AspectDef {
    pub id: AspectId,
    pub max: f64,
    pub sub_criteria: &'static [SubCriterion],
}

/// How a minimum passing score (KKM) is derived for a level exam.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassRule {
    /// Fraction of the maximum possible total, e.g. `0.7`.
    Fraction(f64),
    /// Fixed absolute point total.
    Points(f64),
}

impl PassRule {
    pub fn threshold(self, max_possible: f64) -> f64 {
        match self {
            PassRule::Fraction(f) => f * max_possible,
            PassRule::Points(p)   => p,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JilidLevel {
    pub number: u8,
    pub pages: PageRange,
    pub aspects: &'static [AspectId],
}

// ---------------------------------------------------------------------------
// Verdicts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Passed,
    /// Drill or daily entry below threshold; the student repeats it.
    Repeat,
    /// Level exam below threshold.
    Failed,
    /// Content not fully covered yet; no score can pass.
    Incomplete,
}

impl Verdict {
    pub fn is_passed(self) -> bool {
        matches!(self, Verdict::Passed)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::Passed     => "Lulus",
            Verdict::Repeat     => "Mengulang",
            Verdict::Failed     => "Tidak Lulus",
            Verdict::Incomplete => "Belum Lengkap",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Exams
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamQuestion {
    pub juz: u8,
    pub chapter_id: u16,
    pub chapter_name: String,
    pub start_verse: u16,
    /// Display estimate only; never used in scoring.
    pub estimated_page: u16,
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamRequest {
    pub from_juz: i64,
    pub to_juz: i64,
    pub rng_seed: Option<u64>,
}

impl ExamRequest {
    /// Request for a juz range drawn from entropy.
    pub fn new(from_juz: i64, to_juz: i64) -> Self {
        ExamRequest { from_juz, to_juz, rng_seed: None }
    }

    pub fn seeded(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamSession {
    pub session_id: String,
    pub from_juz: u8,
    pub to_juz: u8,
    pub questions: Vec<ExamQuestion>,
}

// ---------------------------------------------------------------------------
// Student history
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntryKind {
    /// New memorization.
    Ziyadah,
    /// Review of memorized material.
    Murojaah,
    Tilawah,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Ziyadah  => write!(f, "Ziyadah"),
            EntryKind::Murojaah => write!(f, "Murojaah"),
            EntryKind::Tilawah  => write!(f, "Tilawah"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryStatus {
    Passed,
    Repeat,
    Excused,
    Absent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyEntry {
    pub student_id: String,
    pub date: NaiveDate,
    pub kind: EntryKind,
    pub status: EntryStatus,
    pub score: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProgress {
    pub student_id: String,
    pub class_id: String,
    pub current_juz: u8,
    pub current_jilid: u8,
    pub current_page: u16,
    /// Juz whose memorization is complete, in completion order.
    pub completed_juz: Vec<u8>,
    /// Juz already passed in a tasmi' exam.
    pub tasmi_passed_juz: Vec<u8>,
    pub completed_drills: BTreeMap<u8, BTreeSet<u8>>,
    pub completed_jilid: Vec<u8>,
    pub drill_chain_complete: bool,
}

impl StudentProgress {
    pub fn new(student_id: impl Into<String>, class_id: impl Into<String>) -> Self {
        StudentProgress {
            student_id: student_id.into(),
            class_id: class_id.into(),
            current_juz: 30,
            current_jilid: 1,
            current_page: 1,
            ..Default::default()
        }
    }

    /// Completed drill levels for one juz (empty when none).
    pub fn drills_for(&self, juz: u8) -> BTreeSet<u8> {
        self.completed_drills.get(&juz).cloned().unwrap_or_default()
    }
}
