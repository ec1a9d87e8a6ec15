//! Juz boundaries and the chapter spans each juz contains.

use serde::Serialize;

use crate::progression_engine::curriculum::chapters::{chapter, verse_count, CHAPTER_COUNT};
use crate::progression_engine::models::{is_valid_juz, PageRange, JUZ_COUNT};

/// Pages per juz in the fixed 20-page window used for page estimates.
pub const PAGES_PER_JUZ: u16 = 20;

/// First (chapter, verse) of each juz, index 0 = juz 1.
const JUZ_STARTS: [(u16, u16); 30] = [
    (1, 1),    (2, 142),  (2, 253),  (3, 93),   (4, 24),
    (4, 148),  (5, 82),   (6, 111),  (7, 88),   (8, 41),
    (9, 93),   (11, 6),   (12, 53),  (15, 1),   (17, 1),
    (18, 75),  (21, 1),   (23, 1),   (25, 21),  (27, 56),
    (29, 46),  (33, 31),  (36, 28),  (39, 32),  (41, 47),
    (46, 1),   (51, 31),  (58, 1),   (67, 1),   (78, 1),
];

/// The verses of one chapter that fall inside a juz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChapterSpan {
    pub chapter_id: u16,
    pub verse_start: u16,
    pub verse_end: u16,
}

impl ChapterSpan {
    /// True when the span holds the whole chapter.
    pub fn is_full_chapter(&self) -> bool {
        self.verse_start == 1 && self.verse_end == verse_count(self.chapter_id)
    }
}

/// Last (chapter, verse) of a juz.
fn juz_end(juz: u8) -> (u16, u16) {
    if juz == JUZ_COUNT {
        return (CHAPTER_COUNT, verse_count(CHAPTER_COUNT));
    }
    let (next_chapter, next_verse) = JUZ_STARTS[juz as usize];
    if next_verse == 1 {
        (next_chapter - 1, verse_count(next_chapter - 1))
    } else {
        (next_chapter, next_verse - 1)
    }
}

/// Chapters touching `juz`, in mushaf order, with the verse span inside it.
///
/// Returns an empty list for juz outside 1..=30.
pub fn juz_chapters(juz: u8) -> Vec<ChapterSpan> {
    if !is_valid_juz(juz) {
        return Vec::new();
    }
    let (first_chapter, first_verse) = JUZ_STARTS[juz as usize - 1];
    let (last_chapter, last_verse) = juz_end(juz);

    (first_chapter..=last_chapter)
        .map(|chapter_id| ChapterSpan {
            chapter_id,
            verse_start: if chapter_id == first_chapter { first_verse } else { 1 },
            verse_end: if chapter_id == last_chapter {
                last_verse
            } else {
                verse_count(chapter_id)
            },
        })
        .collect()
}

/// Juz containing a given verse, or `None` for an unknown chapter/verse.
pub fn juz_of_verse(chapter_id: u16, verse: u16) -> Option<u8> {
    let c = chapter(chapter_id)?;
    if verse == 0 || verse > c.verses {
        return None;
    }
    JUZ_STARTS
        .iter()
        .rposition(|&start| start <= (chapter_id, verse))
        .map(|idx| idx as u8 + 1)
}

/// The fixed 20-page window of a juz (juz 1 = pages 1-20).
pub fn juz_page_window(juz: u8) -> Option<PageRange> {
    if !is_valid_juz(juz) {
        return None;
    }
    let start = (juz as u16 - 1) * PAGES_PER_JUZ + 1;
    Some(PageRange::new(start, start + PAGES_PER_JUZ - 1))
}
