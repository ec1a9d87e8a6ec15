//! Drill level definitions per juz.
//!
//! Juz 1-28 use six page-range drills, each a longer run of pages from the
//! start of the juz's 20-page window. Juz 29 and 30 are drilled by chapter:
//! seven levels for juz 29 (starting from Al-Mulk), eight for juz 30
//! (growing backwards from An-Nas).

use crate::progression_engine::{
    curriculum::juz::juz_page_window,
    models::{is_valid_juz, ChapterSegment, DrillContent, DrillLevel, PageRange},
};

/// Relative page spans inside the 20-page juz window for juz 1-28.
const PAGE_DRILL_SPANS: [(u16, u16); 6] = [(1, 3), (1, 5), (1, 8), (1, 10), (1, 15), (1, 20)];

/// Chapter ranges for juz 30, level 1 first. Each range ends at An-Nas.
const JUZ_30_FIRST_CHAPTERS: [u16; 8] = [109, 105, 100, 96, 91, 87, 83, 78];

/// Last chapter covered by each juz 29 level after the partial level 1.
const JUZ_29_LAST_CHAPTERS: [u16; 6] = [67, 68, 69, 71, 74, 77];

/// Number of drill levels for a juz; 0 for an invalid juz.
pub fn drill_level_count(juz: u8) -> u8 {
    match juz {
        29 => 1 + JUZ_29_LAST_CHAPTERS.len() as u8,
        30 => JUZ_30_FIRST_CHAPTERS.len() as u8,
        j if is_valid_juz(j) => PAGE_DRILL_SPANS.len() as u8,
        _ => 0,
    }
}

/// Content of one drill level, `None` when the juz or level does not exist.
pub fn drill_level(juz: u8, level_number: u8) -> Option<DrillLevel> {
    if level_number == 0 || level_number > drill_level_count(juz) {
        return None;
    }
    let idx = level_number as usize - 1;
    let content = match juz {
        29 => {
            if idx == 0 {
                DrillContent::Chapters(vec![ChapterSegment::partial(67, 1, 15)])
            } else {
                let last = JUZ_29_LAST_CHAPTERS[idx - 1];
                DrillContent::Chapters((67..=last).map(ChapterSegment::full).collect())
            }
        }
        30 => {
            let first = JUZ_30_FIRST_CHAPTERS[idx];
            DrillContent::Chapters((first..=114).map(ChapterSegment::full).collect())
        }
        _ => {
            let window = juz_page_window(juz)?;
            let (from, to) = PAGE_DRILL_SPANS[idx];
            DrillContent::Pages(PageRange::new(window.start + from - 1, window.start + to - 1))
        }
    };
    Some(DrillLevel { juz, level_number, content })
}

/// All drill levels of a juz in attempt order.
pub fn drill_levels(juz: u8) -> Vec<DrillLevel> {
    (1..=drill_level_count(juz))
        .filter_map(|level| drill_level(juz, level))
        .collect()
}
