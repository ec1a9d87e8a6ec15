//! Static curriculum reference tables.
//!
//! Everything here is immutable data plus read-only lookups. A lookup for a
//! key that does not exist returns `None` or an empty list, never panics.

/// Surah names and verse counts.
pub mod chapters;
/// Juz boundaries, chapter spans and page windows.
pub mod juz;
/// Drill levels per juz.
pub mod drills;
/// Jilid page ranges and assessment aspects.
pub mod jilid;

pub use chapters::{chapter, verse_count, Chapter};
pub use drills::{drill_level, drill_level_count, drill_levels};
pub use jilid::{aspect, jilid, jilid_for_page};
pub use juz::{juz_chapters, juz_of_verse, juz_page_window, ChapterSpan};
