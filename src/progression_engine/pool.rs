use std::collections::BTreeSet;

use rand::Rng;

use crate::progression_engine::curriculum::{chapter, juz_chapters};

/// One candidate chapter for exam questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolEntry {
    pub chapter_id: u16,
    pub name: &'static str,
    pub verses: u16,
    /// Juz inside the requested range that contain part of this chapter.
    pub juz: Vec<u8>,
}

/// The de-duplicated chapters of a juz range, drawn from uniformly.
pub struct ChapterPool {
    entries: Vec<PoolEntry>,
}

impl ChapterPool {
    /// Chapters touching juz `from..=to`, in mushaf order. A chapter that
    /// spans several juz appears once.
    pub fn for_juz_range(from: u8, to: u8) -> Self {
        let mut entries: Vec<PoolEntry> = Vec::new();
        for juz in from..=to {
            for span in juz_chapters(juz) {
                if let Some(existing) = entries.iter_mut().find(|e| e.chapter_id == span.chapter_id) {
                    existing.juz.push(juz);
                    continue;
                }
                if let Some(c) = chapter(span.chapter_id) {
                    entries.push(PoolEntry {
                        chapter_id: c.id,
                        name: c.name,
                        verses: c.verses,
                        juz: vec![juz],
                    });
                }
            }
        }
        ChapterPool { entries }
    }

    /// Build a pool from explicit entries (tests and custom curricula).
    pub fn from_entries(entries: Vec<PoolEntry>) -> Self {
        ChapterPool { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[PoolEntry] {
        &self.entries
    }

    /// Uniform draw over chapters not in `used`; over the whole pool once
    /// every chapter has been used. `None` only for an empty pool.
    pub fn draw<R: Rng>(&self, rng: &mut R, used: &BTreeSet<u16>) -> Option<&PoolEntry> {
        let fresh: Vec<&PoolEntry> = self
            .entries
            .iter()
            .filter(|e| !used.contains(&e.chapter_id))
            .collect();
        if fresh.is_empty() {
            return self.draw_any(rng);
        }
        Some(fresh[rng.gen_range(0..fresh.len())])
    }

    /// Uniform draw over the whole pool.
    pub fn draw_any<R: Rng>(&self, rng: &mut R) -> Option<&PoolEntry> {
        if self.entries.is_empty() {
            return None;
        }
        Some(&self.entries[rng.gen_range(0..self.entries.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spanning_chapter_appears_once() {
        // Al-Baqarah runs through juz 1, 2 and 3.
        let pool = ChapterPool::for_juz_range(1, 3);
        let ids: Vec<u16> = pool.entries().iter().map(|e| e.chapter_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(pool.entries()[1].juz, vec![1, 2, 3]);
    }

    #[test]
    fn draw_prefers_unused_chapters() {
        let pool = ChapterPool::for_juz_range(1, 1);
        let mut rng = StdRng::seed_from_u64(7);
        let used: BTreeSet<u16> = [1].into_iter().collect();
        for _ in 0..20 {
            assert_eq!(pool.draw(&mut rng, &used).map(|e| e.chapter_id), Some(2));
        }
        let all: BTreeSet<u16> = [1, 2].into_iter().collect();
        assert!(pool.draw(&mut rng, &all).is_some());
    }

    #[test]
    fn empty_pool_draws_nothing() {
        let pool = ChapterPool::from_entries(Vec::new());
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pool.is_empty());
        assert!(pool.draw(&mut rng, &BTreeSet::new()).is_none());
    }
}
