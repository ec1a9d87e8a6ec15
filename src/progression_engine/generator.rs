use std::collections::{BTreeSet, HashSet};

use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

use crate::progression_engine::{
    config::EngineConfig,
    curriculum::{juz_of_verse, juz_page_window},
    helpers::question_prompt,
    models::{clamp_juz, ExamQuestion, ExamRequest, ExamSession},
    pool::{ChapterPool, PoolEntry},
};

/// Session id from the seeded RNG, e.g. `UJ-1A2B3C4D`.
fn make_session_id(rng: &mut impl RngCore) -> String {
    format!("UJ-{:08X}", rng.next_u32())
}

/// Start verse in `[1, max(1, verses - reserve)]`.
fn pick_start_verse<R: Rng>(rng: &mut R, verses: u16, reserve: u16) -> u16 {
    let upper = verses.saturating_sub(reserve).max(1);
    rng.gen_range(1..=upper)
}

fn build_question<R: Rng>(rng: &mut R, entry: &PoolEntry, start_verse: u16) -> ExamQuestion {
    // The verse's own juz when it lies in the requested range, otherwise the
    // first in-range juz of the chapter.
    let juz = juz_of_verse(entry.chapter_id, start_verse)
        .filter(|j| entry.juz.contains(j))
        .or_else(|| entry.juz.first().copied())
        .unwrap_or(1);
    let estimated_page = juz_page_window(juz)
        .map(|w| rng.gen_range(w.start..=w.end))
        .unwrap_or(1);
    ExamQuestion {
        juz,
        chapter_id: entry.chapter_id,
        chapter_name: entry.name.to_string(),
        start_verse,
        estimated_page,
        prompt: question_prompt(entry.name, entry.chapter_id, start_verse),
    }
}

/// Draw questions from a pool.
///
/// Up to `max_generation_attempts` draws reject repeated (chapter, verse)
/// pairs. If that still leaves the set short, the rest is filled without the
/// duplicate check so the result always has `question_count` entries
/// (unless the pool is empty).
pub fn generate_from_pool<R: Rng>(
    rng: &mut R,
    pool: &ChapterPool,
    config: &EngineConfig,
) -> Vec<ExamQuestion> {
    let wanted = config.question_count;
    let mut questions: Vec<ExamQuestion> = Vec::with_capacity(wanted);
    if pool.is_empty() {
        return questions;
    }

    let mut seen: HashSet<(u16, u16)> = HashSet::new();
    let mut used_chapters: BTreeSet<u16> = BTreeSet::new();
    let mut attempts = 0u32;

    while questions.len() < wanted && attempts < config.max_generation_attempts {
        attempts += 1;
        let Some(entry) = pool.draw(rng, &used_chapters) else {
            break;
        };
        let verse = pick_start_verse(rng, entry.verses, config.verse_tail_reserve);
        if !seen.insert((entry.chapter_id, verse)) {
            continue;
        }
        used_chapters.insert(entry.chapter_id);
        questions.push(build_question(rng, entry, verse));
    }

    if questions.len() < wanted {
        tracing::debug!(
            "only {} unique questions after {attempts} attempts, filling {} with repeats",
            questions.len(),
            wanted - questions.len()
        );
        while questions.len() < wanted {
            let Some(entry) = pool.draw_any(rng) else {
                break;
            };
            let verse = pick_start_verse(rng, entry.verses, config.verse_tail_reserve);
            questions.push(build_question(rng, entry, verse));
        }
    }

    questions
}

/// Questions for juz `from..=to` with the default configuration.
pub fn generate_exam_questions<R: Rng>(rng: &mut R, from: i64, to: i64) -> Vec<ExamQuestion> {
    generate_exam_questions_with(rng, from, to, &EngineConfig::default())
}

/// Juz numbers are clamped to 1..=30; `from > to` gives an empty set.
pub fn generate_exam_questions_with<R: Rng>(
    rng: &mut R,
    from: i64,
    to: i64,
    config: &EngineConfig,
) -> Vec<ExamQuestion> {
    let (from, to) = (clamp_juz(from), clamp_juz(to));
    if from > to {
        tracing::warn!("exam juz range {from}..={to} is reversed, no questions generated");
        return Vec::new();
    }
    generate_from_pool(rng, &ChapterPool::for_juz_range(from, to), config)
}

/// Entry point: seed the RNG and build a whole exam session.
pub fn generate_exam(request: ExamRequest, config: &EngineConfig) -> ExamSession {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let session_id = make_session_id(&mut rng);
    let (from_juz, to_juz) = (clamp_juz(request.from_juz), clamp_juz(request.to_juz));
    let questions = generate_exam_questions_with(&mut rng, request.from_juz, request.to_juz, config);
    tracing::debug!("exam {session_id}: {} questions for juz {from_juz}..={to_juz}", questions.len());

    ExamSession { session_id, from_juz, to_juz, questions }
}

/// Discard a session's questions and draw a fresh set for the same range.
pub fn regenerate_exam(session: &ExamSession, rng_seed: Option<u64>, config: &EngineConfig) -> ExamSession {
    generate_exam(
        ExamRequest {
            from_juz: session.from_juz as i64,
            to_juz: session.to_juz as i64,
            rng_seed,
        },
        config,
    )
}
