use serde_json::{json, Value};

use crate::progression_engine::{
    calendar::{DateState, DayCell},
    eligibility::ClassTargetStatus,
    helpers::question_label,
    models::ExamSession,
    navigation::MenuItem,
    scoring::LevelExamResult,
};

/// Status string the dashboard calendar styles cells by.
fn date_state_str(state: DateState) -> &'static str {
    match state {
        DateState::Future     => "future",
        DateState::Filled     => "filled",
        DateState::Selectable => "open",
        DateState::Locked     => "locked",
    }
}

/// Map an exam session to the exam sheet payload.
pub fn exam_sheet_json(session: &ExamSession) -> Value {
    let questions: Vec<Value> = session
        .questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            json!({
                "no": i + 1,
                "juz": q.juz,
                "surah": q.chapter_id,
                "surahName": q.chapter_name,
                "ayat": q.start_verse,
                "halaman": q.estimated_page,
                "prompt": q.prompt,
                "label": question_label(q),
            })
        })
        .collect();

    json!({
        "sessionId": session.session_id,
        "juzRange": format!("{}-{}", session.from_juz, session.to_juz),
        "total": questions.len(),
        "questions": questions,
    })
}

/// Map a month of day cells to the calendar payload.
pub fn calendar_json(cells: &[DayCell]) -> Value {
    let days: Vec<Value> = cells
        .iter()
        .map(|c| {
            json!({
                "date": c.date.format("%Y-%m-%d").to_string(),
                "status": date_state_str(c.state),
                "clickable": c.state == DateState::Selectable,
            })
        })
        .collect();
    let open = cells
        .iter()
        .find(|c| c.state == DateState::Selectable)
        .map(|c| c.date.format("%Y-%m-%d").to_string());

    json!({ "days": days, "openDate": open })
}

/// Level exam result card: per-aspect list plus total and verdict label.
pub fn level_exam_json(result: &LevelExamResult) -> Value {
    json!({
        "jilid": result.jilid,
        "aspects": result.aspects.iter().map(|a| a.to_string()).collect::<Vec<_>>(),
        "total": result.score.total,
        "maxPossible": result.score.max_possible,
        "kkm": result.threshold,
        "status": result.verdict.to_string(),
    })
}

pub fn class_target_json(status: &ClassTargetStatus) -> Value {
    json!({
        "kelas": status.class_id,
        "tercapai": status.meets_target,
        "jumlah": status.current_count,
        "target": status.target_count,
        "persen": status.percentage,
        "keterangan": status.description,
    })
}

/// Sidebar payload: groups keep their children, leaves carry their link.
pub fn menu_json(menu: &[MenuItem]) -> Value {
    Value::Array(menu.iter().map(menu_item_json).collect())
}

fn menu_item_json(item: &MenuItem) -> Value {
    match item {
        MenuItem::Leaf { title, url, icon } => json!({ "title": title, "url": url, "icon": icon }),
        MenuItem::Group { title, icon, children } => json!({
            "title": title,
            "icon": icon,
            "children": children.iter().map(menu_item_json).collect::<Vec<_>>(),
        }),
    }
}
