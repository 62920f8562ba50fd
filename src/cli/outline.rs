//! `--list` output: the outline as plain text or JSON.

use serde::Serialize;

use crate::error::TutorResult;
use crate::nav::Outline;

/// One line per step, grouped under chapter headings.
pub fn outline_text<C>(outline: &Outline<C>) -> String {
    let id_width = outline.steps().iter().map(|s| s.id.len()).max().unwrap_or(0);
    let mut out = String::new();
    let mut grouped = vec![false; outline.len()];

    for chapter in outline.chapters() {
        out.push_str(&chapter.title);
        out.push('\n');
        for &index in &chapter.steps {
            grouped[index] = true;
            if let Some(step) = outline.step(index) {
                out.push_str(&format!(
                    "  {:>2}  {:<id_width$}  {}\n",
                    index, step.id, step.label
                ));
            }
        }
    }
    for step in outline.steps().iter().filter(|s| !grouped[s.global_index]) {
        out.push_str(&format!(
            "  {:>2}  {:<id_width$}  {}\n",
            step.global_index, step.id, step.label
        ));
    }
    out
}

pub fn outline_json<C: Serialize>(outline: &Outline<C>) -> TutorResult<String> {
    Ok(serde_json::to_string_pretty(outline)?)
}
