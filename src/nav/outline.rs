//! The fixed, ordered sequence of steps and its chapter grouping.
//!
//! An [`Outline`] is built once at startup through [`OutlineBuilder`] and is
//! immutable afterwards. Steps carry their global index; chapters refer to
//! steps by that index rather than holding copies.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{TutorError, TutorResult};

/// One navigable content unit.
///
/// `C` is the reference to the renderable content; the navigation core never
/// looks inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step<C> {
    /// Stable identifier (e.g. `"scalars"`)
    pub id: String,
    /// Display label
    pub label: String,
    /// Display icon
    pub icon: String,
    /// Renderable content reference
    pub content: C,
    /// Zero-based position in the flattened order
    pub global_index: usize,
}

/// A named group of consecutive steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chapter {
    pub title: String,
    /// Global indices of the steps in this chapter, in order
    pub steps: Vec<usize>,
}

impl Chapter {
    /// Whether the given global index belongs to this chapter.
    pub fn contains(&self, index: usize) -> bool {
        self.steps.contains(&index)
    }
}

/// The complete, validated step sequence.
#[derive(Debug, Clone, Serialize)]
pub struct Outline<C> {
    chapters: Vec<Chapter>,
    steps: Vec<Step<C>>,
}

impl<C> Outline<C> {
    /// Start building an outline.
    pub fn builder() -> OutlineBuilder<C> {
        OutlineBuilder::new()
    }

    /// Number of steps. Always at least one.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step<C>] {
        &self.steps
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// Step at a global index.
    pub fn step(&self, index: usize) -> Option<&Step<C>> {
        self.steps.get(index)
    }

    /// Global index of the step with the given id.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.id == id)
    }

    /// Chapter containing the given global index.
    pub fn chapter_of(&self, index: usize) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.contains(index))
    }

    /// The last step. Outlines are never empty.
    pub fn last(&self) -> &Step<C> {
        &self.steps[self.steps.len() - 1]
    }
}

/// A step as declared, before it receives its global index.
struct PendingStep<C> {
    id: String,
    label: String,
    icon: String,
    content: C,
}

/// Builder for [`Outline`].
///
/// # Example
///
/// ```
/// use tensorwalk::nav::Outline;
///
/// let outline = Outline::builder()
///     .chapter("Basics")
///     .step("intro", "Intro", "*", 0u8)
///     .step("more", "More", "+", 1u8)
///     .build()
///     .unwrap();
/// assert_eq!(outline.len(), 2);
/// assert_eq!(outline.position_of("more"), Some(1));
/// ```
pub struct OutlineBuilder<C> {
    chapters: Vec<(String, Vec<PendingStep<C>>)>,
    loose: Vec<PendingStep<C>>,
}

impl<C> Default for OutlineBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> OutlineBuilder<C> {
    pub fn new() -> Self {
        Self {
            chapters: Vec::new(),
            loose: Vec::new(),
        }
    }

    /// Open a new chapter. Subsequent `step` calls are added to it.
    pub fn chapter(mut self, title: impl Into<String>) -> Self {
        self.chapters.push((title.into(), Vec::new()));
        self
    }

    /// Append a step to the current chapter, or to the ungrouped list when
    /// no chapter has been opened yet.
    pub fn step(
        mut self,
        id: impl Into<String>,
        label: impl Into<String>,
        icon: impl Into<String>,
        content: C,
    ) -> Self {
        let pending = PendingStep {
            id: id.into(),
            label: label.into(),
            icon: icon.into(),
            content,
        };
        match self.chapters.last_mut() {
            Some((_, steps)) => steps.push(pending),
            None => self.loose.push(pending),
        }
        self
    }

    /// Validate and flatten into an [`Outline`].
    ///
    /// Ungrouped steps come first and belong to no chapter.
    ///
    /// # Errors
    ///
    /// - [`TutorError::EmptyOutline`] when no steps were declared
    /// - [`TutorError::EmptyChapter`] when a chapter has no steps
    /// - [`TutorError::DuplicateStepId`] when two steps share an id
    pub fn build(self) -> TutorResult<Outline<C>> {
        let mut seen = HashSet::new();
        let mut steps = Vec::new();
        let mut chapters = Vec::with_capacity(self.chapters.len());

        let mut push = |pending: PendingStep<C>, steps: &mut Vec<Step<C>>| -> TutorResult<usize> {
            if !seen.insert(pending.id.clone()) {
                return Err(TutorError::DuplicateStepId(pending.id));
            }
            let global_index = steps.len();
            steps.push(Step {
                id: pending.id,
                label: pending.label,
                icon: pending.icon,
                content: pending.content,
                global_index,
            });
            Ok(global_index)
        };

        for pending in self.loose {
            push(pending, &mut steps)?;
        }

        for (title, pending_steps) in self.chapters {
            if pending_steps.is_empty() {
                return Err(TutorError::EmptyChapter { title });
            }
            let mut indices = Vec::with_capacity(pending_steps.len());
            for pending in pending_steps {
                indices.push(push(pending, &mut steps)?);
            }
            chapters.push(Chapter {
                title,
                steps: indices,
            });
        }

        if steps.is_empty() {
            return Err(TutorError::EmptyOutline);
        }

        Ok(Outline { chapters, steps })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_chapters() -> Outline<&'static str> {
        Outline::builder()
            .chapter("One")
            .step("a", "A", "1", "first")
            .step("b", "B", "2", "second")
            .chapter("Two")
            .step("c", "C", "3", "third")
            .build()
            .unwrap()
    }

    #[test]
    fn test_global_indices_follow_declaration_order() {
        let outline = two_chapters();
        let indices: Vec<usize> = outline.steps().iter().map(|s| s.global_index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(outline.chapters()[1].steps, vec![2]);
    }

    #[test]
    fn test_chapter_lookup() {
        let outline = two_chapters();
        assert_eq!(outline.chapter_of(1).map(|c| c.title.as_str()), Some("One"));
        assert_eq!(outline.chapter_of(2).map(|c| c.title.as_str()), Some("Two"));
        assert!(outline.chapter_of(3).is_none());
    }

    #[test]
    fn test_position_of_and_last() {
        let outline = two_chapters();
        assert_eq!(outline.position_of("c"), Some(2));
        assert_eq!(outline.position_of("zzz"), None);
        assert_eq!(outline.last().id, "c");
    }

    #[test]
    fn test_empty_outline_is_rejected() {
        let result = OutlineBuilder::<()>::new().build();
        assert!(matches!(result, Err(TutorError::EmptyOutline)));
    }

    #[test]
    fn test_empty_chapter_is_rejected() {
        let result = Outline::builder()
            .chapter("Full")
            .step("a", "A", "", ())
            .chapter("Hollow")
            .build();
        assert!(matches!(result, Err(TutorError::EmptyChapter { title }) if title == "Hollow"));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let result = Outline::builder()
            .step("a", "A", "", ())
            .step("a", "Again", "", ())
            .build();
        assert!(matches!(result, Err(TutorError::DuplicateStepId(id)) if id == "a"));
    }

    #[test]
    fn test_ungrouped_steps_have_no_chapter() {
        let outline = Outline::builder()
            .step("solo", "Solo", "", ())
            .build()
            .unwrap();
        assert_eq!(outline.len(), 1);
        assert!(outline.chapters().is_empty());
        assert!(outline.chapter_of(0).is_none());
    }
}
