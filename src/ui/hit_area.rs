//! Clickable regions.
//!
//! Renderers register a [`HitArea`] for every clickable element while drawing.
//! The event loop hit-tests mouse clicks against the areas from the last
//! frame and turns the winner into a [`Command`].

use ratatui::layout::{Position, Rect};

use crate::input::Command;

/// What a click on an area does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Sidebar entry or dial dot
    GoTo(usize),
    /// Footer "previous" button
    Prev,
    /// Footer "next" button
    Next,
    /// Track tab
    SelectTrack(usize),
    /// Sub-step marker or grid cell column
    SelectSubStep(usize),
    /// Play/pause button
    TogglePlayback,
    /// Playground matrix cell
    InspectCell { row: usize, col: usize },
}

impl ClickAction {
    pub fn command(self) -> Command {
        match self {
            ClickAction::GoTo(i) => Command::GoTo(i),
            ClickAction::Prev => Command::Prev,
            ClickAction::Next => Command::Next,
            ClickAction::SelectTrack(i) => Command::SelectTrack(i),
            ClickAction::SelectSubStep(i) => Command::SelectSubStep(i),
            ClickAction::TogglePlayback => Command::TogglePlayback,
            ClickAction::InspectCell { row, col } => Command::InspectCell { row, col },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitArea {
    pub rect: Rect,
    pub action: ClickAction,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self { rect, action }
    }

    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.rect.contains(Position::new(x, y))
    }
}

/// Areas registered during the last render, plus the pointer position.
///
/// Later registrations sit on top of earlier ones. The pointer survives
/// [`clear`](Self::clear) so hover styling persists across redraws.
#[derive(Debug, Default, Clone)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
    pointer: Option<(u16, u16)>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call at the start of each render.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn register(&mut self, rect: Rect, action: ClickAction) {
        if rect.width > 0 && rect.height > 0 {
            self.areas.push(HitArea::new(rect, action));
        }
    }

    /// Action of the topmost area under `(x, y)`.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.topmost(x, y).map(|i| self.areas[i].action)
    }

    /// Track the area under the pointer. Returns true if it changed.
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        let before = self.hovered_action();
        self.pointer = Some((x, y));
        before != self.hovered_action()
    }

    pub fn hovered_action(&self) -> Option<ClickAction> {
        let (x, y) = self.pointer?;
        self.hit_test(x, y)
    }

    /// Whether the pointer is over an area with this action.
    pub fn is_hovered(&self, action: ClickAction) -> bool {
        self.hovered_action() == Some(action)
    }

    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    fn topmost(&self, x: u16, y: u16) -> Option<usize> {
        self.areas.iter().rposition(|area| area.contains(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_area_contains() {
        let area = HitArea::new(Rect::new(10, 10, 20, 10), ClickAction::Next);
        assert!(area.contains(10, 10));
        assert!(area.contains(29, 19));
        assert!(!area.contains(30, 10));
        assert!(!area.contains(10, 20));
    }

    #[test]
    fn test_zero_size_areas_not_registered() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(5, 5, 0, 1), ClickAction::Prev);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_hit_test_prefers_topmost() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 20, 20), ClickAction::GoTo(1));
        registry.register(Rect::new(5, 5, 10, 10), ClickAction::GoTo(2));
        assert_eq!(registry.hit_test(10, 10), Some(ClickAction::GoTo(2)));
        assert_eq!(registry.hit_test(2, 2), Some(ClickAction::GoTo(1)));
        assert_eq!(registry.hit_test(50, 50), None);
    }

    #[test]
    fn test_hover_changes() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 10, 1), ClickAction::Prev);
        registry.register(Rect::new(20, 0, 10, 1), ClickAction::Next);
        assert!(registry.update_hover(5, 0));
        assert!(!registry.update_hover(6, 0));
        assert_eq!(registry.hovered_action(), Some(ClickAction::Prev));
        assert!(registry.update_hover(25, 0));
        assert!(registry.update_hover(100, 100));
        assert_eq!(registry.hovered_action(), None);
    }

    #[test]
    fn test_hover_survives_redraw() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 10, 10), ClickAction::Next);
        registry.update_hover(1, 1);
        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.hovered_action(), None);
        registry.register(Rect::new(0, 0, 10, 10), ClickAction::Next);
        assert!(registry.is_hovered(ClickAction::Next));
    }

    #[test]
    fn test_click_maps_to_command() {
        assert_eq!(ClickAction::GoTo(4).command(), Command::GoTo(4));
        assert_eq!(ClickAction::SelectTrack(1).command(), Command::SelectTrack(1));
        assert_eq!(
            ClickAction::InspectCell { row: 2, col: 0 }.command(),
            Command::InspectCell { row: 2, col: 0 }
        );
    }
}
