//! Drag gesture tracking
//!
//! Turns the host's drag events into a single [`TaskMove`] once the
//! gesture completes on another task element.

use crate::domain::TaskMove;

use super::registry::{DragRegistry, ElementId, CLASS_DRAGGING, CLASS_DRAG_OVER};

/// State of the gesture in progress
#[derive(Debug, Default)]
pub struct DragSession {
    source: Option<ElementId>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Element currently being dragged
    pub fn source(&self) -> Option<ElementId> {
        self.source
    }

    /// Picks up a decorated element; returns false for unknown elements
    pub fn start(&mut self, registry: &mut DragRegistry, element: ElementId) -> bool {
        let Some(decoration) = registry.decoration_mut(element) else {
            return false;
        };

        decoration.add_class(CLASS_DRAGGING);
        self.source = Some(element);
        true
    }

    /// Pointer entered a task element
    pub fn enter(&mut self, registry: &mut DragRegistry, element: ElementId) {
        if let Some(decoration) = registry.decoration_mut(element) {
            if !decoration.has_class(CLASS_DRAGGING) {
                decoration.add_class(CLASS_DRAG_OVER);
            }
        }
    }

    /// Pointer left a task element
    pub fn leave(&mut self, registry: &mut DragRegistry, element: ElementId) {
        if let Some(decoration) = registry.decoration_mut(element) {
            decoration.remove_class(CLASS_DRAG_OVER);
        }
    }

    /// Gesture ended without a drop, or after one
    pub fn end(&mut self, registry: &mut DragRegistry) {
        if let Some(source) = self.source.take() {
            if let Some(decoration) = registry.decoration_mut(source) {
                decoration.remove_class(CLASS_DRAGGING);
            }
        }
    }

    /// Drops onto `target`, yielding the move when it changes anything
    pub fn drop_on(&mut self, registry: &mut DragRegistry, target: ElementId) -> Option<TaskMove> {
        let to = registry.index_of(target);
        self.leave(registry, target);

        let from = self.source.and_then(|source| registry.index_of(source));
        self.end(registry);

        match (from, to) {
            (Some(from), Some(to)) if from != to => Some(TaskMove::new(from, to)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Settings;

    fn registry(n: u64) -> DragRegistry {
        let mut registry = DragRegistry::new();
        registry.decorate_all((0..n).map(ElementId), &Settings::DEFAULT);
        registry
    }

    #[test]
    fn drop_on_other_task_yields_move() {
        let mut registry = registry(3);
        let mut session = DragSession::new();

        assert!(session.start(&mut registry, ElementId(0)));
        assert!(registry.decoration(ElementId(0)).unwrap().has_class(CLASS_DRAGGING));

        session.enter(&mut registry, ElementId(2));
        assert!(registry.decoration(ElementId(2)).unwrap().has_class(CLASS_DRAG_OVER));

        let mv = session.drop_on(&mut registry, ElementId(2));
        assert_eq!(mv, Some(TaskMove::new(0, 2)));

        assert!(!registry.decoration(ElementId(0)).unwrap().has_class(CLASS_DRAGGING));
        assert!(!registry.decoration(ElementId(2)).unwrap().has_class(CLASS_DRAG_OVER));
        assert_eq!(session.source(), None);
    }

    #[test]
    fn drop_on_self_is_nothing() {
        let mut registry = registry(2);
        let mut session = DragSession::new();

        session.start(&mut registry, ElementId(1));
        assert_eq!(session.drop_on(&mut registry, ElementId(1)), None);
    }

    #[test]
    fn dragged_element_never_shows_drag_over() {
        let mut registry = registry(2);
        let mut session = DragSession::new();

        session.start(&mut registry, ElementId(1));
        session.enter(&mut registry, ElementId(1));
        assert!(!registry.decoration(ElementId(1)).unwrap().has_class(CLASS_DRAG_OVER));
    }

    #[test]
    fn undecorated_elements_are_ignored() {
        let mut registry = registry(2);
        let mut session = DragSession::new();

        assert!(!session.start(&mut registry, ElementId(9)));
        assert_eq!(session.drop_on(&mut registry, ElementId(1)), None);

        session.start(&mut registry, ElementId(0));
        assert_eq!(session.drop_on(&mut registry, ElementId(9)), None);
    }

    #[test]
    fn end_without_drop_clears_state() {
        let mut registry = registry(2);
        let mut session = DragSession::new();

        session.start(&mut registry, ElementId(0));
        session.end(&mut registry);

        assert_eq!(session.source(), None);
        assert!(!registry.decoration(ElementId(0)).unwrap().has_class(CLASS_DRAGGING));
        assert_eq!(session.drop_on(&mut registry, ElementId(1)), None);
    }
}
