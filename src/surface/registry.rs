//! Registry of decorated task elements
//!
//! The host renders one element per task line and hands the registry an
//! opaque [`ElementId`] for each. The registry owns every decoration it
//! attaches, so teardown is a plain drain of the map.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

use crate::storage::Settings;

/// Host-side identity of a rendered task element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Drag events a decoration listens for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DragEventKind {
    DragStart,
    DragEnd,
    DragOver,
    DragEnter,
    DragLeave,
    Drop,
}

impl DragEventKind {
    pub const ALL: [DragEventKind; 6] = [
        DragEventKind::DragStart,
        DragEventKind::DragEnd,
        DragEventKind::DragOver,
        DragEventKind::DragEnter,
        DragEventKind::DragLeave,
        DragEventKind::Drop,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            DragEventKind::DragStart => "dragstart",
            DragEventKind::DragEnd => "dragend",
            DragEventKind::DragOver => "dragover",
            DragEventKind::DragEnter => "dragenter",
            DragEventKind::DragLeave => "dragleave",
            DragEventKind::Drop => "drop",
        }
    }
}

pub const CLASS_DRAGGABLE: &str = "draggable";
pub const CLASS_INDENTATION_MARKER: &str = "indentation-marker";
pub const CLASS_DRAGGING: &str = "dragging";
pub const CLASS_DRAG_OVER: &str = "drag-over";
pub const CLASS_DRAG_HANDLE: &str = "drag-handle";

/// Glyph shown inside the drag handle
pub const HANDLE_GLYPH: &str = "⋮⋮";

/// Everything attached to one task element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decoration {
    /// Task index the element stands for
    pub index: usize,

    /// Classes added to the element
    classes: BTreeSet<String>,

    /// Class attribute of the injected drag handle
    pub handle_class: String,

    /// Listeners attached to the element
    listeners: BTreeSet<DragEventKind>,
}

impl Decoration {
    fn new(index: usize, settings: &Settings) -> Self {
        let mut classes = BTreeSet::new();
        classes.insert(CLASS_DRAGGABLE.to_string());
        if settings.indentation_marker {
            classes.insert(CLASS_INDENTATION_MARKER.to_string());
        }

        let handle_class = match settings.handle_class() {
            Some(custom) => format!("{} {}", CLASS_DRAG_HANDLE, custom),
            None => CLASS_DRAG_HANDLE.to_string(),
        };

        Self {
            index,
            classes,
            handle_class,
            listeners: DragEventKind::ALL.into_iter().collect(),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn listens_to(&self, event: DragEventKind) -> bool {
        self.listeners.contains(&event)
    }

    /// Detaches every listener, returning what was attached
    fn detach(&mut self) -> Vec<DragEventKind> {
        std::mem::take(&mut self.listeners).into_iter().collect()
    }
}

/// A decoration removed by [`DragRegistry::teardown`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detached {
    pub element: ElementId,
    pub index: usize,
    pub listeners: Vec<DragEventKind>,
}

/// Owned map of decorated elements
#[derive(Debug, Default)]
pub struct DragRegistry {
    items: BTreeMap<ElementId, Decoration>,
}

impl DragRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decorates an element as task `index`, replacing any earlier decoration
    pub fn decorate(&mut self, element: ElementId, index: usize, settings: &Settings) {
        self.items.insert(element, Decoration::new(index, settings));
    }

    /// Decorates elements in task order; returns how many were decorated
    pub fn decorate_all(
        &mut self,
        elements: impl IntoIterator<Item = ElementId>,
        settings: &Settings,
    ) -> usize {
        let mut count = 0;
        for (index, element) in elements.into_iter().enumerate() {
            self.decorate(element, index, settings);
            count += 1;
        }
        count
    }

    /// Task index of a decorated element
    pub fn index_of(&self, element: ElementId) -> Option<usize> {
        self.items.get(&element).map(|d| d.index)
    }

    /// Element decorated as task `index`
    pub fn element_at(&self, index: usize) -> Option<ElementId> {
        self.items
            .iter()
            .find(|(_, d)| d.index == index)
            .map(|(element, _)| *element)
    }

    pub fn decoration(&self, element: ElementId) -> Option<&Decoration> {
        self.items.get(&element)
    }

    pub(crate) fn decoration_mut(&mut self, element: ElementId) -> Option<&mut Decoration> {
        self.items.get_mut(&element)
    }

    /// Returns true when at least one element is decorated
    pub fn is_active(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every decoration and detaches its listeners
    pub fn teardown(&mut self) -> Vec<Detached> {
        std::mem::take(&mut self.items)
            .into_iter()
            .map(|(element, mut decoration)| Detached {
                element,
                index: decoration.index,
                listeners: decoration.detach(),
            })
            .collect()
    }
}
