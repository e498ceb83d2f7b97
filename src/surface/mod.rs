//! # Drag Interaction Surface
//!
//! Host-agnostic model of the drag-and-drop layer on top of rendered task
//! lists.
//!
//! - [`DragRegistry`] - owned map from task elements to their decorations
//! - [`DragSession`] - turns drag events into a [`TaskMove`](crate::domain::TaskMove)
//! - [`stylesheet`] - CSS for decorated elements, derived from settings
//!
//! Nothing here is global: the host owns the registry and passes it to the
//! session and to teardown explicitly.

mod registry;
mod session;
mod styles;

pub use registry::{
    Decoration, Detached, DragEventKind, DragRegistry, ElementId, CLASS_DRAGGABLE,
    CLASS_DRAGGING, CLASS_DRAG_HANDLE, CLASS_DRAG_OVER, CLASS_INDENTATION_MARKER, HANDLE_GLYPH,
};
pub use session::DragSession;
pub use styles::stylesheet;
