//! Stylesheet for decorated task elements

use std::fmt::Write;

use crate::storage::{DragHandleStyle, Settings};

use super::registry::{
    CLASS_DRAGGABLE, CLASS_DRAGGING, CLASS_DRAG_HANDLE, CLASS_DRAG_OVER, CLASS_INDENTATION_MARKER,
};

const ITEM: &str = ".task-list-item";

/// Builds the CSS injected alongside decorated task lists
pub fn stylesheet(settings: &Settings) -> String {
    let cursor = match settings.drag_handle_style {
        DragHandleStyle::Move => "move",
        DragHandleStyle::Grab | DragHandleStyle::Custom => "grab",
    };

    // Custom handles are styled by their own class
    let handle = match settings.handle_class() {
        Some(custom) => format!(".{}.{}", CLASS_DRAG_HANDLE, custom),
        None => format!(".{}", CLASS_DRAG_HANDLE),
    };

    let mut css = String::new();

    // Writing to a String cannot fail
    let _ = write!(
        css,
        "{item}.{draggable} {{
    cursor: {cursor};
    position: relative;
    padding-left: 5px;
    transition: background-color {speed}ms ease;
}}

{item}.{draggable}:hover {{
    background-color: var(--background-secondary);
}}

{item}.{dragging} {{
    opacity: 0.5;
    background-color: var(--interactive-accent);
}}

{item}.{drag_over} {{
    border-top: 2px solid var(--interactive-accent);
}}

{item} {handle} {{
    display: none;
    position: absolute;
    left: -20px;
    top: 50%;
    transform: translateY(-50%);
    color: var(--text-muted);
}}

{item}.{draggable}:hover {handle} {{
    display: inline-block;
}}
",
        item = ITEM,
        draggable = CLASS_DRAGGABLE,
        dragging = CLASS_DRAGGING,
        drag_over = CLASS_DRAG_OVER,
        cursor = cursor,
        speed = settings.animation_speed,
        handle = handle,
    );

    if settings.indentation_marker {
        let _ = write!(
            css,
            "
{item}.{draggable}.{marker} {{
    border-left: 2px solid var(--interactive-accent-hover);
}}
",
            item = ITEM,
            draggable = CLASS_DRAGGABLE,
            marker = CLASS_INDENTATION_MARKER,
        );
    }

    css
}
