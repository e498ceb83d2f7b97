//! Gesture-complete handling
//!
//! The controller is the synchronous glue between the drag surface and a
//! document: a finished gesture yields a [`TaskMove`], the controller reads
//! the current text, reorders it, writes it back into the source and, when
//! configured, persists it. Callers serialize calls; the controller holds no
//! locks of its own.

use anyhow::Result;
use thiserror::Error;

use crate::domain::{task_sequence, Frontmatter, TaskMove};
use crate::storage::{DocumentSource, PersistenceSink, Settings};
use crate::surface::{DragRegistry, DragSession, ElementId};

#[derive(Debug, Error, PartialEq)]
pub enum ControllerError {
    #[error("Draggable tasklists are disabled for this document (enable_in_preview_mode is off and frontmatter has no 'draggable: true')")]
    Disabled,

    #[error("Task {index} is not decorated ({count} task(s) in document)")]
    NotDecorated { index: usize, count: usize },
}

/// Result of applying a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Indices were out of range or equal; nothing was written
    Unchanged,
    /// The source was updated
    Reordered { persisted: bool },
}

/// Whether decorations are attached after a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    Enabled,
    Disabled,
}

/// Owns the settings, the listener registry and the gesture in progress
#[derive(Debug)]
pub struct Controller {
    settings: Settings,
    registry: DragRegistry,
    session: DragSession,
}

impl Controller {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            registry: DragRegistry::new(),
            session: DragSession::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn registry(&self) -> &DragRegistry {
        &self.registry
    }

    /// Returns true when `text` should get draggable decorations
    pub fn is_enabled_for(&self, text: &str) -> bool {
        self.settings.enable_in_preview_mode || Frontmatter::wants_draggable(text)
    }

    /// Element standing for task `index`
    ///
    /// Elements are numbered in task order by [`Controller::initialize`].
    pub fn element_for(index: usize) -> ElementId {
        ElementId(index as u64)
    }

    /// Re-decorates one element per task; returns how many were decorated
    pub fn initialize(&mut self, text: &str) -> usize {
        self.teardown();

        if !self.is_enabled_for(text) {
            return 0;
        }

        let count = task_sequence(text).len();
        self.registry
            .decorate_all((0..count).map(Self::element_for), &self.settings)
    }

    /// Detaches every decoration and abandons any gesture in progress
    pub fn teardown(&mut self) -> usize {
        self.session.end(&mut self.registry);
        self.registry.teardown().len()
    }

    /// Turns decorations off if any are attached, on otherwise
    ///
    /// For hosts that keep one controller alive across gestures, such as a
    /// rendering view. The CLI holds no decorations between runs, so its
    /// `toggle` command flips `enable_in_preview_mode` and goes through
    /// [`Controller::update_settings`] instead.
    pub fn toggle(&mut self, text: &str) -> ToggleState {
        if self.registry.is_active() {
            self.teardown();
            ToggleState::Disabled
        } else if self.initialize(text) > 0 {
            ToggleState::Enabled
        } else {
            ToggleState::Disabled
        }
    }

    /// Swaps in new settings and re-decorates `text`
    pub fn update_settings(&mut self, settings: Settings, text: &str) -> usize {
        self.settings = settings;
        self.initialize(text)
    }

    /// Starts dragging task `index`
    pub fn pick_up(&mut self, index: usize) -> Result<(), ControllerError> {
        let element = Self::element_for(index);
        if self.session.start(&mut self.registry, element) {
            Ok(())
        } else {
            Err(ControllerError::NotDecorated {
                index,
                count: self.registry.len(),
            })
        }
    }

    /// Completes the gesture on task `index` and applies the resulting move
    pub fn drop_on<S, P>(&mut self, index: usize, source: &mut S, sink: &mut P) -> Result<MoveOutcome>
    where
        S: DocumentSource,
        P: PersistenceSink,
    {
        let element = Self::element_for(index);
        if self.registry.decoration(element).is_none() {
            self.session.end(&mut self.registry);
            return Err(ControllerError::NotDecorated {
                index,
                count: self.registry.len(),
            }
            .into());
        }

        match self.session.drop_on(&mut self.registry, element) {
            Some(mv) => self.apply_move(mv, source, sink),
            None => Ok(MoveOutcome::Unchanged),
        }
    }

    /// Reads, reorders, replaces and optionally persists
    pub fn apply_move<S, P>(&mut self, mv: TaskMove, source: &mut S, sink: &mut P) -> Result<MoveOutcome>
    where
        S: DocumentSource,
        P: PersistenceSink,
    {
        let text = source.text()?;
        if !self.is_enabled_for(&text) {
            return Err(ControllerError::Disabled.into());
        }

        let reordered = mv.apply(&text, &self.settings.reorder_options());

        if reordered == text {
            return Ok(MoveOutcome::Unchanged);
        }

        source.replace(&reordered)?;

        let persisted = if self.settings.save_order_automatically {
            sink.persist(&reordered)?;
            true
        } else {
            false
        };

        self.initialize(&reordered);

        Ok(MoveOutcome::Reordered { persisted })
    }
}
