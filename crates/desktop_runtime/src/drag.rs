//! View-local drag state for a single window surface.
//!
//! Position lives here rather than in the registry: a remounted view (restore after minimize,
//! reopen after close) starts again from [`DEFAULT_WINDOW_POSITION`].

use crate::model::{Point, DEFAULT_WINDOW_POSITION};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    /// `offset` is the pointer position relative to the surface's top-left corner at grab time.
    Dragging { offset: Point },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDrag {
    position: Point,
    phase: DragPhase,
}

impl Default for WindowDrag {
    fn default() -> Self {
        Self::at(DEFAULT_WINDOW_POSITION)
    }
}

impl WindowDrag {
    pub fn at(position: Point) -> Self {
        Self {
            position,
            phase: DragPhase::Idle,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Pointer went down on the title bar.
    pub fn begin(&mut self, pointer: Point) {
        self.phase = DragPhase::Dragging {
            offset: pointer.offset_from(self.position),
        };
    }

    /// Pointer moved over the surface. Returns whether the position changed.
    ///
    /// The result is not clamped to the viewport.
    pub fn track(&mut self, pointer: Point) -> bool {
        let DragPhase::Dragging { offset } = self.phase else {
            return false;
        };
        let next = pointer.offset_from(offset);
        let moved = next != self.position;
        self.position = next;
        moved
    }

    /// Pointer released or left the surface. Returns whether a drag was in progress.
    pub fn end(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.phase = DragPhase::Idle;
        was_dragging
    }
}
