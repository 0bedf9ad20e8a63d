//! Drag-to-select gesture handling for the capture surface.

use cineguide_models::TargetRect;

/// Minimum committed width in surface pixels. Narrower drags are treated
/// as taps and clear the selection.
pub const MIN_TARGET_WIDTH: f64 = 10.0;

/// Pointer source. Mouse and touch feed the same state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// One pointer sample in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub kind: PointerKind,
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub fn mouse(x: f64, y: f64) -> Self {
        Self {
            kind: PointerKind::Mouse,
            x,
            y,
        }
    }

    pub fn touch(x: f64, y: f64) -> Self {
        Self {
            kind: PointerKind::Touch,
            x,
            y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum GestureState {
    Idle,
    Dragging {
        anchor: (f64, f64),
        current: (f64, f64),
    },
}

/// Box-selection state machine: `Idle -> Dragging (down) -> Idle (up)`.
/// No drag state survives across gestures.
#[derive(Debug, Clone, Copy)]
pub struct SelectionGesture {
    state: GestureState,
}

impl SelectionGesture {
    pub fn new() -> Self {
        Self {
            state: GestureState::Idle,
        }
    }

    /// Anchor a new gesture at the down position.
    pub fn pointer_down(&mut self, sample: PointerSample) {
        self.state = GestureState::Dragging {
            anchor: (sample.x, sample.y),
            current: (sample.x, sample.y),
        };
    }

    /// Advance the live selection. Returns the rectangle spanning the
    /// anchor and the current position, or `None` outside a gesture.
    pub fn pointer_move(&mut self, sample: PointerSample) -> Option<TargetRect> {
        match &mut self.state {
            GestureState::Idle => None,
            GestureState::Dragging { anchor, current } => {
                *current = (sample.x, sample.y);
                Some(TargetRect::from_corners(*anchor, *current))
            }
        }
    }

    /// Finish the gesture. A selection wider than `MIN_TARGET_WIDTH`
    /// commits as the locked target; anything narrower clears to no
    /// target.
    pub fn pointer_up(&mut self) -> Option<TargetRect> {
        let committed = match self.state {
            GestureState::Idle => None,
            GestureState::Dragging { anchor, current } => {
                let rect = TargetRect::from_corners(anchor, current);
                (rect.width > MIN_TARGET_WIDTH).then_some(rect)
            }
        };
        self.state = GestureState::Idle;
        committed
    }

    /// Live selection rectangle while dragging.
    pub fn live_selection(&self) -> Option<TargetRect> {
        match self.state {
            GestureState::Idle => None,
            GestureState::Dragging { anchor, current } => {
                Some(TargetRect::from_corners(anchor, current))
            }
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }
}

impl Default for SelectionGesture {
    fn default() -> Self {
        Self::new()
    }
}
