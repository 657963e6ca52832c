//! Drag Session State Machine
//!
//! Pure transitions for a single pointer-drag session, independent of the DOM.

/// One drag session.
///
/// `Pressed` is the armed state between mouse-down and crossing the movement
/// threshold; nothing is being dragged yet and a release there is a click.
#[derive(Clone, Debug, PartialEq)]
pub enum DragState<P, T> {
    Idle,
    Pressed {
        payload: P,
        origin: (i32, i32),
    },
    Dragging {
        payload: P,
        over: Option<T>,
    },
}

impl<P, T> Default for DragState<P, T> {
    fn default() -> Self {
        DragState::Idle
    }
}

impl<P, T: Copy + PartialEq> DragState<P, T> {
    /// Arm a drag. Ignored unless idle, so only one session exists at a time.
    pub fn press(&mut self, payload: P, x: i32, y: i32) {
        if matches!(self, DragState::Idle) {
            *self = DragState::Pressed {
                payload,
                origin: (x, y),
            };
        }
    }

    /// Feed a pointer position. Returns true when this move starts the drag.
    pub fn pointer_moved(&mut self, x: i32, y: i32, threshold: i32) -> bool {
        let crossed = match self {
            DragState::Pressed { origin, .. } => {
                (x - origin.0).abs() > threshold || (y - origin.1).abs() > threshold
            }
            _ => false,
        };
        if !crossed {
            return false;
        }
        if let DragState::Pressed { payload, .. } = std::mem::replace(self, DragState::Idle) {
            *self = DragState::Dragging { payload, over: None };
        }
        true
    }

    /// Pointer entered a registered drop target.
    pub fn enter(&mut self, target: T) {
        if let DragState::Dragging { over, .. } = self {
            *over = Some(target);
        }
    }

    /// Pointer left a drop target. A stale leave for another target is ignored.
    pub fn leave(&mut self, target: T) {
        if let DragState::Dragging { over, .. } = self {
            if *over == Some(target) {
                *over = None;
            }
        }
    }

    /// Pointer released. Always returns to idle; yields the drop only when a
    /// drag was active over a target.
    pub fn release(&mut self) -> Option<(P, T)> {
        match std::mem::replace(self, DragState::Idle) {
            DragState::Dragging {
                payload,
                over: Some(target),
            } => Some((payload, target)),
            _ => None,
        }
    }

    /// Discard the session with no drop.
    pub fn cancel(&mut self) {
        *self = DragState::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Payload of an active drag (not of a merely pressed one).
    pub fn dragged(&self) -> Option<&P> {
        match self {
            DragState::Dragging { payload, .. } => Some(payload),
            _ => None,
        }
    }

    pub fn is_over(&self, target: T) -> bool {
        matches!(self, DragState::Dragging { over: Some(t), .. } if *t == target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Zone {
        A,
        B,
    }

    type State = DragState<u32, Zone>;

    fn dragging(payload: u32) -> State {
        let mut s = State::Idle;
        s.press(payload, 0, 0);
        assert!(s.pointer_moved(20, 0, 8));
        s
    }

    #[test]
    fn test_small_move_stays_pressed() {
        let mut s = State::Idle;
        s.press(7, 100, 100);
        assert!(!s.pointer_moved(105, 97, 8));
        assert!(!s.is_dragging());
        // Release before the threshold is a click, not a drop
        assert_eq!(s.release(), None);
        assert_eq!(s, State::Idle);
    }

    #[test]
    fn test_threshold_starts_drag_once() {
        let mut s = State::Idle;
        s.press(7, 0, 0);
        assert!(s.pointer_moved(0, 9, 8));
        assert!(!s.pointer_moved(0, 40, 8));
        assert_eq!(s.dragged(), Some(&7));
    }

    #[test]
    fn test_drop_on_target() {
        let mut s = dragging(3);
        s.enter(Zone::A);
        assert!(s.is_over(Zone::A));
        assert_eq!(s.release(), Some((3, Zone::A)));
        assert_eq!(s, State::Idle);
    }

    #[test]
    fn test_drop_on_nothing() {
        let mut s = dragging(3);
        s.enter(Zone::A);
        s.leave(Zone::A);
        assert_eq!(s.release(), None);
        assert_eq!(s, State::Idle);
    }

    #[test]
    fn test_stale_leave_keeps_new_target() {
        // mouseenter on B can arrive before mouseleave on A
        let mut s = dragging(3);
        s.enter(Zone::A);
        s.enter(Zone::B);
        s.leave(Zone::A);
        assert!(s.is_over(Zone::B));
    }

    #[test]
    fn test_cancel_discards_payload() {
        let mut s = dragging(3);
        s.enter(Zone::B);
        s.cancel();
        assert_eq!(s.release(), None);
    }

    #[test]
    fn test_press_while_active_is_ignored() {
        let mut s = dragging(3);
        s.press(9, 0, 0);
        assert_eq!(s.dragged(), Some(&3));
    }

    #[test]
    fn test_enter_without_drag_is_ignored() {
        let mut s = State::Idle;
        s.enter(Zone::A);
        assert!(!s.is_over(Zone::A));
        s.press(1, 0, 0);
        s.enter(Zone::A);
        assert!(!s.is_over(Zone::A));
    }
}
