//! Gesture recognition.
//!
//! [`GestureDetector`] folds raw finger contacts into taps and horizontal
//! drags. A drag becomes active once the contact travels beyond the slop
//! distance and keeps reporting until the finger lifts. A second finger
//! touching down preempts whatever gesture was forming: an active drag is
//! cancelled and none of the involved contacts can resolve to a tap anymore.

use crate::geom::Point;
use crate::input::{DeviceEvent, FingerStatus};
use fxhash::FxHashMap;

/// Maximum travel, in device-independent pixels, below which a contact still
/// counts as a tap.
pub const DEFAULT_TAP_SLOP: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Tap(Point),
    DragStart { start: Point },
    DragMove { start: Point, current: Point },
    DragEnd { start: Point, end: Point },
    DragCancel,
}

#[derive(Debug, Clone, Copy)]
struct Contact {
    start: Point,
    poisoned: bool,
}

#[derive(Debug)]
pub struct GestureDetector {
    slop: u32,
    contacts: FxHashMap<i32, Contact>,
    drag: Option<i32>,
}

impl GestureDetector {
    pub fn new(slop: u32) -> GestureDetector {
        GestureDetector {
            slop,
            contacts: FxHashMap::default(),
            drag: None,
        }
    }

    /// Feeds one device event and returns the gestures it resolved to.
    pub fn feed(&mut self, evt: &DeviceEvent) -> Vec<GestureEvent> {
        let DeviceEvent::Finger {
            id,
            status,
            position,
            ..
        } = *evt;

        match status {
            FingerStatus::Down => self.on_down(id, position),
            FingerStatus::Motion => self.on_motion(id, position),
            FingerStatus::Up => self.on_up(id, position),
        }
    }

    fn on_down(&mut self, id: i32, position: Point) -> Vec<GestureEvent> {
        let mut out = Vec::new();

        // Preemption: a second contact claims the touch sequence.
        if !self.contacts.is_empty() {
            if self.drag.take().is_some() {
                tracing::trace!(finger = id, "drag preempted by second contact");
                out.push(GestureEvent::DragCancel);
            }

            for contact in self.contacts.values_mut() {
                contact.poisoned = true;
            }
        }

        let poisoned = !self.contacts.is_empty();
        self.contacts.insert(
            id,
            Contact {
                start: position,
                poisoned,
            },
        );

        out
    }

    fn on_motion(&mut self, id: i32, position: Point) -> Vec<GestureEvent> {
        if self.drag == Some(id) {
            let start = self.contacts[&id].start;
            return vec![GestureEvent::DragMove {
                start,
                current: position,
            }];
        }

        let Some(contact) = self.contacts.get(&id) else {
            return Vec::new();
        };

        if contact.poisoned || self.drag.is_some() || contact.start.dist2(position) <= self.slop {
            return Vec::new();
        }

        let start = contact.start;
        self.drag = Some(id);
        tracing::trace!(finger = id, ?start, "drag admitted");

        vec![
            GestureEvent::DragStart { start },
            GestureEvent::DragMove {
                start,
                current: position,
            },
        ]
    }

    fn on_up(&mut self, id: i32, position: Point) -> Vec<GestureEvent> {
        let Some(contact) = self.contacts.remove(&id) else {
            return Vec::new();
        };

        if self.drag == Some(id) {
            self.drag = None;
            return vec![GestureEvent::DragEnd {
                start: contact.start,
                end: position,
            }];
        }

        if !contact.poisoned && contact.start.dist2(position) <= self.slop {
            return vec![GestureEvent::Tap(position)];
        }

        Vec::new()
    }
}

impl Default for GestureDetector {
    fn default() -> Self {
        GestureDetector::new(DEFAULT_TAP_SLOP)
    }
}
