//! Raw input events delivered by the host.

use crate::geom::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FingerStatus {
    Down,
    Motion,
    Up,
}

/// A device-level event, as reported by the host input layer.
///
/// `time` is a monotonic timestamp in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeviceEvent {
    Finger {
        id: i32,
        status: FingerStatus,
        position: Point,
        time: f64,
    },
}
