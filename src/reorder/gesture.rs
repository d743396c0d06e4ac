//! Gesture normalizer - raw pointer events to an ordered sample stream
//!
//! The browser delivers pointerdown/move/up/cancel for every active
//! pointer. A drag only cares about one of them, and only after the press
//! has armed. The normalizer binds to the pointer that started the press,
//! drops everything else, and rewrites the raw phases so the stream it
//! emits always reads `Down, Move*, (Up | Cancelled)`.

use super::geometry::Point;

/// Browser pointer id (`PointerEvent.pointerId`).
pub type PointerId = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Down,
    Move,
    Up,
    Cancelled,
}

/// One recorded pointer position. `at` is milliseconds on the page clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub phase: Phase,
    pub point: Point,
    pub at: f64,
}

impl PointerSample {
    pub const fn new(phase: Phase, point: Point, at: f64) -> Self {
        Self { phase, point, at }
    }
}

/// Pointer event as the gesture source reports it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawPointer {
    Down { id: PointerId, point: Point, at: f64 },
    Move { id: PointerId, point: Point, at: f64 },
    Up { id: PointerId, point: Point, at: f64 },
    /// pointercancel, or the pointer leaving the list surface
    Cancel { id: PointerId, at: f64 },
}

impl RawPointer {
    pub fn id(&self) -> PointerId {
        match *self {
            Self::Down { id, .. } | Self::Move { id, .. } | Self::Up { id, .. } | Self::Cancel { id, .. } => id,
        }
    }

    pub fn at(&self) -> f64 {
        match *self {
            Self::Down { at, .. } | Self::Move { at, .. } | Self::Up { at, .. } | Self::Cancel { at, .. } => at,
        }
    }

    pub fn point(&self) -> Option<Point> {
        match *self {
            Self::Down { point, .. } | Self::Move { point, .. } | Self::Up { point, .. } => Some(point),
            Self::Cancel { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    /// No pointer bound.
    Closed,
    /// Bound to a pressed pointer, waiting for the press to arm.
    Captured(PointerId),
    /// Armed; the next event from the pointer opens the stream.
    Open(PointerId),
    /// `Down` emitted; moves flow until a terminal phase.
    Streaming(PointerId),
}

#[derive(Debug, Clone)]
pub struct GestureNormalizer {
    stream: Stream,
    last: Point,
}

impl Default for GestureNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureNormalizer {
    pub fn new() -> Self {
        Self {
            stream: Stream::Closed,
            last: Point::ORIGIN,
        }
    }

    /// Bind to the pointer that started a press. Ignored if already bound.
    pub fn capture(&mut self, id: PointerId, point: Point) {
        if self.stream == Stream::Closed {
            self.stream = Stream::Captured(id);
            self.last = point;
        }
    }

    /// The press armed: start emitting samples for the captured pointer.
    pub fn open(&mut self) {
        if let Stream::Captured(id) = self.stream {
            self.stream = Stream::Open(id);
        }
    }

    pub fn reset(&mut self) {
        self.stream = Stream::Closed;
    }

    /// Pointer id currently bound, if any.
    pub fn primary(&self) -> Option<PointerId> {
        match self.stream {
            Stream::Closed => None,
            Stream::Captured(id) | Stream::Open(id) | Stream::Streaming(id) => Some(id),
        }
    }

    pub fn is_streaming(&self) -> bool {
        matches!(self.stream, Stream::Streaming(_))
    }

    /// Convert one raw event. Returns `None` for events from other
    /// pointers, events before the stream is open, and out-of-order
    /// phases such as a second down.
    pub fn normalize(&mut self, raw: &RawPointer) -> Option<PointerSample> {
        if self.primary() != Some(raw.id()) {
            return None;
        }
        if let Some(point) = raw.point() {
            self.last = point;
        }
        let at = raw.at();
        let point = self.last;

        match (self.stream, raw) {
            (Stream::Captured(_), RawPointer::Up { .. } | RawPointer::Cancel { .. }) => {
                self.stream = Stream::Closed;
                None
            }
            (Stream::Captured(_), _) => None,
            (Stream::Open(id), RawPointer::Down { .. } | RawPointer::Move { .. }) => {
                self.stream = Stream::Streaming(id);
                Some(PointerSample::new(Phase::Down, point, at))
            }
            (Stream::Streaming(_), RawPointer::Move { .. }) => {
                Some(PointerSample::new(Phase::Move, point, at))
            }
            (Stream::Streaming(_), RawPointer::Down { .. }) => None,
            (Stream::Open(_) | Stream::Streaming(_), RawPointer::Up { .. }) => {
                self.stream = Stream::Closed;
                Some(PointerSample::new(Phase::Up, point, at))
            }
            (Stream::Open(_) | Stream::Streaming(_), RawPointer::Cancel { .. }) => {
                self.stream = Stream::Closed;
                Some(PointerSample::new(Phase::Cancelled, point, at))
            }
            (Stream::Closed, _) => None,
        }
    }
}
