// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Event handling: motion events

use std::time::Duration;

use smallvec::SmallVec;

use super::{DeviceId, Pointer, PointerCoords, PointerProperties};

bitflags! {
    /// Input source class mask
    ///
    /// A device may belong to several classes at once (e.g. a stylus device
    /// reports both `POINTER` and `POSITION`).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Source: u32 {
        const BUTTON = 1 << 0;
        const POINTER = 1 << 1;
        const NAVIGATION = 1 << 2;
        const POSITION = 1 << 3;
        const JOYSTICK = 1 << 4;
    }
}

bitflags! {
    /// Per-event flags
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MotionFlags: u32 {
        /// The gesture was cancelled; coordinates must not trigger actions
        const CANCELED = 1 << 0;
        /// The event may have been injected or altered in transit
        const TAINTED = 1 << 1;
    }
}

/// What a motion event reports about its pointers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// First pointer of a gesture went down
    Down,
    /// One or more pointers moved
    Move,
    /// Last pointer of a gesture went up
    Up,
    /// An additional pointer went down mid-gesture
    PointerDown,
    /// A non-final pointer went up mid-gesture
    PointerUp,
    /// The cursor moved with no pointer down
    HoverMove,
    /// The gesture was aborted
    Cancel,
}

/// Coordinates of all pointers at one moment in time
#[derive(Clone, Debug)]
struct MotionSample {
    event_time: Duration,
    coords: SmallVec<[PointerCoords; 2]>,
}

/// A device-scoped batch of pointer motion
///
/// Contains at least one sample; earlier ("historical") samples precede the
/// current sample in time. All samples share the event's pointer count and
/// per-index [`PointerProperties`]. Event times are durations on the same
/// monotonic clock as the consumer's frame clock.
#[derive(Clone, Debug)]
pub struct MotionEvent {
    id: u32,
    device_id: DeviceId,
    source: Source,
    action: Action,
    flags: MotionFlags,
    down_time: Duration,
    properties: SmallVec<[PointerProperties; 2]>,
    samples: SmallVec<[MotionSample; 2]>,
}

impl MotionEvent {
    /// Start building an event (see [`MotionEventBuilder`])
    #[inline]
    pub fn builder(action: Action, source: Source) -> MotionEventBuilder {
        MotionEventBuilder {
            action,
            source,
            device_id: 0,
            down_time: Duration::ZERO,
            event_time: Duration::ZERO,
            pointers: SmallVec::new(),
        }
    }

    /// Identifier of this event within its input stream
    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// The device this event's pointers belong to
    #[inline]
    pub fn device_id(&self) -> DeviceId {
        self.device_id
    }

    /// Source classes of the reporting device
    #[inline]
    pub fn source(&self) -> Source {
        self.source
    }

    #[inline]
    pub fn action(&self) -> Action {
        self.action
    }

    #[inline]
    pub fn flags(&self) -> MotionFlags {
        self.flags
    }

    /// Time the first pointer of the gesture went down
    #[inline]
    pub fn down_time(&self) -> Duration {
        self.down_time
    }

    /// Number of pointers; identical for every sample
    #[inline]
    pub fn pointer_count(&self) -> usize {
        self.properties.len()
    }

    /// Properties of the pointer at `index`
    ///
    /// The index is a position in the event's pointer vector, not a
    /// [`PointerId`](super::PointerId).
    #[inline]
    pub fn pointer_properties(&self, index: usize) -> PointerProperties {
        self.properties[index]
    }

    /// Number of historical samples (the current sample is not counted)
    #[inline]
    pub fn history_size(&self) -> usize {
        self.samples.len() - 1
    }

    /// Event time of sample `index`
    ///
    /// Valid for `index <= history_size()`; the last index addresses the
    /// current sample.
    #[inline]
    pub fn historical_event_time(&self, index: usize) -> Duration {
        self.samples[index].event_time
    }

    /// Event time of the current sample
    #[inline]
    pub fn event_time(&self) -> Duration {
        self.samples[self.samples.len() - 1].event_time
    }

    /// Coordinates of pointer `pointer` at sample `sample`
    #[inline]
    pub fn sample_pointer_coords(&self, sample: usize, pointer: usize) -> &PointerCoords {
        &self.samples[sample].coords[pointer]
    }

    /// Coordinates of pointer `pointer` at the current sample
    #[inline]
    pub fn pointer_coords(&self, pointer: usize) -> &PointerCoords {
        self.sample_pointer_coords(self.samples.len() - 1, pointer)
    }

    /// Append a new current sample
    ///
    /// `event_id` replaces the event's id (pass [`MotionEvent::id`] to keep
    /// it unchanged).
    ///
    /// # Panics
    ///
    /// Panics if `coords.len()` differs from [`MotionEvent::pointer_count`].
    pub fn add_sample(&mut self, event_time: Duration, coords: &[PointerCoords], event_id: u32) {
        assert_eq!(coords.len(), self.pointer_count());
        debug_assert!(event_time >= self.event_time());
        self.id = event_id;
        self.samples.push(MotionSample {
            event_time,
            coords: coords.iter().copied().collect(),
        });
    }
}

/// Builder for [`MotionEvent`]
///
/// Conclude by calling [`Self::build`]. The configured `event_time` and
/// pointers form the event's first sample; append further samples with
/// [`MotionEvent::add_sample`].
#[must_use]
pub struct MotionEventBuilder {
    action: Action,
    source: Source,
    device_id: DeviceId,
    down_time: Duration,
    event_time: Duration,
    pointers: SmallVec<[Pointer; 2]>,
}

impl MotionEventBuilder {
    /// Set the device id (default: 0)
    #[inline]
    pub fn device_id(mut self, device_id: DeviceId) -> Self {
        self.device_id = device_id;
        self
    }

    /// Set the gesture's down time (default: zero)
    #[inline]
    pub fn down_time(mut self, down_time: Duration) -> Self {
        self.down_time = down_time;
        self
    }

    /// Set the event time of the first sample (default: zero)
    #[inline]
    pub fn event_time(mut self, event_time: Duration) -> Self {
        self.event_time = event_time;
        self
    }

    /// Add one pointer
    #[inline]
    pub fn pointer(mut self, pointer: Pointer) -> Self {
        self.pointers.push(pointer);
        self
    }

    /// Construct the event
    ///
    /// # Panics
    ///
    /// Panics if no pointer was added.
    pub fn build(self) -> MotionEvent {
        assert!(!self.pointers.is_empty());
        let properties = self.pointers.iter().map(|p| p.properties).collect();
        let coords = self.pointers.iter().map(|p| p.coords).collect();
        MotionEvent {
            id: 0,
            device_id: self.device_id,
            source: self.source,
            action: self.action,
            flags: MotionFlags::default(),
            down_time: self.down_time,
            properties,
            samples: smallvec::smallvec![MotionSample {
                event_time: self.event_time,
                coords,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::ToolType;

    fn two_finger_event() -> MotionEvent {
        MotionEvent::builder(Action::Move, Source::POINTER)
            .device_id(4)
            .event_time(Duration::from_millis(10))
            .pointer(Pointer::new(0, ToolType::Finger).pos(1.0, 2.0))
            .pointer(Pointer::new(1, ToolType::Finger).pos(3.0, 4.0))
            .build()
    }

    #[test]
    fn builder_populates_first_sample() {
        let event = two_finger_event();
        assert_eq!(event.device_id(), 4);
        assert_eq!(event.pointer_count(), 2);
        assert_eq!(event.history_size(), 0);
        assert_eq!(event.event_time(), Duration::from_millis(10));
        assert_eq!(event.pointer_properties(1).id, 1);
        assert_eq!(event.pointer_coords(0).pos, crate::geom::Vec2(1.0, 2.0));
    }

    #[test]
    fn add_sample_extends_history() {
        let mut event = two_finger_event();
        let coords = [
            *event.pointer_coords(0),
            *event.pointer_coords(1),
        ];
        event.add_sample(Duration::from_millis(15), &coords, event.id());

        assert_eq!(event.history_size(), 1);
        assert_eq!(
            event.historical_event_time(0),
            Duration::from_millis(10)
        );
        assert_eq!(event.event_time(), Duration::from_millis(15));
        assert_eq!(event.sample_pointer_coords(1, 0), &coords[0]);
    }

    #[test]
    #[should_panic]
    fn add_sample_rejects_wrong_pointer_count() {
        let mut event = two_finger_event();
        let coords = [*event.pointer_coords(0)];
        event.add_sample(Duration::from_millis(15), &coords, event.id());
    }
}
