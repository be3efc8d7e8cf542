// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Event handling: input messages

use std::time::Duration;

use smallvec::SmallVec;

use super::{DeviceId, Pointer, Source};

/// One unconsumed motion message from the input transport
///
/// The consumer may peek at the next message of its stream without consuming
/// it; the resampling engine uses such a peek as the "future sample" when
/// interpolating. Only motion-carrying messages reach the engine; other
/// message kinds are the transport's concern.
#[derive(Clone, Debug)]
pub struct InputMessage {
    pub event_time: Duration,
    pub device_id: DeviceId,
    pub source: Source,
    pub pointers: SmallVec<[Pointer; 2]>,
}

impl InputMessage {
    /// Construct a pointer-class motion message on device 0
    pub fn new(event_time: Duration, pointers: impl IntoIterator<Item = Pointer>) -> Self {
        InputMessage {
            event_time,
            device_id: 0,
            source: Source::POINTER,
            pointers: pointers.into_iter().collect(),
        }
    }

    /// Number of pointers carried by this message
    #[inline]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }
}
