// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Pointer event model
//!
//! Input hardware reports each contact or cursor as a *pointer*: a stable
//! id plus a [`ToolType`], contributing axis values ([`PointerCoords`]) at
//! each report. A [`MotionEvent`] batches one or more such reports
//! (*samples*) for a single device: the last sample is current, earlier
//! ones are historical, and all share the event's pointer count and
//! per-index identity. An [`InputMessage`] is one not-yet-consumed report
//! peeked from the transport.
//!
//! These are the collaborator types of the resampling engine in
//! [`crate::resample`]: the engine reads samples from both and appends at
//! most one synthetic sample per event.

mod message;
mod motion;
mod pointer;

pub use message::InputMessage;
pub use motion::{Action, MotionEvent, MotionEventBuilder, MotionFlags, Source};
pub use pointer::{DeviceId, Pointer, PointerCoords, PointerId, PointerProperties, ToolType};
