// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Pointer motion-event resampling
//!
//! Raw pointer samples arrive from hardware at the input-reporting rate
//! while the compositor renders frames at its own rate. This crate
//! synthesises, on demand for each frame, one extra sample per
//! [`MotionEvent`](event::MotionEvent) whose event time matches a
//! frame-relative target, so that the motion stream delivered to an
//! application appears temporally aligned with the frame cadence.
//!
//! The entry point is [`Resampler::resample_motion_event`], implemented by
//! [`LinearResampler`]; see the [`resample`] module documentation for the
//! interpolation/extrapolation rules and their guards.
//!
//! ```
//! use std::time::Duration;
//! use motion_resample::event::{Action, InputMessage, MotionEvent, Pointer, Source, ToolType};
//! use motion_resample::{LinearResampler, Resampler};
//!
//! let mut event = MotionEvent::builder(Action::Move, Source::POINTER)
//!     .event_time(Duration::from_millis(10))
//!     .pointer(Pointer::new(0, ToolType::Finger).pos(1.0, 2.0))
//!     .build();
//! let next = InputMessage::new(
//!     Duration::from_millis(15),
//!     [Pointer::new(0, ToolType::Finger).pos(2.0, 4.0)],
//! );
//!
//! let mut resampler = LinearResampler::default();
//! resampler.resample_motion_event(Duration::from_millis(16), &mut event, Some(&next));
//!
//! // One synthetic sample was appended at 16ms - 5ms = 11ms.
//! assert_eq!(event.history_size(), 1);
//! assert_eq!(event.event_time(), Duration::from_millis(11));
//! assert!(event.pointer_coords(0).is_resampled);
//! ```

#[macro_use]
extern crate bitflags;

pub mod event;
pub mod geom;
pub mod resample;

pub use resample::{LinearResampler, Resampler, RESAMPLE_LATENCY};
