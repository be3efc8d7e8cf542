// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Motion-event resampling
//!
//! Pointer hardware reports at its own rate (commonly 100–200 Hz) while the
//! compositor presents frames at another (commonly 60–120 Hz). To align the
//! motion stream with the frame cadence, the consumer may ask the engine to
//! append one synthetic sample per frame to the motion event it is about to
//! deliver, with event time `frame_time - RESAMPLE_LATENCY`.
//!
//! When the consumer can peek at the next unconsumed input message of the
//! stream, the engine *interpolates* between the event's latest sample and
//! that future sample. Otherwise it *extrapolates* from the two most recent
//! samples it has seen, clamping the predicted time to a small window beyond
//! the last real sample so stale velocity never projects far into the
//! future.
//!
//! The engine starts cold: until it has ingested two samples from a device
//! it cannot extrapolate, though it can interpolate from the first call
//! onwards. A change of reporting device resets it to cold. Resampling is
//! advisory — whenever a guard fails (inter-sample gap out of bounds,
//! pointer identities that do not line up, a tool that must not be
//! resampled) the engine declines, leaving the event untouched, and reports
//! nothing: the caller cannot observe why, and need not.
//!
//! The engine is single-threaded and non-reentrant; a consumer serving
//! several threads must serialise calls per device.

use std::time::Duration;

use smallvec::SmallVec;

use crate::event::{DeviceId, InputMessage, MotionEvent, Pointer, PointerCoords};

mod history;

use history::{Sample, SampleRing, HISTORY_CAPACITY};

/// Latency subtracted from the frame time to obtain the resample target
///
/// Resampling slightly behind the frame time trades a little latency for
/// having real samples on both sides of the target most of the time.
pub const RESAMPLE_LATENCY: Duration = Duration::from_millis(5);

/// Below this inter-sample gap, resampling is declined
const RESAMPLE_MIN_DELTA: Duration = Duration::from_millis(2);

/// Above this inter-sample gap, extrapolation is declined
const RESAMPLE_MAX_DELTA: Duration = Duration::from_millis(20);

/// Ceiling on how far beyond the last real sample a prediction may land
const RESAMPLE_MAX_PREDICTION: Duration = Duration::from_millis(8);

/// Interface for motion-event resampling strategies
///
/// Implementations must guarantee: if resampling occurs, exactly one sample
/// is appended to the motion event and no other field is modified; if it
/// does not occur, the event is not modified in any way.
pub trait Resampler {
    /// Try to resample `motion_event` for presentation at `frame_time`
    ///
    /// The resample target is `frame_time - RESAMPLE_LATENCY`. Interpolation
    /// is attempted when `future_sample` is provided; extrapolation
    /// otherwise. Either may decline, in which case `motion_event` is left
    /// unmodified. An appended sample never carries an event time earlier
    /// than the event's previous last sample.
    fn resample_motion_event(
        &mut self,
        frame_time: Duration,
        motion_event: &mut MotionEvent,
        future_sample: Option<&InputMessage>,
    );

    /// Latency subtracted from the frame time to obtain the resample target
    ///
    /// Callers size their batching window around this.
    fn resample_latency(&self) -> Duration {
        RESAMPLE_LATENCY
    }
}

/// Linear interpolation/extrapolation over the X and Y axes
///
/// Owns a two-sample rolling history per stream and the identity of the
/// device last seen, nothing else. All remaining axes of a synthetic sample
/// are carried verbatim from the nearest real sample.
#[derive(Clone, Debug, Default)]
pub struct LinearResampler {
    latest_samples: SampleRing,
    previous_device_id: Option<DeviceId>,
}

impl Resampler for LinearResampler {
    fn resample_motion_event(
        &mut self,
        frame_time: Duration,
        motion_event: &mut MotionEvent,
        future_sample: Option<&InputMessage>,
    ) {
        if self
            .previous_device_id
            .is_some_and(|id| id != motion_event.device_id())
        {
            log::trace!(
                "resample_motion_event: device changed to {}, clearing history",
                motion_event.device_id()
            );
            self.latest_samples.clear();
        }
        self.previous_device_id = Some(motion_event.device_id());

        self.update_latest_samples(motion_event);

        let Some(resample_time) = frame_time.checked_sub(RESAMPLE_LATENCY) else {
            log::trace!("resample_motion_event: frame time precedes the resample latency");
            return;
        };

        let sample = match future_sample {
            Some(future) => self.attempt_interpolation(resample_time, future),
            None => self.attempt_extrapolation(resample_time),
        };
        if let Some(sample) = sample {
            let coords: SmallVec<[PointerCoords; 2]> =
                sample.pointers.iter().map(|p| p.coords).collect();
            motion_event.add_sample(sample.event_time, &coords, motion_event.id());
        }
    }
}

impl LinearResampler {
    /// Ingest the motion event's latest samples into the rolling history
    ///
    /// Pushes up to the event's last two samples, oldest first, copying all
    /// pointers verbatim. Runs once per resample call.
    fn update_latest_samples(&mut self, motion_event: &MotionEvent) {
        let num_samples = motion_event.history_size() + 1;
        for i in num_samples.saturating_sub(HISTORY_CAPACITY)..num_samples {
            let pointers = (0..motion_event.pointer_count())
                .map(|p| Pointer {
                    properties: motion_event.pointer_properties(p),
                    coords: *motion_event.sample_pointer_coords(i, p),
                })
                .collect();
            self.latest_samples.push(Sample {
                event_time: motion_event.historical_event_time(i),
                pointers,
            });
        }
    }

    /// Produce a sample between the latest history entry and `future_sample`
    fn attempt_interpolation(
        &self,
        resample_time: Duration,
        future_sample: &InputMessage,
    ) -> Option<Sample> {
        debug_assert!(!self.latest_samples.is_empty());
        let past = self.latest_samples.get(self.latest_samples.len() - 1);

        if !resampleable(&past.pointers, &future_sample.pointers) {
            log::trace!("attempt_interpolation: not resampled, pointers do not match");
            return None;
        }
        let delta = match future_sample.event_time.checked_sub(past.event_time) {
            Some(delta) if delta >= RESAMPLE_MIN_DELTA => delta,
            _ => {
                log::trace!("attempt_interpolation: not resampled, delta is too small");
                return None;
            }
        };
        let Some(offset) = resample_time.checked_sub(past.event_time) else {
            log::trace!(
                "attempt_interpolation: not resampled, target precedes the latest sample"
            );
            return None;
        };

        let alpha = millis_f32(offset) / millis_f32(delta);
        let pointers = past
            .pointers
            .iter()
            .zip(&future_sample.pointers)
            .map(|(past, future)| Pointer {
                properties: past.properties,
                coords: resampled_coords(&past.coords, &future.coords, alpha),
            })
            .collect();

        Some(Sample {
            event_time: resample_time,
            pointers,
        })
    }

    /// Produce a sample beyond the latest history entry
    ///
    /// The produced event time is clamped to
    /// `present + min(delta / 2, RESAMPLE_MAX_PREDICTION)`.
    fn attempt_extrapolation(&self, resample_time: Duration) -> Option<Sample> {
        if self.latest_samples.len() < 2 {
            log::trace!("attempt_extrapolation: not resampled, not enough data");
            return None;
        }
        let past = self.latest_samples.get(self.latest_samples.len() - 2);
        let present = self.latest_samples.get(self.latest_samples.len() - 1);

        if !resampleable(&present.pointers, &past.pointers) {
            log::trace!("attempt_extrapolation: not resampled, pointers do not match");
            return None;
        }
        let delta = match present.event_time.checked_sub(past.event_time) {
            Some(delta) if delta >= RESAMPLE_MIN_DELTA => delta,
            _ => {
                log::trace!("attempt_extrapolation: not resampled, delta is too small");
                return None;
            }
        };
        if delta > RESAMPLE_MAX_DELTA {
            log::trace!("attempt_extrapolation: not resampled, delta is too large");
            return None;
        }
        if resample_time < present.event_time {
            log::trace!(
                "attempt_extrapolation: not resampled, target precedes the latest sample"
            );
            return None;
        }

        // The farthest future time to which we can extrapolate. If the
        // requested target exceeds it, resample there instead.
        let farthest = present.event_time + (delta / 2).min(RESAMPLE_MAX_PREDICTION);
        if resample_time > farthest {
            log::trace!(
                "attempt_extrapolation: target is too far in the future, \
                 adjusting prediction from {:?} to {:?}",
                resample_time - present.event_time,
                farthest - present.event_time
            );
        }
        let resample_time = resample_time.min(farthest);

        let alpha = millis_f32(resample_time - past.event_time) / millis_f32(delta);
        let pointers = present
            .pointers
            .iter()
            .zip(&past.pointers)
            .map(|(present, past)| Pointer {
                properties: present.properties,
                coords: resampled_coords(&past.coords, &present.coords, alpha),
            })
            .collect();

        Some(Sample {
            event_time: resample_time,
            pointers,
        })
    }
}

/// Whether `target`'s pointers may be combined with `auxiliary`'s
///
/// Requires an id and tool-type match at each of `target`'s indices and a
/// resampleable tool throughout. `auxiliary` may carry extra trailing
/// pointers (a later sample may have gained a contact).
fn resampleable(target: &[Pointer], auxiliary: &[Pointer]) -> bool {
    if auxiliary.len() < target.len() {
        return false;
    }
    target.iter().zip(auxiliary).all(|(t, a)| {
        t.properties == a.properties && t.properties.tool_type.is_resampleable()
    })
}

/// Coordinates between `a` and `b`, linear over X and Y
///
/// Axes other than X and Y are carried from the sample nearer in time.
fn resampled_coords(a: &PointerCoords, b: &PointerCoords, alpha: f32) -> PointerCoords {
    let mut coords = if alpha < 1.0 { *a } else { *b };
    coords.is_resampled = true;
    coords.pos = a.pos.lerp(b.pos, alpha);
    coords
}

#[inline]
fn millis_f32(duration: Duration) -> f32 {
    duration.as_secs_f32() * 1_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::ToolType;
    use crate::geom::Vec2;

    fn fingers(ids: &[i32]) -> Vec<Pointer> {
        ids.iter()
            .map(|&id| Pointer::new(id, ToolType::Finger))
            .collect()
    }

    #[test]
    fn resampleable_requires_matching_identity() {
        assert!(resampleable(&fingers(&[0, 1]), &fingers(&[0, 1])));
        assert!(!resampleable(&fingers(&[0, 1]), &fingers(&[1, 0])));
        assert!(!resampleable(&fingers(&[0, 1]), &fingers(&[0, 2])));
    }

    #[test]
    fn resampleable_tolerates_extra_auxiliary_pointers() {
        assert!(resampleable(&fingers(&[0]), &fingers(&[0, 1])));
        assert!(!resampleable(&fingers(&[0, 1]), &fingers(&[0])));
    }

    #[test]
    fn resampleable_requires_matching_tool() {
        let finger = [Pointer::new(0, ToolType::Finger)];
        let stylus = [Pointer::new(0, ToolType::Stylus)];
        assert!(!resampleable(&finger, &stylus));
        assert!(resampleable(&stylus, &stylus));
    }

    #[test]
    fn resampleable_excludes_palm_and_eraser() {
        let palm = [Pointer::new(0, ToolType::Palm)];
        let eraser = [Pointer::new(0, ToolType::Eraser)];
        assert!(!resampleable(&palm, &palm));
        assert!(!resampleable(&eraser, &eraser));
    }

    #[test]
    fn resampled_coords_base_follows_alpha() {
        let a = Pointer::new(0, ToolType::Finger)
            .pos(1.0, 1.0)
            .touch_major(0.5)
            .coords;
        let b = Pointer::new(0, ToolType::Finger)
            .pos(3.0, 3.0)
            .touch_major(0.9)
            .coords;

        let below = resampled_coords(&a, &b, 0.5);
        assert!(below.is_resampled);
        assert_eq!(below.pos, Vec2(2.0, 2.0));
        assert_eq!(below.touch_major, 0.5);

        let above = resampled_coords(&a, &b, 1.5);
        assert_eq!(above.pos, Vec2(4.0, 4.0));
        assert_eq!(above.touch_major, 0.9);
    }
}
