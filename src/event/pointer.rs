// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Event handling: pointer identity and coordinates

use crate::geom::Vec2;

/// Identifies an input device within the host's input subsystem
pub type DeviceId = i32;

/// Identifies one contact or cursor within a gesture
///
/// Stable for the lifetime of the gesture: a pointer keeps its id across
/// samples even when other contacts are added or removed.
pub type PointerId = i32;

/// The tool producing a pointer's coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ToolType {
    #[default]
    Unknown,
    Finger,
    Stylus,
    Mouse,
    Eraser,
    Palm,
}

impl ToolType {
    /// Whether samples from this tool may be combined into synthetic samples
    ///
    /// True for finger, mouse, stylus and unknown tools. Coordinates of all
    /// other tools must be delivered exactly as reported.
    #[inline]
    pub fn is_resampleable(self) -> bool {
        matches!(
            self,
            ToolType::Unknown | ToolType::Finger | ToolType::Stylus | ToolType::Mouse
        )
    }
}

/// Per-gesture constant attributes of one pointer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerProperties {
    pub id: PointerId,
    pub tool_type: ToolType,
}

/// Axis values of one pointer at one sample time
///
/// `pos` holds the X and Y axes; the remaining axes describe the contact
/// shape and force as reported by the device. `is_resampled` marks
/// coordinates synthesised by the resampling engine; device-reported
/// coordinates always arrive with `is_resampled == false`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerCoords {
    pub pos: Vec2,
    pub touch_major: f32,
    pub touch_minor: f32,
    pub pressure: f32,
    pub orientation: f32,
    pub is_resampled: bool,
}

/// One pointer's properties and coordinates, as carried by a sample
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pointer {
    pub properties: PointerProperties,
    pub coords: PointerCoords,
}

impl Pointer {
    /// Construct with the given identity and zeroed coordinates
    #[inline]
    pub fn new(id: PointerId, tool_type: ToolType) -> Self {
        Pointer {
            properties: PointerProperties { id, tool_type },
            coords: PointerCoords::default(),
        }
    }

    /// Set the position (axes X and Y)
    #[inline]
    #[must_use]
    pub fn pos(mut self, x: f32, y: f32) -> Self {
        self.coords.pos = Vec2(x, y);
        self
    }

    /// Set the major axis of the contact ellipse
    #[inline]
    #[must_use]
    pub fn touch_major(mut self, value: f32) -> Self {
        self.coords.touch_major = value;
        self
    }

    /// Set the contact pressure
    #[inline]
    #[must_use]
    pub fn pressure(mut self, value: f32) -> Self {
        self.coords.pressure = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resampleable_tool_types() {
        assert!(ToolType::Unknown.is_resampleable());
        assert!(ToolType::Finger.is_resampleable());
        assert!(ToolType::Stylus.is_resampleable());
        assert!(ToolType::Mouse.is_resampleable());
        assert!(!ToolType::Eraser.is_resampleable());
        assert!(!ToolType::Palm.is_resampleable());
    }

    #[test]
    fn pointer_setters() {
        let pointer = Pointer::new(3, ToolType::Stylus)
            .pos(1.5, -2.0)
            .pressure(0.25);
        assert_eq!(pointer.properties.id, 3);
        assert_eq!(pointer.properties.tool_type, ToolType::Stylus);
        assert_eq!(pointer.coords.pos, Vec2(1.5, -2.0));
        assert_eq!(pointer.coords.pressure, 0.25);
        assert!(!pointer.coords.is_resampled);
    }
}
