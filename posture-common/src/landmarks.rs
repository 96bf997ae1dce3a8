//! Body landmarks and name-indexed lookup
//!
//! Landmarks arrive from an external pose-estimation provider as a flat
//! sequence of named points. Rules look them up by anatomical name, so a
//! partial detection simply leaves names absent.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{Error, Result};

/// Anatomical vocabulary produced by the 33-point pose model
pub const ANATOMICAL_NAMES: &[&str] = &[
    "nose",
    "left_eye_inner",
    "left_eye",
    "left_eye_outer",
    "right_eye_inner",
    "right_eye",
    "right_eye_outer",
    "left_ear",
    "right_ear",
    "mouth_left",
    "mouth_right",
    "left_shoulder",
    "right_shoulder",
    "left_elbow",
    "right_elbow",
    "left_wrist",
    "right_wrist",
    "left_pinky",
    "right_pinky",
    "left_index",
    "right_index",
    "left_thumb",
    "right_thumb",
    "left_hip",
    "right_hip",
    "left_knee",
    "right_knee",
    "left_ankle",
    "right_ankle",
    "left_heel",
    "right_heel",
    "left_foot_index",
    "right_foot_index",
];

/// Landmark names referenced by the rule batteries
pub mod names {
    pub const NOSE: &str = "nose";
    pub const LEFT_SHOULDER: &str = "left_shoulder";
    pub const RIGHT_SHOULDER: &str = "right_shoulder";
    pub const LEFT_HIP: &str = "left_hip";
    pub const LEFT_KNEE: &str = "left_knee";
    pub const RIGHT_KNEE: &str = "right_knee";
    pub const LEFT_ANKLE: &str = "left_ankle";
    pub const RIGHT_ANKLE: &str = "right_ankle";
}

/// Returns true if `name` belongs to the anatomical vocabulary
pub fn is_known_name(name: &str) -> bool {
    ANATOMICAL_NAMES.contains(&name)
}

/// A named 2D point in image space with detection confidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub name: String,
    /// Pixel x coordinate (grows to the right)
    pub x: f64,
    /// Pixel y coordinate (grows downward)
    pub y: f64,
    /// Detection confidence in [0, 1]
    pub confidence: f64,
}

impl Landmark {
    pub fn new(name: impl Into<String>, x: f64, y: f64, confidence: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            confidence,
        }
    }

    /// Convert a normalized detector point ([0, 1] on both axes) to pixels
    ///
    /// The pose provider reports coordinates relative to the frame size;
    /// rule thresholds are expressed in pixels.
    pub fn scaled(&self, width: f64, height: f64) -> Self {
        Self {
            name: self.name.clone(),
            x: self.x * width,
            y: self.y * height,
            confidence: self.confidence,
        }
    }
}

/// Scale a whole normalized landmark sequence to a frame of `width` x `height` pixels
pub fn scale_to_frame(landmarks: &[Landmark], width: f64, height: f64) -> Result<Vec<Landmark>> {
    if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
        return Err(Error::InvalidInput(format!(
            "frame size must be positive, got {}x{}",
            width, height
        )));
    }
    landmarks
        .iter()
        .map(|lm| {
            let scaled = lm.scaled(width, height);
            if scaled.x.is_finite() && scaled.y.is_finite() {
                Ok(scaled)
            } else {
                Err(Error::InvalidInput(format!(
                    "landmark '{}' at ({}, {}) is not a finite point in a {}x{} frame",
                    lm.name, lm.x, lm.y, width, height
                )))
            }
        })
        .collect()
}

/// Reject landmark names outside the anatomical vocabulary
pub fn check_names(landmarks: &[Landmark]) -> Result<()> {
    match landmarks.iter().find(|lm| !is_known_name(&lm.name)) {
        Some(lm) => Err(Error::InvalidInput(format!(
            "unknown landmark name '{}'",
            lm.name
        ))),
        None => Ok(()),
    }
}

/// Name-indexed view over one request's landmarks
///
/// Built once per analysis. When a name repeats, the later landmark
/// replaces the earlier one.
#[derive(Debug, Clone, Default)]
pub struct LandmarkSet<'a> {
    by_name: HashMap<&'a str, &'a Landmark>,
}

impl<'a> LandmarkSet<'a> {
    pub fn new(landmarks: &'a [Landmark]) -> Self {
        let by_name = landmarks
            .iter()
            .map(|lm| (lm.name.as_str(), lm))
            .collect();
        Self { by_name }
    }

    pub fn get(&self, name: &str) -> Option<&'a Landmark> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
