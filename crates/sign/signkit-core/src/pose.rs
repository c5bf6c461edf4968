//! Pose targets and batches.
//!
//! A target names one scalar channel of one joint (`joint.property.axis`) and the
//! boundary it should be driven to. A batch groups the targets of one sign; all of
//! them move concurrently and each one leaves the batch once it hits its limit.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Property {
    Rotation,
    Position,
    Scale,
}

impl Property {
    pub fn as_str(self) -> &'static str {
        match self {
            Property::Rotation => "rotation",
            Property::Position => "position",
            Property::Scale => "scale",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

/// Which way a target moves. The sequencer trusts the author here and never
/// infers direction from the current value.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "+")]
    Increase,
    #[serde(rename = "-")]
    Decrease,
}

impl Direction {
    /// Next value one `step` toward `limit`, clamped, or `None` once the
    /// boundary is reached (or already passed the wrong way).
    #[inline]
    pub fn advance(self, current: f32, limit: f32, step: f32) -> Option<f32> {
        match self {
            Direction::Increase if current < limit => Some((current + step).min(limit)),
            Direction::Decrease if current > limit => Some((current - step).max(limit)),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PoseTarget {
    pub joint: String,
    pub property: Property,
    pub axis: Axis,
    pub limit: f32,
    pub direction: Direction,
}

impl PoseTarget {
    pub fn new(
        joint: impl Into<String>,
        property: Property,
        axis: Axis,
        limit: f32,
        direction: Direction,
    ) -> Self {
        Self {
            joint: joint.into(),
            property,
            axis,
            limit,
            direction,
        }
    }

    /// Shorthand for the common case; sign data is almost entirely rotations.
    pub fn rotation(joint: impl Into<String>, axis: Axis, limit: f32, direction: Direction) -> Self {
        Self::new(joint, Property::Rotation, axis, limit, direction)
    }
}

/// All targets of one sign. `label` is the token the batch was built for
/// (`None` for the rest pose).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseBatch {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub targets: Vec<PoseTarget>,
}

impl PoseBatch {
    pub fn new(label: Option<String>, targets: Vec<PoseTarget>) -> Self {
        Self { label, targets }
    }

    pub fn labeled(label: impl Into<String>, targets: Vec<PoseTarget>) -> Self {
        Self::new(Some(label.into()), targets)
    }

    pub fn push(&mut self, target: PoseTarget) {
        self.targets.push(target);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_clamps_at_limit() {
        assert_eq!(Direction::Increase.advance(0.95, 1.0, 0.1), Some(1.0));
        assert_eq!(Direction::Decrease.advance(-0.95, -1.0, 0.1), Some(-1.0));
    }

    #[test]
    fn advance_stops_at_or_past_boundary() {
        assert_eq!(Direction::Increase.advance(1.0, 1.0, 0.1), None);
        assert_eq!(Direction::Decrease.advance(-1.0, -1.0, 0.1), None);
        // wrong way: already beyond the limit in the authored direction
        assert_eq!(Direction::Increase.advance(2.0, 1.0, 0.1), None);
        assert_eq!(Direction::Decrease.advance(-2.0, -1.0, 0.1), None);
    }

    #[test]
    fn target_serializes_with_sign_characters() {
        let t = PoseTarget::rotation("mixamorigNeck", Axis::X, 0.5, Direction::Increase);
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["property"], "rotation");
        assert_eq!(json["axis"], "x");
        assert_eq!(json["direction"], "+");
    }
}
