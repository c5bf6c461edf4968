//! Authored sign data for the Mixamo "ybot" rig.
//!
//! Every builder returns the targets of one sign. Directions assume finger
//! joints stay within `[0, CURL]`: extending always moves `-` toward zero and
//! curling always moves `+` toward `CURL`, so any sign can follow any other.
//! Words that reach the arm or tilt the wrist forward leave that to the next
//! stance or rest pose, which brings both back to zero.

use std::f32::consts::PI;

use crate::pose::{Axis, Direction, PoseTarget};

pub mod letters;
pub mod words;

/// Builds the targets of one sign.
pub type PoseBuilder = fn() -> Vec<PoseTarget>;

pub const NECK: &str = "mixamorigNeck";
pub const LEFT_ARM: &str = "mixamorigLeftArm";
pub const LEFT_FORE_ARM: &str = "mixamorigLeftForeArm";
pub const RIGHT_ARM: &str = "mixamorigRightArm";
pub const RIGHT_FORE_ARM: &str = "mixamorigRightForeArm";
pub const RIGHT_HAND: &str = "mixamorigRightHand";

/// Finger segment rotation for a closed finger.
pub const CURL: f32 = PI / 2.0;
/// The thumb folds less than the fingers.
pub const THUMB_CURL: f32 = PI / 4.0;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Digit {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Digit {
    pub const ALL: [Digit; 5] = [
        Digit::Thumb,
        Digit::Index,
        Digit::Middle,
        Digit::Ring,
        Digit::Pinky,
    ];

    fn joint_prefix(self) -> &'static str {
        match self {
            Digit::Thumb => "mixamorigRightHandThumb",
            Digit::Index => "mixamorigRightHandIndex",
            Digit::Middle => "mixamorigRightHandMiddle",
            Digit::Ring => "mixamorigRightHandRing",
            Digit::Pinky => "mixamorigRightHandPinky",
        }
    }

    fn curl_limit(self) -> f32 {
        match self {
            Digit::Thumb => THUMB_CURL,
            _ => CURL,
        }
    }

    /// Joint names of the three segments, knuckle first.
    pub fn segments(self) -> [String; 3] {
        let prefix = self.joint_prefix();
        [1, 2, 3].map(|i| format!("{prefix}{i}"))
    }
}

fn curled(digit: Digit) -> impl Iterator<Item = PoseTarget> {
    let limit = digit.curl_limit();
    digit
        .segments()
        .into_iter()
        .map(move |joint| PoseTarget::rotation(joint, Axis::Z, limit, Direction::Increase))
}

fn extended(digit: Digit) -> impl Iterator<Item = PoseTarget> {
    digit
        .segments()
        .into_iter()
        .map(|joint| PoseTarget::rotation(joint, Axis::Z, 0.0, Direction::Decrease))
}

/// Hand shape: listed digits straight, the rest closed.
pub fn handshape(open: &[Digit]) -> Vec<PoseTarget> {
    let mut targets = Vec::with_capacity(Digit::ALL.len() * 3);
    for digit in Digit::ALL {
        if open.contains(&digit) {
            targets.extend(extended(digit));
        } else {
            targets.extend(curled(digit));
        }
    }
    targets
}

/// Right hand raised in front of the chest.
pub fn raised_arm() -> Vec<PoseTarget> {
    vec![
        PoseTarget::rotation(RIGHT_ARM, Axis::Z, PI / 6.0, Direction::Decrease),
        PoseTarget::rotation(RIGHT_FORE_ARM, Axis::Y, PI / 2.5, Direction::Decrease),
    ]
}

/// Undo the forward reach and wrist tilt used by word signs.
pub fn relaxed_reach() -> Vec<PoseTarget> {
    vec![
        PoseTarget::rotation(RIGHT_ARM, Axis::X, 0.0, Direction::Decrease),
        PoseTarget::rotation(RIGHT_HAND, Axis::X, 0.0, Direction::Decrease),
    ]
}

/// Raised arm with no reach, where fingerspelling happens.
pub fn signing_stance() -> Vec<PoseTarget> {
    let mut targets = raised_arm();
    targets.extend(relaxed_reach());
    targets
}

/// Neutral stance applied once after a model loads.
pub fn rest_pose() -> Vec<PoseTarget> {
    let mut targets = vec![
        PoseTarget::rotation(NECK, Axis::X, PI / 12.0, Direction::Increase),
        PoseTarget::rotation(LEFT_ARM, Axis::Z, -PI / 3.0, Direction::Decrease),
        PoseTarget::rotation(LEFT_FORE_ARM, Axis::Y, -PI / 1.5, Direction::Decrease),
        PoseTarget::rotation(RIGHT_ARM, Axis::Z, PI / 3.0, Direction::Increase),
        PoseTarget::rotation(RIGHT_FORE_ARM, Axis::Y, PI / 1.5, Direction::Increase),
    ];
    targets.extend(relaxed_reach());
    targets
}

/// Gesture played for tokens without authored data.
pub fn placeholder() -> Vec<PoseTarget> {
    rest_pose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handshape_covers_every_segment_once() {
        let targets = handshape(&[Digit::Index]);
        assert_eq!(targets.len(), 15);
        let index: Vec<_> = targets
            .iter()
            .filter(|t| t.joint.starts_with("mixamorigRightHandIndex"))
            .collect();
        assert_eq!(index.len(), 3);
        assert!(index
            .iter()
            .all(|t| t.direction == Direction::Decrease && t.limit == 0.0));
    }

    #[test]
    fn stance_and_rest_clear_forward_reach() {
        for targets in [signing_stance(), rest_pose()] {
            for joint in [RIGHT_ARM, RIGHT_HAND] {
                assert!(targets.iter().any(|t| t.joint == joint
                    && t.axis == Axis::X
                    && t.limit == 0.0
                    && t.direction == Direction::Decrease));
            }
        }
    }

    #[test]
    fn segments_are_numbered_from_the_knuckle() {
        assert_eq!(
            Digit::Pinky.segments(),
            [
                "mixamorigRightHandPinky1".to_string(),
                "mixamorigRightHandPinky2".to_string(),
                "mixamorigRightHandPinky3".to_string(),
            ]
        );
    }
}
