//! Whole-word signs.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use super::{
    handshape, raised_arm, Digit, PoseBuilder, LEFT_FORE_ARM, RIGHT_ARM, RIGHT_HAND,
};
use crate::pose::{Axis, Direction, PoseTarget};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Word {
    Time,
    Home,
    Person,
    You,
}

impl Word {
    pub const ALL: [Word; 4] = [Word::Time, Word::Home, Word::Person, Word::You];

    pub fn as_str(self) -> &'static str {
        match self {
            Word::Time => "TIME",
            Word::Home => "HOME",
            Word::Person => "PERSON",
            Word::You => "YOU",
        }
    }

    /// Exact, case-sensitive match against the uppercase word list.
    pub fn from_token(token: &str) -> Option<Word> {
        Self::ALL.into_iter().find(|w| w.as_str() == token)
    }
}

/// Authored builder for a word, if any. HOME and PERSON are in the word list
/// but have no motion yet.
pub fn pose(word: Word) -> Option<PoseBuilder> {
    match word {
        Word::Time => Some(time as PoseBuilder),
        Word::You => Some(you as PoseBuilder),
        Word::Home | Word::Person => None,
    }
}

/// Index finger taps the back of the raised left wrist.
fn time() -> Vec<PoseTarget> {
    let mut targets = vec![PoseTarget::rotation(
        LEFT_FORE_ARM,
        Axis::Y,
        -PI / 2.5,
        Direction::Increase,
    )];
    targets.extend(raised_arm());
    targets.extend(handshape(&[Digit::Index]));
    targets.push(PoseTarget::rotation(
        RIGHT_HAND,
        Axis::X,
        PI / 8.0,
        Direction::Increase,
    ));
    targets
}

/// Point forward at the viewer.
fn you() -> Vec<PoseTarget> {
    let mut targets = raised_arm();
    targets.push(PoseTarget::rotation(
        RIGHT_ARM,
        Axis::X,
        PI / 8.0,
        Direction::Increase,
    ));
    targets.extend(handshape(&[Digit::Index]));
    targets
}
