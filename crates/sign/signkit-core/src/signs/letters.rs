//! Fingerspelling alphabet.

use serde::{Deserialize, Serialize};

use super::{handshape, signing_stance, Digit, PoseBuilder};
use crate::pose::PoseTarget;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

impl Letter {
    pub const ALL: [Letter; 26] = [
        Letter::A,
        Letter::B,
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::H,
        Letter::I,
        Letter::J,
        Letter::K,
        Letter::L,
        Letter::M,
        Letter::N,
        Letter::O,
        Letter::P,
        Letter::Q,
        Letter::R,
        Letter::S,
        Letter::T,
        Letter::U,
        Letter::V,
        Letter::W,
        Letter::X,
        Letter::Y,
        Letter::Z,
    ];

    /// Uppercase ASCII letters only.
    pub fn from_char(c: char) -> Option<Letter> {
        if c.is_ascii_uppercase() {
            Some(Self::ALL[(c as u8 - b'A') as usize])
        } else {
            None
        }
    }

    pub fn as_char(self) -> char {
        (b'A' + self as u8) as char
    }
}

/// Authored builder for a letter, if any.
pub fn pose(letter: Letter) -> Option<PoseBuilder> {
    match letter {
        Letter::A => Some(a as PoseBuilder),
        Letter::B => Some(b as PoseBuilder),
        Letter::I => Some(i as PoseBuilder),
        Letter::L => Some(l as PoseBuilder),
        Letter::V => Some(v as PoseBuilder),
        Letter::Y => Some(y as PoseBuilder),
        _ => None,
    }
}

fn spelled(open: &[Digit]) -> Vec<PoseTarget> {
    let mut targets = signing_stance();
    targets.extend(handshape(open));
    targets
}

fn a() -> Vec<PoseTarget> {
    spelled(&[Digit::Thumb])
}

fn b() -> Vec<PoseTarget> {
    spelled(&[Digit::Index, Digit::Middle, Digit::Ring, Digit::Pinky])
}

fn i() -> Vec<PoseTarget> {
    spelled(&[Digit::Pinky])
}

fn l() -> Vec<PoseTarget> {
    spelled(&[Digit::Thumb, Digit::Index])
}

fn v() -> Vec<PoseTarget> {
    spelled(&[Digit::Index, Digit::Middle])
}

fn y() -> Vec<PoseTarget> {
    spelled(&[Digit::Thumb, Digit::Pinky])
}
