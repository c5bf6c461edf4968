//! Sign lookup table.
//!
//! Resolution is an exact match over closed enums of letters and words. A miss is
//! never an error: it yields the placeholder definition so lesson content can be
//! authored one sign at a time without breaking playback of the rest.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::pose::PoseBatch;
use crate::sequencer::Sequencer;
use crate::signs::letters::{self, Letter};
use crate::signs::words::{self, Word};
use crate::signs::{self, PoseBuilder};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignKind {
    Rest,
    Letter,
    Word,
    Placeholder,
}

/// A resolved sign: the token it stands for and how to build its batch.
#[derive(Clone, Debug)]
pub struct SignDefinition {
    token: String,
    kind: SignKind,
    build: PoseBuilder,
}

impl SignDefinition {
    /// The neutral stance. Its history entry is a single space.
    pub fn rest() -> Self {
        Self {
            token: " ".to_string(),
            kind: SignKind::Rest,
            build: signs::rest_pose,
        }
    }

    pub fn placeholder(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            kind: SignKind::Placeholder,
            build: signs::placeholder,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn kind(&self) -> SignKind {
        self.kind
    }

    pub fn is_placeholder(&self) -> bool {
        self.kind == SignKind::Placeholder
    }

    /// Fresh batch for this sign. The rest pose carries no label.
    pub fn batch(&self) -> PoseBatch {
        let label = match self.kind {
            SignKind::Rest => None,
            _ => Some(self.token.clone()),
        };
        PoseBatch::new(label, (self.build)())
    }

    /// Record the token in `history` and append the batch. Returns true when the
    /// sequencer was idle and the host has to start ticking.
    pub fn play(&self, sequencer: &mut Sequencer, history: &mut Vec<String>) -> bool {
        history.push(self.token.clone());
        sequencer.enqueue(self.batch())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SignRegistry;

impl SignRegistry {
    pub fn new() -> Self {
        Self
    }

    /// Letters offered on the lesson page, in display order.
    pub fn alphabet(&self) -> &'static [Letter] {
        &Letter::ALL
    }

    /// Words offered on the lesson page and recognised by the text compiler.
    pub fn known_words(&self) -> &'static [Word] {
        &Word::ALL
    }

    pub fn is_known_word(&self, token: &str) -> bool {
        Word::from_token(token).is_some()
    }

    /// Resolve an uppercase letter or word. Never fails.
    pub fn resolve(&self, token: &str) -> SignDefinition {
        if let Some(word) = Word::from_token(token) {
            if let Some(build) = words::pose(word) {
                return SignDefinition {
                    token: token.to_string(),
                    kind: SignKind::Word,
                    build,
                };
            }
        } else if let Some(letter) = single_letter(token) {
            if let Some(build) = letters::pose(letter) {
                return SignDefinition {
                    token: token.to_string(),
                    kind: SignKind::Letter,
                    build,
                };
            }
        }
        warn!("Animation for '{token}' not found, using fallback");
        SignDefinition::placeholder(token)
    }
}

fn single_letter(token: &str) -> Option<Letter> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Letter::from_char(c),
        _ => None,
    }
}
