//! Text → sign operations.
//!
//! Words from the known-word list become one word-level sign; anything else is
//! spelled out letter by letter. With captions on, a subtitle op precedes every
//! sign op so the caption advances as playback reaches it.

use serde::{Deserialize, Serialize};

use crate::registry::SignRegistry;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignLevel {
    Word,
    Letter,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CompiledOp {
    Sign { token: String, level: SignLevel },
    Subtitle { text: String },
}

impl CompiledOp {
    pub fn is_sign(&self) -> bool {
        matches!(self, CompiledOp::Sign { .. })
    }
}

/// Compile `text` into ordered operations. Order is strictly left to right and
/// never batches across words.
pub fn compile(text: &str, registry: &SignRegistry, subtitles: bool) -> Vec<CompiledOp> {
    let normalized = text.trim().to_uppercase();
    let mut ops = Vec::new();

    for word in normalized.split_whitespace() {
        if registry.is_known_word(word) {
            if subtitles {
                ops.push(CompiledOp::Subtitle {
                    text: format!("{word} "),
                });
            }
            ops.push(CompiledOp::Sign {
                token: word.to_string(),
                level: SignLevel::Word,
            });
            continue;
        }

        let mut letters = word.chars().peekable();
        while let Some(c) = letters.next() {
            if subtitles {
                let text = if letters.peek().is_none() {
                    format!("{c} ")
                } else {
                    c.to_string()
                };
                ops.push(CompiledOp::Subtitle { text });
            }
            ops.push(CompiledOp::Sign {
                token: c.to_string(),
                level: SignLevel::Letter,
            });
        }
    }
    ops
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signs(ops: &[CompiledOp]) -> Vec<(&str, SignLevel)> {
        ops.iter()
            .filter_map(|op| match op {
                CompiledOp::Sign { token, level } => Some((token.as_str(), *level)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn unknown_words_are_spelled() {
        let ops = compile("HI BRIDGELY", &SignRegistry::new(), false);
        assert_eq!(ops.len(), 10);
        assert!(ops.iter().all(|op| matches!(
            op,
            CompiledOp::Sign {
                level: SignLevel::Letter,
                ..
            }
        )));
        let tokens: String = signs(&ops).iter().map(|(t, _)| *t).collect();
        assert_eq!(tokens, "HIBRIDGELY");
    }

    #[test]
    fn known_word_is_one_op() {
        let ops = compile("TIME", &SignRegistry::new(), false);
        assert_eq!(
            ops,
            vec![CompiledOp::Sign {
                token: "TIME".into(),
                level: SignLevel::Word
            }]
        );
    }

    #[test]
    fn input_is_trimmed_and_uppercased() {
        let ops = compile("  you   go ", &SignRegistry::new(), false);
        assert_eq!(
            signs(&ops),
            vec![
                ("YOU", SignLevel::Word),
                ("G", SignLevel::Letter),
                ("O", SignLevel::Letter)
            ]
        );
    }

    #[test]
    fn subtitles_interleave_with_trailing_space_rules() {
        let ops = compile("time ab", &SignRegistry::new(), true);
        let expected = vec![
            CompiledOp::Subtitle { text: "TIME ".into() },
            CompiledOp::Sign {
                token: "TIME".into(),
                level: SignLevel::Word,
            },
            CompiledOp::Subtitle { text: "A".into() },
            CompiledOp::Sign {
                token: "A".into(),
                level: SignLevel::Letter,
            },
            CompiledOp::Subtitle { text: "B ".into() },
            CompiledOp::Sign {
                token: "B".into(),
                level: SignLevel::Letter,
            },
        ];
        assert_eq!(ops, expected);
    }

    #[test]
    fn blank_input_compiles_to_nothing() {
        assert!(compile("   ", &SignRegistry::new(), true).is_empty());
    }
}
