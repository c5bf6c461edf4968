//! Per-tick results of the sequencer.
//!
//! Outputs carry the joint values written this tick and a list of semantic
//! events. Hosts apply UI side effects (captions, history highlights) from the
//! events; the joint writes have already been applied to the model.

use serde::{Deserialize, Serialize};

use crate::pose::{Axis, Property};

/// Sequencer phase. `Resting` tracks how long the current rest has lasted.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Advancing,
    Resting {
        elapsed_ms: f32,
    },
}

impl Phase {
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Phase::Idle)
    }

    #[inline]
    pub fn is_resting(&self) -> bool {
        matches!(self, Phase::Resting { .. })
    }
}

/// One joint channel written this tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JointChange {
    pub joint: String,
    pub property: Property,
    pub axis: Axis,
    pub value: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum SequencerEvent {
    /// First tick of motion for the batch at the head of the queue.
    SignStarted { label: Option<String> },
    /// Every target of the head batch reached its limit; resting begins.
    SignCompleted { label: Option<String> },
    /// Rest elapsed and the batch left the queue.
    SignRetired { label: Option<String> },
    /// A caption marker reached the head of the queue.
    SubtitleAppended { text: String },
    /// Queue drained; the host may stop ticking.
    Idle,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StepOutputs {
    /// Phase after this tick.
    pub phase: Phase,
    /// Whether `render` was called this tick.
    pub rendered: bool,
    /// Whether the host should schedule another tick.
    pub keep_ticking: bool,
    #[serde(default)]
    pub changes: Vec<JointChange>,
    #[serde(default)]
    pub events: Vec<SequencerEvent>,
}

impl StepOutputs {
    #[inline]
    pub fn clear(&mut self) {
        self.phase = Phase::Idle;
        self.rendered = false;
        self.keep_ticking = false;
        self.changes.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_change(&mut self, change: JointChange) {
        self.changes.push(change);
    }

    #[inline]
    pub fn push_event(&mut self, event: SequencerEvent) {
        self.events.push(event);
    }

    /// Caption fragments appended this tick, in order.
    pub fn subtitles(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|e| match e {
            SequencerEvent::SubtitleAppended { text } => Some(text.as_str()),
            _ => None,
        })
    }
}
