//! Pose-batch sequencer.
//!
//! The host calls [`Sequencer::step`] once per rendered frame. Each tick works on
//! the head of a FIFO queue only:
//! - a caption marker is consumed without moving anything;
//! - a pose batch moves every remaining target one `animation_speed` step toward
//!   its limit (clamped), dropping targets that are done or whose joint is missing;
//! - an exhausted batch starts a rest of `pause_time_ms`, after which it is dequeued.
//!
//! The sequencer never owns the frame loop. `enqueue` reports whether the host has
//! to (re)start ticking and `StepOutputs::keep_ticking` whether it may stop.

use std::collections::VecDeque;

use log::{debug, trace};

use crate::config::SequencerConfig;
use crate::error::SignError;
use crate::outputs::{JointChange, Phase, SequencerEvent, StepOutputs};
use crate::pose::PoseBatch;
use crate::rig::{JointTree, RenderSurface};

#[derive(Clone, Debug, PartialEq)]
pub enum QueueItem {
    Pose(PoseBatch),
    Subtitle(String),
}

#[derive(Debug)]
pub struct Sequencer {
    cfg: SequencerConfig,
    queue: VecDeque<QueueItem>,
    phase: Phase,
    head_started: bool,
    outputs: StepOutputs,
}

impl Sequencer {
    pub fn new(cfg: SequencerConfig) -> Result<Self, SignError> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            queue: VecDeque::new(),
            phase: Phase::Idle,
            head_started: false,
            outputs: StepOutputs::default(),
        })
    }

    pub fn config(&self) -> &SequencerConfig {
        &self.cfg
    }

    /// Swap stepping parameters; the queue is left untouched.
    pub fn set_config(&mut self, cfg: SequencerConfig) -> Result<(), SignError> {
        cfg.validate()?;
        self.cfg = cfg;
        Ok(())
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.phase.is_idle()
    }

    /// True while the host is expected to keep ticking.
    #[inline]
    pub fn is_running(&self) -> bool {
        !self.phase.is_idle()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn queue(&self) -> impl Iterator<Item = &QueueItem> {
        self.queue.iter()
    }

    /// Last tick's outputs.
    pub fn outputs(&self) -> &StepOutputs {
        &self.outputs
    }

    /// Append a batch. Returns true when this call armed an idle loop.
    pub fn enqueue(&mut self, batch: PoseBatch) -> bool {
        self.queue.push_back(QueueItem::Pose(batch));
        self.arm()
    }

    /// Append a caption marker that fires when it reaches the head.
    pub fn enqueue_subtitle(&mut self, text: impl Into<String>) -> bool {
        self.queue.push_back(QueueItem::Subtitle(text.into()));
        self.arm()
    }

    fn arm(&mut self) -> bool {
        if self.phase.is_idle() {
            debug!("sequencer armed with {} queued item(s)", self.queue.len());
            self.phase = Phase::Advancing;
            true
        } else {
            false
        }
    }

    /// Drop everything queued and go idle. Joint values stay where they are.
    pub fn clear(&mut self) {
        if !self.queue.is_empty() {
            debug!("sequencer cleared, discarding {} item(s)", self.queue.len());
        }
        self.queue.clear();
        self.head_started = false;
        self.phase = Phase::Idle;
    }

    /// Run one tick. `dt` is the elapsed frame time in seconds and only matters
    /// while resting.
    pub fn step(
        &mut self,
        dt: f32,
        model: &mut dyn JointTree,
        surface: &mut dyn RenderSurface,
    ) -> &StepOutputs {
        self.outputs.clear();

        if self.queue.is_empty() {
            if !self.phase.is_idle() {
                debug!("sequencer idle");
                self.phase = Phase::Idle;
                self.outputs.push_event(SequencerEvent::Idle);
            }
            self.outputs.phase = self.phase;
            return &self.outputs;
        }

        match self.phase {
            Phase::Idle | Phase::Advancing => {
                self.phase = Phase::Advancing;
                self.advance(model);
            }
            Phase::Resting { elapsed_ms } => {
                self.rest(elapsed_ms + dt.max(0.0) * 1000.0);
            }
        }

        surface.render();
        self.outputs.rendered = true;
        self.outputs.phase = self.phase;
        self.outputs.keep_ticking = !self.phase.is_idle();
        trace!(
            "tick: phase={:?} changes={} events={}",
            self.phase,
            self.outputs.changes.len(),
            self.outputs.events.len()
        );
        &self.outputs
    }

    fn advance(&mut self, model: &mut dyn JointTree) {
        if matches!(self.queue.front(), Some(QueueItem::Subtitle(_))) {
            if let Some(QueueItem::Subtitle(text)) = self.queue.pop_front() {
                self.outputs
                    .push_event(SequencerEvent::SubtitleAppended { text });
            }
            return;
        }

        let Some(QueueItem::Pose(batch)) = self.queue.front_mut() else {
            return;
        };

        if !self.head_started {
            self.head_started = true;
            self.outputs.push_event(SequencerEvent::SignStarted {
                label: batch.label.clone(),
            });
        }

        let speed = self.cfg.animation_speed;
        let outputs = &mut self.outputs;
        batch.targets.retain(|t| {
            let Some(current) = model.joint_value(&t.joint, t.property, t.axis) else {
                return false;
            };
            match t.direction.advance(current, t.limit, speed) {
                Some(next) => {
                    model.set_joint_value(&t.joint, t.property, t.axis, next);
                    outputs.push_change(JointChange {
                        joint: t.joint.clone(),
                        property: t.property,
                        axis: t.axis,
                        value: next,
                    });
                    true
                }
                None => false,
            }
        });

        if batch.is_empty() {
            debug!("sign {:?} complete, resting", batch.label);
            self.outputs.push_event(SequencerEvent::SignCompleted {
                label: batch.label.clone(),
            });
            self.phase = Phase::Resting { elapsed_ms: 0.0 };
        }
    }

    fn rest(&mut self, elapsed_ms: f32) {
        if elapsed_ms < self.cfg.pause_time_ms {
            self.phase = Phase::Resting { elapsed_ms };
            return;
        }
        let label = match self.queue.pop_front() {
            Some(QueueItem::Pose(batch)) => batch.label,
            _ => None,
        };
        debug!("sign {:?} retired after {elapsed_ms:.0}ms", label);
        self.outputs.push_event(SequencerEvent::SignRetired { label });
        self.head_started = false;
        self.phase = if self.queue.is_empty() {
            self.outputs.push_event(SequencerEvent::Idle);
            Phase::Idle
        } else {
            Phase::Advancing
        };
    }
}
