//! signkit core (renderer-agnostic)
//!
//! Drives a skeletal avatar through sign-language poses. Text is compiled into
//! letter/word signs, each sign resolves to a batch of joint targets, and a
//! sequencer steps the head batch once per host frame with a rest between signs.
//! Hosts plug in through [`JointTree`], [`RenderSurface`] and [`ModelLoader`].
//!
//! The video catalog and watched-progress store back the tutorial browsing page.

pub mod catalog;
pub mod compiler;
pub mod config;
pub mod error;
pub mod outputs;
pub mod pose;
pub mod progress;
pub mod registry;
pub mod rig;
pub mod sequencer;
pub mod session;
pub mod signs;

// Re-exports for consumers (adapters)
pub use catalog::{VideoCategory, VideoItem};
pub use compiler::{compile, CompiledOp, SignLevel};
pub use config::SequencerConfig;
pub use error::SignError;
pub use outputs::{JointChange, Phase, SequencerEvent, StepOutputs};
pub use pose::{Axis, Direction, PoseBatch, PoseTarget, Property};
pub use progress::{KeyValueStore, MemoryStore, WatchedVideos, WATCHED_VIDEOS_KEY};
pub use registry::{SignDefinition, SignKind, SignRegistry};
pub use rig::{
    FileModelLoader, HeadlessSurface, JointTransform, JointTree, ModelLoader, RenderSurface,
    Skeleton,
};
pub use sequencer::{QueueItem, Sequencer};
pub use session::{AvatarSession, SubtitleSink};
pub use signs::letters::Letter;
pub use signs::words::Word;
