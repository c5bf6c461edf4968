//! Avatar session: one loaded model with its renderer and sequencer.
//!
//! The session exclusively owns its joint tree and render surface. Switching
//! avatars means dropping the session (which disposes the surface) and loading
//! a new one; two sessions never share a model.

use log::{debug, warn};

use crate::compiler::{compile, CompiledOp};
use crate::config::SequencerConfig;
use crate::error::SignError;
use crate::outputs::{SequencerEvent, StepOutputs};
use crate::registry::{SignDefinition, SignRegistry};
use crate::rig::{JointTree, ModelLoader, RenderSurface};
use crate::sequencer::Sequencer;

/// Receives caption fragments as playback reaches them.
pub trait SubtitleSink {
    fn append(&mut self, text: &str);

    /// Called when a new captioned text starts.
    fn clear(&mut self) {}
}

impl<F: FnMut(&str)> SubtitleSink for F {
    fn append(&mut self, text: &str) {
        self(text)
    }
}

pub struct AvatarSession<M: JointTree, R: RenderSurface> {
    model: M,
    surface: R,
    sequencer: Sequencer,
    registry: SignRegistry,
    history: Vec<String>,
    caption: String,
    subtitles: Option<Box<dyn SubtitleSink>>,
}

impl<M: JointTree, R: RenderSurface> AvatarSession<M, R> {
    /// Wrap an already loaded model. Queues the rest pose and renders the first
    /// frame.
    pub fn new(model: M, surface: R, cfg: SequencerConfig) -> Result<Self, SignError> {
        let sequencer = Sequencer::new(cfg)?;
        let mut session = Self {
            model,
            surface,
            sequencer,
            registry: SignRegistry::new(),
            history: Vec::new(),
            caption: String::new(),
            subtitles: None,
        };
        SignDefinition::rest().play(&mut session.sequencer, &mut session.history);
        session.surface.render();
        Ok(session)
    }

    /// Load the model through `loader`; nothing is constructed if that fails.
    pub fn load<L>(
        loader: &mut L,
        path: &str,
        surface: R,
        cfg: SequencerConfig,
    ) -> Result<Self, SignError>
    where
        L: ModelLoader<Model = M>,
    {
        let model = loader.load_model(path)?;
        debug!("model '{path}' loaded");
        Self::new(model, surface, cfg)
    }

    pub fn set_subtitle_sink(&mut self, sink: impl SubtitleSink + 'static) {
        self.subtitles = Some(Box::new(sink));
    }

    /// Resolve and queue one letter or word. No busy check; see `request_sign`.
    pub fn enqueue_sign(&mut self, token: &str) -> bool {
        let def = self.registry.resolve(token);
        def.play(&mut self.sequencer, &mut self.history)
    }

    /// UI entry point: only one sign plays at a time.
    pub fn request_sign(&mut self, token: &str) -> Result<bool, SignError> {
        if !self.sequencer.is_empty() {
            warn!("sign '{token}' requested while {} item(s) queued", self.sequencer.len());
            return Err(SignError::Busy);
        }
        Ok(self.enqueue_sign(token))
    }

    /// Compile `text` and queue every resulting op. With `subtitles`, the caption
    /// is reset and then grows as markers reach the head of the queue.
    pub fn compile_text(&mut self, text: &str, subtitles: bool) -> bool {
        if subtitles {
            self.caption.clear();
            if let Some(sink) = self.subtitles.as_mut() {
                sink.clear();
            }
        }
        let mut armed = false;
        for op in compile(text, &self.registry, subtitles) {
            armed |= match op {
                CompiledOp::Sign { token, .. } => self.enqueue_sign(&token),
                CompiledOp::Subtitle { text } => self.sequencer.enqueue_subtitle(text),
            };
        }
        armed
    }

    /// Advance one frame and forward caption events.
    pub fn step(&mut self, dt: f32) -> &StepOutputs {
        let outputs = self.sequencer.step(dt, &mut self.model, &mut self.surface);
        for event in &outputs.events {
            if let SequencerEvent::SubtitleAppended { text } = event {
                self.caption.push_str(text);
                if let Some(sink) = self.subtitles.as_mut() {
                    sink.append(text);
                }
            }
        }
        outputs
    }

    /// Cancel pending playback; joints keep their current values.
    pub fn clear(&mut self) {
        self.sequencer.clear();
    }

    pub fn set_config(&mut self, cfg: SequencerConfig) -> Result<(), SignError> {
        self.sequencer.set_config(cfg)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
    }

    pub fn is_idle(&self) -> bool {
        self.sequencer.is_idle()
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    pub fn registry(&self) -> &SignRegistry {
        &self.registry
    }

    /// Tokens queued so far, in order (`" "` for the rest pose).
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }
}

impl<M: JointTree, R: RenderSurface> Drop for AvatarSession<M, R> {
    fn drop(&mut self) {
        self.sequencer.clear();
        self.surface.dispose();
    }
}
