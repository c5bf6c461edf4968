use js_sys::{Array, Function, Reflect};
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use signkit_core::{
    compile, AvatarSession, Axis, JointTree, Property, RenderSurface, SequencerConfig,
    SignRegistry, SubtitleSink,
};

mod progress;

pub use progress::{find_video, related_videos, video_categories, VideoProgress};

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn to_js_error(err: impl std::fmt::Display) -> JsError {
    JsError::new(&err.to_string())
}

/// Optional function-valued property of the host object.
fn host_fn(host: &JsValue, name: &str) -> Result<Option<Function>, JsError> {
    let value = Reflect::get(host, &JsValue::from_str(name))
        .map_err(|e| JsError::new(&format!("host.{name} unreadable: {e:?}")))?;
    if jsvalue_is_undefined_or_null(&value) {
        return Ok(None);
    }
    value
        .dyn_into::<Function>()
        .map(Some)
        .map_err(|_| JsError::new(&format!("host.{name} must be a function")))
}

fn required_host_fn(host: &JsValue, name: &str) -> Result<Function, JsError> {
    host_fn(host, name)?.ok_or_else(|| JsError::new(&format!("host.{name} is required")))
}

/// Joint access through `getJoint(name, property, axis)` / `setJoint(name, property, axis, value)`.
struct JsRig {
    get: Function,
    set: Function,
}

impl JointTree for JsRig {
    fn joint_value(&self, joint: &str, property: Property, axis: Axis) -> Option<f32> {
        // undefined/null or a non-number means the rig has no such joint
        self.get
            .call3(
                &JsValue::UNDEFINED,
                &JsValue::from_str(joint),
                &JsValue::from_str(property.as_str()),
                &JsValue::from_str(axis.as_str()),
            )
            .ok()
            .and_then(|v| v.as_f64())
            .map(|n| n as f32)
    }

    fn set_joint_value(
        &mut self,
        joint: &str,
        property: Property,
        axis: Axis,
        value: f32,
    ) -> bool {
        let args = Array::of4(
            &JsValue::from_str(joint),
            &JsValue::from_str(property.as_str()),
            &JsValue::from_str(axis.as_str()),
            &JsValue::from_f64(value as f64),
        );
        match self.set.apply(&JsValue::UNDEFINED, &args) {
            Ok(ret) => ret.as_bool() != Some(false),
            Err(_) => false,
        }
    }
}

/// Scene/camera/renderer owned by JS; we only call into it.
struct JsSurface {
    render: Function,
    resize: Option<Function>,
    dispose: Option<Function>,
}

impl RenderSurface for JsSurface {
    fn render(&mut self) {
        if let Err(e) = self.render.call0(&JsValue::UNDEFINED) {
            log::warn!("host render failed: {e:?}");
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        if let Some(f) = &self.resize {
            if let Err(e) = f.call2(
                &JsValue::UNDEFINED,
                &JsValue::from(width),
                &JsValue::from(height),
            ) {
                log::warn!("host resize failed: {e:?}");
            }
        }
    }

    fn dispose(&mut self) {
        if let Some(f) = &self.dispose {
            if let Err(e) = f.call0(&JsValue::UNDEFINED) {
                log::warn!("host dispose failed: {e:?}");
            }
        }
    }
}

struct JsSubtitleSink {
    f: Function,
}

impl SubtitleSink for JsSubtitleSink {
    fn append(&mut self, text: &str) {
        if let Err(e) = self.f.call1(&JsValue::UNDEFINED, &JsValue::from_str(text)) {
            log::warn!("host onSubtitle failed for {text:?}: {e:?}");
        }
    }
}

fn parse_config(config: JsValue) -> Result<SequencerConfig, JsError> {
    if jsvalue_is_undefined_or_null(&config) {
        Ok(SequencerConfig::default())
    } else {
        swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))
    }
}

#[wasm_bindgen]
pub struct SignAvatar {
    session: AvatarSession<JsRig, JsSurface>,
}

#[wasm_bindgen]
impl SignAvatar {
    /// Build a session over a loaded model. `host` provides
    /// `getJoint`, `setJoint`, `render` and optionally `resize`, `dispose`,
    /// `onSubtitle`. `config` is `{ animation_speed, pause_time_ms }` or undefined.
    /// Example:
    ///   new SignAvatar(host, { animation_speed: 0.1, pause_time_ms: 800 })
    #[wasm_bindgen(constructor)]
    pub fn new(host: JsValue, config: JsValue) -> Result<SignAvatar, JsError> {
        console_error_panic_hook::set_once();

        let cfg = parse_config(config)?;
        let rig = JsRig {
            get: required_host_fn(&host, "getJoint")?,
            set: required_host_fn(&host, "setJoint")?,
        };
        let surface = JsSurface {
            render: required_host_fn(&host, "render")?,
            resize: host_fn(&host, "resize")?,
            dispose: host_fn(&host, "dispose")?,
        };
        let on_subtitle = host_fn(&host, "onSubtitle")?;

        let mut session = AvatarSession::new(rig, surface, cfg).map_err(to_js_error)?;
        if let Some(f) = on_subtitle {
            session.set_subtitle_sink(JsSubtitleSink { f });
        }
        Ok(SignAvatar { session })
    }

    /// Queue a letter or word unconditionally. Returns true when the host must
    /// start its frame loop.
    #[wasm_bindgen(js_name = enqueueSign)]
    pub fn enqueue_sign(&mut self, token: String) -> bool {
        self.session.enqueue_sign(&token)
    }

    /// Queue a letter or word only if nothing is playing; throws otherwise.
    #[wasm_bindgen(js_name = requestSign)]
    pub fn request_sign(&mut self, token: String) -> Result<bool, JsError> {
        self.session.request_sign(&token).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = compileText)]
    pub fn compile_text(&mut self, text: String, subtitles: bool) -> bool {
        self.session.compile_text(&text, subtitles)
    }

    /// Advance one frame (`dt` in seconds). Returns the StepOutputs JSON.
    #[wasm_bindgen]
    pub fn step(&mut self, dt: f32) -> Result<JsValue, JsError> {
        let out = self.session.step(dt);
        swb::to_value(out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&mut self, config: JsValue) -> Result<(), JsError> {
        let cfg = parse_config(config)?;
        self.session.set_config(cfg).map_err(to_js_error)
    }

    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.session.clear();
    }

    #[wasm_bindgen]
    pub fn resize(&mut self, width: u32, height: u32) {
        self.session.resize(width, height);
    }

    #[wasm_bindgen(js_name = isIdle)]
    pub fn is_idle(&self) -> bool {
        self.session.is_idle()
    }

    #[wasm_bindgen(js_name = queueLength)]
    pub fn queue_length(&self) -> usize {
        self.session.sequencer().len()
    }

    #[wasm_bindgen]
    pub fn history(&self) -> Result<JsValue, JsError> {
        swb::to_value(self.session.history()).map_err(to_js_error)
    }

    #[wasm_bindgen]
    pub fn caption(&self) -> String {
        self.session.caption().to_string()
    }
}

/// Letters shown on the lesson page, as single-character strings.
#[wasm_bindgen]
pub fn alphabet() -> Result<JsValue, JsError> {
    let letters: Vec<String> = SignRegistry::new()
        .alphabet()
        .iter()
        .map(|l| l.as_char().to_string())
        .collect();
    swb::to_value(&letters).map_err(to_js_error)
}

#[wasm_bindgen(js_name = knownWords)]
pub fn known_words() -> Result<JsValue, JsError> {
    let words: Vec<&str> = SignRegistry::new()
        .known_words()
        .iter()
        .map(|w| w.as_str())
        .collect();
    swb::to_value(&words).map_err(to_js_error)
}

/// Preview the ops `compileText` would queue, without touching any avatar.
#[wasm_bindgen(js_name = compilePreview)]
pub fn compile_preview(text: String, subtitles: bool) -> Result<JsValue, JsError> {
    swb::to_value(&compile(&text, &SignRegistry::new(), subtitles)).map_err(to_js_error)
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
