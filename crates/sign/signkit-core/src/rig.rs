//! Host-facing seams: joint access, rendering, and model loading.
//!
//! Adapters (wasm, native viewers) implement these traits and hand them to an
//! [`AvatarSession`](crate::session::AvatarSession). `Skeleton` is the in-crate
//! joint tree used for tests and headless hosts.

use std::fs;
use std::path::{Path, PathBuf};

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::error::SignError;
use crate::pose::{Axis, Property};

/// Scalar access to a model's joints. A `None` from `joint_value` means the rig
/// has no such joint (or channel); the sequencer treats that target as done.
pub trait JointTree {
    fn joint_value(&self, joint: &str, property: Property, axis: Axis) -> Option<f32>;

    /// Returns false when the joint does not exist.
    fn set_joint_value(&mut self, joint: &str, property: Property, axis: Axis, value: f32)
        -> bool;
}

/// Opaque scene + camera + renderer bundle. The sequencer only ever calls `render`.
pub trait RenderSurface {
    fn render(&mut self);

    fn resize(&mut self, _width: u32, _height: u32) {}

    /// Release GPU buffers, frame-tick registration and resize listeners.
    fn dispose(&mut self) {}
}

/// Produces a joint tree from an asset path.
pub trait ModelLoader {
    type Model: JointTree;

    fn load_model(&mut self, path: &str) -> Result<Self::Model, SignError>;
}

fn unit_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct JointTransform {
    #[serde(default)]
    pub position: [f32; 3],
    #[serde(default)]
    pub rotation: [f32; 3],
    #[serde(default = "unit_scale")]
    pub scale: [f32; 3],
}

impl Default for JointTransform {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            rotation: [0.0; 3],
            scale: unit_scale(),
        }
    }
}

impl JointTransform {
    #[inline]
    pub fn channel(&self, property: Property) -> &[f32; 3] {
        match property {
            Property::Rotation => &self.rotation,
            Property::Position => &self.position,
            Property::Scale => &self.scale,
        }
    }

    #[inline]
    pub fn channel_mut(&mut self, property: Property) -> &mut [f32; 3] {
        match property {
            Property::Rotation => &mut self.rotation,
            Property::Position => &mut self.position,
            Property::Scale => &mut self.scale,
        }
    }
}

/// In-memory joint tree keyed by joint name.
#[derive(Clone, Debug, Default)]
pub struct Skeleton {
    pub name: String,
    joints: HashMap<String, JointTransform>,
}

#[derive(Deserialize)]
struct RigFile {
    #[serde(default)]
    name: String,
    joints: Vec<RigJoint>,
}

#[derive(Deserialize)]
struct RigJoint {
    name: String,
    #[serde(flatten)]
    transform: JointTransform,
}

impl Skeleton {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            joints: HashMap::new(),
        }
    }

    /// Builder-style insert of a joint at its rest transform.
    pub fn with_joint(mut self, name: impl Into<String>, transform: JointTransform) -> Self {
        self.insert_joint(name, transform);
        self
    }

    pub fn insert_joint(&mut self, name: impl Into<String>, transform: JointTransform) {
        self.joints.insert(name.into(), transform);
    }

    pub fn joint(&self, name: &str) -> Option<&JointTransform> {
        self.joints.get(name)
    }

    pub fn joint_mut(&mut self, name: &str) -> Option<&mut JointTransform> {
        self.joints.get_mut(name)
    }

    pub fn len(&self) -> usize {
        self.joints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    pub fn joint_names(&self) -> impl Iterator<Item = &str> {
        self.joints.keys().map(String::as_str)
    }

    /// Parse a rig description:
    /// `{ "name": "ybot", "joints": [{ "name": "mixamorigNeck", "rotation": [0, 0, 0] }] }`.
    /// Missing channels default to zero (scale to one). Duplicate joint names and
    /// empty rigs are rejected as malformed.
    pub fn from_json(s: &str) -> Result<Self, SignError> {
        let rig: RigFile =
            serde_json::from_str(s).map_err(|e| SignError::model_load("<json>", e))?;
        if rig.joints.is_empty() {
            return Err(SignError::model_load(rig.name, "rig has no joints"));
        }
        let mut skeleton = Skeleton::new(rig.name);
        for joint in rig.joints {
            if skeleton.joints.contains_key(&joint.name) {
                return Err(SignError::model_load(
                    skeleton.name,
                    format!("duplicate joint '{}'", joint.name),
                ));
            }
            skeleton.joints.insert(joint.name, joint.transform);
        }
        Ok(skeleton)
    }
}

impl JointTree for Skeleton {
    fn joint_value(&self, joint: &str, property: Property, axis: Axis) -> Option<f32> {
        self.joints
            .get(joint)
            .map(|t| t.channel(property)[axis.index()])
    }

    fn set_joint_value(
        &mut self,
        joint: &str,
        property: Property,
        axis: Axis,
        value: f32,
    ) -> bool {
        match self.joints.get_mut(joint) {
            Some(t) => {
                t.channel_mut(property)[axis.index()] = value;
                true
            }
            None => false,
        }
    }
}

/// Loads rig descriptions from a directory on disk.
#[derive(Clone, Debug)]
pub struct FileModelLoader {
    root: PathBuf,
}

impl FileModelLoader {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ModelLoader for FileModelLoader {
    type Model = Skeleton;

    fn load_model(&mut self, path: &str) -> Result<Skeleton, SignError> {
        let full = self.root.join(path.trim_start_matches('/'));
        let text = fs::read_to_string(&full)
            .map_err(|e| SignError::model_load(path, format!("model file not found: {e}")))?;
        Skeleton::from_json(&text).map_err(|err| match err {
            SignError::ModelLoad { reason, .. } => SignError::model_load(path, reason),
            other => other,
        })
    }
}

/// Render surface for headless hosts: counts frames, draws nothing.
#[derive(Clone, Debug, Default)]
pub struct HeadlessSurface {
    pub frames: u64,
    pub size: (u32, u32),
    pub disposed: bool,
}

impl RenderSurface for HeadlessSurface {
    fn render(&mut self) {
        self.frames += 1;
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    fn dispose(&mut self) {
        self.disposed = true;
    }
}
