//! Orrery is a headless scene-graph transform engine.
//!
//! It owns the math that turns authored node state (position, Euler rotation,
//! scale, pivot) into the matrices a renderer consumes each frame, without
//! touching any graphics API itself. Contexts, shaders, buffers and draw calls
//! live behind the [`RenderTarget`] seam.
//!
//! # Frame pipeline
//!
//! 1. **Validate**: [`Scene::validate`] and [`Camera::validate`] check structure and finiteness
//! 2. **Project**: the clip-space projection is derived from the live viewport aspect
//! 3. **Walk**: each node, in insertion order, gets its local and world transforms
//!    recomputed from authored state
//! 4. **Emit**: [`NodeUniforms`] (world-view-projection plus normal matrix) and the
//!    light list are handed to the target per node
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Recompute-per-frame**: derived matrices are never cached on nodes; every frame
//!   recomputes from authored state, so mutation between frames is always picked up.
//! - **Column-major everywhere**: matrix storage matches the GL uniform layout, so
//!   uniform data uploads without reshuffling.
//! - **Pure data model**: scenes and cameras are plain serde-enabled values, buildable
//!   programmatically or loaded from JSON.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod math;
mod render;
mod scene;

pub use foundation::core::{Transform3D, Viewport};
pub use foundation::error::{OrreryError, OrreryResult};
pub use math::mat3::Mat3;
pub use math::mat4::Mat4;
pub use math::vec2::Vec2;
pub use math::vec3::Vec3;
pub use render::capture::{CaptureTarget, CapturedDraw, CapturedFrame};
pub use render::frame::{FrameStats, render_frame};
pub use render::target::{NodeUniforms, RenderTarget};
pub use scene::camera::{Camera, Projection};
pub use scene::graph::Scene;
pub use scene::light::DirectionalLight;
pub use scene::node::{GeometryInfo, Node, NodeId};
