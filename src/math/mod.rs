//! Column-major matrix and vector math.
//!
//! Points are column vectors multiplied on the right (`M * p`); storage
//! matches the GL uniform layout so matrix data uploads without
//! reshuffling. The coordinate system is right-handed with the camera
//! looking down `-Z`; projections map depth to clip `z` in `[-1, +1]`.

/// 3x3 matrices for the 2D pipeline.
pub mod mat3;
/// 4x4 matrices for the 3D pipeline.
pub mod mat4;
/// 2-component vectors.
pub mod vec2;
/// 3-component vectors.
pub mod vec3;
