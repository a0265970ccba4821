#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// A 2-component vector of `f32`.
pub struct Vec2 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
}

impl Vec2 {
    /// All components zero.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Build a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
