//! Free-fly camera configuration.

/// Initial state for the free-fly camera
#[derive(Debug, Clone)]
pub struct FreeFlyParams {
    /// Starting position (world units; the displaced sphere has radius ~1)
    pub position: [f32; 3],

    /// Starting yaw (radians)
    pub yaw: f32,

    /// Starting pitch (radians)
    pub pitch: f32,
}

impl Default for FreeFlyParams {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 2.5], // Outside the sphere, looking back at it
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}
