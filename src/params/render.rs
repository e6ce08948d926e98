//! Rendering configuration.

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Field of view (degrees)
    /// sketch value: 75
    pub fov_degrees: f32,

    /// Near clipping plane
    /// sketch value: 0.1
    pub near_plane: f32,

    /// Far clipping plane
    /// sketch value: 100
    pub far_plane: f32,

    /// View-space half-extent of one point sprite
    pub point_size: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 900,
            window_height: 900,
            fov_degrees: 75.0,
            near_plane: 0.1,
            far_plane: 100.0,
            point_size: 0.008,
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height as f32
    }
}
