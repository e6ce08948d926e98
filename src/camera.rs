//! Free-fly camera: key-state snapshot in, new camera state out.
//!
//! The controller is a pure function of (previous state, key snapshot,
//! timestamp); the winit layer owns the mutable key map and hands in a
//! plain copy once per frame.

use std::f32::consts::PI;

use glam::{Mat4, Vec3};

use crate::params::{FreeFlyParams, RenderConfig};

/// Pitch never leaves [-0.45 pi, 0.45 pi]
pub const PITCH_LIMIT: f32 = 0.45 * PI;

/// Radians of yaw/pitch per second of held key
const TURN_RATE: f32 = 0.5 * PI;

/// World units per second of held movement key
const MOVE_RATE: f32 = 0.5;

/// Camera state carried between frames
#[derive(Debug, Clone, Copy)]
pub struct CameraState {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    /// Timestamp of the previous step (seconds)
    pub last_time: f32,
}

impl CameraState {
    pub fn new(params: &FreeFlyParams) -> Self {
        Self {
            position: Vec3::from_array(params.position),
            yaw: params.yaw,
            pitch: params.pitch,
            last_time: 0.0,
        }
    }
}

/// Per-frame snapshot of the navigation keys.
///
/// Filled from asynchronous key events and read once per frame; a key
/// toggled mid-frame is simply picked up next frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeySnapshot {
    pub yaw_left: bool,
    pub yaw_right: bool,
    pub pitch_up: bool,
    pub pitch_down: bool,
    pub forward: bool,
    pub back: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
}

/// Look direction for a yaw/pitch pair
pub fn forward_dir(yaw: f32, pitch: f32) -> Vec3 {
    Vec3::new(
        (-yaw).sin() * pitch.cos(),
        pitch.sin(),
        -(-yaw).cos() * pitch.cos(),
    )
}

/// Advance the camera by one frame.
///
/// Angular increment is `dt * 0.5 pi`, movement increment `0.5 * dt`;
/// pitch is clamped to the limit and strafing follows the normalized
/// cross of the forward direction with world up.
pub fn step(prev: CameraState, keys: &KeySnapshot, now_s: f32) -> CameraState {
    let dt = (now_s - prev.last_time).max(0.0);
    let angular = dt * TURN_RATE;
    let movement = dt * MOVE_RATE;

    let mut yaw = prev.yaw;
    let mut pitch = prev.pitch;
    if keys.yaw_left {
        yaw -= angular;
    }
    if keys.yaw_right {
        yaw += angular;
    }
    if keys.pitch_up {
        pitch += angular;
    }
    if keys.pitch_down {
        pitch -= angular;
    }
    pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);

    let forward = forward_dir(yaw, pitch);
    // Pitch clamp keeps forward off the vertical axis, so this never collapses
    let strafe = forward.cross(Vec3::Y).normalize_or_zero();

    let mut position = prev.position;
    if keys.forward {
        position += forward * movement;
    }
    if keys.back {
        position -= forward * movement;
    }
    if keys.strafe_right {
        position += strafe * movement;
    }
    if keys.strafe_left {
        position -= strafe * movement;
    }

    CameraState {
        position,
        yaw,
        pitch,
        last_time: now_s,
    }
}

/// Camera system holding the free-fly state between frames
pub struct CameraSystem {
    pub state: CameraState,
}

impl CameraSystem {
    pub fn new(params: &FreeFlyParams) -> Self {
        Self {
            state: CameraState::new(params),
        }
    }

    /// Step the controller with this frame's key snapshot
    pub fn update(&mut self, keys: &KeySnapshot, now_s: f32) {
        self.state = step(self.state, keys, now_s);
    }

    /// Current look-at target (one unit ahead along the view direction)
    pub fn look_target(&self) -> Vec3 {
        self.state.position + forward_dir(self.state.yaw, self.state.pitch)
    }

    /// Create view and projection matrices for rendering
    ///
    /// # Returns
    /// Tuple of (view, projection, eye_position)
    pub fn matrices(&self, render_config: &RenderConfig) -> (Mat4, Mat4, Vec3) {
        let eye = self.state.position;

        // Always keep Y as up vector (camera never rolls)
        let view = Mat4::look_at_rh(eye, self.look_target(), Vec3::Y);
        let proj = Mat4::perspective_rh(
            render_config.fov_degrees.to_radians(),
            render_config.aspect_ratio(),
            render_config.near_plane,
            render_config.far_plane,
        );

        (view, proj, eye)
    }
}
