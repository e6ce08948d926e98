//! Orbdust library - deterministic sphere point-sprite generation

pub mod camera;
pub mod cli;
pub mod density;
pub mod field;
pub mod mesh;
pub mod params;
pub mod points;
pub mod rendering;
pub mod rng;
