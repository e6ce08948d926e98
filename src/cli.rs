//! Command-line argument parsing.

use clap::Parser;

use crate::params::{ColorPolicy, FreeFlyParams, GenerationConfig};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "Orbdust")]
#[command(about = "Noise-displaced sphere point-sprite visualizer", long_about = None)]
pub struct Args {
    /// Number of points to generate
    #[arg(long, value_name = "COUNT", default_value_t = 90_000)]
    pub points: usize,

    /// Seed for the rng stream and the noise field
    #[arg(long, value_name = "SEED", default_value_t = 0x91FA_C742)]
    pub seed: u32,

    /// Color policy: gradient (default), roundrobin, random
    #[arg(long, value_name = "POLICY", default_value = "gradient")]
    pub colors: String,

    /// Estimate per-point surface normals
    #[arg(long)]
    pub normals: bool,

    /// Relative radial displacement bound
    #[arg(long, value_name = "MAG", default_value_t = 0.11)]
    pub noise_mag: f32,

    /// Spatial frequency of the displacement bumps
    #[arg(long, value_name = "SCALE", default_value_t = 2.0)]
    pub noise_scale: f32,

    /// Octaves summed by the noise field
    #[arg(long, value_name = "N", default_value_t = 4)]
    pub octaves: u32,

    /// Camera starting distance from the origin
    #[arg(long, value_name = "DISTANCE", default_value_t = 2.5)]
    pub camera_distance: f32,
}

impl Args {
    /// Parse color policy from command-line arguments
    pub fn parse_color_policy(&self) -> ColorPolicy {
        match self.colors.to_lowercase().as_str() {
            "gradient" => ColorPolicy::None,
            "roundrobin" => ColorPolicy::RoundRobin,
            "random" => ColorPolicy::RandomFromPalette,
            other => {
                eprintln!("Warning: Unknown color policy '{}', using gradient", other);
                ColorPolicy::None
            }
        }
    }

    /// Assemble the generation configuration (validated by the generator)
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            point_count: self.points,
            seed: self.seed,
            compute_normals: self.normals,
            color_policy: self.parse_color_policy(),
            noise: crate::params::NoiseParams {
                magnitude: self.noise_mag,
                scale: self.noise_scale,
                octaves: self.octaves,
                ..Default::default()
            },
            ..GenerationConfig::default()
        }
    }

    pub fn camera_params(&self) -> FreeFlyParams {
        FreeFlyParams {
            position: [0.0, 0.0, self.camera_distance],
            ..FreeFlyParams::default()
        }
    }
}
