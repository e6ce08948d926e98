//! Sphere point generation: density-shaped placement, radial noise
//! displacement, and optional finite-difference surface normals.
//!
//! Generation is a one-shot, strictly sequential pass. Every random draw
//! comes from a single `PointRng` stream in index order, so a fixed
//! `GenerationConfig` reproduces the exact same cloud.

use glam::Vec3;

use crate::density::{self, SamplePoint};
use crate::field::NoiseField;
use crate::params::{ColorPolicy, GenerationConfig};
use crate::rng::PointRng;

/// Latitude/azimuth step used for finite-difference tangents
const NORMAL_EPS: f32 = 1e-3;

/// Below this squared cross-product length the tangent frame is degenerate
/// (azimuth circles collapse at the poles) and the radial direction is used
const DEGENERATE_CROSS_LEN_SQ: f32 = 1e-12;

/// One generated point, consumed immediately by the mesh builder
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratedPoint {
    pub position: Vec3,
    pub normal: Option<Vec3>,
    pub color: Option<[f32; 3]>,
}

/// Deterministic sphere point generator.
///
/// Owns the noise field; the rng stream is created per `generate` run so
/// repeated runs of one generator are identical.
pub struct PointGenerator {
    field: NoiseField,
    config: GenerationConfig,
}

impl PointGenerator {
    /// Create a generator, rejecting invalid configurations up front
    pub fn new(config: GenerationConfig) -> Result<Self, String> {
        config.validate()?;
        let field = NoiseField::new(config.seed, config.noise.octaves, config.noise.falloff);
        Ok(Self { field, config })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Generate the full point cloud.
    ///
    /// Per point the draw order is fixed: polar coordinate, azimuth, then
    /// (for the random color policy) one palette draw.
    pub fn generate(&self) -> Vec<GeneratedPoint> {
        let n = self.config.point_count;
        let mut rng = PointRng::new(self.config.seed);
        let mut points = Vec::with_capacity(n);

        for i in 0..n {
            let SamplePoint { y, phi } = density::sample_point(i, n, &self.config.density, &mut rng);

            let position = self.displaced_position(y, phi);
            let normal = self
                .config
                .compute_normals
                .then(|| self.estimate_normal(y, phi, position));
            let color = self.pick_color(i, &mut rng);

            points.push(GeneratedPoint {
                position,
                normal,
                color,
            });
        }

        points
    }

    /// Undisplaced unit-sphere point for a polar coordinate and azimuth
    pub fn base_point(y: f32, phi: f32) -> Vec3 {
        let r = (1.0 - y * y).max(0.0).sqrt();
        Vec3::new(r * phi.cos(), y, r * phi.sin())
    }

    /// Base point scaled radially by the noise displacement factor
    pub fn displaced_position(&self, y: f32, phi: f32) -> Vec3 {
        let base = Self::base_point(y, phi);
        let p = &self.config.noise;

        let noise = self.field.sample(
            (p.scale * (base.x + p.offset)) as f64,
            (p.scale * (base.y + p.offset)) as f64,
            (p.scale * (base.z + p.offset)) as f64,
        ) as f32;

        let m = p.magnitude * (2.0 * noise - 1.0) + 1.0;
        base * m
    }

    /// Estimate the outward surface normal at a displaced point.
    ///
    /// Finite differences along latitude and azimuth give two tangents; the
    /// latitude step mirrors away from the nearest pole so it never leaves
    /// `[-1, 1]`. The normalized cross product is flipped outward when the
    /// handedness points inward, and near-degenerate frames fall back to the
    /// undisplaced radial direction.
    fn estimate_normal(&self, y: f32, phi: f32, displaced: Vec3) -> Vec3 {
        let base = Self::base_point(y, phi);

        let y_step = y - y.signum() * NORMAL_EPS;
        let tangent_lat = self.displaced_position(y_step, phi) - displaced;
        let tangent_azi = self.displaced_position(y, phi + NORMAL_EPS) - displaced;

        let cross = tangent_lat.cross(tangent_azi);
        if cross.length_squared() < DEGENERATE_CROSS_LEN_SQ {
            return base.normalize_or_zero();
        }

        let normal = cross.normalize();
        if normal.dot(base) < 0.0 {
            -normal
        } else {
            normal
        }
    }

    fn pick_color(&self, i: usize, rng: &mut PointRng) -> Option<[f32; 3]> {
        match self.config.color_policy {
            ColorPolicy::None => None,
            ColorPolicy::RoundRobin => Some(self.config.palette[i % self.config.palette.len()]),
            ColorPolicy::RandomFromPalette => {
                let len = self.config.palette.len();
                let idx = (rng.range(0.0, len as f32) as usize).min(len - 1);
                Some(self.config.palette[idx])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::NoiseParams;

    fn config(n: usize) -> GenerationConfig {
        GenerationConfig {
            point_count: n,
            ..GenerationConfig::default()
        }
    }

    #[test]
    fn test_zero_magnitude_equator_point_is_exact() {
        // seed 0x91FAC742, y = 0, phi = 0, magnitude 0 => exactly (1, 0, 0)
        let generator = PointGenerator::new(GenerationConfig {
            noise: NoiseParams {
                magnitude: 0.0,
                ..NoiseParams::default()
            },
            ..config(1)
        })
        .unwrap();

        let position = generator.displaced_position(0.0, 0.0);
        assert_eq!(position, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_displacement_is_purely_radial_and_bounded() {
        let generator = PointGenerator::new(config(5000)).unwrap();
        let magnitude = generator.config().noise.magnitude;

        for point in generator.generate() {
            let radius = point.position.length();
            assert!(
                radius >= 1.0 - magnitude - 1e-4 && radius <= 1.0 + magnitude + 1e-4,
                "radius {} outside displacement bound",
                radius
            );
        }
    }

    #[test]
    fn test_generate_is_bit_identical_across_runs() {
        let a = PointGenerator::new(config(2000)).unwrap();
        let b = PointGenerator::new(config(2000)).unwrap();

        let pa = a.generate();
        let pb = b.generate();
        assert_eq!(pa.len(), pb.len());
        for (x, y) in pa.iter().zip(&pb) {
            assert_eq!(x.position.to_array().map(f32::to_bits), y.position.to_array().map(f32::to_bits));
        }
    }

    #[test]
    fn test_normals_are_unit_and_outward() {
        let generator = PointGenerator::new(GenerationConfig {
            compute_normals: true,
            ..config(2000)
        })
        .unwrap();

        for point in generator.generate() {
            let normal = point.normal.expect("normals requested");
            assert!((normal.length() - 1.0).abs() < 1e-4);
            assert!(normal.is_finite());

            // Outward: never opposing the undisplaced radial direction
            let radial = point.position.normalize();
            assert!(
                normal.dot(radial) >= -1e-3,
                "normal {:?} points inward at {:?}",
                normal,
                point.position
            );
        }
    }

    #[test]
    fn test_pole_normal_falls_back_to_radial() {
        // At y = 1 the azimuth tangent collapses to zero length
        let generator = PointGenerator::new(GenerationConfig {
            compute_normals: true,
            ..config(1)
        })
        .unwrap();

        let displaced = generator.displaced_position(1.0, 0.0);
        let normal = generator.estimate_normal(1.0, 0.0, displaced);
        assert!(normal.is_finite());
        assert!((normal.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_round_robin_colors_cycle_the_palette() {
        let generator = PointGenerator::new(GenerationConfig {
            color_policy: ColorPolicy::RoundRobin,
            ..config(10)
        })
        .unwrap();

        let palette = generator.config().palette.clone();
        for (i, point) in generator.generate().iter().enumerate() {
            assert_eq!(point.color.unwrap(), palette[i % palette.len()]);
        }
    }

    #[test]
    fn test_random_colors_come_from_the_palette() {
        let generator = PointGenerator::new(GenerationConfig {
            color_policy: ColorPolicy::RandomFromPalette,
            ..config(500)
        })
        .unwrap();

        let palette = generator.config().palette.clone();
        for point in generator.generate() {
            let color = point.color.unwrap();
            assert!(palette.contains(&color), "{:?} not in palette", color);
        }
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(PointGenerator::new(config(0)).is_err());
    }
}
