// Point clouds drawn as sprites: the golden particle field and the distant
// starfield. Positions are generated once; only the group rotation moves.

use super::clock::FrameSignal;
use super::constants::*;
use glam::{Mat4, Vec3};
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct ParticleFieldParams {
    pub count: usize,
    pub half_extent: f32,
    pub spin_per_frame: f32,
    pub size: f32,
    pub color: [f32; 4],
}

impl Default for ParticleFieldParams {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            half_extent: PARTICLE_HALF_EXTENT,
            spin_per_frame: PARTICLE_SPIN_PER_FRAME,
            size: 0.05,
            color: [1.0, 0.843, 0.0, 0.6],
        }
    }
}

/// Uniform cube of points rotating rigidly about Y.
#[derive(Clone, Debug)]
pub struct ParticleField {
    pub params: ParticleFieldParams,
    positions: Vec<f32>,
    rotation_y: f32,
}

impl ParticleField {
    pub fn new(params: ParticleFieldParams, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::with_rng(params, &mut rng)
    }

    pub fn with_rng<R: Rng + ?Sized>(params: ParticleFieldParams, rng: &mut R) -> Self {
        let h = params.half_extent;
        let positions = (0..params.count * 3)
            .map(|_| rng.gen_range(-h..=h))
            .collect();
        Self {
            params,
            positions,
            rotation_y: 0.0,
        }
    }

    /// Flat `[x0, y0, z0, x1, ...]` positions.
    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn points(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.positions
            .chunks_exact(3)
            .map(|c| Vec3::new(c[0], c[1], c[2]))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    pub fn update(&mut self, signal: &FrameSignal) {
        self.rotation_y += self.params.spin_per_frame * signal.frame_step();
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.rotation_y)
    }
}

#[derive(Clone, Debug)]
pub struct StarfieldParams {
    pub count: usize,
    pub radius: f32,
    pub depth: f32,
    pub size_factor: f32,
    pub spin_per_frame: f32,
}

impl Default for StarfieldParams {
    fn default() -> Self {
        Self {
            count: STAR_COUNT,
            radius: STAR_RADIUS,
            depth: STAR_DEPTH,
            size_factor: 4.0,
            spin_per_frame: STAR_SPIN_PER_FRAME,
        }
    }
}

/// One background star: position, sprite size and grey level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub position: Vec3,
    pub size: f32,
    pub brightness: f32,
}

/// Shell of stars between `radius` and `radius + depth`; nearer stars are
/// generated last and drawn slightly larger.
#[derive(Clone, Debug)]
pub struct Starfield {
    pub params: StarfieldParams,
    stars: Vec<Star>,
    rotation_y: f32,
}

impl Starfield {
    pub fn new(params: StarfieldParams, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::with_rng(params, &mut rng)
    }

    pub fn with_rng<R: Rng + ?Sized>(params: StarfieldParams, rng: &mut R) -> Self {
        let n = params.count.max(1) as f32;
        let mut r = params.radius + params.depth;
        let increment = params.depth / n;
        let stars = (0..params.count)
            .map(|_| {
                r -= increment * rng.gen::<f32>();
                let dir = random_unit_vector(rng);
                Star {
                    position: dir * r,
                    size: (0.5 + 0.5 * rng.gen::<f32>()) * params.size_factor,
                    brightness: 0.6 + 0.4 * rng.gen::<f32>(),
                }
            })
            .collect();
        Self {
            params,
            stars,
            rotation_y: 0.0,
        }
    }

    #[inline]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    #[inline]
    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    pub fn update(&mut self, signal: &FrameSignal) {
        self.rotation_y += self.params.spin_per_frame * signal.frame_step();
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.rotation_y)
    }
}

fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let z: f32 = rng.gen_range(-1.0..=1.0);
    let phi: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
    let s = (1.0 - z * z).max(0.0).sqrt();
    Vec3::new(s * phi.cos(), s * phi.sin(), z)
}
