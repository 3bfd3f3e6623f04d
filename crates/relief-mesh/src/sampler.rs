//! Coherent 2D noise samplers for heightmap synthesis.
//!
//! [`NoiseSampler`] is the seam between the mesh generator and whatever noise
//! library produces the field. Any `noise::NoiseFn<f64, 2>` can be plugged in
//! through [`CoherentNoise`].

use noise::{NoiseFn, Perlin, Simplex};

/// A deterministic, continuous scalar field over the plane.
///
/// Implementations must return values in `[-1, 1]`, produce the same output
/// for the same input, and hold no mutable state so a sampler can be shared
/// across threads.
pub trait NoiseSampler: Send + Sync {
    /// Evaluate the field at `(x, z)`.
    fn sample(&self, x: f64, z: f64) -> f64;
}

/// Adapts a `noise` crate generator to [`NoiseSampler`], clamping to `[-1, 1]`.
///
/// Gradient noise implementations only approximately respect the unit range;
/// clamping keeps the terrain height bound exact.
#[derive(Clone, Debug)]
pub struct CoherentNoise<N> {
    source: N,
}

impl<N> CoherentNoise<N>
where
    N: NoiseFn<f64, 2>,
{
    /// Wrap an existing generator.
    pub fn new(source: N) -> Self {
        Self { source }
    }

    /// Borrow the wrapped generator.
    pub fn source(&self) -> &N {
        &self.source
    }
}

impl<N> NoiseSampler for CoherentNoise<N>
where
    N: NoiseFn<f64, 2> + Send + Sync,
{
    fn sample(&self, x: f64, z: f64) -> f64 {
        self.source.get([x, z]).clamp(-1.0, 1.0)
    }
}

/// Classic gradient noise, zero on integer lattice points.
pub type PerlinSampler = CoherentNoise<Perlin>;

/// Simplex noise, cheaper per octave and with fewer directional artifacts.
pub type SimplexSampler = CoherentNoise<Simplex>;

impl PerlinSampler {
    /// Perlin noise with the given permutation seed.
    pub fn seeded(seed: u32) -> Self {
        Self::new(Perlin::new(seed))
    }
}

impl SimplexSampler {
    /// Simplex noise with the given permutation seed.
    pub fn seeded(seed: u32) -> Self {
        Self::new(Simplex::new(seed))
    }
}

impl Default for PerlinSampler {
    fn default() -> Self {
        Self::seeded(0)
    }
}

/// Selects one of the built-in noise families.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoiseKind {
    /// [`PerlinSampler`].
    #[default]
    Perlin,
    /// [`SimplexSampler`].
    Simplex,
}

impl NoiseKind {
    /// Build a boxed sampler of this kind.
    pub fn sampler(self, seed: u32) -> Box<dyn NoiseSampler> {
        match self {
            Self::Perlin => Box::new(PerlinSampler::seeded(seed)),
            Self::Simplex => Box::new(SimplexSampler::seeded(seed)),
        }
    }
}
