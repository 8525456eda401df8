use std::fmt;

// SurfaceId
/// Globally unique identity of a tracked surface. Assigned once at creation
/// and never changed for the lifetime of the surface.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct SurfaceId(u128);

impl SurfaceId {
    pub fn from_u128(value: u128) -> Self {
        Self(value)
    }

    pub fn to_u128(&self) -> u128 {
        self.0
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        write!(
            f,
            "{:08X}-{:04X}-{:04X}-{:04X}-{:012X}",
            (value >> 96) as u32,
            (value >> 80) as u16,
            (value >> 64) as u16,
            (value >> 48) as u16,
            value & 0xFFFF_FFFF_FFFF,
        )
    }
}

// SurfaceIdGenerator
/// Produces random 128-bit ids. Participants generate ids independently, so
/// ids are drawn from the full 128-bit space rather than from a counter.
pub struct SurfaceIdGenerator {
    rng: fastrand::Rng,
}

impl SurfaceIdGenerator {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Deterministic generator, for tests and replays
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    pub fn generate(&mut self) -> SurfaceId {
        SurfaceId(self.rng.u128(..))
    }
}

impl Default for SurfaceIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
