use rand::{Rng, SeedableRng, rngs::StdRng};

/// A source of uniformly distributed integers.
///
/// The boundary generator only ever asks for half-open integer ranges, so this is
/// the whole surface it needs. Tests can script the exact draws; production wires
/// in an `RngSource`.
pub trait UniformSource {
    /// Draws an integer uniformly from `[low, high)`.
    ///
    /// # Panics
    /// Implementations may panic if `low >= high`.
    fn next_int(&mut self, low: i32, high: i32) -> i32;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    fn next_int(&mut self, low: i32, high: i32) -> i32 {
        (**self).next_int(low, high)
    }
}

/// Adapts any `rand::Rng` into a `UniformSource`.
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<StdRng> {
    /// A reproducible source, for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// A ChaCha-backed source seeded from the operating system.
    pub fn from_os() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> UniformSource for RngSource<R> {
    fn next_int(&mut self, low: i32, high: i32) -> i32 {
        self.rng.random_range(low..high)
    }
}
