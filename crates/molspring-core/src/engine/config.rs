/// Options for one derivation run.
///
/// The engine has no runtime-tunable layout parameters (those live in
/// [`LayoutTuning`](crate::core::layout::LayoutTuning) and are consumed by the
/// external simulation); the only knob is the distance smoothing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DerivationConfig {
    /// Uniformize ring spring lengths after distance annotation: every order-2 ring
    /// edge's distance is overwritten with the mean over the order-2 ring edges, and
    /// the first three order-3 edges' distances with their mean. Off by default;
    /// enabling it on a structure with fewer than three order-3 edges is an error.
    pub smooth_ring_distances: bool,
}

impl DerivationConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
