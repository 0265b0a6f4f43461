//! Stepped processing chains.
//!
//! The stepped variant of [`crate::Chain`]: every stage receives the tick's
//! delta time alongside the value. The whole chain still completes within a
//! single call; for work spread across ticks use [`crate::DeferredChain`].

/// A processing stage fed with the current tick's delta time.
pub trait SteppedLink<T> {
    /// Processes the given value using `dt`, the time in seconds since the
    /// last tick, and returns the result.
    fn process(&mut self, dt: f32, input: T) -> T;
}

/// Any `FnMut(f32, T) -> T` closure is a valid stepped link.
impl<T, F> SteppedLink<T> for F
where
    F: FnMut(f32, T) -> T,
{
    fn process(&mut self, dt: f32, input: T) -> T {
        self(dt, input)
    }
}

/// An ordered composition of [`SteppedLink`] stages.
///
/// Same contract as [`crate::Chain`]: append order is processing order, the
/// empty chain is the identity, and the chain is itself a stepped link.
pub struct SteppedChain<T> {
    /// Links in processing order.
    links: Vec<Box<dyn SteppedLink<T>>>,
}

impl<T> SteppedChain<T> {
    /// Creates a new empty stepped chain.
    #[must_use]
    pub fn new() -> Self {
        Self { links: Vec::new() }
    }

    /// Links (appends) a new stage and returns the chain for fluent
    /// composition.
    #[must_use]
    pub fn link(mut self, link: impl SteppedLink<T> + 'static) -> Self {
        self.links.push(Box::new(link));
        self
    }

    /// Folds `input` left-to-right through every linked stage, handing each
    /// the same delta time.
    pub fn process(&mut self, dt: f32, input: T) -> T {
        let mut result = input;
        for link in &mut self.links {
            result = link.process(dt, result);
        }
        result
    }

    /// Number of linked stages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether the chain has no stages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl<T> Default for SteppedChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SteppedLink<T> for SteppedChain<T> {
    fn process(&mut self, dt: f32, input: T) -> T {
        SteppedChain::process(self, dt, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_chain_is_identity() {
        let mut chain: SteppedChain<f32> = SteppedChain::new();
        assert!((chain.process(0.016, 1.5) - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn every_stage_sees_the_same_dt() {
        let mut chain = SteppedChain::new()
            .link(|dt: f32, v: f32| v + dt)
            .link(|dt: f32, v: f32| v + dt * 2.0);

        let result = chain.process(0.5, 0.0);
        assert!((result - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn stepped_chains_nest() {
        let inner = SteppedChain::new().link(|dt: f32, v: f32| v * dt);
        let mut outer = SteppedChain::new().link(|_dt: f32, v: f32| v + 1.0).link(inner);
        let result = outer.process(2.0, 1.0);
        assert!((result - 4.0).abs() < f32::EPSILON);
    }
}
