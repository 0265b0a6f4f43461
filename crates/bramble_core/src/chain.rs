//! Atomic processing chains.
//!
//! A [`Chain`] folds a value through an ordered sequence of [`ChainLink`]
//! stages in append order. Chains are themselves links, so pipelines nest.

/// A single processing stage transforming a value of type `T` into a value of
/// the same type.
///
/// Links own no input: the value moves in, the (possibly mutated) value moves
/// out. Stages may carry parameters or internal state (for example a random
/// source), which is why `process` takes `&mut self`.
pub trait ChainLink<T> {
    /// Processes the given value and returns the result.
    fn process(&mut self, input: T) -> T;
}

/// Any `FnMut(T) -> T` closure is a valid chain link.
impl<T, F> ChainLink<T> for F
where
    F: FnMut(T) -> T,
{
    fn process(&mut self, input: T) -> T {
        self(input)
    }
}

/// An ordered composition of [`ChainLink`] stages.
///
/// The chain owns its links; the only way to extend it is [`Chain::link`], so
/// processing order always equals append order. An empty chain is the
/// identity transform.
///
/// # Example
///
/// ```
/// use bramble_core::{Chain, ChainLink};
///
/// let mut chain = Chain::new()
///     .link(|v: i32| v + 1)
///     .link(|v: i32| v * 2);
///
/// assert_eq!(chain.process(3), 8);
/// ```
pub struct Chain<T> {
    /// Links in processing order.
    links: Vec<Box<dyn ChainLink<T>>>,
}

impl<T> Chain<T> {
    /// Creates a new empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self { links: Vec::new() }
    }

    /// Links (appends) a new stage and returns the chain for fluent
    /// composition.
    #[must_use]
    pub fn link(mut self, link: impl ChainLink<T> + 'static) -> Self {
        self.links.push(Box::new(link));
        self
    }

    /// Folds `input` left-to-right through every linked stage.
    pub fn process(&mut self, input: T) -> T {
        let mut result = input;
        for link in &mut self.links {
            result = link.process(result);
        }
        result
    }

    /// Number of linked stages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether the chain has no stages (and is therefore the identity).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A chain is itself a valid link, enabling nested pipelines.
impl<T> ChainLink<T> for Chain<T> {
    fn process(&mut self, input: T) -> T {
        Chain::process(self, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_chain_is_identity() {
        let mut chain: Chain<i32> = Chain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.process(42), 42);
    }

    #[test]
    fn processes_in_append_order() {
        // (3 + 1) * 2 = 8, not (3 * 2) + 1 = 7
        let mut chain = Chain::new().link(|v: i32| v + 1).link(|v: i32| v * 2);
        assert_eq!(chain.process(3), 8);
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn equals_manual_left_fold() {
        let transforms: [fn(i64) -> i64; 3] = [|v| v + 7, |v| v * v, |v| v - 1];

        let mut chain = Chain::new();
        for f in transforms {
            chain = chain.link(f);
        }

        let mut expected = 5_i64;
        for mut f in transforms {
            expected = f.process(expected);
        }

        assert_eq!(chain.process(5), expected);
    }

    #[test]
    fn chains_nest_as_links() {
        let inner = Chain::new().link(|v: i32| v * 10);
        let mut outer = Chain::new().link(|v: i32| v + 1).link(inner);
        assert_eq!(outer.process(1), 20);
    }

    #[test]
    fn stateful_link_keeps_state_between_calls() {
        struct Counter {
            calls: i32,
        }

        impl ChainLink<i32> for Counter {
            fn process(&mut self, input: i32) -> i32 {
                self.calls += 1;
                input + self.calls
            }
        }

        let mut chain = Chain::new().link(Counter { calls: 0 });
        assert_eq!(chain.process(0), 1);
        assert_eq!(chain.process(0), 2);
    }
}
