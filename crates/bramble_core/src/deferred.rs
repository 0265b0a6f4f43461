//! Deferred processing chains.
//!
//! A [`DeferredChain`] runs its links across multiple discrete ticks instead
//! of atomically. At most one link is active at a time; a link signals its own
//! completion by returning [`LinkStatus::Finished`] from `update`, which hands
//! its output to the next link. When the last link finishes, the chain yields
//! the final value from `update` exactly once.
//!
//! There is no error channel and no timeout: a link that never finishes stalls
//! the chain forever. That mirrors the cooperative model of the rest of the
//! crate - detection of misbehaving stages belongs to the caller.

/// Progress report of a deferred link for one tick.
#[derive(Debug)]
pub enum LinkStatus<T> {
    /// The link needs more ticks.
    Running,
    /// The link completed and produced its output.
    Finished(T),
}

/// A processing stage spread over more than one tick.
pub trait DeferredLink<T> {
    /// Hands the link its input and begins processing. Calling `start` on a
    /// link that is already running silently restarts it.
    fn start(&mut self, input: T);

    /// Advances the link by `dt` seconds. Returns
    /// [`LinkStatus::Finished`] exactly once per `start`.
    fn update(&mut self, dt: f32) -> LinkStatus<T>;
}

/// Execution state of a [`DeferredChain`].
enum ChainState<T> {
    /// Nothing started yet, or a run was consumed.
    Idle,
    /// Started with no links; completes with the cached input on the next
    /// update.
    Pending(T),
    /// The link at this index is active.
    Running(usize),
    /// The run completed and its value was already yielded.
    Finished,
}

/// An ordered composition of [`DeferredLink`] stages executed across ticks.
///
/// # Example
///
/// ```
/// use bramble_core::{DeferredChain, TimedStep};
///
/// let mut chain = DeferredChain::new()
///     .link(TimedStep::new(0.5, |v: i32| v + 1))
///     .link(TimedStep::new(0.5, |v: i32| v * 2));
///
/// chain.start_processing(3);
/// let mut finished = None;
/// while finished.is_none() {
///     finished = chain.update(0.25);
/// }
/// assert_eq!(finished, Some(8));
/// ```
pub struct DeferredChain<T> {
    /// Links in processing order.
    links: Vec<Box<dyn DeferredLink<T>>>,
    /// Current execution state.
    state: ChainState<T>,
}

impl<T> DeferredChain<T> {
    /// Creates a new empty deferred chain.
    #[must_use]
    pub fn new() -> Self {
        Self {
            links: Vec::new(),
            state: ChainState::Idle,
        }
    }

    /// Links (appends) a new stage and returns the chain for fluent
    /// composition.
    #[must_use]
    pub fn link(mut self, link: impl DeferredLink<T> + 'static) -> Self {
        self.links.push(Box::new(link));
        self
    }

    /// Starts a new run with `input`.
    ///
    /// If a previous run is still in flight it is cancelled silently; no
    /// completion fires for it.
    pub fn start_processing(&mut self, input: T) {
        if self.links.is_empty() {
            self.state = ChainState::Pending(input);
        } else {
            self.links[0].start(input);
            self.state = ChainState::Running(0);
        }
    }

    /// Advances the active link by `dt` seconds.
    ///
    /// Returns `Some(final_value)` on the tick the last link completes, and
    /// `None` on every other tick. The value is yielded exactly once per
    /// [`DeferredChain::start_processing`] call.
    pub fn update(&mut self, dt: f32) -> Option<T> {
        match std::mem::replace(&mut self.state, ChainState::Idle) {
            ChainState::Idle => None,
            ChainState::Finished => {
                self.state = ChainState::Finished;
                None
            }
            ChainState::Pending(value) => {
                self.state = ChainState::Finished;
                Some(value)
            }
            ChainState::Running(index) => match self.links[index].update(dt) {
                LinkStatus::Running => {
                    self.state = ChainState::Running(index);
                    None
                }
                LinkStatus::Finished(value) => {
                    let next = index + 1;
                    if next < self.links.len() {
                        // Activation is immediate; the new link first runs on
                        // the next tick.
                        self.links[next].start(value);
                        self.state = ChainState::Running(next);
                        None
                    } else {
                        self.state = ChainState::Finished;
                        Some(value)
                    }
                }
            },
        }
    }

    /// Whether no run has been started (or the last run was consumed).
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self.state, ChainState::Idle)
    }

    /// Whether a run is currently in flight.
    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.state, ChainState::Running(_) | ChainState::Pending(_))
    }

    /// Whether the last run completed and yielded its value.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.state, ChainState::Finished)
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

impl<T> Default for DeferredChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A deferred chain is itself a deferred link, enabling nested multi-tick
/// pipelines.
impl<T> DeferredLink<T> for DeferredChain<T> {
    fn start(&mut self, input: T) {
        self.start_processing(input);
    }

    fn update(&mut self, dt: f32) -> LinkStatus<T> {
        match DeferredChain::update(self, dt) {
            Some(value) => LinkStatus::Finished(value),
            None => LinkStatus::Running,
        }
    }
}

/// A deferred link that holds its input for a fixed duration, then applies a
/// transform and finishes.
pub struct TimedStep<T> {
    /// Seconds the step takes to complete.
    duration: f32,
    /// Seconds accumulated since `start`.
    elapsed: f32,
    /// Transform applied on completion.
    transform: Box<dyn FnMut(T) -> T>,
    /// Input cached between `start` and completion.
    value: Option<T>,
}

impl<T> TimedStep<T> {
    /// Creates a step completing after `duration` seconds with `transform`
    /// applied to its input.
    pub fn new(duration: f32, transform: impl FnMut(T) -> T + 'static) -> Self {
        Self {
            duration,
            elapsed: 0.0,
            transform: Box::new(transform),
            value: None,
        }
    }
}

impl<T> DeferredLink<T> for TimedStep<T> {
    fn start(&mut self, input: T) {
        self.elapsed = 0.0;
        self.value = Some(input);
    }

    fn update(&mut self, dt: f32) -> LinkStatus<T> {
        let Some(value) = self.value.take() else {
            // Not started, or already finished.
            return LinkStatus::Running;
        };

        self.elapsed += dt;
        if self.elapsed >= self.duration {
            LinkStatus::Finished((self.transform)(value))
        } else {
            self.value = Some(value);
            LinkStatus::Running
        }
    }
}
