//! Simulation lifecycle and the fixed-timestep loop.
//!
//! A [`Simulation`] is driven entirely by [`SimulationLoop`]: variable ticks
//! carry frame-rate-dependent work, fixed ticks carry deterministic work, and
//! queued events are flushed once at the end of every step. Everything runs
//! on the calling thread.

use bramble_core::EventManager;

use crate::config::SimulationConfig;

/// Named lifecycle phases of a simulation.
///
/// Every callback has a default empty body; implementors override only the
/// phases they use. The loop passes the event manager in so phases can
/// subscribe and raise without owning it.
pub trait Simulation {
    /// Runs once before the first tick.
    fn on_init(&mut self, events: &mut EventManager) {
        let _ = events;
    }

    /// Runs once per step with the variable delta time.
    fn on_tick(&mut self, dt: f32, events: &mut EventManager) {
        let _ = (dt, events);
    }

    /// Runs zero or more times per step, always with the same fixed delta.
    fn on_fixed_tick(&mut self, fixed_dt: f32, events: &mut EventManager) {
        let _ = (fixed_dt, events);
    }

    /// Runs once after the final tick.
    fn on_teardown(&mut self, events: &mut EventManager) {
        let _ = events;
    }
}

/// Fixed-timestep driver for a [`Simulation`].
///
/// Owns the [`EventManager`] and a time accumulator. Each [`step`] runs one
/// variable tick, as many fixed ticks as the accumulator covers, then one
/// event dispatch pass, so handlers always observe a consistent end-of-step
/// world.
///
/// [`step`]: SimulationLoop::step
pub struct SimulationLoop {
    /// The shared event bus.
    events: EventManager,
    /// Loop settings.
    config: SimulationConfig,
    /// Completed step count.
    tick: u64,
    /// Unspent simulation time owed to fixed ticks.
    accumulator: f32,
}

impl SimulationLoop {
    /// Creates a loop from validated settings.
    #[must_use]
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            events: EventManager::new(),
            config,
            tick: 0,
            accumulator: 0.0,
        }
    }

    /// The event manager, for wiring subscriptions outside a tick.
    pub fn events_mut(&mut self) -> &mut EventManager {
        &mut self.events
    }

    /// The loop settings.
    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Number of completed steps.
    #[must_use]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Advances the simulation by `dt` seconds of real time.
    pub fn step(&mut self, simulation: &mut impl Simulation, dt: f32) {
        tracing::trace!(tick = self.tick, dt, "simulation step");

        simulation.on_tick(dt, &mut self.events);

        self.accumulator += dt;
        let fixed_dt = self.config.fixed_timestep;
        while self.accumulator >= fixed_dt {
            self.accumulator -= fixed_dt;
            simulation.on_fixed_tick(fixed_dt, &mut self.events);
        }

        self.events.dispatch_raised_events();
        self.tick += 1;
    }

    /// Drives a full lifecycle: init, `ticks` steps at the configured tick
    /// rate, teardown. A final dispatch pass follows teardown so events
    /// raised there still reach their handlers.
    pub fn run(&mut self, simulation: &mut impl Simulation, ticks: u64) {
        simulation.on_init(&mut self.events);

        let dt = self.config.delta_time();
        for _ in 0..ticks {
            self.step(simulation, dt);
        }

        simulation.on_teardown(&mut self.events);
        self.events.dispatch_raised_events();
    }
}
