//! Noise generators as chain links.
//!
//! Every generator here is a [`ChainLink`] over a buffer of `f32` samples.
//! The multiplicative generators share one contract: samples already in the
//! buffer are scaled by the generator's own signal, then fresh samples are
//! appended until the buffer holds the generator's configured count.
//! Starting a chain with an empty buffer therefore yields pure output of the
//! first link; stacking links multiplies their signals.
//! [`LayeredSineNoise`] is additive instead: it sums weighted octaves into
//! the buffer and normalizes.

use std::f32::consts::PI;

use bramble_core::{Chain, ChainLink};

use crate::rng::{RandomSource, UniformRandom};

/// Fixed base-number table used by [`ConstantNoise`].
const BASE_NUMBERS: [f32; 6] = [0.618, 0.314_15, 0.9, 1.0, 0.4, 0.1];

/// Deterministic pseudo-noise from a fixed base-number table.
///
/// Useful as a cheap, seedless stand-in when real randomness is not wanted.
pub struct ConstantNoise {
    /// Samples the buffer is filled up to.
    count: usize,
}

impl ConstantNoise {
    /// Creates a generator filling the buffer up to `count` samples.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl ChainLink<Vec<f32>> for ConstantNoise {
    fn process(&mut self, mut input: Vec<f32>) -> Vec<f32> {
        for (i, sample) in input.iter_mut().enumerate() {
            *sample *= BASE_NUMBERS[i % BASE_NUMBERS.len()];
        }

        let missing = self.count.saturating_sub(input.len());
        for i in 0..missing {
            input.push(BASE_NUMBERS[i % BASE_NUMBERS.len()]);
        }

        input
    }
}

/// Uniform white noise in `[0, 1)`.
pub struct WhiteNoise {
    /// Owned random source; one draw per sample.
    rng: UniformRandom,
    /// Samples the buffer is filled up to.
    count: usize,
}

impl WhiteNoise {
    /// Creates a seeded generator filling the buffer up to `count` samples.
    #[must_use]
    pub fn new(seed: u64, count: usize) -> Self {
        Self {
            rng: UniformRandom::new(seed),
            count,
        }
    }
}

impl ChainLink<Vec<f32>> for WhiteNoise {
    fn process(&mut self, mut input: Vec<f32>) -> Vec<f32> {
        for sample in &mut input {
            *sample *= self.rng.next_float();
        }

        let missing = self.count.saturating_sub(input.len());
        for _ in 0..missing {
            input.push(self.rng.next_float());
        }

        input
    }
}

/// Folds every sample with its right-hand neighbour through a smoothing
/// function. The last sample has no neighbour and is left untouched.
pub struct NeighbourSmooth {
    /// Combiner invoked as `(sample, right_neighbour)`.
    smooth: Box<dyn FnMut(f32, f32) -> f32>,
}

impl NeighbourSmooth {
    /// Creates a smoother from the given combining function.
    pub fn new(smooth: impl FnMut(f32, f32) -> f32 + 'static) -> Self {
        Self {
            smooth: Box::new(smooth),
        }
    }
}

impl ChainLink<Vec<f32>> for NeighbourSmooth {
    fn process(&mut self, mut input: Vec<f32>) -> Vec<f32> {
        for index in 0..input.len().saturating_sub(1) {
            input[index] = (self.smooth)(input[index], input[index + 1]);
        }
        input
    }
}

/// Clamps a smooth factor into `[-1, 1]`.
fn clamp_smooth(factor: f32) -> f32 {
    factor.clamp(-1.0, 1.0)
}

/// Low-frequency-leaning noise: white noise with neighbouring samples summed
/// and scaled.
pub struct RedNoise {
    /// White noise followed by the smoothing pass.
    chain: Chain<Vec<f32>>,
}

impl RedNoise {
    /// Creates a seeded generator producing `count` samples. `smooth_factor`
    /// is clamped into `[-1, 1]`.
    #[must_use]
    pub fn new(seed: u64, count: usize, smooth_factor: f32) -> Self {
        let factor = clamp_smooth(smooth_factor);
        let chain = Chain::new()
            .link(WhiteNoise::new(seed, count))
            .link(NeighbourSmooth::new(move |a, b| factor * (a + b)));

        Self { chain }
    }
}

impl ChainLink<Vec<f32>> for RedNoise {
    fn process(&mut self, input: Vec<f32>) -> Vec<f32> {
        self.chain.process(input)
    }
}

/// High-frequency-leaning noise: white noise with neighbouring samples
/// inverted around one and scaled.
pub struct VioletNoise {
    /// White noise followed by the inverting smoothing pass.
    chain: Chain<Vec<f32>>,
}

impl VioletNoise {
    /// Creates a seeded generator producing `count` samples. `smooth_factor`
    /// is clamped into `[-1, 1]`.
    #[must_use]
    pub fn new(seed: u64, count: usize, smooth_factor: f32) -> Self {
        let factor = clamp_smooth(smooth_factor);
        let chain = Chain::new()
            .link(WhiteNoise::new(seed, count))
            .link(NeighbourSmooth::new(move |a, b| {
                factor * (1.0 - (a + b)).abs()
            }));

        Self { chain }
    }
}

impl ChainLink<Vec<f32>> for VioletNoise {
    fn process(&mut self, input: Vec<f32>) -> Vec<f32> {
        self.chain.process(input)
    }
}

/// Sine wave with a random phase offset per `process` call, rescaled into
/// `[0, 1]` so stacked generators never flip signs.
pub struct SineNoise {
    /// Random source for the phase draw.
    rng: UniformRandom,
    /// Samples the buffer is filled up to.
    count: usize,
    /// Full cycles over the buffer.
    frequency: f32,
}

impl SineNoise {
    /// Creates a seeded generator producing `count` samples with `frequency`
    /// cycles over the buffer.
    #[must_use]
    pub fn new(seed: u64, count: usize, frequency: f32) -> Self {
        Self {
            rng: UniformRandom::new(seed),
            count,
            frequency,
        }
    }

    /// Sine sample lifted into `[0, 1]`.
    fn sine(frequency: f32, x: f32, length: f32, phase: f32) -> f32 {
        let pi2 = 2.0 * PI;
        0.5 + 0.5 * (pi2 * frequency * x / length + phase).sin()
    }
}

impl ChainLink<Vec<f32>> for SineNoise {
    fn process(&mut self, mut input: Vec<f32>) -> Vec<f32> {
        let phase = self.rng.range_float(0.0, 2.0 * PI);

        let length = input.len() as f32;
        for (i, sample) in input.iter_mut().enumerate() {
            *sample *= Self::sine(self.frequency, i as f32, length, phase);
        }

        let missing = self.count.saturating_sub(input.len());
        for i in 0..missing {
            input.push(Self::sine(self.frequency, i as f32, missing as f32, phase));
        }

        input
    }
}

/// Multiplies every sample by a fixed amplitude. Appends nothing.
pub struct AmplitudeScale {
    /// The scale factor.
    amplitude: f32,
}

impl AmplitudeScale {
    /// Creates a scaler with the given amplitude.
    #[must_use]
    pub fn new(amplitude: f32) -> Self {
        Self { amplitude }
    }
}

impl ChainLink<Vec<f32>> for AmplitudeScale {
    fn process(&mut self, mut input: Vec<f32>) -> Vec<f32> {
        for sample in &mut input {
            *sample *= self.amplitude;
        }
        input
    }
}

/// Octave frequencies summed by [`LayeredSineNoise`].
const OCTAVE_FREQUENCIES: [f32; 6] = [1.0, 2.0, 4.0, 8.0, 16.0, 32.0];

/// Weighted sum of sine octaves, normalized by the running maximum so the
/// result stays within `[0, 1]` for non-negative amplitude weights.
///
/// Only the first `count` samples are summed and normalized; a buffer
/// already longer than `count` keeps its tail samples untouched.
pub struct LayeredSineNoise {
    /// Seed shared by every octave.
    seed: u64,
    /// Samples produced.
    count: usize,
    /// Weight per octave frequency.
    amplitude: Box<dyn Fn(f32) -> f32>,
}

impl LayeredSineNoise {
    /// Creates a seeded generator producing `count` samples; `amplitude` maps
    /// an octave frequency to its weight.
    pub fn new(seed: u64, count: usize, amplitude: impl Fn(f32) -> f32 + 'static) -> Self {
        Self {
            seed,
            count,
            amplitude: Box::new(amplitude),
        }
    }
}

impl ChainLink<Vec<f32>> for LayeredSineNoise {
    fn process(&mut self, mut input: Vec<f32>) -> Vec<f32> {
        if input.len() < self.count {
            input.resize(self.count, 0.0);
        }

        let mut max_value = 0.0_f32;
        for frequency in OCTAVE_FREQUENCIES {
            let weight = (self.amplitude)(frequency);
            let octave = SineNoise::new(self.seed, self.count, frequency).process(Vec::new());

            for (sample, value) in input.iter_mut().zip(octave) {
                *sample += weight * value;
                max_value = max_value.max(*sample);
            }
        }

        if max_value > 0.0 {
            for sample in input.iter_mut().take(self.count) {
                *sample /= max_value;
            }
        }

        input
    }
}
