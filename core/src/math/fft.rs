use num_complex::Complex32;
use rustfft::{num_traits::Zero, Fft, FftPlanner};
use std::f32::consts::PI;

/// Wraps a planned forward transform so repeated benchmark runs reuse it.
pub struct FftHelper {
    fft: std::sync::Arc<dyn Fft<f32>>,
    len: usize,
}

impl FftHelper {
    pub fn new(size: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(size);
        Self { fft, len: size }
    }

    /// Planned transform; input is zero-padded or truncated to the plan size.
    pub fn forward(&self, input: &[f32]) -> Vec<Complex32> {
        let mut buffer = to_complex(input, self.len);
        self.fft.process(&mut buffer);
        buffer
    }

    /// Direct O(n^2) DFT used as the reference path.
    pub fn naive_forward(&self, input: &[f32]) -> Vec<Complex32> {
        let buffer = to_complex(input, self.len);
        let n = self.len as f32;
        (0..self.len)
            .map(|k| {
                buffer
                    .iter()
                    .enumerate()
                    .fold(Complex32::zero(), |acc, (t, value)| {
                        let angle = -2.0 * PI * (k as f32) * (t as f32) / n;
                        acc + value * Complex32::new(angle.cos(), angle.sin())
                    })
            })
            .collect()
    }
}

fn to_complex(input: &[f32], len: usize) -> Vec<Complex32> {
    let mut buffer: Vec<Complex32> = input
        .iter()
        .take(len)
        .map(|&value| Complex32::new(value, 0.0))
        .collect();
    buffer.resize(len, Complex32::zero());
    buffer
}
