use crate::generator::catalog::Family;
use benchcore::math::{FftHelper, MatrixHelper};
use ndarray::Array2;
use std::hint::black_box;
use std::time::Instant;

/// Repetitions per timing so short kernels still register in microseconds.
const REPETITIONS: usize = 32;

/// Reference and accelerated timings, in microseconds.
#[derive(Debug, Clone, Copy)]
pub struct Measurement {
    pub time_reference: f64,
    pub time_accelerated: f64,
}

fn time_us<F: FnMut()>(mut body: F) -> f64 {
    let start = Instant::now();
    for _ in 0..REPETITIONS {
        body();
    }
    (start.elapsed().as_secs_f64() * 1e6).round()
}

/// Times the reference and accelerated kernel of `family` at size step `variant`.
pub fn measure(family: Family, variant: usize) -> Measurement {
    match family {
        Family::Math => measure_math(1024 << variant.min(6)),
        Family::Matrix => measure_matrix(8 * (variant + 1)),
        Family::Filter => measure_filter(64 << variant.min(6)),
    }
}

fn ramp(len: usize) -> Vec<f32> {
    (0..len).map(|i| ((i % 97) as f32 - 48.0) / 16.0).collect()
}

fn measure_math(len: usize) -> Measurement {
    let lhs = ramp(len);
    let rhs: Vec<f32> = lhs.iter().rev().copied().collect();
    let mut out = vec![0.0_f32; len];

    let time_reference = time_us(|| {
        for i in 0..black_box(len) {
            out[i] = black_box(lhs[i]) * rhs[i] + 0.5;
        }
        black_box(&out);
    });

    let time_accelerated = time_us(|| {
        for ((dst, a), b) in out
            .chunks_exact_mut(4)
            .zip(lhs.chunks_exact(4))
            .zip(rhs.chunks_exact(4))
        {
            dst[0] = a[0] * b[0] + 0.5;
            dst[1] = a[1] * b[1] + 0.5;
            dst[2] = a[2] * b[2] + 0.5;
            dst[3] = a[3] * b[3] + 0.5;
        }
        black_box(&out);
    });

    Measurement {
        time_reference,
        time_accelerated,
    }
}

fn measure_matrix(dim: usize) -> Measurement {
    let lhs = Array2::from_shape_fn((dim, dim), |(i, j)| ((i * 7 + j * 3) % 11) as f32 / 11.0);
    let rhs = lhs.t().to_owned();

    let time_reference = time_us(|| {
        black_box(MatrixHelper::multiply_naive(lhs.view(), rhs.view()));
    });
    let time_accelerated = time_us(|| {
        black_box(MatrixHelper::multiply(lhs.view(), rhs.view()));
    });

    Measurement {
        time_reference,
        time_accelerated,
    }
}

fn measure_filter(len: usize) -> Measurement {
    let helper = FftHelper::new(len);
    let input = ramp(len);

    let time_reference = time_us(|| {
        black_box(helper.naive_forward(&input));
    });
    let time_accelerated = time_us(|| {
        black_box(helper.forward(&input));
    });

    Measurement {
        time_reference,
        time_accelerated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_family_reports_non_negative_timings() {
        for family in [Family::Math, Family::Matrix, Family::Filter] {
            let measurement = measure(family, 0);
            assert!(measurement.time_reference >= 0.0);
            assert!(measurement.time_accelerated >= 0.0);
        }
    }
}
