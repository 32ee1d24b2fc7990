//! Kernel density estimation.

use std::f64::consts::PI;

/// Estimates the probability density of the `samples` at each of the
/// provided `points` with a Gaussian kernel of the given `bandwidth`.
///
/// Returns `[point, density]` pairs, or nothing if there are no samples.
#[must_use]
pub fn estimate(
    samples: &[f64],
    points: &[f64],
    bandwidth: f64,
) -> Vec<[f64; 2]> {
    if samples.is_empty() || bandwidth.is_nan() || bandwidth <= 0.0 {
        return Vec::new();
    }

    #[expect(clippy::cast_precision_loss, reason = "dataset is small")]
    let n = samples.len() as f64;
    points
        .iter()
        .map(|&x| {
            let sum = samples
                .iter()
                .map(|v| gaussian((x - v) / bandwidth))
                .sum::<f64>();
            [x, sum / (n * bandwidth)]
        })
        .collect()
}

/// Standard normal probability density.
fn gaussian(u: f64) -> f64 {
    (-0.5 * u * u).exp() / (2.0 * PI).sqrt()
}

/// Generates approximately `count` evenly spaced "nice" values (multiples of
/// 1, 2 or 5 times a power of ten) within `[start, stop]`.
#[must_use]
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let (lo, hi) = if start < stop {
        (start, stop)
    } else {
        (stop, start)
    };

    #[expect(clippy::cast_precision_loss, reason = "tick count is small")]
    let step = (hi - lo) / count as f64;
    let power = step.log10().floor();
    let error = step / 10_f64.powf(power);
    let factor = if error >= 50_f64.sqrt() {
        10.0
    } else if error >= 10_f64.sqrt() {
        5.0
    } else if error >= 2_f64.sqrt() {
        2.0
    } else {
        1.0
    };

    // Negative powers are divided by, keeping the ticks free of float noise.
    let (inc, divide) = if power < 0.0 {
        (10_f64.powf(-power) / factor, true)
    } else {
        (10_f64.powf(power) * factor, false)
    };
    let (first, last) = if divide {
        ((lo * inc).ceil(), (hi * inc).floor())
    } else {
        ((lo / inc).ceil(), (hi / inc).floor())
    };

    let mut values = Vec::new();
    let mut i = first;
    while i <= last {
        values.push(if divide { i / inc } else { i * inc });
        i += 1.0;
    }
    if start > stop {
        values.reverse();
    }
    values
}

#[cfg(test)]
mod spec {
    use std::f64::consts::PI;

    use super::{estimate, ticks};

    #[test]
    fn nice_ticks() {
        assert_eq!(
            ticks(0.0, 10.0, 10),
            (0..=10).map(f64::from).collect::<Vec<_>>(),
        );
        assert_eq!(
            ticks(0.0, 1000.0, 5),
            vec![0.0, 200.0, 400.0, 600.0, 800.0, 1000.0],
        );
        assert_eq!(ticks(0.0, 1.0, 4), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);

        let wide = ticks(0.0, 120_000.0, 50);
        assert_eq!(wide.len(), 61);
        assert_eq!(wide[1], 2000.0);
    }

    #[test]
    fn degenerate_ticks() {
        assert!(ticks(0.0, 10.0, 0).is_empty());
        assert!(ticks(0.0, f64::NAN, 10).is_empty());
        assert_eq!(ticks(5.0, 5.0, 10), vec![5.0]);
        assert_eq!(ticks(2.0, 0.0, 2), vec![2.0, 1.0, 0.0]);
    }

    #[test]
    fn density_peaks_at_sample() {
        let density = estimate(&[100.0], &[0.0, 100.0, 200.0], 50.0);

        assert_eq!(density.len(), 3);
        assert!(density[1][1] > density[0][1]);
        assert!((density[0][1] - density[2][1]).abs() < 1e-12);

        let peak = 1.0 / (50.0 * (2.0 * PI).sqrt());
        assert!((density[1][1] - peak).abs() < 1e-12);
    }

    #[test]
    fn no_samples_no_density() {
        assert!(estimate(&[], &[0.0, 1.0], 200.0).is_empty());
        assert!(estimate(&[1.0], &[0.0, 1.0], 0.0).is_empty());
    }
}
