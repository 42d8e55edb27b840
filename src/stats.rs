use crate::error::{Error, Result};

// Two-sided 95% Student-t critical values for 1..=30 degrees of freedom.
const T_975: [f64; 30] = [
    12.706204736,
    4.302652730,
    3.182446305,
    2.776445105,
    2.570581836,
    2.446911851,
    2.364624252,
    2.306004135,
    2.262157163,
    2.228138852,
    2.200985160,
    2.178812830,
    2.160368656,
    2.144786688,
    2.131449546,
    2.119905299,
    2.109815578,
    2.100922040,
    2.093024054,
    2.085963447,
    2.079613845,
    2.073873068,
    2.068657610,
    2.063898562,
    2.059538553,
    2.055529439,
    2.051830516,
    2.048407142,
    2.045229642,
    2.042272456,
];

// Standard normal 0.975 quantile.
const Z_975: f64 = 1.959963984540054;

/// Mean and 95% confidence half-width of a set of timing samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub std_dev: f64,
    pub half_width: f64,
}

impl Summary {
    pub fn from_samples(samples: &[f64]) -> Result<Summary> {
        if samples.len() < 2 {
            return Err(Error::InvalidConfiguration(format!(
                "need at least 2 samples for a confidence interval, got {}",
                samples.len()
            )));
        }
        let n = samples.len();
        let mean = mean(samples);
        let std_dev = sample_std_dev(samples, mean);
        let half_width = t_critical_95(n - 1) * std_dev / (n as f64).sqrt();
        Ok(Summary {
            mean,
            std_dev,
            half_width,
        })
    }
}

pub fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Unbiased standard deviation (divisor n - 1).
pub fn sample_std_dev(samples: &[f64], mean: f64) -> f64 {
    let squares: f64 = samples.iter().map(|x| (x - mean).powi(2)).sum();
    (squares / (samples.len() - 1) as f64).sqrt()
}

/// The 0.975 quantile of Student's t with `df` degrees of freedom.
///
/// Exact to nine digits up to 30 degrees of freedom; above that the Cornish-Fisher
/// expansion around the normal quantile is accurate to better than 1e-6.
pub(crate) fn t_critical_95(df: usize) -> f64 {
    assert!(df > 0, "t distribution needs at least one degree of freedom");
    if df <= T_975.len() {
        return T_975[df - 1];
    }
    let z = Z_975;
    let v = df as f64;
    let g1 = (z.powi(3) + z) / 4.0;
    let g2 = (5.0 * z.powi(5) + 16.0 * z.powi(3) + 3.0 * z) / 96.0;
    let g3 = (3.0 * z.powi(7) + 19.0 * z.powi(5) + 17.0 * z.powi(3) - 15.0 * z) / 384.0;
    let g4 = (79.0 * z.powi(9) + 776.0 * z.powi(7) + 1482.0 * z.powi(5)
        - 1920.0 * z.powi(3)
        - 945.0 * z)
        / 92160.0;
    z + g1 / v + g2 / v.powi(2) + g3 / v.powi(3) + g4 / v.powi(4)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn table_values() {
        assert!(close(t_critical_95(1), 12.7062, 1e-4));
        assert!(close(t_critical_95(4), 2.7764, 1e-4));
        assert!(close(t_critical_95(9), 2.2622, 1e-4));
    }

    #[test]
    fn expansion_joins_table() {
        assert!(close(t_critical_95(31), 2.039513, 1e-5));
        assert!(close(t_critical_95(60), 2.000298, 1e-5));
        assert!(close(t_critical_95(120), 1.979930, 1e-5));
        assert!(t_critical_95(31) < t_critical_95(30));
    }

    #[test]
    fn approaches_normal_quantile() {
        assert!(close(t_critical_95(1_000_000), Z_975, 1e-5));
    }

    #[test]
    fn summary_of_known_samples() {
        let summary = Summary::from_samples(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!(close(summary.mean, 5.0, 1e-12));
        // sum of squares 32, divisor 7
        assert!(close(summary.std_dev, (32.0f64 / 7.0).sqrt(), 1e-12));
        let expected = 2.364624252 * summary.std_dev / 8.0f64.sqrt();
        assert!(close(summary.half_width, expected, 1e-12));
    }

    #[test]
    fn constant_samples_have_zero_width() {
        let summary = Summary::from_samples(&[0.5; 10]).unwrap();
        assert_eq!(summary.mean, 0.5);
        assert_eq!(summary.half_width, 0.0);
    }

    #[test]
    fn single_sample_is_rejected() {
        assert!(matches!(
            Summary::from_samples(&[1.0]),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(Summary::from_samples(&[]).is_err());
    }
}
