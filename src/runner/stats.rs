/// Aggregate timing of one benchmark session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean_ms: f64,
    /// Population standard deviation; 0 for a single run.
    pub stdev_ms: f64,
    pub best_ms: f64,
    pub gflops: f64,
}

impl Summary {
    /// Summarise per-run timings of an N×N multiply.
    ///
    /// An empty sample list yields all zeros.
    pub fn from_samples(samples_ms: &[f64], n: usize) -> Self {
        if samples_ms.is_empty() {
            return Summary {
                mean_ms: 0.0,
                stdev_ms: 0.0,
                best_ms: 0.0,
                gflops: 0.0,
            };
        }

        let count = samples_ms.len() as f64;
        let mean_ms = samples_ms.iter().sum::<f64>() / count;
        let stdev_ms = if samples_ms.len() > 1 {
            let var = samples_ms
                .iter()
                .map(|x| (x - mean_ms) * (x - mean_ms))
                .sum::<f64>()
                / count;
            var.sqrt()
        } else {
            0.0
        };
        let best_ms = samples_ms.iter().copied().fold(f64::INFINITY, f64::min);

        Summary {
            mean_ms,
            stdev_ms,
            best_ms,
            gflops: gflops(n, mean_ms),
        }
    }
}

/// Throughput of an N×N multiply (2·N³ flops) taking `mean_ms`.
///
/// A zero duration reports 0 instead of infinity.
pub fn gflops(n: usize, mean_ms: f64) -> f64 {
    if mean_ms <= 0.0 {
        return 0.0;
    }
    let flops = 2.0 * (n as f64).powi(3);
    flops / (mean_ms / 1000.0) / 1e9
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_sample() {
        let s = Summary::from_samples(&[12.5], 100);
        assert_eq!(s.mean_ms, 12.5);
        assert_eq!(s.stdev_ms, 0.0);
        assert_eq!(s.best_ms, 12.5);
    }

    #[test]
    fn test_population_stdev() {
        // mean 5, squared deviations 9+1+1+9 = 20, /4 = 5
        let s = Summary::from_samples(&[2.0, 4.0, 6.0, 8.0], 10);
        assert_relative_eq!(s.mean_ms, 5.0);
        assert_relative_eq!(s.stdev_ms, 5.0f64.sqrt());
        assert_eq!(s.best_ms, 2.0);
    }

    #[test]
    fn test_gflops() {
        // 2 * 1000^3 flops in one second
        assert_relative_eq!(gflops(1000, 1000.0), 2.0);
        assert_relative_eq!(gflops(1000, 500.0), 4.0);
    }

    #[test]
    fn test_gflops_zero_time() {
        assert_eq!(gflops(64, 0.0), 0.0);
    }

    #[test]
    fn test_empty() {
        let s = Summary::from_samples(&[], 64);
        assert_eq!(s.mean_ms, 0.0);
        assert_eq!(s.gflops, 0.0);
    }
}
