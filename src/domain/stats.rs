//! Descriptive statistics over count distributions.

use serde::Serialize;

/// count / mean / std / min / quartiles / max of a sample.
///
/// `std` is the sample standard deviation (n - 1 denominator) and is
/// `None` below two observations. Quartiles interpolate linearly between
/// the closest ranks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Describe {
    pub count: usize,
    pub mean: f64,
    pub std: Option<f64>,
    pub min: f64,
    #[serde(rename = "25%")]
    pub p25: f64,
    #[serde(rename = "50%")]
    pub p50: f64,
    #[serde(rename = "75%")]
    pub p75: f64,
    pub max: f64,
}

impl Describe {
    /// Returns `None` for an empty sample.
    pub fn of(values: &[u64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted: Vec<f64> = values.iter().map(|&v| v as f64).collect();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        let mean = sorted.iter().sum::<f64>() / n as f64;
        let std = (n > 1).then(|| {
            let ss: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (n - 1) as f64).sqrt()
        });

        Some(Self {
            count: n,
            mean,
            std,
            min: sorted[0],
            p25: quantile(&sorted, 0.25),
            p50: quantile(&sorted, 0.50),
            p75: quantile(&sorted, 0.75),
            max: sorted[n - 1],
        })
    }
}

/// Linear-interpolated quantile of an ascending, non-empty slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_matches_linear_quantiles() {
        let d = Describe::of(&[4, 1, 3, 2]).unwrap();
        assert_eq!(d.count, 4);
        assert!((d.mean - 2.5).abs() < 1e-9);
        assert!((d.std.unwrap() - 1.290_994_448_7).abs() < 1e-6);
        assert_eq!(d.min, 1.0);
        assert!((d.p25 - 1.75).abs() < 1e-9);
        assert!((d.p50 - 2.5).abs() < 1e-9);
        assert!((d.p75 - 3.25).abs() < 1e-9);
        assert_eq!(d.max, 4.0);
    }

    #[test]
    fn test_describe_single_and_empty() {
        assert!(Describe::of(&[]).is_none());
        let d = Describe::of(&[7]).unwrap();
        assert_eq!(d.std, None);
        assert_eq!(d.p25, 7.0);
        assert_eq!(d.p75, 7.0);
    }

    #[test]
    fn test_serialized_keys() {
        let json = serde_json::to_value(Describe::of(&[1, 2]).unwrap()).unwrap();
        assert!(json.get("25%").is_some());
        assert!(json.get("50%").is_some());
        assert!(json.get("75%").is_some());
    }
}
