use argminmax::ArgMinMax;
use std::collections::VecDeque;

/// Trailing fixed-size window over a stream of values.
/// Inclusive of the most recent push; statistics are only reported once the window is full
/// (minimum periods = window size).
#[derive(Debug, Clone)]
pub struct RollingWindow {
    size: usize,
    values: VecDeque<f64>,
}

impl RollingWindow {
    pub fn new(size: usize) -> Self {
        debug_assert!(size > 0);
        Self {
            size,
            values: VecDeque::with_capacity(size),
        }
    }

    /// Pushes a value, evicting (and returning) the oldest one once full.
    pub fn push(&mut self, value: f64) -> Option<f64> {
        let evicted = if self.values.len() == self.size {
            self.values.pop_front()
        } else {
            None
        };
        self.values.push_back(value);
        evicted
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.values.len() == self.size
    }

    pub fn mean(&self) -> Option<f64> {
        if !self.is_full() {
            return None;
        }
        Some(self.values.iter().sum::<f64>() / self.size as f64)
    }

    /// Sample standard deviation (n - 1 denominator).
    pub fn sample_std_dev(&self) -> Option<f64> {
        if !self.is_full() || self.size < 2 {
            return None;
        }
        let (_, std_dev) = sample_mean_and_stddev(self.values.iter().copied());
        Some(std_dev)
    }
}

/// Two-pass mean and sample standard deviation.
#[inline]
pub fn sample_mean_and_stddev(data: impl Iterator<Item = f64> + Clone) -> (f64, f64) {
    let count = data.clone().count();
    if count == 0 {
        return (0.0, 0.0);
    }

    let mean = data.clone().sum::<f64>() / count as f64;
    if count < 2 {
        return (mean, 0.0);
    }

    let variance: f64 = data
        .map(|value| {
            let diff = mean - value;
            diff * diff
        })
        .sum::<f64>()
        / (count - 1) as f64;

    (mean, variance.sqrt())
}

#[inline]
pub(crate) fn get_max(vec: &[f64]) -> f64 {
    let max_index: usize = vec.argmax();
    vec[max_index]
}

#[inline]
pub(crate) fn get_min(vec: &[f64]) -> f64 {
    let min_index: usize = vec.argmin();
    vec[min_index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use statrs::statistics::Statistics;

    #[test]
    fn window_reports_nothing_until_full() {
        let mut w = RollingWindow::new(3);
        w.push(1.0);
        w.push(2.0);
        assert!(w.mean().is_none());
        assert!(w.sample_std_dev().is_none());
        w.push(3.0);
        assert_eq!(w.mean(), Some(2.0));
    }

    #[test]
    fn window_slides_and_evicts_oldest() {
        let mut w = RollingWindow::new(2);
        assert_eq!(w.push(1.0), None);
        assert_eq!(w.push(2.0), None);
        assert_eq!(w.push(4.0), Some(1.0));
        assert_eq!(w.mean(), Some(3.0));
    }

    #[test]
    fn sample_std_dev_matches_statrs() {
        let data = [0.01, -0.02, 0.005, 0.03, -0.01, 0.0, 0.012];
        let mut w = RollingWindow::new(data.len());
        for v in data {
            w.push(v);
        }
        let expected = data.iter().std_dev();
        let got = w.sample_std_dev().unwrap();
        assert!((got - expected).abs() < 1e-12, "{got} vs {expected}");
    }

    #[test]
    fn extremes() {
        let v = [3.0, 9.5, -1.0, 4.0];
        assert_eq!(get_max(&v), 9.5);
        assert_eq!(get_min(&v), -1.0);
    }
}
