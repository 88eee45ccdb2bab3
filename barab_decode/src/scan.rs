use barab_core::{Element, Run, Scanline, Width};

/// Default multiplier of half the longest interior run.
pub const DEFAULT_FACTOR: f64 = 1.5;

/// Split `scanline` into runs of equal color, from left to right.
/// # Example
/// ```
/// use barab_core::{Module, Run, Scanline};
/// let scanline: Scanline = [false, true, true, false].into_iter().collect();
/// assert_eq!(
///     barab_decode::runs(&scanline),
///     vec![Run::new(Module::Space, 1), Run::new(Module::Bar, 2), Run::new(Module::Space, 1)]
/// );
/// ```
pub fn runs(scanline: &Scanline) -> Vec<Run> {
    scanline.runs()
}

/// Get the runs between the first and the last one, which belong to the quiet zones.
pub fn interior(runs: &[Run]) -> &[Run] {
    match runs.len() {
        0..=2 => &[],
        len => &runs[1..len - 1],
    }
}

/// Length above which a run is wide, derived from the runs themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    value: f64,
}

impl Threshold {
    /// Derive the threshold of `runs` with the [DEFAULT_FACTOR]. Returns `None` if there are no interior runs.
    /// # Example
    /// ```
    /// use barab_core::{Module, Run};
    /// use barab_decode::Threshold;
    /// let runs = [Run::new(Module::Space, 50), Run::new(Module::Bar, 4), Run::new(Module::Space, 50)];
    /// assert_eq!(Threshold::from_runs(&runs).unwrap().value(), 3.0);
    /// ```
    pub fn from_runs(runs: &[Run]) -> Option<Self> {
        Self::with_factor(runs, DEFAULT_FACTOR)
    }

    /// Derive the threshold of `runs` as `factor` times half the longest interior run.
    pub fn with_factor(runs: &[Run], factor: f64) -> Option<Self> {
        let max = interior(runs).iter().map(|run| run.len).max()?;
        Some(Self::new(factor * (max as f64 / 2.0)))
    }

    /// Construct a threshold of `value` pixels.
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// Get the threshold in pixels.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Classify a run of `len` pixels.
    pub fn classify(&self, len: usize) -> Width {
        if len as f64 > self.value {
            Width::Wide
        } else {
            Width::Narrow
        }
    }
}

/// Tag every interior run as a narrow or wide [Element].
pub fn classify(runs: &[Run], threshold: &Threshold) -> Vec<Element> {
    interior(runs)
        .iter()
        .map(|run| Element::new(run.module, threshold.classify(run.len)))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use barab_core::Module;

    /// Alternating runs of `lens` starting with a bar, wrapped in two quiet zone spaces.
    fn framed(lens: &[usize]) -> Vec<Run> {
        let mut runs = vec![Run::new(Module::Space, 40)];
        let mut module = Module::Bar;
        for &len in lens {
            runs.push(Run::new(module, len));
            module = module.inverted();
        }
        runs.push(Run::new(module, 40));
        runs
    }

    #[test]
    fn test_interior_skips_outer_runs() {
        let runs = framed(&[1, 2, 3]);
        assert_eq!(interior(&runs).len(), 3);
        assert!(interior(&runs[..2]).is_empty());
        assert!(interior(&[]).is_empty());
    }

    #[test]
    fn test_threshold_ignores_quiet_zones() {
        let runs = framed(&[2, 2, 2, 4, 2, 2, 2, 4, 2]);
        let threshold = Threshold::from_runs(&runs).unwrap();
        assert_eq!(threshold.value(), 3.0);
    }

    #[test]
    fn test_threshold_boundary() {
        let runs = framed(&[2, 2, 2, 4, 2, 2, 2, 4, 2]);
        let threshold = Threshold::from_runs(&runs).unwrap();
        assert_eq!(threshold.classify(2), Width::Narrow);
        // Exactly at the threshold is still narrow.
        assert_eq!(threshold.classify(3), Width::Narrow);
        assert_eq!(threshold.classify(4), Width::Wide);
        assert_eq!(threshold.classify(5), Width::Wide);
    }

    #[test]
    fn test_classify() {
        let runs = framed(&[2, 2, 2, 4, 2, 2, 2, 4, 2]);
        let threshold = Threshold::from_runs(&runs).unwrap();
        let letters: String = classify(&runs, &threshold)
            .iter()
            .map(Element::letter)
            .collect();
        assert_eq!(letters, "bwbWbwbWb");
    }

    #[test]
    fn test_threshold_factor() {
        let runs = framed(&[2, 6, 2]);
        assert_eq!(Threshold::with_factor(&runs, 1.0).unwrap().value(), 3.0);
        assert_eq!(Threshold::from_runs(&runs[..2]), None);
    }
}
