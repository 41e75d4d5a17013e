//! Configuration for a multi-city analysis run.

use crate::detection::RollingConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Rolling window and anomaly threshold.
    pub rolling: RollingConfig,
    /// Cities to analyse; `None` analyses every city in the dataset.
    pub cities: Option<Vec<String>>,
    /// Fan cities out over the rayon thread pool.
    pub parallel: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            rolling: RollingConfig::default(),
            cities: None,
            parallel: true,
        }
    }
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.rolling.window = window;
        self
    }

    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.rolling.sigma = sigma;
        self
    }

    pub fn with_cities<I, S>(mut self, cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cities = Some(cities.into_iter().map(Into::into).collect());
        self
    }

    /// Analyse cities one after another on the calling thread.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.rolling.window, 30);
        assert_eq!(config.rolling.sigma, 2.0);
        assert!(config.cities.is_none());
        assert!(config.parallel);
    }

    #[test]
    fn builder_methods() {
        let config = AnalysisConfig::new()
            .with_window(7)
            .with_sigma(3.0)
            .with_cities(["Oslo", "Lima"])
            .sequential();
        assert_eq!(config.rolling, RollingConfig::new(7).with_sigma(3.0));
        assert_eq!(config.cities, Some(vec!["Oslo".to_string(), "Lima".to_string()]));
        assert!(!config.parallel);
    }
}
