// テスト用の設定モック実装

use super::traits::PrepareConfig;

pub struct MockPrepareConfig {
    pub enable_progress: bool,
    pub interval: usize,
}

impl PrepareConfig for MockPrepareConfig {
    fn enable_progress_reporting(&self) -> bool {
        self.enable_progress
    }

    fn progress_interval(&self) -> usize {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_config_trait() {
        let config = MockPrepareConfig {
            enable_progress: true,
            interval: 500,
        };

        let config_ref: &dyn PrepareConfig = &config;
        assert!(config_ref.enable_progress_reporting());
        assert_eq!(config_ref.progress_interval(), 500);
    }
}
