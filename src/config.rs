use std::env;

#[derive(Clone, Debug)]
pub struct ExtractionConfig {
    pub min_quiz_options: usize,
    pub revision_batch_size: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_quiz_options: 3,
            revision_batch_size: 5,
        }
    }
}

impl ExtractionConfig {
    pub fn from_env() -> Self {
        Self {
            min_quiz_options: env::var("STUDYDECK_MIN_QUIZ_OPTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            revision_batch_size: env::var("STUDYDECK_REVISION_BATCH_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            min_quiz_options: 3,
            revision_batch_size: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExtractionConfig::default();

        assert_eq!(config.min_quiz_options, 3);
        assert_eq!(config.revision_batch_size, 5);
    }

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = ExtractionConfig::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(config.min_quiz_options >= 1);
        assert!(config.revision_batch_size >= 1);
    }

    #[test]
    fn test_test_config() {
        let config = ExtractionConfig::test_config();

        assert_eq!(config.min_quiz_options, 3);
        assert_eq!(config.revision_batch_size, 5);
    }
}
