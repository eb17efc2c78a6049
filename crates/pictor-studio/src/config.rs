use anyhow::Context;

/// Studio settings read from the environment.
///
/// - `PICTOR_FRAMES`: number of frames to run (default 3)
/// - `RUST_LOG`: logger filter, handed to `env_logger`
#[derive(Debug, Clone, PartialEq)]
pub struct StudioConfig {
    pub frames: u32,
    pub log_filter: Option<String>,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            frames: 3,
            log_filter: None,
        }
    }
}

impl StudioConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(
            std::env::var("PICTOR_FRAMES").ok(),
            std::env::var("RUST_LOG").ok(),
        )
    }

    fn from_vars(frames: Option<String>, log_filter: Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();
        if let Some(raw) = frames {
            config.frames = raw
                .trim()
                .parse()
                .with_context(|| format!("PICTOR_FRAMES must be a frame count, got {raw:?}"))?;
        }
        config.log_filter = log_filter.filter(|f| !f.trim().is_empty());
        Ok(config)
    }
}
