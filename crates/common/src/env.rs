//! Environment/runtime helpers
//!
//! Sanity checks run once at startup.

use tracing::{info, warn};

/// Log where configuration comes from; returns whether the config file exists.
pub async fn report_config_source(config_path: &str) -> bool {
    if tokio::fs::metadata(config_path).await.is_ok() {
        info!(%config_path, "using config file");
        true
    } else {
        warn!(%config_path, "config file not found; falling back to environment variables");
        false
    }
}

#[cfg(test)]
mod tests {
    use super::report_config_source;

    #[tokio::test]
    async fn missing_config_file_is_reported() {
        assert!(!report_config_source("/nonexistent/catalog/config.toml").await);
    }

    #[tokio::test]
    async fn existing_config_file_is_reported() -> anyhow::Result<()> {
        let path = std::env::temp_dir().join(format!("catalog-env-{}.toml", std::process::id()));
        tokio::fs::write(&path, "").await?;
        assert!(report_config_source(&path.to_string_lossy()).await);
        tokio::fs::remove_file(&path).await?;
        Ok(())
    }
}
