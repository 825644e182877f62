//! Paging configuration
//!
//! Service-level defaults and limits applied to incoming pagination
//! requests, loadable from YAML or JSON.
//!
//! ```yaml
//! default_page_size: 20
//! max_page_size: 100
//! default_direction: DESC
//! codec:
//!   max_token_len: 4096
//!   lenient_padding: true
//! ```

use crate::error::{Error, Result};
use crate::request::PaginationRequest;
use crate::token::{CodecConfig, JsonTokenCodec};
use crate::types::SortDirection;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::path::Path;
use tracing::debug;

/// Paging defaults, limits and token codec settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingConfig {
    /// Page size used when a request does not name one
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,

    /// Largest page size a request may ask for
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,

    /// Direction used when a request does not name one
    #[serde(default)]
    pub default_direction: SortDirection,

    /// Token codec settings
    #[serde(default)]
    pub codec: CodecConfig,
}

fn default_page_size() -> u32 {
    20
}

fn default_max_page_size() -> u32 {
    1000
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            default_direction: SortDirection::default(),
            codec: CodecConfig::default(),
        }
    }
}

impl PagingConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.json`, `.yaml` or `.yml` file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "Loading paging config");

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&contents),
            Some("yaml" | "yml") => Self::from_yaml_str(&contents),
            other => Err(Error::config(format!(
                "Unsupported config file extension: {}",
                other.unwrap_or("<none>")
            ))),
        }
    }

    /// Check that sizes and limits are usable
    pub fn validate(&self) -> Result<()> {
        if self.default_page_size == 0 {
            return Err(Error::invalid_value(
                "default_page_size",
                "must be at least 1",
            ));
        }
        if self.max_page_size == 0 {
            return Err(Error::invalid_value("max_page_size", "must be at least 1"));
        }
        if self.default_page_size > self.max_page_size {
            return Err(Error::invalid_value(
                "default_page_size",
                format!(
                    "{} exceeds max_page_size {}",
                    self.default_page_size, self.max_page_size
                ),
            ));
        }
        if self.codec.max_token_len == 0 {
            return Err(Error::invalid_value(
                "codec.max_token_len",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// Apply defaults and limits to a request
    ///
    /// Fills an absent page size or direction with the defaults and clamps
    /// an oversized page size to the maximum. Token and relation are kept
    /// as they are.
    pub fn resolve(&self, request: &PaginationRequest) -> PaginationRequest {
        let max = NonZeroU32::new(self.max_page_size).unwrap_or(NonZeroU32::MIN);
        let page_size = match request.max_page_size() {
            Some(size) if size > max => {
                debug!(
                    requested = size.get(),
                    max = max.get(),
                    "Clamping requested page size"
                );
                max
            }
            Some(size) => size,
            None => NonZeroU32::new(self.default_page_size)
                .unwrap_or(NonZeroU32::MIN)
                .min(max),
        };

        PaginationRequest::new(
            request.token().map(str::to_string),
            request.relation(),
            Some(page_size),
            Some(request.direction().unwrap_or(self.default_direction)),
        )
    }

    /// Build the token codec described by this config
    pub fn codec(&self) -> JsonTokenCodec {
        JsonTokenCodec::with_config(self.codec.clone())
    }
}
