//! Transport-level options shared by every kind of image request.
//!
//! [`LoadOptions`](crate::LoadOptions) embeds a [`DownloadOptions`] and
//! forwards its setters, so these settings travel with every load.

use core::fmt;
use core::str::FromStr;

use crate::LoadError;

/// How far a request may go to find its image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[non_exhaustive]
pub enum RequestLevel {
    /// Memory, disk, then network.
    #[default]
    Net,
    /// Memory and disk cache only.
    Local,
    /// Memory cache only.
    Memory,
}

impl RequestLevel {
    /// Whether the request may fall through to a network download.
    pub fn allows_network(self) -> bool {
        matches!(self, RequestLevel::Net)
    }

    /// Whether the request may read the disk cache.
    pub fn allows_disk(self) -> bool {
        matches!(self, RequestLevel::Net | RequestLevel::Local)
    }

    /// Lowercase name, as used in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            RequestLevel::Net => "net",
            RequestLevel::Local => "local",
            RequestLevel::Memory => "memory",
        }
    }
}

impl fmt::Display for RequestLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestLevel {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "net" => Ok(RequestLevel::Net),
            "local" => Ok(RequestLevel::Local),
            "memory" => Ok(RequestLevel::Memory),
            other => Err(LoadError::Parse(format!("unknown request level {other:?}"))),
        }
    }
}

/// Download-level settings: disk caching and request level.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DownloadOptions {
    enable_disk_cache: bool,
    request_level: RequestLevel,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            enable_disk_cache: true,
            request_level: RequestLevel::Net,
        }
    }
}

impl DownloadOptions {
    /// Whether downloaded bytes are written to and read from the disk cache.
    pub fn disk_cache_enabled(&self) -> bool {
        self.enable_disk_cache
    }

    pub fn set_enable_disk_cache(&mut self, enable: bool) -> &mut Self {
        self.enable_disk_cache = enable;
        self
    }

    pub fn request_level(&self) -> RequestLevel {
        self.request_level
    }

    pub fn set_request_level(&mut self, level: RequestLevel) -> &mut Self {
        self.request_level = level;
        self
    }

    /// Overwrite every field with the values from `source`.
    pub fn copy_of(&mut self, source: &DownloadOptions) {
        self.enable_disk_cache = source.enable_disk_cache;
        self.request_level = source.request_level;
    }
}
