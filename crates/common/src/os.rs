//! Operating system family definitions.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Location of the os-release file read during detection.
pub const OS_RELEASE_PATH: &str = "/etc/os-release";

const DEBIAN_IDS: &[&str] = &["debian", "ubuntu", "raspbian", "linuxmint"];
const REDHAT_IDS: &[&str] = &[
    "rhel",
    "centos",
    "fedora",
    "amzn",
    "rocky",
    "almalinux",
    "ol",
    "scientific",
    "cloudlinux",
];

/// Coarse host OS family, as reported by the fact runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OsFamily {
    Windows,
    Debian,
    RedHat,
    /// Any family the probe has no paths for.
    Other(String),
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsFamily::Windows => write!(f, "windows"),
            OsFamily::Debian => write!(f, "Debian"),
            OsFamily::RedHat => write!(f, "RedHat"),
            OsFamily::Other(name) => write!(f, "{}", name),
        }
    }
}

impl FromStr for OsFamily {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "windows" => OsFamily::Windows,
            "debian" => OsFamily::Debian,
            "redhat" => OsFamily::RedHat,
            _ => OsFamily::Other(s.trim().to_string()),
        })
    }
}

impl From<String> for OsFamily {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(family) => family,
            Err(never) => match never {},
        }
    }
}

impl From<OsFamily> for String {
    fn from(family: OsFamily) -> Self {
        family.to_string()
    }
}

impl OsFamily {
    /// Detect the family of the running host.
    pub fn detect() -> Self {
        if cfg!(target_os = "windows") {
            return OsFamily::Windows;
        }

        if cfg!(target_os = "linux") {
            return match std::fs::read_to_string(OS_RELEASE_PATH) {
                Ok(content) => Self::from_os_release(&content),
                Err(e) => {
                    debug!("Cannot read {}: {}", OS_RELEASE_PATH, e);
                    OsFamily::Other("linux".to_string())
                }
            };
        }

        OsFamily::Other(std::env::consts::OS.to_string())
    }

    /// Classify the contents of an os-release file.
    ///
    /// `ID` is checked before the entries of `ID_LIKE`, so a distribution
    /// that names itself wins over the one it derives from.
    pub fn from_os_release(content: &str) -> Self {
        let mut id: Option<String> = None;
        let mut id_like: Vec<String> = Vec::new();

        for line in content.lines() {
            let Some((key, value)) = line.trim().split_once('=') else {
                continue;
            };
            let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
            match key.trim() {
                "ID" => id = Some(value.to_lowercase()),
                "ID_LIKE" => {
                    id_like = value
                        .split_whitespace()
                        .map(|s| s.to_lowercase())
                        .collect()
                }
                _ => {}
            }
        }

        for candidate in id.iter().chain(id_like.iter()) {
            if DEBIAN_IDS.contains(&candidate.as_str()) {
                return OsFamily::Debian;
            }
            if REDHAT_IDS.contains(&candidate.as_str()) {
                return OsFamily::RedHat;
            }
        }

        OsFamily::Other(id.unwrap_or_else(|| "linux".to_string()))
    }
}
