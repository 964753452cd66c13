use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Where the identity assertion is read from.
///
/// Unknown values are kept verbatim instead of failing deserialization, so a
/// typo in the configuration disables proxy authentication for each request
/// rather than preventing startup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VariableSource {
    /// HTTP request headers, gated on the peer being a trusted proxy
    #[default]
    Header,
    /// Process environment variables set by an embedding process
    Env,
    Unsupported(String),
}

impl VariableSource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Header => "header",
            Self::Env => "env",
            Self::Unsupported(value) => value.as_str(),
        }
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "header" => Self::Header,
            "env" => Self::Env,
            _ => Self::Unsupported(value.to_string()),
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }
}

impl FromStr for VariableSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for VariableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for VariableSource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

impl Serialize for VariableSource {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
