use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether an identifier names a listed stock or a crypto token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Stock,
    Crypto,
}

/// Declared or inferred focus of the composing user. Drives the domain bias in ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Stock,
    Crypto,
    Mixed,
}

impl UserType {
    /// The asset type this user is biased towards, if any.
    pub fn preferred_asset_type(self) -> Option<AssetType> {
        match self {
            UserType::Stock => Some(AssetType::Stock),
            UserType::Crypto => Some(AssetType::Crypto),
            UserType::Mixed => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UserType::Stock => "stock",
            UserType::Crypto => "crypto",
            UserType::Mixed => "mixed",
        }
    }
}

impl AssetType {
    pub fn as_str(self) -> &'static str {
        match self {
            AssetType::Stock => "stock",
            AssetType::Crypto => "crypto",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stock" => Ok(AssetType::Stock),
            "crypto" => Ok(AssetType::Crypto),
            other => Err(format!("Unknown asset type: {}", other)),
        }
    }
}

impl FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stock" => Ok(UserType::Stock),
            "crypto" => Ok(UserType::Crypto),
            "mixed" => Ok(UserType::Mixed),
            other => Err(format!("Unknown user type: {}", other)),
        }
    }
}
