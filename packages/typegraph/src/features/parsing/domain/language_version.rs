//! ECMAScript target selector handed to the parser
//!
//! The selector only affects how a parser reads surrounding syntax. The
//! declaration model itself behaves identically for every version.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language version passed to [`DeclarationParser::parse`](crate::features::parsing::ports::DeclarationParser::parse)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LanguageVersion {
    Es3,
    Es5,
    Es2015,
    Es2016,
    Es2017,
    Es2018,
    Es2019,
    Es2020,
    Es2021,
    Es2022,
    EsNext,
    Latest,
}

impl LanguageVersion {
    pub const ALL: [LanguageVersion; 12] = [
        LanguageVersion::Es3,
        LanguageVersion::Es5,
        LanguageVersion::Es2015,
        LanguageVersion::Es2016,
        LanguageVersion::Es2017,
        LanguageVersion::Es2018,
        LanguageVersion::Es2019,
        LanguageVersion::Es2020,
        LanguageVersion::Es2021,
        LanguageVersion::Es2022,
        LanguageVersion::EsNext,
        LanguageVersion::Latest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageVersion::Es3 => "es3",
            LanguageVersion::Es5 => "es5",
            LanguageVersion::Es2015 => "es2015",
            LanguageVersion::Es2016 => "es2016",
            LanguageVersion::Es2017 => "es2017",
            LanguageVersion::Es2018 => "es2018",
            LanguageVersion::Es2019 => "es2019",
            LanguageVersion::Es2020 => "es2020",
            LanguageVersion::Es2021 => "es2021",
            LanguageVersion::Es2022 => "es2022",
            LanguageVersion::EsNext => "esnext",
            LanguageVersion::Latest => "latest",
        }
    }
}

impl Default for LanguageVersion {
    fn default() -> Self {
        LanguageVersion::Es2019
    }
}

impl fmt::Display for LanguageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown language version name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguageVersion(pub String);

impl fmt::Display for UnknownLanguageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown language version '{}'", self.0)
    }
}

impl std::error::Error for UnknownLanguageVersion {}

impl FromStr for LanguageVersion {
    type Err = UnknownLanguageVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let normalized = match normalized.as_str() {
            // ES2015 is also spelled ES6
            "es6" => "es2015",
            other => other,
        };

        LanguageVersion::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == normalized)
            .ok_or_else(|| UnknownLanguageVersion(s.to_string()))
    }
}

impl TryFrom<String> for LanguageVersion {
    type Error = UnknownLanguageVersion;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LanguageVersion> for String {
    fn from(value: LanguageVersion) -> Self {
        value.as_str().to_string()
    }
}
