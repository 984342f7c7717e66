//! The closed set of language versions and variants the lexer is
//! parameterized over (base spec §6).

use serde::{Deserialize, Serialize};

/// TypeScript's notion of "which ECMAScript syntax is in play" — gates
/// keyword recognition, regex flag availability, and which identifier
/// table (C2) is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LanguageVersion {
    /// Not really a point on the ES timeline; ordered first so `at_least`
    /// checks against it are conservative (JSON has no regex literals to
    /// gate flags on in the first place).
    Json,
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
}

impl LanguageVersion {
    pub const LATEST: Self = Self::EsNext;

    /// Which of the three identifier-table profiles (C2) this version
    /// consults. `Json` has no keywords or identifiers worth special-casing
    /// beyond ES5, so it shares that profile.
    pub fn identifier_profile(self) -> IdentifierProfile {
        match self {
            Self::Es3 => IdentifierProfile::Es3,
            Self::Es5 | Self::Json => IdentifierProfile::Es5,
            _ => IdentifierProfile::Es2015Plus,
        }
    }

    pub fn at_least(self, other: Self) -> bool {
        self >= other
    }
}

impl std::fmt::Display for LanguageVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Json => "JSON",
            Self::Es3 => "ES3",
            Self::Es5 => "ES5",
            Self::Es2015 => "ES2015",
            Self::Es2016 => "ES2016",
            Self::Es2017 => "ES2017",
            Self::Es2018 => "ES2018",
            Self::Es2019 => "ES2019",
            Self::Es2020 => "ES2020",
            Self::Es2021 => "ES2021",
            Self::Es2022 => "ES2022",
            Self::EsNext => "ESNext",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierProfile {
    Es3,
    Es5,
    Es2015Plus,
}

/// The per-source-handle syntax dialect. Only affects JSX sub-lexer
/// activation (base spec §4.7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageVariant {
    TypeScript,
    Jsx,
}
