//! # Destination Countries
//!
//! The rate table is a `match` over [`Country`], so the two can never drift
//! apart: adding a destination does not compile until it is given a rate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownCountry;

/// A destination the service ships to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    #[default]
    Sweden,
    China,
    Brazil,
    Australia,
}

impl Country {
    /// Every destination, in rate table order.
    pub const ALL: [Country; 4] = [
        Country::Sweden,
        Country::China,
        Country::Brazil,
        Country::Australia,
    ];

    /// Price in INR per kilogram.
    pub const fn rate_per_kg(self) -> f64 {
        match self {
            Country::Sweden => 7.35,
            Country::China => 11.53,
            Country::Brazil => 15.63,
            Country::Australia => 50.09,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Country::Sweden => "Sweden",
            Country::China => "China",
            Country::Brazil => "Brazil",
            Country::Australia => "Australia",
        }
    }

    /// The destination after this one, wrapping around. Used to cycle pickers.
    pub fn next(self) -> Country {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Country {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Country {
    type Err = UnknownCountry;

    /// Parses a destination name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCountry(s.to_string()))
    }
}
