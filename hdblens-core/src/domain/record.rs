//! Transaction — the fundamental resale-record unit.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A string that names no known flat category or town.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown label: '{0}'")]
pub struct UnknownLabel(pub String);

/// Flat category of a resale unit.
///
/// The category drives the fixed price multiplier applied after base-price
/// sampling (see `data::synthetic`). Serialized under the canonical dataset
/// labels ("2 ROOM" .. "EXECUTIVE").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FlatCategory {
    #[serde(rename = "2 ROOM")]
    TwoRoom,
    #[serde(rename = "3 ROOM")]
    ThreeRoom,
    #[serde(rename = "4 ROOM")]
    FourRoom,
    #[serde(rename = "5 ROOM")]
    FiveRoom,
    #[serde(rename = "EXECUTIVE")]
    Executive,
}

impl FlatCategory {
    pub const ALL: [FlatCategory; 5] = [
        FlatCategory::TwoRoom,
        FlatCategory::ThreeRoom,
        FlatCategory::FourRoom,
        FlatCategory::FiveRoom,
        FlatCategory::Executive,
    ];

    /// Fixed price multiplier per category. Applied to the sampled base
    /// price before the floor-area scaling factor.
    pub fn price_multiplier(self) -> f64 {
        match self {
            FlatCategory::TwoRoom => 0.7,
            FlatCategory::ThreeRoom => 0.9,
            FlatCategory::FourRoom => 1.0,
            FlatCategory::FiveRoom => 1.3,
            FlatCategory::Executive => 1.5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FlatCategory::TwoRoom => "2 ROOM",
            FlatCategory::ThreeRoom => "3 ROOM",
            FlatCategory::FourRoom => "4 ROOM",
            FlatCategory::FiveRoom => "5 ROOM",
            FlatCategory::Executive => "EXECUTIVE",
        }
    }
}

impl fmt::Display for FlatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for FlatCategory {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FlatCategory::ALL
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

/// Town (district) of the reference dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Town {
    #[serde(rename = "ANG MO KIO")]
    AngMoKio,
    #[serde(rename = "BEDOK")]
    Bedok,
    #[serde(rename = "TAMPINES")]
    Tampines,
    #[serde(rename = "WOODLANDS")]
    Woodlands,
    #[serde(rename = "PUNGGOL")]
    Punggol,
}

impl Town {
    pub const ALL: [Town; 5] = [
        Town::AngMoKio,
        Town::Bedok,
        Town::Tampines,
        Town::Woodlands,
        Town::Punggol,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Town::AngMoKio => "ANG MO KIO",
            Town::Bedok => "BEDOK",
            Town::Tampines => "TAMPINES",
            Town::Woodlands => "WOODLANDS",
            Town::Punggol => "PUNGGOL",
        }
    }
}

impl fmt::Display for Town {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Town {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Town::ALL
            .into_iter()
            .find(|town| town.label() == s)
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

/// A single resale transaction.
///
/// Resale price and floor area are always positive; `is_sane` checks the
/// documented field ranges. Derived quantities (price per sqm, building age)
/// are computed on demand and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub flat_type: FlatCategory,
    pub floor_area_sqm: f64,
    pub resale_price: f64,
    pub block: u16,
    pub street_name: String,
    pub town: Town,
    pub year: i32,
    pub month: u32,
    pub lease_commence_year: i32,
}

impl Transaction {
    /// Resale price divided by floor area.
    pub fn price_per_sqm(&self) -> f64 {
        self.resale_price / self.floor_area_sqm
    }

    /// Building age relative to a reference year.
    ///
    /// Negative when the reference year precedes lease commencement; values
    /// pass through without clamping.
    pub fn building_age(&self, reference_year: i32) -> i32 {
        reference_year - self.lease_commence_year
    }

    /// Basic field sanity check: positive price/area, block and month in range.
    pub fn is_sane(&self) -> bool {
        self.resale_price > 0.0
            && self.floor_area_sqm > 0.0
            && (1..=999).contains(&self.block)
            && (1..=12).contains(&self.month)
    }
}
