// Data structures for the catalog: records, filter criteria and view flags

use crate::error::UnknownValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Default bounds of the price range control
pub const DEFAULT_MIN_PRICE: u32 = 0;
pub const DEFAULT_MAX_PRICE: u32 = 100_000;

// A single vehicle in the catalog. Created once at startup, never mutated.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    pub id: u32,
    pub brand: String,
    pub model: String,
    pub price: u32,
    pub fuel_type: FuelType,
    pub seats: u32,
    pub image: String,
    pub description: String,
}

impl VehicleRecord {
    // Case-insensitive substring match against brand OR model.
    // `needle` must already be lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.brand.to_lowercase().contains(needle) || self.model.to_lowercase().contains(needle)
    }

    pub fn title(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FuelType {
    Petrol,
    Diesel,
    Electric,
    Hybrid,
}

impl FuelType {
    pub fn as_str(self) -> &'static str {
        match self {
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
            FuelType::Electric => "Electric",
            FuelType::Hybrid => "Hybrid",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FuelType {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "petrol" => Ok(FuelType::Petrol),
            "diesel" => Ok(FuelType::Diesel),
            "electric" => Ok(FuelType::Electric),
            "hybrid" => Ok(FuelType::Hybrid),
            _ => Err(UnknownValue::new("fuel type", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    None,
    PriceAscending,
    PriceDescending,
}

impl SortMode {
    pub fn label(self) -> &'static str {
        match self {
            SortMode::None => "none",
            SortMode::PriceAscending => "price-low-high",
            SortMode::PriceDescending => "price-high-low",
        }
    }
}

impl FromStr for SortMode {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(SortMode::None),
            "price-low-high" | "price-ascending" | "asc" => Ok(SortMode::PriceAscending),
            "price-high-low" | "price-descending" | "desc" => Ok(SortMode::PriceDescending),
            _ => Err(UnknownValue::new("sort mode", s)),
        }
    }
}

// Seat-count criterion as typed into the seat dropdown.
//
// Text is read with integer-prefix semantics: leading whitespace and an
// optional sign are skipped, then as many digits as are present are taken.
// Text without a leading integer (or with a negative one) can never equal a
// seat count, so it filters everything out rather than being ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeatFilter {
    #[default]
    Any,
    Exactly(u32),
    NoMatch,
}

impl SeatFilter {
    pub fn parse(text: &str) -> Self {
        if text.is_empty() {
            return SeatFilter::Any;
        }
        let trimmed = text.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let digits: &str = {
            let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
            &rest[..end]
        };
        if digits.is_empty() {
            return SeatFilter::NoMatch;
        }
        match digits.parse::<u32>() {
            // -0 is still zero, which no record has either
            Ok(n) if !negative || n == 0 => SeatFilter::Exactly(n),
            _ => SeatFilter::NoMatch,
        }
    }

    pub fn admits(self, seats: u32) -> bool {
        match self {
            SeatFilter::Any => true,
            SeatFilter::Exactly(n) => n == seats,
            SeatFilter::NoMatch => false,
        }
    }
}

// Current combination of search, filter and sort inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: String,
    pub brand: Option<String>,
    pub min_price: u32,
    pub max_price: u32,
    pub fuel_type: Option<FuelType>,
    pub seats: SeatFilter,
    pub sort: SortMode,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            brand: None,
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
            fuel_type: None,
            seats: SeatFilter::Any,
            sort: SortMode::None,
        }
    }
}

impl FilterCriteria {
    // Criteria that keep every record: no text filters and the widest price range
    pub fn unrestricted() -> Self {
        Self {
            max_price: u32::MAX,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Light,
    Dark,
}

impl ViewMode {
    pub fn toggle(self) -> Self {
        match self {
            ViewMode::Light => ViewMode::Dark,
            ViewMode::Dark => ViewMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ViewMode::Dark
    }
}
