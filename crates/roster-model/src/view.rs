//! Sort, filter, and page-size settings shared by the store and front ends.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

// =============================================================================
// SORTING
// =============================================================================

/// Record field a table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Id,
    FirstName,
    LastName,
    Email,
    Gender,
    IpAddress,
}

impl SortKey {
    /// Every field, in CSV column order.
    pub const ALL: [SortKey; 6] = [
        SortKey::Id,
        SortKey::FirstName,
        SortKey::LastName,
        SortKey::Email,
        SortKey::Gender,
        SortKey::IpAddress,
    ];

    /// Column name used in CSV headers and serialized records.
    pub fn column_name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::Gender => "gender",
            Self::IpAddress => "ip_address",
        }
    }

    /// Human-readable column header.
    pub fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email",
            Self::Gender => "Gender",
            Self::IpAddress => "IP address",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for SortKey {
    type Err = ModelError;

    /// Accepts column names, case-insensitive, with `-` or `_` separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|key| key.column_name() == normalized)
            .ok_or_else(|| ModelError::UnknownSortKey(s.to_string()))
    }
}

/// Sort direction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Orient an ascending comparison result.
    pub fn orient(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(ModelError::UnknownSortDirection(s.to_string())),
        }
    }
}

/// Active sort: an optional field plus a direction.
///
/// With no key the table keeps insertion order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn by(key: SortKey, direction: SortDirection) -> Self {
        Self {
            key: Some(key),
            direction,
        }
    }

    /// Column-header click: the same key flips the direction, a new key
    /// starts ascending.
    #[must_use]
    pub fn toggled(self, key: SortKey) -> Self {
        if self.key == Some(key) {
            Self::by(key, self.direction.flipped())
        } else {
            Self::by(key, SortDirection::Ascending)
        }
    }
}

// =============================================================================
// GENDER FILTER
// =============================================================================

/// Gender filter: everything, or an exact (case-sensitive) value.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum GenderFilter {
    #[default]
    All,
    Exact(String),
}

impl GenderFilter {
    /// Text form of [`GenderFilter::All`].
    pub const ALL_SENTINEL: &'static str = "all";

    pub fn parse(value: &str) -> Self {
        if value == Self::ALL_SENTINEL {
            Self::All
        } else {
            Self::Exact(value.to_string())
        }
    }

    pub fn matches(&self, gender: &str) -> bool {
        match self {
            Self::All => true,
            Self::Exact(expected) => expected == gender,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for GenderFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(Self::ALL_SENTINEL),
            Self::Exact(value) => f.write_str(value),
        }
    }
}

impl From<&str> for GenderFilter {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

// =============================================================================
// PAGE SIZE
// =============================================================================

/// Rows per page. Persisted as a plain number.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PageSize {
    #[default]
    Ten,
    Twenty,
    Fifty,
    Hundred,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [
        PageSize::Ten,
        PageSize::Twenty,
        PageSize::Fifty,
        PageSize::Hundred,
    ];

    pub fn get(self) -> usize {
        match self {
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Fifty => 50,
            Self::Hundred => 100,
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl TryFrom<u32> for PageSize {
    type Error = ModelError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            10 => Ok(Self::Ten),
            20 => Ok(Self::Twenty),
            50 => Ok(Self::Fifty),
            100 => Ok(Self::Hundred),
            other => Err(ModelError::InvalidPageSize(other.to_string())),
        }
    }
}

impl From<PageSize> for u32 {
    fn from(value: PageSize) -> Self {
        value.get() as u32
    }
}

impl FromStr for PageSize {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: u32 = s
            .trim()
            .parse()
            .map_err(|_| ModelError::InvalidPageSize(s.to_string()))?;
        Self::try_from(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_the_same_key_flips_direction() {
        let first = SortSpec::default().toggled(SortKey::Email);
        assert_eq!(first, SortSpec::by(SortKey::Email, SortDirection::Ascending));

        let second = first.toggled(SortKey::Email);
        assert_eq!(second, SortSpec::by(SortKey::Email, SortDirection::Descending));

        let third = second.toggled(SortKey::Gender);
        assert_eq!(third, SortSpec::by(SortKey::Gender, SortDirection::Ascending));
    }

    #[test]
    fn sort_key_parses_column_names() {
        assert_eq!("first_name".parse::<SortKey>(), Ok(SortKey::FirstName));
        assert_eq!("IP-Address".parse::<SortKey>(), Ok(SortKey::IpAddress));
        assert!(matches!(
            "age".parse::<SortKey>(),
            Err(ModelError::UnknownSortKey(_))
        ));
    }

    #[test]
    fn gender_filter_sentinel() {
        assert_eq!(GenderFilter::parse("all"), GenderFilter::All);
        assert_eq!(
            GenderFilter::parse("Male"),
            GenderFilter::Exact("Male".to_string())
        );
        assert!(GenderFilter::All.matches(""));
        assert!(!GenderFilter::parse("Male").matches("male"));
    }

    #[test]
    fn page_size_accepts_fixed_set_only() {
        assert_eq!("50".parse::<PageSize>(), Ok(PageSize::Fifty));
        assert!(PageSize::try_from(25).is_err());
        assert!("ten".parse::<PageSize>().is_err());
    }

    #[test]
    fn page_size_serializes_as_number() {
        let json = serde_json::to_string(&PageSize::Twenty).unwrap();
        assert_eq!(json, "20");
        let parsed: PageSize = serde_json::from_str("100").unwrap();
        assert_eq!(parsed, PageSize::Hundred);
        assert!(serde_json::from_str::<PageSize>("15").is_err());
    }

    #[test]
    fn direction_orients_comparisons() {
        assert_eq!(SortDirection::Ascending.orient(Ordering::Less), Ordering::Less);
        assert_eq!(
            SortDirection::Descending.orient(Ordering::Less),
            Ordering::Greater
        );
        assert_eq!(
            SortDirection::Descending.orient(Ordering::Equal),
            Ordering::Equal
        );
    }
}
