//! City names and the session city list
//!
//! This module defines pure domain types with no knowledge of the terminal
//! toolkit. The list is append-only for the lifetime of the session and
//! lives entirely in memory.

use thiserror::Error;

/// Errors that can occur when constructing a city name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CityNameError {
    /// The submitted text was empty or contained only whitespace
    #[error("city name must not be empty")]
    Empty,
}

/// A non-empty city display string
///
/// Accepted names are stored verbatim: no trimming, truncation, or case
/// transformation. Whatever the user typed is what every screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityName(String);

impl CityName {
    /// Validates and wraps a display string
    ///
    /// # Arguments
    /// * `name` - Text exactly as the user entered it
    ///
    /// # Returns
    /// The wrapped name, or `CityNameError::Empty` for empty or
    /// whitespace-only input
    ///
    /// # Example
    /// ```rust
    /// use citybook::domain::city::CityName;
    ///
    /// let name = CityName::new("Edmonton").unwrap();
    /// assert_eq!(name.as_str(), "Edmonton");
    /// assert!(CityName::new("   ").is_err());
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, CityNameError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CityNameError::Empty);
        }
        Ok(Self(name))
    }

    /// Returns the display string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CityName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, append-only collection of city names for one session
///
/// Insertion order is display order. Duplicates are permitted; the list
/// imposes no uniqueness constraint. Names are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CityList {
    cities: Vec<CityName>,
}

impl CityList {
    /// Creates an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a name at the end of the list
    pub fn push(&mut self, name: CityName) {
        self.cities.push(name);
    }

    /// Returns the name at `index`, or None if out of range
    pub fn get(&self, index: usize) -> Option<&CityName> {
        self.cities.get(index)
    }

    /// Number of names in the list
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Checks whether the list holds no names yet
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Iterates the names in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &CityName> {
        self.cities.iter()
    }
}
