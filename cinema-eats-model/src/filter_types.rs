use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Independent filter dimension exposed in the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Facet {
    Genre,
    Cuisine,
    Decade,
    Meal,
}

impl Facet {
    pub fn all() -> &'static [Facet] {
        use Facet::*;
        &[Genre, Cuisine, Decade, Meal]
    }

    /// Key used by the filter bar and persisted selections.
    pub fn key(&self) -> &'static str {
        match self {
            Facet::Genre => "genre",
            Facet::Cuisine => "cuisine",
            Facet::Decade => "decade",
            Facet::Meal => "meal",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Facet {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Facet::all()
            .iter()
            .copied()
            .find(|facet| facet.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::UnknownFacet(s.to_string()))
    }
}

/// Release decade derived from a film's year: `floor(year / 10) * 10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decade(u16);

impl Decade {
    pub fn from_year(year: u16) -> Self {
        Decade(year / 10 * 10)
    }

    pub fn start_year(&self) -> u16 {
        self.0
    }

    /// Filter label, e.g. `1990s`.
    pub fn label(&self) -> String {
        format!("{}s", self.0)
    }
}

impl fmt::Display for Decade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

impl FromStr for Decade {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidDecade(s.to_string());
        let trimmed = s.trim();
        let digits = trimmed
            .strip_suffix('s')
            .or_else(|| trimmed.strip_suffix('S'))
            .ok_or_else(invalid)?;
        let start: u16 = digits.parse().map_err(|_| invalid())?;
        if start % 10 != 0 {
            return Err(invalid());
        }
        Ok(Decade(start))
    }
}

/// Selected values per facet.
///
/// Values are stored lowercase. A facet with no selected values places no
/// constraint on the result; it never means "exclude everything".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterSelection {
    #[cfg_attr(feature = "serde", serde(default))]
    facets: BTreeMap<Facet, BTreeSet<String>>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check or uncheck `value` for `facet`. Returns whether anything changed.
    pub fn set(&mut self, facet: Facet, value: &str, selected: bool) -> bool {
        if selected {
            self.select(facet, value)
        } else {
            self.deselect(facet, value)
        }
    }

    pub fn select(&mut self, facet: Facet, value: &str) -> bool {
        let value = normalize(value);
        if value.is_empty() {
            return false;
        }
        self.facets.entry(facet).or_default().insert(value)
    }

    pub fn deselect(&mut self, facet: Facet, value: &str) -> bool {
        let value = normalize(value);
        let Some(values) = self.facets.get_mut(&facet) else {
            return false;
        };
        let removed = values.remove(&value);
        if values.is_empty() {
            self.facets.remove(&facet);
        }
        removed
    }

    /// Selected values for `facet`, `None` when the facet is unconstrained.
    pub fn values(&self, facet: Facet) -> Option<&BTreeSet<String>> {
        self.facets.get(&facet).filter(|values| !values.is_empty())
    }

    pub fn is_selected(&self, facet: Facet, value: &str) -> bool {
        self.values(facet)
            .is_some_and(|values| values.contains(&normalize(value)))
    }

    /// True when no facet carries a constraint.
    pub fn is_unconstrained(&self) -> bool {
        self.facets.values().all(BTreeSet::is_empty)
    }

    pub fn clear(&mut self) {
        self.facets.clear();
    }

    /// Every selected `(facet, value)` pair, in facet then value order.
    pub fn active(&self) -> impl Iterator<Item = (Facet, &str)> + '_ {
        self.facets.iter().flat_map(|(facet, values)| {
            values.iter().map(move |value| (*facet, value.as_str()))
        })
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}
