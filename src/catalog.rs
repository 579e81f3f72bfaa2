//! A catalog of named colors and named groups of colors.
//!
//! Catalogs are read from TOML files with a `[colors]` table that maps names
//! to hex codes and a `[groups]` table that maps names to lists of hex codes:
//!
//! ```toml
//! [colors]
//! "alice blue" = "#f0f8ff"
//! tomato = "#ff6347"
//!
//! [groups]
//! primary = ["#ff0000", "#00ff00", "#0000ff"]
//! ```
//!
//! Names are looked up without regard to case, and underscores match
//! spaces, so `Alice_Blue` finds `alice blue`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::color::{Color, Component};
use crate::difference::color_difference;
use crate::error::ParseError;

const BUNDLED: &str = include_str!("../resources/colors.toml");

/// Errors while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },
    /// The catalog is not valid TOML or does not have the expected tables.
    #[error("failed to parse catalog: {0}")]
    Toml(#[from] toml::de::Error),
    /// An entry holds something other than a hex color code.
    #[error("invalid color {value:?} for {name:?}: {source}")]
    InvalidColor {
        /// The name of the entry.
        name: String,
        /// The rejected value.
        value: String,
        /// Why the value was rejected.
        source: ParseError,
    },
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    colors: BTreeMap<String, String>,
    #[serde(default)]
    groups: BTreeMap<String, Vec<String>>,
}

/// Normalize a color name for lookups: lowercase with underscores replaced
/// by spaces.
///
/// ```rust
/// assert_eq!(colorkit::catalog::normalize_name("Alice_Blue"), "alice blue");
/// ```
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase().replace('_', " ")
}

/// Named colors and named groups of colors. Every color in the catalog
/// carries its name, colors in a group carry the name of the group.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    colors: BTreeMap<String, Color>,
    groups: BTreeMap<String, Vec<Color>>,
}

impl Catalog {
    /// The catalog shipped with colorkit: the CSS named colors, plus a few
    /// groups.
    ///
    /// ```rust
    /// use colorkit::{catalog::Catalog, Color};
    ///
    /// let catalog = Catalog::bundled().unwrap();
    /// assert_eq!(catalog.get("Rebecca_Purple"), Some(&Color::rgb(102, 51, 153)));
    /// assert_eq!(catalog.group("rainbow").map(<[Color]>::len), Some(7));
    /// ```
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUNDLED)
    }

    /// Parse a catalog from the contents of a TOML file.
    pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();
        catalog.extend_from_toml_str(source)?;
        Ok(catalog)
    }

    /// Read a catalog from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();
        catalog.extend_from_file(path)?;
        Ok(catalog)
    }

    /// Add the entries of a TOML file to this catalog. Entries with a name
    /// that is already in the catalog replace the existing entry.
    pub fn extend_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), CatalogError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.extend_from_source(&source, Some(path))
    }

    /// Add the entries of a TOML document to this catalog. Nothing is added
    /// if any entry is invalid.
    pub fn extend_from_toml_str(&mut self, source: &str) -> Result<(), CatalogError> {
        self.extend_from_source(source, None)
    }

    fn extend_from_source(
        &mut self,
        source: &str,
        path: Option<&Path>,
    ) -> Result<(), CatalogError> {
        let file: CatalogFile = toml::from_str(source)?;

        let colors = file
            .colors
            .into_iter()
            .map(|(name, value)| {
                let name = normalize_name(&name);
                let color = parse_entry(&name, &value)?.with_name(name.clone());
                Ok((name, color))
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        let groups = file
            .groups
            .into_iter()
            .map(|(name, values)| {
                let name = normalize_name(&name);
                let colors = values
                    .iter()
                    .map(|value| Ok(parse_entry(&name, value)?.with_name(name.clone())))
                    .collect::<Result<Vec<_>, CatalogError>>()?;
                Ok((name, colors))
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        let (added_colors, added_groups) = (colors.len(), groups.len());
        self.colors.extend(colors);
        self.groups.extend(groups);

        tracing::debug!(
            path = ?path,
            added_colors,
            added_groups,
            colors = self.colors.len(),
            groups = self.groups.len(),
            "extended color catalog"
        );
        Ok(())
    }

    /// Look up a named color.
    pub fn get(&self, name: &str) -> Option<&Color> {
        self.colors.get(&normalize_name(name))
    }

    /// Look up a named group of colors.
    pub fn group(&self, name: &str) -> Option<&[Color]> {
        self.groups.get(&normalize_name(name)).map(Vec::as_slice)
    }

    /// The normalized names of all colors, in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    /// The normalized names of all groups, in alphabetical order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// The number of named colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the catalog has no named colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The named color closest to `color` by CIEDE2000. Of equally close
    /// colors the one that comes first alphabetically wins.
    pub fn closest_name(&self, color: &Color) -> Option<&Color> {
        let mut best: Option<(&Color, Component)> = None;
        for candidate in self.colors.values() {
            let distance = color_difference(color, candidate);
            if best.map_or(true, |(_, best)| distance < best) {
                best = Some((candidate, distance));
            }
        }
        best.map(|(candidate, _)| candidate)
    }
}

fn parse_entry(name: &str, value: &str) -> Result<Color, CatalogError> {
    Color::from_hex(value).map_err(|source| CatalogError::InvalidColor {
        name: name.to_string(),
        value: value.to_string(),
        source,
    })
}
