//! Core value types used by tirecat state.

use serde_json::Value;

/// Sorting mode for the results list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Default: keep the order delivered by the catalog.
    #[default]
    Featured,
    /// Cheapest first.
    PriceLow,
    /// Most expensive first.
    PriceHigh,
    /// Newest model year first; entries without a usable year go last.
    Newest,
}

impl SortMode {
    /// All sort modes in cycling order.
    pub const ALL: [Self; 4] = [
        Self::Featured,
        Self::PriceLow,
        Self::PriceHigh,
        Self::Newest,
    ];

    /// Return the string key used in settings files and on the command line.
    ///
    /// Inputs: none
    ///
    /// Output: Static config key string.
    #[must_use]
    pub const fn as_config_key(&self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Newest => "newest",
        }
    }

    /// Parse a sort mode from its settings key or aliases.
    ///
    /// Inputs: `s` config string (case-insensitive).
    ///
    /// Output: `Some(SortMode)` on recognized value; `None` otherwise.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "featured" | "default" => Some(Self::Featured),
            "price-low" | "price-asc" | "cheapest" => Some(Self::PriceLow),
            "price-high" | "price-desc" => Some(Self::PriceHigh),
            "newest" | "year" | "year-desc" => Some(Self::Newest),
            _ => None,
        }
    }

    /// Human-readable label for footers and menus.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::PriceLow => "Price: Low to High",
            Self::PriceHigh => "Price: High to Low",
            Self::Newest => "Newest",
        }
    }

    /// What: Return the next sort mode in cycling order.
    ///
    /// Inputs: none
    ///
    /// Output: The following variant, wrapping from `Newest` back to `Featured`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Featured => Self::PriceLow,
            Self::PriceLow => Self::PriceHigh,
            Self::PriceHigh => Self::Newest,
            Self::Newest => Self::Featured,
        }
    }
}

/// Which product catalog is being browsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProductKind {
    /// Tire variants.
    #[default]
    Tires,
    /// Wheel variants.
    Wheels,
}

impl ProductKind {
    /// Return the REST collection segment and config key for this kind.
    #[must_use]
    pub const fn as_config_key(&self) -> &'static str {
        match self {
            Self::Tires => "tires",
            Self::Wheels => "wheels",
        }
    }

    /// Parse a product kind from a config or CLI value (singular accepted).
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "tires" | "tire" | "tyres" | "tyre" => Some(Self::Tires),
            "wheels" | "wheel" | "rims" => Some(Self::Wheels),
            _ => None,
        }
    }

    /// Title used in the results pane.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Tires => "Tires",
            Self::Wheels => "Wheels",
        }
    }

    /// Switch to the other catalog.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Tires => Self::Wheels,
            Self::Wheels => Self::Tires,
        }
    }

    /// What: Facet dimensions offered for this kind, in display order.
    ///
    /// Inputs: none
    ///
    /// Output: Static slice of dimensions.
    ///
    /// Details:
    /// - Only tires carry a driving type; the engine itself does not care
    ///   and filters on whatever selections are non-empty.
    #[must_use]
    pub const fn facet_dimensions(&self) -> &'static [FacetDimension] {
        match self {
            Self::Tires => &[
                FacetDimension::Brand,
                FacetDimension::Category,
                FacetDimension::Year,
                FacetDimension::Make,
                FacetDimension::Model,
                FacetDimension::Trim,
                FacetDimension::DrivingType,
            ],
            Self::Wheels => &[
                FacetDimension::Brand,
                FacetDimension::Category,
                FacetDimension::Year,
                FacetDimension::Make,
                FacetDimension::Model,
                FacetDimension::Trim,
            ],
        }
    }
}

/// Layout used to present results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// One product per row.
    #[default]
    List,
    /// Cards laid out in columns.
    Grid,
}

impl ViewMode {
    /// Return the settings key for this view mode.
    #[must_use]
    pub const fn as_config_key(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Grid => "grid",
        }
    }

    /// Parse a view mode from its settings key.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "list" | "rows" => Some(Self::List),
            "grid" | "cards" => Some(Self::Grid),
            _ => None,
        }
    }

    /// Switch between list and grid.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::List => Self::Grid,
            Self::Grid => Self::List,
        }
    }
}

/// A named filterable dimension of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FacetDimension {
    /// `brand.name`
    Brand,
    /// `make.make`
    Make,
    /// `model.model`
    Model,
    /// `trim.trim`
    Trim,
    /// `category.name`
    Category,
    /// `year.year`
    Year,
    /// `drivingType`
    DrivingType,
}

impl FacetDimension {
    /// Every dimension the engine knows about.
    pub const ALL: [Self; 7] = [
        Self::Brand,
        Self::Make,
        Self::Model,
        Self::Trim,
        Self::Category,
        Self::Year,
        Self::DrivingType,
    ];

    /// Label used for chips and facet pane tabs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Brand => "Brand",
            Self::Make => "Make",
            Self::Model => "Model",
            Self::Trim => "Trim",
            Self::Category => "Category",
            Self::Year => "Year",
            Self::DrivingType => "Driving type",
        }
    }
}

/// A user-persisted vehicle used to narrow listings to compatible items.
///
/// Created by the vehicle selector (here: `--add-vehicle`), read-only to the
/// filter engine.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedVehicle {
    /// Model year.
    pub year: String,
    /// Manufacturer.
    pub make: String,
    /// Model name; the only field compared against products.
    pub model: String,
    /// Trim level.
    pub trim: String,
    /// Tire size, e.g. `235/45R18`.
    pub tire_size: String,
}

impl SavedVehicle {
    /// What: Build a saved vehicle from one persisted JSON object.
    ///
    /// Inputs:
    /// - `v`: JSON value read from storage
    ///
    /// Output:
    /// - `Some(SavedVehicle)` when `v` is an object; `None` otherwise.
    ///
    /// Details:
    /// - Missing fields become empty strings; numbers are stringified so a
    ///   `"year": 2020` entry survives.
    /// - Accepts `tire_size` as an alias of `tireSize`.
    #[must_use]
    pub fn from_value(v: &Value) -> Option<Self> {
        if !v.is_object() {
            return None;
        }
        Some(Self {
            year: crate::util::text_of(v, &["year"]).unwrap_or_default(),
            make: crate::util::text_of(v, &["make"]).unwrap_or_default(),
            model: crate::util::text_of(v, &["model"]).unwrap_or_default(),
            trim: crate::util::text_of(v, &["trim"]).unwrap_or_default(),
            tire_size: crate::util::text_of(v, &["tireSize", "tire_size"]).unwrap_or_default(),
        })
    }

    /// One-line summary such as `2020 Tesla Model3 LR (235/45R18)`.
    #[must_use]
    pub fn summary(&self) -> String {
        let parts: Vec<&str> = [
            self.year.as_str(),
            self.make.as_str(),
            self.model.as_str(),
            self.trim.as_str(),
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
        let mut out = if parts.is_empty() {
            "(any vehicle)".to_string()
        } else {
            parts.join(" ")
        };
        if !self.tire_size.is_empty() {
            out.push_str(&format!(" ({})", self.tire_size));
        }
        out
    }
}

/// Which pane owns keyboard input in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Typing edits the search term.
    #[default]
    Search,
    /// Arrow keys move through facet options.
    Facets,
    /// Arrow keys move through results.
    Results,
}

impl Focus {
    /// Cycle focus forward.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Search => Self::Facets,
            Self::Facets => Self::Results,
            Self::Results => Self::Search,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ProductKind, SavedVehicle, SortMode, ViewMode};

    #[test]
    /// What: `SortMode` config key mapping roundtrip and alias handling
    ///
    /// - Input: Known keys and aliases; unknown key
    /// - Output: Correct mapping to enum variants; None for unknown
    fn state_sortmode_config_roundtrip_and_aliases() {
        for mode in SortMode::ALL {
            assert_eq!(SortMode::from_config_key(mode.as_config_key()), Some(mode));
        }
        assert_eq!(
            SortMode::from_config_key("price_low"),
            Some(SortMode::PriceLow)
        );
        assert_eq!(
            SortMode::from_config_key(" Price-Desc "),
            Some(SortMode::PriceHigh)
        );
        assert_eq!(SortMode::from_config_key("year"), Some(SortMode::Newest));
        assert_eq!(SortMode::from_config_key("popularity"), None);
    }

    #[test]
    /// What: Sort cycling visits every mode once before wrapping
    fn state_sortmode_next_cycles() {
        let mut m = SortMode::Featured;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(m);
            m = m.next();
        }
        assert_eq!(seen, SortMode::ALL.to_vec());
        assert_eq!(m, SortMode::Featured);
    }

    #[test]
    /// What: Kind and view parsing accept aliases and toggle symmetrically
    fn state_kind_and_view_keys() {
        assert_eq!(ProductKind::from_config_key("Tire"), Some(ProductKind::Tires));
        assert_eq!(ProductKind::from_config_key("rims"), Some(ProductKind::Wheels));
        assert_eq!(ProductKind::from_config_key("cars"), None);
        assert_eq!(ProductKind::Tires.toggled().toggled(), ProductKind::Tires);
        assert_eq!(ViewMode::from_config_key("cards"), Some(ViewMode::Grid));
        assert_eq!(ViewMode::List.toggled(), ViewMode::Grid);
        assert!(
            ProductKind::Tires.facet_dimensions().len()
                > ProductKind::Wheels.facet_dimensions().len()
        );
    }

    #[test]
    /// What: Saved vehicle parsing tolerates numbers and missing fields
    ///
    /// - Input: Object with numeric year and snake_case tire size; non-object
    /// - Output: Stringified fields; None for non-object
    fn state_saved_vehicle_from_value() {
        let v = serde_json::json!({"year": 2020, "make": "Tesla", "model": "Model3", "tire_size": "235/45R18"});
        let sv = SavedVehicle::from_value(&v).expect("object parses");
        assert_eq!(sv.year, "2020");
        assert_eq!(sv.model, "Model3");
        assert_eq!(sv.trim, "");
        assert_eq!(sv.tire_size, "235/45R18");
        assert_eq!(sv.summary(), "2020 Tesla Model3 (235/45R18)");
        assert!(SavedVehicle::from_value(&serde_json::json!("Model3")).is_none());
        assert_eq!(SavedVehicle::default().summary(), "(any vehicle)");
    }
}
