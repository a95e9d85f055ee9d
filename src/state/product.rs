//! Catalog product record and its lenient wire mapping.

use serde_json::{Map, Value, json};

use crate::state::types::FacetDimension;
use crate::util::{arrs, f64_of, s, text_of};

/// A tire or wheel variant as listed by the storefront.
///
/// Facet-bearing references are stored as their display strings. On the wire
/// they are nested objects (`{"brand": {"name": "Acme"}}`); anything else,
/// including a missing or blank display name, is kept as `None`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct Product {
    /// Opaque identifier (`id` or `_id`).
    pub id: String,
    /// Display name; searched case-insensitively.
    pub name: String,
    /// Long description; searched case-insensitively.
    pub description: String,
    /// `brand.name`
    pub brand: Option<String>,
    /// `make.make`
    pub make: Option<String>,
    /// `model.model`
    pub model: Option<String>,
    /// `trim.trim`
    pub trim: Option<String>,
    /// `category.name`
    pub category: Option<String>,
    /// `year.year`, rendered as text (`2020`).
    pub year: Option<String>,
    /// `drivingType` (tires only).
    pub driving_type: Option<String>,
    /// Size designation such as `225/45R17`.
    pub size: Option<String>,
    /// List price, never negative.
    pub price: f64,
    /// Sale price; only kept when not above `price`.
    pub discount_price: Option<f64>,
    /// Relative image paths in display order.
    pub images: Vec<String>,
}

impl Product {
    /// What: Create a product with only identity and name set.
    ///
    /// Inputs:
    /// - `id`: Identifier
    /// - `name`: Display name
    ///
    /// Output:
    /// - Product with zero price and every facet absent.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the display value of one facet dimension.
    #[must_use]
    pub fn with_facet(mut self, dim: FacetDimension, value: impl Into<String>) -> Self {
        *self.facet_slot(dim) = Some(value.into());
        self
    }

    /// Set the list price.
    #[must_use]
    pub const fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Set the description text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// What: Return the display value this product carries for a facet dimension.
    ///
    /// Inputs:
    /// - `dim`: Facet dimension
    ///
    /// Output:
    /// - `Some(&str)` when present; `None` when the reference is absent.
    #[must_use]
    pub fn facet_value(&self, dim: FacetDimension) -> Option<&str> {
        match dim {
            FacetDimension::Brand => self.brand.as_deref(),
            FacetDimension::Make => self.make.as_deref(),
            FacetDimension::Model => self.model.as_deref(),
            FacetDimension::Trim => self.trim.as_deref(),
            FacetDimension::Category => self.category.as_deref(),
            FacetDimension::Year => self.year.as_deref(),
            FacetDimension::DrivingType => self.driving_type.as_deref(),
        }
    }

    fn facet_slot(&mut self, dim: FacetDimension) -> &mut Option<String> {
        match dim {
            FacetDimension::Brand => &mut self.brand,
            FacetDimension::Make => &mut self.make,
            FacetDimension::Model => &mut self.model,
            FacetDimension::Trim => &mut self.trim,
            FacetDimension::Category => &mut self.category,
            FacetDimension::Year => &mut self.year,
            FacetDimension::DrivingType => &mut self.driving_type,
        }
    }

    /// Model year as a number; `f64::NEG_INFINITY` when absent or non-numeric.
    #[must_use]
    pub fn year_number(&self) -> f64 {
        crate::util::year_number(self.year.as_deref())
    }

    /// Price the customer pays: the discount when present, else the list price.
    #[must_use]
    pub fn effective_price(&self) -> f64 {
        self.discount_price.unwrap_or(self.price)
    }

    /// What: Normalize one catalog JSON entry into a `Product`.
    ///
    /// Inputs:
    /// - `v`: JSON value from the REST response or a cache file
    ///
    /// Output:
    /// - `Some(Product)` for JSON objects; `None` for anything else.
    ///
    /// Details:
    /// - Price accepts numbers or numeric strings; missing or negative becomes `0`.
    /// - A discount above the list price is dropped.
    /// - `drivingType` may be a plain string or a `{name}` object.
    #[must_use]
    pub fn from_value(v: &Value) -> Option<Self> {
        if !v.is_object() {
            return None;
        }
        let price = f64_of(v, &["price"]).unwrap_or(0.0).max(0.0);
        let discount_price = f64_of(v, &["discountPrice", "discount_price"])
            .filter(|d| *d >= 0.0 && *d <= price);
        let driving_type = match v.get("drivingType").or_else(|| v.get("driving_type")) {
            Some(Value::String(s)) => non_blank(s.clone()),
            Some(obj @ Value::Object(_)) => text_of(obj, &["name", "type"]).and_then(non_blank),
            _ => None,
        };
        Some(Self {
            id: text_of(v, &["id", "_id"]).unwrap_or_default(),
            name: s(v, "name"),
            description: s(v, "description"),
            brand: reference(v, "brand", "name"),
            make: reference(v, "make", "make"),
            model: reference(v, "model", "model"),
            trim: reference(v, "trim", "trim"),
            category: reference(v, "category", "name"),
            year: reference(v, "year", "year"),
            driving_type,
            size: text_of(v, &["size", "tireSize"]).and_then(non_blank),
            price,
            discount_price,
            images: arrs(v, &["images"]),
        })
    }
}

/// What: Read the display name of a nested reference object.
///
/// Inputs:
/// - `v`: Product JSON object
/// - `field`: Reference field (`brand`, `model`, ...)
/// - `key`: Display key inside the reference (`name`, `model`, ...)
///
/// Output:
/// - Display string, or `None` when the reference is not an object, lacks the
///   key, or is blank.
fn reference(v: &Value, field: &str, key: &str) -> Option<String> {
    let obj = v.get(field).filter(|r| r.is_object())?;
    text_of(obj, &[key, "name"]).and_then(non_blank)
}

fn non_blank(s: String) -> Option<String> {
    if s.trim().is_empty() { None } else { Some(s) }
}

impl TryFrom<Value> for Product {
    type Error = String;

    fn try_from(v: Value) -> Result<Self, Self::Error> {
        Self::from_value(&v).ok_or_else(|| "product entry is not a JSON object".to_string())
    }
}

impl From<Product> for Value {
    fn from(p: Product) -> Self {
        let mut m = Map::new();
        m.insert("id".into(), Value::String(p.id));
        m.insert("name".into(), Value::String(p.name));
        m.insert("description".into(), Value::String(p.description));
        let refs = [
            ("brand", "name", p.brand),
            ("make", "make", p.make),
            ("model", "model", p.model),
            ("trim", "trim", p.trim),
            ("category", "name", p.category),
        ];
        for (field, key, value) in refs {
            if let Some(value) = value {
                m.insert(field.into(), json!({ key: value }));
            }
        }
        if let Some(year) = p.year {
            // Keep numeric years numeric so the output matches the upstream shape.
            let y = year
                .trim()
                .parse::<i64>()
                .map_or_else(|_| Value::String(year.clone()), Value::from);
            m.insert("year".into(), json!({ "year": y }));
        }
        if let Some(dt) = p.driving_type {
            m.insert("drivingType".into(), Value::String(dt));
        }
        if let Some(size) = p.size {
            m.insert("size".into(), Value::String(size));
        }
        m.insert("price".into(), json!(p.price));
        if let Some(d) = p.discount_price {
            m.insert("discountPrice".into(), json!(d));
        }
        m.insert(
            "images".into(),
            Value::Array(p.images.into_iter().map(Value::String).collect()),
        );
        Self::Object(m)
    }
}
