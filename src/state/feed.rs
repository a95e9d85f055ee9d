//! Raw product list as delivered by the catalog source.

use crate::state::product::Product;

/// Raw product list plus the fetch collaborator's status flags.
///
/// The pipeline only reads [`ProductFeed::usable_items`], which is empty
/// while loading or after a failure.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductFeed {
    /// Products in the order the backend returned them.
    pub items: Vec<Product>,
    /// A fetch is still in flight.
    pub loading: bool,
    /// Last fetch failed with this message.
    pub error: Option<String>,
}

impl ProductFeed {
    /// Feed for a fetch that has not completed yet.
    #[must_use]
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// Feed holding a successfully fetched list.
    #[must_use]
    pub const fn ready(items: Vec<Product>) -> Self {
        Self {
            items,
            loading: false,
            error: None,
        }
    }

    /// Feed for a failed fetch.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: Some(message.into()),
        }
    }

    /// What: Items the pipeline may compute over.
    ///
    /// Inputs: none
    ///
    /// Output:
    /// - The item slice, or an empty slice while loading or after an error.
    #[must_use]
    pub fn usable_items(&self) -> &[Product] {
        if self.loading || self.error.is_some() {
            &[]
        } else {
            &self.items
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Loading and failed feeds expose no items even if some are present
    fn feed_usable_items_respects_flags() {
        let items = vec![Product::new("1", "Alpha")];
        assert_eq!(ProductFeed::ready(items.clone()).usable_items().len(), 1);
        let mut loading = ProductFeed::loading();
        loading.items = items.clone();
        assert!(loading.usable_items().is_empty());
        let mut failed = ProductFeed::failed("timeout");
        failed.items = items;
        assert!(failed.usable_items().is_empty());
    }
}
