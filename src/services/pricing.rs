use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{CLASS_PRICES, DEFAULT_PACKAGE, EXAM_PRICES, PACKAGES, Package, PricedItem};
use crate::services::money::Money;

/// Orders above this head count get the bulk badge.
const BULK_QUANTITY: i64 = 5;
/// Totals above this get the enterprise hint.
const ENTERPRISE_HINT_TOTAL: Money = Money::from_dollars(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Package,
    Exam,
    Class,
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ItemKind::Package => "package",
            ItemKind::Exam => "exam",
            ItemKind::Class => "class",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("Unknown {kind} id: {id}")]
    UnknownItem { kind: ItemKind, id: String },

    #[error("Quantity must be at least 1, got {0}")]
    InvalidQuantity(i64),

    #[error("Quote for quantity {0} exceeds the supported amount")]
    AmountOverflow(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QuoteSelection {
    pub package: Option<String>,
    pub exams: BTreeSet<String>,
    pub classes: BTreeSet<String>,
    pub quantity: i64,
}

impl Default for QuoteSelection {
    fn default() -> Self {
        Self {
            package: None,
            exams: BTreeSet::new(),
            classes: BTreeSet::new(),
            quantity: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Quote {
    pub package: &'static Package,
    pub exams: Vec<&'static PricedItem>,
    pub classes: Vec<&'static PricedItem>,
    pub quantity: i64,
    pub subtotal: Money,
    pub discount: Money,
    pub total: Money,
    pub bulk_order: bool,
    pub enterprise_eligible: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct PriceCatalog {
    packages: &'static [Package],
    exams: &'static [PricedItem],
    classes: &'static [PricedItem],
    default_package: &'static str,
}

impl Default for PriceCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceCatalog {
    pub fn new() -> Self {
        Self {
            packages: PACKAGES,
            exams: EXAM_PRICES,
            classes: CLASS_PRICES,
            default_package: DEFAULT_PACKAGE,
        }
    }

    pub fn packages(&self) -> &'static [Package] {
        self.packages
    }

    pub fn exams(&self) -> &'static [PricedItem] {
        self.exams
    }

    pub fn classes(&self) -> &'static [PricedItem] {
        self.classes
    }

    pub fn package(&self, id: &str) -> Result<&'static Package, PricingError> {
        self.packages
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| PricingError::UnknownItem {
                kind: ItemKind::Package,
                id: id.to_string(),
            })
    }

    pub fn quote(&self, selection: &QuoteSelection) -> Result<Quote, PricingError> {
        if selection.quantity < 1 {
            return Err(PricingError::InvalidQuantity(selection.quantity));
        }

        let package = self.package(
            selection
                .package
                .as_deref()
                .unwrap_or(self.default_package),
        )?;
        let exams = resolve(self.exams, &selection.exams, ItemKind::Exam)?;
        let classes = resolve(self.classes, &selection.classes, ItemKind::Class)?;

        let per_person = package.base_price
            + exams.iter().map(|i| i.price).sum::<Money>()
            + classes.iter().map(|i| i.price).sum::<Money>();
        let overflow = || PricingError::AmountOverflow(selection.quantity);
        let subtotal = per_person
            .checked_mul(selection.quantity)
            .ok_or_else(overflow)?;
        let discount = subtotal
            .apply_rate(package.discount_bps)
            .ok_or_else(overflow)?;
        let total = subtotal - discount;

        Ok(Quote {
            package,
            exams,
            classes,
            quantity: selection.quantity,
            subtotal,
            discount,
            total,
            bulk_order: selection.quantity > BULK_QUANTITY,
            enterprise_eligible: total > ENTERPRISE_HINT_TOTAL,
        })
    }
}

fn resolve(
    items: &'static [PricedItem],
    ids: &BTreeSet<String>,
    kind: ItemKind,
) -> Result<Vec<&'static PricedItem>, PricingError> {
    ids.iter()
        .map(|id| {
            items
                .iter()
                .find(|item| item.id == id.as_str())
                .ok_or_else(|| PricingError::UnknownItem { kind, id: id.clone() })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_package_uses_default() {
        let catalog = PriceCatalog::new();
        let quote = catalog
            .quote(&QuoteSelection::default())
            .unwrap();
        assert_eq!(quote.package.id, "premium");
        assert_eq!(quote.subtotal, Money::from_dollars(299));
    }

    #[test]
    fn unknown_package_is_rejected() {
        let catalog = PriceCatalog::new();
        let err = catalog
            .quote(&QuoteSelection {
                package: Some("gold".into()),
                quantity: 1,
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(
            err,
            PricingError::UnknownItem { kind: ItemKind::Package, id: "gold".into() }
        );
    }
}
