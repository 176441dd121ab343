//! Multicurve bundle: discount and forward curves keyed by currency and index.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::market_data::{ConstantCurve, FxMatrix};
use crate::reference::Index;
use crate::types::Currency;

/// A currency or index is already attached to a different curve.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{attachment} is already attached to curve {existing}, cannot attach {attempted}")]
pub struct AttachmentConflict {
    /// Currency code or index held
    pub attachment: String,
    /// Curve holding the attachment
    pub existing: String,
    /// Curve that asked for it
    pub attempted: String,
}

/// Discount and forward curves built by one build call.
///
/// Curves are stored once by name; currencies and indices refer to them by
/// name, so one curve can be attached under several keys.
///
/// # Examples
///
/// ```
/// use curve_core::bundle::MulticurveBundle;
/// use curve_core::market_data::ConstantCurve;
/// use curve_core::types::Currency;
///
/// let mut bundle = MulticurveBundle::new();
/// bundle.add_curve(ConstantCurve::new("USD-OIS", 0.05));
/// bundle.set_discount_curve(Currency::USD, "USD-OIS").unwrap();
///
/// assert_eq!(bundle.discount_curve(Currency::USD).unwrap().rate(), 0.05);
/// assert!(bundle.discount_curve(Currency::EUR).is_none());
/// assert!(bundle.set_discount_curve(Currency::USD, "USD-FF").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MulticurveBundle {
    curves: BTreeMap<String, ConstantCurve<f64>>,
    discounting: BTreeMap<Currency, String>,
    forwards: BTreeMap<Index, String>,
    fx: FxMatrix,
}

impl MulticurveBundle {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a curve by its name.
    pub fn add_curve(&mut self, curve: ConstantCurve<f64>) {
        self.curves.insert(curve.name().to_string(), curve);
    }

    /// Attach a curve as the discount curve of a currency.
    ///
    /// Re-attaching the same curve is a no-op.
    ///
    /// # Errors
    ///
    /// `AttachmentConflict` when another curve already discounts the
    /// currency; the existing attachment is kept.
    pub fn set_discount_curve(
        &mut self,
        currency: Currency,
        curve: impl Into<String>,
    ) -> Result<(), AttachmentConflict> {
        attach(&mut self.discounting, currency, curve.into(), |c| c.to_string())
    }

    /// Attach a curve as the forward curve of an index.
    ///
    /// # Errors
    ///
    /// `AttachmentConflict` when another curve already projects the index.
    pub fn set_forward_curve(
        &mut self,
        index: Index,
        curve: impl Into<String>,
    ) -> Result<(), AttachmentConflict> {
        attach(&mut self.forwards, index, curve.into(), |i| i.to_string())
    }

    /// Curve by name.
    pub fn curve(&self, name: &str) -> Option<&ConstantCurve<f64>> {
        self.curves.get(name)
    }

    /// Whether a curve with this name is held.
    pub fn contains_curve(&self, name: &str) -> bool {
        self.curves.contains_key(name)
    }

    /// Discount curve of a currency.
    pub fn discount_curve(&self, currency: Currency) -> Option<&ConstantCurve<f64>> {
        self.discounting
            .get(&currency)
            .and_then(|name| self.curves.get(name))
    }

    /// Forward curve of an index.
    pub fn forward_curve(&self, index: &Index) -> Option<&ConstantCurve<f64>> {
        self.forwards.get(index).and_then(|name| self.curves.get(name))
    }

    /// Forward curve of the first index with the given name.
    pub fn forward_curve_by_name(&self, index_name: &str) -> Option<&ConstantCurve<f64>> {
        self.forwards
            .iter()
            .find(|(index, _)| index.name() == index_name)
            .and_then(|(_, name)| self.curves.get(name))
    }

    /// Currency to curve name attachments.
    pub fn discounting(&self) -> &BTreeMap<Currency, String> {
        &self.discounting
    }

    /// Index to curve name attachments.
    pub fn forwards(&self) -> &BTreeMap<Index, String> {
        &self.forwards
    }

    /// Every curve, ordered by name.
    pub fn curves(&self) -> impl Iterator<Item = &ConstantCurve<f64>> + '_ {
        self.curves.values()
    }

    /// Curve names, ordered.
    pub fn curve_names(&self) -> Vec<String> {
        self.curves.keys().cloned().collect()
    }

    /// The FX matrix.
    pub fn fx_matrix(&self) -> &FxMatrix {
        &self.fx
    }

    /// Mutable access to the FX matrix.
    pub fn fx_matrix_mut(&mut self) -> &mut FxMatrix {
        &mut self.fx
    }

    /// Copy curves, attachments and FX rates of `other` into this bundle.
    ///
    /// Curves and FX rates of `other` replace those with the same key.
    /// Attachments shared with the same curve, as from a common ancestor,
    /// are accepted.
    ///
    /// # Errors
    ///
    /// `AttachmentConflict` when `other` attaches a currency or index to a
    /// different curve than this bundle does. Nothing is merged then.
    pub fn merge(&mut self, other: &MulticurveBundle) -> Result<(), AttachmentConflict> {
        for (currency, name) in &other.discounting {
            check_free(&self.discounting, currency, name, |c| c.to_string())?;
        }
        for (index, name) in &other.forwards {
            check_free(&self.forwards, index, name, |i| i.to_string())?;
        }

        for (name, curve) in &other.curves {
            self.curves.insert(name.clone(), curve.clone());
        }
        for (currency, name) in &other.discounting {
            self.discounting.insert(*currency, name.clone());
        }
        for (index, name) in &other.forwards {
            self.forwards.insert(index.clone(), name.clone());
        }
        self.fx.merge(&other.fx);
        Ok(())
    }

    /// Number of curves.
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Whether the bundle holds no curves.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

fn check_free<K: Ord>(
    attachments: &BTreeMap<K, String>,
    key: &K,
    curve: &str,
    describe: impl Fn(&K) -> String,
) -> Result<(), AttachmentConflict> {
    match attachments.get(key) {
        Some(existing) if existing != curve => Err(AttachmentConflict {
            attachment: describe(key),
            existing: existing.clone(),
            attempted: curve.to_string(),
        }),
        _ => Ok(()),
    }
}

fn attach<K: Ord>(
    attachments: &mut BTreeMap<K, String>,
    key: K,
    curve: String,
    describe: impl Fn(&K) -> String,
) -> Result<(), AttachmentConflict> {
    check_free(attachments, &key, &curve, describe)?;
    attachments.insert(key, curve);
    Ok(())
}
