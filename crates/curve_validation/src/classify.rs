//! Generic classification of requested names.

use std::collections::BTreeSet;
use std::marker::PhantomData;

use curve_core::config::ItemKind;

use crate::result::ValidationResult;

/// Resolution strategy for one kind of reference.
///
/// `lookup` returns every match for a name; `narrow` converts a single match
/// to the expected type, or hands it back when it is of another kind.
pub trait Resolver<N> {
    /// What a lookup returns.
    type Item;
    /// What a match of the expected kind narrows to.
    type Valid;

    /// Every match for `name`.
    fn lookup(&self, name: &N) -> Vec<Self::Item>;

    /// Narrow a unique match to the expected type.
    fn narrow(&self, item: Self::Item) -> Result<Self::Valid, Self::Item>;
}

/// [`Resolver`] built from two closures.
pub struct FnResolver<L, C, I, T> {
    lookup: L,
    narrow: C,
    _marker: PhantomData<fn(I) -> T>,
}

impl<L, C, I, T> FnResolver<L, C, I, T> {
    /// Wrap a lookup and a narrowing closure.
    pub fn new<N>(lookup: L, narrow: C) -> Self
    where
        L: Fn(&N) -> Vec<I>,
        C: Fn(I) -> Result<T, I>,
    {
        Self {
            lookup,
            narrow,
            _marker: PhantomData,
        }
    }
}

impl<N, L, C, I, T> Resolver<N> for FnResolver<L, C, I, T>
where
    L: Fn(&N) -> Vec<I>,
    C: Fn(I) -> Result<T, I>,
{
    type Item = I;
    type Valid = T;

    fn lookup(&self, name: &N) -> Vec<I> {
        (self.lookup)(name)
    }

    fn narrow(&self, item: I) -> Result<T, I> {
        (self.narrow)(item)
    }
}

/// Classify every requested name.
///
/// Per name:
/// - no match: missing
/// - one match of the expected kind: validated
/// - one match of another kind: the match is kept as unsupported
/// - several matches: duplicated, whatever their kinds
///
/// A name requested more than once is classified once.
///
/// # Examples
///
/// ```
/// use curve_core::config::ItemKind;
/// use curve_validation::{classify, FnResolver};
///
/// let resolver = FnResolver::new(
///     |name: &&str| match *name {
///         "one" => vec![1_i64],
///         "negative" => vec![-1],
///         "many" => vec![2, 3],
///         _ => vec![],
///     },
///     |item: i64| u32::try_from(item).map_err(|_| item),
/// );
/// let result = classify(ItemKind::CurveDefinition, ["one", "negative", "many", "none"], &resolver);
///
/// assert_eq!(result.validated()[&"one"], 1);
/// assert_eq!(result.unsupported()[&"negative"], -1);
/// assert!(result.duplicated().contains(&"many"));
/// assert!(result.missing().contains(&"none"));
/// ```
pub fn classify<N, R, I>(
    expected: ItemKind,
    names: I,
    resolver: &R,
) -> ValidationResult<N, R::Valid, R::Item>
where
    N: Ord + Clone,
    R: Resolver<N> + ?Sized,
    I: IntoIterator<Item = N>,
{
    let mut result = ValidationResult::new(expected);
    let mut seen = BTreeSet::new();
    for name in names {
        if !seen.insert(name.clone()) {
            continue;
        }
        let mut matches = resolver.lookup(&name);
        match matches.len() {
            0 => result.insert_missing(name),
            1 => {
                let item = matches.remove(0);
                match resolver.narrow(item) {
                    Ok(valid) => result.insert_validated(name, valid),
                    Err(other) => result.insert_unsupported(name, other),
                }
            }
            _ => result.insert_duplicated(name),
        }
    }
    result
}
