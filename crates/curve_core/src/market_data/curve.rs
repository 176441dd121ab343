//! Yield curve trait and the constant (single quoted level) curve.

use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Generic yield curve trait for discount factor and rate calculations.
///
/// # Invariants
///
/// - D(0) = 1
/// - D(t) > 0 for all t >= 0
pub trait YieldCurve<T: Float> {
    /// Return the discount factor for maturity `t`.
    ///
    /// # Errors
    ///
    /// `MarketDataError::InvalidMaturity` if `t < 0`.
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError>;

    /// Return the continuously compounded zero rate for maturity `t`.
    ///
    /// The default implementation derives the rate from the discount factor:
    /// ```text
    /// r(t) = -ln(D(t)) / t
    /// ```
    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        if t <= T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        let df = self.discount_factor(t)?;
        Ok(-df.ln() / t)
    }

    /// Return the forward rate between `t1` and `t2`.
    fn forward_rate(&self, t1: T, t2: T) -> Result<T, MarketDataError> {
        if t2 <= t1 {
            return Err(MarketDataError::InvalidMaturity {
                t: (t2 - t1).to_f64().unwrap_or(0.0),
            });
        }
        let df1 = self.discount_factor(t1)?;
        let df2 = self.discount_factor(t2)?;
        Ok((df1 / df2).ln() / (t2 - t1))
    }
}

/// Named yield curve at a single quoted level.
///
/// The result of calibrating a curve whose definition reduces to one market
/// quote: the quote is used directly as a continuously compounded rate for
/// every maturity, and the curve has exactly one parameter.
///
/// # Example
///
/// ```
/// use curve_core::market_data::{ConstantCurve, YieldCurve};
///
/// let curve = ConstantCurve::new("USD-OIS", 0.05_f64);
/// assert_eq!(curve.name(), "USD-OIS");
///
/// let df = curve.discount_factor(1.0).unwrap();
/// assert!((df - 0.951229).abs() < 1e-5);
/// assert_eq!(curve.zero_rate(5.0).unwrap(), 0.05);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstantCurve<T: Float> {
    name: String,
    rate: T,
}

impl<T: Float> ConstantCurve<T> {
    /// Construct a constant curve from its name and quoted rate.
    #[inline]
    pub fn new(name: impl Into<String>, rate: T) -> Self {
        Self {
            name: name.into(),
            rate,
        }
    }

    /// The curve name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The quoted rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Number of calibrated parameters (always one).
    #[inline]
    pub fn parameter_count(&self) -> usize {
        1
    }
}

impl<T: Float> YieldCurve<T> for ConstantCurve<T> {
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        Ok((-self.rate * t).exp())
    }

    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        if t <= T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        Ok(self.rate)
    }
}
