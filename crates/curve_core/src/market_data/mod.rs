//! Calibrated curves and FX data.
//!
//! # Components
//!
//! - [`curve`]: Yield curve trait and the constant curve produced by a build
//! - [`fx`]: Spot FX matrix carried by a multicurve bundle
//! - [`error`]: Market data error types (MarketDataError)
//!
//! # Example
//!
//! ```
//! use curve_core::market_data::{ConstantCurve, YieldCurve};
//!
//! let curve = ConstantCurve::new("USD-3M", 0.05_f64);
//! let df = curve.discount_factor(1.0).unwrap();
//! assert!((df - 0.951229).abs() < 1e-5);
//! ```

pub mod curve;
pub mod error;
pub mod fx;

pub use curve::{ConstantCurve, YieldCurve};
pub use error::MarketDataError;
pub use fx::FxMatrix;
