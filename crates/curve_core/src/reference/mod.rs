//! Reference data: index securities, index conventions and the indices
//! resolved from them.

pub mod convention;
pub mod index;
pub mod security;

pub use convention::{
    Convention, GenericConvention, IborIndexConvention, OvernightIndexConvention,
};
pub use index::{IborIndex, Index, OvernightIndex};
pub use security::{GenericSecurity, IborIndexSecurity, OvernightIndexSecurity, Security};
