//! Index securities.

use crate::types::{ExternalId, Tenor};

/// Security describing an ibor index fixing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IborIndexSecurity {
    /// Security identifier
    pub id: ExternalId,
    /// Display name
    pub name: String,
    /// Convention the index follows
    pub convention_id: ExternalId,
    /// Index tenor
    pub tenor: Tenor,
}

/// Security describing an overnight index fixing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OvernightIndexSecurity {
    /// Security identifier
    pub id: ExternalId,
    /// Display name
    pub name: String,
    /// Convention the index follows
    pub convention_id: ExternalId,
}

/// Any other security, identified only by its type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenericSecurity {
    /// Security identifier
    pub id: ExternalId,
    /// Security type, e.g. `EQUITY`
    pub security_type: String,
}

/// A security held by a security source.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "security_kind", rename_all = "snake_case")
)]
pub enum Security {
    /// Ibor index security
    IborIndex(IborIndexSecurity),
    /// Overnight index security
    OvernightIndex(OvernightIndexSecurity),
    /// Any other security
    Generic(GenericSecurity),
}

impl Security {
    /// Identifier the security is stored under.
    pub fn id(&self) -> &ExternalId {
        match self {
            Security::IborIndex(security) => &security.id,
            Security::OvernightIndex(security) => &security.id,
            Security::Generic(security) => &security.id,
        }
    }

    /// Security type name.
    pub fn security_type(&self) -> &str {
        match self {
            Security::IborIndex(_) => "IBOR_INDEX",
            Security::OvernightIndex(_) => "OVERNIGHT_INDEX",
            Security::Generic(security) => &security.security_type,
        }
    }

    /// Narrow to an ibor index security.
    pub fn as_ibor_index(&self) -> Option<&IborIndexSecurity> {
        match self {
            Security::IborIndex(security) => Some(security),
            _ => None,
        }
    }

    /// Narrow to an overnight index security.
    pub fn as_overnight_index(&self) -> Option<&OvernightIndexSecurity> {
        match self {
            Security::OvernightIndex(security) => Some(security),
            _ => None,
        }
    }
}

impl From<IborIndexSecurity> for Security {
    fn from(security: IborIndexSecurity) -> Self {
        Security::IborIndex(security)
    }
}

impl From<OvernightIndexSecurity> for Security {
    fn from(security: OvernightIndexSecurity) -> Self {
        Security::OvernightIndex(security)
    }
}

impl From<GenericSecurity> for Security {
    fn from(security: GenericSecurity) -> Self {
        Security::Generic(security)
    }
}
