//! The loose boundary type for upstream breed records.

use serde::Deserialize;

/// One breed record as returned by the upstream breed list endpoint.
///
/// Every field is optional: the upstream schema is loosely typed and drifts,
/// and a record missing its identifier or name must fail *individually* in
/// the transformer rather than failing deserialization of the whole response.
/// Fields the application does not consume are ignored at deserialization.
///
/// Trait scores use the upstream 0-5 scale; `vocalisation` keeps the upstream
/// British spelling on the wire. `hairless` is a 0/1 integer flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawBreed {
    pub id: Option<String>,
    pub name: Option<String>,
    pub temperament: Option<String>,
    pub origin: Option<String>,
    pub description: Option<String>,
    pub life_span: Option<String>,
    pub affection_level: Option<u8>,
    pub energy_level: Option<u8>,
    pub grooming: Option<u8>,
    pub health_issues: Option<u8>,
    pub intelligence: Option<u8>,
    pub shedding_level: Option<u8>,
    pub stranger_friendly: Option<u8>,
    pub vocalisation: Option<u8>,
    pub hairless: Option<u8>,
}

impl RawBreed {
    /// Whether the upstream record explicitly marks the breed hairless.
    #[must_use]
    pub fn is_hairless(&self) -> bool {
        self.hairless == Some(1)
    }
}
