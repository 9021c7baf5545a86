use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Catalog object classification as reported by the tracking API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectType {
    #[cfg_attr(feature = "serde", serde(rename = "ROCKET BODY"))]
    RocketBody,
    #[cfg_attr(feature = "serde", serde(rename = "DEBRIS"))]
    Debris,
    #[cfg_attr(feature = "serde", serde(rename = "UNKNOWN"))]
    Unknown,
    #[cfg_attr(feature = "serde", serde(rename = "PAYLOAD"))]
    Payload,
}

impl ObjectType {
    pub fn all() -> &'static [ObjectType] {
        use ObjectType::*;
        &[RocketBody, Debris, Unknown, Payload]
    }

    pub fn api_name(&self) -> &'static str {
        match self {
            ObjectType::RocketBody => "ROCKET BODY",
            ObjectType::Debris => "DEBRIS",
            ObjectType::Unknown => "UNKNOWN",
            ObjectType::Payload => "PAYLOAD",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}

impl FromStr for ObjectType {
    type Err = ModelError;

    /// Accepts wire names case-insensitively, with `_` or `-` standing in for
    /// the space in `ROCKET BODY`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().replace(['_', '-'], " ").to_uppercase();
        ObjectType::all()
            .iter()
            .copied()
            .find(|candidate| candidate.api_name() == normalized)
            .ok_or_else(|| ModelError::UnknownObjectType(raw.to_string()))
    }
}

/// Orbit regime codes. The API wraps these in braces (`{LEO}`); the enum
/// holds the bare code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum OrbitCode {
    Leo,
    Leo1,
    Leo2,
    Leo3,
    Leo4,
    Meo,
    Geo,
    Heo,
    Igo,
    Ego,
    Nso,
    Gto,
    Gho,
    Hao,
    Mgo,
    Lmo,
    Ufo,
    Eso,
    Unknown,
}

impl OrbitCode {
    pub fn all() -> &'static [OrbitCode] {
        use OrbitCode::*;
        &[
            Leo, Leo1, Leo2, Leo3, Leo4, Meo, Geo, Heo, Igo, Ego, Nso, Gto,
            Gho, Hao, Mgo, Lmo, Ufo, Eso, Unknown,
        ]
    }

    pub fn api_name(&self) -> &'static str {
        match self {
            OrbitCode::Leo => "LEO",
            OrbitCode::Leo1 => "LEO1",
            OrbitCode::Leo2 => "LEO2",
            OrbitCode::Leo3 => "LEO3",
            OrbitCode::Leo4 => "LEO4",
            OrbitCode::Meo => "MEO",
            OrbitCode::Geo => "GEO",
            OrbitCode::Heo => "HEO",
            OrbitCode::Igo => "IGO",
            OrbitCode::Ego => "EGO",
            OrbitCode::Nso => "NSO",
            OrbitCode::Gto => "GTO",
            OrbitCode::Gho => "GHO",
            OrbitCode::Hao => "HAO",
            OrbitCode::Mgo => "MGO",
            OrbitCode::Lmo => "LMO",
            OrbitCode::Ufo => "UFO",
            OrbitCode::Eso => "ESO",
            OrbitCode::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for OrbitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}

impl FromStr for OrbitCode {
    type Err = ModelError;

    /// Accepts both the bare code and the brace-wrapped wire form.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.replace(['{', '}'], "").trim().to_uppercase();
        OrbitCode::all()
            .iter()
            .copied()
            .find(|candidate| candidate.api_name() == normalized)
            .ok_or_else(|| ModelError::UnknownOrbitCode(raw.to_string()))
    }
}

/// Record attributes the catalog API can project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Attribute {
    NoradCatId,
    IntlDes,
    Name,
    LaunchDate,
    DecayDate,
    ObjectType,
    LaunchSiteCode,
    CountryCode,
    OrbitCode,
}

impl Attribute {
    pub fn all() -> &'static [Attribute] {
        use Attribute::*;
        &[
            NoradCatId,
            IntlDes,
            Name,
            LaunchDate,
            DecayDate,
            ObjectType,
            LaunchSiteCode,
            CountryCode,
            OrbitCode,
        ]
    }

    /// Wire key of the attribute, as used in record JSON and query strings.
    pub fn key(&self) -> &'static str {
        match self {
            Attribute::NoradCatId => "noradCatId",
            Attribute::IntlDes => "intlDes",
            Attribute::Name => "name",
            Attribute::LaunchDate => "launchDate",
            Attribute::DecayDate => "decayDate",
            Attribute::ObjectType => "objectType",
            Attribute::LaunchSiteCode => "launchSiteCode",
            Attribute::CountryCode => "countryCode",
            Attribute::OrbitCode => "orbitCode",
        }
    }

    /// Exact wire-key lookup.
    pub fn from_key(key: &str) -> Option<Attribute> {
        Attribute::all()
            .iter()
            .copied()
            .find(|attribute| attribute.key() == key)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Attribute {
    type Err = ModelError;

    /// Lenient lookup: `noradCatId`, `norad_cat_id` and `NORADCATID` all
    /// resolve to the same attribute.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().replace(['_', '-'], "").to_lowercase();
        Attribute::all()
            .iter()
            .copied()
            .find(|attribute| attribute.key().to_lowercase() == normalized)
            .ok_or_else(|| ModelError::UnknownAttribute(raw.to_string()))
    }
}
