//! Satellite catalog rows and the selections the dashboard keeps about them.

use crate::filter_types::{Attribute, ObjectType, OrbitCode};
use crate::record::{FieldValue, Record};

/// One catalog entry as returned by `GET /v1/satellites`.
///
/// Only the NORAD id and the name are guaranteed; every other attribute may be
/// projected away by the request or simply unknown upstream.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SatelliteData {
    pub norad_cat_id: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub intl_des: Option<String>,
    pub name: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub launch_date: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub decay_date: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub object_type: Option<ObjectType>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub launch_site_code: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub country_code: Option<String>,
    /// Raw orbit code, usually brace-wrapped (`{LEO}`).
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub orbit_code: Option<String>,
}

impl SatelliteData {
    pub fn new(norad_cat_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            norad_cat_id: norad_cat_id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn attribute(&self, attribute: Attribute) -> Option<FieldValue<'_>> {
        let text = match attribute {
            Attribute::NoradCatId => Some(self.norad_cat_id.as_str()),
            Attribute::IntlDes => self.intl_des.as_deref(),
            Attribute::Name => Some(self.name.as_str()),
            Attribute::LaunchDate => self.launch_date.as_deref(),
            Attribute::DecayDate => self.decay_date.as_deref(),
            Attribute::ObjectType => self.object_type.map(|t| t.api_name()),
            Attribute::LaunchSiteCode => self.launch_site_code.as_deref(),
            Attribute::CountryCode => self.country_code.as_deref(),
            Attribute::OrbitCode => self.orbit_code.as_deref(),
        };
        text.map(FieldValue::Text)
    }

    /// Orbit code parsed from the raw wire value, if it is a known code.
    pub fn parsed_orbit_code(&self) -> Option<OrbitCode> {
        self.orbit_code.as_deref().and_then(|raw| raw.parse().ok())
    }
}

impl Record for SatelliteData {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        Attribute::from_key(key).and_then(|attribute| self.attribute(attribute))
    }
}

/// The reduced view of a satellite shown on the tracked/selected page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TrackedSatellite {
    pub name: String,
    pub norad_cat_id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub country_code: Option<String>,
}

impl From<&SatelliteData> for TrackedSatellite {
    fn from(satellite: &SatelliteData) -> Self {
        Self {
            name: satellite.name.clone(),
            norad_cat_id: satellite.norad_cat_id.clone(),
            country_code: satellite.country_code.clone(),
        }
    }
}

impl Record for TrackedSatellite {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "name" => Some(FieldValue::Text(&self.name)),
            "noradCatId" => Some(FieldValue::Text(&self.norad_cat_id)),
            "countryCode" => self.country_code.as_deref().map(FieldValue::Text),
            _ => None,
        }
    }
}

/// Attribute filter selections, persisted between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Filters {
    #[cfg_attr(feature = "serde", serde(default))]
    pub selected_object_types: Vec<ObjectType>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub selected_orbit_codes: Vec<OrbitCode>,
}

impl Filters {
    pub fn is_empty(&self) -> bool {
        self.selected_object_types.is_empty()
            && self.selected_orbit_codes.is_empty()
    }

    /// Number of individual selections across both groups.
    pub fn active_count(&self) -> usize {
        self.selected_object_types.len() + self.selected_orbit_codes.len()
    }

    pub fn toggle_object_type(&mut self, object_type: ObjectType) {
        toggle(&mut self.selected_object_types, object_type);
    }

    pub fn toggle_orbit_code(&mut self, orbit_code: OrbitCode) {
        toggle(&mut self.selected_orbit_codes, orbit_code);
    }
}

fn toggle<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if let Some(pos) = items.iter().position(|existing| *existing == item) {
        items.remove(pos);
    } else {
        items.push(item);
    }
}

/// Projection and restriction parameters for the catalog request.
///
/// Empty lists mean "everything": the request is sent with every variant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SatelliteQueryParams {
    pub object_types: Vec<ObjectType>,
    pub attributes: Vec<Attribute>,
}

impl SatelliteQueryParams {
    pub fn effective_object_types(&self) -> &[ObjectType] {
        if self.object_types.is_empty() {
            ObjectType::all()
        } else {
            &self.object_types
        }
    }

    pub fn effective_attributes(&self) -> &[Attribute] {
        if self.attributes.is_empty() {
            Attribute::all()
        } else {
            &self.attributes
        }
    }

    /// Whether the request covers the whole catalog.
    pub fn is_unrestricted(&self) -> bool {
        self.object_types.is_empty()
            || ObjectType::all()
                .iter()
                .all(|t| self.object_types.contains(t))
    }
}
