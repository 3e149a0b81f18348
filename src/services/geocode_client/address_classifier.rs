use super::types::{
    extracted_address::ExtractedAddress,
    google_geocode_response::{GoogleAddressComponent, GoogleGeocodeResult},
};

/// Component type tags that map onto an output field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComponentKind {
    StreetNumber,
    Route,
    Locality,
    AdministrativeAreaLevel1,
    Country,
    PostalCode,
}

impl ComponentKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "street_number" => Some(ComponentKind::StreetNumber),
            "route" => Some(ComponentKind::Route),
            "locality" => Some(ComponentKind::Locality),
            "administrative_area_level_1" => Some(ComponentKind::AdministrativeAreaLevel1),
            "country" => Some(ComponentKind::Country),
            "postal_code" => Some(ComponentKind::PostalCode),
            _ => None,
        }
    }

    /// Only the first type tag of a component is consulted.
    pub fn of(component: &GoogleAddressComponent) -> Option<Self> {
        component
            .types
            .first()
            .and_then(|tag| Self::from_tag(tag))
    }
}

/// Reduces a single geocode candidate to its five address fields.
///
/// Street number and route both append to `address`, each prefixed with a
/// space, in the order the components appear. The other fields take the last
/// matching component.
pub fn extract(result: &GoogleGeocodeResult) -> ExtractedAddress {
    let mut extracted = ExtractedAddress::empty();

    for component in &result.address_components {
        let Some(kind) = ComponentKind::of(component) else {
            continue;
        };

        let long_name = component.long_name.clone();

        match kind {
            ComponentKind::StreetNumber | ComponentKind::Route => {
                let address = extracted.address.get_or_insert_with(String::new);
                address.push(' ');
                address.push_str(&long_name);
            }
            ComponentKind::Locality => extracted.city = Some(long_name),
            ComponentKind::AdministrativeAreaLevel1 => extracted.state = Some(long_name),
            ComponentKind::Country => extracted.country = Some(long_name),
            ComponentKind::PostalCode => extracted.zip = Some(long_name),
        }
    }

    extracted
}
