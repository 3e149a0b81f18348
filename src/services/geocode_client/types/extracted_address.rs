/// The five normalized fields written back next to a source address.
///
/// A field that was never seen in the geocode result stays `None` and is
/// written out as an empty cell value.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct ExtractedAddress {
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip: Option<String>,
}

impl ExtractedAddress {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fields in output column order: address, city, state, country, zip.
    pub fn into_row(self) -> [String; 5] {
        [
            self.address.unwrap_or_default(),
            self.city.unwrap_or_default(),
            self.state.unwrap_or_default(),
            self.country.unwrap_or_default(),
            self.zip.unwrap_or_default(),
        ]
    }
}
