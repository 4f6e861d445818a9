use serde_json::Value;

/// Lowest character id served by the API.
pub const MIN_CHARACTER_ID: u16 = 1;

/// Highest character id served by the API.
pub const MAX_CHARACTER_ID: u16 = 826;

/// A character payload as returned by the API.
///
/// The payload is display data, not business data: the fields the UI shows
/// are lifted out with empty fallbacks, and the untouched JSON value is kept
/// for the raw-dump panel. A payload with missing fields still renders.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterRecord {
    pub id: u16,
    pub name: String,
    pub image: String,
    pub status: String,
    pub species: String,
    pub gender: String,
    pub origin: String,
    pub location: String,
    /// Full payload, pretty-printed by the detail view.
    pub raw: Value,
}

impl CharacterRecord {
    /// Lift the displayed fields out of a raw payload.
    pub fn from_value(raw: Value) -> Self {
        let id = raw["id"].as_u64().unwrap_or(0) as u16;
        let name = text(&raw, &["name"]);
        let image = text(&raw, &["image"]);
        let status = text(&raw, &["status"]);
        let species = text(&raw, &["species"]);
        let gender = text(&raw, &["gender"]);
        let origin = text(&raw, &["origin", "name"]);
        let location = text(&raw, &["location", "name"]);

        Self {
            id,
            name,
            image,
            status,
            species,
            gender,
            origin,
            location,
            raw,
        }
    }
}

fn text(value: &Value, path: &[&str]) -> String {
    let mut current = value;
    for key in path {
        current = &current[*key];
    }
    current.as_str().unwrap_or_default().to_string()
}
