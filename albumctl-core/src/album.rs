//! Album resource

use serde::{Deserialize, Deserializer, Serialize};

/// A single album row.
///
/// Every field defaults when absent from a request body or given as `null`,
/// so `{"id": "9", "price": null}` decodes to an album with empty
/// title/artist and a zero price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Album {
    /// Client-supplied primary key
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub artist: String,
    /// Non-negative by convention; not enforced
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Album {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            price,
        }
    }

    /// Replace the mutable fields with those of `other`, keeping `self.id`.
    pub fn overwrite_with(&mut self, other: &Album) {
        self.title.clone_from(&other.title);
        self.artist.clone_from(&other.artist);
        self.price = other.price;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_field_names() {
        let album = Album::new("1", "Blue Train", "John Coltrane", 56.99);
        let json = serde_json::to_value(&album).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["title"], "Blue Train");
        assert_eq!(json["artist"], "John Coltrane");
        assert_eq!(json["price"], 56.99);
    }

    #[test]
    fn missing_fields_become_zero_values() {
        let album: Album = serde_json::from_str(r#"{"id":"9"}"#).unwrap();
        assert_eq!(album.id, "9");
        assert_eq!(album.title, "");
        assert_eq!(album.artist, "");
        assert_eq!(album.price, 0.0);
    }

    #[test]
    fn null_fields_become_zero_values() {
        let album: Album =
            serde_json::from_str(r#"{"id":"9","title":null,"artist":null,"price":null}"#)
                .unwrap();
        assert_eq!(album, Album::new("9", "", "", 0.0));

        let album: Album = serde_json::from_str(r#"{"id":null,"price":12.5}"#).unwrap();
        assert_eq!(album.id, "");
        assert_eq!(album.price, 12.5);
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        let result: Result<Album, _> = serde_json::from_str(r#"{"id":"9","price":"cheap"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn overwrite_keeps_id() {
        let mut album = Album::new("2", "Jeru", "Gerry Mulligan", 17.99);
        album.overwrite_with(&Album::new("other", "Jeru", "Gerry Mulligan", 19.99));
        assert_eq!(album.id, "2");
        assert_eq!(album.price, 19.99);
    }
}
