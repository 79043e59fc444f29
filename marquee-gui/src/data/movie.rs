use std::{collections::BTreeMap, sync::Arc};

use druid::{im::Vector, Data, Lens};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Data, Lens)]
pub struct Movie {
    pub id: Arc<str>,
    pub title: Arc<str>,
    pub opening_text: Arc<str>,
    pub release_date: Arc<str>,
}

/// Value shape of the store collection, which maps store-assigned ids to
/// partial records.  Fields the store omits come back as empty strings.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoredMovie {
    pub title: Arc<str>,
    pub opening_text: Arc<str>,
    pub release_date: Arc<str>,
}

impl Movie {
    /// Flattens the store collection into an ordered list.  Store ids are
    /// creation-ordered, so ascending key order keeps the display stable.
    pub fn from_store(stored: BTreeMap<String, StoredMovie>) -> Vector<Self> {
        stored
            .into_iter()
            .map(|(id, movie)| Self {
                id: id.into(),
                title: movie.title,
                opening_text: movie.opening_text,
                release_date: movie.release_date,
            })
            .collect()
    }
}

/// Form state for a record about to be submitted.  The store assigns the id,
/// so the draft carries none, and no field is validated.
#[derive(Clone, Debug, Default, Data, Lens, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDraft {
    pub title: String,
    pub opening_text: String,
    pub release_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_collection_flattens_into_records() {
        let stored: BTreeMap<String, StoredMovie> = serde_json::from_str(
            r#"{"a":{"title":"T1","openingText":"O1","releaseDate":"2020-01-01"}}"#,
        )
        .unwrap();

        let movies = Movie::from_store(stored);
        assert_eq!(movies.len(), 1);
        assert_eq!(&*movies[0].id, "a");
        assert_eq!(&*movies[0].title, "T1");
        assert_eq!(&*movies[0].opening_text, "O1");
        assert_eq!(&*movies[0].release_date, "2020-01-01");
    }

    #[test]
    fn records_are_ordered_by_store_id() {
        let stored: BTreeMap<String, StoredMovie> = serde_json::from_str(
            r#"{"-Nb2":{"title":"Second"},"-Nb1":{"title":"First"}}"#,
        )
        .unwrap();

        let movies = Movie::from_store(stored);
        assert_eq!(&*movies[0].title, "First");
        assert_eq!(&*movies[1].title, "Second");
    }

    #[test]
    fn missing_fields_come_back_empty() {
        let stored: BTreeMap<String, StoredMovie> =
            serde_json::from_str(r#"{"a":{"title":"T1"}}"#).unwrap();

        let movies = Movie::from_store(stored);
        assert_eq!(&*movies[0].opening_text, "");
        assert_eq!(&*movies[0].release_date, "");
    }

    #[test]
    fn empty_collection_yields_no_records() {
        let movies = Movie::from_store(BTreeMap::new());
        assert!(movies.is_empty());
    }

    #[test]
    fn draft_serializes_with_store_field_names() {
        let draft = MovieDraft {
            title: "X".to_string(),
            opening_text: "Y".to_string(),
            release_date: "2021-05-05".to_string(),
        };

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "X",
                "openingText": "Y",
                "releaseDate": "2021-05-05",
            })
        );
    }
}
