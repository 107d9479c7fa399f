// src/catalog.rs
use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

/// The activity list shipped with the site.
const BUNDLED_ACTIVITIES: &str = include_str!("../content/activities.json");

/// One programme offered by the centre, as authored in `content/activities.json`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub color: String,
    pub icon_color: String,
    pub tags: Vec<String>,
    pub details: String,
}

/// Structural defects in the authored content. None of these can happen once
/// a `Catalog` exists.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("activity list is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("activity {id}: field `{field}` is empty")]
    EmptyField { id: String, field: &'static str },

    #[error("activity {id}: no tags")]
    NoTags { id: String },

    #[error("activity {id}: tag #{index} is empty")]
    EmptyTag { id: String, index: usize },

    #[error("duplicate activity id {id:?} at positions {first} and {second}")]
    DuplicateId {
        id: String,
        first: usize,
        second: usize,
    },
}

/// Ordered, validated, read-only list of activities. Order is display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    activities: Vec<Activity>,
}

impl Catalog {
    pub fn new(activities: Vec<Activity>) -> Result<Self, CatalogError> {
        Self::validate(&activities)?;
        Ok(Self { activities })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let activities: Vec<Activity> = serde_json::from_str(json)?;
        Self::new(activities)
    }

    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_ACTIVITIES)
    }

    /// Checks every record in order and reports the first defect.
    pub fn validate(activities: &[Activity]) -> Result<(), CatalogError> {
        let mut seen: HashMap<&str, usize> = HashMap::new();

        for (pos, a) in activities.iter().enumerate() {
            let label = if a.id.trim().is_empty() {
                format!("#{pos}")
            } else {
                a.id.clone()
            };

            let fields = [
                ("id", &a.id),
                ("title", &a.title),
                ("description", &a.description),
                ("image", &a.image),
                ("color", &a.color),
                ("iconColor", &a.icon_color),
                ("details", &a.details),
            ];
            if let Some((field, _)) = fields.into_iter().find(|(_, v)| v.trim().is_empty()) {
                return Err(CatalogError::EmptyField { id: label, field });
            }

            if a.tags.is_empty() {
                return Err(CatalogError::NoTags { id: label });
            }
            if let Some(index) = a.tags.iter().position(|t| t.trim().is_empty()) {
                return Err(CatalogError::EmptyTag { id: label, index });
            }

            if let Some(&first) = seen.get(a.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: a.id.clone(),
                    first,
                    second: pos,
                });
            }
            seen.insert(&a.id, pos);
        }

        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.activities.iter()
    }

    pub fn as_slice(&self) -> &[Activity] {
        &self.activities
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
pub(crate) fn sample(id: &str) -> Activity {
    Activity {
        id: id.to_string(),
        title: format!("Title {id}"),
        description: "A short summary.".into(),
        image: format!("/images/activities/{id}.jpg"),
        color: "surface-rose edge-rose ink-rose".into(),
        icon_color: "icon-rose".into(),
        tags: vec!["One".into(), "Two".into()],
        details: "Longer text.".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn bundled_catalog_is_valid() {
        let catalog = Catalog::bundled().expect("bundled activities must validate");
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn bundled_catalog_keeps_authored_order() {
        let catalog = Catalog::bundled().unwrap();
        let ids: Vec<&str> = catalog.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(
            ids,
            ["creative-arts", "physical-play", "learning-discovery", "social-skills"]
        );
    }

    #[test]
    fn bundled_ids_are_unique_and_fields_filled() {
        let catalog = Catalog::bundled().unwrap();
        let ids: HashSet<&str> = catalog.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());

        for a in &catalog {
            for v in [&a.title, &a.description, &a.image, &a.color, &a.icon_color, &a.details] {
                assert!(!v.trim().is_empty(), "{} has a blank field", a.id);
            }
            assert!(!a.tags.is_empty(), "{} has no tags", a.id);
        }
    }

    #[test]
    fn creative_arts_entry() {
        let catalog = Catalog::bundled().unwrap();
        let first = &catalog.as_slice()[0];
        assert_eq!(first.title, "Creative Arts");
        assert_eq!(first.tags, ["Painting", "Music", "Crafts"]);
    }

    #[test]
    fn empty_list_is_a_valid_catalog() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.iter().count(), 0);
    }

    #[test]
    fn parses_camel_case_icon_color() {
        let json = r#"[{
            "id": "x", "title": "X", "description": "d", "image": "/i.jpg",
            "color": "c", "iconColor": "ic", "tags": ["t"], "details": "more"
        }]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.as_slice()[0].icon_color, "ic");
    }

    #[test]
    fn missing_field_is_a_parse_error() {
        let json = r#"[{ "id": "x", "title": "X" }]"#;
        assert!(matches!(Catalog::from_json(json), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn unknown_field_is_a_parse_error() {
        let json = r#"[{
            "id": "x", "title": "X", "description": "d", "image": "/i.jpg",
            "color": "c", "iconColor": "ic", "tags": ["t"], "details": "more",
            "price": 10
        }]"#;
        assert!(matches!(Catalog::from_json(json), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn blank_field_is_reported_with_its_name() {
        let mut a = sample("arts");
        a.description = "   ".into();
        match Catalog::new(vec![a]) {
            Err(CatalogError::EmptyField { id, field }) => {
                assert_eq!(id, "arts");
                assert_eq!(field, "description");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn blank_id_is_reported_by_position() {
        match Catalog::new(vec![sample("ok"), sample("")]) {
            Err(CatalogError::EmptyField { id, field }) => {
                assert_eq!(id, "#1");
                assert_eq!(field, "id");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn missing_and_blank_tags() {
        let mut a = sample("a");
        a.tags.clear();
        assert!(matches!(
            Catalog::new(vec![a]),
            Err(CatalogError::NoTags { id }) if id == "a"
        ));

        let mut b = sample("b");
        b.tags.push(" ".into());
        assert!(matches!(
            Catalog::new(vec![b]),
            Err(CatalogError::EmptyTag { id, index: 2 }) if id == "b"
        ));
    }

    #[test]
    fn duplicate_tags_are_allowed() {
        let mut a = sample("a");
        a.tags = vec!["Music".into(), "Music".into()];
        assert!(Catalog::new(vec![a]).is_ok());
    }

    #[test]
    fn duplicate_id_reports_both_positions() {
        let err = Catalog::new(vec![sample("a"), sample("b"), sample("a")]).unwrap_err();
        match err {
            CatalogError::DuplicateId { id, first, second } => {
                assert_eq!(id, "a");
                assert_eq!((first, second), (0, 2));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn error_messages_name_the_record() {
        let err = Catalog::new(vec![sample("a"), sample("a")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "duplicate activity id \"a\" at positions 0 and 1"
        );
    }
}
