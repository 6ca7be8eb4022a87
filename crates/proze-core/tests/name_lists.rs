use proze_core::{Category, NameLists, NamedEntity, ProjectCatalogue};
use serde::Deserialize;

/// The slice of a project configuration file the host hands to the core.
#[derive(Debug, Deserialize)]
struct ProjectConfig {
    #[serde(default)]
    names: NameLists,
}

#[test]
fn test_decode_yaml_names_section() {
    let yaml = r#"
title: The Long Summer
names:
  character:
    - Jessica
    - Fred
  place:
    - ice cream shop
  invalid:
    - Gary
"#;
    let config: ProjectConfig = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(config.names.thing, Vec::<String>::new());
    assert_eq!(
        config.names.to_entities(),
        vec![
            NamedEntity::character("Jessica"),
            NamedEntity::character("Fred"),
            NamedEntity::place("ice cream shop"),
            NamedEntity::invalid("Gary"),
        ]
    );
}

#[test]
fn test_decode_json_without_names_is_empty() {
    let config: ProjectConfig = serde_json::from_str(r#"{ "title": "Untitled" }"#).unwrap();
    assert!(config.names.is_empty());
    assert!(config.names.to_entities().is_empty());

    let mut catalogue = ProjectCatalogue::new();
    catalogue.insert_name_lists("/untitled", &config.names);
    assert_eq!(catalogue.project("/untitled"), Some(&[][..]));
}

#[test]
fn test_category_serde_uses_lowercase_keys() {
    let entity: NamedEntity =
        serde_json::from_str(r#"{ "text": "solarium", "category": "place" }"#).unwrap();
    assert_eq!(entity, NamedEntity::place("solarium"));

    for category in Category::ALL {
        let encoded = serde_json::to_string(&category).unwrap();
        assert_eq!(encoded, format!("\"{}\"", category.as_str()));
    }
}
