use super::*;
use crate::links::LinkFlags;
use crate::navigation::Navigation;
use crate::schema::{AttrDescriptor, RelationshipDescriptor};
use crate::test_fixtures::{Book, Person, Publisher, catalog_registry, scenario_registry};
use crate::types::{Linkage, RelationshipData, ResourceIdentifier, SparseFieldset};
use insta::assert_json_snapshot;
use serde_json::{Value, json};
use yare::parameterized;


fn dune() -> Book {
    Book::new(1, "Dune").with_author(Person::new(7, "Frank"))
}

fn query(include: &str) -> QueryContext {
    QueryContext::from_query(Some(include), None).unwrap()
}

#[test]
fn test_book_without_includes() {
    let registry = scenario_registry();
    let builder = DocumentBuilder::new(&registry);

    let document = builder.build(&dune(), &QueryContext::new()).unwrap();

    assert!(document.included.is_empty());
    assert!(document.links.is_none());
    assert_json_snapshot!(document, @r#"
    {
      "data": {
        "type": "books",
        "id": "1",
        "attributes": {
          "title": "Dune"
        },
        "relationships": {
          "author": {
            "data": {
              "type": "people",
              "id": "7"
            }
          }
        }
      }
    }
    "#);
}

#[test]
fn test_book_including_author() {
    let registry = scenario_registry();
    let builder = DocumentBuilder::new(&registry);

    let document = builder.build(&dune(), &query("author")).unwrap();

    assert_eq!(
        serde_json::to_value(&document.included).unwrap(),
        json!([{"type": "people", "id": "7", "attributes": {"name": "Frank"}}])
    );
}

#[test]
fn test_unknown_relationship_in_chain() {
    let registry = scenario_registry();
    let builder = DocumentBuilder::new(&registry);

    let err = builder
        .build(&dune(), &query("author.publisher"))
        .unwrap_err();

    assert_eq!(
        err,
        DocumentError::UnknownRelationship {
            resource: "people".to_string(),
            relationship: "publisher".to_string(),
        }
    );
}

#[test]
fn test_unknown_relationship_at_root() {
    let registry = scenario_registry();
    let builder = DocumentBuilder::new(&registry);

    let err = builder.build(&dune(), &query("editor")).unwrap_err();
    assert!(matches!(err, DocumentError::UnknownRelationship { ref resource, .. } if resource == "books"));
}

#[test]
fn test_root_without_schema() {
    let registry = scenario_registry();
    let builder = DocumentBuilder::new(&registry);

    let err = builder
        .build(&Publisher::new(3, "Chilton"), &QueryContext::new())
        .unwrap_err();
    assert_eq!(err, DocumentError::SchemaNotFound("Publisher".to_string()));
}

#[test]
fn test_identifier_never_in_attributes() {
    let registry = catalog_registry();
    let builder = DocumentBuilder::new(&registry);

    let document = builder.build(&dune(), &query("author")).unwrap();

    assert!(document.data.attribute("id").is_none());
    assert_eq!(document.data.id, "1");
    for resource in &document.included {
        assert!(resource.attribute("id").is_none());
    }
}

#[parameterized(
    kept = { false, Some(&Value::Null) },
    omitted = { true, None },
)]
fn test_null_attribute_omission(omit: bool, expected: Option<&Value>) {
    let registry = catalog_registry();
    let builder = DocumentBuilder::new(&registry)
        .with_options(BuilderOptions::new().with_omit_null_attributes(omit));

    let document = builder.build(&Book::new(1, "Dune"), &QueryContext::new()).unwrap();

    assert_eq!(document.data.attribute("summary"), expected);
    assert_eq!(document.data.attribute("title"), Some(&json!("Dune")));
}

#[parameterized(
    keep_nulls = { false },
    omit_nulls = { true },
)]
fn test_sparse_fieldset_is_exact(omit: bool) {
    let registry = catalog_registry();
    let builder = DocumentBuilder::new(&registry)
        .with_options(BuilderOptions::new().with_omit_null_attributes(omit));
    let person = Person::new(7, "Frank").with_email("frank@example.com");
    let query = QueryContext::new().with_fields(SparseFieldset::parse("name"));

    let document = builder.build(&person, &query).unwrap();

    assert_eq!(
        serde_json::to_value(&document.data.attributes).unwrap(),
        json!({"name": "Frank"})
    );
}

#[test]
fn test_attributes_follow_public_names() {
    let registry = SchemaRegistry::builder()
        .add_schema(
            "Book",
            ResourceSchema::new("books")
                .with_attribute(AttrDescriptor::new("headline").with_internal_name("title"))
                .with_attribute(
                    AttrDescriptor::new("title-length")
                        .with_accessor(|e| json!(e.attribute("title").as_str().map(str::len))),
                ),
        )
        .build()
        .unwrap();
    let builder = DocumentBuilder::new(&registry);

    let document = builder.build(&Book::new(1, "Dune"), &QueryContext::new()).unwrap();

    assert_eq!(
        serde_json::to_value(&document.data.attributes).unwrap(),
        json!({"headline": "Dune", "title-length": 4})
    );
    assert!(document.data.relationships.is_none());
}

#[test]
fn test_relationship_only_view() {
    let registry = scenario_registry();
    let builder = DocumentBuilder::new(&registry);

    let document = builder
        .build(&dune(), &QueryContext::for_relationship("author"))
        .unwrap();

    assert_eq!(document.data, ResourceObject::new("books", "1"));
    assert_eq!(
        serde_json::to_value(&document).unwrap(),
        json!({"data": {"type": "books", "id": "1"}})
    );
}

#[test]
fn test_relationship_only_view_unknown_relationship() {
    let registry = scenario_registry();
    let builder = DocumentBuilder::new(&registry);

    let err = builder
        .build(&dune(), &QueryContext::for_relationship("editor"))
        .unwrap_err();
    assert!(matches!(err, DocumentError::UnknownRelationship { .. }));
}

#[test]
fn test_top_level_links() {
    let registry = scenario_registry();
    let builder = DocumentBuilder::new(&registry).with_options(
        BuilderOptions::new()
            .with_base_url("https://api.example.com/v1")
            .with_top_level_links(true),
    );

    let document = builder.build(&dune(), &QueryContext::new()).unwrap();

    assert_eq!(
        document.links.unwrap().self_link.as_deref(),
        Some("https://api.example.com/v1/books/1")
    );
}

#[test]
fn test_custom_navigator() {
    struct ForeignKeysOnly;

    impl Navigator for ForeignKeysOnly {
        fn navigate<'a>(
            &self,
            _entity: &'a dyn Entity,
            _relationship: &RelationshipDescriptor,
        ) -> Navigation<'a> {
            Navigation::Absent
        }

        fn foreign_key(&self, entity: &dyn Entity, property: &str) -> Option<String> {
            EntityNavigator.foreign_key(entity, property)
        }
    }

    let registry = catalog_registry();
    let builder = DocumentBuilder::new(&registry).with_navigator(ForeignKeysOnly);

    let document = builder.build(&dune(), &query("author")).unwrap();

    assert_eq!(
        document.data.relationship("author").unwrap().data,
        Linkage::One(ResourceIdentifier::new("people", "7"))
    );
    assert!(document.included.is_empty());
}

#[test]
fn test_global_registry() {
    install_global_registry_once();
    let builder = DocumentBuilder::from_global().unwrap();

    let document = builder.build(&dune(), &QueryContext::new()).unwrap();
    assert_eq!(document.data.resource_type, "books");
    assert_eq!(
        crate::install_global_registry(catalog_registry()).unwrap_err(),
        DocumentError::RegistryAlreadyInstalled
    );
}

fn install_global_registry_once() {
    if crate::global_registry().is_none() {
        let _ = crate::install_global_registry(catalog_registry());
    }
}

#[test]
fn test_concurrent_builds() {
    let registry = catalog_registry();
    let builder = DocumentBuilder::new(&registry);

    std::thread::scope(|scope| {
        for i in 0..8u64 {
            let builder = &builder;
            scope.spawn(move || {
                for _ in 0..50 {
                    let book = Book::new(i, "Dune").with_author(Person::new(7, "Frank"));
                    let document = builder.build(&book, &query("author")).unwrap();
                    assert_eq!(document.data.id, i.to_string());
                    assert_eq!(document.included.len(), 1);
                }
            });
        }
    });
}
