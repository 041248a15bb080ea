//! Library-domain entities and registries shared by the unit tests.

use serde_json::{Value, json};

use crate::navigation::Navigation;
use crate::schema::{AttrDescriptor, RelationshipDescriptor, ResourceSchema, SchemaRegistry};
use crate::traits::{Entity, ResourceType};

#[derive(Debug, Clone, Default)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub summary: Option<String>,
    pub author: Option<Person>,
    pub author_id: Option<u64>,
    pub publisher: Option<Publisher>,
    pub publisher_id: Option<u64>,
    pub reviewers: Option<Vec<Person>>,
}

impl Book {
    pub fn new(id: u64, title: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            ..Self::default()
        }
    }

    pub fn with_author(mut self, author: Person) -> Self {
        self.author_id = Some(author.id);
        self.author = Some(author);
        self
    }

    /// Foreign key only, the author itself is not loaded.
    pub fn with_author_id(mut self, author_id: u64) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn with_publisher(mut self, publisher: Publisher) -> Self {
        self.publisher_id = Some(publisher.id);
        self.publisher = Some(publisher);
        self
    }

    pub fn with_reviewers(mut self, reviewers: Vec<Person>) -> Self {
        self.reviewers = Some(reviewers);
        self
    }
}

impl ResourceType for Book {
    const TYPE_NAME: &'static str = "Book";
}

impl Entity for Book {
    fn type_name(&self) -> &str {
        Self::TYPE_NAME
    }

    fn string_id(&self) -> String {
        self.id.to_string()
    }

    fn attribute(&self, name: &str) -> Value {
        match name {
            "id" => json!(self.id),
            "title" => json!(self.title),
            "summary" => json!(self.summary),
            _ => Value::Null,
        }
    }

    fn related(&self, name: &str) -> Navigation<'_> {
        match name {
            "author" => Navigation::one(self.author.as_ref()),
            "publisher" => Navigation::one(self.publisher.as_ref()),
            "reviewers" => Navigation::many(self.reviewers.as_deref()),
            _ => Navigation::Absent,
        }
    }

    fn property(&self, name: &str) -> Option<Value> {
        match name {
            "author_id" => Some(json!(self.author_id)),
            "publisher_id" => Some(json!(self.publisher_id)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Person {
    pub id: u64,
    pub name: String,
    pub email: Option<String>,
    pub books: Option<Vec<Book>>,
}

impl Person {
    pub fn new(id: u64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    pub fn with_books(mut self, books: Vec<Book>) -> Self {
        self.books = Some(books);
        self
    }
}

impl ResourceType for Person {
    const TYPE_NAME: &'static str = "Person";
}

impl Entity for Person {
    fn type_name(&self) -> &str {
        Self::TYPE_NAME
    }

    fn string_id(&self) -> String {
        self.id.to_string()
    }

    fn attribute(&self, name: &str) -> Value {
        match name {
            "name" => json!(self.name),
            "email" => json!(self.email),
            _ => Value::Null,
        }
    }

    fn related(&self, name: &str) -> Navigation<'_> {
        match name {
            "books" => Navigation::many(self.books.as_deref()),
            _ => Navigation::Absent,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Publisher {
    pub id: u64,
    pub name: String,
}

impl Publisher {
    pub fn new(id: u64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }
}

impl Entity for Publisher {
    fn type_name(&self) -> &str {
        "Publisher"
    }

    fn string_id(&self) -> String {
        self.id.to_string()
    }

    fn attribute(&self, name: &str) -> Value {
        match name {
            "name" => json!(self.name),
            _ => Value::Null,
        }
    }
}

/// Books with a title and an author; people with a name.
pub fn scenario_registry() -> SchemaRegistry {
    SchemaRegistry::builder()
        .add_schema(
            "Book",
            ResourceSchema::new("books")
                .with_attribute(AttrDescriptor::new("title"))
                .with_relationship(RelationshipDescriptor::has_one("author", "Person")),
        )
        .add_schema(
            "Person",
            ResourceSchema::new("people").with_attribute(AttrDescriptor::new("name")),
        )
        .build()
        .expect("scenario registry is valid")
}

/// The full catalog: foreign keys, has-many in both directions, publishers.
pub fn catalog_registry() -> SchemaRegistry {
    SchemaRegistry::builder()
        .add_schema(
            "Book",
            ResourceSchema::new("books")
                .with_attribute(AttrDescriptor::new("id"))
                .with_attribute(AttrDescriptor::new("title"))
                .with_attribute(AttrDescriptor::new("summary"))
                .with_relationship(
                    RelationshipDescriptor::has_one("author", "Person")
                        .with_independent_id("author_id"),
                )
                .with_relationship(
                    RelationshipDescriptor::has_one("publisher", "Publisher")
                        .with_independent_id("publisher_id"),
                )
                .with_relationship(RelationshipDescriptor::has_many("reviewers", "Person")),
        )
        .add_schema(
            "Person",
            ResourceSchema::new("people")
                .with_attribute(AttrDescriptor::new("name"))
                .with_attribute(AttrDescriptor::new("email"))
                .with_relationship(RelationshipDescriptor::has_many("books", "Book")),
        )
        .add_schema(
            "Publisher",
            ResourceSchema::new("publishers").with_attribute(AttrDescriptor::new("name")),
        )
        .build()
        .expect("catalog registry is valid")
}
