//! The queryable schema, declared as a static table.
//!
//! Each object type maps field names to a scalar type and an accessor. The root type maps
//! field names to an object type, the arguments the field accepts, and the resolver that turns
//! those arguments into a lookup against the [`DataStore`].

use std::fmt;

use indexmap::IndexMap;

use super::resolver;
use super::store::{DailyRecord, DataStore};

pub const QUERY_TYPE_NAME: &str = "Query";
pub const COUNTRY_TYPE_NAME: &str = "Country";
/// The meta field every object type answers with its own name.
pub const TYPENAME_FIELD: &str = "__typename";

/// The scalar types a field can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    String,
    Int,
}

impl ScalarType {
    pub fn name(self) -> &'static str {
        match self {
            ScalarType::String => "String",
            ScalarType::Int => "Int",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A literal value written in a query, e.g. as an argument.
///
/// Numbers keep their source text.
#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    Null,
    Boolean(bool),
    Int(String),
    Float(String),
    String(String),
    Enum(String),
    List(Vec<InputValue>),
    Object(IndexMap<String, InputValue>),
}

/// The arguments supplied to a field, by name.
pub type Arguments = IndexMap<String, InputValue>;

/// Produce the value of an object field from the record it belongs to.
pub type ObjectFieldResolver = fn(&DailyRecord) -> serde_json::Value;

/// Look up the record a root field refers to. `None` is a successful "no value".
pub type RootFieldResolver = for<'a> fn(&'a DataStore, &Arguments) -> Option<&'a DailyRecord>;

#[derive(Debug, Clone)]
pub struct ArgumentDefinition {
    pub description: &'static str,
    pub r#type: ScalarType,
}

#[derive(Debug, Clone)]
pub struct ObjectField {
    pub description: &'static str,
    pub r#type: ScalarType,
    pub resolve: ObjectFieldResolver,
}

#[derive(Debug, Clone)]
pub struct ObjectType {
    pub name: &'static str,
    pub description: &'static str,
    pub fields: IndexMap<&'static str, ObjectField>,
}

#[derive(Debug, Clone)]
pub struct RootField {
    pub description: &'static str,
    /// Name of the object type the field returns.
    pub r#type: &'static str,
    pub arguments: IndexMap<&'static str, ArgumentDefinition>,
    pub resolve: RootFieldResolver,
}

/// The complete schema. Built once and shared read-only.
#[derive(Debug, Clone)]
pub struct Schema {
    root_fields: IndexMap<&'static str, RootField>,
    object_types: IndexMap<&'static str, ObjectType>,
}

impl Schema {
    pub fn new() -> Self {
        let country = ObjectType {
            name: COUNTRY_TYPE_NAME,
            description: "The cumulative metrics of one country on one day.",
            fields: IndexMap::from([
                (
                    "date",
                    ObjectField {
                        description: "The day the metrics were reported for.",
                        r#type: ScalarType::String,
                        resolve: resolver::date,
                    },
                ),
                (
                    "confirmed",
                    ObjectField {
                        description: "Confirmed cases up to and including this day.",
                        r#type: ScalarType::Int,
                        resolve: resolver::confirmed,
                    },
                ),
                (
                    "deaths",
                    ObjectField {
                        description: "Deaths up to and including this day.",
                        r#type: ScalarType::Int,
                        resolve: resolver::deaths,
                    },
                ),
                (
                    "recovered",
                    ObjectField {
                        description: "Recoveries up to and including this day.",
                        r#type: ScalarType::Int,
                        resolve: resolver::recovered,
                    },
                ),
            ]),
        };

        let root_fields = IndexMap::from([(
            "country",
            RootField {
                description: "The latest metrics of a country.",
                r#type: COUNTRY_TYPE_NAME,
                arguments: IndexMap::from([(
                    resolver::COUNTRY_NAME_ARGUMENT,
                    ArgumentDefinition {
                        description: "The country name, matched case-sensitively.",
                        r#type: ScalarType::String,
                    },
                )]),
                resolve: resolver::resolve_country,
            },
        )]);

        Schema {
            root_fields,
            object_types: IndexMap::from([(COUNTRY_TYPE_NAME, country)]),
        }
    }

    pub fn query_type_name(&self) -> &'static str {
        QUERY_TYPE_NAME
    }

    pub fn root_field(&self, name: &str) -> Option<&RootField> {
        self.root_fields.get(name)
    }

    pub fn object_type(&self, name: &str) -> Option<&ObjectType> {
        self.object_types.get(name)
    }

    /// Render the schema as schema definition language.
    pub fn to_sdl(&self) -> String {
        let mut sdl = format!("type {QUERY_TYPE_NAME} {{\n");
        for (name, field) in &self.root_fields {
            let arguments = field
                .arguments
                .iter()
                .map(|(name, argument)| format!("{name}: {}", argument.r#type))
                .collect::<Vec<_>>()
                .join(", ");
            sdl.push_str(&format!("  \"\"\"{}\"\"\"\n", field.description));
            sdl.push_str(&format!("  {name}({arguments}): {}\n", field.r#type));
        }
        sdl.push_str("}\n");

        for object_type in self.object_types.values() {
            sdl.push_str(&format!(
                "\n\"\"\"{}\"\"\"\ntype {} {{\n",
                object_type.description, object_type.name
            ));
            for (name, field) in &object_type.fields {
                sdl.push_str(&format!("  \"\"\"{}\"\"\"\n", field.description));
                sdl.push_str(&format!("  {name}: {}\n", field.r#type));
            }
            sdl.push_str("}\n");
        }

        sdl
    }
}

impl Default for Schema {
    fn default() -> Self {
        Schema::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declares_the_country_root_field() {
        let schema = Schema::new();
        let country = schema.root_field("country").expect("country root field");

        assert_eq!(country.r#type, COUNTRY_TYPE_NAME);
        assert_eq!(
            country.arguments.keys().copied().collect::<Vec<_>>(),
            vec!["name"]
        );
        assert!(schema.root_field("countries").is_none());
    }

    #[test]
    fn country_fields_keep_declaration_order() {
        let schema = Schema::new();
        let country = schema.object_type(COUNTRY_TYPE_NAME).unwrap();

        assert_eq!(
            country.fields.keys().copied().collect::<Vec<_>>(),
            vec!["date", "confirmed", "deaths", "recovered"]
        );
        assert_eq!(country.fields["date"].r#type, ScalarType::String);
        assert_eq!(country.fields["deaths"].r#type, ScalarType::Int);
    }

    #[test]
    fn renders_sdl() {
        insta::assert_snapshot!(Schema::new().to_sdl());
    }
}
