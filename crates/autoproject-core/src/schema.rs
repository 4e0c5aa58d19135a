mod builder;
pub use builder::{Builder, ModelBuilder};

mod constructor;
pub use constructor::{Constructor, ConstructorAssignment, Param};

mod model;
pub use model::{Model, ModelId};

mod property;
pub use property::{Property, PropertyId, Visibility};

mod reflect;
pub use reflect::{PropertyDescriptor, TypeReflector};

mod verify;

use indexmap::IndexMap;

/// The object types a query graph can construct and read from.
#[derive(Debug, Default)]
pub struct Schema {
    pub models: IndexMap<ModelId, Model>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    /// Get a model by ID
    #[track_caller]
    pub fn model(&self, id: impl Into<ModelId>) -> &Model {
        self.models.get(&id.into()).expect("invalid model ID")
    }

    pub fn model_by_name(&self, name: &str) -> Option<&Model> {
        self.models.values().find(|model| model.name == name)
    }

    /// Get a property by ID
    #[track_caller]
    pub fn property(&self, id: PropertyId) -> &Property {
        self.get_property(id).expect("invalid property ID")
    }

    /// Get a property by ID, or `None` if the schema does not declare it.
    pub fn get_property(&self, id: PropertyId) -> Option<&Property> {
        self.models.get(&id.model)?.properties.get(id.index)
    }
}
