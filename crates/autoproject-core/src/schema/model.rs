use super::{Constructor, Property, PropertyId};
use std::fmt;

#[derive(Debug, Clone)]
pub struct Model {
    /// Uniquely identifies the model within the schema
    pub id: ModelId,

    /// Name of the model
    pub name: String,

    /// Instance properties, in declaration order
    pub properties: Vec<Property>,

    /// Declared constructors. When empty, the model has an implicit
    /// parameterless constructor.
    pub constructors: Vec<Constructor>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct ModelId(pub usize);

impl Model {
    pub fn property(&self, property: impl Into<PropertyId>) -> &Property {
        let property_id = property.into();
        assert_eq!(self.id, property_id.model);
        &self.properties[property_id.index]
    }

    pub fn property_by_name(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|property| property.name == name)
    }

    /// Returns the constructor taking `arity` arguments.
    ///
    /// Returns `None` for the implicit parameterless constructor; use
    /// [`Model::has_constructor`] to distinguish that case from a missing
    /// overload.
    pub fn constructor(&self, arity: usize) -> Option<&Constructor> {
        self.constructors
            .iter()
            .find(|constructor| constructor.params.len() == arity)
    }

    pub fn has_constructor(&self, arity: usize) -> bool {
        if self.constructors.is_empty() {
            arity == 0
        } else {
            self.constructor(arity).is_some()
        }
    }
}

impl ModelId {
    /// Create a `PropertyId` representing the current model's property at
    /// index `index`.
    pub const fn property(self, index: usize) -> PropertyId {
        PropertyId { model: self, index }
    }
}

impl From<&Self> for ModelId {
    fn from(src: &Self) -> Self {
        *src
    }
}

impl From<&mut Self> for ModelId {
    fn from(src: &mut Self) -> Self {
        *src
    }
}

impl From<&Model> for ModelId {
    fn from(value: &Model) -> Self {
        value.id
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelId({})", self.0)
    }
}
