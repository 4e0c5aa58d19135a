use super::ModelId;
use crate::stmt::Type;
use std::fmt;

#[derive(Debug, Clone)]
pub struct Property {
    /// Uniquely identifies the property within the containing model.
    pub id: PropertyId,

    /// The property name, unique within the model
    pub name: String,

    /// Declared type
    pub ty: Type,

    /// Visibility of the getter, `None` when the property is write-only.
    pub getter: Option<Visibility>,

    /// Visibility of the setter, `None` when the property is read-only.
    pub setter: Option<Visibility>,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct PropertyId {
    pub model: ModelId,
    pub index: usize,
}

/// Accessibility of a property accessor.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Private,
}

impl Property {
    pub fn id(&self) -> PropertyId {
        self.id
    }

    /// True if the getter is public.
    pub fn is_readable(&self) -> bool {
        self.getter == Some(Visibility::Public)
    }

    /// True if the setter is public.
    pub fn is_writable(&self) -> bool {
        self.setter == Some(Visibility::Public)
    }

    /// A property is part of the model's public surface when at least one
    /// of its accessors is public.
    pub fn is_public(&self) -> bool {
        self.is_readable() || self.is_writable()
    }
}

impl From<&Property> for PropertyId {
    fn from(value: &Property) -> Self {
        value.id
    }
}

impl From<&PropertyId> for PropertyId {
    fn from(value: &PropertyId) -> Self {
        *value
    }
}

impl fmt::Debug for PropertyId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "PropertyId({}/{})", self.model.0, self.index)
    }
}
