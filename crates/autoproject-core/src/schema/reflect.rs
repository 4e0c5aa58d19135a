use super::{Property, PropertyId, Schema};
use crate::stmt::Type;

use std::sync::Arc;

/// Read-only introspection over object types.
///
/// Implementations must be free of side effects: activation may query the
/// same type many times and from several threads.
pub trait TypeReflector {
    /// Lists the public instance properties of `ty`, in declaration order.
    ///
    /// A property is listed when at least one of its accessors is public.
    /// Types without properties (primitives, lists, unknown models) yield an
    /// empty list.
    fn properties(&self, ty: &Type) -> Vec<PropertyDescriptor<'_>>;
}

/// A property as seen from outside its type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyDescriptor<'a> {
    /// Handle used to build member access and binding nodes.
    pub id: PropertyId,

    pub name: &'a str,

    /// Declared type
    pub ty: &'a Type,

    /// The getter is public.
    pub readable: bool,

    /// The setter is public.
    pub writable: bool,
}

impl TypeReflector for Schema {
    fn properties(&self, ty: &Type) -> Vec<PropertyDescriptor<'_>> {
        let Type::Model(model_id) = ty else {
            return vec![];
        };

        let Some(model) = self.models.get(model_id) else {
            return vec![];
        };

        model
            .properties
            .iter()
            .filter(|property| property.is_public())
            .map(PropertyDescriptor::from)
            .collect()
    }
}

impl<T: TypeReflector + ?Sized> TypeReflector for &T {
    fn properties(&self, ty: &Type) -> Vec<PropertyDescriptor<'_>> {
        (**self).properties(ty)
    }
}

impl<T: TypeReflector + ?Sized> TypeReflector for Arc<T> {
    fn properties(&self, ty: &Type) -> Vec<PropertyDescriptor<'_>> {
        (**self).properties(ty)
    }
}

impl<'a> From<&'a Property> for PropertyDescriptor<'a> {
    fn from(property: &'a Property) -> Self {
        PropertyDescriptor {
            id: property.id,
            name: &property.name,
            ty: &property.ty,
            readable: property.is_readable(),
            writable: property.is_writable(),
        }
    }
}
