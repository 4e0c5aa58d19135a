use super::*;
use crate::schema::{ModelId, PropertyId};

/// A reference to an instance of a model.
///
/// Cloning shares the instance. Two handles are the same object when
/// [`ValueObject::ptr_eq`] holds; `==` compares the model and field values.
#[derive(Clone)]
pub struct ValueObject {
    inner: Arc<ObjectInner>,
}

#[derive(PartialEq)]
struct ObjectInner {
    model: ModelId,

    /// One slot per model property, indexed like `Model::properties`.
    fields: Vec<Value>,
}

impl ValueObject {
    pub fn new(model: ModelId, fields: Vec<Value>) -> ValueObject {
        ValueObject {
            inner: Arc::new(ObjectInner { model, fields }),
        }
    }

    pub fn model(&self) -> ModelId {
        self.inner.model
    }

    pub fn fields(&self) -> &[Value] {
        &self.inner.fields
    }

    #[track_caller]
    pub fn get(&self, property: impl Into<PropertyId>) -> &Value {
        let property = property.into();
        assert_eq!(self.inner.model, property.model, "property of another model");
        &self.inner.fields[property.index]
    }

    /// Returns `true` if both handles refer to the same instance.
    pub fn ptr_eq(&self, other: &ValueObject) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for ValueObject {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.inner == other.inner
    }
}

impl fmt::Debug for ValueObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("model", &self.inner.model)
            .field("fields", &self.inner.fields)
            .finish()
    }
}
