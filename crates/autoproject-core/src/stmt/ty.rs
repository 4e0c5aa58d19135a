use super::Value;
use crate::schema::ModelId;

/// An expression type.
///
/// Types compare structurally and are never coerced: `I32` and `I64` are
/// distinct, as are two different models.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// String type
    String,

    /// An instance of a model
    Model(ModelId),

    /// A list of a single type
    List(Box<Type>),

    /// The null type
    Null,

    /// Unit type
    Unit,

    /// A type that could not be inferred (e.g., empty list)
    Unknown,
}

impl Type {
    pub fn list(ty: impl Into<Self>) -> Self {
        Self::List(Box::new(ty.into()))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool)
    }

    pub fn is_model(&self) -> bool {
        matches!(self, Self::Model(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    pub fn as_model(&self) -> Option<ModelId> {
        match self {
            Self::Model(model_id) => Some(*model_id),
            _ => None,
        }
    }

    /// The item type of a list type.
    pub fn list_item(&self) -> Option<&Type> {
        match self {
            Self::List(item) => Some(item),
            _ => None,
        }
    }

    /// True if values of this type may be `Null`.
    pub fn is_nullable(&self) -> bool {
        matches!(
            self,
            Self::String | Self::Model(_) | Self::List(_) | Self::Null | Self::Unknown
        )
    }

    /// The value a freshly constructed object holds for a property of this
    /// type before any constructor or binding assigns it.
    pub fn default_value(&self) -> Value {
        match self {
            Self::Bool => Value::Bool(false),
            Self::I32 => Value::I32(0),
            Self::I64 => Value::I64(0),
            _ => Value::Null,
        }
    }
}

impl From<&Self> for Type {
    fn from(value: &Self) -> Self {
        value.clone()
    }
}

impl From<ModelId> for Type {
    fn from(value: ModelId) -> Self {
        Self::Model(value)
    }
}
