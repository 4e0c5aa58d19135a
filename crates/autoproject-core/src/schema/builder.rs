use super::{
    Constructor, ConstructorAssignment, Model, ModelId, Param, Property, Schema, Visibility,
};
use crate::{stmt, Error, Result};
use indexmap::IndexMap;

/// Assembles a [`Schema`].
///
/// Models receive consecutive IDs in registration order, starting at
/// `ModelId(0)`, and properties receive consecutive indices in declaration
/// order, so callers can name them with constants.
#[derive(Debug, Default)]
pub struct Builder {
    models: Vec<ModelBuilder>,
}

/// Declares a single model for [`Builder::model`].
#[derive(Debug)]
pub struct ModelBuilder {
    name: String,
    properties: Vec<PropertyDef>,
    constructors: Vec<ConstructorDef>,
}

#[derive(Debug)]
struct PropertyDef {
    name: String,
    ty: stmt::Type,
    getter: Option<Visibility>,
    setter: Option<Visibility>,
}

#[derive(Debug)]
struct ConstructorDef {
    params: Vec<Param>,
    body: Vec<(String, stmt::Expr)>,
}

impl Builder {
    pub fn model(mut self, model: ModelBuilder) -> Self {
        self.models.push(model);
        self
    }

    /// The ID the next registered model will receive.
    pub fn next_model_id(&self) -> ModelId {
        ModelId(self.models.len())
    }

    pub fn build(self) -> Result<Schema> {
        let mut models = IndexMap::new();

        for (index, model) in self.models.into_iter().enumerate() {
            let model = model.into_model(ModelId(index))?;
            models.insert(model.id, model);
        }

        let schema = Schema { models };
        super::verify::apply(&schema)?;
        Ok(schema)
    }
}

impl ModelBuilder {
    pub fn new(name: impl Into<String>) -> ModelBuilder {
        ModelBuilder {
            name: name.into(),
            properties: vec![],
            constructors: vec![],
        }
    }

    /// Declare a property with a public getter and a public setter.
    pub fn property(self, name: impl Into<String>, ty: impl Into<stmt::Type>) -> Self {
        self.property_with(
            name,
            ty,
            Some(Visibility::Public),
            Some(Visibility::Public),
        )
    }

    /// Declare a property with explicit accessor visibility. `None` omits
    /// the accessor entirely.
    pub fn property_with(
        mut self,
        name: impl Into<String>,
        ty: impl Into<stmt::Type>,
        getter: Option<Visibility>,
        setter: Option<Visibility>,
    ) -> Self {
        self.properties.push(PropertyDef {
            name: name.into(),
            ty: ty.into(),
            getter,
            setter,
        });
        self
    }

    /// Declare a constructor overload. `body` assigns properties, by name,
    /// from expressions over the parameters.
    pub fn constructor<P, A>(
        mut self,
        params: impl IntoIterator<Item = (P, stmt::Type)>,
        body: impl IntoIterator<Item = (A, stmt::Expr)>,
    ) -> Self
    where
        P: Into<String>,
        A: Into<String>,
    {
        self.constructors.push(ConstructorDef {
            params: params
                .into_iter()
                .map(|(name, ty)| Param {
                    name: name.into(),
                    ty,
                })
                .collect(),
            body: body
                .into_iter()
                .map(|(property, expr)| (property.into(), expr))
                .collect(),
        });
        self
    }

    fn into_model(self, id: ModelId) -> Result<Model> {
        let properties: Vec<_> = self
            .properties
            .into_iter()
            .enumerate()
            .map(|(index, def)| Property {
                id: id.property(index),
                name: def.name,
                ty: def.ty,
                getter: def.getter,
                setter: def.setter,
            })
            .collect();

        let mut constructors = Vec::with_capacity(self.constructors.len());

        for def in self.constructors {
            let mut body = Vec::with_capacity(def.body.len());

            for (name, expr) in def.body {
                let Some(property) = properties.iter().find(|property| property.name == name)
                else {
                    return Err(Error::invalid_schema(format!(
                        "constructor of `{}` assigns unknown property `{name}`",
                        self.name
                    )));
                };

                body.push(ConstructorAssignment {
                    property: property.id,
                    expr,
                });
            }

            constructors.push(Constructor {
                params: def.params,
                body,
            });
        }

        Ok(Model {
            id,
            name: self.name,
            properties,
            constructors,
        })
    }
}
