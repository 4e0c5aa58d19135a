use super::{Model, Schema};
use crate::{
    stmt::{self, Visit},
    Error, Result,
};

use std::collections::HashSet;

struct Verify<'a> {
    schema: &'a Schema,
}

pub(super) fn apply(schema: &Schema) -> Result<()> {
    Verify { schema }.verify()
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        self.verify_model_names_are_unique()?;

        for model in self.schema.models() {
            self.verify_property_names_are_unique(model)?;
            self.verify_property_types_resolve(model)?;
            self.verify_constructor_arities_are_unique(model)?;
            self.verify_constructor_bodies(model)?;
        }

        Ok(())
    }

    fn verify_model_names_are_unique(&self) -> Result<()> {
        let mut names = HashSet::new();

        for model in self.schema.models() {
            if !names.insert(&model.name) {
                return Err(Error::invalid_schema(format!(
                    "duplicate model `{}`",
                    model.name
                )));
            }
        }

        Ok(())
    }

    fn verify_property_names_are_unique(&self, model: &Model) -> Result<()> {
        let mut names = HashSet::new();

        for property in &model.properties {
            if !names.insert(&property.name) {
                return Err(Error::invalid_schema(format!(
                    "duplicate property `{}.{}`",
                    model.name, property.name
                )));
            }
        }

        Ok(())
    }

    fn verify_property_types_resolve(&self, model: &Model) -> Result<()> {
        for property in &model.properties {
            if !self.type_resolves(&property.ty) {
                return Err(Error::invalid_schema(format!(
                    "property `{}.{}` references an unknown model; ty={:?}",
                    model.name, property.name, property.ty
                )));
            }
        }

        Ok(())
    }

    fn type_resolves(&self, ty: &stmt::Type) -> bool {
        match ty {
            stmt::Type::Model(id) => self.schema.models.contains_key(id),
            stmt::Type::List(item) => self.type_resolves(item),
            _ => true,
        }
    }

    fn verify_constructor_arities_are_unique(&self, model: &Model) -> Result<()> {
        let mut arities = HashSet::new();

        for constructor in &model.constructors {
            if !arities.insert(constructor.arity()) {
                return Err(Error::invalid_schema(format!(
                    "`{}` declares more than one constructor taking {} arguments",
                    model.name,
                    constructor.arity()
                )));
            }
        }

        Ok(())
    }

    /// Constructor bodies may only read their own parameters.
    fn verify_constructor_bodies(&self, model: &Model) -> Result<()> {
        struct Args {
            lambda_depth: usize,
            arity: usize,
            out_of_range: Option<stmt::ExprArg>,
        }

        impl Visit for Args {
            fn visit_expr_arg(&mut self, i: &stmt::ExprArg) {
                // Args bound by lambdas inside the body are not parameters.
                if i.nesting < self.lambda_depth {
                    return;
                }

                let reaches_parameters = i.nesting == self.lambda_depth;
                if (!reaches_parameters || i.position >= self.arity) && self.out_of_range.is_none()
                {
                    self.out_of_range = Some(*i);
                }
            }

            fn visit_expr_lambda(&mut self, i: &stmt::ExprLambda) {
                self.lambda_depth += 1;
                stmt::visit::visit_expr_lambda(self, i);
                self.lambda_depth -= 1;
            }
        }

        for constructor in &model.constructors {
            for assignment in &constructor.body {
                let mut args = Args {
                    lambda_depth: 0,
                    arity: constructor.arity(),
                    out_of_range: None,
                };
                args.visit_expr(&assignment.expr);

                if let Some(arg) = args.out_of_range {
                    return Err(Error::invalid_schema(format!(
                        "constructor `{}({} args)` reads {arg:?}, which is not one of its parameters",
                        model.name,
                        constructor.arity()
                    )));
                }
            }
        }

        Ok(())
    }
}
