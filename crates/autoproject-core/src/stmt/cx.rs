use crate::{
    schema::Property,
    stmt::{ExprArg, Type},
    Schema,
};

/// Typing context for expressions.
///
/// Each lambda entered pushes a scope holding its parameter types, so an
/// [`ExprArg`] can be typed by walking `nesting` scopes up the stack.
#[derive(Debug)]
pub struct ExprContext<'a> {
    schema: &'a Schema,
    parent: Option<&'a ExprContext<'a>>,
    args: &'a [Type],
}

impl<'a> ExprContext<'a> {
    pub fn new(schema: &'a Schema) -> ExprContext<'a> {
        ExprContext {
            schema,
            parent: None,
            args: &[],
        }
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    /// Enter a lambda taking parameters of types `args`.
    pub fn scope<'child>(&'child self, args: &'child [Type]) -> ExprContext<'child> {
        ExprContext {
            schema: self.schema,
            parent: Some(self),
            args,
        }
    }

    /// Type of the lambda parameter `expr_arg` refers to, if it is in scope.
    pub fn resolve_arg_ty(&self, expr_arg: &ExprArg) -> Option<&'a Type> {
        let mut curr = self;

        for _ in 0..expr_arg.nesting {
            curr = curr.parent?;
        }

        // The root context is not a lambda and binds nothing.
        curr.parent?;
        curr.args.get(expr_arg.position)
    }

    /// The property `expr_member` reads, if the schema declares it.
    pub fn property(&self, expr_member: &super::ExprMember) -> Option<&'a Property> {
        self.schema.get_property(expr_member.property)
    }
}
