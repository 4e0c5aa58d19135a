use crate::{
    schema::Model,
    stmt::{Expr, ExprArg, ExprFunc, ExprLambda, ExprMember, ExprNew, Value, ValueObject},
    Error, Result, Schema,
};
use std::cmp::Ordering;

enum ScopeStack<'a> {
    Root,
    Scope {
        args: &'a [Value],
        parent: &'a ScopeStack<'a>,
    },
}

impl Expr {
    /// Evaluates the expression against `schema`.
    ///
    /// The expression must be closed: arguments may only refer to lambdas
    /// inside it. Evaluating a graph that still holds a `project_into`
    /// marker fails with a not-activated error.
    pub fn eval(&self, schema: &Schema) -> Result<Value> {
        self.eval_ref(schema, &ScopeStack::Root)
    }

    fn eval_ref(&self, schema: &Schema, scope: &ScopeStack<'_>) -> Result<Value> {
        match self {
            Expr::Arg(expr_arg) => {
                let Some(value) = scope.resolve_arg(expr_arg) else {
                    return Err(Error::expression_evaluation_failed(format!(
                        "failed to resolve argument; arg={expr_arg:?}"
                    )));
                };

                Ok(value.clone())
            }
            Expr::Func(expr_func) => expr_func.eval_ref(schema, scope),
            Expr::Lambda(_) => Err(Error::expression_evaluation_failed(
                "a lambda cannot be evaluated on its own",
            )),
            Expr::List(expr_list) => {
                let mut ret = Vec::with_capacity(expr_list.items.len());

                for expr in &expr_list.items {
                    ret.push(expr.eval_ref(schema, scope)?);
                }

                Ok(Value::List(ret))
            }
            Expr::Map(expr_map) => {
                let Expr::Lambda(map) = &*expr_map.map else {
                    return Err(Error::expression_evaluation_failed(
                        "Map must apply a lambda",
                    ));
                };

                let mut base = expr_map.base.eval_ref(schema, scope)?;

                let Value::List(ref mut items) = &mut base else {
                    return Err(Error::expression_evaluation_failed(
                        "Map base must evaluate to a list",
                    ));
                };

                for item in items.iter_mut() {
                    let args = [item.take()];
                    *item = map.apply(schema, scope, &args)?;
                }

                Ok(base)
            }
            Expr::Member(expr_member) => expr_member.eval_ref(schema, scope),
            Expr::New(expr_new) => expr_new.eval_ref(schema, scope),
            Expr::ProjectInto(_) => Err(Error::not_activated()),
            Expr::Value(value) => Ok(value.clone()),
        }
    }
}

impl ExprLambda {
    fn apply(&self, schema: &Schema, scope: &ScopeStack<'_>, args: &[Value]) -> Result<Value> {
        if args.len() != self.arity() {
            return Err(Error::expression_evaluation_failed(format!(
                "lambda takes {} arguments but {} were supplied",
                self.arity(),
                args.len()
            )));
        }

        self.body.eval_ref(schema, &scope.scope(args))
    }
}

impl ExprFunc {
    fn eval_ref(&self, schema: &Schema, scope: &ScopeStack<'_>) -> Result<Value> {
        match self {
            ExprFunc::Range { start, count } => {
                if *count < 0 {
                    return Err(Error::expression_evaluation_failed(format!(
                        "range count must not be negative; count={count}"
                    )));
                }

                (0..*count)
                    .map(|i| {
                        start.checked_add(i).map(Value::I64).ok_or_else(|| {
                            Error::expression_evaluation_failed(format!(
                                "range overflows i64; start={start} count={count}"
                            ))
                        })
                    })
                    .collect::<Result<_>>()
                    .map(Value::List)
            }
            ExprFunc::Count(list) => {
                let items = eval_list(list, schema, scope, "count")?;
                Ok(Value::I64(items.len() as i64))
            }
            ExprFunc::Max(list) => {
                let items = eval_list(list, schema, scope, "max")?;
                extremum(items, "max", Ordering::Greater)
            }
            ExprFunc::Min(list) => {
                let items = eval_list(list, schema, scope, "min")?;
                extremum(items, "min", Ordering::Less)
            }
        }
    }
}

impl ExprMember {
    fn eval_ref(&self, schema: &Schema, scope: &ScopeStack<'_>) -> Result<Value> {
        let Some(property) = schema.get_property(self.property) else {
            return Err(Error::expression_evaluation_failed(format!(
                "cannot read unknown property {:?}",
                self.property
            )));
        };

        let object = match self.base.eval_ref(schema, scope)? {
            Value::Object(object) => object,
            Value::Null => {
                return Err(Error::expression_evaluation_failed(format!(
                    "null reference reading `{}`",
                    property.name
                )))
            }
            value => {
                return Err(Error::expression_evaluation_failed(format!(
                    "cannot read `{}` from a non-object value; value={value:?}",
                    property.name
                )))
            }
        };

        if object.model() != self.property.model {
            return Err(Error::expression_evaluation_failed(format!(
                "`{}` is not a property of {:?}",
                property.name,
                object.model()
            )));
        }

        if !property.is_readable() {
            return Err(Error::expression_evaluation_failed(format!(
                "property `{}` has no public getter",
                property.name
            )));
        }

        Ok(object.get(self.property).clone())
    }
}

impl ExprNew {
    fn eval_ref(&self, schema: &Schema, scope: &ScopeStack<'_>) -> Result<Value> {
        let Some(model) = schema.models.get(&self.model) else {
            return Err(Error::expression_evaluation_failed(format!(
                "cannot construct unknown model {:?}",
                self.model
            )));
        };

        let mut args = Vec::with_capacity(self.args.len());
        for arg in &self.args {
            args.push(arg.eval_ref(schema, scope)?);
        }

        let mut fields = construct(model, schema, args)?;

        for binding in &self.bindings {
            let Some(property) = schema.get_property(binding.property) else {
                return Err(Error::expression_evaluation_failed(format!(
                    "cannot bind unknown property {:?} on `{}`",
                    binding.property, model.name
                )));
            };

            if binding.property.model != model.id {
                return Err(Error::expression_evaluation_failed(format!(
                    "cannot bind `{}` on `{}`: it belongs to another model",
                    property.name, model.name
                )));
            }

            if !property.is_writable() {
                return Err(Error::expression_evaluation_failed(format!(
                    "property `{}.{}` has no public setter",
                    model.name, property.name
                )));
            }

            let value = binding.expr.eval_ref(schema, scope)?;
            if !value.is_a(&property.ty) {
                return Err(Error::expression_evaluation_failed(format!(
                    "cannot assign {value:?} to `{}.{}` of type {:?}",
                    model.name, property.name, property.ty
                )));
            }

            fields[binding.property.index] = value;
        }

        Ok(ValueObject::new(model.id, fields).into())
    }
}

/// Runs the constructor of `model` taking `args`, returning the initialized
/// field slots.
fn construct(model: &Model, schema: &Schema, args: Vec<Value>) -> Result<Vec<Value>> {
    let mut fields: Vec<_> = model
        .properties
        .iter()
        .map(|property| property.ty.default_value())
        .collect();

    if !model.has_constructor(args.len()) {
        return Err(Error::expression_evaluation_failed(format!(
            "`{}` has no constructor taking {} arguments",
            model.name,
            args.len()
        )));
    }

    // The implicit constructor leaves every field at its default.
    let Some(constructor) = model.constructor(args.len()) else {
        return Ok(fields);
    };

    for (param, arg) in constructor.params.iter().zip(&args) {
        if !arg.is_a(&param.ty) {
            return Err(Error::expression_evaluation_failed(format!(
                "constructor of `{}` expects {:?} for `{}`; found {arg:?}",
                model.name, param.ty, param.name
            )));
        }
    }

    let root = ScopeStack::Root;
    let scope = root.scope(&args);

    for assignment in &constructor.body {
        let property = model.property(assignment.property);
        let value = assignment.expr.eval_ref(schema, &scope)?;

        if !value.is_a(&property.ty) {
            return Err(Error::expression_evaluation_failed(format!(
                "constructor of `{}` assigns {value:?} to `{}` of type {:?}",
                model.name, property.name, property.ty
            )));
        }

        fields[assignment.property.index] = value;
    }

    Ok(fields)
}

fn eval_list(
    expr: &Expr,
    schema: &Schema,
    scope: &ScopeStack<'_>,
    func: &str,
) -> Result<Vec<Value>> {
    match expr.eval_ref(schema, scope)? {
        Value::List(items) => Ok(items),
        value => Err(Error::expression_evaluation_failed(format!(
            "{func} requires a list; value={value:?}"
        ))),
    }
}

/// The item that compares as `keep` against every other item.
fn extremum(items: Vec<Value>, func: &str, keep: Ordering) -> Result<Value> {
    let mut items = items.into_iter();

    let Some(mut ret) = items.next() else {
        return Err(Error::expression_evaluation_failed(format!(
            "{func} of an empty list"
        )));
    };

    for item in items {
        if cmp_ordered(&item, &ret)? == keep {
            ret = item;
        }
    }

    Ok(ret)
}

fn cmp_ordered(lhs: &Value, rhs: &Value) -> Result<Ordering> {
    match (lhs, rhs) {
        (Value::I32(lhs), Value::I32(rhs)) => Ok(lhs.cmp(rhs)),
        (Value::I64(lhs), Value::I64(rhs)) => Ok(lhs.cmp(rhs)),
        (Value::String(lhs), Value::String(rhs)) => Ok(lhs.cmp(rhs)),
        (Value::Bool(lhs), Value::Bool(rhs)) => Ok(lhs.cmp(rhs)),
        (Value::Null, _) | (_, Value::Null) => Err(Error::expression_evaluation_failed(
            "ordered comparison with NULL is undefined",
        )),
        _ => Err(Error::expression_evaluation_failed(
            "ordered comparison between incompatible types",
        )),
    }
}

impl ScopeStack<'_> {
    fn resolve_arg(&self, expr_arg: &ExprArg) -> Option<&Value> {
        let mut nesting = expr_arg.nesting;
        let mut scope = self;

        while nesting > 0 {
            nesting -= 1;

            scope = match scope {
                ScopeStack::Root => return None,
                ScopeStack::Scope { parent, .. } => parent,
            };
        }

        match scope {
            ScopeStack::Root => None,
            ScopeStack::Scope { args, .. } => args.get(expr_arg.position),
        }
    }

    fn scope<'child>(&'child self, args: &'child [Value]) -> ScopeStack<'child> {
        ScopeStack::Scope { args, parent: self }
    }
}
