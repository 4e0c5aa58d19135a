//! Rebuild-on-change rewriting.
//!
//! Every `fold_*` method returns `Ok(None)` when the node is unchanged and
//! `Ok(Some(expr))` with its replacement otherwise. A parent is rebuilt only
//! when one of its children changed, and the rebuilt parent keeps `Arc`
//! handles to every child that did not change. A fold that changes nothing
//! therefore allocates nothing, and the caller keeps the original graph.

#![allow(unused_variables)]

use super::{
    Binding, Expr, ExprArg, ExprFunc, ExprLambda, ExprList, ExprMap, ExprMember, ExprNew,
    ExprProjectInto, Value,
};
use crate::Result;

use std::sync::Arc;

pub trait Fold {
    fn fold_expr(&mut self, i: &Expr) -> Result<Option<Expr>> {
        fold_expr(self, i)
    }

    fn fold_expr_arg(&mut self, i: &ExprArg) -> Result<Option<Expr>> {
        fold_expr_arg(self, i)
    }

    fn fold_expr_func(&mut self, i: &ExprFunc) -> Result<Option<Expr>> {
        fold_expr_func(self, i)
    }

    fn fold_expr_lambda(&mut self, i: &ExprLambda) -> Result<Option<Expr>> {
        fold_expr_lambda(self, i)
    }

    fn fold_expr_list(&mut self, i: &ExprList) -> Result<Option<Expr>> {
        fold_expr_list(self, i)
    }

    fn fold_expr_map(&mut self, i: &ExprMap) -> Result<Option<Expr>> {
        fold_expr_map(self, i)
    }

    fn fold_expr_member(&mut self, i: &ExprMember) -> Result<Option<Expr>> {
        fold_expr_member(self, i)
    }

    fn fold_expr_new(&mut self, i: &ExprNew) -> Result<Option<Expr>> {
        fold_expr_new(self, i)
    }

    fn fold_expr_project_into(&mut self, i: &ExprProjectInto) -> Result<Option<Expr>> {
        fold_expr_project_into(self, i)
    }

    fn fold_value(&mut self, i: &Value) -> Result<Option<Expr>> {
        fold_value(self, i)
    }
}

pub fn fold_expr<F>(f: &mut F, node: &Expr) -> Result<Option<Expr>>
where
    F: Fold + ?Sized,
{
    match node {
        Expr::Arg(expr) => f.fold_expr_arg(expr),
        Expr::Func(expr) => f.fold_expr_func(expr),
        Expr::Lambda(expr) => f.fold_expr_lambda(expr),
        Expr::List(expr) => f.fold_expr_list(expr),
        Expr::Map(expr) => f.fold_expr_map(expr),
        Expr::Member(expr) => f.fold_expr_member(expr),
        Expr::New(expr) => f.fold_expr_new(expr),
        Expr::ProjectInto(expr) => f.fold_expr_project_into(expr),
        Expr::Value(expr) => f.fold_value(expr),
    }
}

pub fn fold_expr_arg<F>(f: &mut F, node: &ExprArg) -> Result<Option<Expr>>
where
    F: Fold + ?Sized,
{
    Ok(None)
}

pub fn fold_expr_func<F>(f: &mut F, node: &ExprFunc) -> Result<Option<Expr>>
where
    F: Fold + ?Sized,
{
    let Some(operand) = node.operand() else {
        return Ok(None);
    };

    Ok(fold_arc(f, operand)?.map(|operand| node.with_operand(operand).into()))
}

pub fn fold_expr_lambda<F>(f: &mut F, node: &ExprLambda) -> Result<Option<Expr>>
where
    F: Fold + ?Sized,
{
    Ok(fold_arc(f, &node.body)?.map(|body| {
        ExprLambda {
            params: node.params.clone(),
            body,
        }
        .into()
    }))
}

pub fn fold_expr_list<F>(f: &mut F, node: &ExprList) -> Result<Option<Expr>>
where
    F: Fold + ?Sized,
{
    Ok(fold_exprs(f, &node.items)?.map(|items| ExprList { items }.into()))
}

pub fn fold_expr_map<F>(f: &mut F, node: &ExprMap) -> Result<Option<Expr>>
where
    F: Fold + ?Sized,
{
    let base = fold_arc(f, &node.base)?;
    let map = fold_arc(f, &node.map)?;

    if base.is_none() && map.is_none() {
        return Ok(None);
    }

    Ok(Some(
        ExprMap {
            base: base.unwrap_or_else(|| node.base.clone()),
            map: map.unwrap_or_else(|| node.map.clone()),
        }
        .into(),
    ))
}

pub fn fold_expr_member<F>(f: &mut F, node: &ExprMember) -> Result<Option<Expr>>
where
    F: Fold + ?Sized,
{
    Ok(fold_arc(f, &node.base)?.map(|base| {
        ExprMember {
            base,
            property: node.property,
        }
        .into()
    }))
}

pub fn fold_expr_new<F>(f: &mut F, node: &ExprNew) -> Result<Option<Expr>>
where
    F: Fold + ?Sized,
{
    let args = fold_exprs(f, &node.args)?;
    let bindings = fold_bindings(f, &node.bindings)?;

    if args.is_none() && bindings.is_none() {
        return Ok(None);
    }

    Ok(Some(
        ExprNew {
            model: node.model,
            args: args.unwrap_or_else(|| node.args.clone()),
            bindings: bindings.unwrap_or_else(|| node.bindings.clone()),
        }
        .into(),
    ))
}

pub fn fold_expr_project_into<F>(f: &mut F, node: &ExprProjectInto) -> Result<Option<Expr>>
where
    F: Fold + ?Sized,
{
    let source = fold_arc(f, &node.source)?;
    let target = fold_arc(f, &node.target)?;

    if source.is_none() && target.is_none() {
        return Ok(None);
    }

    Ok(Some(
        ExprProjectInto {
            source: source.unwrap_or_else(|| node.source.clone()),
            target: target.unwrap_or_else(|| node.target.clone()),
        }
        .into(),
    ))
}

pub fn fold_value<F>(f: &mut F, node: &Value) -> Result<Option<Expr>>
where
    F: Fold + ?Sized,
{
    Ok(None)
}

/// Fold a shared child, returning a new handle only if it changed.
pub fn fold_arc<F>(f: &mut F, node: &Arc<Expr>) -> Result<Option<Arc<Expr>>>
where
    F: Fold + ?Sized,
{
    Ok(f.fold_expr(node)?.map(Arc::new))
}

/// Fold a sequence of expressions. The sequence is copied only once the
/// first item changes.
pub fn fold_exprs<F>(f: &mut F, nodes: &[Expr]) -> Result<Option<Vec<Expr>>>
where
    F: Fold + ?Sized,
{
    let mut ret: Option<Vec<Expr>> = None;

    for (index, node) in nodes.iter().enumerate() {
        let folded = f.fold_expr(node)?;

        if let Some(items) = &mut ret {
            items.push(folded.unwrap_or_else(|| node.clone()));
        } else if let Some(expr) = folded {
            let mut items = Vec::with_capacity(nodes.len());
            items.extend_from_slice(&nodes[..index]);
            items.push(expr);
            ret = Some(items);
        }
    }

    Ok(ret)
}

fn fold_bindings<F>(f: &mut F, nodes: &[Binding]) -> Result<Option<Vec<Binding>>>
where
    F: Fold + ?Sized,
{
    let mut ret: Option<Vec<Binding>> = None;

    for (index, node) in nodes.iter().enumerate() {
        let folded = f.fold_expr(&node.expr)?.map(|expr| Binding {
            property: node.property,
            expr,
        });

        if let Some(bindings) = &mut ret {
            bindings.push(folded.unwrap_or_else(|| node.clone()));
        } else if let Some(binding) = folded {
            let mut bindings = Vec::with_capacity(nodes.len());
            bindings.extend_from_slice(&nodes[..index]);
            bindings.push(binding);
            ret = Some(bindings);
        }
    }

    Ok(ret)
}
