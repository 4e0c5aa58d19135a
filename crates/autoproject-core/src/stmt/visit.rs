#![allow(unused_variables)]

use super::{
    Binding, Expr, ExprArg, ExprFunc, ExprLambda, ExprList, ExprMap, ExprMember, ExprNew,
    ExprProjectInto, Value,
};

pub trait Visit {
    fn visit_binding(&mut self, i: &Binding) {
        visit_binding(self, i);
    }

    fn visit_expr(&mut self, i: &Expr) {
        visit_expr(self, i);
    }

    fn visit_expr_arg(&mut self, i: &ExprArg) {
        visit_expr_arg(self, i);
    }

    fn visit_expr_func(&mut self, i: &ExprFunc) {
        visit_expr_func(self, i);
    }

    fn visit_expr_lambda(&mut self, i: &ExprLambda) {
        visit_expr_lambda(self, i);
    }

    fn visit_expr_list(&mut self, i: &ExprList) {
        visit_expr_list(self, i);
    }

    fn visit_expr_map(&mut self, i: &ExprMap) {
        visit_expr_map(self, i);
    }

    fn visit_expr_member(&mut self, i: &ExprMember) {
        visit_expr_member(self, i);
    }

    fn visit_expr_new(&mut self, i: &ExprNew) {
        visit_expr_new(self, i);
    }

    fn visit_expr_project_into(&mut self, i: &ExprProjectInto) {
        visit_expr_project_into(self, i);
    }

    fn visit_value(&mut self, i: &Value) {
        visit_value(self, i);
    }
}

impl<V: Visit> Visit for &mut V {
    fn visit_binding(&mut self, i: &Binding) {
        Visit::visit_binding(&mut **self, i);
    }

    fn visit_expr(&mut self, i: &Expr) {
        Visit::visit_expr(&mut **self, i);
    }

    fn visit_expr_arg(&mut self, i: &ExprArg) {
        Visit::visit_expr_arg(&mut **self, i);
    }

    fn visit_expr_func(&mut self, i: &ExprFunc) {
        Visit::visit_expr_func(&mut **self, i);
    }

    fn visit_expr_lambda(&mut self, i: &ExprLambda) {
        Visit::visit_expr_lambda(&mut **self, i);
    }

    fn visit_expr_list(&mut self, i: &ExprList) {
        Visit::visit_expr_list(&mut **self, i);
    }

    fn visit_expr_map(&mut self, i: &ExprMap) {
        Visit::visit_expr_map(&mut **self, i);
    }

    fn visit_expr_member(&mut self, i: &ExprMember) {
        Visit::visit_expr_member(&mut **self, i);
    }

    fn visit_expr_new(&mut self, i: &ExprNew) {
        Visit::visit_expr_new(&mut **self, i);
    }

    fn visit_expr_project_into(&mut self, i: &ExprProjectInto) {
        Visit::visit_expr_project_into(&mut **self, i);
    }

    fn visit_value(&mut self, i: &Value) {
        Visit::visit_value(&mut **self, i);
    }
}

pub fn visit_binding<V>(v: &mut V, node: &Binding)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
}

pub fn visit_expr<V>(v: &mut V, node: &Expr)
where
    V: Visit + ?Sized,
{
    match node {
        Expr::Arg(expr) => v.visit_expr_arg(expr),
        Expr::Func(expr) => v.visit_expr_func(expr),
        Expr::Lambda(expr) => v.visit_expr_lambda(expr),
        Expr::List(expr) => v.visit_expr_list(expr),
        Expr::Map(expr) => v.visit_expr_map(expr),
        Expr::Member(expr) => v.visit_expr_member(expr),
        Expr::New(expr) => v.visit_expr_new(expr),
        Expr::ProjectInto(expr) => v.visit_expr_project_into(expr),
        Expr::Value(expr) => v.visit_value(expr),
    }
}

pub fn visit_expr_arg<V>(v: &mut V, node: &ExprArg)
where
    V: Visit + ?Sized,
{
}

pub fn visit_expr_func<V>(v: &mut V, node: &ExprFunc)
where
    V: Visit + ?Sized,
{
    if let Some(operand) = node.operand() {
        v.visit_expr(operand);
    }
}

pub fn visit_expr_lambda<V>(v: &mut V, node: &ExprLambda)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.body);
}

pub fn visit_expr_list<V>(v: &mut V, node: &ExprList)
where
    V: Visit + ?Sized,
{
    for expr in &node.items {
        v.visit_expr(expr);
    }
}

pub fn visit_expr_map<V>(v: &mut V, node: &ExprMap)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.base);
    v.visit_expr(&node.map);
}

pub fn visit_expr_member<V>(v: &mut V, node: &ExprMember)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.base);
}

pub fn visit_expr_new<V>(v: &mut V, node: &ExprNew)
where
    V: Visit + ?Sized,
{
    for expr in &node.args {
        v.visit_expr(expr);
    }

    for binding in &node.bindings {
        v.visit_binding(binding);
    }
}

pub fn visit_expr_project_into<V>(v: &mut V, node: &ExprProjectInto)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.source);
    v.visit_expr(&node.target);
}

pub fn visit_value<V>(v: &mut V, node: &Value)
where
    V: Visit + ?Sized,
{
}
