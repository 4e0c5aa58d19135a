mod cx;
pub use cx::ExprContext;

mod eval;

mod expr;
pub use expr::Expr;

mod expr_arg;
pub use expr_arg::ExprArg;

mod expr_func;
pub use expr_func::ExprFunc;

mod expr_lambda;
pub use expr_lambda::ExprLambda;

mod expr_list;
pub use expr_list::ExprList;

mod expr_map;
pub use expr_map::ExprMap;

mod expr_member;
pub use expr_member::ExprMember;

mod expr_new;
pub use expr_new::{Binding, ExprNew};

mod expr_project_into;
pub use expr_project_into::ExprProjectInto;

pub mod fold;
pub use fold::Fold;

mod infer;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;

mod value_object;
pub use value_object::ValueObject;

pub mod visit;
pub use visit::Visit;

use std::fmt;
use std::sync::Arc;
