use super::{matcher::PropMatch, TargetInit};

use autoproject_core::stmt::{Binding, Expr, ExprNew};

use std::sync::Arc;

/// Builds the construction replacing a marker: the caller's constructor call
/// and bindings, followed by one `target.P = source.P` binding per match.
///
/// Every synthesized binding reads from the same `source` handle, so the
/// source computation is shared rather than copied.
pub(super) fn combine(source: &Arc<Expr>, target: TargetInit, matches: &[PropMatch<'_>]) -> Expr {
    let mut bindings = target.bindings;
    bindings.reserve(matches.len());

    for prop_match in matches {
        debug_assert!(!bindings
            .iter()
            .any(|binding| binding.property == prop_match.target.id));

        bindings.push(Binding {
            property: prop_match.target.id,
            expr: Expr::member(source.clone(), prop_match.source.id),
        });
    }

    ExprNew {
        model: target.model,
        args: target.args,
        bindings,
    }
    .into()
}
