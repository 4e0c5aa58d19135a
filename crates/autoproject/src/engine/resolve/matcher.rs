use super::TargetInit;

use autoproject_core::{
    schema::{PropertyDescriptor, TypeReflector},
    stmt::Type,
};

/// A source property to copy into the target property of the same name and
/// type.
#[derive(Debug, Clone, Copy)]
pub(super) struct PropMatch<'a> {
    pub(super) source: PropertyDescriptor<'a>,
    pub(super) target: PropertyDescriptor<'a>,
}

/// Pairs the readable properties of `source_ty` with the writable properties
/// of the target that the caller did not bind.
///
/// Names and types must match exactly. Source properties without a partner
/// are skipped.
pub(super) fn match_properties<'a, R>(
    reflector: &'a R,
    source_ty: &Type,
    target: &TargetInit,
) -> Vec<PropMatch<'a>>
where
    R: TypeReflector + ?Sized,
{
    let candidates: Vec<_> = reflector
        .properties(&Type::Model(target.model))
        .into_iter()
        .filter(|property| property.writable && !target.is_bound(property.id))
        .collect();

    reflector
        .properties(source_ty)
        .into_iter()
        .filter(|property| property.readable)
        .filter_map(|source| {
            let target = candidates
                .iter()
                .find(|candidate| candidate.name == source.name && candidate.ty == source.ty)?;

            Some(PropMatch {
                source,
                target: *target,
            })
        })
        .collect()
}
