//! Enum member dispatch.
//!
//! An enum-typed option declared without an explicit apply function routes to
//! one handler per enum member instead of one generic handler, keeping the
//! declared argument surface (a single enum-typed argument) unchanged while
//! each transformation stays independently testable.

use serde_json::Value;

use crate::{
    resolver::{ResolutionContext, ScopeResolver},
    EnumMember, ResolveError, ScopeOption,
};

enum Step<'a, C> {
    /// Match the effective value against the declared members.
    PickMember(C),
    /// Run the handler registered for the matched member.
    Invoke(C, &'a EnumMember),
    Done(C),
}

/// Resolves `value` to a member of `option`'s enum type and applies that
/// member's handler.
///
/// The value is re-validated against the declared members even when the host
/// schema already checked it; a mismatch is a per-request
/// [`ResolveError::UnknownEnumMember`], not a panic.
pub(crate) fn dispatch<C>(
    resolver: &ScopeResolver<C>,
    option: &ScopeOption<C>,
    current: C,
    value: &Value,
    ctx: &ResolutionContext,
) -> Result<C, ResolveError> {
    let ty = option
        .type_ref()
        .expect("declare() validated the option type");
    let members = ty.enum_members().unwrap_or_default();

    let mut step = Step::PickMember(current);
    loop {
        step = match step {
            Step::PickMember(current) => {
                let member = members.iter().find(|m| m.value == *value).ok_or_else(|| {
                    ResolveError::UnknownEnumMember {
                        option: option.name().to_owned(),
                        ty: ty.name().to_owned(),
                        value: value.clone(),
                    }
                })?;
                Step::Invoke(current, member)
            }
            Step::Invoke(current, member) => {
                let handler = resolver
                    .member_handler_for(option.name(), &member.label)
                    .ok_or_else(|| ResolveError::MissingEnumHandler {
                        option: option.name().to_owned(),
                        member: member.label.clone().into_owned(),
                    })?;
                Step::Done(handler(current, value, ctx)?)
            }
            Step::Done(current) => return Ok(current),
        };
    }
}
