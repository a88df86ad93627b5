use std::borrow::Cow;

use serde::Serialize;
use serde_json::Value;

use crate::DeclareError;

/// One `(label, underlying value)` pair of an enumeration type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EnumMember {
    pub label: Cow<'static, str>,
    pub value: Value,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum TypeKind {
    Scalar,
    Enum(Vec<EnumMember>),
}

/// An opaque handle to a value type, as the host schema library names it.
///
/// A `TypeRef` may expose an ordered set of enum members; labels are unique
/// within one type (enforced by [`TypeRef::enumeration`]). The engine never
/// interprets scalar types, it only threads them through to the argument
/// descriptors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TypeRef {
    name: Cow<'static, str>,
    kind: TypeKind,
}

impl TypeRef {
    pub fn scalar(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Scalar,
        }
    }

    /// Builds an enumeration type from `(label, underlying value)` pairs,
    /// preserving their order.
    pub fn enumeration<L, V>(
        name: impl Into<Cow<'static, str>>,
        members: impl IntoIterator<Item = (L, V)>,
    ) -> Result<Self, DeclareError>
    where
        L: Into<Cow<'static, str>>,
        V: Into<Value>,
    {
        let name = name.into();
        let mut collected: Vec<EnumMember> = Vec::new();
        for (label, value) in members {
            let label = label.into();
            if collected.iter().any(|m| m.label == label) {
                return Err(DeclareError::DuplicateEnumLabel {
                    ty: name.into_owned(),
                    label: label.into_owned(),
                });
            }
            collected.push(EnumMember {
                label,
                value: value.into(),
            });
        }
        Ok(Self {
            name,
            kind: TypeKind::Enum(collected),
        })
    }

    pub fn id() -> Self {
        Self::scalar("ID")
    }

    pub fn string() -> Self {
        Self::scalar("String")
    }

    pub fn boolean() -> Self {
        Self::scalar("Boolean")
    }

    pub fn int() -> Self {
        Self::scalar("Int")
    }

    pub fn float() -> Self {
        Self::scalar("Float")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    /// The declared members, or `None` for types without any.
    pub fn enum_members(&self) -> Option<&[EnumMember]> {
        match &self.kind {
            TypeKind::Scalar => None,
            TypeKind::Enum(members) => Some(members),
        }
    }

    pub fn is_enum(&self) -> bool {
        matches!(self.kind, TypeKind::Enum(_))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn enumeration_preserves_member_order() {
        let ty = TypeRef::enumeration("Order", [("RECENT", json!(0)), ("NAME", json!(1))])
            .expect("valid enum");

        let labels: Vec<_> = ty
            .enum_members()
            .expect("members")
            .iter()
            .map(|m| m.label.as_ref())
            .collect();
        assert_eq!(labels, vec!["RECENT", "NAME"]);
    }

    #[test]
    fn enumeration_rejects_duplicate_labels() {
        let err = TypeRef::enumeration("Order", [("RECENT", json!(0)), ("RECENT", json!(1))])
            .expect_err("duplicate label");

        assert_eq!(
            err.to_string(),
            "enum type 'Order' declares member label 'RECENT' more than once"
        );
    }

    #[test]
    fn scalars_expose_no_members() {
        assert!(TypeRef::string().enum_members().is_none());
        assert!(!TypeRef::boolean().is_enum());
    }
}
