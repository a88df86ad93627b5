use std::borrow::Cow;

use serde::Serialize;
use serde_json::Value;

use crate::{BuildError, OptionRegistry, TypeRef};

/// The externally-visible shape of one declared option.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArgumentDescriptor {
    pub name: String,
    pub ty: TypeRef,
    pub required: bool,
    pub default_value: Option<Value>,
    pub description: Option<String>,
}

/// The build-time-computed metadata for one query-object class: result type,
/// arguments and field-level attributes, ready for the host schema library to
/// register. Built once per class, immutable afterwards, safe to share across
/// concurrent requests.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldDescriptor {
    pub result_type: TypeRef,
    pub nullable: bool,
    pub description: Option<String>,
    pub deprecation_reason: Option<String>,
    pub complexity: u32,
    pub arguments: Vec<ArgumentDescriptor>,
}

/// Compiles an [`OptionRegistry`] into a [`FieldDescriptor`].
pub struct FieldBuilder {
    result_type: TypeRef,
    nullable: bool,
    description: Option<Cow<'static, str>>,
    deprecation_reason: Option<Cow<'static, str>>,
    complexity: u32,
}

impl FieldBuilder {
    pub fn new(result_type: TypeRef) -> Self {
        Self {
            result_type,
            nullable: true,
            description: None,
            deprecation_reason: None,
            complexity: 1,
        }
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn description(mut self, description: impl Into<Cow<'static, str>>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn deprecated(mut self, reason: impl Into<Cow<'static, str>>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    pub fn complexity(mut self, complexity: u32) -> Self {
        self.complexity = complexity;
        self
    }

    /// Builds the descriptor. Pure and deterministic: the result only depends
    /// on the builder's attributes and the registry, so hosts may memoize it
    /// per query-object class for the process lifetime.
    ///
    /// `permit` is consulted exactly once per argument, with the external
    /// argument name. A denied argument fails the whole build with
    /// [`BuildError::PermissionDenied`] so it never becomes visible in the
    /// assembled schema.
    pub fn build<C>(
        self,
        registry: &OptionRegistry<C>,
        permit: impl Fn(&str) -> bool,
    ) -> Result<FieldDescriptor, BuildError> {
        if self.complexity == 0 {
            return Err(BuildError::InvalidComplexity);
        }

        Ok(FieldDescriptor {
            result_type: self.result_type,
            nullable: self.nullable,
            description: self.description.map(Cow::into_owned),
            deprecation_reason: self.deprecation_reason.map(Cow::into_owned),
            complexity: self.complexity,
            arguments: build_arguments(registry, permit)?,
        })
    }
}

/// Derives the argument descriptors for every declared option, in declaration
/// order.
pub fn build_arguments<C>(
    registry: &OptionRegistry<C>,
    permit: impl Fn(&str) -> bool,
) -> Result<Vec<ArgumentDescriptor>, BuildError> {
    let mut arguments = Vec::with_capacity(registry.len());
    for option in registry.iter() {
        let name = if option.camelize {
            camelize(option.name())
        } else {
            option.name().to_owned()
        };

        if !permit(&name) {
            return Err(BuildError::PermissionDenied { argument: name });
        }

        // The registry guarantees a type was set at declaration time.
        let ty = option
            .type_ref()
            .cloned()
            .expect("declare() validated the option type");

        arguments.push(ArgumentDescriptor {
            name,
            ty,
            required: option.required,
            default_value: option.default.clone(),
            description: option.description.as_deref().map(str::to_owned),
        });
    }
    Ok(arguments)
}

/// `option_field` -> `optionField`. Each `_`-separated segment is capitalized
/// (first char upper, rest lower), then the leading character is lowered.
pub(crate) fn camelize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for segment in name.split('_') {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.extend(chars.flat_map(char::to_lowercase));
        }
    }
    let mut chars = out.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => out,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camelize_joins_underscore_segments() {
        assert_eq!(camelize("option_field"), "optionField");
        assert_eq!(camelize("category_id"), "categoryId");
        assert_eq!(camelize("id"), "id");
    }

    #[test]
    fn camelize_flattens_interior_capitals() {
        // Mirrors the capitalize-then-join rule: segments lose interior casing.
        assert_eq!(camelize("categoryId"), "categoryid");
    }
}
