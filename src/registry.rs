use std::fmt;

use crate::{DeclareError, ScopeOption};

/// The ordered set of options declared by one query-object class.
///
/// Options are appended by repeated [`declare`](Self::declare) calls during
/// schema assembly and the registry is read-only afterwards, so it can be
/// shared across concurrent requests without synchronization. Re-declaring a
/// name replaces that option's metadata in place but keeps the position fixed
/// by the first declaration.
pub struct OptionRegistry<C> {
    options: Vec<ScopeOption<C>>,
}

impl<C> Default for OptionRegistry<C> {
    fn default() -> Self {
        Self {
            options: Vec::new(),
        }
    }
}

impl<C> OptionRegistry<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares an option, validating it immediately.
    ///
    /// Fails with [`DeclareError::MissingType`] when no type was set and with
    /// [`DeclareError::RequiredWithDefault`] when the option is marked
    /// required but also carries a default (the two are contradictory: a
    /// defaulted option can never be absent).
    pub fn declare(mut self, option: ScopeOption<C>) -> Result<Self, DeclareError> {
        if option.ty.is_none() {
            return Err(DeclareError::MissingType {
                option: option.name.into_owned(),
            });
        }
        if option.required && option.default.is_some() {
            return Err(DeclareError::RequiredWithDefault {
                option: option.name.into_owned(),
            });
        }

        match self.options.iter_mut().find(|o| o.name == option.name) {
            Some(existing) => *existing = option,
            None => self.options.push(option),
        }
        Ok(self)
    }

    /// Iterates options in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ScopeOption<C>> {
        self.options.iter()
    }

    pub fn get(&self, name: &str) -> Option<&ScopeOption<C>> {
        self.options.iter().find(|o| o.name == name)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl<C> fmt::Debug for OptionRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.options.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::TypeRef;

    use super::*;

    fn names(registry: &OptionRegistry<Vec<u32>>) -> Vec<&str> {
        registry.iter().map(|o| o.name()).collect()
    }

    #[test]
    fn declare_without_type_fails_immediately() {
        let err = OptionRegistry::<Vec<u32>>::new()
            .declare(ScopeOption::new("id"))
            .expect_err("missing type");

        assert_eq!(err.to_string(), "option 'id' was declared without a type");
    }

    #[test]
    fn required_with_default_is_rejected() {
        let err = OptionRegistry::<Vec<u32>>::new()
            .declare(
                ScopeOption::new("order")
                    .ty(TypeRef::string())
                    .required()
                    .default(json!("RECENT")),
            )
            .expect_err("contradictory declaration");

        assert!(matches!(err, DeclareError::RequiredWithDefault { .. }));
    }

    #[test]
    fn redeclaration_updates_in_place_and_keeps_position() {
        let registry = OptionRegistry::<Vec<u32>>::new()
            .declare(ScopeOption::new("id").ty(TypeRef::id()))
            .and_then(|r| r.declare(ScopeOption::new("title").ty(TypeRef::string())))
            .and_then(|r| {
                r.declare(
                    ScopeOption::new("id")
                        .ty(TypeRef::string())
                        .description("overwritten"),
                )
            })
            .expect("valid declarations");

        assert_eq!(names(&registry), vec!["id", "title"]);
        let id = registry.get("id").expect("id option");
        assert_eq!(id.type_ref().map(TypeRef::name), Some("String"));
        assert_eq!(id.description.as_deref(), Some("overwritten"));
    }
}
