use std::borrow::Cow;
use std::fmt;

use serde_json::Value;

use crate::{resolver::ResolutionContext, ResolveError, TypeRef};

/// A filter application function: takes the collection built so far, the
/// effective value for this option and the per-request context, and returns
/// the next collection in the chain.
pub type ApplyFn<C> =
    Box<dyn Fn(C, &Value, &ResolutionContext) -> Result<C, ResolveError> + Send + Sync>;

/// One declared filter option of a query object.
///
/// Built with chained setters and handed to [`OptionRegistry::declare`]; the
/// type is validated there, at declaration time, so schema authors see
/// mistakes immediately rather than on the first request.
///
/// [`OptionRegistry::declare`]: crate::OptionRegistry::declare
pub struct ScopeOption<C> {
    pub(crate) name: Cow<'static, str>,
    pub(crate) ty: Option<TypeRef>,
    pub(crate) default: Option<Value>,
    pub(crate) required: bool,
    pub(crate) description: Option<Cow<'static, str>>,
    pub(crate) deprecation_reason: Option<Cow<'static, str>>,
    pub(crate) camelize: bool,
    pub(crate) apply: Option<ApplyFn<C>>,
}

impl<C> ScopeOption<C> {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            default: None,
            required: false,
            description: None,
            deprecation_reason: None,
            camelize: true,
            apply: None,
        }
    }

    pub fn ty(mut self, ty: TypeRef) -> Self {
        self.ty = Some(ty);
        self
    }

    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
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

    /// Expose the argument under the declared name verbatim instead of its
    /// camelCased form.
    pub fn verbatim_name(mut self) -> Self {
        self.camelize = false;
        self
    }

    /// Attach an explicit apply function. Options without one fall back to the
    /// handler registered on the resolver under this option's name (or, for
    /// enum types, the per-member handlers).
    pub fn apply<F>(mut self, f: F) -> Self
    where
        F: Fn(C, &Value, &ResolutionContext) -> Result<C, ResolveError> + Send + Sync + 'static,
    {
        self.apply = Some(Box::new(f));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_ref(&self) -> Option<&TypeRef> {
        self.ty.as_ref()
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }
}

impl<C> fmt::Debug for ScopeOption<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeOption")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("default", &self.default)
            .field("required", &self.required)
            .field("camelize", &self.camelize)
            .field("apply", &self.apply.as_ref().map(|_| "Fn"))
            .finish()
    }
}
