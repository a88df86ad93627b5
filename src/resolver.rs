use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use crate::{dispatch, ApplyFn, OptionRegistry, ResolveError, TypeRef};

pub type Params = BTreeMap<String, Value>;

/// The per-request bundle handed to every filter application.
///
/// Created fresh by the hosting entry point for each incoming request (after
/// it has validated and coerced `params` against the argument descriptors) and
/// discarded once the collection is produced. Never shared between requests.
#[derive(Clone, Debug, Default)]
pub struct ResolutionContext {
    /// The parent/reference object the query object was mounted on, if any.
    pub object: Option<Value>,
    /// Ambient request context (current user, locale, ...).
    pub context: BTreeMap<String, Value>,
    /// Supplied parameter values, keyed by the declared option name.
    pub params: Params,
}

impl ResolutionContext {
    pub fn new(params: impl IntoIterator<Item = (String, Value)>) -> Self {
        Self {
            object: None,
            context: BTreeMap::new(),
            params: params.into_iter().collect(),
        }
    }

    pub fn with_object(mut self, object: impl Into<Value>) -> Self {
        self.object = Some(object.into());
        self
    }

    pub fn with_context(mut self, context: impl IntoIterator<Item = (String, Value)>) -> Self {
        self.context = context.into_iter().collect();
        self
    }
}

/// The request-time engine: folds every supplied-or-defaulted option of a
/// registry into a base collection, in declaration order.
///
/// Handlers are registered up front, once, under the option name they serve
/// ([`handler`](Self::handler)) or under an `(option, enum member)` pair
/// ([`member_handler`](Self::member_handler)). A resolver is stateless across
/// requests and may be shared freely.
pub struct ScopeResolver<C> {
    handlers: BTreeMap<Cow<'static, str>, ApplyFn<C>>,
    member_handlers: BTreeMap<Cow<'static, str>, BTreeMap<Cow<'static, str>, ApplyFn<C>>>,
}

impl<C> Default for ScopeResolver<C> {
    fn default() -> Self {
        Self {
            handlers: BTreeMap::new(),
            member_handlers: BTreeMap::new(),
        }
    }
}

impl<C> ScopeResolver<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the handler backing options declared without an explicit
    /// apply function.
    pub fn handler<F>(mut self, option: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        F: Fn(C, &Value, &ResolutionContext) -> Result<C, ResolveError> + Send + Sync + 'static,
    {
        self.handlers.insert(option.into(), Box::new(f));
        self
    }

    /// Registers the handler for one member of an enum-typed option. A single
    /// declared option fans out to one independent handler per member.
    pub fn member_handler<F>(
        mut self,
        option: impl Into<Cow<'static, str>>,
        member: impl Into<Cow<'static, str>>,
        f: F,
    ) -> Self
    where
        F: Fn(C, &Value, &ResolutionContext) -> Result<C, ResolveError> + Send + Sync + 'static,
    {
        self.member_handlers
            .entry(option.into())
            .or_default()
            .insert(member.into(), Box::new(f));
        self
    }

    pub(crate) fn member_handler_for(&self, option: &str, member: &str) -> Option<&ApplyFn<C>> {
        self.member_handlers.get(option)?.get(member)
    }

    /// Applies every present-or-defaulted option to `base`, in declaration
    /// order, and returns the final collection.
    ///
    /// An option with neither a supplied value nor a default is skipped
    /// entirely; its handler is never invoked. Each option applies at most
    /// once. Failures raised by a handler (including collaborator failures)
    /// propagate unmasked and the partially-built chain is discarded with this
    /// request.
    pub fn resolve(
        &self,
        registry: &OptionRegistry<C>,
        base: C,
        ctx: &ResolutionContext,
    ) -> Result<C, ResolveError> {
        let mut current = base;
        for option in registry.iter() {
            let value = match ctx
                .params
                .get(option.name())
                .or_else(|| option.default_value())
            {
                Some(value) => value,
                None => continue,
            };

            #[cfg(feature = "tracing")]
            tracing::trace!("applying option '{}' with value {}", option.name(), value);

            let is_enum = option.type_ref().is_some_and(TypeRef::is_enum);
            current = if is_enum && option.apply.is_none() {
                dispatch::dispatch(self, option, current, value, ctx)?
            } else if let Some(apply) = &option.apply {
                apply(current, value, ctx)?
            } else if let Some(apply) = self.handlers.get(option.name()) {
                apply(current, value, ctx)?
            } else {
                return Err(ResolveError::UnknownFilter {
                    option: option.name().to_owned(),
                });
            };
        }
        Ok(current)
    }
}

impl<C> fmt::Debug for ScopeResolver<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeResolver")
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .field(
                "member_handlers",
                &self.member_handlers.keys().collect::<Vec<_>>(),
            )
            .finish()
    }
}
