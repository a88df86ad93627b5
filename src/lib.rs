//! scopeql: a declarative search-scope engine for schema-driven query APIs.
//!
//! A query object declares an ordered set of named filter options over an
//! immutable, chainable collection. At schema-assembly time the declarations
//! are compiled into a [`FieldDescriptor`] (argument names, types, defaults,
//! deprecation, complexity) that a host schema library can register. At
//! request time a [`ScopeResolver`] folds the supplied-or-defaulted options
//! into a base collection, in declaration order, and hands the result back to
//! the host for serialization.
//!
//! ```rust
//! use scopeql::{
//!     FieldBuilder, OptionRegistry, ResolutionContext, ScopeOption, ScopeResolver, TypeRef,
//! };
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let order = TypeRef::enumeration(
//!     "PostOrder",
//!     [("RECENT", json!("RECENT")), ("NAME", json!("NAME"))],
//! )?;
//!
//! let registry = OptionRegistry::<Vec<u32>>::new()
//!     .declare(ScopeOption::new("id").ty(TypeRef::id()).apply(
//!         |scope: Vec<u32>, value, _| {
//!             Ok(scope
//!                 .into_iter()
//!                 .filter(|id| json!(id) == *value)
//!                 .collect())
//!         },
//!     ))?
//!     .declare(ScopeOption::new("order").ty(order).default(json!("RECENT")))?;
//!
//! let field = FieldBuilder::new(TypeRef::scalar("[Post]"))
//!     .description("Lists posts")
//!     .build(&registry, |_| true)?;
//! assert_eq!(field.arguments.len(), 2);
//!
//! let resolver = ScopeResolver::new()
//!     .member_handler("order", "RECENT", |scope: Vec<u32>, _, _| {
//!         let mut scope = scope;
//!         scope.sort_unstable_by(|a, b| b.cmp(a));
//!         Ok(scope)
//!     })
//!     .member_handler("order", "NAME", |scope, _, _| Ok(scope));
//!
//! let ctx = ResolutionContext::default();
//! assert_eq!(resolver.resolve(&registry, vec![1, 3, 2], &ctx)?, vec![3, 2, 1]);
//! # Ok(())
//! # }
//! ```
#![warn(clippy::all, clippy::unwrap_used, clippy::panic)]
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod dispatch;
mod error;
mod option;
mod registry;
mod resolver;
mod schema;
mod type_ref;

pub use error::{BoxError, BuildError, DeclareError, ResolveError};
pub use option::{ApplyFn, ScopeOption};
pub use registry::OptionRegistry;
pub use resolver::{Params, ResolutionContext, ScopeResolver};
pub use schema::{ArgumentDescriptor, FieldBuilder, FieldDescriptor};
pub use type_ref::{EnumMember, TypeKind, TypeRef};
