//! **Semantic API surface diff for compiled libraries.**
//!
//! `apidiff` detects breaking changes between two versions of a library's
//! declared public surface. A metadata-reading collaborator (or the
//! in-crate [`ApiBuilder`]) materializes each version as a tree of
//! [`SymbolNode`]s; the [`DiffEngine`] walks the two trees in parallel,
//! matches declarations by identity key, and classifies every discrepancy
//! as added, removed, or suppressed by an [`IgnorePolicy`].
//!
//! The engine compares declared surface shape only: member bodies,
//! behavioral compatibility, and cross-assembly dependency graphs are out
//! of scope, as are artifact loading and report rendering — the result is
//! a structured [`DiffReport`](diff::DiffReport) for a rendering layer to
//! consume.
//!
//! # Modules
//!
//! - [`model`]: the symbol tree and its fluent builders.
//! - [`policy`]: ignore-path validation and suppression.
//! - [`diff`]: the comparison engine and its result tree.
//! - [`error`]: the crate error type.
//!
//! # Example
//!
//! ```
//! use apidiff::{ApiBuilder, DiffEngine, IgnorePolicy};
//!
//! let old = ApiBuilder::new("Widgets")
//!     .namespace("Widgets", |ns| {
//!         ns.class("Button", |t| {
//!             t.method("Click", |m| m.returns("System.Void"))
//!                 .property("Label", "System.String")
//!         })
//!     })
//!     .build();
//!
//! let new = ApiBuilder::new("Widgets")
//!     .namespace("Widgets", |ns| {
//!         ns.class("Button", |t| {
//!             t.method("Press", |m| m.returns("System.Void"))
//!                 .property("Label", "System.String")
//!         })
//!     })
//!     .build();
//!
//! // Click was renamed: one removal, one addition. Ignoring the old
//! // path keeps the removal out of the report.
//! let policy = IgnorePolicy::new(["Widgets.Button.Click"])?;
//! let report = DiffEngine::new().diff(&old, &new, &policy)?;
//!
//! assert_eq!(report.summary.removed, 0);
//! assert_eq!(report.summary.added, 1);
//! assert_eq!(report.summary.suppressed, 1);
//! # Ok::<(), apidiff::ApiDiffError>(())
//! ```

pub mod diff;
pub mod error;
pub mod model;
pub mod policy;

pub use diff::{DiffEngine, DiffEntry, DiffReport, Direction};
pub use error::{ApiDiffError, Result};
pub use model::{ApiBuilder, SymbolKind, SymbolNode};
pub use policy::IgnorePolicy;
