//! Comparison engine for API surface trees.
//!
//! The walk runs level by level: [`level::partition`] splits one set of
//! siblings into added, removed, and matched by identity key; per-kind
//! rules in [`comparers`] decide which matched pairs are recursed into;
//! the [`IgnorePolicy`](crate::policy::IgnorePolicy) filters findings as
//! they are produced; and the outcome composes into a [`DiffReport`] tree
//! mirroring the recursion.
//!
//! # Example
//!
//! ```
//! use apidiff::{ApiBuilder, DiffEngine, IgnorePolicy};
//!
//! let old = ApiBuilder::new("Lib")
//!     .namespace("A", |ns| ns.class("C", |t| t))
//!     .build();
//! let new = ApiBuilder::new("Lib")
//!     .namespace("A", |ns| ns)
//!     .build();
//!
//! let report = DiffEngine::new()
//!     .diff(&old, &new, &IgnorePolicy::empty())
//!     .expect("well-formed trees");
//! assert_eq!(report.summary.removed, 1);
//! ```

mod comparers;
mod engine;
mod level;
mod result;

pub use engine::DiffEngine;
pub use level::{partition, LevelDiff};
pub use result::{DiffEntry, DiffReport, DiffSummary, Direction, ReportNode};
