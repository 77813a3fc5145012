//! Marker-delimited block replacement.
//!
//! Two edit contracts live here and are kept separate:
//!
//! - **Splice** ([`replace_block`], [`splice_file`]): find the first line
//!   containing a start marker, keep it, insert a payload right after it, and
//!   drop the original lines up to (not including) the first line accepted by a
//!   [`RegionEnd`] rule. Everything outside that region is copied untouched.
//! - **Full replace** ([`full_replace`], [`rewrite_file`]): discard the whole
//!   document in favour of fixed content.
//!
//! ```text
//! before                        after
//! ------                        -----
//! line 1                        line 1
//! // start marker          ->   // start marker
//! old body                      <payload lines>
//! old body                      boundary line
//! boundary line                 line 5
//! line 5
//! ```
//!
//! A missing start marker is an outcome, not an error: the document (and the
//! file on disk) is left exactly as it was.
//!
//! [`Plan`] bundles a sequence of edits loaded from a TOML, JSON or YAML file.

pub mod boundary;
pub mod document;
pub mod error;
pub mod file;
pub mod plan;
pub mod splice;

pub use boundary::{Boundary, RegionEnd};
pub use document::Document;
pub use error::{Error, Result};
pub use file::{Outcome, RewriteReport, SpliceReport, rewrite_file, splice_file};
pub use plan::{BoundaryConfig, Edit, EditReport, Plan};
pub use splice::{Splice, full_replace, replace_block};
