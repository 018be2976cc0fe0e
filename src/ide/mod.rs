//! Read-side data assembly for editor hosts.
//!
//! Pure data in, pure data out: no editor types appear here. An LSP or
//! extension host converts these values at its own boundary.
//!
//! The recommended way to keep state is through [`FlowHost`]:
//!
//! ```
//! use flownav::{FlowConfig, FlowHost};
//!
//! let mut host = FlowHost::new();
//! let config = FlowConfig::default();
//! host.update_file(
//!     std::path::Path::new("/tmp/a.ts"),
//!     "// flow-Auth start\n",
//!     &config,
//! );
//! assert!(host.graph().feature("Auth").is_some());
//! ```

mod analysis;
mod completion;
mod diagnostics;
mod highlight;

pub use analysis::{FileUpdate, FlowHost};
pub use completion::{CompletionItem, CompletionKind, completions};
pub use diagnostics::{Diagnostic, Severity, collect_diagnostics};
pub use highlight::{hint_range, nodes_by_file, prefix_index};
