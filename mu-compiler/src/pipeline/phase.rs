//! Pipeline phase trait.

use mu_core::Document;
use mu_stack::Stack;

use super::Sink;

/// A phase that runs over the parsed stack.
///
/// Phases are executed in order by the compiler. Each phase may inspect and
/// update the stack, and reports problems to the sink rather than returning
/// them. The compiler stops after any phase that increased the sink's error
/// count.
///
/// Built-in phases:
/// - `PostParseAnalyzer` - structural checks on the raw parse tree
/// - `Binder` - semantic checks on the stack
///
/// Custom phases can be added to the compiler; they run after the built-ins.
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics and logs).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the stack parsed from `doc`.
    fn run(&self, doc: &Document, stack: &mut Stack, diag: &dyn Sink);
}
