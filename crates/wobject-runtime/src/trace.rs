//! Tracing for the dispatch callable.
//!
//! The installed entry point runs with [`NoopTracer`], whose methods are
//! `#[inline(always)]` and empty, so tracing costs nothing there. A
//! [`PrintTracer`] passed to
//! [`static_metacall_traced`](crate::static_metacall_traced) records one line
//! per event, resolving member names from the class's tables.

use wobject_core::Colors;
use wobject_format::MetaTables;

use super::call::Call;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Dispatches and their effects.
    #[default]
    Default,
    /// Also dispatches skipped because the id is out of range.
    Verbose,
}

/// Dispatch instrumentation.
///
/// Methods receive indices the dispatcher already has; name resolution is
/// the tracer's business.
pub trait Tracer {
    /// Called on entry, before the id is checked.
    fn trace_dispatch(&mut self, call: Call, id: i32);

    /// Called when the id is outside `0..count` for the call's member list.
    fn trace_out_of_range(&mut self, call: Call, id: i32, count: usize);

    /// Called after method `index` ran.
    fn trace_invoke(&mut self, index: usize);

    /// Called after argument `arg` of method `index` was resolved to `result`.
    fn trace_register_argument(&mut self, index: usize, arg: i32, result: i32);

    /// Called after a signal lookup wrote `result`.
    fn trace_index_of_method(&mut self, result: i32);

    /// Called after constructor `index` produced an instance.
    fn trace_create(&mut self, index: usize);

    /// Called after property `index` was read.
    fn trace_read(&mut self, index: usize);

    /// Called for a property write; `applied` is false for read-only properties.
    fn trace_write(&mut self, index: usize, applied: bool);

    /// Called after property `index`'s type was resolved to `result`.
    fn trace_register_property(&mut self, index: usize, result: i32);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_dispatch(&mut self, _call: Call, _id: i32) {}

    #[inline(always)]
    fn trace_out_of_range(&mut self, _call: Call, _id: i32, _count: usize) {}

    #[inline(always)]
    fn trace_invoke(&mut self, _index: usize) {}

    #[inline(always)]
    fn trace_register_argument(&mut self, _index: usize, _arg: i32, _result: i32) {}

    #[inline(always)]
    fn trace_index_of_method(&mut self, _result: i32) {}

    #[inline(always)]
    fn trace_create(&mut self, _index: usize) {}

    #[inline(always)]
    fn trace_read(&mut self, _index: usize) {}

    #[inline(always)]
    fn trace_write(&mut self, _index: usize, _applied: bool) {}

    #[inline(always)]
    fn trace_register_property(&mut self, _index: usize, _result: i32) {}
}

/// Tracer that collects readable lines.
pub struct PrintTracer<'t> {
    tables: MetaTables<'t>,
    verbosity: Verbosity,
    lines: Vec<String>,
    colors: Colors,
}

impl<'t> PrintTracer<'t> {
    pub fn new(tables: MetaTables<'t>, verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            tables,
            verbosity,
            lines: Vec::new(),
            colors,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines joined, each newline-terminated.
    pub fn output(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    fn method_signature(&self, index: usize) -> String {
        self.tables
            .method_signature(index)
            .unwrap_or_else(|| "?".to_string())
    }

    fn constructor_signature(&self, index: usize) -> String {
        self.tables
            .constructor(index)
            .map_or_else(|| "?".to_string(), |c| c.signature())
    }

    fn property_name(&self, index: usize) -> &'t str {
        self.tables.property(index).map_or("?", |p| p.name())
    }

    fn add_subline(&mut self, verb: &str, content: String) {
        self.lines.push(format!("  {verb:<8} {content}"));
    }
}

impl Tracer for PrintTracer<'_> {
    fn trace_dispatch(&mut self, call: Call, id: i32) {
        let c = self.colors;
        self.lines.push(format!(
            "{}::{} {}",
            c.name(self.tables.class_name()),
            call.name(),
            c.plumbing(&format!("#{id}"))
        ));
    }

    fn trace_out_of_range(&mut self, call: Call, id: i32, count: usize) {
        if self.verbosity != Verbosity::Verbose {
            return;
        }
        let c = self.colors;
        let content = c.plumbing(&format!("{} #{id} not in 0..{count}", call.name()));
        self.add_subline("skip", content);
    }

    fn trace_invoke(&mut self, index: usize) {
        let content = self.colors.name(&self.method_signature(index));
        self.add_subline("invoke", content);
    }

    fn trace_register_argument(&mut self, index: usize, arg: i32, result: i32) {
        let content = format!(
            "{} arg {arg} -> {}",
            self.colors.name(&self.method_signature(index)),
            self.colors.literal(&result.to_string())
        );
        self.add_subline("argtype", content);
    }

    fn trace_index_of_method(&mut self, result: i32) {
        let content = match usize::try_from(result) {
            Ok(index) => format!("{} -> {result}", self.colors.name(&self.method_signature(index))),
            Err(_) => format!("-> {result}"),
        };
        self.add_subline("lookup", content);
    }

    fn trace_create(&mut self, index: usize) {
        let content = self.colors.name(&self.constructor_signature(index));
        self.add_subline("create", content);
    }

    fn trace_read(&mut self, index: usize) {
        let content = self.colors.name(self.property_name(index));
        self.add_subline("read", content);
    }

    fn trace_write(&mut self, index: usize, applied: bool) {
        let mut content = self.colors.name(self.property_name(index));
        if !applied {
            content.push_str(&self.colors.plumbing(" (read-only)"));
        }
        self.add_subline("write", content);
    }

    fn trace_register_property(&mut self, index: usize, result: i32) {
        let content = format!(
            "{} -> {}",
            self.colors.name(self.property_name(index)),
            self.colors.literal(&result.to_string())
        );
        self.add_subline("proptype", content);
    }
}
