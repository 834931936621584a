//! Logging and debugging facilities for Trellis.
//!
//! This module provides:
//! - Target names for filtering `tracing` output by subsystem
//! - Debug visualization for widget trees
//! - Performance tracing hooks for profiling
//!
//! # Tracing Integration
//!
//! Trellis uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("trellis::selection=debug,trellis::menu=info")
//!     .init();
//! ```
//!
//! # Debug Visualization
//!
//! Anything implementing [`TreeSource`] (a menu does) can be rendered with
//! [`TreeDebug`]:
//!
//! ```ignore
//! use trellis_core::logging::TreeDebug;
//!
//! println!("{}", TreeDebug::new().format_tree(&menu));
//! ```

use std::fmt::Write as FmtWrite;

use crate::id::WidgetId;

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Menu lifecycle, update and draw.
    pub const MENU: &str = "trellis::menu";
    /// Measure and arrange passes.
    pub const LAYOUT: &str = "trellis::layout";
    /// Focus changes and navigation.
    pub const SELECTION: &str = "trellis::selection";
    /// Callback dispatch.
    pub const CALLBACK: &str = "trellis::callback";
    /// Input routing.
    pub const INPUT: &str = "trellis::input";
    /// Widget state machines.
    pub const WIDGET: &str = "trellis::widget";
    /// Draw passes and surfaces.
    pub const RENDER: &str = "trellis::render";
    /// Theme loading.
    pub const STYLE: &str = "trellis::style";
    /// Performance spans.
    pub const PERF: &str = "trellis::perf";
}

/// Read-only view of a widget tree for debug output.
pub trait TreeSource {
    /// The root of the tree.
    fn tree_root(&self) -> WidgetId;

    /// Children of a node, in packing order.
    fn tree_children(&self, id: WidgetId) -> Vec<WidgetId>;

    /// Short kind name of a node (e.g. `"button"`).
    fn tree_kind(&self, id: WidgetId) -> &'static str;

    /// Human readable label of a node, empty when it has none.
    fn tree_label(&self, id: WidgetId) -> String;

    /// Extra detail appended in detailed mode (geometry, flags).
    fn tree_detail(&self, _id: WidgetId) -> Option<String> {
        None
    }
}

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Compact single-line representation.
    Compact,
}

/// Configuration for tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to show widget ids.
    pub show_ids: bool,
    /// Whether to show widget kinds.
    pub show_kinds: bool,
    /// Whether to show geometry and flags.
    pub show_details: bool,
    /// Maximum depth to traverse (None for unlimited).
    pub max_depth: Option<usize>,
    /// Indent size for each level.
    pub indent_size: usize,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_ids: true,
            show_kinds: true,
            show_details: false,
            max_depth: None,
            indent_size: 2,
        }
    }
}

impl TreeFormatOptions {
    /// Options for detailed debugging output.
    pub fn detailed() -> Self {
        Self {
            show_details: true,
            ..Default::default()
        }
    }

    /// Options for minimal output.
    pub fn minimal() -> Self {
        Self {
            show_ids: false,
            show_kinds: false,
            show_details: false,
            ..Default::default()
        }
    }
}

/// Debug utility for visualizing widget trees.
#[derive(Debug, Clone, Default)]
pub struct TreeDebug {
    options: TreeFormatOptions,
}

impl TreeDebug {
    /// Create a new visualizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a visualizer with custom options.
    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Format the whole tree of `source`.
    pub fn format_tree<S: TreeSource + ?Sized>(&self, source: &S) -> String {
        self.format_subtree(source, source.tree_root())
    }

    /// Format a subtree starting from `root`.
    pub fn format_subtree<S: TreeSource + ?Sized>(&self, source: &S, root: WidgetId) -> String {
        let mut output = String::new();
        self.format_into(source, root, 0, true, &mut output);
        output
    }

    fn format_into<S: TreeSource + ?Sized>(
        &self,
        source: &S,
        id: WidgetId,
        depth: usize,
        is_last: bool,
        output: &mut String,
    ) {
        if self.options.max_depth.is_some_and(|max| depth > max) {
            return;
        }

        output.push_str(&self.build_prefix(depth, is_last));

        let label = source.tree_label(id);
        output.push_str(if label.is_empty() { "(unnamed)" } else { &label });

        // Writing to a String cannot fail.
        if self.options.show_ids {
            let _ = write!(output, " [{}]", id.as_raw());
        }
        if self.options.show_kinds {
            let _ = write!(output, " ({})", source.tree_kind(id));
        }
        if self.options.show_details {
            if let Some(detail) = source.tree_detail(id) {
                let _ = write!(output, " {detail}");
            }
        }
        output.push('\n');

        let children = source.tree_children(id);
        let count = children.len();
        for (i, child) in children.into_iter().enumerate() {
            self.format_into(source, child, depth + 1, i + 1 == count, output);
        }
    }

    fn build_prefix(&self, depth: usize, is_last: bool) -> String {
        if depth == 0 {
            return String::new();
        }

        let (branch, tee, corner) = match self.options.style {
            TreeStyle::Ascii => ("|", "+--", "`--"),
            TreeStyle::Unicode => ("\u{2502}", "\u{251c}\u{2500}\u{2500}", "\u{2514}\u{2500}\u{2500}"),
            TreeStyle::Compact => ("", "-", "-"),
        };

        let mut prefix = String::new();
        for _ in 0..(depth - 1) {
            prefix.push_str(branch);
            prefix.push_str(&" ".repeat(self.options.indent_size));
        }
        prefix.push_str(if is_last { corner } else { tee });
        prefix.push(' ');
        prefix
    }
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Used to time layout passes and frame updates.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "trellis::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    struct Fixture {
        names: SlotMap<WidgetId, (&'static str, Vec<WidgetId>)>,
        root: WidgetId,
    }

    impl Fixture {
        fn new() -> Self {
            let mut names = SlotMap::with_key();
            let a = names.insert(("Play", Vec::new()));
            let b = names.insert(("Quit", Vec::new()));
            let root = names.insert(("", vec![a, b]));
            Self { names, root }
        }
    }

    impl TreeSource for Fixture {
        fn tree_root(&self) -> WidgetId {
            self.root
        }

        fn tree_children(&self, id: WidgetId) -> Vec<WidgetId> {
            self.names[id].1.clone()
        }

        fn tree_kind(&self, id: WidgetId) -> &'static str {
            if id == self.root { "frame" } else { "button" }
        }

        fn tree_label(&self, id: WidgetId) -> String {
            self.names[id].0.to_string()
        }
    }

    #[test]
    fn test_format_tree_ascii() {
        let fixture = Fixture::new();
        let debug = TreeDebug::with_options(TreeFormatOptions {
            style: TreeStyle::Ascii,
            show_ids: false,
            ..Default::default()
        });

        let output = debug.format_tree(&fixture);
        assert_eq!(output, "(unnamed) (frame)\n+-- Play (button)\n`-- Quit (button)\n");
    }

    #[test]
    fn test_max_depth_limits_output() {
        let fixture = Fixture::new();
        let debug = TreeDebug::with_options(TreeFormatOptions {
            max_depth: Some(0),
            ..TreeFormatOptions::minimal()
        });

        assert_eq!(debug.format_tree(&fixture).lines().count(), 1);
    }

    #[test]
    fn test_perf_span_without_subscriber() {
        let _span = PerfSpan::new("layout");
    }
}
