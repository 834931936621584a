//! Tree dumps for debugging menus.

use trellis_core::{TreeDebug, TreeFormatOptions, TreeSource, WidgetId};

use super::Menu;

impl TreeSource for Menu {
    fn tree_root(&self) -> WidgetId {
        self.tree.root()
    }

    fn tree_children(&self, id: WidgetId) -> Vec<WidgetId> {
        self.tree
            .get(id)
            .map(|w| w.children().to_vec())
            .unwrap_or_default()
    }

    fn tree_kind(&self, id: WidgetId) -> &'static str {
        self.tree.get(id).map_or("missing", |w| w.kind_name())
    }

    fn tree_label(&self, id: WidgetId) -> String {
        match self.tree.get(id) {
            Some(w) if id == self.tree.root() && w.title().is_empty() => self.title().to_string(),
            Some(w) => w.title().to_string(),
            None => String::new(),
        }
    }

    fn tree_detail(&self, id: WidgetId) -> Option<String> {
        let widget = self.tree.get(id)?;
        let rect = widget.rect();
        let mut detail = format!(
            "@({:.0}, {:.0}) {:.0}x{:.0}",
            rect.left(),
            rect.top(),
            rect.width(),
            rect.height()
        );
        if !widget.is_visible() {
            detail.push_str(" hidden");
        }
        if !widget.is_enabled() {
            detail.push_str(" disabled");
        }
        if widget.is_selected() {
            detail.push_str(" selected");
        }
        Some(detail)
    }
}

impl Menu {
    /// The widget tree as indented text, with geometry and flags.
    pub fn tree_string(&self) -> String {
        TreeDebug::with_options(TreeFormatOptions::detailed()).format_tree(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::menu::{ButtonConfig, MenuBuilder, ToggleConfig};

    #[test]
    fn test_tree_string_lists_widgets() {
        let mut menu = MenuBuilder::new(300.0, 200.0).title("Options").build().unwrap();
        menu.add().button("Play", ButtonConfig::new()).unwrap();
        let sound = menu.add().toggle_switch("Sound", ToggleConfig::new()).unwrap();
        menu.hide(sound).unwrap();
        menu.update(&[]);

        let dump = menu.tree_string();
        let lines: Vec<_> = dump.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Options"));
        assert!(lines[1].contains("Play") && lines[1].contains("(button)"));
        assert!(lines[2].contains("Sound") && lines[2].contains("hidden"));
    }
}
