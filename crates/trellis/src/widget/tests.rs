//! Tests for the widget tree, selection and widget state.

#[cfg(test)]
mod tests {
    use trellis_core::{ConfigurationError, MenuError, StateError, Value, WidgetId};
    use trellis_style::{SelectionEffect, WidgetFont};

    use crate::widget::widgets::{Button, DropSelect, Frame, Label, ToggleSwitch};
    use crate::widget::{
        Axis, FocusState, Reaction, SelectionManager, Widget, WidgetBase, WidgetKind, WidgetTree,
    };

    fn make(id: WidgetId, title: &str, kind: WidgetKind) -> Widget {
        Widget::new(
            WidgetBase::new(id, title.to_string(), WidgetFont::default(), SelectionEffect::none()),
            kind,
        )
    }

    fn tree() -> WidgetTree {
        WidgetTree::new(|id| make(id, "", WidgetKind::Frame(Frame::new(Axis::Vertical))))
    }

    fn add(tree: &mut WidgetTree, frame: WidgetId, title: &str, kind: WidgetKind) -> WidgetId {
        let title = title.to_string();
        tree.insert_with(frame, move |id| make(id, &title, kind)).unwrap()
    }

    fn button(tree: &mut WidgetTree, frame: WidgetId, title: &str) -> WidgetId {
        add(tree, frame, title, WidgetKind::Button(Button::new()))
    }

    fn frame(tree: &mut WidgetTree, parent: WidgetId) -> WidgetId {
        add(tree, parent, "", WidgetKind::Frame(Frame::new(Axis::Horizontal)))
    }

    // =========================================================================
    // Tree structure
    // =========================================================================

    #[test]
    fn test_insert_links_both_sides() {
        let mut tree = tree();
        let root = tree.root();
        let a = button(&mut tree, root, "a");
        let b = button(&mut tree, root, "b");

        assert_eq!(tree.parent(a), Some(root));
        assert_eq!(tree.get(root).unwrap().children(), &[a, b]);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_insert_into_non_frame_fails() {
        let mut tree = tree();
        let root = tree.root();
        let a = button(&mut tree, root, "a");
        let err = tree
            .insert_with(a, |id| make(id, "x", WidgetKind::Label(Label::new())))
            .unwrap_err();
        assert_eq!(err, MenuError::Configuration(ConfigurationError::NotAFrame(a)));
    }

    #[test]
    fn test_reparent_rejects_cycles_and_root() {
        let mut tree = tree();
        let root = tree.root();
        let outer = frame(&mut tree, root);
        let inner = frame(&mut tree, outer);

        assert!(matches!(
            tree.reparent(outer, inner),
            Err(MenuError::Configuration(ConfigurationError::CyclicPack { .. }))
        ));
        assert!(matches!(
            tree.reparent(outer, outer),
            Err(MenuError::Configuration(ConfigurationError::CyclicPack { .. }))
        ));
        assert_eq!(
            tree.reparent(root, outer),
            Err(MenuError::Configuration(ConfigurationError::RootFrame))
        );
    }

    #[test]
    fn test_reparent_moves_widget() {
        let mut tree = tree();
        let root = tree.root();
        let f = frame(&mut tree, root);
        let a = button(&mut tree, root, "a");

        assert_eq!(tree.reparent(a, f).unwrap(), root);
        assert_eq!(tree.get(root).unwrap().children(), &[f]);
        assert_eq!(tree.get(f).unwrap().children(), &[a]);
        assert_eq!(tree.ancestors(a), vec![f, root]);
    }

    #[test]
    fn test_remove_subtree() {
        let mut tree = tree();
        let root = tree.root();
        let f = frame(&mut tree, root);
        let a = button(&mut tree, f, "a");
        let b = button(&mut tree, f, "b");
        let keep = button(&mut tree, root, "keep");

        let removed = tree.remove_subtree(f).unwrap();
        assert_eq!(removed, vec![f, a, b]);
        assert!(!tree.contains(a));
        assert_eq!(tree.get(root).unwrap().children(), &[keep]);

        let err = tree.remove_subtree(a).unwrap_err();
        assert_eq!(err, MenuError::State(StateError::UnknownWidget(a)));
    }

    #[test]
    fn test_accessors_on_root_and_stale_ids() {
        let mut tree = tree();
        let root = tree.root();
        assert!(!tree.is_empty());
        assert_eq!(tree.parent(root), None);

        let a = button(&mut tree, root, "a");
        let widget = tree.get(a).unwrap();
        assert_eq!((widget.id(), widget.title()), (a, "a"));
        assert_eq!(widget.base().id(), widget.id());
        assert!(widget.is_visible() && widget.is_enabled() && !widget.is_selected());

        tree.remove_subtree(a).unwrap();
        assert!(!tree.contains(a));
        assert!(tree.get_mut(a).is_none());
        assert_eq!(tree.parent(a), None);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_hidden_frame_hides_descendants() {
        let mut tree = tree();
        let root = tree.root();
        let f = frame(&mut tree, root);
        let a = button(&mut tree, f, "a");

        assert!(tree.is_shown(a));
        tree.get_mut(f).unwrap().base.visible = false;
        assert!(!tree.is_shown(a));
        // The widget's own flag is untouched
        assert!(tree.get(a).unwrap().is_visible());
    }

    // =========================================================================
    // Selection
    // =========================================================================

    #[test]
    fn test_selection_order_is_depth_first() {
        let mut tree = tree();
        let root = tree.root();
        let a = button(&mut tree, root, "a");
        let f = frame(&mut tree, root);
        let b = button(&mut tree, f, "b");
        add(&mut tree, f, "label", WidgetKind::Label(Label::new()));
        let c = button(&mut tree, root, "c");

        assert_eq!(SelectionManager::selection_order(&tree, root), vec![a, b, c]);
    }

    #[test]
    fn test_selection_skips_hidden_and_disabled() {
        let mut tree = tree();
        let root = tree.root();
        let a = button(&mut tree, root, "a");
        let f = frame(&mut tree, root);
        button(&mut tree, f, "hidden by frame");
        let disabled = button(&mut tree, root, "disabled");
        let d = button(&mut tree, root, "d");

        tree.get_mut(f).unwrap().base.visible = false;
        tree.get_mut(disabled).unwrap().base.enabled = false;
        assert_eq!(SelectionManager::selection_order(&tree, root), vec![a, d]);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut tree = tree();
        let root = tree.root();
        let ids: Vec<_> = (0..3).map(|i| button(&mut tree, root, &format!("b{i}"))).collect();
        let mut selection = SelectionManager::new();

        assert_eq!(selection.state(), FocusState::NoFocus);
        assert_eq!(selection.select_previous(&mut tree, root).unwrap(), ids[2]);
        assert_eq!(selection.select_next(&mut tree, root).unwrap(), ids[0]);
        assert_eq!(selection.select_previous(&mut tree, root).unwrap(), ids[2]);
        assert!(tree.get(ids[2]).unwrap().is_selected());
        assert!(!tree.get(ids[0]).unwrap().is_selected());
    }

    #[test]
    fn test_navigation_without_candidates() {
        let mut tree = tree();
        let root = tree.root();
        add(&mut tree, root, "text", WidgetKind::Label(Label::new()));
        let mut selection = SelectionManager::new();

        let err = selection.select_next(&mut tree, root).unwrap_err();
        assert_eq!(err, MenuError::State(StateError::NoSelectableWidget));
        assert_eq!(selection.state(), FocusState::NoFocus);
    }

    #[test]
    fn test_select_rejects_labels() {
        let mut tree = tree();
        let root = tree.root();
        let label = add(&mut tree, root, "text", WidgetKind::Label(Label::new()));
        let mut selection = SelectionManager::new();

        let err = selection.select(&mut tree, root, label).unwrap_err();
        assert_eq!(err, MenuError::State(StateError::NotSelectable(label)));
    }

    #[test]
    fn test_refocus_moves_to_next_candidate() {
        let mut tree = tree();
        let root = tree.root();
        let ids: Vec<_> = (0..3).map(|i| button(&mut tree, root, &format!("b{i}"))).collect();
        let mut selection = SelectionManager::new();
        selection.select(&mut tree, root, ids[1]).unwrap();

        let before = SelectionManager::selection_order(&tree, root);
        tree.get_mut(ids[1]).unwrap().base.visible = false;
        assert_eq!(selection.refocus(&mut tree, root, &before), Some(ids[2]));

        let before = SelectionManager::selection_order(&tree, root);
        for id in &ids {
            tree.get_mut(*id).unwrap().base.enabled = false;
        }
        assert_eq!(selection.refocus(&mut tree, root, &before), None);
        assert_eq!(selection.state(), FocusState::NoFocus);
    }

    #[test]
    fn test_blur_closes_dropdown() {
        let mut tree = tree();
        let root = tree.root();
        let items = vec![("a".to_string(), Value::Int(1)), ("b".to_string(), Value::Int(2))];
        let drop = add(
            &mut tree,
            root,
            "drop",
            WidgetKind::DropSelect(DropSelect::new(items, None).unwrap()),
        );
        let other = button(&mut tree, root, "other");
        let mut selection = SelectionManager::new();
        selection.select(&mut tree, root, drop).unwrap();

        tree.get_mut(drop).unwrap().activate();
        assert!(tree.get(drop).unwrap().captures_input());

        selection.select(&mut tree, root, other).unwrap();
        assert!(!tree.get(drop).unwrap().captures_input());
    }

    // =========================================================================
    // Widget state
    // =========================================================================

    #[test]
    fn test_set_value_checks_kind() {
        let mut tree = tree();
        let root = tree.root();
        let toggle = add(&mut tree, root, "t", WidgetKind::ToggleSwitch(ToggleSwitch::new(false)));
        let widget = tree.get_mut(toggle).unwrap();

        widget.set_value(&Value::Bool(true)).unwrap();
        assert_eq!(widget.value(), Value::Bool(true));

        let err = widget.set_value(&Value::from("yes")).unwrap_err();
        assert!(matches!(err, MenuError::State(StateError::RejectedValue { .. })));
        assert_eq!(widget.value(), Value::Bool(true));
    }

    #[test]
    fn test_toggle_reports_change_only_on_flip() {
        let mut tree = tree();
        let root = tree.root();
        let toggle = add(&mut tree, root, "t", WidgetKind::ToggleSwitch(ToggleSwitch::new(false)));
        let widget = tree.get_mut(toggle).unwrap();

        assert_eq!(widget.activate(), Reaction::Changed);
        assert_eq!(widget.handle_input(&crate::widget::WidgetInput::Right), Reaction::Consumed);
        assert_eq!(widget.handle_input(&crate::widget::WidgetInput::Left), Reaction::Changed);
        assert_eq!(widget.value(), Value::Bool(false));
    }

    #[test]
    fn test_can_focus_needs_visible_enabled_selectable() {
        let mut tree = tree();
        let root = tree.root();
        let b = button(&mut tree, root, "b");
        let l = add(&mut tree, root, "l", WidgetKind::Label(Label::new()));

        assert!(tree.get(b).unwrap().can_focus());
        assert!(!tree.get(l).unwrap().can_focus());
        tree.get_mut(b).unwrap().base.enabled = false;
        assert!(!tree.get(b).unwrap().can_focus());
        assert!(!tree.get(root).unwrap().is_selectable());
    }
}
