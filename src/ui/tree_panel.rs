//! Linkes Panel mit den beiden Actor-Listen (Actors, Subareas).

use crate::app::{AppIntent, AppState, TreeKind};
use crate::core::{ActorTree, CheckState, NodeId};

const EXPANDER_WIDTH: f32 = 18.0;

/// Panel-Zustand über Frames hinweg.
#[derive(Debug, Default)]
pub struct TreePanelState {
    /// Knoten unter dem Cursor im letzten Frame
    hovered: Option<(TreeKind, NodeId)>,
}

struct TreeRows<'a> {
    tree: &'a ActorTree,
    kind: TreeKind,
    events: Vec<AppIntent>,
    hovered: Option<NodeId>,
}

/// Rendert die Actor-Listen und gibt AppIntents zurück.
pub fn render_tree_panel(
    ctx: &egui::Context,
    state: &AppState,
    panel: &mut TreePanelState,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let mut hovered_now = None;

    egui::SidePanel::left("actor_tree")
        .resizable(true)
        .default_width(320.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                for kind in [TreeKind::Entities, TreeKind::Subareas] {
                    if ui
                        .selectable_label(state.ui.active_tree == kind, kind.label())
                        .clicked()
                    {
                        events.push(AppIntent::TreeTabSelected { tree: kind });
                    }
                }
            });
            ui.separator();

            let Some(scenario) = state.scenario() else {
                ui.label("No scenario loaded");
                return;
            };

            let kind = state.ui.active_tree;
            let mut rows = TreeRows {
                tree: scenario.tree(kind),
                kind,
                events: Vec::new(),
                hovered: None,
            };
            egui::ScrollArea::both()
                .auto_shrink([false, false])
                .show(ui, |ui| render_node(ui, &mut rows, ActorTree::ROOT));

            events.append(&mut rows.events);
            hovered_now = rows.hovered.map(|node| (kind, node));
        });

    events.extend(hover_transition(panel.hovered, hovered_now));
    panel.hovered = hovered_now;
    events
}

fn render_node(ui: &mut egui::Ui, rows: &mut TreeRows, id: NodeId) {
    let tree = rows.tree;
    let Some(node) = tree.node(id) else {
        return;
    };

    ui.horizontal(|ui| {
        if node.is_container() && !node.children.is_empty() {
            let icon = if node.expanded { "⏷" } else { "⏵" };
            if ui.small_button(icon).clicked() {
                rows.events.push(AppIntent::TreeNodeExpanded {
                    tree: rows.kind,
                    node: id,
                    expanded: !node.expanded,
                });
            }
        } else {
            ui.add_space(EXPANDER_WIDTH);
        }

        let check_state = tree.check_state(id);
        let mut checked = check_state == CheckState::Checked;
        let checkbox = egui::Checkbox::without_text(&mut checked)
            .indeterminate(check_state == CheckState::Indeterminate);
        if ui.add(checkbox).changed() {
            rows.events.push(AppIntent::TreeCheckToggled {
                tree: rows.kind,
                node: id,
                checked,
            });
        }

        let mut text = egui::RichText::new(&node.label);
        if node.leaf().is_some_and(|leaf| leaf.is_selected()) {
            text = text.strong();
        }
        if node.camera().is_some_and(|camera| camera.is_active()) {
            text = text.italics();
        }

        let response = ui.add(egui::Label::new(text).sense(egui::Sense::click()));
        if response.double_clicked() {
            rows.events.push(AppIntent::TreeNodeActivated {
                tree: rows.kind,
                node: id,
            });
        }
        if response.hovered() && node.leaf().is_some() {
            rows.hovered = Some(id);
        }
    });

    if node.expanded {
        ui.indent((rows.kind, id), |ui| {
            for &child in &node.children {
                render_node(ui, rows, child);
            }
        });
    }
}

/// Hover-Wechsel zwischen zwei Frames als Intents.
fn hover_transition(
    previous: Option<(TreeKind, NodeId)>,
    current: Option<(TreeKind, NodeId)>,
) -> Vec<AppIntent> {
    if previous == current {
        return Vec::new();
    }

    let mut events = Vec::new();
    if let Some((tree, node)) = previous {
        events.push(AppIntent::TreeNodeHovered {
            tree,
            node,
            hovered: false,
        });
    }
    if let Some((tree, node)) = current {
        events.push(AppIntent::TreeNodeHovered {
            tree,
            node,
            hovered: true,
        });
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_hover_emits_nothing() {
        let node = Some((TreeKind::Entities, 4));

        assert!(hover_transition(node, node).is_empty());
        assert!(hover_transition(None, None).is_empty());
    }

    #[test]
    fn hover_move_leaves_old_node_first() {
        let events = hover_transition(
            Some((TreeKind::Entities, 4)),
            Some((TreeKind::Subareas, 7)),
        );

        assert_eq!(
            events,
            vec![
                AppIntent::TreeNodeHovered {
                    tree: TreeKind::Entities,
                    node: 4,
                    hovered: false,
                },
                AppIntent::TreeNodeHovered {
                    tree: TreeKind::Subareas,
                    node: 7,
                    hovered: true,
                },
            ]
        );
    }

    #[test]
    fn leaving_the_panel_clears_hover() {
        let events = hover_transition(Some((TreeKind::Entities, 2)), None);

        assert_eq!(
            events,
            vec![AppIntent::TreeNodeHovered {
                tree: TreeKind::Entities,
                node: 2,
                hovered: false,
            }]
        );
    }
}
