//! Rechtes Detail-Panel: ein Datensatz je selektiertem Actor.

use crate::app::{AppIntent, AppState};
use crate::core::{ActorRef, DataNode};

/// Rendert die Datensätze aller selektierten Actors.
pub fn render_data_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("actor_data")
        .resizable(true)
        .default_width(360.0)
        .show(ctx, |ui| {
            ui.heading("Actor Data");
            ui.separator();

            let records = state.selection.records();
            if records.is_empty() {
                ui.label("Double-click an actor to inspect it");
                return;
            }

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for record in &records {
                        let mut path = Vec::new();
                        render_data_node(
                            ui,
                            &record.actor,
                            &record.root,
                            &record.actor.path(),
                            &mut path,
                            &mut events,
                        );
                        ui.separator();
                    }
                });
        });

    events
}

/// Zeichnet einen Knoten; `path` ist der Index-Pfad ab der Wurzel.
fn render_data_node(
    ui: &mut egui::Ui,
    actor: &ActorRef,
    node: &DataNode,
    label: &str,
    path: &mut Vec<usize>,
    events: &mut Vec<AppIntent>,
) {
    if node.children.is_empty() {
        let response = ui.add(
            egui::Label::new(node_text(label, &node.value)).sense(egui::Sense::click()),
        );
        if response.double_clicked() {
            events.push(AppIntent::DataNodeActivated {
                actor: actor.clone(),
                path: path.clone(),
            });
        }
        return;
    }

    let header = egui::CollapsingHeader::new(node_text(label, &node.value))
        .id_salt((actor, path.as_slice()))
        .default_open(path.is_empty())
        .show(ui, |ui| {
            for (index, child) in node.children.iter().enumerate() {
                path.push(index);
                render_data_node(ui, actor, child, &child.label, path, events);
                path.pop();
            }
        });

    if header.header_response.double_clicked() {
        events.push(AppIntent::DataNodeActivated {
            actor: actor.clone(),
            path: path.clone(),
        });
    }
}

fn node_text(label: &str, value: &str) -> String {
    match (label.is_empty(), value.is_empty()) {
        (_, true) => label.to_string(),
        (true, false) => value.to_string(),
        (false, false) => format!("{}: {}", label, value),
    }
}

#[cfg(test)]
mod tests {
    use super::node_text;

    #[test]
    fn node_text_joins_label_and_value() {
        assert_eq!(node_text("vPos", "[1, 2]"), "vPos: [1, 2]");
        assert_eq!(node_text("", "Default"), "Default");
        assert_eq!(node_text("Components", ""), "Components");
    }
}
