use crate::operation::{Operation, Operations};
use crate::roster::ShapeKind;
use bevy::window::Window;
use bevy_egui::egui::{self, Color32, RichText};
use strum::IntoEnumIterator;

#[derive(Clone, Debug, PartialEq)]
pub struct ToolbarEntry {
    pub label: String,
    pub operation: Operation,
}

/// One button per shape, then the scene reset.
pub fn toolbar_entries() -> Vec<ToolbarEntry> {
    ShapeKind::iter()
        .map(|kind| ToolbarEntry {
            label: format!("Add {}", kind.label()),
            operation: Operation::AddObject(kind),
        })
        .chain(std::iter::once(ToolbarEntry {
            label: "Clear".to_owned(),
            operation: Operation::ClearScene,
        }))
        .collect()
}

fn rich_text(entry: &ToolbarEntry) -> RichText {
    let txt = RichText::new(&entry.label).font(egui::FontId::proportional(16.0));

    match entry.operation {
        Operation::AddObject(_) => txt.color(Color32::LIGHT_GREEN),
        Operation::ClearScene => txt.color(Color32::LIGHT_RED),
    }
}

pub(super) fn ui(ctx: &egui::Context, window: &Window, operations: &mut Operations) {
    let pos = [10.0, window.height() - 60.0];

    egui::Window::new("Object tools")
        .resizable(false)
        .title_bar(false)
        .fixed_pos(pos)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                for entry in toolbar_entries() {
                    if ui.button(rich_text(&entry)).clicked() {
                        operations.push(entry.operation);
                    }
                }
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shape_has_a_button_and_clear_comes_last() {
        let entries = toolbar_entries();

        assert_eq!(entries.len(), ShapeKind::iter().count() + 1);
        for kind in ShapeKind::iter() {
            assert!(entries
                .iter()
                .any(|entry| entry.operation == Operation::AddObject(kind)));
        }
        assert_eq!(entries.last().map(|entry| entry.operation), Some(Operation::ClearScene));
    }
}
