use crate::drag::ActiveDrag;
use crate::roster::{ObjectRoster, SceneObject, ShapeKind};
use bevy_egui::egui;
use strum::IntoEnumIterator;

const TITLE: &str = "Grab & drop sandbox";
const HINTS: &str = r#"Click and drag an object to move it.
Release to drop it.
Drag empty space to orbit, scroll to zoom."#;

pub(super) fn ui(ctx: &egui::Context, roster: &ObjectRoster, active_drag: &ActiveDrag) {
    egui::Window::new(TITLE)
        .resizable(false)
        .collapsible(true)
        .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
        .show(ctx, |ui| {
            ui.label(HINTS);
            ui.separator();
            ui.label(stats_string(roster.iter(), active_drag.session().is_some()));
        });
}

fn stats_string<'a>(objects: impl Iterator<Item = &'a SceneObject>, dragging: bool) -> String {
    let mut counts = [0usize; 3];
    for object in objects {
        counts[object.kind as usize] += 1;
    }

    let per_kind: Vec<_> = ShapeKind::iter()
        .map(|kind| format!("{}: {}", kind.label(), counts[kind as usize]))
        .collect();

    format!(
        "Objects: {} ({})\nDragging: {}",
        counts.iter().sum::<usize>(),
        per_kind.join(", "),
        if dragging { "yes" } else { "no" }
    )
}
