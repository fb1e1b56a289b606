//! Drag and resize wiring
//!
//! Controllers exist only while the preset is float. They are rebuilt after
//! every layout change, since their geometry is captured at attach time.

use std::rc::Rc;

use berth_dom::{Dom, DomError};
use tracing::warn;

use super::{Command, Widget};
use crate::interaction::{DragConfig, DragController, Interactions, ResetSnap, ResizeController};
use crate::style::{apply_rules, property_name, StylePreset, GHOST_BASE};

/// Properties that place and size the container
const GEOMETRY: [&str; 6] = ["top", "right", "bottom", "left", "width", "height"];

impl<D: Dom> Widget<D> {
    /// Attach controllers for the current preset, logging failures
    pub(super) fn attach_interactions(&mut self) {
        if let Err(err) = self.try_attach_interactions() {
            warn!(error = %err, "cannot attach interactions");
        }
    }

    fn try_attach_interactions(&mut self) -> Result<(), DomError> {
        self.teardown_interactions();
        let state = self.state.get();
        if state.destroyed || state.preset != StylePreset::Float || !self.options.has_interactions() {
            return Ok(());
        }

        let drag = match &self.options.draggable {
            Some(options) => Some(DragController::attach(
                &self.dom,
                &self.container,
                &self.iframe,
                self.drag_config(options.clone(), state.preset),
            )?),
            None => None,
        };

        let resize = match &self.options.resizable {
            Some(options) => {
                let inbox = self.inbox.clone();
                let attached = ResizeController::attach(
                    &self.dom,
                    &self.container,
                    &self.iframe,
                    options.clone(),
                    Some(Rc::new(move || inbox.post(Command::ResizeEnd))),
                );
                match attached {
                    Ok(resize) => Some(resize),
                    Err(err) => {
                        if let Some(drag) = drag {
                            drag.destroy(&self.dom);
                        }
                        return Err(err);
                    }
                }
            }
            None => None,
        };

        self.interactions = Some(Interactions::new(drag, resize));
        Ok(())
    }

    fn drag_config(&self, options: crate::config::DraggableOptions, preset: StylePreset) -> DragConfig<D> {
        let edge_inbox = self.inbox.clone();
        let reset_inbox = self.inbox.clone();
        let store = self.state.clone();
        let geometry = baseline_geometry(preset, &self.options.style_overrides);

        DragConfig {
            options,
            on_edge_snap: Some(Rc::new(move |edge| edge_inbox.post(Command::EdgeSnap(edge)))),
            reset_snap: Some(ResetSnap {
                is_active: Box::new(move || store.get().any_axis_maximized()),
                build_ghost: Box::new(move |dom: &D| {
                    let ghost = dom.create_element("div")?;
                    apply_rules(dom, &ghost, GHOST_BASE);
                    for (property, value) in &geometry {
                        dom.set_style(&ghost, property, value);
                    }
                    Ok(ghost)
                }),
                on_reset: Some(Rc::new(move || reset_inbox.post(Command::ResetSnap))),
            }),
            tasks: self.tasks.clone(),
        }
    }

    /// Remove the controllers, undoing any gesture in progress
    pub(super) fn teardown_interactions(&mut self) {
        if let Some(interactions) = self.interactions.take() {
            interactions.destroy(&self.dom);
        }
    }
}

/// Placement of the preset baseline, including caller overrides
fn baseline_geometry(preset: StylePreset, overrides: &crate::style::StyleMap) -> Vec<(String, String)> {
    let mut geometry: Vec<(String, String)> = preset
        .rules()
        .iter()
        .filter(|(property, _)| GEOMETRY.contains(property))
        .map(|(property, value)| (property.to_string(), value.to_string()))
        .collect();
    for (property, value) in overrides {
        let property = property_name(property);
        if !GEOMETRY.contains(&property.as_str()) {
            continue;
        }
        geometry.retain(|(existing, _)| *existing != property);
        geometry.push((property, value.clone()));
    }
    geometry
}
