use super::*;

pub(super) fn install_dom_ready_handler() {
    let Some(document) = dom::document() else {
        return;
    };
    DOM_READY_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
            boot();
        }));
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", callback.as_ref().unchecked_ref());
        *slot.borrow_mut() = Some(callback);
    });
}

/// Binds a click handler per target whose toggle and dropdown both exist.
/// Returns the number of bound toggles.
pub(super) fn install_toggle_handlers(targets: &[PanelTarget]) -> usize {
    let Some(document) = dom::document() else {
        return 0;
    };
    TOGGLE_CLICK_HANDLERS.with(|slot| {
        let mut handlers = slot.borrow_mut();
        if !handlers.is_empty() {
            return handlers.len();
        }
        for target in targets {
            let Some(toggle) = document.get_element_by_id(&target.toggle_id) else {
                debug!(target = %target.name, toggle_id = %target.toggle_id, "notification toggle absent");
                continue;
            };
            if document.get_element_by_id(&target.dropdown_id).is_none() {
                debug!(target = %target.name, dropdown_id = %target.dropdown_id, "notification dropdown absent");
                continue;
            }

            let target = target.clone();
            let callback =
                Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |event: web_sys::Event| {
                    // Keeps the document-level outside-click handler from
                    // seeing the toggle click.
                    event.stop_propagation();
                    schedule_toggle(target.clone());
                }));
            if toggle
                .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
                .is_ok()
            {
                handlers.push(callback);
            }
        }
        handlers.len()
    })
}

pub(super) fn install_outside_click_handler(targets: &[PanelTarget]) {
    let Some(document) = dom::document() else {
        return;
    };
    OUTSIDE_CLICK_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let targets = targets.to_vec();
        let callback =
            Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |event: web_sys::Event| {
                dismiss_dropdowns_outside(&event, &targets);
            }));
        let _ = document.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
        *slot.borrow_mut() = Some(callback);
    });
}

fn dismiss_dropdowns_outside(event: &web_sys::Event, targets: &[PanelTarget]) {
    let Some(panel) = current_panel() else {
        return;
    };
    let Some(document) = dom::document() else {
        return;
    };
    let Some(clicked) = event
        .target()
        .and_then(|target| target.dyn_into::<Node>().ok())
    else {
        return;
    };

    for dropdown_id in unique_dropdown_ids(targets) {
        let Some(dropdown) = document.get_element_by_id(dropdown_id) else {
            continue;
        };
        if dropdown.contains(Some(&clicked)) {
            continue;
        }
        let on_toggle = toggles_for(targets, dropdown_id)
            .filter_map(|toggle_id| document.get_element_by_id(toggle_id))
            .any(|toggle| toggle.contains(Some(&clicked)));
        if on_toggle {
            continue;
        }
        panel.dismiss_dropdown(dropdown_id);
    }
}

pub(super) fn seed_dropdowns_from_dom(panel: &WebPanel, targets: &[PanelTarget]) {
    let Some(document) = dom::document() else {
        return;
    };
    for dropdown_id in unique_dropdown_ids(targets) {
        if let Some(dropdown) = document.get_element_by_id(dropdown_id) {
            let state = if dom::is_hidden(&dropdown) {
                DropdownState::Hidden
            } else {
                DropdownState::Visible
            };
            panel.seed_dropdown(dropdown_id, state);
        }
    }
}

pub(super) fn install_attachment_preview_handler() {
    let Some(input) = dom::document()
        .and_then(|document| document.get_element_by_id(ATTACHMENT_INPUT_ID))
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };
    ATTACHMENT_CHANGE_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let handler_input = input.clone();
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
            if let Err(error) = dom::apply_attachment_preview(&handler_input) {
                warn!(%error, "failed to preview attachment");
            }
        }));
        let _ = input.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref());
        *slot.borrow_mut() = Some(callback);
    });
}
