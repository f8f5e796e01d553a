use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Document, DragEvent, Event, EventTarget, HtmlElement, Touch, TouchEvent, TouchList,
};
use wordplay_board::drag::{DropTarget, TouchId};
use wordplay_board::GameController;
use wordplay_protocol::{Point, TileId};

use crate::dom::{self, DomView};
use crate::error::DomError;

pub type SharedController = Rc<RefCell<GameController<DomView>>>;

struct Registration {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

/// Owns every installed DOM listener and uninstalls them on drop.
#[derive(Default)]
pub struct Listeners {
    registered: Vec<Registration>,
}

impl Listeners {
    pub fn listen<F>(&mut self, target: &EventTarget, kind: &'static str, handler: F) -> Result<(), DomError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        self.push(target, kind, callback);
        Ok(())
    }

    /// Installs a listener that may call `preventDefault`. Touch listeners are
    /// passive by default in most browsers.
    pub fn listen_active<F>(&mut self, target: &EventTarget, kind: &'static str, handler: F) -> Result<(), DomError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        self.push(target, kind, callback);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.registered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }

    fn push(&mut self, target: &EventTarget, kind: &'static str, callback: Closure<dyn FnMut(Event)>) {
        self.registered.push(Registration {
            target: target.clone(),
            kind,
            callback,
        });
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        for r in &self.registered {
            let _ = r
                .target
                .remove_event_listener_with_callback(r.kind, r.callback.as_ref().unchecked_ref());
        }
    }
}

fn drop_target(element: Option<web_sys::Element>, container_id: &str) -> DropTarget {
    match element {
        Some(el) if dom::is_in_container(&el, container_id) => DropTarget::Container,
        _ => DropTarget::Outside,
    }
}

fn event_drop_target(event: &Event, container_id: &str) -> DropTarget {
    let element = event.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok());
    drop_target(element, container_id)
}

fn first_changed_touch(event: &TouchEvent) -> Option<Touch> {
    event.changed_touches().get(0)
}

/// The entry of `list` belonging to the finger that drives the drag. Other
/// fingers may sit before it in the list.
fn find_touch(list: &TouchList, id: TouchId) -> Option<Touch> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .find(|touch| touch.identifier() == id.0)
}

/// Wires one tile element to the controller, for both pointer and touch input.
pub fn bind_tile(
    listeners: &mut Listeners,
    controller: &SharedController,
    document: &Document,
    container_id: &str,
    tile: TileId,
    element: &HtmlElement,
) -> Result<(), DomError> {
    let target: &EventTarget = element.as_ref();

    // 1. Pointer drag start: the payload is required for the platform to begin a drag
    {
        let controller = controller.clone();
        let element = element.clone();
        listeners.listen(target, "dragstart", move |event: Event| {
            if !controller.borrow_mut().on_drag_start(tile) {
                // No native drag for a tile the controller refused
                event.prevent_default();
                return;
            }
            if let Some(transfer) = event.dyn_ref::<DragEvent>().and_then(|e| e.data_transfer()) {
                let word = element.text_content().unwrap_or_default();
                if let Err(e) = transfer.set_data("text/plain", &word) {
                    tracing::warn!(error = ?e, "could not set drag payload");
                }
            }
        })?;
    }

    {
        let controller = controller.clone();
        listeners.listen(target, "dragend", move |_event: Event| {
            controller.borrow_mut().on_drag_end();
        })?;
    }

    // 2. Touch
    {
        let controller = controller.clone();
        listeners.listen(target, "touchstart", move |event: Event| {
            let Some(touch) = event.dyn_ref::<TouchEvent>().and_then(first_changed_touch) else {
                return;
            };
            controller
                .borrow_mut()
                .on_touch_start(tile, TouchId(touch.identifier()));
        })?;
    }

    {
        let controller = controller.clone();
        listeners.listen_active(target, "touchmove", move |event: Event| {
            let Some(touch_event) = event.dyn_ref::<TouchEvent>() else {
                return;
            };
            let Some(active) = controller.borrow().active_touch() else {
                return;
            };
            let Some(touch) = find_touch(&touch_event.touches(), active) else {
                return;
            };
            let point = Point::new(touch.page_x() as f64, touch.page_y() as f64);
            if controller.borrow_mut().on_touch_move(active, point) {
                // Stop the page from scrolling under the tile
                event.prevent_default();
            }
        })?;
    }

    {
        let controller = controller.clone();
        let document = document.clone();
        let container_id = container_id.to_string();
        listeners.listen(target, "touchend", move |event: Event| {
            let Some(touch_event) = event.dyn_ref::<TouchEvent>() else {
                return;
            };
            let Some(active) = controller.borrow().active_touch() else {
                return;
            };
            // Several fingers can lift in one event
            let Some(touch) = find_touch(&touch_event.changed_touches(), active) else {
                return;
            };
            let under = document.element_from_point(touch.client_x() as f32, touch.client_y() as f32);
            let target = drop_target(under, &container_id);
            controller.borrow_mut().on_touch_end(active, target);
        })?;
    }

    {
        let controller = controller.clone();
        listeners.listen(target, "touchcancel", move |event: Event| {
            let Some(touch_event) = event.dyn_ref::<TouchEvent>() else {
                return;
            };
            let Some(active) = controller.borrow().active_touch() else {
                return;
            };
            if find_touch(&touch_event.changed_touches(), active).is_some() {
                controller.borrow_mut().on_touch_cancel(active);
            }
        })?;
    }

    Ok(())
}

/// Wires the container as the pointer drop target.
pub fn bind_container(
    listeners: &mut Listeners,
    controller: &SharedController,
    container: &EventTarget,
    container_id: &str,
) -> Result<(), DomError> {
    {
        let controller = controller.clone();
        let container_id = container_id.to_string();
        listeners.listen(container, "dragover", move |event: Event| {
            let target = event_drop_target(&event, &container_id);
            if controller.borrow().on_drag_over(target) {
                event.prevent_default();
            }
        })?;
    }

    {
        let controller = controller.clone();
        let container_id = container_id.to_string();
        listeners.listen(container, "drop", move |event: Event| {
            event.prevent_default();
            let target = event_drop_target(&event, &container_id);
            controller.borrow_mut().on_drop(target);
        })?;
    }

    Ok(())
}

/// Wires the check button and the overlay's dismiss control.
pub fn bind_controls(
    listeners: &mut Listeners,
    controller: &SharedController,
    check: &EventTarget,
    close: &EventTarget,
) -> Result<(), DomError> {
    {
        let controller = controller.clone();
        listeners.listen(check, "click", move |_event: Event| {
            controller.borrow_mut().on_check();
        })?;
    }

    {
        let controller = controller.clone();
        listeners.listen(close, "click", move |_event: Event| {
            controller.borrow_mut().on_dismiss();
        })?;
    }

    Ok(())
}
