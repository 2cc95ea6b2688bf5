//! DOM event wiring for the redeem and success modals.
//!
//! Every listener holds its closure in a [`Binding`]; dropping the
//! [`ListenerSet`] detaches them all, so nothing is leaked with `forget`.
use crate::dom;
use crate::surface::DomSurface;
use crate::trigger;
use rewards_core::constants::ESCAPE_KEY;
use rewards_core::{Dismissal, ModalKind, QuantityStep, RewardsController, Slot};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, EventTarget, KeyboardEvent};

pub type SharedController = Rc<RefCell<RewardsController<DomSurface>>>;

struct Binding {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Binding {
    fn detach(&self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

#[derive(Default)]
pub struct ListenerSet {
    bindings: Vec<Binding>,
}

impl ListenerSet {
    fn listen<F>(&mut self, target: &EventTarget, event: &'static str, handler: F) -> Result<(), JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        self.bindings.push(Binding {
            target: target.clone(),
            event,
            closure,
        });
        Ok(())
    }

    /// Listen on the element behind `slot`, skipping quietly when it is absent.
    fn listen_slot<F>(
        &mut self,
        document: &Document,
        slot: Slot,
        event: &'static str,
        handler: F,
    ) -> Result<(), JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        match dom::slot_element(document, slot) {
            Some(element) => self.listen(&element, event, handler),
            None => {
                log::debug!("no #{} on page; {event} listener skipped", slot.element_id());
                Ok(())
            }
        }
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        for binding in &self.bindings {
            binding.detach();
        }
    }
}

/// Run `action` against the controller unless another handler already holds it.
fn with_controller(controller: &SharedController, action: impl FnOnce(&mut RewardsController<DomSurface>)) {
    match controller.try_borrow_mut() {
        Ok(mut ctl) => action(&mut ctl),
        Err(_) => log::debug!("controller busy; event dropped"),
    }
}

/// Register every listener the redeem page needs.
///
/// # Errors
///
/// Returns the browser's error if a listener cannot be attached.
pub fn install(document: &Document, controller: &SharedController) -> Result<ListenerSet, JsValue> {
    let mut set = ListenerSet::default();
    install_trigger(&mut set, document, controller)?;
    install_stepper(&mut set, document, controller)?;
    install_modal_clicks(&mut set, document, controller, ModalKind::Redeem)?;
    install_success_clicks(&mut set, document, controller)?;
    install_escape(&mut set, document, controller)?;
    log::debug!("rewards listeners installed: {}", set.bindings.len());
    Ok(set)
}

fn install_trigger(
    set: &mut ListenerSet,
    document: &Document,
    controller: &SharedController,
) -> Result<(), JsValue> {
    let ctl = Rc::clone(controller);
    let trigger_class = controller.borrow().config().trigger_class.clone();
    set.listen(document, "click", move |event: Event| {
        let Some(element) = trigger::find_trigger(event.target(), &trigger_class) else {
            return;
        };
        if trigger::is_disabled(&element) {
            return;
        }
        let attributes = trigger::read_attributes(&element);
        with_controller(&ctl, |ctl| {
            // Rejections are logged by the controller.
            let _ = ctl.handle_trigger(&attributes);
        });
    })
}

fn install_stepper(
    set: &mut ListenerSet,
    document: &Document,
    controller: &SharedController,
) -> Result<(), JsValue> {
    for (slot, step) in [
        (Slot::QuantityIncrease, QuantityStep::Increase),
        (Slot::QuantityDecrease, QuantityStep::Decrease),
    ] {
        let ctl = Rc::clone(controller);
        set.listen_slot(document, slot, "click", move |_event: Event| {
            with_controller(&ctl, |ctl| {
                let _ = ctl.step_quantity(step);
            });
        })?;
    }

    let ctl = Rc::clone(controller);
    set.listen_slot(document, Slot::QuantityInput, "input", move |_event: Event| {
        with_controller(&ctl, |ctl| {
            let _ = ctl.quantity_input_changed();
        });
    })
}

/// Buttons and backdrop clicks shared by both modals.
fn install_modal_clicks(
    set: &mut ListenerSet,
    document: &Document,
    controller: &SharedController,
    kind: ModalKind,
) -> Result<(), JsValue> {
    for &(slot, dismissal) in kind.dismiss_buttons() {
        let ctl = Rc::clone(controller);
        set.listen_slot(document, slot, "click", move |_event: Event| {
            with_controller(&ctl, |ctl| {
                ctl.dismiss(kind, dismissal);
            });
        })?;
    }

    let ctl = Rc::clone(controller);
    set.listen_slot(document, kind.container(), "click", move |event: Event| {
        let on_backdrop = event.target() == event.current_target();
        with_controller(&ctl, |ctl| {
            ctl.dismiss(kind, Dismissal::Overlay { on_backdrop });
        });
    })
}

/// The success modal is optional; without it none of its click listeners are added.
fn install_success_clicks(
    set: &mut ListenerSet,
    document: &Document,
    controller: &SharedController,
) -> Result<(), JsValue> {
    if dom::slot_element(document, Slot::SuccessModal).is_none() {
        return Ok(());
    }
    install_modal_clicks(set, document, controller, ModalKind::Success)
}

fn install_escape(
    set: &mut ListenerSet,
    document: &Document,
    controller: &SharedController,
) -> Result<(), JsValue> {
    let ctl = Rc::clone(controller);
    set.listen(document, "keydown", move |event: Event| {
        let is_escape = event
            .dyn_ref::<KeyboardEvent>()
            .is_some_and(|key| key.key() == ESCAPE_KEY);
        if is_escape {
            with_controller(&ctl, |ctl| {
                let state = ctl.handle_escape();
                log::debug!("escape pressed; modals now {state:?}");
            });
        }
    })
}
