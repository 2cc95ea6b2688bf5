//! [`RewardsSurface`] over the live document.
//!
//! Elements are looked up by id on every call, so markup swapped in after
//! `init` is picked up and markup removed later degrades to skipped writes.
use crate::dom;
use rewards_core::{RewardsSurface, Slot, StyleProp, SurfaceError, SurfaceResult};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement};

#[derive(Debug, Clone)]
pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    #[must_use]
    pub const fn new(document: Document) -> Self {
        Self { document }
    }

    fn element(&self, slot: Slot) -> SurfaceResult<Element> {
        dom::slot_element(&self.document, slot).ok_or(SurfaceError::Missing(slot))
    }

    fn html_element(&self, slot: Slot) -> SurfaceResult<HtmlElement> {
        self.element(slot)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| rejected_kind(slot, "not an HTML element"))
    }
}

fn rejected(slot: Slot, err: &JsValue) -> SurfaceError {
    SurfaceError::Rejected {
        slot,
        message: dom::describe_js_error(err),
    }
}

fn rejected_kind(slot: Slot, message: &str) -> SurfaceError {
    SurfaceError::Rejected {
        slot,
        message: message.to_string(),
    }
}

impl RewardsSurface for DomSurface {
    fn read_value(&self, slot: Slot) -> SurfaceResult<String> {
        let element = self.element(slot)?;
        Ok(match element.dyn_ref::<HtmlInputElement>() {
            Some(input) => input.value(),
            None => element.get_attribute("value").unwrap_or_default(),
        })
    }

    fn write_value(&mut self, slot: Slot, value: &str) -> SurfaceResult<()> {
        let element = self.element(slot)?;
        match element.dyn_ref::<HtmlInputElement>() {
            Some(input) => {
                input.set_value(value);
                Ok(())
            }
            None => element
                .set_attribute("value", value)
                .map_err(|err| rejected(slot, &err)),
        }
    }

    fn set_text(&mut self, slot: Slot, text: &str) -> SurfaceResult<()> {
        self.element(slot)?.set_text_content(Some(text));
        Ok(())
    }

    fn set_class_name(&mut self, slot: Slot, class_name: &str) -> SurfaceResult<()> {
        self.element(slot)?.set_class_name(class_name);
        Ok(())
    }

    fn set_form_action(&mut self, slot: Slot, action: &str) -> SurfaceResult<()> {
        let form = self
            .element(slot)?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| rejected_kind(slot, "not a form"))?;
        form.set_action(action);
        Ok(())
    }

    fn set_style(&mut self, slot: Slot, prop: StyleProp, value: &str) -> SurfaceResult<()> {
        self.html_element(slot)?
            .style()
            .set_property(prop.css_name(), value)
            .map_err(|err| rejected(slot, &err))
    }

    fn set_disabled(&mut self, slot: Slot, disabled: bool) -> SurfaceResult<()> {
        let element = self.element(slot)?;
        if let Some(button) = element.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
            return Ok(());
        }
        element
            .toggle_attribute_with_force("disabled", disabled)
            .map(|_| ())
            .map_err(|err| rejected(slot, &err))
    }

    fn add_class(&mut self, slot: Slot, class: &str) -> SurfaceResult<()> {
        self.element(slot)?
            .class_list()
            .add_1(class)
            .map_err(|err| rejected(slot, &err))
    }

    fn remove_class(&mut self, slot: Slot, class: &str) -> SurfaceResult<()> {
        self.element(slot)?
            .class_list()
            .remove_1(class)
            .map_err(|err| rejected(slot, &err))
    }

    fn has_class(&self, slot: Slot, class: &str) -> bool {
        dom::slot_element(&self.document, slot)
            .is_some_and(|element| element.class_list().contains(class))
    }
}
