//! Reading redeem triggers out of the DOM.
use rewards_core::RewardAttributes;
use rewards_core::constants::{
    ATTR_REWARD_COLOR, ATTR_REWARD_ID, ATTR_REWARD_NAME, ATTR_REWARD_POINTS,
};
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, HtmlButtonElement};

/// Find the trigger a click landed on.
///
/// Clicks on an icon or label nested inside the button still count, so the
/// search walks up from the event target to the nearest element carrying
/// `trigger_class`.
#[must_use]
pub fn find_trigger(target: Option<EventTarget>, trigger_class: &str) -> Option<Element> {
    let element = target?.dyn_into::<Element>().ok()?;
    element
        .closest(&format!(".{trigger_class}"))
        .ok()
        .flatten()
}

#[must_use]
pub fn is_disabled(trigger: &Element) -> bool {
    trigger
        .dyn_ref::<HtmlButtonElement>()
        .map_or_else(|| trigger.has_attribute("disabled"), HtmlButtonElement::disabled)
}

#[must_use]
pub fn read_attributes(trigger: &Element) -> RewardAttributes {
    RewardAttributes {
        id: trigger.get_attribute(ATTR_REWARD_ID),
        name: trigger.get_attribute(ATTR_REWARD_NAME),
        points: trigger.get_attribute(ATTR_REWARD_POINTS),
        color: trigger.get_attribute(ATTR_REWARD_COLOR),
    }
}
