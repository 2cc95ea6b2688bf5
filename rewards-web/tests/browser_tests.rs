#![cfg(target_arch = "wasm32")]

use rewards_web::RewardsManager;
use rewards_web::dom;
use rewards_web::markup::{RewardsPage, RewardsPageProps};
use rewards_web::rewards::{RewardCatalog, RewardDescriptor, Slot};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Element, Event, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    KeyboardEvent, KeyboardEventInit,
};
use yew::LocalServerRenderer;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

async fn mount_page(markup_points: i64) -> Document {
    RewardsManager::teardown();
    let html = LocalServerRenderer::<RewardsPage>::with_props(RewardsPageProps {
        rewards: RewardCatalog::sample().rewards().to_vec(),
        user_points: markup_points,
        csrf_token: None,
        success_message: Some("Enjoy your reward".into()),
    })
    .render()
    .await;

    let doc = dom::document().expect("document");
    let root = match doc.get_element_by_id("app") {
        Some(root) => root,
        None => {
            let root = doc.create_element("div").expect("create app root");
            root.set_id("app");
            doc.body()
                .expect("document body")
                .append_child(&root)
                .expect("append app root");
            root
        }
    };
    root.set_inner_html(&html);
    doc
}

fn slot(doc: &Document, slot: Slot) -> Element {
    dom::slot_element(doc, slot).unwrap_or_else(|| panic!("#{} missing", slot.element_id()))
}

fn click(element: &Element) {
    element
        .dyn_ref::<HtmlElement>()
        .expect("html element")
        .click();
}

fn click_slot(doc: &Document, target: Slot) {
    click(&slot(doc, target));
}

fn click_trigger(doc: &Document, reward_id: &str) {
    let trigger = doc
        .query_selector(&format!("button[data-reward-id='{reward_id}']"))
        .expect("query trigger")
        .expect("trigger exists");
    click(&trigger);
}

fn press_escape(doc: &Document) {
    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
        .expect("keyboard event");
    doc.dispatch_event(&event).expect("dispatch keydown");
}

fn text(doc: &Document, target: Slot) -> String {
    slot(doc, target).text_content().unwrap_or_default()
}

fn display(doc: &Document, target: Slot) -> String {
    slot(doc, target)
        .dyn_into::<HtmlElement>()
        .expect("html element")
        .style()
        .get_property_value("display")
        .unwrap_or_default()
}

fn confirm_disabled(doc: &Document) -> bool {
    slot(doc, Slot::ConfirmButton)
        .dyn_into::<HtmlButtonElement>()
        .expect("confirm button")
        .disabled()
}

fn is_active(doc: &Document, target: Slot) -> bool {
    slot(doc, target).class_list().contains("active")
}

#[wasm_bindgen_test]
async fn trigger_opens_and_stepper_prices_quantity() {
    let doc = mount_page(500).await;
    assert_eq!(RewardsManager::init(JsValue::from_f64(500.0)), Ok(true));

    click_trigger(&doc, "3");
    assert!(is_active(&doc, Slot::RedeemModal));
    assert_eq!(text(&doc, Slot::RewardName), "Library Privilege Pass");
    assert_eq!(text(&doc, Slot::PointsPerItem), "-150 pts");
    assert!(slot(&doc, Slot::HeaderColor).class_list().contains("reward-purple"));
    let action = slot(&doc, Slot::RedeemForm)
        .dyn_into::<HtmlFormElement>()
        .expect("form")
        .action();
    assert!(action.ends_with("/redeem/3/"), "{action}");

    click_slot(&doc, Slot::QuantityIncrease);
    click_slot(&doc, Slot::QuantityIncrease);
    assert_eq!(text(&doc, Slot::RequiredPoints), "-450 pts");
    assert_eq!(text(&doc, Slot::AfterPoints), "50 pts");
    assert_eq!(display(&doc, Slot::ReadyBadge), "flex");
    assert_eq!(display(&doc, Slot::InsufficientBadge), "none");
    assert!(!confirm_disabled(&doc));

    click_slot(&doc, Slot::QuantityIncrease);
    assert_eq!(text(&doc, Slot::RequiredPoints), "-600 pts");
    assert_eq!(text(&doc, Slot::AfterPoints), "-100 pts");
    assert_eq!(display(&doc, Slot::ReadyBadge), "none");
    assert_eq!(display(&doc, Slot::InsufficientBadge), "flex");
    assert!(confirm_disabled(&doc));

    let hidden = slot(&doc, Slot::QuantityHidden)
        .dyn_into::<HtmlInputElement>()
        .expect("hidden input");
    assert_eq!(hidden.value(), "4");
    RewardsManager::teardown();
}

#[wasm_bindgen_test]
async fn typing_a_quantity_recalculates() {
    let doc = mount_page(500).await;
    RewardsManager::init(JsValue::from_f64(500.0)).expect("init");
    click_trigger(&doc, "1");

    let input = slot(&doc, Slot::QuantityInput)
        .dyn_into::<HtmlInputElement>()
        .expect("quantity input");
    input.set_value("5");
    input
        .dispatch_event(&Event::new("input").expect("input event"))
        .expect("dispatch input");
    assert_eq!(text(&doc, Slot::RequiredPoints), "-500 pts");
    assert_eq!(text(&doc, Slot::AfterPoints), "0 pts");
    assert!(!confirm_disabled(&doc));

    click_slot(&doc, Slot::QuantityDecrease);
    click_slot(&doc, Slot::QuantityDecrease);
    click_slot(&doc, Slot::QuantityDecrease);
    click_slot(&doc, Slot::QuantityDecrease);
    click_slot(&doc, Slot::QuantityDecrease);
    assert_eq!(input.value(), "1");
    RewardsManager::teardown();
}

#[wasm_bindgen_test]
async fn second_init_is_ignored() {
    let _doc = mount_page(500).await;
    assert_eq!(RewardsManager::init(JsValue::from_f64(500.0)), Ok(true));
    assert_eq!(RewardsManager::init(JsValue::from_f64(10.0)), Ok(false));
    assert_eq!(RewardsManager::user_points(), Some(500.0));
    RewardsManager::teardown();
    assert!(!RewardsManager::is_initialized());
}

#[wasm_bindgen_test]
async fn undefined_balance_is_insufficient_immediately() {
    let doc = mount_page(500).await;
    RewardsManager::init(JsValue::UNDEFINED).expect("init");
    assert_eq!(RewardsManager::user_points(), Some(0.0));

    click_trigger(&doc, "1");
    assert_eq!(text(&doc, Slot::AfterPoints), "-100 pts");
    assert_eq!(display(&doc, Slot::InsufficientBadge), "flex");
    assert!(confirm_disabled(&doc));
    RewardsManager::teardown();
}

#[wasm_bindgen_test]
async fn string_balance_is_parsed() {
    let _doc = mount_page(500).await;
    RewardsManager::init(JsValue::from_str(" 320 points")).expect("init");
    assert_eq!(RewardsManager::user_points(), Some(320.0));
    RewardsManager::teardown();
}

#[wasm_bindgen_test]
async fn overlay_closes_but_content_does_not() {
    let doc = mount_page(500).await;
    RewardsManager::init(JsValue::from_f64(500.0)).expect("init");
    click_trigger(&doc, "1");

    let content = slot(&doc, Slot::RedeemModal)
        .query_selector(".modal-content")
        .expect("query content")
        .expect("content exists");
    click(&content);
    assert!(is_active(&doc, Slot::RedeemModal));

    click_slot(&doc, Slot::RedeemModal);
    assert!(!is_active(&doc, Slot::RedeemModal));
    RewardsManager::teardown();
}

#[wasm_bindgen_test]
async fn escape_closes_both_modals() {
    let doc = mount_page(500).await;
    RewardsManager::init(JsValue::from_f64(500.0)).expect("init");
    assert!(is_active(&doc, Slot::SuccessModal));
    click_trigger(&doc, "4");
    assert!(is_active(&doc, Slot::RedeemModal));

    press_escape(&doc);
    assert!(!is_active(&doc, Slot::RedeemModal));
    assert!(!is_active(&doc, Slot::SuccessModal));
    RewardsManager::teardown();
}

#[wasm_bindgen_test]
async fn success_buttons_close_success_modal() {
    for button in [Slot::SuccessClose, Slot::SuccessDone] {
        let doc = mount_page(500).await;
        RewardsManager::init(JsValue::from_f64(500.0)).expect("init");
        assert!(is_active(&doc, Slot::SuccessModal));
        click_slot(&doc, button);
        assert!(!is_active(&doc, Slot::SuccessModal));
        RewardsManager::teardown();
    }
}

#[wasm_bindgen_test]
async fn cancel_closes_redeem_modal() {
    let doc = mount_page(500).await;
    RewardsManager::init(JsValue::from_f64(500.0)).expect("init");
    click_trigger(&doc, "2");
    click_slot(&doc, Slot::ModalCancel);
    assert!(!is_active(&doc, Slot::RedeemModal));
    RewardsManager::teardown();
}

#[wasm_bindgen_test]
async fn zero_cost_and_disabled_triggers_do_nothing() {
    let doc = mount_page(100).await;
    RewardsManager::init(JsValue::from_f64(100.0)).expect("init");

    let free = doc.create_element("button").expect("button");
    free.set_class_name("redeem-btn");
    for (name, value) in [
        ("data-reward-id", "99"),
        ("data-reward-name", "Free Sticker"),
        ("data-reward-points", "0"),
    ] {
        free.set_attribute(name, value).expect("set attribute");
    }
    doc.body().expect("body").append_child(&free).expect("append");
    click(&free);
    assert!(!is_active(&doc, Slot::RedeemModal));
    free.remove();

    // School Merchandise costs 250 and renders disabled at 100 points.
    click_trigger(&doc, "2");
    assert!(!is_active(&doc, Slot::RedeemModal));
    RewardsManager::teardown();
}

#[wasm_bindgen_test]
async fn catalog_overrides_markup_attributes() {
    let doc = mount_page(500).await;
    let catalog = vec![RewardDescriptor::new("3", "Library Pass (catalog)", 120, "reward-teal")];
    let catalog = serde_wasm_bindgen::to_value(&catalog).expect("serialize catalog");
    assert_eq!(
        RewardsManager::init_with_catalog(JsValue::from_f64(500.0), catalog),
        Ok(true)
    );

    click_trigger(&doc, "3");
    assert_eq!(text(&doc, Slot::RewardName), "Library Pass (catalog)");
    assert_eq!(text(&doc, Slot::PointsPerItem), "-120 pts");
    assert!(slot(&doc, Slot::HeaderColor).class_list().contains("reward-teal"));
    RewardsManager::teardown();
}

#[wasm_bindgen_test]
async fn malformed_catalog_is_rejected() {
    let _doc = mount_page(500).await;
    let result = RewardsManager::init_with_catalog(
        JsValue::from_f64(500.0),
        JsValue::from_str("not a catalog"),
    );
    assert!(result.is_err());
    assert!(!RewardsManager::is_initialized());
}

#[wasm_bindgen_test]
async fn config_object_overrides_prefix_and_suffix() {
    let doc = mount_page(500).await;
    let config = js_sys::JSON::parse(
        r#"{"redeem_path_prefix": "/rewards/claim/", "points_suffix": " points"}"#,
    )
    .expect("config object");
    assert_eq!(
        RewardsManager::init_with_config(JsValue::from_f64(500.0), JsValue::UNDEFINED, config),
        Ok(true)
    );

    click_trigger(&doc, "3");
    let action = slot(&doc, Slot::RedeemForm)
        .dyn_into::<HtmlFormElement>()
        .expect("form")
        .action();
    assert!(action.ends_with("/rewards/claim/3/"), "{action}");
    assert_eq!(text(&doc, Slot::PointsPerItem), "-150 points");
    assert_eq!(text(&doc, Slot::AfterPoints), "350 points");
    RewardsManager::teardown();
}

#[wasm_bindgen_test]
async fn config_json_string_is_validated() {
    let _doc = mount_page(500).await;
    let result = RewardsManager::init_with_config(
        JsValue::from_f64(500.0),
        JsValue::NULL,
        JsValue::from_str(r#"{"redeem_path_prefix": "claim"}"#),
    );
    assert!(result.is_err());
    assert!(!RewardsManager::is_initialized());

    let result = RewardsManager::init_with_config(
        JsValue::from_f64(500.0),
        JsValue::NULL,
        JsValue::from_str(r#"{"active_class": "is-open"}"#),
    );
    assert_eq!(result, Ok(true));
    RewardsManager::teardown();
}

#[wasm_bindgen_test]
async fn stepper_steps_a_negative_entry_without_clamping() {
    let doc = mount_page(500).await;
    RewardsManager::init(JsValue::from_f64(500.0)).expect("init");
    click_trigger(&doc, "1");

    let input = slot(&doc, Slot::QuantityInput)
        .dyn_into::<HtmlInputElement>()
        .expect("quantity input");
    input.set_value("-3");
    click_slot(&doc, Slot::QuantityIncrease);
    assert_eq!(input.value(), "-2");
    assert_eq!(text(&doc, Slot::RequiredPoints), "-100 pts");

    input.set_value("-3");
    click_slot(&doc, Slot::QuantityDecrease);
    assert_eq!(input.value(), "-3");
    RewardsManager::teardown();
}
