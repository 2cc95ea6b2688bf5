//! Yew rendering of the rewards page markup the controller attaches to.
//!
//! The server template and these components produce the same element ids and
//! trigger attributes, so either can host [`crate::manager::RewardsManager`].
use crate::rewards::{RewardDescriptor, RewardsConfig, Slot, balance_label, cost_label};
use yew::prelude::*;

fn id(slot: Slot) -> &'static str {
    slot.element_id()
}

/// One reward tile; its button is the redeem trigger.
#[derive(Properties, PartialEq, Clone)]
pub struct RewardCardProps {
    pub reward: RewardDescriptor,
    pub user_points: i64,
}

#[function_component(RewardCard)]
pub fn reward_card(props: &RewardCardProps) -> Html {
    let config = RewardsConfig::default();
    let reward = &props.reward;
    let affordable = reward.points <= props.user_points;
    html! {
        <div class={classes!("reward-card", reward.color_class.clone())}>
            if let Some(icon) = reward.icon.clone() {
                <span class="reward-icon" aria-hidden="true">{ icon }</span>
            }
            <h3 class="reward-name">{ reward.name.clone() }</h3>
            <p class="reward-points">{ balance_label(reward.points, &config.points_suffix) }</p>
            <button
                type="button"
                class={config.trigger_class.clone()}
                data-reward-id={reward.id.clone()}
                data-reward-name={reward.name.clone()}
                data-reward-points={reward.points.to_string()}
                data-reward-color={reward.color_class.clone()}
                disabled={!affordable}
            >
                { if affordable { "Redeem" } else { "Not enough points" } }
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct RedeemModalProps {
    pub user_points: i64,
    /// Hidden CSRF field the server expects on the redeem POST.
    #[prop_or_default]
    pub csrf_token: Option<AttrValue>,
}

/// Redeem dialog, closed until a trigger opens it.
#[function_component(RedeemModal)]
pub fn redeem_modal(props: &RedeemModalProps) -> Html {
    let config = RewardsConfig::default();
    let suffix = config.points_suffix.clone();
    html! {
        <div id={id(Slot::RedeemModal)} class="modal-overlay" role="dialog" aria-modal="true" aria-labelledby={id(Slot::RewardName)}>
            <div class="modal-content">
                <div id={id(Slot::HeaderColor)} class={config.header_base_class.clone()}>
                    <h2 id={id(Slot::RewardName)}></h2>
                    <button type="button" id={id(Slot::ModalClose)} class="modal-close" aria-label="Close dialog">{ "×" }</button>
                </div>
                <form id={id(Slot::RedeemForm)} method="post" action="">
                    if let Some(token) = props.csrf_token.clone() {
                        <input type="hidden" name="csrfmiddlewaretoken" value={token} />
                    }
                    <input type="hidden" id={id(Slot::QuantityHidden)} name="quantity" value="1" />
                    <div class="modal-row">
                        <span>{ "Cost per item" }</span>
                        <span id={id(Slot::PointsPerItem)}></span>
                    </div>
                    <div class="quantity-stepper">
                        <button type="button" id={id(Slot::QuantityDecrease)} aria-label="Decrease quantity">{ "−" }</button>
                        <input type="number" id={id(Slot::QuantityInput)} min="1" value="1" aria-label="Quantity" />
                        <button type="button" id={id(Slot::QuantityIncrease)} aria-label="Increase quantity">{ "+" }</button>
                    </div>
                    <div class="modal-row">
                        <span>{ "Your points" }</span>
                        <span class="modal-balance">{ balance_label(props.user_points, &suffix) }</span>
                    </div>
                    <div class="modal-row">
                        <span>{ "Required" }</span>
                        <span id={id(Slot::RequiredPoints)}>{ cost_label(0, &suffix) }</span>
                    </div>
                    <div class="modal-row">
                        <span>{ "After redemption" }</span>
                        <span id={id(Slot::AfterPoints)}>{ balance_label(props.user_points, &suffix) }</span>
                    </div>
                    <div id={id(Slot::ReadyBadge)} class="status-badge ready" style="display: none">{ "Ready to redeem" }</div>
                    <div id={id(Slot::InsufficientBadge)} class="status-badge insufficient" style="display: none">{ "Insufficient points" }</div>
                    <div class="modal-actions">
                        <button type="button" id={id(Slot::ModalCancel)} class="btn-secondary">{ "Cancel" }</button>
                        <button type="submit" id={id(Slot::ConfirmButton)} class="btn-primary">{ "Confirm" }</button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct SuccessModalProps {
    /// Server flash message; the modal renders open when one is present.
    #[prop_or_default]
    pub message: Option<AttrValue>,
}

#[function_component(SuccessModal)]
pub fn success_modal(props: &SuccessModalProps) -> Html {
    let config = RewardsConfig::default();
    let class = if props.message.is_some() {
        classes!("modal-overlay", config.active_class)
    } else {
        classes!("modal-overlay")
    };
    html! {
        <div id={id(Slot::SuccessModal)} class={class} role="dialog" aria-modal="true">
            <div class="modal-content">
                <div class="modal-header success">
                    <h2>{ "Redemption successful" }</h2>
                    <button type="button" id={id(Slot::SuccessClose)} class="modal-close" aria-label="Close dialog">{ "×" }</button>
                </div>
                <p class="success-message">{ props.message.clone().unwrap_or_default() }</p>
                <button type="button" id={id(Slot::SuccessDone)} class="btn-primary">{ "Done" }</button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct RewardsPageProps {
    pub rewards: Vec<RewardDescriptor>,
    pub user_points: i64,
    #[prop_or_default]
    pub csrf_token: Option<AttrValue>,
    #[prop_or_default]
    pub success_message: Option<AttrValue>,
}

/// Full page: reward grid plus both modals.
#[function_component(RewardsPage)]
pub fn rewards_page(props: &RewardsPageProps) -> Html {
    let suffix = RewardsConfig::default().points_suffix;
    html! {
        <section class="rewards-page">
            <header class="rewards-balance">
                <span>{ "Available points" }</span>
                <strong>{ balance_label(props.user_points, &suffix) }</strong>
            </header>
            <div class="rewards-grid">
                { for props.rewards.iter().map(|reward| html! {
                    <RewardCard key={reward.id.clone()} reward={reward.clone()} user_points={props.user_points} />
                }) }
            </div>
            <RedeemModal user_points={props.user_points} csrf_token={props.csrf_token.clone()} />
            <SuccessModal message={props.success_message.clone()} />
        </section>
    }
}
