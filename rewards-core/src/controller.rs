//! The redeem-flow controller.
//!
//! Holds the viewer's balance and the open reward's unit cost, and writes the
//! derived state through a [`RewardsSurface`]. Every surface write stands
//! alone: a missing element is logged and skipped, never fatal.
use crate::config::RewardsConfig;
use crate::constants::{
    HIDDEN_DISPLAY, LOG_INIT_DUPLICATE, LOG_MODAL_CLOSED, LOG_MODAL_OPENED, LOG_QUOTE,
    LOG_SURFACE_SKIPPED, LOG_TRIGGER_SKIPPED,
};
use crate::modal::{Dismissal, ModalKind, ModalState};
use crate::points::{PointsQuote, balance_label, cost_label};
use crate::quantity::{Quantity, QuantityStep};
use crate::reward::{RewardAttributes, RewardDescriptor, TriggerError, TriggerRegistry};
use crate::surface::{RewardsSurface, Slot, StyleProp, SurfaceResult};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InitError {
    #[error("rewards controller is already initialized")]
    AlreadyInitialized,
}

pub struct RewardsController<S: RewardsSurface> {
    surface: S,
    config: RewardsConfig,
    registry: TriggerRegistry,
    user_points: i64,
    current_reward_points: i64,
    initialized: bool,
}

impl<S: RewardsSurface> RewardsController<S> {
    #[must_use]
    pub fn new(surface: S, user_points: i64) -> Self {
        Self::with_config(surface, user_points, RewardsConfig::default())
    }

    #[must_use]
    pub fn with_config(surface: S, user_points: i64, config: RewardsConfig) -> Self {
        Self {
            surface,
            config,
            registry: TriggerRegistry::new(),
            user_points,
            current_reward_points: 0,
            initialized: false,
        }
    }

    #[must_use]
    pub fn with_registry(mut self, registry: TriggerRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Mark the controller as wired to its page.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::AlreadyInitialized`] on every call after the first,
    /// so callers never register their listeners twice.
    pub fn init(&mut self) -> Result<(), InitError> {
        if self.initialized {
            log::warn!("{LOG_INIT_DUPLICATE}: ignoring repeated init");
            return Err(InitError::AlreadyInitialized);
        }
        self.initialized = true;
        Ok(())
    }

    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[must_use]
    pub const fn user_points(&self) -> i64 {
        self.user_points
    }

    #[must_use]
    pub const fn current_reward_points(&self) -> i64 {
        self.current_reward_points
    }

    #[must_use]
    pub const fn config(&self) -> &RewardsConfig {
        &self.config
    }

    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// React to a click on a redeem trigger.
    ///
    /// # Errors
    ///
    /// Returns the [`TriggerError`] explaining why the modal stayed closed.
    pub fn handle_trigger(
        &mut self,
        attributes: &RewardAttributes,
    ) -> Result<RewardDescriptor, TriggerError> {
        match self.registry.resolve(attributes) {
            Ok(reward) => {
                self.open_redeem_modal(&reward);
                Ok(reward)
            }
            Err(err) => {
                log::debug!("{LOG_TRIGGER_SKIPPED}: {err}");
                Err(err)
            }
        }
    }

    /// Reset and populate the redeem modal for `reward`, then show it.
    pub fn open_redeem_modal(&mut self, reward: &RewardDescriptor) -> PointsQuote {
        self.current_reward_points = reward.points;

        let one = Quantity::ONE.to_string();
        let header_class = self.config.header_class(&reward.color_class);
        let action = self.config.redeem_path(&reward.id);
        let per_item = cost_label(reward.points, &self.config.points_suffix);

        let writes = [
            self.surface.write_value(Slot::QuantityInput, &one),
            self.surface.write_value(Slot::QuantityHidden, &one),
            self.surface.set_text(Slot::RewardName, &reward.name),
            self.surface.set_text(Slot::PointsPerItem, &per_item),
            self.surface.set_class_name(Slot::HeaderColor, &header_class),
            self.surface.set_form_action(Slot::RedeemForm, &action),
        ];
        for result in writes {
            skip_missing(result);
        }

        let quote = self.update_points_calculation();

        let active = self.config.active_class.clone();
        skip_missing(self.surface.add_class(Slot::RedeemModal, &active));
        log::debug!(
            "{LOG_MODAL_OPENED}: reward {} at {} per unit",
            reward.id,
            reward.points
        );
        quote
    }

    /// Quantity currently entered, clamped to at least one.
    #[must_use]
    pub fn current_quantity(&self) -> Quantity {
        let raw = self.surface.read_value(Slot::QuantityInput).ok();
        Quantity::from_input(raw.as_deref())
    }

    /// Recompute totals from the quantity field and push them to the page.
    pub fn update_points_calculation(&mut self) -> PointsQuote {
        let quantity = self.current_quantity();
        let quote = PointsQuote::compute(self.user_points, self.current_reward_points, quantity);
        log::debug!(
            "{LOG_QUOTE}: {} x {} = {} (after {})",
            quote.per_unit,
            quote.quantity,
            quote.total_required,
            quote.after_points
        );

        let suffix = &self.config.points_suffix;
        let required = cost_label(quote.total_required, suffix);
        let after = balance_label(quote.after_points, suffix);
        let hidden = quantity.to_string();
        let writes = [
            self.surface.set_text(Slot::RequiredPoints, &required),
            self.surface.set_text(Slot::AfterPoints, &after),
            self.surface.write_value(Slot::QuantityHidden, &hidden),
        ];
        for result in writes {
            skip_missing(result);
        }

        self.apply_affordability(quote.is_affordable());
        quote
    }

    fn apply_affordability(&mut self, ready: bool) {
        let badge_display = self.config.badge_display.clone();
        let (shown, hidden) = if ready {
            (Slot::ReadyBadge, Slot::InsufficientBadge)
        } else {
            (Slot::InsufficientBadge, Slot::ReadyBadge)
        };
        let style = self.config.button_style(ready).clone();
        let writes = [
            self.surface.set_style(shown, StyleProp::Display, &badge_display),
            self.surface.set_style(hidden, StyleProp::Display, HIDDEN_DISPLAY),
            self.surface.set_disabled(Slot::ConfirmButton, !ready),
            self.surface
                .set_style(Slot::ConfirmButton, StyleProp::Opacity, &style.opacity),
            self.surface
                .set_style(Slot::ConfirmButton, StyleProp::Cursor, &style.cursor),
        ];
        for result in writes {
            skip_missing(result);
        }
    }

    /// Apply a stepper press. Returns `None` when the press was refused at the
    /// floor, in which case nothing on the page changes.
    pub fn step_quantity(&mut self, step: QuantityStep) -> Option<PointsQuote> {
        let raw = self.surface.read_value(Slot::QuantityInput).ok();
        let next = step.apply(raw.as_deref())?;
        skip_missing(
            self.surface
                .write_value(Slot::QuantityInput, &next.to_string()),
        );
        Some(self.update_points_calculation())
    }

    /// The quantity field was edited directly.
    pub fn quantity_input_changed(&mut self) -> PointsQuote {
        self.update_points_calculation()
    }

    #[must_use]
    pub fn is_active(&self, kind: ModalKind) -> bool {
        self.surface
            .has_class(kind.container(), &self.config.active_class)
    }

    #[must_use]
    pub fn modal_state(&self) -> ModalState {
        ModalState {
            redeem_active: self.is_active(ModalKind::Redeem),
            success_active: self.is_active(ModalKind::Success),
        }
    }

    /// Close `kind` if `dismissal` applies to it. Returns whether it closed.
    pub fn dismiss(&mut self, kind: ModalKind, dismissal: Dismissal) -> bool {
        if !kind.accepts(dismissal, self.is_active(kind)) {
            return false;
        }
        match kind {
            ModalKind::Redeem => self.close_redeem_modal(),
            ModalKind::Success => self.close(kind),
        }
        true
    }

    pub fn close_redeem_modal(&mut self) {
        self.close(ModalKind::Redeem);
    }

    /// Escape reaches both modals independently.
    pub fn handle_escape(&mut self) -> ModalState {
        self.dismiss(ModalKind::Redeem, Dismissal::Escape);
        self.dismiss(ModalKind::Success, Dismissal::Escape);
        self.modal_state()
    }

    fn close(&mut self, kind: ModalKind) {
        let active = self.config.active_class.clone();
        skip_missing(self.surface.remove_class(kind.container(), &active));
        log::debug!("{LOG_MODAL_CLOSED}: {kind:?}");
    }
}

fn skip_missing(result: SurfaceResult<()>) {
    if let Err(err) = result {
        log::debug!("{LOG_SURFACE_SKIPPED}: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    fn controller(points: i64) -> RewardsController<MemorySurface> {
        RewardsController::new(MemorySurface::with_all_slots(), points)
    }

    #[test]
    fn init_only_succeeds_once() {
        let mut ctl = controller(10);
        assert!(!ctl.is_initialized());
        assert_eq!(ctl.init(), Ok(()));
        assert_eq!(ctl.init(), Err(InitError::AlreadyInitialized));
        assert!(ctl.is_initialized());
    }

    #[test]
    fn open_populates_every_target() {
        let mut ctl = controller(500);
        let reward = RewardDescriptor::new("4", "EcoBottle", 200, "reward-green");
        let quote = ctl.open_redeem_modal(&reward);
        assert_eq!(quote.total_required, 200);

        let page = ctl.surface();
        assert_eq!(page.text(Slot::RewardName), Some("EcoBottle"));
        assert_eq!(page.text(Slot::PointsPerItem), Some("-200 pts"));
        assert_eq!(page.text(Slot::RequiredPoints), Some("-200 pts"));
        assert_eq!(page.text(Slot::AfterPoints), Some("300 pts"));
        assert_eq!(page.value(Slot::QuantityInput), Some("1"));
        assert_eq!(page.value(Slot::QuantityHidden), Some("1"));
        assert_eq!(
            page.element(Slot::RedeemForm).map(|el| el.action.as_str()),
            Some("/redeem/4/")
        );
        assert!(page.has_class(Slot::HeaderColor, "reward-green"));
        assert!(ctl.is_active(ModalKind::Redeem));
    }

    #[test]
    fn stepper_refuses_below_one_without_writing() {
        let mut ctl = controller(500);
        ctl.open_redeem_modal(&RewardDescriptor::new("1", "Voucher", 100, ""));
        ctl.surface_mut()
            .set_text(Slot::RequiredPoints, "untouched")
            .unwrap();
        assert_eq!(ctl.step_quantity(QuantityStep::Decrease), None);
        assert_eq!(ctl.surface().text(Slot::RequiredPoints), Some("untouched"));
        assert_eq!(ctl.surface().value(Slot::QuantityInput), Some("1"));
    }

    #[test]
    fn stepper_steps_what_the_field_holds() {
        let mut ctl = controller(500);
        ctl.open_redeem_modal(&RewardDescriptor::new("1", "Voucher", 100, ""));

        ctl.surface_mut()
            .write_value(Slot::QuantityInput, "-3")
            .unwrap();
        let quote = ctl.step_quantity(QuantityStep::Increase);
        assert_eq!(ctl.surface().value(Slot::QuantityInput), Some("-2"));
        assert_eq!(quote.map(|q| q.quantity), Some(Quantity::ONE));
        assert_eq!(ctl.surface().value(Slot::QuantityHidden), Some("1"));
        assert_eq!(ctl.surface().text(Slot::RequiredPoints), Some("-100 pts"));

        ctl.surface_mut()
            .write_value(Slot::QuantityInput, "-3")
            .unwrap();
        assert_eq!(ctl.step_quantity(QuantityStep::Decrease), None);
        assert_eq!(ctl.surface().value(Slot::QuantityInput), Some("-3"));
    }

    #[test]
    fn stepper_reads_garbage_and_zero_as_one() {
        let mut ctl = controller(500);
        ctl.open_redeem_modal(&RewardDescriptor::new("1", "Voucher", 100, ""));
        for raw in ["abc", "0", ""] {
            ctl.surface_mut()
                .write_value(Slot::QuantityInput, raw)
                .unwrap();
            assert_eq!(ctl.step_quantity(QuantityStep::Decrease), None, "{raw:?}");
            assert_eq!(ctl.surface().value(Slot::QuantityInput), Some(raw));

            let quote = ctl.step_quantity(QuantityStep::Increase);
            assert_eq!(ctl.surface().value(Slot::QuantityInput), Some("2"), "{raw:?}");
            assert_eq!(quote.map(|q| q.total_required), Some(200));
        }
    }

    #[test]
    fn missing_elements_do_not_abort_recalculation() {
        let surface = MemorySurface::with_all_slots()
            .without(Slot::RequiredPoints)
            .without(Slot::ReadyBadge)
            .without(Slot::QuantityHidden);
        let mut ctl = RewardsController::new(surface, 100);
        let quote = ctl.open_redeem_modal(&RewardDescriptor::new("1", "Voucher", 40, ""));
        assert!(quote.is_affordable());
        assert_eq!(ctl.surface().text(Slot::AfterPoints), Some("60 pts"));
        assert_eq!(ctl.surface().is_disabled(Slot::ConfirmButton), Some(false));
        assert_eq!(
            ctl.surface()
                .style(Slot::InsufficientBadge, StyleProp::Display),
            Some("none")
        );
    }

    #[test]
    fn empty_page_is_a_silent_no_op() {
        let mut ctl = RewardsController::new(MemorySurface::empty(), 100);
        let quote = ctl.open_redeem_modal(&RewardDescriptor::new("1", "Voucher", 40, ""));
        assert_eq!(quote.quantity, Quantity::ONE);
        assert_eq!(ctl.step_quantity(QuantityStep::Increase).map(|q| q.quantity.get()), Some(1));
        assert_eq!(ctl.handle_escape(), ModalState::default());
    }
}
