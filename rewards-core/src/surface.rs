//! The page elements the controller reads and writes, behind a trait.
//!
//! The browser shell implements [`RewardsSurface`] over the DOM. [`MemorySurface`]
//! keeps the same elements in a map so the controller runs headless.
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Every element the redeem flow touches, keyed to its element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    QuantityIncrease,
    QuantityDecrease,
    QuantityInput,
    QuantityHidden,
    RedeemModal,
    ModalClose,
    ModalCancel,
    RewardName,
    PointsPerItem,
    HeaderColor,
    RedeemForm,
    RequiredPoints,
    AfterPoints,
    ReadyBadge,
    InsufficientBadge,
    ConfirmButton,
    SuccessModal,
    SuccessClose,
    SuccessDone,
}

impl Slot {
    pub const ALL: [Self; 19] = [
        Self::QuantityIncrease,
        Self::QuantityDecrease,
        Self::QuantityInput,
        Self::QuantityHidden,
        Self::RedeemModal,
        Self::ModalClose,
        Self::ModalCancel,
        Self::RewardName,
        Self::PointsPerItem,
        Self::HeaderColor,
        Self::RedeemForm,
        Self::RequiredPoints,
        Self::AfterPoints,
        Self::ReadyBadge,
        Self::InsufficientBadge,
        Self::ConfirmButton,
        Self::SuccessModal,
        Self::SuccessClose,
        Self::SuccessDone,
    ];

    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::QuantityIncrease => "quantityIncrease",
            Self::QuantityDecrease => "quantityDecrease",
            Self::QuantityInput => "quantityInput",
            Self::QuantityHidden => "quantityHiddenInput",
            Self::RedeemModal => "redeemModal",
            Self::ModalClose => "modalCloseBtn",
            Self::ModalCancel => "modalCancelBtn",
            Self::RewardName => "modalRewardName",
            Self::PointsPerItem => "modalPointsPerItem",
            Self::HeaderColor => "modalHeaderColor",
            Self::RedeemForm => "redeemForm",
            Self::RequiredPoints => "modalRequiredPoints",
            Self::AfterPoints => "modalAfterPoints",
            Self::ReadyBadge => "readyBadge",
            Self::InsufficientBadge => "insufficientBadge",
            Self::ConfirmButton => "confirmRedeemBtn",
            Self::SuccessModal => "successModal",
            Self::SuccessClose => "successCloseBtn",
            Self::SuccessDone => "successDoneBtn",
        }
    }
}

/// Inline style properties the controller sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleProp {
    Display,
    Opacity,
    Cursor,
}

impl StyleProp {
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::Opacity => "opacity",
            Self::Cursor => "cursor",
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("element #{} is not on the page", .0.element_id())]
    Missing(Slot),
    #[error("element #{} rejected the update: {}", .slot.element_id(), .message)]
    Rejected { slot: Slot, message: String },
}

pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Element operations the controller needs. Each call targets one element and
/// fails on its own; callers decide whether to carry on.
pub trait RewardsSurface {
    /// Current `value` of an input element.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Missing`] when the element is absent.
    fn read_value(&self, slot: Slot) -> SurfaceResult<String>;

    /// # Errors
    ///
    /// Returns an error when the element is absent or refuses the value.
    fn write_value(&mut self, slot: Slot, value: &str) -> SurfaceResult<()>;

    /// # Errors
    ///
    /// Returns [`SurfaceError::Missing`] when the element is absent.
    fn set_text(&mut self, slot: Slot, text: &str) -> SurfaceResult<()>;

    /// Replace the whole class attribute.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Missing`] when the element is absent.
    fn set_class_name(&mut self, slot: Slot, class_name: &str) -> SurfaceResult<()>;

    /// # Errors
    ///
    /// Returns an error when the element is absent or is not a form.
    fn set_form_action(&mut self, slot: Slot, action: &str) -> SurfaceResult<()>;

    /// # Errors
    ///
    /// Returns an error when the element is absent or rejects the property.
    fn set_style(&mut self, slot: Slot, prop: StyleProp, value: &str) -> SurfaceResult<()>;

    /// # Errors
    ///
    /// Returns an error when the element is absent.
    fn set_disabled(&mut self, slot: Slot, disabled: bool) -> SurfaceResult<()>;

    /// # Errors
    ///
    /// Returns an error when the element is absent or rejects the token.
    fn add_class(&mut self, slot: Slot, class: &str) -> SurfaceResult<()>;

    /// # Errors
    ///
    /// Returns an error when the element is absent or rejects the token.
    fn remove_class(&mut self, slot: Slot, class: &str) -> SurfaceResult<()>;

    fn has_class(&self, slot: Slot, class: &str) -> bool;
}

/// In-memory stand-in for one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryElement {
    pub value: String,
    pub text: String,
    pub classes: BTreeSet<String>,
    pub action: String,
    pub disabled: bool,
    pub styles: BTreeMap<StyleProp, String>,
    /// `class` attribute as last written; `classes` holds the parsed tokens.
    pub class_name: String,
}

impl MemoryElement {
    fn sync_class_name(&mut self) {
        self.class_name = self
            .classes
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");
    }
}

/// Headless surface holding whichever elements the test page declares.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySurface {
    elements: BTreeMap<Slot, MemoryElement>,
}

impl MemorySurface {
    /// A page with none of the elements present.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A page carrying the full markup contract.
    #[must_use]
    pub fn with_all_slots() -> Self {
        Self {
            elements: Slot::ALL
                .iter()
                .map(|slot| (*slot, MemoryElement::default()))
                .collect(),
        }
    }

    #[must_use]
    pub fn with(mut self, slot: Slot) -> Self {
        self.elements.entry(slot).or_default();
        self
    }

    #[must_use]
    pub fn without(mut self, slot: Slot) -> Self {
        self.elements.remove(&slot);
        self
    }

    #[must_use]
    pub fn element(&self, slot: Slot) -> Option<&MemoryElement> {
        self.elements.get(&slot)
    }

    pub fn element_mut(&mut self, slot: Slot) -> Option<&mut MemoryElement> {
        self.elements.get_mut(&slot)
    }

    #[must_use]
    pub fn text(&self, slot: Slot) -> Option<&str> {
        self.element(slot).map(|el| el.text.as_str())
    }

    #[must_use]
    pub fn value(&self, slot: Slot) -> Option<&str> {
        self.element(slot).map(|el| el.value.as_str())
    }

    #[must_use]
    pub fn style(&self, slot: Slot, prop: StyleProp) -> Option<&str> {
        self.element(slot)
            .and_then(|el| el.styles.get(&prop))
            .map(String::as_str)
    }

    #[must_use]
    pub fn is_disabled(&self, slot: Slot) -> Option<bool> {
        self.element(slot).map(|el| el.disabled)
    }

    fn get(&self, slot: Slot) -> SurfaceResult<&MemoryElement> {
        self.elements.get(&slot).ok_or(SurfaceError::Missing(slot))
    }

    fn get_mut(&mut self, slot: Slot) -> SurfaceResult<&mut MemoryElement> {
        self.elements
            .get_mut(&slot)
            .ok_or(SurfaceError::Missing(slot))
    }
}

impl RewardsSurface for MemorySurface {
    fn read_value(&self, slot: Slot) -> SurfaceResult<String> {
        Ok(self.get(slot)?.value.clone())
    }

    fn write_value(&mut self, slot: Slot, value: &str) -> SurfaceResult<()> {
        value.clone_into(&mut self.get_mut(slot)?.value);
        Ok(())
    }

    fn set_text(&mut self, slot: Slot, text: &str) -> SurfaceResult<()> {
        text.clone_into(&mut self.get_mut(slot)?.text);
        Ok(())
    }

    fn set_class_name(&mut self, slot: Slot, class_name: &str) -> SurfaceResult<()> {
        let element = self.get_mut(slot)?;
        element.classes = class_name.split_whitespace().map(str::to_string).collect();
        class_name.clone_into(&mut element.class_name);
        Ok(())
    }

    fn set_form_action(&mut self, slot: Slot, action: &str) -> SurfaceResult<()> {
        if slot != Slot::RedeemForm {
            return Err(SurfaceError::Rejected {
                slot,
                message: "not a form".to_string(),
            });
        }
        action.clone_into(&mut self.get_mut(slot)?.action);
        Ok(())
    }

    fn set_style(&mut self, slot: Slot, prop: StyleProp, value: &str) -> SurfaceResult<()> {
        self.get_mut(slot)?.styles.insert(prop, value.to_string());
        Ok(())
    }

    fn set_disabled(&mut self, slot: Slot, disabled: bool) -> SurfaceResult<()> {
        self.get_mut(slot)?.disabled = disabled;
        Ok(())
    }

    fn add_class(&mut self, slot: Slot, class: &str) -> SurfaceResult<()> {
        let element = self.get_mut(slot)?;
        element.classes.insert(class.to_string());
        element.sync_class_name();
        Ok(())
    }

    fn remove_class(&mut self, slot: Slot, class: &str) -> SurfaceResult<()> {
        let element = self.get_mut(slot)?;
        element.classes.remove(class);
        element.sync_class_name();
        Ok(())
    }

    fn has_class(&self, slot: Slot, class: &str) -> bool {
        self.elements
            .get(&slot)
            .is_some_and(|el| el.classes.contains(class))
    }
}
