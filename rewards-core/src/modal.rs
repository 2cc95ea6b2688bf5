//! Which modal a dismissal gesture applies to, and when.
use crate::surface::Slot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    /// Quantity picker and confirm form.
    Redeem,
    /// Confirmation shown by the server after a redemption.
    Success,
}

/// A user gesture that may close a modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal {
    CloseButton,
    CancelButton,
    DoneButton,
    /// Click inside the modal container. `on_backdrop` is true only when the
    /// click landed on the container itself rather than its content.
    Overlay { on_backdrop: bool },
    Escape,
}

impl ModalKind {
    #[must_use]
    pub const fn container(self) -> Slot {
        match self {
            Self::Redeem => Slot::RedeemModal,
            Self::Success => Slot::SuccessModal,
        }
    }

    /// Buttons wired to dismiss this modal.
    #[must_use]
    pub const fn dismiss_buttons(self) -> &'static [(Slot, Dismissal)] {
        match self {
            Self::Redeem => &[
                (Slot::ModalClose, Dismissal::CloseButton),
                (Slot::ModalCancel, Dismissal::CancelButton),
            ],
            Self::Success => &[
                (Slot::SuccessClose, Dismissal::CloseButton),
                (Slot::SuccessDone, Dismissal::DoneButton),
            ],
        }
    }

    /// Whether `dismissal` closes this modal given its current state.
    ///
    /// The redeem modal closes on Escape unconditionally; the success modal only
    /// reacts while it is showing.
    #[must_use]
    pub const fn accepts(self, dismissal: Dismissal, is_active: bool) -> bool {
        match (self, dismissal) {
            (_, Dismissal::CloseButton) => true,
            (_, Dismissal::Overlay { on_backdrop }) => on_backdrop,
            (Self::Redeem, Dismissal::CancelButton) | (Self::Success, Dismissal::DoneButton) => {
                true
            }
            (Self::Redeem, Dismissal::DoneButton) | (Self::Success, Dismissal::CancelButton) => {
                false
            }
            (Self::Redeem, Dismissal::Escape) => true,
            (Self::Success, Dismissal::Escape) => is_active,
        }
    }
}

/// Snapshot of which modals are showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    pub redeem_active: bool,
    pub success_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_closes_only_on_backdrop() {
        for kind in [ModalKind::Redeem, ModalKind::Success] {
            assert!(kind.accepts(Dismissal::Overlay { on_backdrop: true }, true));
            assert!(!kind.accepts(Dismissal::Overlay { on_backdrop: false }, true));
        }
    }

    #[test]
    fn escape_respects_success_activity() {
        assert!(ModalKind::Redeem.accepts(Dismissal::Escape, false));
        assert!(ModalKind::Success.accepts(Dismissal::Escape, true));
        assert!(!ModalKind::Success.accepts(Dismissal::Escape, false));
    }

    #[test]
    fn buttons_belong_to_their_modal() {
        assert!(ModalKind::Redeem.accepts(Dismissal::CancelButton, true));
        assert!(!ModalKind::Redeem.accepts(Dismissal::DoneButton, true));
        assert!(ModalKind::Success.accepts(Dismissal::DoneButton, true));
        assert!(!ModalKind::Success.accepts(Dismissal::CancelButton, true));
        assert_eq!(ModalKind::Success.dismiss_buttons().len(), 2);
        assert_eq!(ModalKind::Redeem.container(), Slot::RedeemModal);
    }
}
