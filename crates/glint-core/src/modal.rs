use crate::signal::{Signal, SignalSource};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// The two nested hit regions of the overlay. A click lands on exactly one
/// of them: the content box stops propagation, the backdrop dismisses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitRegion {
    Content,
    Backdrop,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Escape,
    Other,
}

impl KeyAction {
    pub fn from_key(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }
}

/// Visibility of the single contact overlay.
///
/// Enter/exit animation is not modelled here; the presentation layer layers
/// it on top of the two discrete states. Changes are broadcast through a
/// signal so the overlay element can subscribe.
pub struct ModalMachine {
    state: SignalSource<ModalState>,
}

impl Default for ModalMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalMachine {
    pub fn new() -> Self {
        Self {
            state: SignalSource::new(ModalState::Closed),
        }
    }

    pub fn state(&self) -> ModalState {
        self.state.read()
    }

    pub fn is_open(&self) -> bool {
        self.state() == ModalState::Open
    }

    pub fn signal(&self) -> Signal<ModalState> {
        self.state.signal()
    }

    /// Closed → Open. Returns whether a transition happened.
    pub fn request_open(&self) -> bool {
        self.transition(ModalState::Open)
    }

    /// Open → Closed. A no-op while already closed.
    pub fn request_close(&self) -> bool {
        self.transition(ModalState::Closed)
    }

    pub fn toggle(&self) -> bool {
        match self.state() {
            ModalState::Closed => self.request_open(),
            ModalState::Open => self.request_close(),
        }
    }

    /// Route a click that landed on the overlay.
    pub fn click(&self, region: HitRegion) -> bool {
        match region {
            HitRegion::Backdrop => self.request_close(),
            HitRegion::Content => false,
        }
    }

    pub fn key(&self, action: KeyAction) -> bool {
        match action {
            KeyAction::Escape => self.request_close(),
            KeyAction::Other => false,
        }
    }

    fn transition(&self, to: ModalState) -> bool {
        let from = self.state.read();
        if from == to {
            return false;
        }
        log::info!("[modal] {:?} -> {:?}", from, to);
        self.state.set(to);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_closes_only_when_open() {
        let modal = ModalMachine::new();
        assert!(!modal.key(KeyAction::from_key("Escape")));
        modal.request_open();
        assert!(!modal.key(KeyAction::from_key("Enter")));
        assert!(modal.key(KeyAction::from_key("Escape")));
        assert_eq!(modal.state(), ModalState::Closed);
    }
}
