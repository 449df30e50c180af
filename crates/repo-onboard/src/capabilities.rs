//! Panel capabilities used for keyboard routing

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PanelCapabilities: u8 {
        /// Character keys go to a text field instead of shortcuts
        const TEXT_INPUT = 1 << 0;
    }
}

impl PanelCapabilities {
    pub fn accepts_text_input(&self) -> bool {
        self.contains(PanelCapabilities::TEXT_INPUT)
    }
}
