use core::ops::{BitOr, BitOrAssign};

/// Bitmask of active layers, bit `n` set means layer `n` is on.
///
/// The layer engine keeps two of these: the momentary/toggled overlays and the
/// persistent default layer. Callbacks see their union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerState(u32);

impl LayerState {
    pub const NONE: Self = Self(0);

    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    /// State with only `layer` active. Layers above 31 cannot be represented and give an empty state.
    pub const fn layer(layer: u8) -> Self {
        if layer < 32 { Self(1 << layer) } else { Self::NONE }
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_on(self, layer: u8) -> bool {
        layer < 32 && self.0 & (1 << layer) != 0
    }

    pub const fn with_layer(self, layer: u8) -> Self {
        Self(self.0 | Self::layer(layer).0)
    }

    /// Highest active layer, `None` when no bit is set.
    pub const fn highest_layer(self) -> Option<u8> {
        if self.0 == 0 {
            None
        } else {
            Some(31 - self.0.leading_zeros() as u8)
        }
    }
}

impl BitOr for LayerState {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for LayerState {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl From<u32> for LayerState {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl From<LayerState> for u32 {
    fn from(state: LayerState) -> Self {
        state.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_layer_bits() {
        assert_eq!(LayerState::layer(0).bits(), 1);
        assert_eq!(LayerState::layer(4).bits(), 16);
        assert_eq!(LayerState::layer(32), LayerState::NONE);
        assert!(LayerState::new(0b1010).is_on(3));
        assert!(!LayerState::new(0b1010).is_on(2));
        assert!(!LayerState::new(u32::MAX).is_on(40));
    }

    #[test]
    fn test_union() {
        let mut state = LayerState::layer(1) | LayerState::layer(2);
        assert_eq!(state.bits(), 0b110);
        state |= LayerState::layer(0);
        assert_eq!(state, LayerState::NONE.with_layer(0).with_layer(1).with_layer(2));
        assert_eq!(u32::from(state), 0b111);
    }

    #[test]
    fn test_highest_layer() {
        assert_eq!(LayerState::NONE.highest_layer(), None);
        assert_eq!(LayerState::new(0b1011).highest_layer(), Some(3));
        assert_eq!(LayerState::new(1 << 31).highest_layer(), Some(31));
    }
}
