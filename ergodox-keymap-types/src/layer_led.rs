use core::ops::BitOr;

use bitfield_struct::bitfield;

/// On/off pattern of the three LEDs on the right half.
#[bitfield(u8, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct LayerLeds {
    #[bits(1)]
    pub led1: bool,
    #[bits(1)]
    pub led2: bool,
    #[bits(1)]
    pub led3: bool,
    #[bits(5)]
    _reserved: u8,
}

impl BitOr for LayerLeds {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}

impl LayerLeds {
    pub const ALL_OFF: Self = Self::new();
    pub const LED1: Self = Self::new().with_led1(true);
    pub const LED2: Self = Self::new().with_led2(true);
    pub const LED3: Self = Self::new().with_led3(true);

    pub const fn new_from(led1: bool, led2: bool, led3: bool) -> Self {
        Self::new().with_led1(led1).with_led2(led2).with_led3(led3)
    }

    pub const fn is_dark(self) -> bool {
        !self.led1() && !self.led2() && !self.led3()
    }
}
