use embedded_hal::digital::OutputPin;

/// The config struct for the keyboard.
///
/// 1. `LayerLedConfig`: pins of the three layer indicator LEDs.
/// 2. `BootloaderConfig`: timing of the bootloader key.
pub struct KeyboardConfig<O: OutputPin> {
    pub led_config: LayerLedConfig<O>,
    pub bootloader_config: BootloaderConfig,
}

impl<O: OutputPin> KeyboardConfig<O> {
    pub fn new(led_config: LayerLedConfig<O>) -> Self {
        Self {
            led_config,
            bootloader_config: BootloaderConfig::default(),
        }
    }
}

/// The three LEDs on the right half, in left-to-right order.
pub struct LayerLedConfig<O: OutputPin> {
    pub led1: LedPinConfig<O>,
    pub led2: LedPinConfig<O>,
    pub led3: LedPinConfig<O>,
}

impl<O: OutputPin> LayerLedConfig<O> {
    /// All three LEDs wired the same way.
    pub fn new(led1: O, led2: O, led3: O, low_active: bool) -> Self {
        Self {
            led1: LedPinConfig { pin: led1, low_active },
            led2: LedPinConfig { pin: led2, low_active },
            led3: LedPinConfig { pin: led3, low_active },
        }
    }
}

pub struct LedPinConfig<O: OutputPin> {
    pub pin: O,
    pub low_active: bool,
}

/// Config for the bootloader key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BootloaderConfig {
    /// Time between releasing all keys and jumping to the bootloader, in milliseconds
    pub settle_delay_ms: u32,
}

impl Default for BootloaderConfig {
    fn default() -> Self {
        Self { settle_delay_ms: 250 }
    }
}
