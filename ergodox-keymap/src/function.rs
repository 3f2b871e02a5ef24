use embedded_hal::delay::DelayNs;
use strum::FromRepr;

use crate::config::BootloaderConfig;
use crate::event::KeyRecord;
use crate::host::KeyboardHost;

/// Ids of the user defined functions
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FunctionId {
    /// Reset into the Teensy bootloader for flashing
    TeensyKey = 0,
}

impl FunctionId {
    pub const fn is_known(id: u8) -> bool {
        id == FunctionId::TeensyKey as u8
    }
}

/// Run the user function `id`. Unknown ids do nothing.
pub fn action_function<H: KeyboardHost + ?Sized, D: DelayNs>(
    host: &mut H,
    delay: &mut D,
    config: &BootloaderConfig,
    record: &KeyRecord,
    id: u8,
    _opt: u8,
) {
    match FunctionId::from_repr(id) {
        Some(FunctionId::TeensyKey) => {
            debug!("Teensy key at ({}, {})", record.event.row, record.event.col);
            jump_to_bootloader(host, delay, config)
        }
        None => warn!("Unknown function id: {}", id),
    }
}

/// Release every key, let the host settle, then reset into the bootloader.
pub fn jump_to_bootloader<H: KeyboardHost + ?Sized, D: DelayNs>(
    host: &mut H,
    delay: &mut D,
    config: &BootloaderConfig,
) -> ! {
    warn!("Jumping to bootloader in {}ms", config.settle_delay_ms);
    host.clear_keyboard();
    delay.delay_ms(config.settle_delay_ms);
    host.bootloader_jump()
}
