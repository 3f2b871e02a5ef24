/// A key press/release at a matrix position, as delivered by the matrix scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    pub row: u8,
    pub col: u8,
    pub pressed: bool,
}

impl KeyEvent {
    pub const fn new(row: u8, col: u8, pressed: bool) -> Self {
        Self { row, col, pressed }
    }
}

/// The record handed to macro and function callbacks: the triggering event and its tap count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyRecord {
    pub event: KeyEvent,
    pub tap_count: u8,
}

impl KeyRecord {
    pub const fn new(event: KeyEvent) -> Self {
        Self { event, tap_count: 0 }
    }

    pub const fn pressed(row: u8, col: u8) -> Self {
        Self::new(KeyEvent::new(row, col, true))
    }

    pub const fn released(row: u8, col: u8) -> Self {
        Self::new(KeyEvent::new(row, col, false))
    }
}
