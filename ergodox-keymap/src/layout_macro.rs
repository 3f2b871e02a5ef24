/// Create a keymap cell from a single token.
///
/// - `____`: transparent, falls through to the next active layer
/// - `XXXX`: no action
/// - `{EXPR}`: any `KeyAction` expression, usually an Fn key constant
/// - an identifier: the `KeyCode` of that name, e.g. `kc!(A)`
#[macro_export]
macro_rules! kc {
    (____) => {
        $crate::types::action::KeyAction::Transparent
    };
    (XXXX) => {
        $crate::types::action::KeyAction::No
    };
    ({ $e: expr }) => {
        $e
    };
    ($k: ident) => {
        $crate::types::action::KeyAction::Key($crate::types::keycode::KeyCode::$k)
    };
}

/// Create an Fn key, `fk!(12)` is the cell `FN12`.
#[macro_export]
macro_rules! fk {
    ($slot: literal) => {
        $crate::types::action::KeyAction::Fn($slot)
    };
}

/// Create one ErgoDox layer.
///
/// Keys are listed in their physical order: the left hand rows (7, 7, 6, 7, 5 keys), the left
/// thumb cluster (2, 1, 3), then the right hand rows (7, 7, 6, 7, 5) and the right thumb
/// cluster (2, 1, 3). The macro places them into the 6x14 matrix grid; the eight cells that
/// have no switch are filled with `KeyAction::No`.
#[macro_export]
macro_rules! ergodox_layer {
    (
        $k00:tt, $k01:tt, $k02:tt, $k03:tt, $k04:tt, $k05:tt, $k06:tt,
        $k10:tt, $k11:tt, $k12:tt, $k13:tt, $k14:tt, $k15:tt, $k16:tt,
        $k20:tt, $k21:tt, $k22:tt, $k23:tt, $k24:tt, $k25:tt,
        $k30:tt, $k31:tt, $k32:tt, $k33:tt, $k34:tt, $k35:tt, $k36:tt,
        $k40:tt, $k41:tt, $k42:tt, $k43:tt, $k44:tt,
        $k55:tt, $k56:tt,
        $k54:tt,
        $k53:tt, $k52:tt, $k51:tt,
        $k07:tt, $k08:tt, $k09:tt, $k0A:tt, $k0B:tt, $k0C:tt, $k0D:tt,
        $k17:tt, $k18:tt, $k19:tt, $k1A:tt, $k1B:tt, $k1C:tt, $k1D:tt,
        $k28:tt, $k29:tt, $k2A:tt, $k2B:tt, $k2C:tt, $k2D:tt,
        $k37:tt, $k38:tt, $k39:tt, $k3A:tt, $k3B:tt, $k3C:tt, $k3D:tt,
        $k49:tt, $k4A:tt, $k4B:tt, $k4C:tt, $k4D:tt,
        $k57:tt, $k58:tt,
        $k59:tt,
        $k5C:tt, $k5B:tt, $k5A:tt $(,)?
    ) => {
        [
            [
                $crate::kc!($k00), $crate::kc!($k01), $crate::kc!($k02), $crate::kc!($k03),
                $crate::kc!($k04), $crate::kc!($k05), $crate::kc!($k06), $crate::kc!($k07),
                $crate::kc!($k08), $crate::kc!($k09), $crate::kc!($k0A), $crate::kc!($k0B),
                $crate::kc!($k0C), $crate::kc!($k0D),
            ],
            [
                $crate::kc!($k10), $crate::kc!($k11), $crate::kc!($k12), $crate::kc!($k13),
                $crate::kc!($k14), $crate::kc!($k15), $crate::kc!($k16), $crate::kc!($k17),
                $crate::kc!($k18), $crate::kc!($k19), $crate::kc!($k1A), $crate::kc!($k1B),
                $crate::kc!($k1C), $crate::kc!($k1D),
            ],
            [
                $crate::kc!($k20), $crate::kc!($k21), $crate::kc!($k22), $crate::kc!($k23),
                $crate::kc!($k24), $crate::kc!($k25), $crate::kc!(XXXX), $crate::kc!(XXXX),
                $crate::kc!($k28), $crate::kc!($k29), $crate::kc!($k2A), $crate::kc!($k2B),
                $crate::kc!($k2C), $crate::kc!($k2D),
            ],
            [
                $crate::kc!($k30), $crate::kc!($k31), $crate::kc!($k32), $crate::kc!($k33),
                $crate::kc!($k34), $crate::kc!($k35), $crate::kc!($k36), $crate::kc!($k37),
                $crate::kc!($k38), $crate::kc!($k39), $crate::kc!($k3A), $crate::kc!($k3B),
                $crate::kc!($k3C), $crate::kc!($k3D),
            ],
            [
                $crate::kc!($k40), $crate::kc!($k41), $crate::kc!($k42), $crate::kc!($k43),
                $crate::kc!($k44), $crate::kc!(XXXX), $crate::kc!(XXXX), $crate::kc!(XXXX),
                $crate::kc!(XXXX), $crate::kc!($k49), $crate::kc!($k4A), $crate::kc!($k4B),
                $crate::kc!($k4C), $crate::kc!($k4D),
            ],
            [
                $crate::kc!(XXXX), $crate::kc!($k51), $crate::kc!($k52), $crate::kc!($k53),
                $crate::kc!($k54), $crate::kc!($k55), $crate::kc!($k56), $crate::kc!($k57),
                $crate::kc!($k58), $crate::kc!($k59), $crate::kc!($k5A), $crate::kc!($k5B),
                $crate::kc!($k5C), $crate::kc!(XXXX),
            ],
        ]
    };
}
