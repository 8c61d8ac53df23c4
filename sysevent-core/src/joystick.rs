//! Types related to joysticks.
//!
//! Joysticks are identified by an index in `0..COUNT`; their buttons by an index in
//! `0..BUTTON_COUNT`.

/// Maximum number of supported joysticks.
pub const COUNT: u32 = 8;

/// Maximum number of supported buttons per joystick.
pub const BUTTON_COUNT: u32 = 32;

/// Maximum number of supported axes per joystick.
pub const AXIS_COUNT: u32 = Axis::COUNT as u32;

input_enum! {
    /// Axes supported by joysticks.
    pub enum Axis {
        /// The X axis.
        X,
        /// The Y axis.
        Y,
        /// The Z axis.
        Z,
        /// The R axis.
        R,
        /// The U axis.
        U,
        /// The V axis.
        V,
        /// The X axis of the point-of-view hat.
        PovX,
        /// The Y axis of the point-of-view hat.
        PovY,
    }
}

/// Returns `true` if `joystick_id` is a valid joystick index.
#[inline]
pub const fn is_valid_id(joystick_id: u32) -> bool {
    joystick_id < COUNT
}

/// Returns `true` if `button` is a valid joystick button index.
#[inline]
pub const fn is_valid_button(button: u32) -> bool {
    button < BUTTON_COUNT
}
