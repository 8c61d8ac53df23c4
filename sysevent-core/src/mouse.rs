//! Types related to the mouse.

input_enum! {
    /// Mouse buttons.
    pub enum Button {
        /// The left mouse button.
        Left,
        /// The right mouse button.
        Right,
        /// The middle (wheel) mouse button.
        Middle,
        /// The first extra mouse button.
        Extra1,
        /// The second extra mouse button.
        Extra2,
    }
}

input_enum! {
    /// Mouse wheels.
    pub enum Wheel {
        /// The vertical mouse wheel.
        Vertical,
        /// The horizontal mouse wheel.
        Horizontal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_order() {
        assert_eq!(Button::COUNT, 5);
        assert_eq!(
            Button::ALL,
            [Button::Left, Button::Right, Button::Middle, Button::Extra1, Button::Extra2]
        );
        assert_eq!(Button::Extra2.index(), 4);
        assert_eq!(Button::from_index(2), Some(Button::Middle));
        assert_eq!(Button::from_index(5), None);
    }

    #[test]
    fn defaults() {
        assert_eq!(Button::default(), Button::Left);
        assert_eq!(Wheel::default(), Wheel::Vertical);
        assert_eq!(Wheel::Horizontal.to_string(), "Horizontal");
    }
}
