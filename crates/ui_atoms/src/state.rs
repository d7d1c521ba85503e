//! Instance-local view state for decorated inputs.

use crate::IconGlyph;

/// Whether a decorated input container currently holds focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusFlag(bool);

impl FocusFlag {
    /// Focus-start interaction (pointer press or focus entering the container).
    pub fn focus(&mut self) {
        self.0 = true;
    }

    /// Focus left the container.
    pub fn blur(&mut self) {
        self.0 = false;
    }

    /// Current value.
    pub fn is_focused(self) -> bool {
        self.0
    }
}

/// Password visibility. Starts masked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealFlag(bool);

impl RevealFlag {
    /// Flips between masked and revealed.
    pub fn toggle(&mut self) {
        self.0 = !self.0;
    }

    /// Current value.
    pub fn is_revealed(self) -> bool {
        self.0
    }

    /// `type` attribute for the underlying `<input>`.
    pub fn input_type(self) -> &'static str {
        if self.0 {
            "text"
        } else {
            "password"
        }
    }

    /// Glyph shown on the reveal control: an open eye offers to reveal, a
    /// struck-through eye offers to hide again.
    pub fn glyph(self) -> IconGlyph {
        if self.0 {
            IconGlyph::VisibilityOff
        } else {
            IconGlyph::Visibility
        }
    }

    /// Accessible label for the reveal control.
    pub fn control_label(self) -> &'static str {
        if self.0 {
            "Hide password"
        } else {
            "Show password"
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn focus_flag_follows_focus_and_blur() {
        let mut flag = FocusFlag::default();
        assert!(!flag.is_focused());

        flag.focus();
        flag.focus();
        assert!(flag.is_focused());

        flag.blur();
        assert!(!flag.is_focused());
    }

    #[test]
    fn even_toggle_count_returns_to_masked_and_odd_stays_revealed() {
        for toggles in 0..8 {
            let mut flag = RevealFlag::default();
            for _ in 0..toggles {
                flag.toggle();
            }

            let expected = if toggles % 2 == 0 { "password" } else { "text" };
            assert_eq!(flag.input_type(), expected, "after {toggles} toggles");
            assert_eq!(flag.is_revealed(), toggles % 2 == 1);
        }
    }

    #[test]
    fn reveal_glyph_swaps_with_state() {
        let mut flag = RevealFlag::default();
        assert_eq!(flag.glyph(), IconGlyph::Visibility);
        assert_eq!(flag.control_label(), "Show password");

        flag.toggle();
        assert_eq!(flag.glyph(), IconGlyph::VisibilityOff);
        assert_eq!(flag.control_label(), "Hide password");
    }
}
