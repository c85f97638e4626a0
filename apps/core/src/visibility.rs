#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityState {
    Expanded,
    Collapsed,
}

// Where focus went when the field blurred. `Window` means there was no
// related element (focus left the application), which is ambiguous and
// must not be treated as leaving the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlurTarget {
    Window,
    Element,
}

// Level-triggered: the state is recomputed from the current assertion
// flags on every read, so simultaneous inputs compose by OR with no
// ordering dependency.
#[derive(Debug, Clone, Copy)]
pub struct VisibilityStateMachine {
    configured_collapsed: bool,
    focused: bool,
    hovered: bool,
    has_value: bool,
}

impl VisibilityStateMachine {
    pub fn new(configured_collapsed: bool) -> Self {
        Self {
            configured_collapsed,
            focused: false,
            hovered: false,
            has_value: false,
        }
    }

    pub fn focus_in(&mut self) {
        self.focused = true;
    }

    pub fn focus_out(&mut self, target: BlurTarget) {
        if target == BlurTarget::Element {
            self.focused = false;
        }
    }

    pub fn hover_in(&mut self) {
        self.hovered = true;
    }

    pub fn hover_out(&mut self) {
        self.hovered = false;
    }

    pub fn set_has_value(&mut self, has_value: bool) {
        self.has_value = has_value;
    }

    pub fn state(&self) -> VisibilityState {
        if !self.configured_collapsed || self.focused || self.hovered || self.has_value {
            VisibilityState::Expanded
        } else {
            VisibilityState::Collapsed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BlurTarget, VisibilityState, VisibilityStateMachine};

    #[test]
    fn stays_expanded_when_collapsing_is_not_configured() {
        let machine = VisibilityStateMachine::new(false);
        assert_eq!(machine.state(), VisibilityState::Expanded);
    }

    #[test]
    fn collapses_only_when_idle() {
        let machine = VisibilityStateMachine::new(true);
        assert_eq!(machine.state(), VisibilityState::Collapsed);
    }

    #[test]
    fn focus_hover_and_value_each_force_expansion() {
        let mut focused = VisibilityStateMachine::new(true);
        focused.focus_in();
        assert_eq!(focused.state(), VisibilityState::Expanded);

        let mut hovered = VisibilityStateMachine::new(true);
        hovered.hover_in();
        assert_eq!(hovered.state(), VisibilityState::Expanded);

        let mut typed = VisibilityStateMachine::new(true);
        typed.set_has_value(true);
        assert_eq!(typed.state(), VisibilityState::Expanded);
    }

    #[test]
    fn assertions_compose_without_ordering() {
        let mut machine = VisibilityStateMachine::new(true);
        machine.focus_in();
        machine.hover_in();
        machine.hover_out();
        assert_eq!(machine.state(), VisibilityState::Expanded);
        machine.focus_out(BlurTarget::Element);
        assert_eq!(machine.state(), VisibilityState::Collapsed);
    }

    #[test]
    fn blur_to_the_window_keeps_focus_asserted() {
        let mut machine = VisibilityStateMachine::new(true);
        machine.focus_in();
        machine.focus_out(BlurTarget::Window);
        assert_eq!(machine.state(), VisibilityState::Expanded);
        machine.focus_out(BlurTarget::Element);
        assert_eq!(machine.state(), VisibilityState::Collapsed);
    }
}
