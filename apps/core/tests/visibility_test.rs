use geofind_core::visibility::{BlurTarget, VisibilityState, VisibilityStateMachine};

#[test]
fn collapsed_configuration_starts_collapsed() {
    let machine = VisibilityStateMachine::new(true);
    assert_eq!(machine.state(), VisibilityState::Collapsed);
}

#[test]
fn uncollapsed_configuration_never_collapses() {
    let mut machine = VisibilityStateMachine::new(false);
    assert_eq!(machine.state(), VisibilityState::Expanded);
    machine.focus_in();
    machine.focus_out(BlurTarget::Element);
    machine.hover_in();
    machine.hover_out();
    assert_eq!(machine.state(), VisibilityState::Expanded);
}

#[test]
fn each_assertion_expands_independently() {
    let mut machine = VisibilityStateMachine::new(true);
    machine.focus_in();
    assert_eq!(machine.state(), VisibilityState::Expanded);
    machine.focus_out(BlurTarget::Element);
    assert_eq!(machine.state(), VisibilityState::Collapsed);

    machine.hover_in();
    assert_eq!(machine.state(), VisibilityState::Expanded);
    machine.hover_out();
    assert_eq!(machine.state(), VisibilityState::Collapsed);

    machine.set_has_value(true);
    assert_eq!(machine.state(), VisibilityState::Expanded);
    machine.set_has_value(false);
    assert_eq!(machine.state(), VisibilityState::Collapsed);
}

#[test]
fn overlapping_assertions_collapse_only_when_all_released() {
    let mut machine = VisibilityStateMachine::new(true);
    machine.focus_in();
    machine.hover_in();
    machine.set_has_value(true);

    machine.hover_out();
    assert_eq!(machine.state(), VisibilityState::Expanded);
    machine.focus_out(BlurTarget::Element);
    assert_eq!(machine.state(), VisibilityState::Expanded);
    machine.set_has_value(false);
    assert_eq!(machine.state(), VisibilityState::Collapsed);
}

#[test]
fn blur_to_the_window_is_not_a_departure() {
    let mut machine = VisibilityStateMachine::new(true);
    machine.focus_in();
    machine.focus_out(BlurTarget::Window);
    assert_eq!(machine.state(), VisibilityState::Expanded);
}
