//! Script replay against a `TouchControls` instance

use touchpad_input::{ButtonState, ContactOutcome, EdgeEvent, MenuAction, TouchControls};

use crate::script::{Command, ScriptLine};

/// Observable result of one script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Contact applied; carries the aggregate state afterwards
    Contact {
        line: usize,
        command: Command,
        state: ButtonState,
    },
    MenuRequested { line: usize },
    Edges {
        line: usize,
        events: Vec<(EdgeEvent, Option<MenuAction>)>,
    },
    State { line: usize, state: ButtonState },
    Geometry { line: usize, width: u32, height: u32 },
    Reset { line: usize },
}

/// Apply every line of a parsed script in order
pub fn run(controls: &mut TouchControls, script: &[ScriptLine]) -> Vec<Step> {
    let mut steps = Vec::new();
    for &ScriptLine { line, command } in script {
        match command {
            Command::Down { finger, x, y } | Command::Move { finger, x, y } => {
                let outcome = controls.on_contact(finger, x, y, true);
                push_contact(&mut steps, controls, line, command, outcome);
            }
            Command::Up { finger } => {
                let outcome = controls.on_contact(finger, 0, 0, false);
                push_contact(&mut steps, controls, line, command, outcome);
            }
            Command::Poll => {
                let events = controls
                    .drain_edges()
                    .into_iter()
                    .map(|e| (e, MenuAction::for_event(e)))
                    .collect();
                steps.push(Step::Edges { line, events });
            }
            Command::State => steps.push(Step::State {
                line,
                state: controls.get_state(),
            }),
            Command::Geometry { width, height } => {
                controls.set_screen_geometry(width, height);
                let geometry = controls.geometry();
                steps.push(Step::Geometry {
                    line,
                    width: geometry.width,
                    height: geometry.height,
                });
            }
            Command::Reset => {
                controls.reset();
                steps.push(Step::Reset { line });
            }
        }
    }
    steps
}

fn push_contact(
    steps: &mut Vec<Step>,
    controls: &TouchControls,
    line: usize,
    command: Command,
    outcome: ContactOutcome,
) {
    steps.push(Step::Contact {
        line,
        command,
        state: controls.get_state(),
    });
    if outcome == ContactOutcome::MenuRequested {
        steps.push(Step::MenuRequested { line });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script;
    use touchpad_input::{Button, ButtonMask};

    #[test]
    fn test_tap_produces_press_and_release() {
        let script = script::parse("down 0 80 250\nup 0\npoll\nstate").unwrap();
        let mut controls = TouchControls::default();
        let steps = run(&mut controls, &script);

        match &steps[0] {
            Step::Contact { state, .. } => assert_eq!(state.pressed, Button::Up.mask()),
            other => panic!("unexpected step {:?}", other),
        }
        assert_eq!(
            steps[2],
            Step::Edges {
                line: 3,
                events: vec![
                    (EdgeEvent::down(Button::Up), Some(MenuAction::Up)),
                    (EdgeEvent::up(Button::Up), None),
                ],
            }
        );
        match &steps[3] {
            Step::State { state, .. } => assert_eq!(state.pressed, ButtonMask::EMPTY),
            other => panic!("unexpected step {:?}", other),
        }
    }

    #[test]
    fn test_menu_zone_and_geometry() {
        // Menu zone centre on a 512x384 surface
        let script = script::parse("geometry 512 384\ndown 3 256 10\nmove 3 257 10").unwrap();
        let mut controls = TouchControls::default();
        let steps = run(&mut controls, &script);

        assert_eq!(steps[0], Step::Geometry { line: 1, width: 512, height: 384 });
        assert_eq!(steps[2], Step::MenuRequested { line: 2 });
        let menu_requests = steps
            .iter()
            .filter(|s| matches!(s, Step::MenuRequested { .. }))
            .count();
        assert_eq!(menu_requests, 1);
    }

    #[test]
    fn test_reset_clears_state() {
        let script = script::parse("down 0 80 250\nreset\npoll").unwrap();
        let mut controls = TouchControls::default();
        let steps = run(&mut controls, &script);
        assert_eq!(steps[1], Step::Reset { line: 2 });
        assert_eq!(steps[2], Step::Edges { line: 3, events: vec![] });
    }
}
