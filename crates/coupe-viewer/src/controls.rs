use coupe_engine::camera::{CameraMovement, FlyCamera};
use coupe_engine::core::AppControl;
use coupe_engine::input::{InputFrame, InputState, Key, MouseButton, MouseButtonState};

const BINDINGS: [(Key, CameraMovement); 6] = [
    (Key::W, CameraMovement::Forward),
    (Key::S, CameraMovement::Backward),
    (Key::A, CameraMovement::Left),
    (Key::D, CameraMovement::Right),
    (Key::E, CameraMovement::Up),
    (Key::Q, CameraMovement::Down),
];

/// Maps held keys, mouse motion and the wheel onto the fly camera.
#[derive(Debug, Clone)]
pub struct Controls {
    /// Scales `dt` before it reaches the camera, on top of the camera's own
    /// `movement_speed`.
    pub speed: f32,
    min_speed: f32,
}

impl Controls {
    pub fn new(speed: f32, min_speed: f32) -> Self {
        Self { speed, min_speed }
    }

    /// Applies one frame of input. Returns `Exit` once Escape is pressed.
    pub fn update(&mut self, camera: &mut FlyCamera, input: &InputState, frame: &InputFrame, dt: f32) -> AppControl {
        if frame.key_pressed(Key::Escape) {
            return AppControl::Exit;
        }

        for (button, state) in button_transitions(frame) {
            log::info!("mouse button {button:?} {state:?}");
        }

        let offset = self.speed * dt;
        for (key, movement) in BINDINGS {
            if input.key_down(key) {
                camera.process_keyboard(movement, offset);
            }
        }

        let (dx, dy) = frame.mouse_motion;
        if dx != 0.0 || dy != 0.0 {
            // Screen y grows downwards; pitch grows upwards.
            camera.process_mouse_movement(dx, -dy, true);
        }

        let wheel = frame.wheel.1;
        if wheel != 0.0 {
            if input.modifiers.ctrl {
                camera.process_mouse_scroll(wheel);
            } else {
                self.speed += wheel;
                if self.speed < 0.0 {
                    self.speed = self.min_speed;
                }
                log::debug!("camera speed {:.2}", self.speed);
            }
        }

        AppControl::Continue
    }
}

/// Button presses then releases seen this frame.
fn button_transitions(frame: &InputFrame) -> Vec<(MouseButton, MouseButtonState)> {
    let pressed = frame.buttons_pressed.iter().map(|&b| (b, MouseButtonState::Pressed));
    let released = frame.buttons_released.iter().map(|&b| (b, MouseButtonState::Released));
    pressed.chain(released).collect()
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use coupe_engine::input::{InputEvent, KeyState, Modifiers, MouseWheelDelta, PointerButtonEvent};

    use super::*;

    fn camera() -> FlyCamera {
        FlyCamera::new(Vec3::ZERO)
    }

    fn press(state: &mut InputState, frame: &mut InputFrame, key: Key) {
        state.apply_event(
            frame,
            InputEvent::Key { key, state: KeyState::Pressed, modifiers: Modifiers::default(), code: 0, repeat: false },
        );
    }

    fn wheel(state: &mut InputState, frame: &mut InputFrame, y: f32, ctrl: bool) {
        let modifiers = Modifiers { ctrl, ..Modifiers::default() };
        state.apply_event(frame, InputEvent::MouseWheel { delta: MouseWheelDelta::Line { x: 0.0, y }, modifiers });
    }

    #[test]
    fn held_key_moves_by_speed_times_dt() {
        // 8 * 0.5 offset at the default 2.5 movement speed.
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        press(&mut state, &mut frame, Key::W);
        frame.clear();

        let mut cam = camera();
        let mut controls = Controls::new(8.0, 0.1);
        assert_eq!(controls.update(&mut cam, &state, &frame, 0.5), AppControl::Continue);
        assert!(cam.position.abs_diff_eq(Vec3::new(0.0, 0.0, -10.0), 1e-5));
    }

    #[test]
    fn escape_exits() {
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        press(&mut state, &mut frame, Key::Escape);
        let mut controls = Controls::new(8.0, 0.1);
        assert_eq!(controls.update(&mut camera(), &state, &frame, 0.016), AppControl::Exit);
    }

    #[test]
    fn wheel_changes_speed_and_snaps_to_minimum() {
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        let mut controls = Controls::new(8.0, 0.1);
        let mut cam = camera();

        wheel(&mut state, &mut frame, 2.0, false);
        controls.update(&mut cam, &state, &frame, 0.0);
        assert_eq!(controls.speed, 10.0);

        frame.clear();
        wheel(&mut state, &mut frame, -20.0, false);
        controls.update(&mut cam, &state, &frame, 0.0);
        assert_eq!(controls.speed, 0.1);
        assert_eq!(cam.zoom, 45.0);
    }

    #[test]
    fn ctrl_wheel_zooms_instead() {
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        let mut controls = Controls::new(8.0, 0.1);
        let mut cam = camera();

        wheel(&mut state, &mut frame, 5.0, true);
        controls.update(&mut cam, &state, &frame, 0.0);
        assert_eq!(cam.zoom, 40.0);
        assert_eq!(controls.speed, 8.0);
    }

    #[test]
    fn upward_mouse_motion_raises_pitch() {
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        state.apply_event(&mut frame, InputEvent::MouseMotion { dx: 0.0, dy: -100.0 });

        let mut cam = camera();
        Controls::new(8.0, 0.1).update(&mut cam, &state, &frame, 0.0);
        assert!((cam.pitch - 10.0).abs() < 1e-4);
    }

    #[test]
    fn button_press_and_release_are_both_reported() {
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        for st in [MouseButtonState::Pressed, MouseButtonState::Released] {
            state.apply_event(
                &mut frame,
                InputEvent::PointerButton(PointerButtonEvent {
                    button: MouseButton::Right,
                    state: st,
                    modifiers: Modifiers::default(),
                }),
            );
        }

        assert_eq!(
            button_transitions(&frame),
            vec![(MouseButton::Right, MouseButtonState::Pressed), (MouseButton::Right, MouseButtonState::Released)]
        );
    }
}
