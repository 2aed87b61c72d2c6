use winit::event::VirtualKeyCode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

/// Logical events the game reacts to, independent of the windowing backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Turn(Dir),
    Restart,
    FocusLost,
    FocusClaim,
    Resize { width: u32, height: u32 },
}

/// Physical keys and the input each one produces.
pub const BINDINGS: &[(VirtualKeyCode, Input)] = &[
    (VirtualKeyCode::Up, Input::Turn(Dir::Up)),
    (VirtualKeyCode::W, Input::Turn(Dir::Up)),
    (VirtualKeyCode::Down, Input::Turn(Dir::Down)),
    (VirtualKeyCode::S, Input::Turn(Dir::Down)),
    (VirtualKeyCode::Left, Input::Turn(Dir::Left)),
    (VirtualKeyCode::A, Input::Turn(Dir::Left)),
    (VirtualKeyCode::Right, Input::Turn(Dir::Right)),
    (VirtualKeyCode::D, Input::Turn(Dir::Right)),
    (VirtualKeyCode::Space, Input::Restart),
    (VirtualKeyCode::R, Input::Restart),
];

pub fn binding(key: VirtualKeyCode) -> Option<Input> {
    BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|&(_, input)| input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_wasd_turn() {
        assert_eq!(binding(VirtualKeyCode::Left), Some(Input::Turn(Dir::Left)));
        assert_eq!(binding(VirtualKeyCode::A), Some(Input::Turn(Dir::Left)));
        assert_eq!(binding(VirtualKeyCode::Up), Some(Input::Turn(Dir::Up)));
        assert_eq!(binding(VirtualKeyCode::D), Some(Input::Turn(Dir::Right)));
    }

    #[test]
    fn space_and_r_restart() {
        assert_eq!(binding(VirtualKeyCode::Space), Some(Input::Restart));
        assert_eq!(binding(VirtualKeyCode::R), Some(Input::Restart));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(binding(VirtualKeyCode::Q), None);
        assert_eq!(binding(VirtualKeyCode::Escape), None);
    }
}
