use crate::input::Scancode;

pub fn scancode_to_our_scancode(scancode: sdl2::keyboard::Scancode) -> Scancode {
    match scancode {
        sdl2::keyboard::Scancode::Escape => Scancode::Escape,
        sdl2::keyboard::Scancode::Return => Scancode::Enter,
        sdl2::keyboard::Scancode::Space => Scancode::Space,
        sdl2::keyboard::Scancode::Left => Scancode::ArrowLeft,
        sdl2::keyboard::Scancode::Up => Scancode::ArrowUp,
        sdl2::keyboard::Scancode::Right => Scancode::ArrowRight,
        sdl2::keyboard::Scancode::Down => Scancode::ArrowDown,
        _ => Scancode::Unidentified,
    }
}
