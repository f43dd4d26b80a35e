//! Keyboard input handling

use oscillator_core::Controls;
#[cfg(target_arch = "wasm32")]
use web_sys::KeyboardEvent;

/// Simulator action bound to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Reset,
    Impulse,
    StiffnessUp,
    StiffnessDown,
    DampingUp,
    DampingDown,
    MassUp,
    MassDown,
}

/// Map a `KeyboardEvent.key` value to its binding
pub fn binding_for(key: &str) -> Option<Binding> {
    match key {
        "r" | "R" => Some(Binding::Reset),
        " " | "Spacebar" => Some(Binding::Impulse),
        "ArrowUp" => Some(Binding::StiffnessUp),
        "ArrowDown" => Some(Binding::StiffnessDown),
        "ArrowRight" => Some(Binding::DampingUp),
        "ArrowLeft" => Some(Binding::DampingDown),
        "w" | "W" => Some(Binding::MassUp),
        "s" | "S" => Some(Binding::MassDown),
        _ => None,
    }
}

/// Keys held down plus one-shot presses since the last frame
///
/// Reset and impulse fire once per physical press; browser key repeat is
/// ignored until the key is released. Parameter keys apply every frame
/// while held.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyState {
    reset_held: bool,
    impulse_held: bool,
    reset_pressed: bool,
    impulse_pressed: bool,
    stiffness_up: bool,
    stiffness_down: bool,
    damping_up: bool,
    damping_down: bool,
    mass_up: bool,
    mass_down: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key down event; returns whether the key is bound
    pub fn handle_key_down(&mut self, key: &str) -> bool {
        let Some(binding) = binding_for(key) else {
            return false;
        };
        match binding {
            Binding::Reset => {
                self.reset_pressed |= !self.reset_held;
                self.reset_held = true;
            }
            Binding::Impulse => {
                self.impulse_pressed |= !self.impulse_held;
                self.impulse_held = true;
            }
            _ => self.set_level(binding, true),
        }
        true
    }

    /// Handle key up event; returns whether the key is bound
    pub fn handle_key_up(&mut self, key: &str) -> bool {
        let Some(binding) = binding_for(key) else {
            return false;
        };
        match binding {
            Binding::Reset => self.reset_held = false,
            Binding::Impulse => self.impulse_held = false,
            _ => self.set_level(binding, false),
        }
        true
    }

    /// Controls for the coming frame; one-shot presses are consumed
    pub fn take_controls(&mut self) -> Controls {
        let controls = Controls {
            reset: self.reset_pressed,
            impulse: self.impulse_pressed,
            mass_dir: direction(self.mass_up, self.mass_down),
            stiffness_dir: direction(self.stiffness_up, self.stiffness_down),
            damping_dir: direction(self.damping_up, self.damping_down),
        };
        self.reset_pressed = false;
        self.impulse_pressed = false;
        controls
    }

    /// Drop every held key, e.g. when the page loses focus
    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    fn set_level(&mut self, binding: Binding, held: bool) {
        let flag = match binding {
            Binding::StiffnessUp => &mut self.stiffness_up,
            Binding::StiffnessDown => &mut self.stiffness_down,
            Binding::DampingUp => &mut self.damping_up,
            Binding::DampingDown => &mut self.damping_down,
            Binding::MassUp => &mut self.mass_up,
            Binding::MassDown => &mut self.mass_down,
            Binding::Reset | Binding::Impulse => return,
        };
        *flag = held;
    }
}

// Both held cancel out
fn direction(up: bool, down: bool) -> i8 {
    up as i8 - down as i8
}

/// Extract key from keyboard event
#[cfg(target_arch = "wasm32")]
pub fn get_key_from_event(event: &KeyboardEvent) -> String {
    event.key()
}
