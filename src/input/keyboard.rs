use crate::core::Vec2;

/// Logical keys the demos react to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Jump,
}

pub const KEY_COUNT: usize = 5;

impl Key {
    /// Map a DOM `keyCode`. Unmapped codes return `None`.
    pub fn from_code(code: u32) -> Option<Key> {
        match code {
            37 => Some(Key::Left),
            38 => Some(Key::Up),
            39 => Some(Key::Right),
            40 => Some(Key::Down),
            32 => Some(Key::Jump),
            _ => None,
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    /// Unit step for direction keys; `Jump` has none
    pub fn unit(self) -> Option<Vec2> {
        match self {
            Key::Left => Some(Vec2::new(-1.0, 0.0)),
            Key::Right => Some(Vec2::new(1.0, 0.0)),
            Key::Up => Some(Vec2::new(0.0, -1.0)),
            Key::Down => Some(Vec2::new(0.0, 1.0)),
            Key::Jump => None,
        }
    }

    pub const DIRECTIONS: [Key; 4] = [Key::Left, Key::Right, Key::Up, Key::Down];
}

/// Pressed/released state per key, staged by event handlers and read by ticks.
#[derive(Clone, Copy, Debug, Default)]
pub struct Controls {
    pressed: [bool; KEY_COUNT],
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: Key, pressed: bool) {
        self.pressed[key.index()] = pressed;
    }

    /// Stage a raw key event. Returns false for unmapped codes (nothing changes).
    pub fn handle_code(&mut self, code: u32, pressed: bool) -> bool {
        match Key::from_code(code) {
            Some(key) => {
                self.set(key, pressed);
                true
            }
            None => false,
        }
    }

    /// Like `handle_code`, but only direction keys are taken.
    pub fn handle_direction_code(&mut self, code: u32, pressed: bool) -> bool {
        match Key::from_code(code).filter(|k| k.unit().is_some()) {
            Some(key) => {
                self.set(key, pressed);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed[key.index()]
    }

    /// Direction keys currently held
    pub fn held_directions(&self) -> impl Iterator<Item = Key> + '_ {
        Key::DIRECTIONS.into_iter().filter(|k| self.is_pressed(*k))
    }
}

/// Most-recently-pressed direction wins (four-direction movement).
#[derive(Clone, Debug)]
pub struct DirectionStack {
    stack: Vec<Key>,
    facing: Key,
}

impl DirectionStack {
    pub fn new(facing: Key) -> Self {
        Self { stack: Vec::with_capacity(4), facing }
    }

    pub fn push(&mut self, key: Key) {
        if key.unit().is_none() || self.stack.last() == Some(&key) {
            return;
        }
        self.stack.retain(|k| *k != key);
        self.stack.push(key);
        self.facing = key;
    }

    pub fn release(&mut self, key: Key) {
        self.stack.retain(|k| *k != key);
        if let Some(top) = self.stack.last() {
            self.facing = *top;
        }
    }

    /// Direction the sprite faces; survives the stack emptying.
    pub fn facing(&self) -> Key {
        self.facing
    }

    pub fn is_moving(&self) -> bool {
        !self.stack.is_empty()
    }
}
