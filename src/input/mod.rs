use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use glam::IVec2;
pub use winit::keyboard::KeyCode;

/// Raw keyboard state for a single frame.
#[derive(Debug, Default)]
pub struct InputState {
    pub keys_held: HashSet<KeyCode>,
    pub keys_pressed: HashSet<KeyCode>,
    pub keys_released: HashSet<KeyCode>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key going down.  Auto-repeat events for a key that is
    /// already held do not count as a new press.
    pub fn press(&mut self, key: KeyCode) {
        if self.keys_held.insert(key) {
            self.keys_pressed.insert(key);
        }
    }

    pub fn release(&mut self, key: KeyCode) {
        self.keys_held.remove(&key);
        self.keys_released.insert(key);
    }

    /// Drop the per-frame edge sets; held keys persist.
    pub fn clear_frame_state(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
    }

    pub fn is_key_held(&self, key: KeyCode) -> bool { self.keys_held.contains(&key) }
    pub fn is_key_pressed(&self, key: KeyCode) -> bool { self.keys_pressed.contains(&key) }
    pub fn is_key_released(&self, key: KeyCode) -> bool { self.keys_released.contains(&key) }
}

/// Maps logical actions to one or more keys.
#[derive(Debug, Clone)]
pub struct ActionMap<A: Hash + Eq + Copy> {
    bindings: HashMap<A, Vec<KeyCode>>,
}

impl<A: Hash + Eq + Copy> ActionMap<A> {
    pub fn new() -> Self {
        Self { bindings: HashMap::new() }
    }

    pub fn bind(&mut self, action: A, key: KeyCode) {
        self.bindings.entry(action).or_default().push(key);
    }

    /// Returns true if any key bound to `action` went down this frame.
    pub fn is_pressed(&self, action: A, input: &InputState) -> bool {
        self.bindings
            .get(&action)
            .is_some_and(|keys| keys.iter().any(|&k| input.is_key_pressed(k)))
    }

    /// Returns true if any key bound to `action` is currently down.
    pub fn is_held(&self, action: A, input: &InputState) -> bool {
        self.bindings
            .get(&action)
            .is_some_and(|keys| keys.iter().any(|&k| input.is_key_held(k)))
    }
}

impl<A: Hash + Eq + Copy> Default for ActionMap<A> {
    fn default() -> Self { Self::new() }
}

// ── Direction ───────────────────────────────────────────────────────────────

/// Camera movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    /// Order in which held directions are checked.  Only the first held one
    /// moves the camera, so diagonals are not possible.
    pub const PRIORITY: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    /// World-pixel step applied for one frame of movement (y grows downwards).
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Right => IVec2::new(2, 0),
            Direction::Left => IVec2::new(-2, 0),
            Direction::Up => IVec2::new(0, -2),
            Direction::Down => IVec2::new(0, 2),
        }
    }

    /// Arrow-key bindings.
    pub fn default_bindings() -> ActionMap<Direction> {
        let mut map = ActionMap::new();
        map.bind(Direction::Right, KeyCode::ArrowRight);
        map.bind(Direction::Left, KeyCode::ArrowLeft);
        map.bind(Direction::Up, KeyCode::ArrowUp);
        map.bind(Direction::Down, KeyCode::ArrowDown);
        map
    }
}

/// The highest-priority direction whose binding is held, if any.
pub fn held_direction(bindings: &ActionMap<Direction>, input: &InputState) -> Option<Direction> {
    Direction::PRIORITY
        .into_iter()
        .find(|&d| bindings.is_held(d, input))
}
