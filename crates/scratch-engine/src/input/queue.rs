/// Pointer events the engine understands. Mouse and touch both map here;
/// for touch events the host forwards only the first touch point.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// A press began at screen coordinates (x, y).
    PointerDown { x: f32, y: f32 },
    /// The held pointer moved to screen coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// The press was released.
    PointerUp { x: f32, y: f32 },
    /// The pointer left the surface; ends any active gesture.
    PointerLeave,
}

/// A queue of input events.
/// JS writes events into the queue; Rust reads and drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
