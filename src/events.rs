/// Pointer interaction reported by the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Enter,
    Leave,
}

/// One firing of the periodic advance timer.
#[derive(Debug, Clone, Copy)]
pub struct Tick;
