//! "Needs redraw" flag shared between the capture system and the render pass.

/// Marked when any control point changes owner; read and cleared once per
/// render pass (each snapshot).
#[derive(Debug, Default)]
pub struct RedrawFlag {
    pending: bool,
}

impl RedrawFlag {
    pub fn mark(&mut self) {
        self.pending = true;
    }

    pub fn is_marked(&self) -> bool {
        self.pending
    }

    /// Return the flag and clear it.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}
