//! Pointer event payload

/// The parts of a pointer event the interaction controllers read
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    /// Pointer identifier used for capture
    pub pointer_id: i32,
    /// Button that changed state (0 is the primary button)
    pub button: i16,
    /// X coordinate in viewport space
    pub client_x: f64,
    /// Y coordinate in viewport space
    pub client_y: f64,
}

impl PointerInput {
    /// Primary-button pointer at the given position
    #[inline]
    pub const fn primary(client_x: f64, client_y: f64) -> Self {
        Self {
            pointer_id: 1,
            button: 0,
            client_x,
            client_y,
        }
    }

    /// Same pointer moved to a new position
    #[inline]
    pub const fn at(self, client_x: f64, client_y: f64) -> Self {
        Self {
            client_x,
            client_y,
            ..self
        }
    }

    /// Whether the primary button triggered this event
    #[inline]
    pub fn is_primary(&self) -> bool {
        self.button == 0
    }
}
