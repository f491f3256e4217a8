use fps_hold_core::MonitorPhase;

/// Tray icon states corresponding to the monitor phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayIconState {
    /// Not monitoring.
    Idle,
    /// Hotkey registered, waiting for a press.
    Armed,
    /// Hotkey held, limit applied.
    Held,
    /// Monitoring unavailable (not elevated, no hotkey manager).
    Disabled,
}

impl TrayIconState {
    /// Tooltip heading.
    pub fn label(self) -> &'static str {
        match self {
            TrayIconState::Idle => "Idle",
            TrayIconState::Armed => "Monitoring",
            TrayIconState::Held => "Limiting",
            TrayIconState::Disabled => "Disabled",
        }
    }

    /// Icon fill colour (RGB).
    pub fn colour(self) -> [u8; 3] {
        match self {
            TrayIconState::Idle => [0x9e, 0x9e, 0x9e],
            TrayIconState::Armed => [0x2e, 0x9d, 0x4f],
            TrayIconState::Held => [0xf2, 0x9d, 0x12],
            TrayIconState::Disabled => [0xc6, 0x28, 0x28],
        }
    }

    /// `size`×`size` RGBA pixels of a filled disc on a transparent square.
    pub fn rgba(self, size: u32) -> Vec<u8> {
        let [r, g, b] = self.colour();
        let centre = (size as f32 - 1.0) / 2.0;
        let radius = size as f32 / 2.0 - 1.0;

        let mut pixels = Vec::with_capacity((size * size * 4) as usize);
        for y in 0..size {
            for x in 0..size {
                let dx = x as f32 - centre;
                let dy = y as f32 - centre;
                let alpha = if dx * dx + dy * dy <= radius * radius {
                    u8::MAX
                } else {
                    0
                };
                pixels.extend_from_slice(&[r, g, b, alpha]);
            }
        }

        pixels
    }
}

impl From<MonitorPhase> for TrayIconState {
    fn from(phase: MonitorPhase) -> Self {
        match phase {
            MonitorPhase::Idle => TrayIconState::Idle,
            MonitorPhase::Armed => TrayIconState::Armed,
            MonitorPhase::Held => TrayIconState::Held,
        }
    }
}
