//! Light controls exposed to the UI.
//!
//! [`LightControls`] is the snapshot the scene is composed from. It is never
//! edited in place: [`ControlPanel::apply`] builds a fresh snapshot for every
//! interaction, clamped and snapped to the option ranges below, so the
//! composer can rely on pre-validated values.

/// Current values of the light controls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightControls {
    /// Ambient light intensity in `0.0..=7.0`.
    pub brightness: f32,
    /// Directional light orbit angle in degrees, `0.0..360.0`.
    pub light_rotation_degrees: f32,
    pub directional_light_enabled: bool,
}

impl LightControls {
    pub fn new(
        brightness: f32,
        light_rotation_degrees: f32,
        directional_light_enabled: bool,
    ) -> Self {
        Self {
            brightness,
            light_rotation_degrees,
            directional_light_enabled,
        }
    }
}

impl Default for LightControls {
    fn default() -> Self {
        Self {
            brightness: BRIGHTNESS.default,
            light_rotation_degrees: ROTATION.default,
            directional_light_enabled: true,
        }
    }
}

/// A numeric slider: inclusive range, step and default value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderSpec {
    pub label: &'static str,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub default: f32,
}

impl SliderSpec {
    /// Clamp into range and snap to the nearest step counted from `min`.
    pub fn normalize(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.default;
        }
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        // snapping may overshoot by a rounding error at the upper end
        (self.min + steps * self.step).min(self.max)
    }
}

pub const BRIGHTNESS: SliderSpec = SliderSpec {
    label: "Brightness",
    min: 0.0,
    max: 7.0,
    step: 0.1,
    default: 3.5,
};

pub const ROTATION: SliderSpec = SliderSpec {
    label: "Rotation",
    min: 0.0,
    max: 360.0,
    step: 1.0,
    default: 235.0,
};

pub const ENABLED_LABEL: &str = "Enabled";

/// One option shown on the panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlOption {
    Slider(SliderSpec),
    Toggle { label: &'static str, default: bool },
}

/// A titled group of options.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlFolder {
    pub title: &'static str,
    pub options: Vec<ControlOption>,
}

/// A single UI interaction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlChange {
    Brightness(f32),
    LightRotation(f32),
    DirectionalLight(bool),
    Reset,
}

/// Owner of the live control values.
#[derive(Clone, Debug, Default)]
pub struct ControlPanel {
    current: LightControls,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// The folders and options a UI should present, in display order.
    pub fn folders() -> Vec<ControlFolder> {
        vec![
            ControlFolder {
                title: "Ambient Light",
                options: vec![ControlOption::Slider(BRIGHTNESS)],
            },
            ControlFolder {
                title: "Directional Light",
                options: vec![
                    ControlOption::Slider(ROTATION),
                    ControlOption::Toggle {
                        label: ENABLED_LABEL,
                        default: true,
                    },
                ],
            },
        ]
    }

    pub fn current(&self) -> LightControls {
        self.current
    }

    /// Apply an interaction and return the new snapshot.
    ///
    /// A full turn wraps back to zero so the rotation stays in `0..360`.
    pub fn apply(&mut self, change: ControlChange) -> LightControls {
        let mut next = self.current;
        match change {
            ControlChange::Brightness(value) => next.brightness = BRIGHTNESS.normalize(value),
            ControlChange::LightRotation(value) => {
                next.light_rotation_degrees = ROTATION.normalize(value) % ROTATION.max
            }
            ControlChange::DirectionalLight(enabled) => next.directional_light_enabled = enabled,
            ControlChange::Reset => next = LightControls::default(),
        }
        log::debug!("Light controls changed: {:?}", next);
        self.current = next;
        next
    }
}
