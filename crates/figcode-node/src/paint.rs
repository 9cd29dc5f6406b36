//! Paint-level types: colors, strokes, and visual effects.
//!
//! Effect variants mirror the host's effect vocabulary. Blur variants exist
//! so host data round-trips, but only shadows participate in translation.

use serde::{Deserialize, Serialize};

/// An RGBA color with float channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

/// A 2D offset in device-independent pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A visual effect on a node.
///
/// Only shadow variants carry data the translators read; blur variants are
/// preserved for host fidelity and ignored by every rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Effect {
    DropShadow(ShadowEffect),
    InnerShadow(ShadowEffect),
    LayerBlur(BlurEffect),
    BackgroundBlur(BlurEffect),
}

/// A drop or inner shadow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowEffect {
    pub color: Color,
    pub offset: Vector,
    /// Blur radius in device-independent pixels.
    pub radius: f64,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub blend_mode: BlendMode,
}

/// A layer or background blur.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlurEffect {
    pub radius: f64,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

/// Blend mode of an effect. Opaque to the translation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlendMode {
    #[default]
    Normal,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    #[serde(other)]
    Other,
}

/// A stroke paint. Only the presence of strokes affects dimension rules;
/// the fields are kept so host data round-trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stroke {
    pub color: Color,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_drop_shadow_from_host_json() {
        let json = r#"{
            "type": "DROP_SHADOW",
            "blendMode": "NORMAL",
            "color": { "r": 0, "g": 0, "b": 0, "a": 0.25 },
            "offset": { "x": 0, "y": 4 },
            "radius": 4,
            "visible": true
        }"#;
        let effect: Effect = serde_json::from_str(json).unwrap();
        assert_eq!(
            effect,
            Effect::DropShadow(ShadowEffect {
                color: Color::new(0.0, 0.0, 0.0, 0.25),
                offset: Vector::new(0.0, 4.0),
                radius: 4.0,
                visible: true,
                blend_mode: BlendMode::Normal,
            })
        );
    }

    #[test]
    fn test_visible_defaults_to_true() {
        let json = r#"{
            "type": "INNER_SHADOW",
            "color": { "r": 1, "g": 1, "b": 1, "a": 1 },
            "offset": { "x": 2, "y": 2 },
            "radius": 8
        }"#;
        let effect: Effect = serde_json::from_str(json).unwrap();
        let Effect::InnerShadow(shadow) = effect else {
            panic!("expected inner shadow");
        };
        assert!(shadow.visible);
        assert_eq!(shadow.blend_mode, BlendMode::Normal);
    }

    #[test]
    fn test_blur_effect() {
        let json = r#"{ "type": "LAYER_BLUR", "radius": 10, "visible": false }"#;
        let effect: Effect = serde_json::from_str(json).unwrap();
        assert_eq!(
            effect,
            Effect::LayerBlur(BlurEffect {
                radius: 10.0,
                visible: false,
            })
        );
    }

    #[test]
    fn test_unknown_blend_mode_maps_to_other() {
        let json = r#"{
            "type": "DROP_SHADOW",
            "blendMode": "LINEAR_BURN",
            "color": { "r": 0, "g": 0, "b": 0, "a": 1 },
            "offset": { "x": 0, "y": 0 },
            "radius": 1
        }"#;
        let effect: Effect = serde_json::from_str(json).unwrap();
        let Effect::DropShadow(shadow) = effect else {
            panic!("expected drop shadow");
        };
        assert_eq!(shadow.blend_mode, BlendMode::Other);
    }
}
