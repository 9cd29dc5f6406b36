//! figcode Node Model
//!
//! The read-only view of a design-tool document node that the translators
//! consume. The document host owns and mutates the tree; this crate only
//! describes its shape and deserializes it from host JSON.
//!
//! Node kinds are explicit variants (`Plain` vs `Container`) rather than a
//! single struct with optional layout fields, so translators can match
//! exhaustively instead of probing for field presence.

pub mod node;
pub mod paint;

pub use node::{
    ContainerNode, LayoutAlign, LayoutMode, PlainNode, SizingMode, StrokeAlign, VisualNode,
};
pub use paint::{BlendMode, BlurEffect, Color, Effect, ShadowEffect, Stroke, Vector};
