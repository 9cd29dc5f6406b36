//! Document node types.
//!
//! `VisualNode` is the sum of the two node kinds the translators care about:
//! plain shapes and auto-layout containers. Both carry the visual fields
//! (size, strokes, effects); only containers carry layout configuration and
//! children.

use serde::{Deserialize, Serialize};

use crate::paint::{Effect, Stroke};

/// A node in the design document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum VisualNode {
    Plain(PlainNode),
    Container(ContainerNode),
}

/// A leaf or shape node without auto-layout behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlainNode {
    /// Width in device-independent pixels.
    pub width: f64,
    /// Height in device-independent pixels.
    pub height: f64,
    /// How this node aligns on its parent's counter axis.
    #[serde(default)]
    pub layout_align: LayoutAlign,
    #[serde(default)]
    pub effects: Vec<Effect>,
    #[serde(default)]
    pub strokes: Vec<Stroke>,
    /// Stroke thickness. Meaningful only when `strokes` is non-empty.
    #[serde(default)]
    pub stroke_weight: f64,
    #[serde(default)]
    pub stroke_align: StrokeAlign,
}

/// An auto-layout container node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerNode {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub layout_align: LayoutAlign,
    #[serde(default)]
    pub effects: Vec<Effect>,
    #[serde(default)]
    pub strokes: Vec<Stroke>,
    #[serde(default)]
    pub stroke_weight: f64,
    #[serde(default)]
    pub stroke_align: StrokeAlign,
    /// Primary axis direction. `None` means the container positions children
    /// absolutely and flows nothing.
    pub layout_mode: LayoutMode,
    /// Gap between consecutive children along the primary axis.
    #[serde(default)]
    pub item_spacing: f64,
    /// Whether the counter axis is fixed to `width`/`height` or hugs content.
    #[serde(default)]
    pub counter_axis_sizing_mode: SizingMode,
    #[serde(default)]
    pub children: Vec<VisualNode>,
}

impl VisualNode {
    pub fn width(&self) -> f64 {
        match self {
            VisualNode::Plain(n) => n.width,
            VisualNode::Container(n) => n.width,
        }
    }

    pub fn height(&self) -> f64 {
        match self {
            VisualNode::Plain(n) => n.height,
            VisualNode::Container(n) => n.height,
        }
    }

    pub fn effects(&self) -> &[Effect] {
        match self {
            VisualNode::Plain(n) => &n.effects,
            VisualNode::Container(n) => &n.effects,
        }
    }

    pub fn strokes(&self) -> &[Stroke] {
        match self {
            VisualNode::Plain(n) => &n.strokes,
            VisualNode::Container(n) => &n.strokes,
        }
    }

    pub fn stroke_weight(&self) -> f64 {
        match self {
            VisualNode::Plain(n) => n.stroke_weight,
            VisualNode::Container(n) => n.stroke_weight,
        }
    }

    pub fn stroke_align(&self) -> StrokeAlign {
        match self {
            VisualNode::Plain(n) => n.stroke_align,
            VisualNode::Container(n) => n.stroke_align,
        }
    }

    pub fn layout_align(&self) -> LayoutAlign {
        match self {
            VisualNode::Plain(n) => n.layout_align,
            VisualNode::Container(n) => n.layout_align,
        }
    }

    /// The container view of this node, if it is one.
    pub fn as_container(&self) -> Option<&ContainerNode> {
        match self {
            VisualNode::Container(n) => Some(n),
            VisualNode::Plain(_) => None,
        }
    }
}

/// Where a stroke is drawn relative to the node's nominal bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrokeAlign {
    /// Stroke drawn inside the bounds; rendered size equals nominal size.
    #[default]
    Inside,
    /// Stroke drawn outside; rendered size grows by the full weight per side.
    Outside,
    /// Stroke centered on the edge; rendered size grows by half per side.
    Center,
}

/// Primary axis of an auto-layout container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    None,
    Horizontal,
    Vertical,
}

/// Counter-axis sizing strategy of an auto-layout container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SizingMode {
    #[default]
    Fixed,
    Auto,
}

/// How a child aligns on its auto-layout parent's counter axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutAlign {
    Min,
    Center,
    Max,
    Stretch,
    #[default]
    Inherit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_node_from_host_json() {
        let json = r#"{
            "kind": "plain",
            "width": 100,
            "height": 40,
            "strokeWeight": 2,
            "strokeAlign": "OUTSIDE"
        }"#;
        let node: VisualNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.width(), 100.0);
        assert_eq!(node.height(), 40.0);
        assert_eq!(node.stroke_weight(), 2.0);
        assert_eq!(node.stroke_align(), StrokeAlign::Outside);
        assert!(node.effects().is_empty());
        assert!(node.strokes().is_empty());
        assert!(node.as_container().is_none());
    }

    #[test]
    fn test_container_node_from_host_json() {
        let json = r#"{
            "kind": "container",
            "width": 200,
            "height": 80,
            "layoutMode": "HORIZONTAL",
            "itemSpacing": 8,
            "counterAxisSizingMode": "AUTO",
            "children": [
                { "kind": "plain", "width": 50, "height": 50, "layoutAlign": "CENTER" }
            ]
        }"#;
        let node: VisualNode = serde_json::from_str(json).unwrap();
        let container = node.as_container().unwrap();
        assert_eq!(container.layout_mode, LayoutMode::Horizontal);
        assert_eq!(container.item_spacing, 8.0);
        assert_eq!(container.counter_axis_sizing_mode, SizingMode::Auto);
        assert_eq!(container.children.len(), 1);
        assert_eq!(container.children[0].layout_align(), LayoutAlign::Center);
    }

    #[test]
    fn test_defaults() {
        let json = r#"{ "kind": "plain", "width": 1, "height": 1 }"#;
        let node: VisualNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.stroke_align(), StrokeAlign::Inside);
        assert_eq!(node.layout_align(), LayoutAlign::Inherit);
        assert_eq!(node.stroke_weight(), 0.0);
    }

    #[test]
    fn test_nested_containers() {
        let json = r#"{
            "kind": "container",
            "width": 300,
            "height": 300,
            "layoutMode": "VERTICAL",
            "children": [
                {
                    "kind": "container",
                    "width": 300,
                    "height": 100,
                    "layoutMode": "NONE",
                    "children": []
                }
            ]
        }"#;
        let node: VisualNode = serde_json::from_str(json).unwrap();
        let outer = node.as_container().unwrap();
        let inner = outer.children[0].as_container().unwrap();
        assert_eq!(inner.layout_mode, LayoutMode::None);
        assert!(inner.children.is_empty());
    }
}
