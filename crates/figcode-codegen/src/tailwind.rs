//! Tailwind CSS class translators.
//!
//! Emits utility-class fragments for one node. Every fragment ends with a
//! trailing space so the external driver can concatenate fragments directly
//! into a `class` attribute.

use std::sync::OnceLock;

use figcode_node::{ContainerNode, LayoutAlign, LayoutMode, SizingMode, StrokeAlign, VisualNode};

use crate::scale::{ScalePolicy, ScaleTable};
use crate::{most_frequent, CodegenError};

/// Tailwind's width/height/spacing breakpoints in pixels (1 unit = 0.25rem).
const WIDTH_HEIGHT_BREAKPOINTS: [(f64, &str); 35] = [
    (0.0, "0"),
    (1.0, "px"),
    (2.0, "0.5"),
    (4.0, "1"),
    (6.0, "1.5"),
    (8.0, "2"),
    (10.0, "2.5"),
    (12.0, "3"),
    (14.0, "3.5"),
    (16.0, "4"),
    (20.0, "5"),
    (24.0, "6"),
    (28.0, "7"),
    (32.0, "8"),
    (36.0, "9"),
    (40.0, "10"),
    (44.0, "11"),
    (48.0, "12"),
    (56.0, "14"),
    (64.0, "16"),
    (80.0, "20"),
    (96.0, "24"),
    (112.0, "28"),
    (128.0, "32"),
    (144.0, "36"),
    (160.0, "40"),
    (176.0, "44"),
    (192.0, "48"),
    (208.0, "52"),
    (224.0, "56"),
    (240.0, "60"),
    (256.0, "64"),
    (288.0, "72"),
    (320.0, "80"),
    (384.0, "96"),
];

/// The default width/height/spacing scale, shared by sizing and spacing
/// translators. Nearest policy: an arbitrary design dimension snaps to the
/// closest class.
pub fn width_height_scale() -> &'static ScaleTable {
    static TABLE: OnceLock<ScaleTable> = OnceLock::new();
    TABLE.get_or_init(|| ScaleTable::new(WIDTH_HEIGHT_BREAKPOINTS, ScalePolicy::Nearest))
}

/// Flex flow classes for an auto-layout container: direction, inter-item
/// spacing, and group alignment.
///
/// Valid only for containers with at least one child; a childless container
/// yields [`CodegenError::EmptyInput`].
pub fn row_column_props(
    node: &ContainerNode,
    table: &ScaleTable,
) -> Result<String, CodegenError> {
    // ROW or COLUMN
    let row_or_column = if node.layout_mode == LayoutMode::Horizontal {
        "flex-row "
    } else {
        "flex-col "
    };

    // https://tailwindcss.com/docs/space/
    // space between items; namespace follows the primary axis
    let spacing = table.map_px(node.item_spacing)?;
    let space_direction = if node.layout_mode == LayoutMode::Horizontal {
        "x"
    } else {
        "y"
    };
    let space = format!("space-{space_direction}-{spacing} ");

    // align according to the most frequent way the children are aligned
    let aligns: Vec<LayoutAlign> = node.children.iter().map(|c| c.layout_align()).collect();
    let layout_align = if *most_frequent(&aligns)? == LayoutAlign::Min {
        ""
    } else {
        "justify-center "
    };

    Ok(format!("flex {row_or_column}{space}{layout_align}"))
}

/// Width and height classes for a node.
///
/// Accounts for stroke-alignment dimension inflation and container sizing
/// rules, and elides the size entirely when a single child already matches
/// the parent's width.
pub fn container_size_props(
    node: &VisualNode,
    table: &ScaleTable,
) -> Result<String, CodegenError> {
    // when the child has the same size as the parent, don't set the size twice
    if let VisualNode::Container(frame) = node {
        if let [child] = frame.children.as_slice() {
            if child.width() == frame.width && child.height() != 0.0 && frame.height != 0.0 {
                return Ok(String::new());
            }
        }
    }

    let mut node_height = node.height();
    let mut node_width = node.width();

    // Tailwind only knows INSIDE strokes; OUTSIDE and CENTER grow the
    // rendered box, so grow the emitted size to compensate. The strokes
    // check matters: strokeWeight can be set even without strokes.
    if !node.strokes().is_empty() {
        match node.stroke_align() {
            StrokeAlign::Outside => {
                node_height += node.stroke_weight() * 2.0;
                node_width += node.stroke_weight() * 2.0;
            }
            StrokeAlign::Center => {
                node_height += node.stroke_weight();
                node_width += node.stroke_weight();
            }
            StrokeAlign::Inside => {}
        }
    }

    let prop_height = format!("h-{} ", table.map_px(node_height)?);
    let prop_width = format!("w-{} ", table.map_px(node_width)?);

    match node {
        VisualNode::Container(frame) => match frame.counter_axis_sizing_mode {
            // AUTO containers size themselves from content; emit nothing.
            SizingMode::Auto => Ok(String::new()),
            SizingMode::Fixed => match frame.layout_mode {
                // HORIZONTAL: width is driven by content, height is fixed.
                LayoutMode::Horizontal => Ok(prop_height),
                // VERTICAL: height is driven by content, width is fixed.
                LayoutMode::Vertical => Ok(prop_width),
                LayoutMode::None => Ok(format!("{prop_width}{prop_height}")),
            },
        },
        VisualNode::Plain(_) => Ok(format!("{prop_width}{prop_height}")),
    }
}
