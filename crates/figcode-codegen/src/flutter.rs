//! Flutter widget-property translators.
//!
//! Emits `name: value, ` property fragments for one node. Each fragment ends
//! with `, ` so the external driver can splice them into a widget constructor
//! call in any order.

use figcode_node::{
    Color, ContainerNode, Effect, LayoutAlign, LayoutMode, ShadowEffect, SizingMode, StrokeAlign,
    VisualNode,
};

use crate::{format_number, most_frequent, CodegenError};

/// A `boxShadow` list for the first visible drop shadow, or an empty string
/// when the node has none. Inner shadows and blurs never qualify.
pub fn box_shadow(node: &VisualNode) -> String {
    match first_drop_shadow(node.effects()) {
        Some(shadow) => format!(
            "boxShadow: [ BoxShadow(color: Color({}), blurRadius: {}, offset: Offset({}, {}), ), ], ",
            color_hex(&shadow.color),
            format_number(shadow.radius),
            format_number(shadow.offset.x),
            format_number(shadow.offset.y),
        ),
        None => String::new(),
    }
}

/// Material `elevation` and shadow `color` fragments approximating the first
/// visible drop shadow. Elevation reuses the blur radius directly; there is
/// no separate physical model. Both fragments are empty when no drop shadow
/// qualifies — inner shadows have no elevation analogue.
pub fn elevation_and_shadow_color(node: &VisualNode) -> (String, String) {
    match first_drop_shadow(node.effects()) {
        Some(shadow) => (
            format!("elevation: {}, ", format_number(shadow.radius)),
            format!("color: Color({}), ", color_hex(&shadow.color)),
        ),
        None => (String::new(), String::new()),
    }
}

/// `width`/`height` fragments in logical pixels. Flutter consumes the raw
/// dimension, so no scale table is involved; the stroke and container rules
/// match the Tailwind sizing translator.
pub fn size_props(node: &VisualNode) -> String {
    // when the child has the same size as the parent, don't set the size twice
    if let VisualNode::Container(frame) = node {
        if let [child] = frame.children.as_slice() {
            if child.width() == frame.width && child.height() != 0.0 && frame.height != 0.0 {
                return String::new();
            }
        }
    }

    let mut node_height = node.height();
    let mut node_width = node.width();

    // OUTSIDE and CENTER strokes paint beyond the nominal bounds; grow the
    // emitted size to match the rendered box. The strokes check matters:
    // strokeWeight can be set even without strokes.
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

    let prop_height = format!("height: {}, ", format_number(node_height));
    let prop_width = format!("width: {}, ", format_number(node_width));

    match node {
        VisualNode::Container(frame) => match frame.counter_axis_sizing_mode {
            SizingMode::Auto => String::new(),
            SizingMode::Fixed => match frame.layout_mode {
                LayoutMode::Horizontal => prop_height,
                LayoutMode::Vertical => prop_width,
                LayoutMode::None => format!("{prop_width}{prop_height}"),
            },
        },
        VisualNode::Plain(_) => format!("{prop_width}{prop_height}"),
    }
}

/// The flow widget opener for an auto-layout container: `Row(` or `Column(`,
/// sized to its content, plus a counter-axis alignment when the children's
/// most frequent alignment is not `MIN`. The driver appends the
/// `children: [...]` list and closes the call; spacing between children is
/// its job (SizedBox spacers).
pub fn row_column_props(node: &ContainerNode) -> Result<String, CodegenError> {
    let row_or_column = if node.layout_mode == LayoutMode::Horizontal {
        "Row("
    } else {
        "Column("
    };

    let aligns: Vec<LayoutAlign> = node.children.iter().map(|c| c.layout_align()).collect();
    let alignment = if *most_frequent(&aligns)? == LayoutAlign::Min {
        ""
    } else {
        "crossAxisAlignment: CrossAxisAlignment.center, "
    };

    Ok(format!(
        "{row_or_column}mainAxisSize: MainAxisSize.min, {alignment}"
    ))
}

/// Pack a float RGBA color into Flutter's `0xAARRGGBB` literal form.
///
/// Channels floor to [0, 255]: alpha 0.25 packs as `3f` (63), not `40`.
pub fn color_hex(color: &Color) -> String {
    format!(
        "0x{:02x}{:02x}{:02x}{:02x}",
        channel(color.a),
        channel(color.r),
        channel(color.g),
        channel(color.b),
    )
}

fn channel(value: f64) -> u8 {
    (value * 255.0).floor().clamp(0.0, 255.0) as u8
}

/// The first visible drop shadow in an effect list, if any. Ordering is the
/// host's; multiple shadows are not merged.
fn first_drop_shadow(effects: &[Effect]) -> Option<&ShadowEffect> {
    effects.iter().find_map(|effect| match effect {
        Effect::DropShadow(shadow) if shadow.visible => Some(shadow),
        _ => None,
    })
}
