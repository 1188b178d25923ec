//! SVG rendering of a paint plan.
//!
//! Ops are drawn strictly in plan order; every z-order decision already
//! happened in the assembler.

use anyhow::Result;
use std::path::Path;

use crate::layout::{DiagramPlan, NodeLabel, PaintOp, Rect};
use crate::theme::{ShapeFamily, Theme};

pub fn render_svg(plan: &DiagramPlan, theme: &Theme) -> String {
    let mut svg = String::new();
    let width = plan.width.max(1.0);
    let height = plan.height.max(1.0);

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));

    for op in &plan.ops {
        match op {
            PaintOp::Background { color } => {
                svg.push_str(&format!(
                    "<rect width=\"100%\" height=\"100%\" fill=\"{color}\"/>"
                ));
            }
            PaintOp::Connector {
                connector,
                stroke,
                stroke_width,
            } => {
                svg.push_str(&format!(
                    "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"round\"/>",
                    connector.start.x,
                    connector.start.y,
                    connector.end.x,
                    connector.end.y,
                    stroke,
                    stroke_width
                ));
            }
            PaintOp::Shadow {
                shape,
                bounds,
                color,
            } => {
                svg.push_str(&shape_svg(*shape, bounds, color, None));
            }
            PaintOp::Node {
                shape,
                bounds,
                fill,
                stroke,
                stroke_width,
                label,
                ..
            } => {
                svg.push_str(&shape_svg(
                    *shape,
                    bounds,
                    fill,
                    Some((stroke.as_str(), *stroke_width)),
                ));
                svg.push_str(&label_svg(bounds, label, theme));
            }
            PaintOp::Placeholder { text, bounds } => {
                let y = bounds.center_y() + theme.font_size * 0.35;
                svg.push_str(&format!(
                    "<text x=\"{:.2}\" y=\"{y:.2}\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
                    bounds.x,
                    theme.font_family,
                    theme.font_size,
                    theme.text_color,
                    escape_xml(text)
                ));
            }
        }
    }

    svg.push_str("</svg>");
    svg
}

fn shape_svg(shape: ShapeFamily, bounds: &Rect, fill: &str, stroke: Option<(&str, f32)>) -> String {
    let stroke_attrs = match stroke {
        Some((color, width)) => format!(" stroke=\"{color}\" stroke-width=\"{width}\""),
        None => String::new(),
    };
    match shape {
        ShapeFamily::Rounded => format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"10\" ry=\"10\" fill=\"{fill}\"{stroke_attrs}/>",
            bounds.x, bounds.y, bounds.width, bounds.height
        ),
        ShapeFamily::Storage => {
            // disk cylinder: U-shaped body plus an ellipse lid on top
            let rx = bounds.width / 2.0;
            let ry = (bounds.height * 0.16).min(16.0);
            let top = bounds.y + ry;
            let bottom = bounds.y + bounds.height - ry;
            let right = bounds.x + bounds.width;
            format!(
                "<path d=\"M {x:.2} {top:.2} L {x:.2} {bottom:.2} A {rx:.2} {ry:.2} 0 0 0 {right:.2} {bottom:.2} L {right:.2} {top:.2} A {rx:.2} {ry:.2} 0 0 0 {x:.2} {top:.2} Z\" fill=\"{fill}\"{stroke_attrs}/>\
                 <ellipse cx=\"{cx:.2}\" cy=\"{top:.2}\" rx=\"{rx:.2}\" ry=\"{ry:.2}\" fill=\"{fill}\"{stroke_attrs}/>",
                x = bounds.x,
                cx = bounds.center_x(),
            )
        }
    }
}

fn label_svg(bounds: &Rect, label: &NodeLabel, theme: &Theme) -> String {
    let center_x = bounds.center_x();
    let center_y = bounds.center_y();
    let mut text = String::new();
    match &label.detail {
        Some(detail) => {
            text.push_str(&format!(
                "<text x=\"{center_x:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{}\" font-weight=\"bold\" fill=\"{}\">{}</text>",
                center_y - 4.0,
                theme.font_family,
                theme.font_size,
                theme.label_color,
                escape_xml(&label.title)
            ));
            text.push_str(&format!(
                "<text x=\"{center_x:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
                center_y + theme.detail_font_size + 4.0,
                theme.font_family,
                theme.detail_font_size,
                theme.label_color,
                escape_xml(detail)
            ));
        }
        None => {
            text.push_str(&format!(
                "<text x=\"{center_x:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{}\" font-weight=\"bold\" fill=\"{}\">{}</text>",
                center_y + theme.font_size * 0.35,
                theme.font_family,
                theme.font_size,
                theme.label_color,
                escape_xml(&label.title)
            ));
        }
    }
    text
}

pub fn write_output(contents: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, contents)?;
        }
        None => {
            print!("{contents}");
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, width: f32, height: f32) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.font_family = "Arial".to_string();
    opt.default_size =
        usvg::Size::from_wh(width, height).unwrap_or(usvg::Size::from_wh(800.0, 600.0).unwrap());

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    Ok(())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
