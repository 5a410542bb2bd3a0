use super::surface::{Color, LinearGradient, Point, Stroke, Surface, TextAlign, TextStyle};
use std::fmt::Write;

/// Surface that records drawing calls as SVG elements.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    defs: Vec<String>,
    elements: Vec<String>,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            defs: Vec::new(),
            elements: Vec::new(),
        }
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Standalone SVG document for everything drawn since the last clear.
    pub fn to_svg(&self) -> String {
        let mut out = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = fmt_num(self.width),
            h = fmt_num(self.height)
        );
        if !self.defs.is_empty() {
            out.push_str("<defs>");
            self.defs.iter().for_each(|d| out.push_str(d));
            out.push_str("</defs>");
        }
        self.elements.iter().for_each(|e| out.push_str(e));
        out.push_str("</svg>");
        out
    }
}

fn fmt_num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn paint(attr: &str, color: Color) -> String {
    format!(r#"{attr}="{color}" {attr}-opacity="{}""#, fmt_num(color.a))
}

fn stroke_attrs(stroke: Stroke) -> String {
    format!(
        r#"{} stroke-width="{}""#,
        paint("stroke", stroke.color),
        fmt_num(stroke.width)
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl Surface for SvgSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.clear();
    }

    fn clear(&mut self) {
        self.defs.clear();
        self.elements.clear();
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.elements.push(format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {}/>"#,
            fmt_num(from.x),
            fmt_num(from.y),
            fmt_num(to.x),
            fmt_num(to.y),
            stroke_attrs(stroke)
        ));
    }

    fn polyline(&mut self, points: &[Point], stroke: Stroke) {
        self.elements.push(format!(
            r#"<polyline points="{}" fill="none" {} stroke-linejoin="round"/>"#,
            points_attr(points),
            stroke_attrs(stroke)
        ));
    }

    fn fill_polygon(&mut self, points: &[Point], fill: &LinearGradient) {
        let id = format!("area{}", self.defs.len());
        let mut def = format!(
            r#"<linearGradient id="{id}" gradientUnits="userSpaceOnUse" x1="0" y1="{}" x2="0" y2="{}">"#,
            fmt_num(fill.y0),
            fmt_num(fill.y1)
        );
        for (offset, color) in &fill.stops {
            let _ = write!(
                def,
                r#"<stop offset="{}" stop-color="{color}" stop-opacity="{}"/>"#,
                fmt_num(*offset),
                fmt_num(color.a)
            );
        }
        def.push_str("</linearGradient>");
        self.defs.push(def);

        self.elements.push(format!(
            r#"<polygon points="{}" fill="url(#{id})"/>"#,
            points_attr(points)
        ));
    }

    fn text(&mut self, text: &str, at: Point, align: TextAlign, style: &TextStyle) {
        let anchor = match align {
            TextAlign::Left => "start",
            TextAlign::Center => "middle",
            TextAlign::Right => "end",
        };
        self.elements.push(format!(
            r#"<text x="{}" y="{}" text-anchor="{anchor}" font-family="{}" font-size="{}" {}>{}</text>"#,
            fmt_num(at.x),
            fmt_num(at.y),
            escape(&style.font_family),
            fmt_num(style.font_size),
            paint("fill", style.color),
            escape(text)
        ));
    }

    fn circle(&mut self, center: Point, radius: f64, fill: Color, stroke: Stroke) {
        self.elements.push(format!(
            r#"<circle cx="{}" cy="{}" r="{}" {} {}/>"#,
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(radius),
            paint("fill", fill),
            stroke_attrs(stroke)
        ));
    }
}
