//! Display list produced by the renderer.

use super::{Color, Rect};
use std::fmt::Write;

/// One drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        color: Color,
        line_width: f64,
        dash: Option<[f64; 2]>,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        color: Color,
        font_size: f64,
        font_family: String,
    },
}

/// An ordered list of drawing commands for one viewport.
///
/// Two scenes compare equal exactly when they would paint the same pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Append a command.
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if nothing is drawn.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Text of every label, in drawing order.
    pub fn labels(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Render the scene as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = fmt_num(self.width),
            h = fmt_num(self.height)
        );

        for command in &self.commands {
            match command {
                DrawCommand::FillRect { rect, color } => {
                    let _ = writeln!(
                        out,
                        r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                        fmt_num(rect.x),
                        fmt_num(rect.y),
                        fmt_num(rect.width),
                        fmt_num(rect.height),
                        color
                    );
                }
                DrawCommand::StrokeRect {
                    rect,
                    color,
                    line_width,
                    dash,
                } => {
                    let dash_attr = dash
                        .map(|[on, off]| {
                            format!(r#" stroke-dasharray="{},{}""#, fmt_num(on), fmt_num(off))
                        })
                        .unwrap_or_default();
                    let _ = writeln!(
                        out,
                        r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{}" stroke-width="{}"{}/>"#,
                        fmt_num(rect.x),
                        fmt_num(rect.y),
                        fmt_num(rect.width),
                        fmt_num(rect.height),
                        color,
                        fmt_num(*line_width),
                        dash_attr
                    );
                }
                DrawCommand::Text {
                    x,
                    y,
                    text,
                    color,
                    font_size,
                    font_family,
                } => {
                    let _ = writeln!(
                        out,
                        r#"  <text x="{}" y="{}" fill="{}" font-size="{}" font-family="{}">{}</text>"#,
                        fmt_num(*x),
                        fmt_num(*y),
                        color,
                        fmt_num(*font_size),
                        escape_xml(font_family),
                        escape_xml(text)
                    );
                }
            }
        }

        out.push_str("</svg>\n");
        out
    }
}

/// Format a coordinate with at most two decimals and no trailing zeros.
fn fmt_num(v: f64) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(10.0), "10");
        assert_eq!(fmt_num(2.5), "2.5");
        assert_eq!(fmt_num(1.0 / 3.0), "0.33");
        assert_eq!(fmt_num(-0.001), "0");
    }

    #[test]
    fn test_svg_output() {
        let mut scene = Scene::new(100.0, 50.0);
        scene.push(DrawCommand::FillRect {
            rect: Rect::new(0.0, 0.0, 100.0, 50.0),
            color: Color::rgb(0xf8, 0xf8, 0xf8),
        });
        scene.push(DrawCommand::StrokeRect {
            rect: Rect::new(10.0, 10.0, 20.0, 20.0),
            color: Color::rgb(0xcc, 0xcc, 0xcc),
            line_width: 1.0,
            dash: Some([3.0, 3.0]),
        });
        scene.push(DrawCommand::Text {
            x: 12.0,
            y: 20.0,
            text: "T <a&b>".to_string(),
            color: Color::rgb(0x93, 0xc5, 0xfd),
            font_size: 9.0,
            font_family: "sans-serif".to_string(),
        });

        let svg = scene.to_svg();
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r##"fill="#f8f8f8""##));
        assert!(svg.contains(r#"stroke-dasharray="3,3""#));
        assert!(svg.contains("T &lt;a&amp;b&gt;"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(scene.labels(), vec!["T <a&b>"]);
    }
}
