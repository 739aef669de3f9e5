//! Page drawing.

use super::{block_path, hit_test, CanvasOptions, DrawCommand, Point, Projector, Rect, Scene, Viewport};
use crate::model::{Block, Section};
use crate::path::NodePath;

/// Draws a section and maps pointer positions back to blocks.
#[derive(Debug, Clone, Default)]
pub struct SpatialRenderer {
    options: CanvasOptions,
}

impl SpatialRenderer {
    /// Create a renderer with the given options.
    pub fn new(options: CanvasOptions) -> Self {
        Self { options }
    }

    /// Get the canvas options.
    pub fn options(&self) -> &CanvasOptions {
        &self.options
    }

    /// The projector for `section` in `viewport`; shared by drawing and hit-testing.
    pub fn projector(&self, section: &Section, viewport: Viewport) -> Option<Projector> {
        let layout = section.layout.as_ref()?;
        Projector::fit(layout, viewport, &self.options)
    }

    /// Draw `section` (at index `section_index` of its document).
    ///
    /// A block is emphasized when its path is a prefix of `selected`, so
    /// selecting anything inside a block highlights the block. Output depends
    /// only on the arguments.
    pub fn draw(
        &self,
        section: &Section,
        section_index: usize,
        selected: Option<&NodePath>,
        viewport: Viewport,
    ) -> Scene {
        let opts = &self.options;
        let palette = &opts.palette;
        let mut scene = Scene::new(viewport.width, viewport.height);

        scene.push(DrawCommand::FillRect {
            rect: Rect::new(0.0, 0.0, viewport.width, viewport.height),
            color: palette.background,
        });

        let (Some(layout), Some(projector)) =
            (section.layout.as_ref(), self.projector(section, viewport))
        else {
            return scene;
        };

        let page = projector.page(layout);
        scene.push(DrawCommand::StrokeRect {
            rect: page,
            color: palette.page_border,
            line_width: opts.line_width,
            dash: None,
        });
        scene.push(DrawCommand::FillRect {
            rect: page,
            color: palette.page_fill,
        });
        scene.push(DrawCommand::StrokeRect {
            rect: projector.margins(layout),
            color: palette.margin,
            line_width: opts.line_width,
            dash: Some(opts.margin_dash),
        });

        for (i, block) in section.blocks.iter().enumerate() {
            let rect = projector.bounds(block.bounds());
            let colors = palette.for_kind(block.kind());
            let is_selected = selected.map_or(false, |sel| sel.starts_with(&block_path(section_index, i)));

            scene.push(DrawCommand::StrokeRect {
                rect,
                color: if is_selected { colors.selected } else { colors.normal },
                line_width: if is_selected {
                    opts.selected_line_width
                } else {
                    opts.line_width
                },
                dash: None,
            });
            scene.push(DrawCommand::Text {
                x: rect.x + opts.label_offset.0,
                y: rect.y + opts.label_offset.1,
                text: block_label(block),
                color: colors.normal,
                font_size: opts.font_size,
                font_family: opts.font_family.clone(),
            });
        }

        scene
    }

    /// Path of the topmost block of `section` under `point`, if any.
    pub fn hit(
        &self,
        section: &Section,
        section_index: usize,
        viewport: Viewport,
        point: Point,
    ) -> Option<NodePath> {
        let projector = self.projector(section, viewport)?;
        hit_test(&section.blocks, &projector, point).map(|i| block_path(section_index, i))
    }
}

/// Short label drawn at a block's corner.
pub fn block_label(block: &Block) -> String {
    match block {
        Block::TextFrame(tf) => format!("T {}", tf.source_id.as_deref().unwrap_or_default()),
        Block::Table(t) => format!("Table {}×{}", t.row_count, t.col_count),
        Block::Figure(f) => format!("Fig {}", f.kind.map(|k| k.as_str()).unwrap_or_default()),
    }
}
