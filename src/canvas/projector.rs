//! Document-to-viewport coordinate mapping.

use super::{CanvasOptions, Rect, Viewport};
use crate::model::{Bounds, PageLayout};

/// Isotropic mapping from page units to viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    scale: f64,
    offset: f64,
    units_per_pixel: f64,
}

impl Projector {
    /// Fit a page into a viewport.
    ///
    /// Returns `None` when the page has no positive size or the viewport is
    /// too small to hold anything after the margin.
    pub fn fit(layout: &PageLayout, viewport: Viewport, options: &CanvasOptions) -> Option<Self> {
        if layout.page_width <= 0 || layout.page_height <= 0 || options.units_per_pixel <= 0.0 {
            return None;
        }
        let page_w = layout.page_width as f64 / options.units_per_pixel;
        let page_h = layout.page_height as f64 / options.units_per_pixel;
        let scale = ((viewport.width - options.margin) / page_w)
            .min((viewport.height - options.margin) / page_h);

        if !scale.is_finite() || scale <= 0.0 {
            return None;
        }
        Some(Self {
            scale,
            offset: options.offset,
            units_per_pixel: options.units_per_pixel,
        })
    }

    /// Pixels per unscaled page pixel.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Horizontal page position to viewport x.
    pub fn x(&self, v: i64) -> f64 {
        self.offset + self.len(v)
    }

    /// Vertical page position to viewport y.
    pub fn y(&self, v: i64) -> f64 {
        self.offset + self.len(v)
    }

    /// Page length to pixels.
    pub fn len(&self, v: i64) -> f64 {
        v as f64 / self.units_per_pixel * self.scale
    }

    /// Project a rectangle given in page units.
    pub fn rect(&self, x: i64, y: i64, width: i64, height: i64) -> Rect {
        Rect::new(self.x(x), self.y(y), self.len(width), self.len(height))
    }

    /// Project block bounds.
    pub fn bounds(&self, b: Bounds) -> Rect {
        self.rect(b.x, b.y, b.width, b.height)
    }

    /// The whole page.
    pub fn page(&self, layout: &PageLayout) -> Rect {
        self.rect(0, 0, layout.page_width, layout.page_height)
    }

    /// The area inside the page margins.
    pub fn margins(&self, layout: &PageLayout) -> Rect {
        self.rect(
            layout.margin_left,
            layout.margin_top,
            layout.content_width(),
            layout.content_height(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_picks_smaller_axis() {
        // 200x100 pt page into a 420x420 viewport: width limits the scale
        let layout = PageLayout::new(20000, 10000);
        let p = Projector::fit(&layout, Viewport::new(420.0, 420.0), &CanvasOptions::default())
            .unwrap();
        assert_eq!(p.scale(), 2.0);
        assert_eq!(p.x(0), 10.0);
        assert_eq!(p.x(20000), 410.0);
        assert_eq!(p.y(10000), 210.0);
    }

    #[test]
    fn test_scale_is_isotropic() {
        let layout = PageLayout::new(59528, 84188);
        let p = Projector::fit(&layout, Viewport::new(500.0, 300.0), &CanvasOptions::default())
            .unwrap();
        let r = p.rect(0, 0, 1000, 1000);
        assert_eq!(r.width, r.height);
    }

    #[test]
    fn test_margins_rect() {
        let layout = PageLayout::new(10000, 10000).with_margins(1000, 2000, 500, 1500);
        let p = Projector::fit(&layout, Viewport::new(120.0, 120.0), &CanvasOptions::default())
            .unwrap();
        assert_eq!(p.margins(&layout), Rect::new(15.0, 20.0, 80.0, 70.0));
    }

    #[test]
    fn test_degenerate_page() {
        let options = CanvasOptions::default();
        let vp = Viewport::default();
        assert!(Projector::fit(&PageLayout::new(0, 100), vp, &options).is_none());
        assert!(Projector::fit(&PageLayout::new(100, -5), vp, &options).is_none());
        assert!(Projector::fit(&PageLayout::new(100, 100), Viewport::new(10.0, 10.0), &options).is_none());
    }
}
