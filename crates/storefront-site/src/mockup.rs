//! Browser mockup preview.
//!
//! A rendered site is shown inside a laptop-style browser frame. The site is
//! laid out at its full `content_width` in an iframe and scaled down with a
//! CSS transform until it fits the frame. The frame swallows wheel events and
//! forwards them to the iframe, divided by the scale, so scrolling moves the
//! page at the speed the visitor expects.

use serde::{Deserialize, Serialize};

/// Geometry of the mockup frame, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MockupViewport {
    /// Visible width of the browser screen
    pub frame_width: f64,
    /// Visible height of the browser screen
    pub frame_height: f64,
    /// Width the site is laid out at before scaling
    pub content_width: f64,
}

impl Default for MockupViewport {
    fn default() -> Self {
        Self {
            frame_width: 960.0,
            frame_height: 600.0,
            content_width: 1440.0,
        }
    }
}

impl MockupViewport {
    /// Factor applied to the content, in `(0, 1]`. Never scales up.
    pub fn scale(&self) -> f64 {
        if self.content_width <= 0.0 || self.frame_width <= 0.0 {
            return 1.0;
        }
        (self.frame_width / self.content_width).min(1.0)
    }

    /// Unscaled iframe height that exactly fills the frame.
    pub fn content_height(&self) -> f64 {
        self.frame_height / self.scale()
    }

    /// Map a point relative to the frame into content coordinates.
    pub fn to_content(&self, x: f64, y: f64) -> (f64, f64) {
        let scale = self.scale();
        (x / scale, y / scale)
    }

    /// New content scroll offset after a wheel event of `delta_y` over the frame.
    ///
    /// `scroll_height` is the full height of the content document.
    pub fn forward_wheel(&self, scroll_top: f64, delta_y: f64, scroll_height: f64) -> f64 {
        let max = (scroll_height - self.content_height()).max(0.0);
        (scroll_top + delta_y / self.scale()).clamp(0.0, max)
    }
}

/// Values handed to the preview template.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewView<'a> {
    pub name: &'a str,
    /// Page loaded into the iframe
    pub src: &'a str,
    /// Address shown in the fake URL bar
    pub url: &'a str,
    pub frame_width: f64,
    pub frame_height: f64,
    pub content_width: f64,
    pub content_height: f64,
    pub scale: f64,
}

impl<'a> PreviewView<'a> {
    pub fn new(viewport: &MockupViewport, name: &'a str, src: &'a str, url: &'a str) -> Self {
        Self {
            name,
            src,
            url,
            frame_width: viewport.frame_width,
            frame_height: viewport.frame_height,
            content_width: viewport.content_width,
            content_height: viewport.content_height().round(),
            scale: viewport.scale(),
        }
    }
}

pub(crate) const PREVIEW_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="de">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Vorschau – {{ preview.name }}</title>
  <style>
    body { margin: 0; min-height: 100vh; display: flex; align-items: center; justify-content: center; background: #e5e7eb; font-family: system-ui, sans-serif; }
    .mockup { width: {{ preview.frame_width }}px; }
    .mockup-bar { display: flex; gap: 6px; align-items: center; padding: 10px 12px; background: #d1d5db; border-radius: 12px 12px 0 0; }
    .mockup-bar span { width: 10px; height: 10px; border-radius: 50%; background: #9ca3af; }
    .mockup-url { flex: 1; margin-left: 12px; padding: 3px 10px; border-radius: 6px; background: #f3f4f6; font-size: 12px; color: #4b5563; }
    .mockup-screen { position: relative; width: {{ preview.frame_width }}px; height: {{ preview.frame_height }}px; overflow: hidden; background: #fff; border-radius: 0 0 12px 12px; box-shadow: 0 20px 40px rgba(0, 0, 0, 0.2); }
    .mockup-screen iframe { position: absolute; top: 0; left: 0; border: 0; width: {{ preview.content_width }}px; height: {{ preview.content_height }}px; transform: scale({{ preview.scale }}); transform-origin: 0 0; }
    .mockup-overlay { position: absolute; inset: 0; }
  </style>
</head>
<body>
  <div class="mockup">
    <div class="mockup-bar"><span></span><span></span><span></span><div class="mockup-url">{{ preview.url }}</div></div>
    <div class="mockup-screen">
      <iframe src="{{ preview.src }}" title="{{ preview.name }}" scrolling="no"></iframe>
      <div class="mockup-overlay"></div>
    </div>
  </div>
  <script>
  (function () {
    var scale = {{ preview.scale }};
    var contentHeight = {{ preview.content_height }};
    var screen = document.querySelector(".mockup-screen");
    var frame = screen.querySelector("iframe");
    var overlay = screen.querySelector(".mockup-overlay");
    overlay.addEventListener("wheel", function (event) {
      event.preventDefault();
      var doc = frame.contentDocument;
      if (!doc) return;
      var root = doc.scrollingElement || doc.documentElement;
      var max = Math.max(root.scrollHeight - contentHeight, 0);
      var next = root.scrollTop + event.deltaY / scale;
      root.scrollTop = Math.min(Math.max(next, 0), max);
    }, { passive: false });
  })();
  </script>
</body>
</html>"##;

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> MockupViewport {
        MockupViewport {
            frame_width: 720.0,
            frame_height: 450.0,
            content_width: 1440.0,
        }
    }

    #[test]
    fn scales_content_to_frame() {
        let v = viewport();
        assert_eq!(v.scale(), 0.5);
        assert_eq!(v.content_height(), 900.0);
    }

    #[test]
    fn never_scales_up() {
        let v = MockupViewport {
            frame_width: 1600.0,
            frame_height: 900.0,
            content_width: 1200.0,
        };
        assert_eq!(v.scale(), 1.0);
        assert_eq!(v.content_height(), 900.0);
    }

    #[test]
    fn degenerate_widths_fall_back_to_identity() {
        let v = MockupViewport {
            content_width: 0.0,
            ..viewport()
        };
        assert_eq!(v.scale(), 1.0);
    }

    #[test]
    fn maps_points_into_content() {
        assert_eq!(viewport().to_content(100.0, 40.0), (200.0, 80.0));
    }

    #[test]
    fn forwards_wheel_with_scale_and_clamps() {
        let v = viewport();

        // 30px of wheel over a half-size frame scrolls 60px of content
        assert_eq!(v.forward_wheel(0.0, 30.0, 3000.0), 60.0);

        // Cannot scroll above the top
        assert_eq!(v.forward_wheel(10.0, -100.0, 3000.0), 0.0);

        // Cannot scroll past the last screenful (3000 - 900)
        assert_eq!(v.forward_wheel(2000.0, 500.0, 3000.0), 2100.0);

        // Content shorter than the frame does not scroll
        assert_eq!(v.forward_wheel(0.0, 100.0, 500.0), 0.0);
    }

    #[test]
    fn preview_view_rounds_height() {
        let v = MockupViewport {
            frame_width: 1000.0,
            frame_height: 601.0,
            content_width: 1440.0,
        };
        let view = PreviewView::new(&v, "Test", "index.html", "example.de");
        assert_eq!(view.content_height, (601.0 / (1000.0 / 1440.0_f64)).round());
    }
}
