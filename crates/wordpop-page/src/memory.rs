use std::collections::HashMap;
use std::ops::Range;

use wordpop_core::surface::{Caret, HighlightId, NodeId, PageSurface, PopupId, SurfaceError};
use wordpop_core::theme::{HighlightStyle, PopupStyle};
use wordpop_types::{Point, Rect, Rgb, Size};

/// Markers standing in for the highlight wrapper element. Private-use
/// characters, so they can never collide with word characters.
pub const HIGHLIGHT_OPEN: char = '\u{E000}';
pub const HIGHLIGHT_CLOSE: char = '\u{E001}';

/// In-memory `PageSurface`: a flat list of single-line text nodes on a
/// fixed-metric grid. Backs the runtime tests and the demo command; it
/// models just enough of a page to exercise caret resolution, highlight
/// wrapping (as marker insertion into the node text) and popup geometry.
pub struct MemoryPage {
    viewport: Size,
    background: Rgb,
    nodes: Vec<MemoryNode>,
    highlights: HashMap<u64, HighlightRecord>,
    popups: HashMap<u64, PopupRecord>,
    next_handle: u64,
    measure: Box<dyn Fn(&str) -> Size + Send>,
}

struct MemoryNode {
    text: String,
    origin: Point,
    char_width: f64,
    line_height: f64,
}

impl MemoryNode {
    fn rect(&self) -> Rect {
        Rect::new(
            self.origin.x,
            self.origin.y,
            self.text.chars().count() as f64 * self.char_width,
            self.line_height,
        )
    }
}

struct HighlightRecord {
    node: NodeId,
    /// Span into the unwrapped text, as installed.
    span: Range<usize>,
    prefix_chars: usize,
    span_chars: usize,
    style: HighlightStyle,
}

struct PopupRecord {
    content: String,
    at: Point,
    style: PopupStyle,
}

/// Crude text metrics: ~7px glyphs wrapped at 500px, 18px line height.
fn default_measure(content: &str) -> Size {
    let text_width = content.chars().count() as f64 * 7.0;
    if text_width <= 500.0 {
        Size::new(text_width.max(40.0), 18.0)
    } else {
        let lines = (text_width / 500.0).ceil();
        Size::new(500.0, (lines * 18.0).min(300.0))
    }
}

impl MemoryPage {
    pub fn new(viewport: Size, background: Rgb) -> Self {
        Self {
            viewport,
            background,
            nodes: Vec::new(),
            highlights: HashMap::new(),
            popups: HashMap::new(),
            next_handle: 0,
            measure: Box::new(default_measure),
        }
    }

    /// Replace the popup measurement function; tests use this to pin exact
    /// popup dimensions for placement assertions.
    pub fn with_popup_measure(mut self, measure: impl Fn(&str) -> Size + Send + 'static) -> Self {
        self.measure = Box::new(measure);
        self
    }

    pub fn set_background(&mut self, background: Rgb) {
        self.background = background;
    }

    pub fn add_text(&mut self, text: &str, origin: Point) -> NodeId {
        self.add_text_with_metrics(text, origin, 8.0, 16.0)
    }

    pub fn add_text_with_metrics(
        &mut self,
        text: &str,
        origin: Point,
        char_width: f64,
        line_height: f64,
    ) -> NodeId {
        self.nodes.push(MemoryNode {
            text: text.to_string(),
            origin,
            char_width,
            line_height,
        });
        NodeId(self.nodes.len() as u64 - 1)
    }

    /// Center of the `char_index`-th character cell, for aiming tests.
    pub fn char_point(&self, node: NodeId, char_index: usize) -> Point {
        let node = &self.nodes[node.0 as usize];
        Point::new(
            node.origin.x + (char_index as f64 + 0.5) * node.char_width,
            node.origin.y + node.line_height / 2.0,
        )
    }

    pub fn highlight_count(&self) -> usize {
        self.highlights.len()
    }

    pub fn popup_count(&self) -> usize {
        self.popups.len()
    }

    pub fn only_popup(&self) -> Option<PopupId> {
        match self.popups.keys().collect::<Vec<_>>().as_slice() {
            [id] => Some(PopupId(**id)),
            _ => None,
        }
    }

    pub fn popup_content(&self, popup: PopupId) -> Option<&str> {
        self.popups.get(&popup.0).map(|p| p.content.as_str())
    }

    pub fn popup_at(&self, popup: PopupId) -> Option<Point> {
        self.popups.get(&popup.0).map(|p| p.at)
    }

    pub fn popup_style_of(&self, popup: PopupId) -> Option<PopupStyle> {
        self.popups.get(&popup.0).map(|p| p.style)
    }

    pub fn highlight_style_of(&self, highlight: HighlightId) -> Option<HighlightStyle> {
        self.highlights.get(&highlight.0).map(|h| h.style)
    }

    fn next(&mut self) -> u64 {
        let handle = self.next_handle;
        self.next_handle += 1;
        handle
    }
}

impl PageSurface for MemoryPage {
    fn viewport(&self) -> Size {
        self.viewport
    }

    fn background(&self) -> Rgb {
        self.background
    }

    fn caret_at(&self, point: Point) -> Option<Caret> {
        for (index, node) in self.nodes.iter().enumerate() {
            if !node.rect().contains(point) {
                continue;
            }
            let cell = ((point.x - node.origin.x) / node.char_width).floor() as usize;
            let offset = node
                .text
                .char_indices()
                .map(|(i, _)| i)
                .nth(cell)
                .unwrap_or(node.text.len());
            return Some(Caret {
                node: NodeId(index as u64),
                offset,
            });
        }
        None
    }

    /// The node's current text content. While a highlight is installed the
    /// wrapper markers are part of it, exactly like a wrapper element shows
    /// up in a DOM tree.
    fn node_text(&self, node: NodeId) -> Option<String> {
        self.nodes.get(node.0 as usize).map(|n| n.text.clone())
    }

    fn install_highlight(
        &mut self,
        node: NodeId,
        span: Range<usize>,
        style: &HighlightStyle,
    ) -> Result<HighlightId, SurfaceError> {
        let Some(n) = self.nodes.get_mut(node.0 as usize) else {
            return Err(SurfaceError::NodeGone(node));
        };
        let valid = span.start <= span.end
            && span.end <= n.text.len()
            && n.text.is_char_boundary(span.start)
            && n.text.is_char_boundary(span.end);
        if !valid {
            return Err(SurfaceError::InvalidSpan { node, span });
        }

        let prefix_chars = n.text[..span.start].chars().count();
        let span_chars = n.text[span.clone()].chars().count();

        // Close marker first so the open offset stays valid.
        n.text.insert(span.end, HIGHLIGHT_CLOSE);
        n.text.insert(span.start, HIGHLIGHT_OPEN);

        let id = HighlightId(self.next());
        self.highlights.insert(
            id.0,
            HighlightRecord {
                node,
                span,
                prefix_chars,
                span_chars,
                style: *style,
            },
        );
        Ok(id)
    }

    fn highlight_rect(&self, highlight: HighlightId) -> Option<Rect> {
        let record = self.highlights.get(&highlight.0)?;
        let node = self.nodes.get(record.node.0 as usize)?;
        Some(Rect::new(
            node.origin.x + record.prefix_chars as f64 * node.char_width,
            node.origin.y,
            record.span_chars as f64 * node.char_width,
            node.line_height,
        ))
    }

    fn remove_highlight(&mut self, highlight: HighlightId) {
        let Some(record) = self.highlights.remove(&highlight.0) else {
            return;
        };
        let Some(node) = self.nodes.get_mut(record.node.0 as usize) else {
            return;
        };

        let close = record.span.end + HIGHLIGHT_OPEN.len_utf8();
        if node.text.is_char_boundary(close) && node.text[close..].starts_with(HIGHLIGHT_CLOSE) {
            node.text.remove(close);
        }
        if node.text[record.span.start..].starts_with(HIGHLIGHT_OPEN) {
            node.text.remove(record.span.start);
        }
    }

    fn show_popup(&mut self, style: &PopupStyle, content: &str, at: Point) -> PopupId {
        let id = PopupId(self.next());
        self.popups.insert(
            id.0,
            PopupRecord {
                content: content.to_string(),
                at,
                style: *style,
            },
        );
        id
    }

    fn set_popup_content(&mut self, popup: PopupId, content: &str) {
        if let Some(p) = self.popups.get_mut(&popup.0) {
            p.content = content.to_string();
        }
    }

    fn popup_size(&self, popup: PopupId) -> Option<Size> {
        self.popups.get(&popup.0).map(|p| (self.measure)(&p.content))
    }

    fn popup_rect(&self, popup: PopupId) -> Option<Rect> {
        let p = self.popups.get(&popup.0)?;
        let size = (self.measure)(&p.content);
        Some(Rect::new(p.at.x, p.at.y, size.width, size.height))
    }

    fn move_popup(&mut self, popup: PopupId, to: Point) {
        if let Some(p) = self.popups.get_mut(&popup.0) {
            p.at = to;
        }
    }

    fn remove_popup(&mut self, popup: PopupId) {
        self.popups.remove(&popup.0);
    }
}

#[cfg(test)]
mod tests {
    use wordpop_core::theme::{Theme, highlight_style};

    use super::*;

    fn page() -> MemoryPage {
        MemoryPage::new(Size::new(1280.0, 720.0), Rgb::new(255, 255, 255))
    }

    #[test]
    fn caret_resolves_inside_a_node_only() {
        let mut page = page();
        let node = page.add_text("hello world", Point::new(100.0, 100.0));

        let caret = page.caret_at(page.char_point(node, 6)).unwrap();
        assert_eq!(caret.node, node);
        assert_eq!(caret.offset, 6);

        assert!(page.caret_at(Point::new(5.0, 5.0)).is_none());
        assert!(page.caret_at(Point::new(100.0, 400.0)).is_none());
    }

    #[test]
    fn wrap_then_unwrap_restores_text_byte_for_byte() {
        let mut page = page();
        let original = "pick déjà apart";
        let node = page.add_text(original, Point::new(0.0, 0.0));

        let style = highlight_style(Theme::Light);
        let span = 5..11; // "déjà"
        let id = page.install_highlight(node, span, &style).unwrap();

        let wrapped = page.node_text(node).unwrap();
        assert_ne!(wrapped, original);
        assert!(wrapped.contains(HIGHLIGHT_OPEN));

        page.remove_highlight(id);
        assert_eq!(page.node_text(node).unwrap(), original);
        assert_eq!(page.highlight_count(), 0);
    }

    #[test]
    fn invalid_span_is_rejected() {
        let mut page = page();
        let node = page.add_text("déjà", Point::new(0.0, 0.0));
        let style = highlight_style(Theme::Light);

        // 2 splits the é codepoint; 40 is out of bounds.
        assert!(matches!(
            page.install_highlight(node, 2..4, &style),
            Err(SurfaceError::InvalidSpan { .. })
        ));
        assert!(matches!(
            page.install_highlight(node, 0..40, &style),
            Err(SurfaceError::InvalidSpan { .. })
        ));
        assert!(matches!(
            page.install_highlight(NodeId(9), 0..1, &style),
            Err(SurfaceError::NodeGone(_))
        ));
    }

    #[test]
    fn highlight_rect_tracks_span_cells() {
        let mut page = page();
        let node = page.add_text_with_metrics("abcdef", Point::new(10.0, 20.0), 10.0, 16.0);
        let style = highlight_style(Theme::Light);

        let id = page.install_highlight(node, 2..5, &style).unwrap();
        let rect = page.highlight_rect(id).unwrap();
        assert_eq!(rect, Rect::new(30.0, 20.0, 30.0, 16.0));
    }

    #[test]
    fn popup_rect_follows_content_and_moves() {
        let mut page = page().with_popup_measure(|_| Size::new(200.0, 100.0));
        let style = wordpop_core::theme::popup_style(Theme::Light);

        let popup = page.show_popup(&style, "Loading", Point::new(0.0, 0.0));
        page.move_popup(popup, Point::new(40.0, 50.0));
        assert_eq!(
            page.popup_rect(popup).unwrap(),
            Rect::new(40.0, 50.0, 200.0, 100.0)
        );

        page.remove_popup(popup);
        assert!(page.popup_rect(popup).is_none());
    }
}
