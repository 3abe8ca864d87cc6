use std::ops::Range;

use wordpop_types::{Point, Rect, Rgb, Size};

use crate::theme::{HighlightStyle, PopupStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HighlightId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PopupId(pub u64);

/// A screen coordinate resolved to a text node and a byte offset into its
/// text. Offsets always lie on char boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caret {
    pub node: NodeId,
    pub offset: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("text node {0:?} no longer exists")]
    NodeGone(NodeId),

    #[error("span {span:?} is out of bounds for node {node:?}")]
    InvalidSpan { node: NodeId, span: Range<usize> },
}

/// Host boundary: everything the lookup engine needs from the rendered page.
///
/// The production implementation lives in the embedding host; `MemoryPage`
/// in `wordpop-page` backs tests and the demo command. Query methods return
/// `None` once a handle has been removed.
pub trait PageSurface: Send {
    fn viewport(&self) -> Size;

    /// Computed background color of the page body, for theme classification.
    fn background(&self) -> Rgb;

    /// Resolve a viewport coordinate to a caret position, or `None` when the
    /// coordinate does not land on any text node.
    fn caret_at(&self, point: Point) -> Option<Caret>;

    fn node_text(&self, node: NodeId) -> Option<String>;

    /// Wrap the byte span of the node in a highlight marker. Removal must
    /// restore the node's text content byte-for-byte.
    fn install_highlight(
        &mut self,
        node: NodeId,
        span: Range<usize>,
        style: &HighlightStyle,
    ) -> Result<HighlightId, SurfaceError>;

    fn highlight_rect(&self, highlight: HighlightId) -> Option<Rect>;

    fn remove_highlight(&mut self, highlight: HighlightId);

    /// Mount a popup with the given HTML content at an absolute position.
    fn show_popup(&mut self, style: &PopupStyle, content: &str, at: Point) -> PopupId;

    /// Replace popup content. Dimensions may change; callers re-run placement.
    fn set_popup_content(&mut self, popup: PopupId, content: &str);

    fn popup_size(&self, popup: PopupId) -> Option<Size>;

    fn popup_rect(&self, popup: PopupId) -> Option<Rect>;

    fn move_popup(&mut self, popup: PopupId, to: Point);

    fn remove_popup(&mut self, popup: PopupId);
}
