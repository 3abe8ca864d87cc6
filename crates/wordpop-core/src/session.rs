use std::ops::Range;

use wordpop_types::Point;

use crate::placement::place_popup;
use crate::surface::{Caret, HighlightId, PageSurface, PopupId};
use crate::theme::{classify_theme, highlight_style, popup_style};
use crate::word::word_span;

/// A resolved word under a coordinate. `word` may be empty when the caret
/// has no adjacent word characters; callers treat that as a failed lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordHit {
    pub caret: Caret,
    pub span: Range<usize>,
    pub word: String,
}

/// Handed to the fetcher when a lookup starts; the generation ties the
/// eventual response back to this cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupStart {
    pub word: String,
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    HighlightInstalled,
    PopupLoading,
    PopupRendered,
}

#[derive(Debug)]
pub struct ActiveLookup {
    word: String,
    generation: u64,
    highlight: HighlightId,
    popup: Option<PopupId>,
    phase: Phase,
}

impl ActiveLookup {
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn highlight(&self) -> HighlightId {
        self.highlight
    }

    pub fn popup(&self) -> Option<PopupId> {
        self.popup
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}

/// Lookup session state: last pointer position, the single active
/// highlight/popup pair, and the lookup generation counter. All mutation
/// happens through a `PageSurface`, so the session itself never touches a
/// live rendering tree.
#[derive(Debug, Default)]
pub struct Session {
    pointer: Point,
    generation: u64,
    active: Option<ActiveLookup>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn active(&self) -> Option<&ActiveLookup> {
        self.active.as_ref()
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_none()
    }

    /// Called on every pointer move. Updates the tracked position and tears
    /// the active pair down once the pointer has left both the highlight's
    /// and the popup's bounding rectangles.
    pub fn pointer_moved(&mut self, surface: &mut dyn PageSurface, point: Point) {
        self.pointer = point;

        let Some(active) = &self.active else { return };

        let inside_highlight = surface
            .highlight_rect(active.highlight)
            .is_some_and(|rect| rect.contains(point));
        let inside_popup = active
            .popup
            .and_then(|popup| surface.popup_rect(popup))
            .is_some_and(|rect| rect.contains(point));

        if !inside_highlight && !inside_popup {
            self.teardown(surface);
        }
    }

    /// Map a coordinate to the enclosing word. `None` when the coordinate
    /// resolves to no caret or no text node.
    pub fn resolve_word_at(surface: &dyn PageSurface, point: Point) -> Option<WordHit> {
        let caret = surface.caret_at(point)?;
        let text = surface.node_text(caret.node)?;
        let span = word_span(&text, caret.offset);
        let word = text[span.clone()].to_string();
        Some(WordHit { caret, span, word })
    }

    /// Start a lookup cycle at the given coordinate: tear down any active
    /// pair, resolve the word, install the highlight over its exact span and
    /// mount the loading popup. Returns `None` (with no visible side effects
    /// beyond the teardown) when nothing lookupable is under the coordinate.
    pub fn begin_lookup(
        &mut self,
        surface: &mut dyn PageSurface,
        point: Point,
        loading_content: &str,
    ) -> Option<LookupStart> {
        self.teardown(surface);

        let hit = Self::resolve_word_at(surface, point)?;
        if hit.word.is_empty() {
            return None;
        }

        let theme = classify_theme(surface.background());
        let highlight = surface
            .install_highlight(hit.caret.node, hit.span.clone(), &highlight_style(theme))
            .ok()?;

        self.generation += 1;
        self.active = Some(ActiveLookup {
            word: hit.word.clone(),
            generation: self.generation,
            highlight,
            popup: None,
            phase: Phase::HighlightInstalled,
        });

        let popup = surface.show_popup(&popup_style(theme), loading_content, Point::default());
        Self::position(surface, highlight, popup);

        if let Some(active) = self.active.as_mut() {
            active.popup = Some(popup);
            active.phase = Phase::PopupLoading;
        }

        Some(LookupStart {
            word: hit.word,
            generation: self.generation,
        })
    }

    /// Project a fetch result into the popup. Returns `false` without
    /// touching the surface when the generation no longer matches the active
    /// lookup, which is how superseded responses are dropped.
    pub fn render_result(
        &mut self,
        surface: &mut dyn PageSurface,
        generation: u64,
        content: &str,
    ) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        if active.generation != generation {
            return false;
        }
        let Some(popup) = active.popup else {
            return false;
        };

        surface.set_popup_content(popup, content);
        active.phase = Phase::PopupRendered;

        // Content replacement changes dimensions, so placement runs again.
        let highlight = active.highlight;
        Self::position(surface, highlight, popup);
        true
    }

    /// Atomic cleanup: popup and highlight go together, from any phase.
    pub fn teardown(&mut self, surface: &mut dyn PageSurface) {
        if let Some(active) = self.active.take() {
            if let Some(popup) = active.popup {
                surface.remove_popup(popup);
            }
            surface.remove_highlight(active.highlight);
        }
    }

    fn position(surface: &mut dyn PageSurface, highlight: HighlightId, popup: PopupId) {
        let (Some(anchor), Some(size)) = (surface.highlight_rect(highlight), surface.popup_size(popup))
        else {
            return;
        };
        let to = place_popup(anchor, size, surface.viewport());
        surface.move_popup(popup, to);
    }
}
