//! HUD module - named display elements shown next to the board
//!
//! The HUD is a tiny document model: elements are looked up by id, carry a line
//! of visible text and an inline display style. Writers that address an id the
//! HUD does not have are silently ignored.

/// Element id of the score counter
pub const SCORE: &str = "score";
/// Element id of the level counter
pub const LEVEL: &str = "level";
/// Element id of the cleared-lines counter
pub const LINES: &str = "lines";
/// Element id of the Play control
pub const PLAY_BTN: &str = "play-btn";
/// Element id of the Pause control
pub const PAUSE_BTN: &str = "pause-btn";

/// Inline display style of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    /// No inline style; the element's default visibility applies ("not yet started").
    #[default]
    Initial,
    /// Hidden (`"none"`)
    None,
    /// Shown (`"block"`)
    Block,
}

impl Display {
    pub fn as_str(&self) -> &'static str {
        match self {
            Display::Initial => "",
            Display::None => "none",
            Display::Block => "block",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    id: &'static str,
    text: String,
    display: Display,
    visible_by_default: bool,
}

impl Element {
    pub fn new(id: &'static str, text: impl Into<String>, visible_by_default: bool) -> Self {
        Self {
            id,
            text: text.into(),
            display: Display::Initial,
            visible_by_default,
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn display(&self) -> Display {
        self.display
    }

    pub fn set_display(&mut self, display: Display) {
        self.display = display;
    }

    pub fn is_visible(&self) -> bool {
        match self.display {
            Display::Initial => self.visible_by_default,
            Display::None => false,
            Display::Block => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hud {
    elements: Vec<Element>,
}

impl Hud {
    /// The standard layout: three counters, a Play control shown before the
    /// first game and a Pause control hidden until a game runs.
    pub fn new() -> Self {
        Self::empty()
            .with(Element::new(SCORE, "0", true))
            .with(Element::new(LEVEL, "0", true))
            .with(Element::new(LINES, "0", true))
            .with(Element::new(PLAY_BTN, "Play", true))
            .with(Element::new(PAUSE_BTN, "Pause", false))
    }

    pub fn empty() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Add an element, replacing one with the same id.
    pub fn with(mut self, element: Element) -> Self {
        self.elements.retain(|e| e.id != element.id);
        self.elements.push(element);
        self
    }

    /// Remove an element by id.
    pub fn without(mut self, id: &str) -> Self {
        self.elements.retain(|e| e.id != id);
        self
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.element(id).map(Element::text)
    }

    /// Inline display of `id`; `Initial` for unknown ids.
    pub fn display(&self, id: &str) -> Display {
        self.element(id).map(Element::display).unwrap_or_default()
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.element(id).is_some_and(Element::is_visible)
    }

    /// Write visible text into `id`. Returns false when there is no such element.
    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> bool {
        match self.element_mut(id) {
            Some(e) => {
                e.set_text(text);
                true
            }
            None => false,
        }
    }

    /// Set the inline display of `id`. Returns false when there is no such element.
    pub fn set_display(&mut self, id: &str, display: Display) -> bool {
        match self.element_mut(id) {
            Some(e) => {
                e.set_display(display);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_layout_shows_play_and_hides_pause() {
        let hud = Hud::new();
        assert!(hud.is_visible(PLAY_BTN));
        assert!(!hud.is_visible(PAUSE_BTN));
        assert_eq!(hud.display(PLAY_BTN), Display::Initial);
        assert_eq!(hud.text(SCORE), Some("0"));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut hud = Hud::new().without(LINES);
        assert!(!hud.set_text(LINES, "4"));
        assert!(!hud.set_display("nope", Display::Block));
        assert_eq!(hud.text(LINES), None);
        assert_eq!(hud.display("nope"), Display::Initial);
        assert!(!hud.is_visible("nope"));
    }

    #[test]
    fn display_overrides_default_visibility() {
        let mut hud = Hud::new();
        hud.set_display(PAUSE_BTN, Display::Block);
        hud.set_display(PLAY_BTN, Display::None);
        assert!(hud.is_visible(PAUSE_BTN));
        assert!(!hud.is_visible(PLAY_BTN));

        hud.set_display(PLAY_BTN, Display::Initial);
        assert!(hud.is_visible(PLAY_BTN));
        assert_eq!(Display::Initial.as_str(), "");
        assert_eq!(Display::Block.as_str(), "block");
    }

    #[test]
    fn with_replaces_same_id() {
        let hud = Hud::new().with(Element::new(SCORE, "x", false));
        assert_eq!(hud.elements().iter().filter(|e| e.id() == SCORE).count(), 1);
        assert_eq!(hud.text(SCORE), Some("x"));
    }
}
