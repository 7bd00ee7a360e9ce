//! Page interaction controller
//!
//! Owns the document and reacts to clicks: the avatar → dialogue → modal
//! disclosure sequence, and the submit flow that asks the backend for
//! recommendations and renders one card per book.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use super::client::RecommendationApi;
use super::dom::{Display, Document, Element, Node, query_in, query_in_mut};
use super::page::ids;
use crate::models::RecommendedBook;

pub const EMPTY_QUERY_MESSAGE: &str = "Enter a book name!";
pub const LOADING_TEXT: &str = "Loading...";

const CARD_SLOTS: [&str; 3] = ["img", "strong", "em"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// A required element id is absent from the page
    MissingElement(&'static str),
    /// The card template lacks an `img`, `strong` or `em` slot
    NotATemplate(&'static str),
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::MissingElement(id) => write!(f, "Missing page element #{}", id),
            UiError::NotATemplate(id) => {
                write!(f, "#{} must contain img, strong and em elements", id)
            }
        }
    }
}

impl std::error::Error for UiError {}

/// A user action the controller responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    OwnerClicked,
    NextDialogue,
    CloseDialogue,
    CloseModal,
    Submit,
}

impl UiEvent {
    /// Event bound to the trigger with `id`, if any
    pub fn for_trigger(id: &str) -> Option<Self> {
        match id {
            ids::OWNER_AVATAR => Some(UiEvent::OwnerClicked),
            ids::NEXT_DIALOGUE => Some(UiEvent::NextDialogue),
            ids::CLOSE_DIALOGUE => Some(UiEvent::CloseDialogue),
            ids::CLOSE_MODAL => Some(UiEvent::CloseModal),
            ids::SUBMIT => Some(UiEvent::Submit),
            _ => None,
        }
    }
}

/// Visible panels, as observed on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisclosureStage {
    Idle,
    DialogueVisible,
    ModalVisible,
    /// Both panels shown; reachable by clicking the avatar with the modal open
    Overlapping,
}

/// An element id verified to exist when the controller was attached
#[derive(Debug, Clone, Copy)]
struct ElementRef(&'static str);

#[derive(Debug)]
struct Handles {
    dialogue: ElementRef,
    modal: ElementRef,
    input: ElementRef,
    results: ElementRef,
    /// Content of the card template, cloned for each book
    card: Vec<Node>,
}

impl Handles {
    fn resolve(document: &Document) -> Result<Self, UiError> {
        let require = |id: &'static str| -> Result<ElementRef, UiError> {
            document
                .get_element_by_id(id)
                .map(|_| ElementRef(id))
                .ok_or(UiError::MissingElement(id))
        };

        // Triggers are dispatched by id; they only need to exist
        for trigger in [
            ids::OWNER_AVATAR,
            ids::NEXT_DIALOGUE,
            ids::CLOSE_DIALOGUE,
            ids::CLOSE_MODAL,
            ids::SUBMIT,
        ] {
            require(trigger)?;
        }

        let dialogue = require(ids::DIALOGUE_PANEL)?;
        let modal = require(ids::MODAL_PANEL)?;
        let input = require(ids::BOOK_INPUT)?;
        let results = require(ids::RESULTS)?;

        let card = document
            .get_element_by_id(ids::CARD_TEMPLATE)
            .ok_or(UiError::MissingElement(ids::CARD_TEMPLATE))?
            .children
            .clone();
        if CARD_SLOTS.iter().any(|slot| query_in(&card, slot).is_none()) {
            return Err(UiError::NotATemplate(ids::CARD_TEMPLATE));
        }

        Ok(Self {
            dialogue,
            modal,
            input,
            results,
            card,
        })
    }
}

pub struct InteractionController {
    document: Mutex<Document>,
    handles: Handles,
    api: Arc<dyn RecommendationApi>,
    /// Token of the most recent submit; older responses are dropped
    latest_request: AtomicU64,
}

impl InteractionController {
    /// Bind to `document`, failing on the first missing element
    pub fn attach(document: Document, api: Arc<dyn RecommendationApi>) -> Result<Self, UiError> {
        let handles = Handles::resolve(&document)?;
        Ok(Self {
            document: Mutex::new(document),
            handles,
            api,
            latest_request: AtomicU64::new(0),
        })
    }

    /// Click on the element with `id`; ids without a handler are ignored
    pub async fn click(&self, id: &str) {
        match UiEvent::for_trigger(id) {
            Some(event) => self.handle(event).await,
            None => tracing::trace!("No handler bound to #{}", id),
        }
    }

    pub async fn handle(&self, event: UiEvent) {
        tracing::debug!("UI event: {:?}", event);
        match event {
            UiEvent::OwnerClicked => self.show_dialogue(),
            UiEvent::NextDialogue => self.open_modal(),
            UiEvent::CloseDialogue => self.close_dialogue(),
            UiEvent::CloseModal => self.close_modal(),
            UiEvent::Submit => self.submit().await,
        }
    }

    /// Type into the book input
    pub fn set_input(&self, value: impl Into<String>) {
        let value = value.into();
        self.with_element(self.handles.input, |input| input.value = value);
    }

    pub fn show_dialogue(&self) {
        self.with_element(self.handles.dialogue, |d| d.set_display(Display::Block));
    }

    pub fn open_modal(&self) {
        let mut doc = self.lock();
        if let Some(d) = doc.get_element_by_id_mut(self.handles.dialogue.0) {
            d.set_display(Display::None);
        }
        if let Some(m) = doc.get_element_by_id_mut(self.handles.modal.0) {
            m.set_display(Display::Flex);
        }
    }

    pub fn close_dialogue(&self) {
        self.with_element(self.handles.dialogue, |d| d.set_display(Display::None));
    }

    /// Hide the modal and reset the input and results
    pub fn close_modal(&self) {
        let mut doc = self.lock();
        if let Some(m) = doc.get_element_by_id_mut(self.handles.modal.0) {
            m.set_display(Display::None);
        }
        if let Some(input) = doc.get_element_by_id_mut(self.handles.input.0) {
            input.value.clear();
        }
        if let Some(results) = doc.get_element_by_id_mut(self.handles.results.0) {
            results.replace_children(Vec::new());
        }
    }

    pub async fn submit(&self) {
        let title = self
            .read_element(self.handles.input, |input| input.value.trim().to_string())
            .unwrap_or_default();

        if title.is_empty() {
            self.show_error(EMPTY_QUERY_MESSAGE);
            return;
        }

        let token = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
        self.replace_results(vec![Node::text(LOADING_TEXT)]);

        let outcome = self.api.recommend(&title).await;

        if self.latest_request.load(Ordering::SeqCst) != token {
            tracing::debug!("Dropping stale response for '{}' (request {})", title, token);
            return;
        }

        match outcome {
            Ok(books) => {
                tracing::debug!("Rendering {} recommendations for '{}'", books.len(), title);
                let cards = books.iter().flat_map(|b| self.render_card(b)).collect();
                self.replace_results(cards);
            }
            Err(e) => {
                tracing::warn!("Recommendation request for '{}' failed: {}", title, e);
                self.show_error(e.display_message());
            }
        }
    }

    pub fn disclosure_stage(&self) -> DisclosureStage {
        let doc = self.lock();
        let shown = |r: ElementRef| doc.get_element_by_id(r.0).is_some_and(Element::is_visible);
        match (shown(self.handles.dialogue), shown(self.handles.modal)) {
            (false, false) => DisclosureStage::Idle,
            (true, false) => DisclosureStage::DialogueVisible,
            (false, true) => DisclosureStage::ModalVisible,
            (true, true) => DisclosureStage::Overlapping,
        }
    }

    pub fn is_dialogue_visible(&self) -> bool {
        self.read_element(self.handles.dialogue, Element::is_visible)
            .unwrap_or(false)
    }

    pub fn is_modal_visible(&self) -> bool {
        self.read_element(self.handles.modal, Element::is_visible)
            .unwrap_or(false)
    }

    pub fn input_value(&self) -> String {
        self.read_element(self.handles.input, |i| i.value.clone())
            .unwrap_or_default()
    }

    /// Snapshot of the results container
    pub fn results(&self) -> Element {
        self.read_element(self.handles.results, Element::clone)
            .unwrap_or_else(|| Element::new("div"))
    }

    /// Snapshot of the whole page
    pub fn document(&self) -> Document {
        self.lock().clone()
    }

    fn render_card(&self, book: &RecommendedBook) -> Vec<Node> {
        let mut card = self.handles.card.clone();
        if let Some(img) = query_in_mut(&mut card, "img") {
            img.set_attribute("src", book.thumbnail.as_str());
            img.set_attribute("alt", book.title.as_str());
        }
        if let Some(title) = query_in_mut(&mut card, "strong") {
            title.set_text_content(book.title.as_str());
        }
        if let Some(authors) = query_in_mut(&mut card, "em") {
            authors.set_text_content(book.authors.as_str());
        }
        card
    }

    fn show_error(&self, message: &str) {
        let error = Element::new("p").with_class("error-message").with_text(message);
        self.replace_results(vec![error.into()]);
    }

    fn replace_results(&self, children: Vec<Node>) {
        self.with_element(self.handles.results, |r| r.replace_children(children));
    }

    fn lock(&self) -> MutexGuard<'_, Document> {
        self.document.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn with_element(&self, r: ElementRef, f: impl FnOnce(&mut Element)) {
        match self.lock().get_element_by_id_mut(r.0) {
            Some(el) => f(el),
            None => tracing::warn!("Element #{} disappeared from the page", r.0),
        }
    }

    fn read_element<T>(&self, r: ElementRef, f: impl FnOnce(&Element) -> T) -> Option<T> {
        self.lock().get_element_by_id(r.0).map(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::client::ClientError;
    use crate::frontend::page::bookshop_page;
    use async_trait::async_trait;

    struct NoBackend;

    #[async_trait]
    impl RecommendationApi for NoBackend {
        async fn recommend(&self, _title: &str) -> Result<Vec<RecommendedBook>, ClientError> {
            Err(ClientError::Transport("offline".to_string()))
        }
    }

    fn controller() -> InteractionController {
        InteractionController::attach(bookshop_page(), Arc::new(NoBackend)).unwrap()
    }

    #[test]
    fn triggers_map_to_events() {
        assert_eq!(UiEvent::for_trigger("submitBook"), Some(UiEvent::Submit));
        assert_eq!(UiEvent::for_trigger("closeModal"), Some(UiEvent::CloseModal));
        assert_eq!(UiEvent::for_trigger("results"), None);
    }

    #[test]
    fn attach_fails_fast_on_missing_element() {
        let mut page = bookshop_page();
        if let Some(modal) = page.get_element_by_id_mut(ids::MODAL_PANEL) {
            modal.children.retain(|n| match n {
                Node::Element(e) => e.id.as_deref() != Some(ids::RESULTS),
                Node::Text(_) => true,
            });
        }

        let err = InteractionController::attach(page, Arc::new(NoBackend)).err();
        assert_eq!(err, Some(UiError::MissingElement(ids::RESULTS)));
    }

    #[test]
    fn attach_rejects_template_without_slots() {
        let mut page = bookshop_page();
        if let Some(t) = page.get_element_by_id_mut(ids::CARD_TEMPLATE) {
            t.replace_children(vec![Element::new("div").with_child(Element::new("img")).into()]);
        }

        let err = InteractionController::attach(page, Arc::new(NoBackend)).err();
        assert_eq!(err, Some(UiError::NotATemplate(ids::CARD_TEMPLATE)));
    }

    #[test]
    fn avatar_while_modal_open_overlaps_panels() {
        let c = controller();
        c.show_dialogue();
        c.open_modal();
        c.show_dialogue();
        assert_eq!(c.disclosure_stage(), DisclosureStage::Overlapping);
    }

    #[tokio::test]
    async fn transport_failure_renders_fallback_message() {
        let c = controller();
        c.set_input("Dune");
        c.submit().await;

        let results = c.results();
        assert_eq!(results.text_content(), crate::frontend::FALLBACK_ERROR_MESSAGE);
        assert_eq!(
            results.child_elements().next().and_then(|e| e.class.as_deref()),
            Some("error-message")
        );
    }
}
