//! The bookshop page markup the controller binds to

use super::dom::{Display, Document, Element};

pub mod ids {
    pub const OWNER_AVATAR: &str = "bookshopowner";
    pub const DIALOGUE_PANEL: &str = "dialogueArea";
    pub const NEXT_DIALOGUE: &str = "nextDialogue";
    pub const MODAL_PANEL: &str = "recommendModal";
    pub const CLOSE_DIALOGUE: &str = "closeDialogue";
    pub const CLOSE_MODAL: &str = "closeModal";
    pub const BOOK_INPUT: &str = "bookInput";
    pub const RESULTS: &str = "results";
    pub const SUBMIT: &str = "submitBook";
    pub const CARD_TEMPLATE: &str = "bookCardTemplate";
}

/// Card template content: cover, bold title, emphasised authors
pub fn book_card_template() -> Element {
    let mut cover = Element::new("img");
    cover.set_attribute("src", "");
    cover.set_attribute("alt", "");

    Element::new("template").with_id(ids::CARD_TEMPLATE).with_child(
        Element::new("div")
            .with_class("book-card")
            .with_child(cover)
            .with_child(
                Element::new("div")
                    .with_class("book-info")
                    .with_child(Element::new("strong"))
                    .with_child(Element::new("em")),
            ),
    )
}

/// The full page with every element the controller needs
pub fn bookshop_page() -> Document {
    let mut avatar = Element::new("img").with_id(ids::OWNER_AVATAR);
    avatar.set_attribute("alt", "Bookshop owner");

    let dialogue = Element::new("div")
        .with_id(ids::DIALOGUE_PANEL)
        .with_display(Display::None)
        .with_child(
            Element::new("p").with_text("Looking for your next read? Tell me one you loved."),
        )
        .with_child(Element::new("button").with_id(ids::NEXT_DIALOGUE).with_text("Next"))
        .with_child(
            Element::new("button")
                .with_id(ids::CLOSE_DIALOGUE)
                .with_text("Close"),
        );

    let mut input = Element::new("input").with_id(ids::BOOK_INPUT);
    input.set_attribute("type", "text");
    input.set_attribute("placeholder", "Book title");

    let modal = Element::new("div")
        .with_id(ids::MODAL_PANEL)
        .with_display(Display::None)
        .with_child(Element::new("span").with_id(ids::CLOSE_MODAL).with_text("×"))
        .with_child(input)
        .with_child(Element::new("button").with_id(ids::SUBMIT).with_text("Recommend"))
        .with_child(Element::new("div").with_id(ids::RESULTS));

    Document::new(
        Element::new("body")
            .with_child(avatar)
            .with_child(dialogue)
            .with_child(modal)
            .with_child(book_card_template()),
    )
}
