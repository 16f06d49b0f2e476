use folio_core::{
    BodyElement, DocumentState, Key, LightboxClick, ModalClick, Page, Project, RenderConfig,
    UiEvent,
};
use serde_json::json;

fn gallery_page() -> Page {
    let projects: Vec<Project> = serde_json::from_value(json!([
        {
            "id": "atlas",
            "title": "Atlas",
            "year": 2024,
            "tags": ["maps", "ui"],
            "hero": "atlas/hero.jpg",
            "sections": {
                "media": {
                    "label": "Screens",
                    "images": [
                        {"src": "atlas/one.png", "caption": "Overview map"},
                        {"src": "atlas/two.png"}
                    ]
                },
                "technical": ["tiling", "caching"],
                "overview": "A map explorer."
            }
        },
        {
            "id": "ledger",
            "title": "Ledger",
            "year": "2021–2022",
            "tags": ["data"],
            "sections": [
                {"id": "role", "value": "Lead engineer"},
                {"id": "overview", "value": "Bookkeeping tool."}
            ]
        }
    ]))
    .unwrap();
    Page::with_document(projects, RenderConfig::default(), DocumentState::with_year(2026))
}

#[test]
fn card_click_opens_modal_with_record_content() {
    let mut page = gallery_page();
    page.dispatch(UiEvent::CardClicked("atlas".to_string()));

    assert!(page.modal().is_open());
    assert!(page.document().scroll_locked);
    let content = page.modal().content().unwrap();
    assert_eq!(content.eyebrow, "2024");
    assert_eq!(content.title, "Atlas");
    assert_eq!(
        content.tags_html,
        "<span class=\"modal-tag\">maps</span><span class=\"modal-tag\">ui</span>"
    );
    let hero = "<div class=\"modal-hero-wrap\"><img class=\"modal-hero\" src=\"media/atlas/hero.jpg\"";
    assert!(content.body_html.starts_with(hero));

    let overview = content.body_html.find("Project Overview").unwrap();
    let technical = content.body_html.find("Technical Focus").unwrap();
    let media = content.body_html.find(">Screens</div>").unwrap();
    assert!(overview < technical && technical < media);
    assert_eq!(content.thumbnails().len(), 2);
}

#[test]
fn reopening_replaces_previous_content() {
    let mut page = gallery_page();
    page.dispatch(UiEvent::CardClicked("atlas".to_string()));
    page.dispatch(UiEvent::CardClicked("ledger".to_string()));

    let content = page.modal().content().unwrap();
    assert_eq!(content.project_id, "ledger");
    assert!(!content.body_html.contains("Screens"));
    assert!(!content.body_html.contains("modal-hero"));
    assert!(content.thumbnails().is_empty());

    let role = content.body_html.find("My Role & Engagement").unwrap();
    let overview = content.body_html.find("Project Overview").unwrap();
    assert!(role < overview);
}

#[test]
fn thumbnail_click_is_delegated_to_lightbox() {
    let mut page = gallery_page();
    page.dispatch(UiEvent::CardClicked("atlas".to_string()));

    page.dispatch(UiEvent::Modal(ModalClick::Content(BodyElement::Other)));
    assert!(!page.lightbox().is_open());
    assert!(page.modal().is_open());

    page.dispatch(UiEvent::Modal(ModalClick::Content(BodyElement::Thumbnail(0))));
    assert!(page.lightbox().is_open());
    assert_eq!(page.lightbox().src(), "media/atlas/one.png");
    assert_eq!(page.lightbox().caption(), "Overview map");

    page.dispatch(UiEvent::Lightbox(LightboxClick::Image));
    assert!(page.lightbox().is_open());

    page.dispatch(UiEvent::Lightbox(LightboxClick::Backdrop));
    assert!(!page.lightbox().is_open());
    assert_eq!(page.lightbox().src(), "");
    assert!(page.modal().is_open());
    assert!(page.document().scroll_locked);

    page.dispatch(UiEvent::Modal(ModalClick::Content(BodyElement::Thumbnail(1))));
    assert_eq!(page.lightbox().caption(), "");
    page.dispatch(UiEvent::Lightbox(LightboxClick::CloseButton));
    assert!(!page.lightbox().is_open());
}

#[test]
fn backdrop_closes_modal_but_content_clicks_do_not() {
    let mut page = gallery_page();
    page.dispatch(UiEvent::CardClicked("ledger".to_string()));

    page.dispatch(UiEvent::Modal(ModalClick::Content(BodyElement::Other)));
    assert!(page.modal().is_open());

    page.dispatch(UiEvent::Modal(ModalClick::Backdrop));
    assert!(!page.modal().is_open());
    assert!(!page.document().scroll_locked);

    page.dispatch(UiEvent::CardClicked("ledger".to_string()));
    page.dispatch(UiEvent::Modal(ModalClick::CloseButton));
    assert!(!page.modal().is_open());
}

#[test]
fn escape_closes_both_overlays_and_is_safe_when_closed() {
    let mut page = gallery_page();
    page.dispatch(UiEvent::KeyDown(Key::Escape));
    assert!(!page.modal().is_open());
    assert!(!page.lightbox().is_open());
    assert!(!page.document().scroll_locked);

    page.dispatch(UiEvent::CardClicked("atlas".to_string()));
    page.dispatch(UiEvent::Modal(ModalClick::Content(BodyElement::Thumbnail(0))));
    assert!(page.lightbox().is_open());

    page.dispatch(UiEvent::KeyDown(Key::from_name("Escape")));
    assert!(!page.lightbox().is_open());
    assert!(!page.modal().is_open());
    assert!(!page.document().scroll_locked);
}

#[test]
fn other_keys_and_unknown_cards_are_ignored() {
    let mut page = gallery_page();
    page.dispatch(UiEvent::CardClicked("missing".to_string()));
    assert!(!page.modal().is_open());

    page.dispatch(UiEvent::CardClicked("atlas".to_string()));
    page.dispatch(UiEvent::KeyDown(Key::from_name("Enter")));
    assert!(page.modal().is_open());
}

#[test]
fn closing_modal_also_closes_lightbox() {
    let mut page = gallery_page();
    page.dispatch(UiEvent::CardClicked("atlas".to_string()));
    page.dispatch(UiEvent::Modal(ModalClick::Content(BodyElement::Thumbnail(1))));
    page.dispatch(UiEvent::Modal(ModalClick::CloseButton));
    assert!(!page.lightbox().is_open());
    assert!(!page.modal().is_open());
}

#[test]
fn footer_year_comes_from_document_state() {
    assert_eq!(gallery_page().document().footer_year, 2026);
}
