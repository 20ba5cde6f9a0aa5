use crate::constants::*;
use crate::core::{hero_style_for, Entity, PowerReadout, CHARACTERS, SAGAS};
use crate::dom;
use crate::page::{PageState, QueuedCardImage, SharedPage};
use web_sys as web;

#[inline]
pub fn card_id(index: usize) -> String {
    format!("card-{}", index)
}

// ---------------- Gallery ----------------

fn build_card(document: &web::Document, index: usize, entity: &Entity) -> anyhow::Result<web::Element> {
    let card = dom::create_element(document, "div", "card")?;
    card.set_id(&card_id(index));

    let banner = dom::create_element(document, "div", "card-banner")?;
    dom::set_style(&banner, "background", &entity.color_tag.css_gradient());
    if entity.has_image() {
        let img = dom::create_element(document, "img", "card-image")?;
        _ = img.set_attribute("src", entity.image_ref);
        _ = img.set_attribute("alt", entity.name);
        _ = img.set_attribute("loading", "lazy");
        dom::append(&banner, &img)?;
    }
    dom::append(&card, &banner)?;

    let name = dom::create_element(document, "h3", "card-name")?;
    name.set_text_content(Some(entity.name));
    dom::append(&card, &name)?;

    let desc = dom::create_element(document, "p", "card-desc")?;
    desc.set_text_content(Some(entity.description));
    dom::append(&card, &desc)?;

    let power = dom::create_element(document, "span", "card-power")?;
    power.set_text_content(Some(entity.display_power));
    dom::append(&card, &power)?;

    let tags = dom::create_element(document, "ul", "card-tags")?;
    for tag in entity.tags {
        let li = dom::create_element(document, "li", "card-tag")?;
        li.set_text_content(Some(tag));
        dom::append(&tags, &li)?;
    }
    dom::append(&card, &tags)?;
    Ok(card)
}

/// Fill `#gallery` with one card per character; clicking a card opens the
/// 3D viewer on it.
pub fn build_gallery(
    document: &web::Document,
    page: &SharedPage,
    queued: &QueuedCardImage,
) -> anyhow::Result<()> {
    let gallery = document
        .get_element_by_id(GALLERY_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", GALLERY_ID))?;
    for (i, entity) in CHARACTERS.iter().enumerate() {
        let card = build_card(document, i, entity)?;
        let page = page.clone();
        let queued = queued.clone();
        dom::add_element_click(&card, move || crate::page::open_viewer(&page, &queued, i));
        dom::append(&gallery, &card)?;
    }
    log::info!("[sections] gallery built with {} cards", CHARACTERS.len());
    Ok(())
}

// ---------------- Sagas ----------------

pub fn build_saga_buttons(document: &web::Document, page: &SharedPage) -> anyhow::Result<()> {
    let container = document
        .get_element_by_id(SAGA_BUTTONS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", SAGA_BUTTONS_ID))?;
    for (i, saga) in SAGAS.iter().enumerate() {
        let button = dom::create_element(document, "button", "saga-button")?;
        button.set_text_content(Some(saga.name));
        let page = page.clone();
        dom::add_element_click(&button, move || {
            if page.borrow_mut().sagas.select(i) {
                if let Some(document) = dom::window_document() {
                    render_saga(&document, i);
                }
            }
        });
        dom::append(&container, &button)?;
    }
    render_saga(document, page.borrow().sagas.active_index());
    Ok(())
}

/// Show saga `active` in the detail panel and highlight its button.
pub fn render_saga(document: &web::Document, active: usize) {
    let Some(saga) = SAGAS.get(active) else {
        return;
    };
    dom::set_text(document, SAGA_TITLE_ID, saga.name);
    dom::set_text(document, SAGA_DESC_ID, saga.description);
    dom::set_text(
        document,
        SAGA_EPISODES_ID,
        &format!("Episodes {}", saga.display_power),
    );
    dom::set_style_by_id(
        document,
        SAGA_PREVIEW_ID,
        "background",
        &saga.color_tag.css_gradient(),
    );
    if let Some(container) = document.get_element_by_id(SAGA_BUTTONS_ID) {
        let buttons = container.children();
        for i in 0..buttons.length() {
            if let Some(b) = buttons.item(i) {
                _ = b.class_list().toggle_with_force("active", i as usize == active);
            }
        }
    }
}

// ---------------- Scroll-driven updates ----------------

/// Sample scroll metrics and push every derived value into the DOM.
pub fn apply_scroll(window: &web::Window, document: &web::Document, page: &mut PageState) {
    let vh = dom::viewport_height();

    if page.scroll.sample(dom::scroll_metrics(window, document)) {
        dom::set_style_by_id(
            document,
            PROGRESS_FILL_ID,
            "width",
            &format!("{:.2}%", page.scroll.progress_percent()),
        );
        dom::set_style_by_id(
            document,
            INDICATOR_RING_ID,
            "transform",
            &format!("rotate({:.1}deg)", page.scroll.indicator_degrees()),
        );
    }

    if let Some(rect) = dom::rect_by_id(document, HERO_ID) {
        let style = hero_style_for(&rect);
        if let Some(el) = document.get_element_by_id(HERO_ID) {
            dom::set_style(&el, "opacity", &format!("{:.3}", style.opacity));
            dom::set_style(&el, "transform", &format!("scale({:.3})", style.scale));
        }
    }

    if let Some(rect) = dom::rect_by_id(document, POWER_SECTION_ID) {
        let readout = PowerReadout::for_section(&rect, vh);
        let formatted = readout.formatted();
        dom::set_text(document, POWER_VALUE_ID, &formatted);
        dom::set_text(document, POWER_BATTLE_ID, &formatted);
        dom::set_text(document, POWER_STATUS_ID, readout.status());
        dom::set_text(document, POWER_TIER_ID, readout.tier.label());
        dom::set_style_by_id(
            document,
            POWER_BAR_ID,
            "width",
            &format!("{:.2}%", readout.bar_percent()),
        );
    }

    for i in 0..CHARACTERS.len() {
        if page.reveal.is_revealed(i) {
            continue;
        }
        if let Some(card) = document.get_element_by_id(&card_id(i)) {
            if page.reveal.observe(i, &dom::element_rect(&card), vh) {
                _ = card.class_list().add_1("revealed");
            }
        }
    }
}
