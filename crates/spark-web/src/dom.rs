//! Project cards in the page, read as anchors.

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlCanvasElement};

use spark_engine::{Anchor, AnchorSource};

const CARD_SELECTOR: &str = ".project-card";
const CATEGORY_ATTR: &str = "data-category";
const ID_ATTR: &str = "data-id";
/// Cards whose center lies further than this outside the canvas are ignored.
const OFFSCREEN_MARGIN: f32 = 200.0;

/// Scans `.project-card` elements relative to the canvas.
pub struct DomAnchorSource {
    document: Document,
    canvas: HtmlCanvasElement,
}

impl DomAnchorSource {
    pub fn new(document: Document, canvas: HtmlCanvasElement) -> Self {
        Self { document, canvas }
    }

    fn scan(&self) -> Result<Vec<Anchor>, JsValue> {
        let cards = self.document.query_selector_all(CARD_SELECTOR)?;
        let frame = self.canvas.get_bounding_client_rect();
        let size = Vec2::new(frame.width() as f32, frame.height() as f32);

        let mut anchors = Vec::with_capacity(cards.length() as usize);
        for index in 0..cards.length() {
            let Some(card) = cards.item(index).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let rect = card.get_bounding_client_rect();
            let center = Vec2::new(
                (rect.left() + rect.width() / 2.0 - frame.left()) as f32,
                (rect.top() + rect.height() / 2.0 - frame.top()) as f32,
            );
            if !near_surface(center, size) {
                continue;
            }
            let id = card
                .get_attribute(ID_ATTR)
                .and_then(|v| v.parse().ok())
                .unwrap_or(index);
            let half = Vec2::new(rect.width() as f32, rect.height() as f32) / 2.0;
            let category = card.get_attribute(CATEGORY_ATTR).unwrap_or_default();
            let hovered = card.matches(":hover").unwrap_or(false);
            anchors.push(Anchor::new(id, center, half, category).with_active(hovered));
        }
        Ok(anchors)
    }
}

impl AnchorSource for DomAnchorSource {
    fn snapshot(&mut self) -> Vec<Anchor> {
        match self.scan() {
            Ok(anchors) => anchors,
            Err(err) => {
                log::warn!("card scan failed: {:?}", err);
                Vec::new()
            }
        }
    }
}

/// True when `center` is inside the surface grown by the off-screen margin.
pub fn near_surface(center: Vec2, size: Vec2) -> bool {
    center.x > -OFFSCREEN_MARGIN
        && center.y > -OFFSCREEN_MARGIN
        && center.x < size.x + OFFSCREEN_MARGIN
        && center.y < size.y + OFFSCREEN_MARGIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_just_off_screen_are_kept() {
        let size = Vec2::new(800.0, 600.0);
        assert!(near_surface(Vec2::new(400.0, 300.0), size));
        assert!(near_surface(Vec2::new(-150.0, 300.0), size));
        assert!(near_surface(Vec2::new(400.0, 790.0), size));
    }

    #[test]
    fn cards_far_off_screen_are_skipped() {
        let size = Vec2::new(800.0, 600.0);
        assert!(!near_surface(Vec2::new(-250.0, 300.0), size));
        assert!(!near_surface(Vec2::new(400.0, 1200.0), size));
        assert!(!near_surface(Vec2::new(f32::NAN, 0.0), size));
    }
}
