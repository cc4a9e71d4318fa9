// View-builder seam between card logic and the node representation.
// `build_card` only talks to this trait, so it can be driven by the retained
// element tree (`ElementBuilder`) or by anything a test wants to record.

use crate::types::NavDirection;
use crate::views::dom::{Element, Tag};

/// Class names of the card parts; the egui painter looks them up.
pub mod class {
    pub const CARD: &str = "hotel-card";
    pub const MEDIA: &str = "hotel-card__media";
    pub const BADGE: &str = "hotel-card__badge";
    pub const IMAGE: &str = "hotel-card__image";
    pub const NAV: &str = "hotel-card__nav";
    pub const BODY: &str = "hotel-card__cuerpo";
    pub const TITLE: &str = "hotel-card__titulo";
    pub const META: &str = "hotel-card__meta";
    pub const RATING: &str = "hotel-card__rating";
    pub const STARS: &str = "hotel-card__stars";
    pub const STAR: &str = "hotel-card__star";
    pub const CITY: &str = "hotel-card__ciudad";
    pub const DESCRIPTION: &str = "hotel-card__descripcion";

    /// Modifier class of one navigation button, e.g. `hotel-card__nav--prev`.
    pub fn nav_modifier(direction: crate::types::NavDirection) -> String {
        format!("{NAV}--{direction}")
    }
}

pub trait CardViewBuilder {
    type Node;

    fn card(&mut self) -> Self::Node;
    fn media(&mut self) -> Self::Node;
    fn badge(&mut self, text: &str) -> Self::Node;
    fn image(&mut self, src: &str, alt: &str) -> Self::Node;
    fn nav_button(&mut self, direction: NavDirection, label: &str, hidden: bool) -> Self::Node;
    fn body(&mut self) -> Self::Node;
    fn title(&mut self, text: &str) -> Self::Node;
    fn meta(&mut self) -> Self::Node;
    fn star_rating(&mut self, stars: u32, label: &str, icon: &str) -> Self::Node;
    fn text_rating(&mut self, text: &str) -> Self::Node;
    fn city(&mut self, text: &str) -> Self::Node;
    fn description(&mut self, text: &str) -> Self::Node;
    fn append(&mut self, parent: &mut Self::Node, child: Self::Node);
}

/// Builds the retained [`Element`] tree.
#[derive(Debug, Default, Clone, Copy)]
pub struct ElementBuilder;

impl CardViewBuilder for ElementBuilder {
    type Node = Element;

    fn card(&mut self) -> Element {
        Element::new(Tag::Article, class::CARD).with_attr("role", "listitem")
    }

    fn media(&mut self) -> Element {
        Element::new(Tag::Div, class::MEDIA)
    }

    fn badge(&mut self, text: &str) -> Element {
        Element::new(Tag::Span, class::BADGE).with_text(text)
    }

    fn image(&mut self, src: &str, alt: &str) -> Element {
        Element::new(Tag::Img, class::IMAGE)
            .with_attr("src", src)
            .with_attr("alt", alt)
            .with_attr("loading", "lazy")
    }

    fn nav_button(&mut self, direction: NavDirection, label: &str, hidden: bool) -> Element {
        let classes = format!("{} {}", class::NAV, class::nav_modifier(direction));
        Element::new(Tag::Button, classes)
            .with_attr("type", "button")
            .with_attr("aria-label", label)
            .with_text(direction.glyph())
            .with_hidden(hidden)
    }

    fn body(&mut self) -> Element {
        Element::new(Tag::Div, class::BODY)
    }

    fn title(&mut self, text: &str) -> Element {
        Element::new(Tag::H3, class::TITLE).with_text(text)
    }

    fn meta(&mut self) -> Element {
        Element::new(Tag::Div, class::META)
    }

    fn star_rating(&mut self, stars: u32, label: &str, icon: &str) -> Element {
        let mut group = Element::new(Tag::Div, class::STARS);
        for _ in 0..stars {
            group.append(
                Element::new(Tag::Img, class::STAR)
                    .with_attr("src", icon)
                    .with_attr("alt", "")
                    .with_attr("aria-hidden", "true"),
            );
        }
        let mut rating = Element::new(Tag::Div, class::RATING).with_attr("aria-label", label);
        rating.append(group);
        rating
    }

    fn text_rating(&mut self, text: &str) -> Element {
        Element::new(Tag::Div, class::RATING).with_text(text)
    }

    fn city(&mut self, text: &str) -> Element {
        Element::new(Tag::Span, class::CITY).with_text(text)
    }

    fn description(&mut self, text: &str) -> Element {
        Element::new(Tag::P, class::DESCRIPTION).with_text(text)
    }

    fn append(&mut self, parent: &mut Element, child: Element) {
        parent.append(child);
    }
}
