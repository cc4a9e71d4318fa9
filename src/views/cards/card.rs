use rand::Rng;
use serde_json::Value;
use strum::IntoEnumIterator;

use super::builder::{class, CardViewBuilder, ElementBuilder};
use super::carousel::Carousel;
use super::format::{compute_discount, format_city, pick_primary_image, truncate};
use super::rating::build_rating;
use crate::localization::{translate, translate_with};
use crate::parser::HotelRecord;
use crate::types::NavDirection;
use crate::ui_constants::DESCRIPTION_LIMIT;
use crate::views::dom::Element;

/// A built card node plus the carousel driving its image (if the gallery can cycle).
pub struct BuiltCard<N> {
    pub node: N,
    pub carousel: Option<Carousel>,
}

/// Map one raw record to a card. Non-object records yield `None` and are skipped.
pub fn build_card<B: CardViewBuilder>(
    builder: &mut B,
    record: &Value,
    rng: &mut impl Rng,
) -> Option<BuiltCard<B::Node>> {
    let hotel = HotelRecord::from_value(record)?;
    let mut card = builder.card();

    // Media: badge, image, carousel buttons
    let mut media = builder.media();

    let pct = compute_discount(hotel.id, rng);
    let badge = builder.badge(&translate_with("card-discount", &[("pct", pct.to_string())]));
    builder.append(&mut media, badge);

    let alt = match &hotel.name {
        Some(name) => translate_with("card-image-alt", &[("name", name.clone())]),
        None => translate("card-image-alt-unnamed"),
    };
    let image = builder.image(pick_primary_image(&hotel.gallery), &alt);
    builder.append(&mut media, image);

    let nav_hidden = hotel.gallery.len() <= 1;
    for direction in NavDirection::iter() {
        let nav = builder.nav_button(direction, &translate(direction.label_id()), nav_hidden);
        builder.append(&mut media, nav);
    }
    builder.append(&mut card, media);

    // Body: title, meta row (rating + city), description
    let mut body = builder.body();

    let title = match &hotel.name {
        Some(name) => builder.title(name),
        None => builder.title(&translate("card-untitled")),
    };
    builder.append(&mut body, title);

    let mut meta = builder.meta();
    if let Some(rating) = build_rating(builder, hotel.category.as_ref()) {
        builder.append(&mut meta, rating);
    }
    let city = builder.city(&format_city(
        hotel.address.city.as_deref(),
        hotel.address.country.as_deref(),
    ));
    builder.append(&mut meta, city);
    builder.append(&mut body, meta);

    let description = builder.description(&truncate(
        hotel.description.as_deref().unwrap_or_default(),
        DESCRIPTION_LIMIT,
    ));
    builder.append(&mut body, description);
    builder.append(&mut card, body);

    Some(BuiltCard {
        node: card,
        carousel: Carousel::attach(hotel.gallery),
    })
}

/// A card in the grid: its element tree and the carousel that owns its image cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelCard {
    root: Element,
    carousel: Option<Carousel>,
}

impl HotelCard {
    pub fn build(record: &Value, rng: &mut impl Rng) -> Option<Self> {
        let BuiltCard { node, carousel } = build_card(&mut ElementBuilder, record, rng)?;
        Some(Self {
            root: node,
            carousel,
        })
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn image_src(&self) -> Option<&str> {
        self.root.find(class::IMAGE).and_then(|img| img.attr("src"))
    }

    /// Step the carousel and point the image at the new entry.
    /// Returns `false` (and changes nothing) for cards without a carousel.
    pub fn navigate(&mut self, direction: NavDirection) -> bool {
        let Some(carousel) = self.carousel.as_mut() else {
            return false;
        };
        let src = carousel.advance(direction.step()).to_string();
        if let Some(img) = self.root.find_mut(class::IMAGE) {
            img.set_attr("src", src);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui_constants::assets::PLACEHOLDER_IMAGE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(3)
    }

    fn nav(card: &HotelCard, direction: NavDirection) -> &Element {
        card.root().find(&class::nav_modifier(direction)).unwrap()
    }

    /// Records the builder calls in order; nodes are just their labels.
    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl CardViewBuilder for Recorder {
        type Node = String;

        fn card(&mut self) -> String {
            self.0.push("card".into());
            "card".into()
        }
        fn media(&mut self) -> String {
            self.0.push("media".into());
            "media".into()
        }
        fn badge(&mut self, text: &str) -> String {
            self.0.push(format!("badge:{text}"));
            "badge".into()
        }
        fn image(&mut self, src: &str, _alt: &str) -> String {
            self.0.push(format!("image:{src}"));
            "image".into()
        }
        fn nav_button(&mut self, direction: NavDirection, _label: &str, hidden: bool) -> String {
            self.0.push(format!("nav:{direction}:{hidden}"));
            "nav".into()
        }
        fn body(&mut self) -> String {
            self.0.push("body".into());
            "body".into()
        }
        fn title(&mut self, text: &str) -> String {
            self.0.push(format!("title:{text}"));
            "title".into()
        }
        fn meta(&mut self) -> String {
            self.0.push("meta".into());
            "meta".into()
        }
        fn star_rating(&mut self, stars: u32, _label: &str, _icon: &str) -> String {
            self.0.push(format!("stars:{stars}"));
            "stars".into()
        }
        fn text_rating(&mut self, text: &str) -> String {
            self.0.push(format!("rating:{text}"));
            "rating".into()
        }
        fn city(&mut self, text: &str) -> String {
            self.0.push(format!("city:{text}"));
            "city".into()
        }
        fn description(&mut self, text: &str) -> String {
            self.0.push(format!("description:{text}"));
            "description".into()
        }
        fn append(&mut self, parent: &mut String, child: String) {
            self.0.push(format!("{parent}<{child}"));
        }
    }

    #[test]
    fn malformed_records_are_skipped() {
        for value in [json!(null), json!(12), json!("hotel"), json!([])] {
            assert!(HotelCard::build(&value, &mut rng()).is_none());
        }
    }

    #[test]
    fn builder_is_driven_in_card_order() {
        let mut recorder = Recorder::default();
        let record = json!({
            "name": "Sol",
            "address": {"city": "tulum"},
            "category": {"showIcon": true, "number": 3},
            "description": "Playa",
            "gallery": [{"uri": "a.jpg"}, {"uri": "b.jpg"}]
        });
        build_card(&mut recorder, &record, &mut rng()).unwrap();

        let calls: Vec<&str> = recorder
            .0
            .iter()
            .map(String::as_str)
            .filter(|c| !c.contains('<'))
            .collect();
        assert_eq!(
            calls,
            [
                "card",
                "media",
                "badge:15% Descuento",
                "image:a.jpg",
                "nav:prev:false",
                "nav:next:false",
                "body",
                "title:Sol",
                "meta",
                "stars:3",
                "city:Tulum",
                "description:Playa",
            ]
        );
        assert!(recorder.0.contains(&"card<media".to_string()));
        assert!(recorder.0.contains(&"meta<stars".to_string()));
        assert!(recorder.0.contains(&"card<body".to_string()));
    }

    #[test]
    fn card_carries_page_attributes() {
        let card = HotelCard::build(
            &json!({"id": "x", "name": "Mar Azul", "gallery": [{"uri": "m.jpg"}]}),
            &mut rng(),
        )
        .unwrap();
        let root = card.root();
        assert_eq!(root.attr("role"), Some("listitem"));
        assert!(root.has_class(class::CARD));
        assert_eq!(root.find(class::BADGE).unwrap().text, "15% Descuento");

        let img = root.find(class::IMAGE).unwrap();
        assert_eq!(img.attr("src"), Some("m.jpg"));
        assert_eq!(img.attr("alt"), Some("Fotografia del hotel Mar Azul"));
        assert_eq!(img.attr("loading"), Some("lazy"));

        assert_eq!(
            nav(&card, NavDirection::Previous).attr("aria-label"),
            Some("Ver imagen anterior")
        );
        assert_eq!(
            nav(&card, NavDirection::Next).attr("aria-label"),
            Some("Ver imagen siguiente")
        );
    }

    #[test]
    fn fallbacks_for_an_empty_record() {
        let card = HotelCard::build(&json!({}), &mut rng()).unwrap();
        let root = card.root();
        assert_eq!(root.find(class::TITLE).unwrap().text, "Hotel sin nombre");
        assert_eq!(root.find(class::CITY).unwrap().text, "Cancun");
        assert_eq!(root.find(class::DESCRIPTION).unwrap().text, "");
        assert!(root.find(class::RATING).is_none());
        assert_eq!(card.image_src(), Some(PLACEHOLDER_IMAGE));
        assert_eq!(
            root.find(class::IMAGE).unwrap().attr("alt"),
            Some("Fotografia del hotel sin nombre")
        );
    }

    #[test]
    fn long_description_is_truncated() {
        let text = "a".repeat(250);
        let card = HotelCard::build(&json!({"description": text}), &mut rng()).unwrap();
        let shown = &card.root().find(class::DESCRIPTION).unwrap().text;
        assert_eq!(shown.chars().count(), DESCRIPTION_LIMIT + 3);
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn single_image_hides_navigation_and_never_moves() {
        for gallery in [json!([]), json!([{"uri": "solo.jpg"}])] {
            let mut card = HotelCard::build(&json!({ "gallery": gallery }), &mut rng()).unwrap();
            let before = card.image_src().map(str::to_string);
            assert!(nav(&card, NavDirection::Previous).hidden);
            assert!(nav(&card, NavDirection::Next).hidden);
            assert!(!card.navigate(NavDirection::Next));
            assert!(!card.navigate(NavDirection::Previous));
            assert_eq!(card.image_src().map(str::to_string), before);
        }
    }

    #[test]
    fn navigation_cycles_through_gallery() {
        let record = json!({"gallery": [{"uri": "a.jpg"}, {"uri": "b.jpg"}, {"uri": "c.jpg"}]});
        let mut card = HotelCard::build(&record, &mut rng()).unwrap();
        assert!(!nav(&card, NavDirection::Next).hidden);
        assert_eq!(card.image_src(), Some("a.jpg"));

        assert!(card.navigate(NavDirection::Next));
        assert_eq!(card.image_src(), Some("b.jpg"));
        card.navigate(NavDirection::Next);
        card.navigate(NavDirection::Next);
        assert_eq!(card.image_src(), Some("a.jpg"));

        card.navigate(NavDirection::Previous);
        assert_eq!(card.image_src(), Some("c.jpg"));
        card.navigate(NavDirection::Next);
        assert_eq!(card.image_src(), Some("a.jpg"));
    }
}
