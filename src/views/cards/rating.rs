use super::builder::CardViewBuilder;
use crate::localization::translate_with;
use crate::parser::Category;
use crate::ui_constants::assets::STAR_ICON;

/// Most star icons a card shows; larger counts are clamped.
pub const MAX_STARS: u32 = 10;

/// Stars when the category asks for icons, else the category name, else nothing.
pub fn build_rating<B: CardViewBuilder>(
    builder: &mut B,
    category: Option<&Category>,
) -> Option<B::Node> {
    let category = category?;

    let stars = category
        .number
        .filter(|n| category.show_icon && *n > 0)
        .map(|n| u32::try_from(n).unwrap_or(u32::MAX).min(MAX_STARS));
    if let Some(stars) = stars {
        let label = translate_with("card-stars", &[("count", stars.to_string())]);
        return Some(builder.star_rating(stars, &label, STAR_ICON));
    }

    category.name.as_deref().map(|name| builder.text_rating(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::cards::builder::{class, ElementBuilder};

    fn category(show_icon: bool, number: Option<i64>, name: Option<&str>) -> Category {
        Category {
            show_icon,
            number,
            name: name.map(str::to_string),
        }
    }

    #[test]
    fn absent_category_has_no_rating() {
        assert!(build_rating(&mut ElementBuilder, None).is_none());
    }

    #[test]
    fn icons_render_one_star_per_point() {
        let node = build_rating(&mut ElementBuilder, Some(&category(true, Some(4), None))).unwrap();
        assert_eq!(node.attr("aria-label"), Some("4 estrellas"));
        assert_eq!(node.count(class::STAR), 4);
        let star = node.find(class::STAR).unwrap();
        assert_eq!(star.attr("src"), Some(STAR_ICON));
        assert_eq!(star.attr("aria-hidden"), Some("true"));
    }

    #[test]
    fn name_is_used_when_icons_are_off() {
        let node = build_rating(
            &mut ElementBuilder,
            Some(&category(false, Some(4), Some("Boutique"))),
        )
        .unwrap();
        assert_eq!(node.text_content(), "Boutique");
        assert_eq!(node.count(class::STAR), 0);
    }

    #[test]
    fn non_positive_count_falls_back_to_name() {
        let node = build_rating(
            &mut ElementBuilder,
            Some(&category(true, Some(0), Some("Hostal"))),
        )
        .unwrap();
        assert_eq!(node.text_content(), "Hostal");
    }

    #[test]
    fn huge_counts_are_clamped() {
        for number in [11, 4_000_000_000, i64::MAX] {
            let node =
                build_rating(&mut ElementBuilder, Some(&category(true, Some(number), None))).unwrap();
            assert_eq!(node.count(class::STAR), MAX_STARS as usize);
            assert_eq!(node.attr("aria-label"), Some("10 estrellas"));
        }
    }

    #[test]
    fn nothing_to_show_gives_none() {
        assert!(build_rating(&mut ElementBuilder, Some(&category(true, Some(-2), None))).is_none());
        assert!(build_rating(&mut ElementBuilder, Some(&Category::default())).is_none());
    }
}
