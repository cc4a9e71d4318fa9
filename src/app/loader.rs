// Page-load render pass, split around its single await point:
// begin_render (UI thread) -> one fetch (runtime) -> finish_render (UI thread).

use rand::Rng;
use serde_json::Value;

use super::page::{Page, StatusRegion};
use crate::localization::{translate, translate_with};
use crate::parser::FetchError;
use crate::types::StatusMessage;
use crate::views::cards::HotelCard;

fn show(status: &mut StatusRegion, message: StatusMessage) {
    status.show_status(translate(message.message_id()));
}

/// Show the loading message. `false` means the page lacks its grid or status
/// region and the pass must be skipped (no fetch).
pub fn begin_render(page: &mut Page) -> bool {
    let (Some(_), Some(status)) = (page.grid.as_ref(), page.status.as_mut()) else {
        return false;
    };
    show(status, StatusMessage::Loading);
    true
}

/// Apply the fetch outcome to the page.
pub fn finish_render(
    page: &mut Page,
    result: Result<Vec<Value>, FetchError>,
    rng: &mut impl Rng,
) {
    let Page {
        grid,
        status,
        results,
    } = page;
    let (Some(grid), Some(status)) = (grid.as_mut(), status.as_mut()) else {
        return;
    };

    match result {
        Ok(hotels) if !hotels.is_empty() => {
            if let Some(results) = results.as_mut() {
                results.text =
                    translate_with("results-count", &[("count", hotels.len().to_string())]);
            }
            let cards: Vec<HotelCard> = hotels
                .iter()
                .filter_map(|record| HotelCard::build(record, rng))
                .collect();
            log::info!(
                "cards built: records={} cards={}",
                hotels.len(),
                cards.len()
            );
            grid.replace_cards(cards);
            status.hide_status();
        }
        Ok(_) => {
            log::info!("hotel endpoint returned no records");
            show(status, StatusMessage::Empty);
        }
        Err(err) => {
            log::error!("Error loading hotels: {err}");
            show(status, StatusMessage::Failed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::page::Grid;
    use crate::parser::test_server::serve_once;
    use crate::parser::HttpHotelSource;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    const TWO_HOTELS: &str = r#"[
        {"id": 101, "name": "Hotel Uno", "address": {"city": "cancun"},
         "gallery": [{"uri": "uno-1.jpg"}, {"uri": "uno-2.jpg"}]},
        {"id": 202, "name": "Hotel Dos", "address": {"city": "tulum"},
         "category": {"showIcon": true, "number": 5},
         "gallery": [{"uri": "dos-1.jpg"}, {"uri": "dos-2.jpg"}]}
    ]"#;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    /// A page whose grid already shows one card.
    fn page_with_existing_card() -> Page {
        let mut page = Page::complete();
        let card = HotelCard::build(&json!({"name": "Anterior"}), &mut rng()).unwrap();
        page.grid.as_mut().unwrap().replace_cards(vec![card]);
        page
    }

    async fn run_pass(page: &mut Page, status_code: u16, body: &'static str) {
        let url = serve_once(status_code, body).await;
        let source = HttpHotelSource::new(&url).unwrap();
        assert!(begin_render(page));
        assert_eq!(page.status.as_ref().unwrap().text(), "Cargando hoteles...");
        let result = source.fetch_hotels().await;
        finish_render(page, result, &mut rng());
    }

    fn grid(page: &Page) -> &Grid {
        page.grid.as_ref().unwrap()
    }

    #[tokio::test]
    async fn two_records_render_two_cards() {
        let mut page = page_with_existing_card();
        run_pass(&mut page, 200, TWO_HOTELS).await;

        let cards = grid(&page).cards();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].image_src(), Some("uno-1.jpg"));
        assert_eq!(page.results.as_ref().unwrap().text, "2 resultados");
        let status = page.status.as_ref().unwrap();
        assert!(status.is_hidden());
        assert_eq!(status.text(), "");
    }

    #[tokio::test]
    async fn empty_array_keeps_grid_and_says_so() {
        let mut page = page_with_existing_card();
        let before = grid(&page).cards().to_vec();
        run_pass(&mut page, 200, "[]").await;

        assert_eq!(grid(&page).cards(), before.as_slice());
        let status = page.status.as_ref().unwrap();
        assert!(!status.is_hidden());
        assert_eq!(status.text(), "No encontramos hoteles disponibles por ahora.");
        assert_eq!(page.results.as_ref().unwrap().text, "");
    }

    #[tokio::test]
    async fn server_error_shows_retry_message() {
        let mut page = page_with_existing_card();
        let before = grid(&page).cards().to_vec();
        run_pass(&mut page, 500, r#"{"error": "boom"}"#).await;

        assert_eq!(grid(&page).cards(), before.as_slice());
        let status = page.status.as_ref().unwrap();
        assert!(!status.is_hidden());
        assert_eq!(
            status.text(),
            "Ocurrio un problema al cargar los hoteles. Intenta nuevamente."
        );
    }

    #[tokio::test]
    async fn non_array_body_counts_as_empty() {
        let mut page = Page::complete();
        run_pass(&mut page, 200, r#"{"hotels": []}"#).await;
        assert_eq!(
            page.status.as_ref().unwrap().text(),
            "No encontramos hoteles disponibles por ahora."
        );
    }

    #[test]
    fn malformed_entries_are_skipped_but_counted() {
        let mut page = Page::complete();
        assert!(begin_render(&mut page));
        finish_render(
            &mut page,
            Ok(vec![json!(null), json!({"name": "Solo"}), json!("x")]),
            &mut rng(),
        );
        assert_eq!(grid(&page).cards().len(), 1);
        assert_eq!(page.results.as_ref().unwrap().text, "3 resultados");
    }

    #[test]
    fn missing_results_label_is_fine() {
        let mut page = Page::complete();
        page.results = None;
        assert!(begin_render(&mut page));
        finish_render(&mut page, Ok(vec![json!({})]), &mut rng());
        assert_eq!(grid(&page).cards().len(), 1);
        assert!(page.status.as_ref().unwrap().is_hidden());
    }

    #[test]
    fn missing_anchors_skip_the_pass() {
        let mut page = Page::complete();
        page.grid = None;
        assert!(!begin_render(&mut page));
        assert!(page.status.as_ref().unwrap().is_hidden());

        let mut page = Page::complete();
        page.status = None;
        assert!(!begin_render(&mut page));
        finish_render(&mut page, Ok(vec![json!({})]), &mut rng());
        assert!(grid(&page).cards().is_empty());
        assert_eq!(page.results.as_ref().unwrap().text, "");
    }
}
