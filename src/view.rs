// Plain-text rendering of the controller state for the terminal session

use crate::controller::CatalogController;
use crate::models::{SortMode, VehicleRecord};
use crate::storage::KeyValueStore;

// Formats 45000 as "$45,000"
pub fn format_price(price: u32) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn card(record: &VehicleRecord, wishlisted: bool) -> String {
    format!(
        "{} #{} {} {} | {} | {} seats",
        if wishlisted { "[♥]" } else { "[ ]" },
        record.id,
        record.title(),
        format_price(record.price),
        record.fuel_type,
        record.seats,
    )
}

// Full screen: header, error, current page of cards, detail overlay, footer
pub fn render<S: KeyValueStore>(controller: &CatalogController<S>, year: i32) -> String {
    let mode = if controller.view_mode().is_dark() { "dark" } else { "light" };
    let mut lines = vec![format!("== Car Finder == [{} mode] ♥ {}", mode, controller.wishlist_count())];

    if let Some(error) = controller.error() {
        lines.push(format!("! {}", error));
    }

    let total = controller.results().len();
    if total == 0 {
        lines.push("No cars match the current filters.".to_string());
    } else {
        lines.push(format!(
            "Page {} of {} ({} cars)",
            controller.page(),
            controller.total_pages(),
            total
        ));
        if controller.criteria().sort != SortMode::None {
            lines.push(format!("Sorted by {}", controller.criteria().sort.label()));
        }
        lines.extend(
            controller
                .visible()
                .iter()
                .map(|record| format!("  {}", card(record, controller.is_wishlisted(record.id)))),
        );
    }

    if let Some(record) = controller.selected() {
        lines.push(render_details(record));
    }

    lines.push(format!("Car Finder App © {}", year));
    lines.join("\n")
}

pub fn render_details(record: &VehicleRecord) -> String {
    format!(
        "-- {} --\n  Price: {}\n  Fuel: {}\n  Seats: {}\n  Image: {}\n  {}",
        record.title(),
        format_price(record.price),
        record.fuel_type,
        record.seats,
        record.image,
        record.description,
    )
}

pub fn render_wishlist<S: KeyValueStore>(controller: &CatalogController<S>) -> String {
    let records = controller.wishlist_records();
    if records.is_empty() {
        return "Your wishlist is empty.".to_string();
    }
    records
        .iter()
        .map(|record| card(record, true))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_options<S: KeyValueStore>(controller: &CatalogController<S>) -> String {
    let fuels: Vec<String> = controller.fuel_types().iter().map(|f| f.to_string()).collect();
    let seats: Vec<String> = controller.seat_options().iter().map(|s| s.to_string()).collect();
    format!(
        "Brands: {}\nFuel types: {}\nSeats: {}",
        controller.brands().join(", "),
        fuels.join(", "),
        seats.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::storage::MemoryStore;

    fn controller() -> CatalogController<MemoryStore> {
        CatalogController::new(Catalog::seeded(), MemoryStore::new(), 10)
    }

    #[test]
    fn prices_get_thousands_separators() {
        assert_eq!(format_price(0), "$0");
        assert_eq!(format_price(999), "$999");
        assert_eq!(format_price(25_000), "$25,000");
        assert_eq!(format_price(1_234_567), "$1,234,567");
    }

    #[test]
    fn screen_shows_badge_cards_and_footer() {
        let mut c = controller();
        c.toggle_wishlist(2).unwrap();
        c.toggle_view_mode();
        let screen = render(&c, 2026);

        assert!(screen.starts_with("== Car Finder == [dark mode] ♥ 1"));
        assert!(screen.contains("Page 1 of 1 (5 cars)"));
        assert!(screen.contains("[♥] #2 Honda Civic $22,000 | Petrol | 5 seats"));
        assert!(screen.contains("[ ] #1 Toyota Camry $25,000"));
        assert!(screen.ends_with("Car Finder App © 2026"));

        c.set_sort(SortMode::PriceAscending);
        assert!(render(&c, 2026).contains("Sorted by price-low-high"));
    }

    #[test]
    fn screen_shows_error_and_details() {
        fn always_fails(
            _: &[VehicleRecord],
            _: &crate::models::FilterCriteria,
        ) -> Result<Vec<VehicleRecord>, crate::error::FilterError> {
            Err(crate::error::FilterError::Engine("broken".into()))
        }
        let mut c = CatalogController::with_engine(Catalog::seeded(), MemoryStore::new(), 10, always_fails);
        c.select(4).unwrap();
        let screen = render(&c, 2026);
        assert!(screen.contains("! Failed to filter cars"));
        // The initial sequence stays on screen
        assert!(screen.contains("Page 1 of 1 (5 cars)"));
        assert!(screen.contains("-- Tesla Model 3 --"));
        assert!(screen.contains("Premium electric vehicle with autopilot"));
    }

    #[test]
    fn empty_results_and_wishlist() {
        let mut c = controller();
        c.set_search("nothing");
        assert!(render(&c, 2026).contains("No cars match"));
        assert_eq!(render_wishlist(&c), "Your wishlist is empty.");
    }

    #[test]
    fn options_list_facets() {
        let text = render_options(&controller());
        assert!(text.contains("Brands: Toyota, Honda, Ford, Tesla, BMW"));
        assert!(text.contains("Fuel types: Petrol, Electric, Diesel"));
        assert!(text.contains("Seats: 5, 4, 7"));
    }
}
