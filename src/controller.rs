// View state controller: owns the criteria, the filtered sequence, paging,
// the wishlist, the selected record and the display mode.
//
// Every criteria mutator recomputes synchronously before returning, so the
// visible page is always consistent with the criteria by the time the next
// event is handled.

use crate::catalog::Catalog;
use crate::error::{AppError, AppResult};
use crate::filter::{self, FilterEngine};
use crate::models::{FilterCriteria, FuelType, SeatFilter, SortMode, VehicleRecord, ViewMode};
use crate::paginator;
use crate::storage::KeyValueStore;
use crate::wishlist::Wishlist;

pub struct CatalogController<S: KeyValueStore> {
    catalog: Catalog,
    criteria: FilterCriteria,
    filtered: Vec<VehicleRecord>,
    page: usize,
    page_size: usize,
    wishlist: Wishlist<S>,
    view_mode: ViewMode,
    selected: Option<u32>,
    error: Option<String>,
    engine: FilterEngine,
}

impl<S: KeyValueStore> CatalogController<S> {
    // Loads the wishlist once and computes the initial view with default criteria
    pub fn new(catalog: Catalog, store: S, page_size: usize) -> Self {
        Self::with_engine(catalog, store, page_size, filter::try_apply)
    }

    // Same as `new`, running `engine` instead of the built-in filter
    pub fn with_engine(catalog: Catalog, store: S, page_size: usize, engine: FilterEngine) -> Self {
        let mut controller = Self {
            filtered: catalog.records().to_vec(),
            catalog,
            criteria: FilterCriteria::default(),
            page: 1,
            page_size: page_size.max(1),
            wishlist: Wishlist::load(store),
            view_mode: ViewMode::default(),
            selected: None,
            error: None,
            engine,
        };
        controller.recompute();
        controller
    }

    // --- Criteria ---

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.recompute();
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.criteria.search = text.into();
        self.recompute();
    }

    // An empty brand clears the brand filter
    pub fn set_brand(&mut self, brand: Option<String>) {
        self.criteria.brand = brand.filter(|b| !b.is_empty());
        self.recompute();
    }

    pub fn set_price_range(&mut self, min: u32, max: u32) {
        self.criteria.min_price = min;
        self.criteria.max_price = max;
        self.recompute();
    }

    pub fn set_min_price(&mut self, min: u32) {
        self.criteria.min_price = min;
        self.recompute();
    }

    pub fn set_max_price(&mut self, max: u32) {
        self.criteria.max_price = max;
        self.recompute();
    }

    pub fn set_fuel_type(&mut self, fuel_type: Option<FuelType>) {
        self.criteria.fuel_type = fuel_type;
        self.recompute();
    }

    // Seat dropdown value as text; see `SeatFilter::parse`
    pub fn set_seats(&mut self, text: &str) {
        self.criteria.seats = SeatFilter::parse(text);
        self.recompute();
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.criteria.sort = sort;
        self.recompute();
    }

    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.recompute();
    }

    // Re-runs the filter engine. On success the page goes back to 1 and any
    // previous error is cleared; on failure the old results stay on screen.
    fn recompute(&mut self) {
        match self.try_recompute() {
            Ok(()) => {
                tracing::debug!(
                    results = self.filtered.len(),
                    pages = self.total_pages(),
                    "Recomputed filtered view"
                );
            }
            Err(e) => {
                self.error = Some(e.user_message());
            }
        }
    }

    fn try_recompute(&mut self) -> AppResult<()> {
        self.filtered = (self.engine)(self.catalog.records(), &self.criteria)?;
        self.page = 1;
        self.error = None;
        Ok(())
    }

    pub fn results(&self) -> &[VehicleRecord] {
        &self.filtered
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // --- Pagination ---

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        paginator::total_pages(self.filtered.len(), self.page_size)
    }

    pub fn visible(&self) -> &[VehicleRecord] {
        paginator::slice(&self.filtered, self.page, self.page_size)
    }

    pub fn go_to_page(&mut self, page: usize) -> usize {
        self.page = paginator::clamp_page(page, self.total_pages());
        self.page
    }

    pub fn next_page(&mut self) -> usize {
        self.go_to_page(self.page.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> usize {
        self.go_to_page(self.page.saturating_sub(1))
    }

    // --- Wishlist ---

    // Flips `id` in the wishlist (persisting it); true when now wishlisted
    pub fn toggle_wishlist(&mut self, id: u32) -> AppResult<bool> {
        if self.catalog.get(id).is_none() {
            return Err(AppError::UnknownRecord(id));
        }
        Ok(self.wishlist.toggle(id))
    }

    pub fn is_wishlisted(&self, id: u32) -> bool {
        self.wishlist.contains(id)
    }

    pub fn wishlist_count(&self) -> usize {
        self.wishlist.len()
    }

    pub fn wishlist_records(&self) -> Vec<&VehicleRecord> {
        self.wishlist.resolve(&self.catalog)
    }

    pub fn wishlist(&self) -> &Wishlist<S> {
        &self.wishlist
    }

    // --- Detail view ---

    pub fn select(&mut self, id: u32) -> AppResult<&VehicleRecord> {
        let record = self.catalog.get(id).ok_or(AppError::UnknownRecord(id))?;
        self.selected = Some(id);
        Ok(record)
    }

    pub fn close_details(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&VehicleRecord> {
        self.selected.and_then(|id| self.catalog.get(id))
    }

    // --- Display mode ---

    pub fn toggle_view_mode(&mut self) -> ViewMode {
        self.view_mode = self.view_mode.toggle();
        self.view_mode
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    // --- Dropdown options ---

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn brands(&self) -> Vec<String> {
        self.catalog.brands()
    }

    pub fn fuel_types(&self) -> Vec<FuelType> {
        self.catalog.fuel_types()
    }

    pub fn seat_options(&self) -> Vec<u32> {
        self.catalog.seat_options()
    }
}
