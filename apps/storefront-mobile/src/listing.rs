//! Product list engine: filter, sort and paginate the catalog for display.

use chrono::NaiveDate;
use feruca::Collator;
use std::cmp::Ordering;
use strum::{AsRefStr, Display, EnumString};

use crate::dates::iso_date_part;
use crate::models::Product;

/// Products revealed per page
pub const PAGE_SIZE: usize = 8;

const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1970, 1, 1) {
    Some(date) => date,
    None => NaiveDate::MIN,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum SortOrder {
    NameAsc,
    NameDesc,
    DateAsc,
    DateDesc,
}

/// Options offered by the sort picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortChoice {
    Name,
    Date,
    Clear,
}

impl SortChoice {
    /// Sort produced by picking `self` while `current` is active.
    ///
    /// Name flips between ascending and descending starting ascending; date
    /// flips starting descending (newest first).
    pub fn apply(self, current: Option<SortOrder>) -> Option<SortOrder> {
        match (self, current) {
            (SortChoice::Name, Some(SortOrder::NameAsc)) => Some(SortOrder::NameDesc),
            (SortChoice::Name, _) => Some(SortOrder::NameAsc),
            (SortChoice::Date, Some(SortOrder::DateDesc)) => Some(SortOrder::DateAsc),
            (SortChoice::Date, _) => Some(SortOrder::DateDesc),
            (SortChoice::Clear, _) => None,
        }
    }
}

/// Products whose name or id contains `search`, ignoring case
pub fn filter_products(products: &[Product], search: &str) -> Vec<Product> {
    let needle = search.to_lowercase();
    products
        .iter()
        .filter(|p| {
            needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.id.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Stable in-place sort; `None` keeps the current order
pub fn sort_products(products: &mut [Product], order: Option<SortOrder>) {
    match order {
        Some(SortOrder::NameAsc) => {
            let mut collator = Collator::default();
            products.sort_by(|a, b| compare_names(&mut collator, &a.name, &b.name))
        }
        Some(SortOrder::NameDesc) => {
            let mut collator = Collator::default();
            products.sort_by(|a, b| compare_names(&mut collator, &b.name, &a.name))
        }
        Some(SortOrder::DateAsc) => products.sort_by_key(|p| release_day(&p.date_release)),
        Some(SortOrder::DateDesc) => {
            products.sort_by(|a, b| release_day(&b.date_release).cmp(&release_day(&a.date_release)))
        }
        None => {}
    }
}

/// Filtered then sorted copy of `products`
pub fn derive_view(products: &[Product], search: &str, order: Option<SortOrder>) -> Vec<Product> {
    let mut filtered = filter_products(products, search);
    sort_products(&mut filtered, order);
    filtered
}

/// Unicode collation order (CLDR root): accents and case only break ties
/// between otherwise equal letters. Raw text decides whatever is left.
fn compare_names(collator: &mut Collator, a: &str, b: &str) -> Ordering {
    collator.collate(a, b).then_with(|| a.cmp(b))
}

/// Calendar day of an ISO release string, time and zone ignored.
/// Anything unparseable sorts as the Unix epoch.
fn release_day(iso: &str) -> NaiveDate {
    let mut parts = iso_date_part(iso).split('-');
    let parsed = match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day)) => year
            .parse()
            .ok()
            .zip(month.parse().ok())
            .zip(day.parse().ok())
            .and_then(|((y, m), d)| NaiveDate::from_ymd_opt(y, m, d)),
        _ => None,
    };

    parsed.unwrap_or(EPOCH)
}

/// Display state of the home list.
///
/// Holds the full catalog, the search text and sort, and a display-count
/// cursor. The cursor goes back to one page whenever any input changes.
#[derive(Debug, Clone)]
pub struct ProductListView {
    products: Vec<Product>,
    search: String,
    sort: Option<SortOrder>,
    filtered: Vec<Product>,
    display_count: usize,
}

impl Default for ProductListView {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            search: String::new(),
            sort: None,
            filtered: Vec::new(),
            display_count: PAGE_SIZE,
        }
    }
}

impl ProductListView {
    pub fn new(products: Vec<Product>) -> Self {
        let mut view = Self::default();
        view.set_products(products);
        view
    }

    /// Replaces the catalog, e.g. after a refresh
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.recompute();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if search != self.search {
            self.search = search;
            self.recompute();
        }
    }

    pub fn set_sort(&mut self, sort: Option<SortOrder>) {
        if sort != self.sort {
            self.sort = sort;
            self.recompute();
        }
    }

    /// Applies a sort picker choice and returns the resulting sort
    pub fn choose_sort(&mut self, choice: SortChoice) -> Option<SortOrder> {
        self.set_sort(choice.apply(self.sort));
        self.sort
    }

    /// Reveals another page. Returns `false` when everything is already shown.
    pub fn load_more(&mut self) -> bool {
        if self.display_count < self.filtered.len() {
            self.display_count += PAGE_SIZE;
            true
        } else {
            false
        }
    }

    /// The slice currently on screen
    pub fn visible(&self) -> &[Product] {
        let end = self.display_count.min(self.filtered.len());
        &self.filtered[..end]
    }

    /// Number of products matching the search
    pub fn total(&self) -> usize {
        self.filtered.len()
    }

    pub fn has_more(&self) -> bool {
        self.display_count < self.filtered.len()
    }

    /// Counter shown above the list, e.g. `12 Registros`
    pub fn records_label(&self) -> String {
        format!("{} Registros", self.total())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> Option<SortOrder> {
        self.sort
    }

    pub fn display_count(&self) -> usize {
        self.display_count
    }

    fn recompute(&mut self) {
        self.filtered = derive_view(&self.products, &self.search, self.sort);
        self.display_count = PAGE_SIZE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn product(id: &str, name: &str, release: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: "Descripción de prueba".to_string(),
            logo: "logo.png".to_string(),
            date_release: release.to_string(),
            date_revision: release.to_string(),
        }
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    fn catalog(n: usize) -> Vec<Product> {
        (0..n)
            .map(|i| product(&format!("p{:02}", i), &format!("Producto {:02}", i), "2025-01-01"))
            .collect()
    }

    #[test]
    fn test_filter_matches_name_or_id_ignoring_case() {
        let products = vec![
            product("uno", "Tarjeta Visa", "2025-01-01"),
            product("dos", "Cuenta de ahorro", "2025-01-01"),
            product("visa-2", "Crédito", "2025-01-01"),
        ];

        assert_eq!(ids(&filter_products(&products, "VISA")), vec!["uno", "visa-2"]);
        assert_eq!(ids(&filter_products(&products, "")), vec!["uno", "dos", "visa-2"]);
        assert!(filter_products(&products, "hipoteca").is_empty());
    }

    #[test]
    fn test_sort_by_name() {
        let mut products = vec![
            product("a", "beta", "2025-01-01"),
            product("b", "Alpha", "2025-01-01"),
            product("c", "alpha", "2025-01-01"),
        ];

        sort_products(&mut products, Some(SortOrder::NameAsc));
        assert_eq!(ids(&products), vec!["c", "b", "a"]);

        sort_products(&mut products, Some(SortOrder::NameDesc));
        assert_eq!(ids(&products), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_by_name_places_accented_letters_with_their_base() {
        let names = ["Zafiro", "Ábaco", "Banco", "Élite", "Fondo"];
        let mut products: Vec<Product> = names
            .iter()
            .map(|name| product(name, name, "2025-01-01"))
            .collect();

        sort_products(&mut products, Some(SortOrder::NameAsc));
        assert_eq!(ids(&products), vec!["Ábaco", "Banco", "Élite", "Fondo", "Zafiro"]);

        sort_products(&mut products, Some(SortOrder::NameDesc));
        assert_eq!(ids(&products), vec!["Zafiro", "Fondo", "Élite", "Banco", "Ábaco"]);

        let mut products = vec![
            product("e2", "Ecuador", "2025-01-01"),
            product("e1", "Éxito", "2025-01-01"),
            product("e3", "Emisión", "2025-01-01"),
        ];
        sort_products(&mut products, Some(SortOrder::NameAsc));
        assert_eq!(ids(&products), vec!["e2", "e3", "e1"]);
    }

    #[test]
    fn test_sorting_twice_changes_nothing() {
        let mixed = vec![
            product("a", "Crédito", "2025-03-01"),
            product("b", "credito", "garbage"),
            product("c", "Ahorro", "2025-03-01T10:00:00Z"),
            product("d", "Crédito", ""),
            product("e", "Ábaco", "2024-12-31"),
            product("f", "ahorro", "2025-03-01"),
        ];

        for order in [
            SortOrder::NameAsc,
            SortOrder::NameDesc,
            SortOrder::DateAsc,
            SortOrder::DateDesc,
        ] {
            let mut once = mixed.clone();
            sort_products(&mut once, Some(order));
            let mut twice = once.clone();
            sort_products(&mut twice, Some(order));
            assert_eq!(ids(&once), ids(&twice), "{}", order);
        }
    }

    #[test]
    fn test_sort_by_date_ignores_time_and_tolerates_garbage() {
        let mut products = vec![
            product("mid", "m", "2025-06-01T23:59:59.000Z"),
            product("bad", "b", "not a date"),
            product("new", "n", "2026-01-01"),
            product("old", "o", "2024-01-01"),
        ];

        sort_products(&mut products, Some(SortOrder::DateAsc));
        assert_eq!(ids(&products), vec!["bad", "old", "mid", "new"]);

        sort_products(&mut products, Some(SortOrder::DateDesc));
        assert_eq!(ids(&products), vec!["new", "mid", "old", "bad"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut products = vec![
            product("first", "x", "2025-01-01T08:00:00Z"),
            product("second", "y", "2025-01-01"),
            product("third", "z", "2025-01-01T20:00:00Z"),
        ];

        sort_products(&mut products, Some(SortOrder::DateDesc));
        assert_eq!(ids(&products), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_no_sort_keeps_insertion_order() {
        let products = vec![
            product("z", "Zeta", "2025-01-01"),
            product("a", "Alfa", "2024-01-01"),
        ];
        assert_eq!(ids(&derive_view(&products, "", None)), vec!["z", "a"]);
    }

    #[test]
    fn test_sort_choice_toggles() {
        assert_eq!(SortChoice::Name.apply(None), Some(SortOrder::NameAsc));
        assert_eq!(SortChoice::Name.apply(Some(SortOrder::NameAsc)), Some(SortOrder::NameDesc));
        assert_eq!(SortChoice::Name.apply(Some(SortOrder::NameDesc)), Some(SortOrder::NameAsc));
        assert_eq!(SortChoice::Name.apply(Some(SortOrder::DateDesc)), Some(SortOrder::NameAsc));
        assert_eq!(SortChoice::Date.apply(None), Some(SortOrder::DateDesc));
        assert_eq!(SortChoice::Date.apply(Some(SortOrder::DateDesc)), Some(SortOrder::DateAsc));
        assert_eq!(SortChoice::Date.apply(Some(SortOrder::DateAsc)), Some(SortOrder::DateDesc));
        assert_eq!(SortChoice::Clear.apply(Some(SortOrder::NameAsc)), None);
    }

    #[test]
    fn test_sort_order_names() {
        assert_eq!(SortOrder::NameAsc.to_string(), "name_asc");
        assert_eq!(SortOrder::from_str("date_desc").unwrap(), SortOrder::DateDesc);
        assert!(SortOrder::from_str("price_asc").is_err());
    }

    #[test]
    fn test_pagination_reveals_pages_until_exhausted() {
        let mut view = ProductListView::new(catalog(20));

        assert_eq!(view.visible().len(), 8);
        assert!(view.has_more());
        assert_eq!(view.records_label(), "20 Registros");

        assert!(view.load_more());
        assert_eq!(view.visible().len(), 16);

        assert!(view.load_more());
        assert_eq!(view.display_count(), 24);
        assert_eq!(view.visible().len(), 20);
        assert!(!view.has_more());

        assert!(!view.load_more());
        assert_eq!(view.display_count(), 24);
    }

    #[test]
    fn test_cursor_resets_when_inputs_change() {
        let mut view = ProductListView::new(catalog(20));
        view.load_more();
        assert_eq!(view.display_count(), 16);

        view.set_search("producto");
        assert_eq!(view.display_count(), 8);

        view.load_more();
        view.choose_sort(SortChoice::Name);
        assert_eq!(view.display_count(), 8);

        view.load_more();
        view.set_products(catalog(3));
        assert_eq!(view.display_count(), 8);
        assert_eq!(view.visible().len(), 3);
        assert!(!view.load_more());
    }

    #[test]
    fn test_same_search_keeps_cursor() {
        let mut view = ProductListView::new(catalog(20));
        view.set_search("p");
        view.load_more();

        view.set_search("p");
        assert_eq!(view.display_count(), 16);
    }

    #[test]
    fn test_view_combines_filter_and_sort() {
        let mut view = ProductListView::new(vec![
            product("c1", "Crédito B", "2025-02-01"),
            product("a1", "Ahorro", "2025-03-01"),
            product("c2", "crédito A", "2025-01-01"),
        ]);

        view.set_search("créd");
        view.choose_sort(SortChoice::Date);
        assert_eq!(ids(view.visible()), vec!["c1", "c2"]);
        assert_eq!(view.sort(), Some(SortOrder::DateDesc));

        view.choose_sort(SortChoice::Name);
        assert_eq!(ids(view.visible()), vec!["c2", "c1"]);
        assert_eq!(view.total(), 2);
    }
}
