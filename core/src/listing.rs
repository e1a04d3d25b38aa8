//! # List View Pipeline
//!
//! Derives what the list screen shows from the canonical box list:
//!
//! 1. **Filter**: the search term must appear in the receiver name or the
//!    destination name (ignoring case), and the country filter must match.
//! 2. **Sort**: applied last and only when a sort field is selected. The
//!    sort is stable, so ties keep their insertion order.
//! 3. **Total**: the cost of the whole inventory, independent of 1 and 2.
//!
//! Nothing here mutates the list; [`project`] borrows it and is cheap enough
//! to call on every render.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use shipbox_common::error::ParseOptionError;
use shipbox_common::shipping::country::Country;
use shipbox_common::shipping::parcel::ShippingBox;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CountryFilter {
    #[default]
    All,
    Only(Country),
}

impl CountryFilter {
    pub fn matches(self, country: Country) -> bool {
        match self {
            CountryFilter::All => true,
            CountryFilter::Only(wanted) => wanted == country,
        }
    }

    /// All → Sweden → ... → Australia → All.
    pub fn next(self) -> CountryFilter {
        match self {
            CountryFilter::All => CountryFilter::Only(Country::ALL[0]),
            CountryFilter::Only(c) if c == Country::ALL[Country::ALL.len() - 1] => {
                CountryFilter::All
            }
            CountryFilter::Only(c) => CountryFilter::Only(c.next()),
        }
    }
}

impl fmt::Display for CountryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountryFilter::All => f.write_str("All"),
            CountryFilter::Only(country) => country.fmt(f),
        }
    }
}

impl FromStr for CountryFilter {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CountryFilter::All);
        }
        Country::from_str(s)
            .map(CountryFilter::Only)
            .map_err(|_| ParseOptionError::new("country filter", s))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    None,
    Name,
    Weight,
    Cost,
}

impl FromStr for SortField {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(SortField::None),
            "name" => Ok(SortField::Name),
            "weight" => Ok(SortField::Weight),
            "cost" => Ok(SortField::Cost),
            _ => Err(ParseOptionError::new("sort field", s)),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortField::None => "none",
            SortField::Name => "name",
            SortField::Weight => "weight",
            SortField::Cost => "cost",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> SortOrder {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

/// Selected sort column and direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortState {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Clicking a column header: the same field flips the order, another
    /// field is selected ascending.
    pub fn activate(&mut self, field: SortField) {
        if self.field == field {
            self.order = self.order.flipped();
        } else {
            self.field = field;
            self.order = SortOrder::Asc;
        }
    }
}

/// Every input of the pipeline except the list itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    /// The debounced search term, not the raw keystrokes.
    pub search: String,
    pub country: CountryFilter,
    pub sort: SortState,
}

/// The rows to render and the inventory total.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection<'a> {
    pub rows: Vec<&'a ShippingBox>,
    pub total_cost: f64,
}

impl Projection<'_> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn project<'a>(boxes: &'a [ShippingBox], query: &ListQuery) -> Projection<'a> {
    let needle = query.search.to_lowercase();
    let mut rows: Vec<&ShippingBox> = boxes
        .iter()
        .filter(|parcel| {
            matches_search(parcel, &needle) && query.country.matches(parcel.destination_country)
        })
        .collect();

    sort_rows(&mut rows, query.sort);

    Projection {
        rows,
        total_cost: total_cost(boxes),
    }
}

pub fn total_cost(boxes: &[ShippingBox]) -> f64 {
    boxes.iter().map(|parcel| parcel.shipping_cost).sum()
}

/// `needle` must already be lowercase.
fn matches_search(parcel: &ShippingBox, needle: &str) -> bool {
    needle.is_empty()
        || parcel.receiver_name.to_lowercase().contains(needle)
        || parcel.destination_country.name().to_lowercase().contains(needle)
}

fn sort_rows(rows: &mut [&ShippingBox], sort: SortState) {
    let compare: fn(&ShippingBox, &ShippingBox) -> Ordering = match sort.field {
        SortField::None => return,
        SortField::Name => |a, b| {
            a.receiver_name
                .to_lowercase()
                .cmp(&b.receiver_name.to_lowercase())
        },
        SortField::Weight => |a, b| a.weight.total_cmp(&b.weight),
        SortField::Cost => |a, b| a.shipping_cost.total_cmp(&b.shipping_cost),
    };
    rows.sort_by(|a, b| sort.order.apply(compare(a, b)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parcel(id: &str, name: &str, weight: f64, country: Country, cost: f64) -> ShippingBox {
        ShippingBox {
            id: id.to_string(),
            receiver_name: name.to_string(),
            weight,
            box_color: "0, 0, 0".to_string(),
            destination_country: country,
            shipping_cost: cost,
        }
    }

    fn inventory() -> Vec<ShippingBox> {
        vec![
            parcel("1", "charlie", 3.0, Country::Brazil, 46.89),
            parcel("2", "Alice", 5.0, Country::Sweden, 36.75),
            parcel("3", "bob", 2.0, Country::Australia, 100.18),
            parcel("4", "Alice", 10.0, Country::China, 115.3),
        ]
    }

    fn ids(projection: &Projection<'_>) -> Vec<String> {
        projection.rows.iter().map(|p| p.id.clone()).collect()
    }

    fn query(search: &str, country: CountryFilter, field: SortField, order: SortOrder) -> ListQuery {
        ListQuery {
            search: search.to_string(),
            country,
            sort: SortState::new(field, order),
        }
    }

    #[test]
    fn default_query_keeps_insertion_order() {
        let boxes = inventory();
        let projection = project(&boxes, &ListQuery::default());
        assert_eq!(ids(&projection), ["1", "2", "3", "4"]);
    }

    #[test]
    fn search_matches_name_or_country_ignoring_case() {
        let boxes = inventory();
        let by_name = project(&boxes, &query("ALICE", CountryFilter::All, SortField::None, SortOrder::Asc));
        assert_eq!(ids(&by_name), ["2", "4"]);

        let by_country = project(&boxes, &query("swe", CountryFilter::All, SortField::None, SortOrder::Asc));
        assert_eq!(ids(&by_country), ["2"]);

        // "ali" is also inside "Australia"
        let partial = project(&boxes, &query("ali", CountryFilter::All, SortField::None, SortOrder::Asc));
        assert_eq!(ids(&partial), ["2", "3", "4"]);

        let none = project(&boxes, &query("zzz", CountryFilter::All, SortField::None, SortOrder::Asc));
        assert!(none.is_empty());
    }

    #[test]
    fn country_filter_composes_with_search() {
        let boxes = inventory();
        let projection = project(
            &boxes,
            &query("alice", CountryFilter::Only(Country::China), SortField::None, SortOrder::Asc),
        );
        assert_eq!(ids(&projection), ["4"]);
    }

    #[test]
    fn name_sort_ignores_case_and_is_stable() {
        let boxes = inventory();
        let asc = project(&boxes, &query("", CountryFilter::All, SortField::Name, SortOrder::Asc));
        assert_eq!(ids(&asc), ["2", "4", "3", "1"]);

        let desc = project(&boxes, &query("", CountryFilter::All, SortField::Name, SortOrder::Desc));
        assert_eq!(ids(&desc), ["1", "3", "2", "4"]);
    }

    #[test]
    fn numeric_sorts() {
        let boxes = inventory();
        let weight = project(&boxes, &query("", CountryFilter::All, SortField::Weight, SortOrder::Asc));
        assert_eq!(ids(&weight), ["3", "1", "2", "4"]);

        let cost = project(&boxes, &query("", CountryFilter::All, SortField::Cost, SortOrder::Desc));
        assert_eq!(ids(&cost), ["4", "3", "1", "2"]);
    }

    #[test]
    fn filtering_before_or_after_sorting_agrees() {
        let boxes = inventory();
        let q = query("e", CountryFilter::All, SortField::Cost, SortOrder::Asc);
        let filtered_then_sorted = ids(&project(&boxes, &q));

        let sorted_all = project(&boxes, &query("", CountryFilter::All, SortField::Cost, SortOrder::Asc));
        let sorted_then_filtered: Vec<String> = sorted_all
            .rows
            .iter()
            .filter(|p| matches_search(p, "e"))
            .map(|p| p.id.clone())
            .collect();

        assert_eq!(filtered_then_sorted, sorted_then_filtered);
    }

    #[test]
    fn total_ignores_filters() {
        let boxes = inventory();
        let everything = project(&boxes, &ListQuery::default());
        let filtered = project(
            &boxes,
            &query("bob", CountryFilter::Only(Country::Australia), SortField::Weight, SortOrder::Desc),
        );
        assert_eq!(filtered.rows.len(), 1);
        assert_eq!(everything.total_cost, filtered.total_cost);
        assert!((filtered.total_cost - 299.12).abs() < 1e-9);
    }

    #[test]
    fn projection_leaves_list_untouched() {
        let boxes = inventory();
        let before = boxes.clone();
        let _ = project(&boxes, &query("", CountryFilter::All, SortField::Cost, SortOrder::Desc));
        assert_eq!(boxes, before);
    }

    #[test]
    fn activating_same_field_toggles_order() {
        let mut sort = SortState::default();
        sort.activate(SortField::Name);
        assert_eq!(sort, SortState::new(SortField::Name, SortOrder::Asc));
        sort.activate(SortField::Name);
        assert_eq!(sort.order, SortOrder::Desc);
        sort.activate(SortField::Name);
        assert_eq!(sort, SortState::new(SortField::Name, SortOrder::Asc));
    }

    #[test]
    fn activating_other_field_starts_ascending() {
        let mut sort = SortState::new(SortField::Name, SortOrder::Desc);
        sort.activate(SortField::Cost);
        assert_eq!(sort, SortState::new(SortField::Cost, SortOrder::Asc));
    }

    #[test]
    fn parses_options() {
        assert_eq!("ALL".parse::<CountryFilter>(), Ok(CountryFilter::All));
        assert_eq!("china".parse::<CountryFilter>(), Ok(CountryFilter::Only(Country::China)));
        assert!("mars".parse::<CountryFilter>().is_err());
        assert_eq!("Weight".parse::<SortField>(), Ok(SortField::Weight));
        assert!("colour".parse::<SortField>().is_err());
    }

    #[test]
    fn country_filter_cycles_through_all() {
        let mut filter = CountryFilter::All;
        let mut seen = Vec::new();
        for _ in 0..5 {
            filter = filter.next();
            seen.push(filter);
        }
        assert_eq!(
            seen,
            [
                CountryFilter::Only(Country::Sweden),
                CountryFilter::Only(Country::China),
                CountryFilter::Only(Country::Brazil),
                CountryFilter::Only(Country::Australia),
                CountryFilter::All,
            ]
        );
    }
}
