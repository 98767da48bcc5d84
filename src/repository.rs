use super::models::{Catalog, Category, Group, Listing};

pub const ALL_CATEGORY_SLUG: &str = "all";

/// Filter selection resolved against the catalog's category set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySelection {
    All,
    Only(usize),
}

/// Order-preserving subsequence of `listings` matching `selection`.
/// `All` is the identity; an empty result is a valid outcome.
pub fn filter_by_category<'a, I>(listings: I, selection: CategorySelection) -> Vec<&'a Listing>
where
    I: IntoIterator<Item = &'a Listing>,
{
    match selection {
        CategorySelection::All => listings.into_iter().collect(),
        CategorySelection::Only(index) => listings
            .into_iter()
            .filter(|listing| listing.category == Some(index))
            .collect(),
    }
}

#[derive(Clone, Copy)]
pub struct Repository<'a> {
    catalog: &'a Catalog,
}

impl<'a> Repository<'a> {

    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub const fn categories(&self) -> &'static [Category] {
        self.catalog.categories
    }

    pub const fn destinations(&self) -> &'static [Listing] {
        self.catalog.destinations
    }

    pub const fn groups(&self) -> &'static [Group] {
        self.catalog.groups
    }

    pub fn destinations_in(&self, category: &Category) -> Vec<&'static Listing> {
        self.selection_for(category).map_or_else(Vec::new, |selection| {
            filter_by_category(self.catalog.destinations, selection)
        })
    }

    pub fn destination_by_id(&self, id: &str) -> Option<&'static Listing> {
        self.catalog
            .destinations_map
            .get(id)
            .and_then(|&index| self.catalog.destinations.get(index))
    }

    pub fn group_by_id(&self, id: &str) -> Option<&'static Group> {
        self.catalog
            .groups_map
            .get(id)
            .and_then(|&index| self.catalog.groups.get(index))
    }

    fn selection_for(&self, category: &Category) -> Option<CategorySelection> {
        if category.slug == ALL_CATEGORY_SLUG {
            return Some(CategorySelection::All);
        }

        self.catalog
            .categories
            .iter()
            .position(|candidate| candidate.slug == category.slug)
            .map(CategorySelection::Only)
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    const fn listing(id: &'static str, name: &'static str, category: Option<usize>) -> Listing {
        Listing {
            id,
            name,
            image: "file:///tmp/none.png",
            location: "Somewhere",
            price: "$100",
            duration: 3,
            description: "A place.",
            category,
        }
    }

    static TEST_CATEGORIES: &[Category] = &[
        Category { slug: "all", name: "All", icon: "view-grid-symbolic" },
        Category { slug: "beaches", name: "Beaches", icon: "weather-clear-symbolic" },
        Category { slug: "mountains", name: "Mountains", icon: "weather-snow-symbolic" },
    ];

    static TEST_DESTINATIONS: &[Listing] = &[
        listing("d1", "First", Some(1)),
        listing("d2", "Second", Some(2)),
        listing("d3", "Third", Some(1)),
        listing("d4", "Fourth", None),
    ];

    static TEST_GROUPS: &[Group] = &[Group {
        id: "g1",
        name: "Hiking Crew",
        image: "file:///tmp/none.png",
        location: "Alps",
        price: "$80",
    }];

    static TEST_CATALOG: Catalog = Catalog {
        categories: TEST_CATEGORIES,
        destinations: TEST_DESTINATIONS,
        groups: TEST_GROUPS,
        destinations_map: phf::phf_map! {
            "d1" => 0usize,
            "d2" => 1usize,
            "d3" => 2usize,
            "d4" => 3usize,
        },
        groups_map: phf::phf_map! {
            "g1" => 0usize,
        },
    };

    fn repository() -> Repository<'static> {
        Repository::new(&TEST_CATALOG)
    }

    #[test]
    fn all_selection_is_identity_including_order() {
        let filtered = filter_by_category(TEST_DESTINATIONS, CategorySelection::All);
        assert_eq!(filtered.len(), TEST_DESTINATIONS.len());
        for (kept, original) in filtered.iter().zip(TEST_DESTINATIONS) {
            assert_eq!(kept.id, original.id);
        }
    }

    #[test]
    fn filter_keeps_only_matching_records_in_order() {
        let filtered = filter_by_category(TEST_DESTINATIONS, CategorySelection::Only(1));
        let ids: Vec<&str> = filtered.iter().map(|listing| listing.id).collect();
        assert_eq!(ids, ["d1", "d3"]);
        assert!(filtered.iter().all(|listing| listing.category == Some(1)));
    }

    #[test]
    fn filter_partitions_the_collection() {
        let matching = filter_by_category(TEST_DESTINATIONS, CategorySelection::Only(1)).len();
        let rest = TEST_DESTINATIONS
            .iter()
            .filter(|listing| listing.category != Some(1))
            .count();
        assert_eq!(matching + rest, TEST_DESTINATIONS.len());
    }

    #[test]
    fn filter_is_idempotent() {
        let once = filter_by_category(TEST_DESTINATIONS, CategorySelection::Only(2));
        let twice = filter_by_category(once.clone(), CategorySelection::Only(2));
        let once_ids: Vec<&str> = once.iter().map(|listing| listing.id).collect();
        let twice_ids: Vec<&str> = twice.iter().map(|listing| listing.id).collect();
        assert_eq!(once_ids, twice_ids);
    }

    #[test]
    fn filter_with_no_matches_is_empty_not_an_error() {
        static LONELY: &[Listing] = &[listing("x1", "Only", Some(1))];
        assert!(filter_by_category(LONELY, CategorySelection::Only(2)).is_empty());
    }

    #[test]
    fn repository_resolves_categories_from_its_catalog() {
        let repository = repository();
        let beaches = &TEST_CATEGORIES[1];
        let ids: Vec<&str> = repository
            .destinations_in(beaches)
            .iter()
            .map(|listing| listing.id)
            .collect();
        assert_eq!(ids, ["d1", "d3"]);

        let all = &TEST_CATEGORIES[0];
        assert_eq!(repository.destinations_in(all).len(), TEST_DESTINATIONS.len());
    }

    #[test]
    fn unknown_category_yields_an_empty_result() {
        let foreign = Category {
            slug: "volcanoes",
            name: "Volcanoes",
            icon: "weather-storm-symbolic",
        };
        assert!(repository().destinations_in(&foreign).is_empty());
    }

    #[test]
    fn lookup_returns_the_unique_matching_record() {
        let found = repository().destination_by_id("d2").unwrap();
        assert_eq!(found.name, "Second");
    }

    #[test]
    fn lookup_miss_is_none() {
        assert!(repository().destination_by_id("missing").is_none());
        assert!(repository().group_by_id("missing").is_none());
    }

    #[test]
    fn group_lookup_uses_its_own_keyspace() {
        assert!(repository().destination_by_id("g1").is_none());
        assert_eq!(repository().group_by_id("g1").unwrap().name, "Hiking Crew");
    }

    #[test]
    fn bundled_catalog_is_internally_consistent() {
        let catalog = &crate::constants::APP_CATALOG;
        for (id, &index) in catalog.destinations_map.entries() {
            assert_eq!(catalog.destinations[index].id, *id);
        }
        for (id, &index) in catalog.groups_map.entries() {
            assert_eq!(catalog.groups[index].id, *id);
        }
        for listing in catalog.destinations {
            if let Some(index) = listing.category {
                assert!(index < catalog.categories.len());
            }
        }
        assert!(catalog.categories.iter().any(|c| c.slug == ALL_CATEGORY_SLUG));
    }
}
