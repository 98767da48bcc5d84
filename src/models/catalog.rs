use super::category::Category;
use super::group::Group;
use super::listing::Listing;

#[derive(Debug)]
pub struct Catalog {
    pub categories: &'static [Category],
    pub destinations: &'static [Listing],
    pub groups: &'static [Group],
    pub destinations_map: phf::Map<&'static str, usize>,
    pub groups_map: phf::Map<&'static str, usize>,
}
