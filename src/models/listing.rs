use super::{CategoryRef, String};

#[derive(Debug, Clone)]
#[cfg_attr(not(runtime), derive(serde::Deserialize))]
pub struct Listing {
    pub id: String,
    pub name: String,
    pub image: String,
    pub location: String,
    pub price: String,
    pub duration: u32,
    pub description: String,
    #[cfg_attr(not(runtime), serde(default))]
    pub category: Option<CategoryRef>,
}
