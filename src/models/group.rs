use super::String;

#[derive(Debug, Clone)]
#[cfg_attr(not(runtime), derive(serde::Deserialize))]
pub struct Group {
    pub id: String,
    pub name: String,
    pub image: String,
    pub location: String,
    pub price: String,
}
