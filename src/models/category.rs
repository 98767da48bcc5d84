use super::String;

#[derive(Debug, Clone)]
#[cfg_attr(not(runtime), derive(serde::Deserialize))]
pub struct Category {
    #[cfg_attr(not(runtime), serde(default))]
    pub slug: String,
    pub name: String,
    pub icon: String,
}
