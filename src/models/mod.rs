mod listing;
mod group;
mod category;
mod catalog;

#[cfg(runtime)]
type String = &'static str;
#[cfg(not(runtime))]
type String = std::string::String;

#[cfg(runtime)]
type CategoryRef = usize;
#[cfg(not(runtime))]
type CategoryRef = std::string::String;

pub use self::listing::Listing;
pub use self::group::Group;
pub use self::category::Category;
pub use self::catalog::Catalog;
