pub mod catalog;
pub mod model;
pub mod resolver;

pub use catalog::ProfileCatalog;
pub use model::{Profile, is_firm_identifier};
pub use resolver::{KeywordResolver, normalize_keywords};
