//! Command implementations.
//!
//! Each command runs against an open catalog and returns the rendered output.

pub mod analogs;
pub mod groups;
pub mod relation;
pub mod search;
pub mod suggest;

pub use self::analogs::execute_analogs;
pub use self::groups::execute_groups;
pub use self::relation::execute_relation;
pub use self::search::execute_search;
pub use self::suggest::execute_suggest;
