//! Service layer providing the menu operations on top of models.
//! - Validates request fields before any database access.
//! - Maps storage outcomes onto the `ServiceError` taxonomy.

pub mod db;
pub mod errors;
#[cfg(test)]
pub mod test_support;
