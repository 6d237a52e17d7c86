mod error;
mod graphql;

pub use self::error::QueryError;
pub use self::graphql::GraphQlClient;
