pub mod marker_query_postgres;

pub use marker_query_postgres::MarkerQueryPostgres;
