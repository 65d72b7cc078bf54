pub mod list_query;
