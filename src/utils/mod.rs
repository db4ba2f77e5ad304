pub mod query;
pub mod string;

pub use query::{first_value, parse_query_string, QueryParams};
pub use string::{is_ascii_digits, to_bool, yaml_bool};
