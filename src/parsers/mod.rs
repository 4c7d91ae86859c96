pub mod response;

pub use response::parse_analysis;
