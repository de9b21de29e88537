pub mod headers;
pub mod parts;
