pub mod convert;
pub mod draw;
pub mod generate;
pub mod manifest;
pub mod output;
