pub mod confidence_bar;
pub mod header;
pub mod number_field;
pub mod upload_area;
