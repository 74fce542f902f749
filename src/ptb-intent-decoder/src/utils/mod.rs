pub mod type_tag;
