pub mod address_parser;
pub mod extraction;
pub mod form_fields;
pub mod normalizers;
pub mod record_assembler;
pub mod submission;
