pub mod config;
pub mod export;
pub mod storage;
pub mod workbook;
