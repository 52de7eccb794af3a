pub mod matrix_csv;
pub mod matrix_text;
pub mod run_log;
