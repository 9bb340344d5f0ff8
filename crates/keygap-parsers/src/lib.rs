pub mod queries;
pub mod treesitter;
pub mod walker;
