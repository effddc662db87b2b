mod parse;
mod recipe;
mod repl;

pub use parse::cmd_parse;
pub use recipe::cmd_recipe;
pub use repl::cmd_repl;
