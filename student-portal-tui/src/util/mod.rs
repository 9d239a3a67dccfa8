mod terminal;

pub use terminal::{init_terminal, install_panic_hook, restore_terminal, Term};
