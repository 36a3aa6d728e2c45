mod key_chip;
mod panel_border;
mod type_chip;

pub use key_chip::{key_chip, key_text};
pub use panel_border::{field_block, panel_block};
pub use type_chip::type_chip;
