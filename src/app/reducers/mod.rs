mod form;
mod output;
mod overlay;

pub use form::reduce_form;
pub use output::reduce_output;
pub use overlay::reduce_overlay;
