pub mod check;
pub mod component;
pub mod constants;
pub mod options;

pub use check::*;
pub use component::*;
pub use constants::*;
pub use options::*;
