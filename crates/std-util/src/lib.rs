pub mod option;
pub mod result;
pub mod str;

pub mod prelude {
    pub use crate::{assert_err, assert_none, assert_ok};
}
