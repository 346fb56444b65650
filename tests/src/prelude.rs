//! Common imports for test files
//!
//! `use tests::prelude::*;`

pub use crate::models::*;
pub use crate::{catalog, context, setup};

pub use fieldmap::{
    Catalog, ClassId, CollisionPolicy, Config, Entity, MappingContext, PropertyBinding, Resolver,
};
pub use std_util::prelude::*;
