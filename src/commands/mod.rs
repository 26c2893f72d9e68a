//! Command implementations.

mod create;

pub use create::{
    CreateArgs,
    create,
    create_with_client,
};
