//! Core module containing the fundamental traits and types of the planner

pub mod entity;
pub mod error;
pub mod field;
pub mod service;

pub use entity::{Data, Entity};
pub use error::{PlannerError, PlannerResult, ValidationError};
pub use field::FieldValue;
pub use service::{DataService, OrderQueries};
