//! Faculty Repository Port

use crate::domain::Faculty;

use super::Crud;

/// Repository interface for Faculty entities
pub trait FacultyRepository: Crud<Faculty> {}
