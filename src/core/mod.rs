//! Core record types, errors, and normalizers.
//!
//! This module provides the unified [`FiscalRecord`] produced for both
//! document kinds, plus the formatting rules shared by the extractors
//! and report layers.

mod error;
pub mod format;
mod types;

pub use error::*;
pub use format::{format_brl, format_cnpj_cpf, format_issue_date, format_percent};
pub use types::*;
