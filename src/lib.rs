//! # notafiscal
//!
//! Extraction of Brazilian electronic fiscal documents — NF-e invoices and
//! CT-e transport manifests — into a single normalized [`FiscalRecord`]
//! used for aggregation, filtering, and tabular export.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Extraction is deliberately permissive: a recognized document always
//! yields a record (missing fields degrade to empty strings or zero), and
//! only non-XML input or an unknown root schema is rejected.
//!
//! ## Quick Start
//!
//! ```rust
//! use notafiscal::{OperationDirection, extract_document};
//! use rust_decimal_macros::dec;
//!
//! let xml = r#"<NFe>
//!   <infNFe Id="NFe35240412345678000199550010000001231000001234">
//!     <ide><tpNF>1</tpNF><nNF>123</nNF><serie>1</serie>
//!          <dhEmi>2024-04-02T09:00:00-03:00</dhEmi></ide>
//!     <emit><xNome>Fornecedor SA</xNome><CNPJ>12345678000199</CNPJ></emit>
//!     <dest><xNome>ACME LTDA</xNome><CNPJ>98765432000188</CNPJ></dest>
//!     <total><ICMSTot>
//!       <vBC>1000.00</vBC><vICMS>180.00</vICMS><vProd>1000.00</vProd>
//!       <vPIS>16.50</vPIS><vCOFINS>76.00</vCOFINS><vIPI>0.00</vIPI>
//!     </ICMSTot></total>
//!   </infNFe>
//! </NFe>"#;
//!
//! let record = extract_document(xml, "nfe.xml").unwrap();
//! assert_eq!(record.direction, OperationDirection::Outbound);
//! assert_eq!(record.counterparty, "ACME LTDA");
//! // NF-e rates are derived, not read: (180 / 1000) × 100
//! assert_eq!(record.icms.rate, dec!(18.00));
//! assert_eq!(record.pis.rate, dec!(1.65));
//! assert_eq!(record.issue_date, "02/04/2024");
//! ```

pub mod core;
pub mod extract;
pub mod summary;

// Re-export the main entry points at the crate root for convenience
pub use crate::core::*;
pub use crate::extract::extract_document;
pub use crate::summary::{Summary, TaxTotals};
