//! Cobertura XML report generation

mod formatter;
mod xml;

pub use formatter::{generate_cobertura_xml, CoberturaFormatter, COBERTURA_VERSION, PROLOG};
pub use xml::{escape_attr, escape_text, XmlWriter};
