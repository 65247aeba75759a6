pub mod exporter;

pub use exporter::ContactExporter;
