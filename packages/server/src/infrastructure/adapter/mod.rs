//! Adapter の実装（問い合わせ結果をどうサーバーレコードにするか）

pub mod qstat_xml;

pub use qstat_xml::{QSTAT_XML_ADAPTER, QStatXmlAdapter};
