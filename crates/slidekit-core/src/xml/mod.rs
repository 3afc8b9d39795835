pub mod arena;
pub mod namespaces;
pub mod node;
pub mod parser;
pub mod scan;
pub mod xname;

pub use arena::XmlDocument;
pub use node::XmlNodeData;
pub use xname::{XAttribute, XName};
pub use namespaces::{namespace_uri, A, MC, P, P14, PR, R};
