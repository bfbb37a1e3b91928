pub mod error;
pub mod id_generator;
pub mod node;
pub mod serializer;

pub use error::{DocumentError, DocumentResult};
pub use id_generator::{get_document_id, IdGenerator};
pub use node::{PageNode, ROOT_ID, ROOT_TYPE};
pub use serializer::{from_json, to_json, to_json_pretty};
