pub mod classify;
pub mod content_type;
pub mod status;
pub mod synthesize;

pub use classify::{ClassifiedResponse, ResponseTypeDefinition, classify};
pub use content_type::{ContentFamily, ContentTypeTables};
pub use status::{ResponseKey, Specificity};
pub use synthesize::synthesize;
