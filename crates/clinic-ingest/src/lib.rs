pub mod parser;
pub mod reader;
pub mod template;

pub use parser::{Delimiter, parse_records};
pub use reader::read_import_file;
pub use template::{TEMPLATE_CSV, TEMPLATE_FILE_NAME};
