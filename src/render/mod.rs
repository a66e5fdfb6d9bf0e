mod json;
mod record;

pub use json::{sorted_contents, write_contents_json};
pub use record::{render_record, REFERENCES_HEADER};
