mod chunk_list;
mod extract_frame;
mod info;
pub mod utils;
