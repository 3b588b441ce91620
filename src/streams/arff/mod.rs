mod arff_file_stream;
mod header_parser;

pub use arff_file_stream::ArffFileStream;
