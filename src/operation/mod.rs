//! One module per CLI command. Every operation takes the store explicitly and
//! performs its remote calls strictly one after another.

pub mod bucket_lister;
pub mod deleter;
pub mod downloader;
pub mod object_lister;
pub mod uploader;
