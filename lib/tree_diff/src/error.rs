use abst_fs::AbstPath;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "Tree Diff Error: could not take snapshot of specified path as it is not a directory\npath: {path}"
    )]
    NonDirRoot { path: AbstPath },

    #[error("Tree Diff Error: unknown group flag '{flag}', expected one of 'a', 'c', 'r', 's', 'u'")]
    InvalidFlag { flag: char },

    #[error("Tree Diff Error: no group selected, flags must contain at least one of 'a', 'c', 'r', 's', 'u'")]
    EmptyFlags,

    #[error("Tree Diff Error: inner error occurred\nSource: {src}\nError: {err}")]
    Inner { src: String, err: String },

    #[error("Tree Diff Error: some error occurred.\nSource: {src}\nError: {err}")]
    Generic { src: String, err: String },
}

pub fn inerr<S: std::string::ToString, E: std::error::Error>(src: S) -> impl Fn(E) -> Error {
    move |err: E| -> Error {
        Error::Inner {
            src: src.to_string(),
            err: err.to_string(),
        }
    }
}
pub fn error_context<S: std::string::ToString>(context: S) -> impl Fn(&str) -> String {
    move |failure: &str| -> String { format!("{}\nFailed to {}", context.to_string(), failure) }
}
