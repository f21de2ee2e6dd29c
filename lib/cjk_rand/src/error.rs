use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("CJK Rand Error: invalid argument.\nSource: {src}\nError: {err}")]
    InvalidArgument { src: String, err: String },

    #[error("CJK Rand Error: could not decode code point.\nInput: {input:?}\nError: {err}")]
    InvalidCodePoint { input: String, err: String },

    #[error("CJK Rand Error: unusable code point range [{min:#x}, {max:#x}]")]
    InvalidRange { min: u32, max: u32 },

    #[error("CJK Rand Error: configuration error.\nSource: {src}\n{err}")]
    Config { src: String, err: String },
}

pub fn invarg<S: std::string::ToString, E: std::string::ToString>(src: S, err: E) -> Error {
    Error::InvalidArgument {
        src: src.to_string(),
        err: err.to_string(),
    }
}
pub fn invcp<S: std::string::ToString, E: std::string::ToString>(input: S, err: E) -> Error {
    Error::InvalidCodePoint {
        input: input.to_string(),
        err: err.to_string(),
    }
}
pub fn cfgerr<S: std::string::ToString, E: std::fmt::Display>(src: S) -> impl Fn(E) -> Error {
    move |err: E| -> Error {
        Error::Config {
            src: src.to_string(),
            err: err.to_string(),
        }
    }
}
pub fn error_context<S: std::string::ToString>(context: S) -> impl Fn(&str) -> String {
    move |failure: &str| -> String { format!("{}\nFailed to {}", context.to_string(), failure) }
}
