mod error;
use error::{cfgerr, error_context, invarg, invcp};
pub use error::Error;

mod random;
pub use random::{bounded_random, sample_code_point, RangeMode};

mod decode;
pub use decode::{decode_code_point, to_hex};

mod config;
pub use config::{GeneratorConfig, CJK_MAX, CJK_MIN};

mod generator;
pub use generator::{get_random_content, random_content, Generator};
