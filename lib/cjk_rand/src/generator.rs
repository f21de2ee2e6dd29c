use super::{
    decode_code_point, error_context, invarg, sample_code_point, to_hex, Error, GeneratorConfig,
};

use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Produces random text by sampling code points between the configured bounds
pub struct Generator<R: Rng> {
    config: GeneratorConfig,
    rng: R,
}

impl Generator<SmallRng> {
    /// Build a generator from a config, seeding from the config's seed when
    /// present (reproducible output) and from OS entropy otherwise
    pub fn new(config: GeneratorConfig) -> Result<Self, Error> {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Generator::with_rng(config, rng)
    }
}

impl<R: Rng> Generator<R> {
    pub fn with_rng(config: GeneratorConfig, rng: R) -> Result<Self, Error> {
        config.validate()?;
        Ok(Generator { config, rng })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn next_char(&mut self) -> Result<char, Error> {
        let code_point = sample_code_point(
            &mut self.rng,
            self.config.min_code_point,
            self.config.max_code_point,
            self.config.range_mode,
        )?;
        tracing::trace!(code_point, "sampled code point");
        decode_code_point(&to_hex(code_point))
    }

    /// Generate `len` independently sampled characters
    pub fn generate(&mut self, len: usize) -> Result<String, Error> {
        tracing::debug!(len, mode = ?self.config.range_mode, "generating random text");
        let mut content = String::new();
        for _ in 0..len {
            content.push(self.next_char()?);
        }
        Ok(content)
    }
}

/// Random CJK text of `len` characters using the default bounds and the thread
/// local generator
pub fn random_content(len: usize) -> Result<String, Error> {
    Generator::with_rng(GeneratorConfig::default(), rand::thread_rng())?.generate(len)
}

/// Same as [`random_content`] but for a signed length, rejecting negative values
/// with [`Error::InvalidArgument`]
pub fn get_random_content(len: i64) -> Result<String, Error> {
    let errctx = error_context("could not get random content");
    if len < 0 {
        return Err(invarg(
            errctx("validate length"),
            format!("length must be non-negative, got {len}"),
        ));
    }
    let len = usize::try_from(len)
        .map_err(|err| invarg(errctx("convert length to usize"), err))?;
    random_content(len)
}
