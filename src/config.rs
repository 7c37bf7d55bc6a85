pub struct Config {
    // Upper bound on a single socket read. Inbound data is passed through
    // chunk by chunk; nothing is reassembled across reads.
    pub read_chunk_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            read_chunk_size: 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_chunk_size() {
        assert_eq!(Config::default().read_chunk_size, 1024);
    }
}
