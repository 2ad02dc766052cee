use crate::types::size::parse_size;

pub fn parse_human_size(value: &str) -> Result<u64, String> {
    parse_size(value).map_err(|e| e.to_string())
}
