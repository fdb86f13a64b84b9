use crate::error::Result;
use crate::types::MirrorTarget;
use serde::Deserialize;
use std::time::Duration;

// Include the JSON file at compile time
const MIRRORS_JSON: &str = include_str!("../assets/mirrors.json");

/// Ceiling for a single probe, from request start to the last body byte
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

pub const BANNER: &str = "Testing Resilience Layer...";

#[derive(Debug, Deserialize)]
struct MirrorList {
    mirrors: Vec<MirrorTarget>,
}

/// The built-in mirror list, in probe order
pub fn mirror_targets() -> Result<Vec<MirrorTarget>> {
    parse_targets(MIRRORS_JSON)
}

pub fn parse_targets(json: &str) -> Result<Vec<MirrorTarget>> {
    let list: MirrorList = serde_json::from_str(json)?;
    Ok(list.mirrors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MirrorError;

    #[test]
    fn builtin_list_is_four_mirrors_in_order() -> Result<()> {
        let urls: Vec<String> = mirror_targets()?.into_iter().map(|t| t.url).collect();
        assert_eq!(
            urls,
            vec![
                "https://api.themoviedb.org/3/configuration",
                "https://imagetmdb.com/t/p/w92/kqjL17yufvn9OVLyXYpvtyrFfak.jpg",
                "https://nl.imagetmdb.com/t/p/w92/kqjL17yufvn9OVLyXYpvtyrFfak.jpg",
                "https://apn-latest.onrender.com/3/configuration",
            ]
        );
        Ok(())
    }

    #[test]
    fn empty_list_parses() -> Result<()> {
        assert!(parse_targets(r#"{ "mirrors": [] }"#)?.is_empty());
        Ok(())
    }

    #[test]
    fn malformed_list_is_json_error() {
        let err = parse_targets(r#"{ "mirrors": "nope" }"#).unwrap_err();
        assert!(matches!(err, MirrorError::Json(_)));
    }
}
