//! Parameter file loading

use std::fs::read_to_string;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::common::DubinsResult;

/// Load a TOML parameter file into any deserializable parameter struct.
///
/// Read failures surface as `IoError`, malformed content as `ConfigError`.
pub fn load<P, Q>(param_file_path: Q) -> DubinsResult<P>
where
    P: DeserializeOwned,
    Q: AsRef<Path>,
{
    let params_str = read_to_string(param_file_path.as_ref())?;
    let params = toml::from_str(&params_str)?;
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::DubinsError;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Params {
        turning_radius: f64,
    }

    #[test]
    fn test_load_missing_file() {
        let result: DubinsResult<Params> = load("does/not/exist.toml");
        assert!(matches!(result, Err(DubinsError::IoError(_))));
    }

    #[test]
    fn test_load_file() {
        let path = std::env::temp_dir().join("simple_dubins_params_test.toml");
        std::fs::write(&path, "turning_radius = 3.5\n").unwrap();
        let params: Params = load(&path).unwrap();
        assert_eq!(params.turning_radius, 3.5);
        let _ = std::fs::remove_file(&path);
    }
}
