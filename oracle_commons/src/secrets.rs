use std::{collections::HashMap, fs, io::ErrorKind, path::Path};

/// Key file read when a secret isn't in the environment.
pub const KEY_FILE: &str = match cfg!(debug_assertions) {
    true => "key_debug",
    false => "key",
};

/// Named secrets handed to a request function at startup,
/// like API keys. Lives for the whole process.
#[derive(Clone, Default)]
pub struct SecretMap(HashMap<String, String>);

impl SecretMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a single secret named `name` from the environment variable
    /// `env_var`, or from [`KEY_FILE`] in the working directory if the
    /// variable isn't set.
    ///
    /// If neither is there, the map is returned without it, and it's
    /// up to whoever needs the secret to complain.
    pub fn load(name: &str, env_var: &str) -> Self {
        let mut secrets = Self::new();

        if let Some(value) = std::env::var_os(env_var) {
            match value.into_string() {
                Ok(value) => {
                    log::debug!("Loaded secret {name} from ${env_var}");
                    secrets.insert(name, value);
                }
                Err(_) => log::warn!("${env_var} is not valid UTF-8, ignoring it"),
            }
            return secrets;
        }

        match read_key_file(KEY_FILE) {
            Ok(Some(value)) => {
                log::debug!("Loaded secret {name} from key file {KEY_FILE}");
                secrets.insert(name, value);
            }
            Ok(None) => log::debug!("No ${env_var} and no key file {KEY_FILE}"),
            Err(e) => log::warn!("Could not read key file {KEY_FILE}: {e}"),
        }

        secrets
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Get a secret, treating an empty one as not set.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .map(String::as_str)
            .filter(|x| !x.is_empty())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SecretMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

// Don't leak secrets into logs by accident.
impl std::fmt::Debug for SecretMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.0.keys()).finish()
    }
}

/// Read a key file, trimming the trailing newline editors like to add.
///
/// Returns `Ok(None)` if the file doesn't exist.
pub fn read_key_file(path: impl AsRef<Path>) -> std::io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(key) => Ok(Some(key.trim().to_string())),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_secret_is_not_set() {
        let secrets: SecretMap = [("apiKey", ""), ("other", "hunter2")].into_iter().collect();
        assert_eq!(secrets.get("apiKey"), None);
        assert_eq!(secrets.get("other"), Some("hunter2"));
        assert_eq!(secrets.get("missing"), None);
    }

    #[test]
    fn debug_does_not_print_values() {
        let secrets: SecretMap = [("apiKey", "hunter2")].into_iter().collect();
        let printed = format!("{:?}", secrets);
        assert!(printed.contains("apiKey"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn key_file_is_trimmed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  sekrit  ").unwrap();
        assert_eq!(
            read_key_file(file.path()).unwrap(),
            Some(String::from("sekrit"))
        );
    }

    #[test]
    fn missing_key_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_key_file(dir.path().join("nope")).unwrap(), None);
    }

    #[test]
    fn load_prefers_environment() {
        // Unique name so parallel tests don't trip over each other.
        let var = "ORACLE_COMMONS_TEST_LOAD_PREFERS_ENVIRONMENT";
        std::env::set_var(var, "from-env");
        let secrets = SecretMap::load("apiKey", var);
        std::env::remove_var(var);
        assert_eq!(secrets.get("apiKey"), Some("from-env"));
    }
}
