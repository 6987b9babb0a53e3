use std::fs;
use std::path::Path;

/// Message category of a print operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    /// Messages originating on the native side of the bridge.
    Native,
    /// Messages relayed from the Java side of the bridge.
    Java,
}

impl Category {
    /// Whether this category's debug switch is on.
    #[must_use]
    pub fn enabled(self, config: &DebugConfig) -> bool {
        match self {
            Category::Native => config.native_debug,
            Category::Java => config.java_debug,
        }
    }
}

/// Runtime switches for the diagnostic logger.
///
/// `native_debug` and `java_debug` gate the mirror channels per category;
/// `send_to_debug_output` and `send_to_console` select the channels
/// themselves. None of the switches affect the log-file write: a record
/// always reaches the file while the sink is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DebugConfig {
    pub native_debug: bool,
    pub java_debug: bool,
    pub send_to_debug_output: bool,
    pub send_to_console: bool,
}

impl DebugConfig {
    /// Reads the switches from `BRIDGE_DEBUG_NATIVE`, `BRIDGE_DEBUG_JAVA`,
    /// `BRIDGE_DEBUG_OUTPUT` and `BRIDGE_DEBUG_CONSOLE`.
    ///
    /// A switch is on when its variable is `1` or `true` (case-insensitive);
    /// anything else, including an unset variable, leaves it off.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            native_debug: env_flag("BRIDGE_DEBUG_NATIVE"),
            java_debug: env_flag("BRIDGE_DEBUG_JAVA"),
            send_to_debug_output: env_flag("BRIDGE_DEBUG_OUTPUT"),
            send_to_console: env_flag("BRIDGE_DEBUG_CONSOLE"),
        }
    }

    /// Loads the switches from the `[debug]` section of an INI-style file.
    ///
    /// Recognized keys are `native`, `java`, `debug_output` and `console`.
    /// Comments (`#`), blank lines, other sections and unknown keys are
    /// ignored; keys that never appear keep their default (off).
    ///
    /// # Errors
    ///
    /// Returns a description of the failure if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Error reading file {}: {e}", path.display()))?;

        let mut config = Self::default();
        let mut in_debug_section = false;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                in_debug_section = line[1..line.len() - 1].eq_ignore_ascii_case("debug");
                continue;
            }

            if !in_debug_section {
                continue;
            }

            if let Some(pos) = line.find('=') {
                let key = line[..pos].trim();
                let value = line[pos + 1..].trim().trim_matches('"');
                let on = flag_value(value);

                match key {
                    "native" => config.native_debug = on,
                    "java" => config.java_debug = on,
                    "debug_output" => config.send_to_debug_output = on,
                    "console" => config.send_to_console = on,
                    _ => {}
                }
            }
        }

        Ok(config)
    }
}

fn env_flag(key: &str) -> bool {
    std::env::var(key).is_ok_and(|v| flag_value(&v))
}

fn flag_value(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use std::io::Write;

    #[test]
    fn default_is_all_off() {
        let config = DebugConfig::default();
        assert!(!config.native_debug);
        assert!(!config.java_debug);
        assert!(!config.send_to_debug_output);
        assert!(!config.send_to_console);
    }

    #[test]
    fn category_maps_to_its_own_switch() {
        let config = DebugConfig {
            native_debug: true,
            ..DebugConfig::default()
        };
        assert!(Category::Native.enabled(&config));
        assert!(!Category::Java.enabled(&config));
    }

    #[test]
    fn flag_value_accepts_one_and_true_only() {
        assert!(flag_value("1"));
        assert!(flag_value("true"));
        assert!(flag_value("TRUE"));
        assert!(!flag_value("0"));
        assert!(!flag_value("yes"));
        assert!(!flag_value(""));
    }

    #[test]
    fn load_reads_debug_section_and_skips_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bridge.ini");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "# bridge diagnostics\n\
             [logging]\n\
             native = true\n\
             [debug]\n\
             native = \"1\"\n\
             console = true\n\
             verbosity = high\n\
             \n\
             [other]\n\
             java = true"
        )
        .unwrap();

        let config = DebugConfig::load(&path).unwrap();
        assert!(config.native_debug);
        assert!(config.send_to_console);
        assert!(!config.java_debug, "key outside [debug] must not apply");
        assert!(!config.send_to_debug_output);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = DebugConfig::load("definitely/not/here.ini").unwrap_err();
        assert!(err.contains("definitely/not/here.ini"));
    }
}
