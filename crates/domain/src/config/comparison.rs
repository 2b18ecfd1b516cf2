use serde::{Deserialize, Serialize};

/// What to compare: two name servers and the hosts to resolve on both.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ComparisonConfig {
    #[serde(default)]
    pub server_a: String,

    #[serde(default)]
    pub server_b: String,

    #[serde(default)]
    pub hosts_path: String,

    /// `stdout` or a file path.
    #[serde(default = "default_out_path")]
    pub out_path: String,

    /// Zone appended to every host; `@` in the host list stands for the zone itself.
    #[serde(default)]
    pub parent: Option<String>,
}

impl ComparisonConfig {
    pub fn writes_to_stdout(&self) -> bool {
        self.out_path == STDOUT
    }
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            server_a: String::new(),
            server_b: String::new(),
            hosts_path: String::new(),
            out_path: default_out_path(),
            parent: None,
        }
    }
}

const STDOUT: &str = "stdout";

fn default_out_path() -> String {
    STDOUT.to_string()
}
