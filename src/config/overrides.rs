use serde_json::{Value, json};
use std::path::PathBuf;

/// Values supplied on the command line; `None` leaves the lower layers alone
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub title: Option<String>,
}

impl ConfigOverrides {
    /// Nested config value containing only the fields that were set
    pub fn to_value(&self) -> Value {
        let mut value = json!({
            "inputs": { "dir": path_string(&self.input_dir) },
            "outputs": { "dir": path_string(&self.output_dir) },
            "dashboard": { "title": self.title },
        });
        prune_unset(&mut value);
        value
    }
}

fn path_string(path: &Option<PathBuf>) -> Option<String> {
    path.as_ref().map(|p| p.to_string_lossy().into_owned())
}

/// Drop nulls, then any object left empty by doing so
fn prune_unset(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (_, v) in map.iter_mut() {
                prune_unset(v);
            }
            map.retain(|_, v| match v {
                Value::Null => false,
                Value::Object(inner) => !inner.is_empty(),
                _ => true,
            });
        }
        Value::Array(arr) => {
            for item in arr.iter_mut() {
                prune_unset(item);
            }
        }
        _ => {}
    }
}
