use regex::Regex;

use crate::application::ports::ChatClientError;

/// Static capability table for sampling parameters, keyed by model-family
/// pattern. Some hosted model families (reasoning models in particular)
/// reject temperature and top-p outright; deployments matching a deny
/// pattern never get them in the first request.
pub struct SamplingPolicy {
    disabled: bool,
    deny_patterns: Vec<Regex>,
}

impl SamplingPolicy {
    pub fn new(disabled: bool, deny_patterns: &[String]) -> Result<Self, ChatClientError> {
        let deny_patterns = deny_patterns
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|e| {
                    ChatClientError::Configuration(format!(
                        "invalid sampling deny pattern '{p}': {e}"
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            disabled,
            deny_patterns,
        })
    }

    pub fn allows(&self, deployment: &str) -> bool {
        if self.disabled {
            return false;
        }
        let name = deployment.to_lowercase();
        !self.deny_patterns.iter().any(|p| p.is_match(&name))
    }
}
