use serde::{Deserialize, Serialize};

/// Caller-facing knobs for a notifier run.
///
/// Sourcing the values (env, file, secret store) is the embedding
/// process's concern; this type only carries them to the call boundary.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NotifyConfig {
    /// Substring the target channel name must contain.
    pub name_contains: String,

    /// Message body to deliver to the matched channel.
    pub message: String,
}

impl NotifyConfig {
    /// Both knobs populated.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name_contains.is_empty() && !self.message.is_empty()
    }

    /// Case-sensitive substring predicate over channel names.
    #[must_use]
    pub fn matcher(&self) -> impl Fn(&str) -> bool + use<> {
        let needle = self.name_contains.clone();
        move |name: &str| name.contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_incomplete() {
        let cfg = NotifyConfig::default();
        assert!(cfg.name_contains.is_empty());
        assert!(cfg.message.is_empty());
        assert!(!cfg.is_complete());
    }

    #[test]
    fn deserialize_from_json() {
        let json = r#"{"name_contains": "무궁", "message": "[무궁] 📦 자동 발주 테스트"}"#;
        let cfg: NotifyConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.name_contains, "무궁");
        assert_eq!(cfg.message, "[무궁] 📦 자동 발주 테스트");
        assert!(cfg.is_complete());
    }

    #[test]
    fn deserialize_fills_defaults() {
        let cfg: NotifyConfig = serde_json::from_str(r#"{"message": "hi"}"#).unwrap();
        assert_eq!(cfg.name_contains, "");
        assert!(!cfg.is_complete());
    }

    #[test]
    fn serialize_roundtrip() {
        let cfg = NotifyConfig {
            name_contains: "무궁".into(),
            message: "test".into(),
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: NotifyConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn matcher_is_substring_and_case_sensitive() {
        let cfg = NotifyConfig {
            name_contains: "무궁".into(),
            message: "test".into(),
        };
        let matches = cfg.matcher();
        assert!(matches("무궁화 모임"));
        assert!(matches("재고 무궁"));
        assert!(!matches("공지방"));

        let cfg = NotifyConfig {
            name_contains: "Orders".into(),
            message: "test".into(),
        };
        let matches = cfg.matcher();
        assert!(matches("Orders — west"));
        assert!(!matches("orders — west"));
    }
}
