use paralex::application::ports::ChatClientError;
use paralex::infrastructure::llm::SamplingPolicy;

fn patterns(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn given_no_deny_patterns_when_checking_then_sampling_is_allowed() {
    let policy = SamplingPolicy::new(false, &[]).unwrap();
    assert!(policy.allows("gpt-4o"));
}

#[test]
fn given_matching_deny_pattern_when_checking_then_sampling_is_denied() {
    let policy = SamplingPolicy::new(false, &patterns(&["^o[0-9]", "reasoning"])).unwrap();

    assert!(!policy.allows("o3-mini"));
    assert!(!policy.allows("legal-reasoning-preview"));
    assert!(policy.allows("gpt-4o"));
}

#[test]
fn given_mixed_case_deployment_when_checking_then_matching_is_case_insensitive() {
    let policy = SamplingPolicy::new(false, &patterns(&["^o[0-9]"])).unwrap();
    assert!(!policy.allows("O3-Mini"));
}

#[test]
fn given_disabled_policy_when_checking_then_nothing_is_allowed() {
    let policy = SamplingPolicy::new(true, &[]).unwrap();
    assert!(!policy.allows("gpt-4o"));
}

#[test]
fn given_invalid_pattern_when_building_then_configuration_error_is_returned() {
    let result = SamplingPolicy::new(false, &patterns(&["[unclosed"]));
    assert!(matches!(result, Err(ChatClientError::Configuration(_))));
}
