use super::*;

#[test]
fn exit_codes_documented() {
    assert_eq!(EXIT_SUCCESS, 0);
    assert_eq!(EXIT_RULES_FAILED, 1);
    assert_eq!(EXIT_CONFIG_ERROR, 2);
}

#[test]
fn verdict_maps_to_exit_codes() {
    assert_eq!(engine::Verdict::Pass.exit_code(), EXIT_SUCCESS);
    assert_eq!(engine::Verdict::Fail.exit_code(), EXIT_RULES_FAILED);
}
