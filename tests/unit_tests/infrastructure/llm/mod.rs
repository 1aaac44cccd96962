mod sampling_policy_test;
