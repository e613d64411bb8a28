use pvsr_config::AppConfig;

#[test]
fn load_config_from_env() {
    // Rust 2024 中 set_var 需要显式标注 unsafe（测试进程内可控）。
    unsafe {
        std::env::set_var("PVSR_HTTP_ADDR", "127.0.0.1:8091");
        std::env::set_var("PVSR_STRICT_CHARACTERISTICS", "on");
        std::env::set_var("PVSR_MAX_RECORDS_PER_SAVE", "100");
    }

    let config = AppConfig::from_env().expect("config");
    assert_eq!(config.http_addr, "127.0.0.1:8091");
    assert!(config.strict_characteristics);
    assert_eq!(config.max_records_per_save, 100);
}
