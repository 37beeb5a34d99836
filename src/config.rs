/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 待导出测试文件（.json / .toml）所在目录
    pub test_folder: String,
    /// 导出答案文件的目录
    pub output_folder: String,
    /// 同时编译的测试数量
    pub max_concurrent_tests: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            test_folder: "tests_input".to_string(),
            output_folder: "output_answers".to_string(),
            max_concurrent_tests: 8,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            test_folder: std::env::var("TEST_FOLDER").unwrap_or(default.test_folder),
            output_folder: std::env::var("OUTPUT_FOLDER").unwrap_or(default.output_folder),
            max_concurrent_tests: std::env::var("MAX_CONCURRENT_TESTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(default.max_concurrent_tests),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        }
    }
}
