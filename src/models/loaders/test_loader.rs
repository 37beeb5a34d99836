use crate::error::{AppError, AppResult, FileError, ParseError};
use crate::models::question::Test;
use crate::models::report::Submission;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tokio::fs;

/// 支持的数据文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DataFormat {
    Json,
    Toml,
}

fn detect_format(path: &Path) -> Option<DataFormat> {
    match path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase())
        .as_deref()
    {
        Some("json") => Some(DataFormat::Json),
        Some("toml") => Some(DataFormat::Toml),
        _ => None,
    }
}

/// 读取并按扩展名解析 JSON / TOML 文件
async fn read_data_file<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let display = path.display().to_string();
    let format = detect_format(path).ok_or_else(|| ParseError::UnsupportedFormat {
        path: display.clone(),
    })?;

    if !path.exists() {
        return Err(FileError::NotFound { path: display }.into());
    }

    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(&display, e))?;

    match format {
        DataFormat::Json => {
            serde_json::from_str(&content).map_err(|e| AppError::json_parse_failed(&display, e))
        }
        DataFormat::Toml => {
            toml::from_str(&content).map_err(|e| AppError::toml_parse_failed(&display, e))
        }
    }
}

/// 从 JSON / TOML 文件加载一套测试
pub async fn load_test(path: &Path) -> AppResult<Test> {
    let test: Test = read_data_file(path).await?;
    Ok(test.with_file_path(path.to_string_lossy().to_string()))
}

/// 加载学生提交
pub async fn load_submission(path: &Path) -> AppResult<Submission> {
    read_data_file(path).await
}

/// 从文件夹中加载所有测试文件
///
/// 单个文件解析失败只记录警告，不中断整个目录的加载。结果按文件名排序。
pub async fn load_all_tests(folder_path: &str) -> AppResult<Vec<Test>> {
    let folder = PathBuf::from(folder_path);

    if !folder.exists() {
        return Err(FileError::DirectoryNotFound {
            path: folder_path.to_string(),
        }
        .into());
    }

    let mut paths = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .map_err(|e| AppError::file_read_failed(folder_path, e))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| AppError::file_read_failed(folder_path, e))?
    {
        let path = entry.path();
        if detect_format(&path).is_some() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut tests = Vec::new();
    for path in paths {
        tracing::info!(
            "正在加载: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );

        match load_test(&path).await {
            Ok(test) => {
                tracing::info!(
                    "成功加载 {} 个 Section, {} 道题目",
                    test.sections.len(),
                    test.question_total()
                );
                tests.push(test);
            }
            Err(e) => {
                tracing::warn!("加载文件失败 {}: {}", path.display(), e);
            }
        }
    }

    Ok(tests)
}
