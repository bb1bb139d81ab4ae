use indexmap::IndexSet;

/// 规范化类名列表
///
/// 功能：
/// 1. 合并所有输入，按空白拆分
/// 2. 去除空字符串
/// 3. 去重
/// 4. 保持首次出现的顺序（输出顺序 = 提取顺序）
pub fn normalize_classes<S: AsRef<str>>(classes: &[S]) -> Vec<String> {
    let mut unique_classes = IndexSet::new();

    for class_str in classes {
        for token in class_str.as_ref().split_whitespace() {
            unique_classes.insert(token.to_string());
        }
    }

    unique_classes.into_iter().collect()
}
