/// 从 HTML 源码中提取 class="..." 属性里的类名
///
/// 使用简单的状态机解析，避免引入正则依赖。
/// 支持双引号和单引号，`=` 两侧允许空白。
/// 返回按出现顺序排列的类名（不去重）。
pub fn extract_classes(source: &str) -> Vec<String> {
    let mut classes = Vec::new();
    for value in class_attr_values(source) {
        classes.extend(value.split_whitespace().map(str::to_string));
    }
    classes
}

/// 按出现顺序返回每个 class 属性的原始值
pub fn class_attr_values(source: &str) -> Vec<&str> {
    let bytes = source.as_bytes();
    let len = bytes.len();
    let mut values = Vec::new();
    let mut i = 0;

    while i < len {
        if !matches_class_attr(bytes, i) {
            i += 1;
            continue;
        }

        // 跳过 "class"
        i += 5;

        // 跳过可选空白
        while i < len && bytes[i].is_ascii_whitespace() {
            i += 1;
        }

        // 期望 '='
        if i >= len || bytes[i] != b'=' {
            continue;
        }
        i += 1;

        while i < len && bytes[i].is_ascii_whitespace() {
            i += 1;
        }

        // 期望引号
        if i >= len || (bytes[i] != b'"' && bytes[i] != b'\'') {
            continue;
        }
        let quote = bytes[i];
        i += 1;
        let value_start = i;

        // 查找匹配的闭合引号
        while i < len && bytes[i] != quote {
            i += 1;
        }

        // 未闭合的引号，丢弃
        if i >= len {
            break;
        }

        values.push(&source[value_start..i]);
        i += 1; // 跳过闭合引号
    }

    values
}

/// 检查位置 i 是否为 class 属性开头
/// 匹配 "class" 后面跟空白或 '='（区别于 className 等）
fn matches_class_attr(bytes: &[u8], i: usize) -> bool {
    let len = bytes.len();

    // 检查前面的字符确保是属性开始位置（空白或 <）
    if i > 0 && !bytes[i - 1].is_ascii_whitespace() && bytes[i - 1] != b'<' {
        return false;
    }

    if i + 5 > len || &bytes[i..i + 5] != b"class" {
        return false;
    }

    // class 后面必须是空白或 '='
    if i + 5 < len {
        let next = bytes[i + 5];
        return next == b'=' || next.is_ascii_whitespace();
    }

    false
}
