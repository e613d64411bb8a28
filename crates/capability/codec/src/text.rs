//! 文本处理辅助函数
//!
//! 解码端的容错全部集中在这里：ASCII 大小写无关匹配、小数分隔符
//! 归一、单位字形归一。字节级匹配只对 ASCII 针串成立，保证切片
//! 永远落在 UTF-8 边界上。

/// 在 haystack 中查找 ASCII 针串（大小写无关），返回字节偏移。
///
/// 针串必须是纯 ASCII；匹配位置因此总是合法的 UTF-8 边界。
pub fn find_ascii_ci(haystack: &str, needle: &str) -> Option<usize> {
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}

/// 判断 value 是否以 label（ASCII，大小写无关）开头，
/// 后随可选空白与冒号；是则返回冒号后的值部分。
pub fn strip_label_prefix<'a>(clause: &'a str, label: &str) -> Option<&'a str> {
    let bytes = clause.as_bytes();
    let needle = label.as_bytes();
    if bytes.len() < needle.len() || !bytes[..needle.len()].eq_ignore_ascii_case(needle) {
        return None;
    }
    let rest = clause[needle.len()..].trim_start();
    rest.strip_prefix(':').map(str::trim)
}

/// 小数分隔符归一：`,` -> `.`。
pub fn normalize_decimal(value: &str) -> String {
    value.replace(',', ".")
}

/// 裸数值判定（容忍逗号小数分隔符）。
pub fn is_bare_number(value: &str) -> bool {
    let normalized = normalize_decimal(value.trim());
    !normalized.is_empty() && normalized.parse::<f64>().is_ok()
}

/// 单位字形归一。
///
/// 历史数据里的平方毫米出现过三种拼写：正确的 `mm²`、ASCII 退化的
/// `mm2`、以及 UTF-8 被按 Latin-1 二次解码产生的 `mmÂ²`。
/// 统一归到 `mm²`。
pub fn normalize_units(value: &str) -> String {
    value.replace("Â²", "²").replace("mm2", "mm²")
}

/// 若 value 以 unit 结尾且去掉后剩余裸数值，返回剥离后的数值文本。
///
/// ASCII 单位按大小写无关比较；非 ASCII 单位（`°`、`mm²`、`Ω`）按
/// 字节精确比较。
pub fn strip_unit_suffix(value: &str, unit: &str) -> Option<String> {
    let trimmed = value.trim();
    let stripped = if unit.is_ascii() {
        let bytes = trimmed.as_bytes();
        let needle = unit.as_bytes();
        if bytes.len() > needle.len()
            && bytes[bytes.len() - needle.len()..].eq_ignore_ascii_case(needle)
        {
            Some(&trimmed[..trimmed.len() - unit.len()])
        } else {
            None
        }
    } else {
        trimmed.strip_suffix(unit)
    }?;
    let candidate = stripped.trim_end();
    if is_bare_number(candidate) {
        Some(candidate.to_string())
    } else {
        None
    }
}

/// 折叠连续空格（复合子句剥除括号段后留下的缝隙）。
pub fn collapse_spaces(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut last_space = false;
    for ch in value.trim().chars() {
        if ch == ' ' {
            if !last_space {
                out.push(ch);
            }
            last_space = true;
        } else {
            out.push(ch);
            last_space = false;
        }
    }
    out
}
