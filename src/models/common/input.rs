use serde::{Deserialize, Serialize};

/// 表单数值输入
///
/// 表单框里填的数值既可能以 JSON 数字也可能以字符串提交，
/// 转换失败留给业务层按校验错误处理，而不是在反序列化阶段直接拒绝。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberInput {
    Number(f64),
    Text(String),
}

impl NumberInput {
    /// 解析为整数，带小数部分的数字视为无效
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            NumberInput::Number(n) if n.fract() == 0.0 && n.is_finite() => Some(*n as i64),
            NumberInput::Number(_) => None,
            NumberInput::Text(s) => s.trim().parse::<i64>().ok(),
        }
    }

    /// 解析为有限浮点数
    pub fn as_float(&self) -> Option<f64> {
        match self {
            NumberInput::Number(n) => Some(*n),
            NumberInput::Text(s) => s.trim().parse::<f64>().ok(),
        }
        .filter(|n| n.is_finite())
    }
}

impl From<f64> for NumberInput {
    fn from(value: f64) -> Self {
        NumberInput::Number(value)
    }
}

impl From<&str> for NumberInput {
    fn from(value: &str) -> Self {
        NumberInput::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_number_or_string() {
        let n: NumberInput = serde_json::from_str("21").unwrap();
        assert_eq!(n.as_integer(), Some(21));
        let s: NumberInput = serde_json::from_str("\" 21 \"").unwrap();
        assert_eq!(s.as_integer(), Some(21));
    }

    #[test]
    fn test_integer_rejects_fraction_and_text() {
        assert_eq!(NumberInput::from(20.5).as_integer(), None);
        assert_eq!(NumberInput::from("twenty").as_integer(), None);
    }

    #[test]
    fn test_float_parsing() {
        assert_eq!(NumberInput::from("88.5").as_float(), Some(88.5));
        assert_eq!(NumberInput::from("NaN").as_float(), None);
        assert_eq!(NumberInput::from("abc").as_float(), None);
    }
}
